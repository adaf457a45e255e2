//! Pure selection planning and the retry schedule.
//!
//! Everything here operates on plain category-tag vectors so the visibility
//! rules are testable without a DOM; `controller` maps the results back onto
//! the live elements.

use super::Category;

/// Delay table for initialization attempts. One attempt per entry; the
/// loop stops early once fieldsets are found.
pub const RETRY_DELAYS_MS: [u32; 4] = [100, 500, 1000, 2000];

/// Which sections to show right after initialization: every
/// `empresa`-tagged section when at least one exists, otherwise the first
/// section in document order (even untagged), otherwise nothing.
pub fn initial_visible(tags: &[Option<Category>]) -> Vec<bool> {
    if tags.iter().any(|t| *t == Some(Category::Empresa)) {
        tags.iter().map(|t| *t == Some(Category::Empresa)).collect()
    } else {
        (0..tags.len()).map(|i| i == 0).collect()
    }
}

/// Which header starts out active: `empresa` when such a section exists,
/// otherwise the category of the first (fallback-shown) section. An
/// untagged fallback imposes nothing, so the `empresa` header keeps its
/// default in that case.
pub fn initial_active(tags: &[Option<Category>]) -> Category {
    if tags.iter().any(|t| *t == Some(Category::Empresa)) {
        return Category::Empresa;
    }
    tags.first().copied().flatten().unwrap_or(Category::Empresa)
}

/// Which sections to show after a click on `selected`: all sections tagged
/// with that category. An all-false result is the observable empty-tab
/// state, not an error.
pub fn visible_for(tags: &[Option<Category>], selected: Category) -> Vec<bool> {
    tags.iter().map(|t| *t == Some(selected)).collect()
}

/// Bounded, self-terminating attempt schedule over [`RETRY_DELAYS_MS`].
pub struct RetrySchedule {
    next: usize,
}

impl RetrySchedule {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Delay before the next attempt, or `None` once the budget is spent.
    pub fn next_delay(&mut self) -> Option<u32> {
        let delay = RETRY_DELAYS_MS.get(self.next).copied()?;
        self.next += 1;
        Some(delay)
    }
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_defaults_to_empresa_when_present() {
        let tags = vec![Some(Category::Empresa), Some(Category::Pagos)];
        assert_eq!(initial_visible(&tags), vec![true, false]);
    }

    #[test]
    fn init_shows_all_empresa_sections() {
        let tags = vec![
            Some(Category::Pagos),
            Some(Category::Empresa),
            Some(Category::Empresa),
        ];
        assert_eq!(initial_visible(&tags), vec![false, true, true]);
    }

    #[test]
    fn init_falls_back_to_first_section() {
        // Untagged sections still yield one visible section.
        let tags = vec![None, None];
        assert_eq!(initial_visible(&tags), vec![true, false]);

        let tags = vec![Some(Category::Pagos), Some(Category::Colores)];
        assert_eq!(initial_visible(&tags), vec![true, false]);
    }

    #[test]
    fn init_with_no_sections_shows_nothing() {
        assert_eq!(initial_visible(&[]), Vec::<bool>::new());
    }

    #[test]
    fn active_header_matches_the_shown_section() {
        // Default case: empresa section present.
        let tags = vec![Some(Category::Pagos), Some(Category::Empresa)];
        assert_eq!(initial_active(&tags), Category::Empresa);

        // Fallback shows a tagged first section; its header must be the
        // active one so the shown section's category and the active
        // header agree.
        let tags = vec![Some(Category::Pagos), Some(Category::Colores)];
        assert_eq!(initial_active(&tags), Category::Pagos);

        // Untagged fallback constrains nothing; empresa keeps the default.
        let tags = vec![None, Some(Category::Info)];
        assert_eq!(initial_active(&tags), Category::Empresa);
        assert_eq!(initial_active(&[]), Category::Empresa);
    }

    #[test]
    fn click_shows_exactly_the_selected_category() {
        let tags = vec![
            Some(Category::Empresa),
            Some(Category::Pagos),
            None,
            Some(Category::Pagos),
        ];
        assert_eq!(
            visible_for(&tags, Category::Pagos),
            vec![false, true, false, true]
        );
    }

    #[test]
    fn click_on_unpopulated_category_shows_nothing() {
        let tags = vec![Some(Category::Pagos)];
        assert_eq!(visible_for(&tags, Category::Colores), vec![false]);
    }

    #[test]
    fn retry_schedule_is_bounded_and_increasing() {
        let mut schedule = RetrySchedule::new();
        let mut delays = Vec::new();
        while let Some(d) = schedule.next_delay() {
            delays.push(d);
        }
        assert_eq!(delays, RETRY_DELAYS_MS.to_vec());
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
        // Budget stays spent.
        assert_eq!(schedule.next_delay(), None);
    }
}
