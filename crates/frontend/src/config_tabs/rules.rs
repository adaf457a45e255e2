//! Heading match rules.
//!
//! Classification is a pure function of the heading text and the rule order
//! below. Rules are evaluated top-down, first match wins; order is
//! load-bearing ("Información de la Empresa" must hit the empresa rule
//! before the generic información rule can see it).

use super::Category;

type HeadingPredicate = fn(&str) -> bool;

/// Ordered `(predicate, category)` pairs over the trimmed heading text.
pub const MATCH_RULES: &[(HeadingPredicate, Category)] = &[
    (heading_is_empresa, Category::Empresa),
    (heading_is_pagos, Category::Pagos),
    (heading_is_colores, Category::Colores),
    (heading_is_preview, Category::Preview),
    (heading_is_info, Category::Info),
];

fn heading_is_empresa(heading: &str) -> bool {
    heading.contains("Información de la Empresa")
}

fn heading_is_pagos(heading: &str) -> bool {
    heading.contains("Configuración de Pagos")
}

fn heading_is_colores(heading: &str) -> bool {
    heading.contains("Colores")
}

fn heading_is_preview(heading: &str) -> bool {
    heading.contains("Vista previa")
        || heading.contains("Vista Previa")
        || heading.to_lowercase().contains("preview")
}

fn heading_is_info(heading: &str) -> bool {
    heading.contains("Información") && !heading.contains("Empresa")
}

/// Assign a category to a section heading, or `None` when no rule matches
/// (such a section stays hidden and is unreachable through the tabs, but is
/// never removed).
pub fn classify(heading: &str) -> Option<Category> {
    let heading = heading.trim();
    MATCH_RULES
        .iter()
        .find(|(matches, _)| matches(heading))
        .map(|&(_, category)| category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_known_heading() {
        assert_eq!(
            classify("Información de la Empresa"),
            Some(Category::Empresa)
        );
        assert_eq!(classify("Configuración de Pagos"), Some(Category::Pagos));
        assert_eq!(classify("Colores del Sistema"), Some(Category::Colores));
        assert_eq!(classify("Vista Previa"), Some(Category::Preview));
        assert_eq!(classify("Vista previa del sitio"), Some(Category::Preview));
        assert_eq!(classify("Información Adicional"), Some(Category::Info));
    }

    #[test]
    fn empresa_wins_over_generic_info() {
        // Both contain "Información"; rule order keeps this out of `info`.
        assert_eq!(
            classify("Información de la Empresa (datos fiscales)"),
            Some(Category::Empresa)
        );
    }

    #[test]
    fn info_rule_excludes_empresa_mentions() {
        assert_eq!(classify("Información sobre la Empresa matriz"), None);
    }

    #[test]
    fn preview_match_is_case_insensitive_for_english() {
        assert_eq!(classify("Theme PREVIEW"), Some(Category::Preview));
        assert_eq!(classify("preview"), Some(Category::Preview));
    }

    #[test]
    fn colores_wins_over_preview_on_mixed_heading() {
        // First-match-wins, not best-match: the colores rule sits above
        // the preview rule.
        assert_eq!(
            classify("Vista Previa de Colores"),
            Some(Category::Colores)
        );
    }

    #[test]
    fn heading_is_trimmed_before_matching() {
        assert_eq!(
            classify("   Configuración de Pagos \n"),
            Some(Category::Pagos)
        );
    }

    #[test]
    fn unmatched_heading_gets_no_category() {
        assert_eq!(classify("Otra Cosa"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn classification_is_deterministic() {
        for heading in ["Colores del Sistema", "Algo Más", "Vista Previa"] {
            assert_eq!(classify(heading), classify(heading));
        }
    }
}
