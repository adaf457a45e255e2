//! Live-DOM side of the tab enhancement.
//!
//! `TabController` holds an explicitly injected `Document` handle and walks
//! the rendered form: it inserts the tab bar once, tags each fieldset with a
//! marker class derived from its heading, applies the initial visibility
//! plan, and wires the header click handlers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use super::rules::classify;
use super::state::{initial_active, initial_visible, visible_for};
use super::{
    Category, ACTIVE_CLASS, ACTIVE_LINK_PROPS, BAR_CLASS, BAR_STYLE, HEADING_SELECTOR,
    INACTIVE_LINK_PROPS, LINK_CLASS, LINK_STYLE, LIST_STYLE, PAGE_MARKER, SECTION_ACTIVE_CLASS,
    SECTION_SELECTOR, TAB_ATTR,
};

/// Result of one initialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Not the target admin page; no retry makes sense.
    WrongPage,
    /// The form has not rendered its fieldsets yet; worth another attempt.
    NoSections,
    /// Tab bar, classification, visibility and click wiring are in place.
    Ready,
}

pub struct TabController {
    document: Document,
}

impl TabController {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Activation gate: only the ConfiguracionSistema change page gets tabs.
    pub fn should_activate(url: &str) -> bool {
        url.contains(PAGE_MARKER)
    }

    /// Run one initialization attempt. Safe to call repeatedly: the bar is
    /// only built while absent, classification re-derives every marker from
    /// scratch, and click wiring replaces previous bindings.
    pub fn try_initialize(&self) -> InitOutcome {
        let url = self.document.url().unwrap_or_default();
        if !Self::should_activate(&url) {
            return InitOutcome::WrongPage;
        }

        let sections = collect_sections(&self.document);
        if sections.is_empty() {
            log::debug!("config tabs: no fieldsets yet");
            return InitOutcome::NoSections;
        }
        log::debug!("config tabs: {} fieldsets found", sections.len());

        let tags = self.classify_sections(&sections);
        if !self.bar_exists() {
            self.build_tab_bar(&sections[0], initial_active(&tags));
        }
        apply_visibility(&sections, &initial_visible(&tags));
        self.wire_clicks();

        log::info!("config tabs ready");
        InitOutcome::Ready
    }

    fn bar_exists(&self) -> bool {
        self.document
            .query_selector(&format!(".{BAR_CLASS}"))
            .ok()
            .flatten()
            .is_some()
    }

    /// Build the header row and insert it immediately before the first
    /// section. `active_category` gets the active flag so the header
    /// agrees with the selection of the visibility pass.
    fn build_tab_bar(&self, first_section: &Element, active_category: Category) {
        let Some(parent) = first_section.parent_node() else {
            return;
        };
        let Ok(bar) = self.document.create_element("div") else {
            return;
        };
        bar.set_class_name(BAR_CLASS);
        let _ = bar.set_attribute("style", BAR_STYLE);

        let mut items = String::new();
        for category in Category::ALL {
            let active = if category == active_category {
                " active"
            } else {
                ""
            };
            items.push_str(&format!(
                "<li style=\"margin: 0;\"><a href=\"#\" class=\"{LINK_CLASS}{active}\" \
                 {TAB_ATTR}=\"{id}\" style=\"{LINK_STYLE}\">{icon} {label}</a></li>",
                id = category.id(),
                icon = category.icon(),
                label = category.label(),
            ));
        }
        bar.set_inner_html(&format!("<ul style=\"{LIST_STYLE}\">{items}</ul>"));

        let anchor: &Node = first_section.as_ref();
        let _ = parent.insert_before(&bar, Some(anchor));
        log::debug!("config tabs: bar inserted");
    }

    /// Tag every section with the marker class for its heading's category.
    /// All previous markers are cleared first so re-runs stay a pure
    /// function of the current heading text.
    fn classify_sections(&self, sections: &[Element]) -> Vec<Option<Category>> {
        sections
            .iter()
            .map(|section| {
                let classes = section.class_list();
                for category in Category::ALL {
                    let _ = classes.remove_1(category.marker_class());
                }
                let _ = classes.remove_1(SECTION_ACTIVE_CLASS);

                let heading = section
                    .query_selector(HEADING_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|h| h.text_content())
                    .unwrap_or_default();
                let tag = classify(&heading);
                match tag {
                    Some(category) => {
                        let _ = classes.add_1(category.marker_class());
                        log::debug!(
                            "config tabs: fieldset '{}' -> {}",
                            heading.trim(),
                            category.id()
                        );
                    }
                    None => log::debug!("config tabs: fieldset '{}' untagged", heading.trim()),
                }
                tag
            })
            .collect()
    }

    /// (Re)bind the click handler on every header link. Assigning the
    /// `onclick` property replaces whatever a previous initialization run
    /// installed, so repeated runs never stack bindings.
    fn wire_clicks(&self) {
        let Ok(links) = self.document.query_selector_all(&format!("a.{LINK_CLASS}")) else {
            return;
        };
        for i in 0..links.length() {
            let Some(link) = links.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let document = self.document.clone();
            let clicked = link.clone();
            let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                event.prevent_default();
                let Some(category) = clicked
                    .get_attribute(TAB_ATTR)
                    .and_then(|id| Category::from_id(&id))
                else {
                    return;
                };
                log::debug!("config tabs: click on '{}'", category.id());
                select_tab(&document, &clicked, category);
            });
            link.set_onclick(Some(handler.as_ref().unchecked_ref()));
            // Released to the JS side; lives for the page lifetime.
            handler.forget();
        }
    }
}

/// All section elements in document order.
fn collect_sections(document: &Document) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(SECTION_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i).and_then(|n| n.dyn_into::<Element>().ok()))
        .collect()
}

/// Read a section's category tag back from its marker class.
fn section_tag(section: &Element) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|c| section.class_list().contains(c.marker_class()))
}

/// Apply a visibility plan: inline `display` plus the active marker class.
fn apply_visibility(sections: &[Element], visible: &[bool]) {
    for (section, show) in sections.iter().zip(visible) {
        let display = if *show { "block" } else { "none" };
        if let Some(el) = section.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property("display", display);
        }
        if *show {
            let _ = section.class_list().add_1(SECTION_ACTIVE_CLASS);
        } else {
            let _ = section.class_list().remove_1(SECTION_ACTIVE_CLASS);
        }
    }
}

/// Click handler body: move the active header treatment to `clicked`, then
/// show exactly the sections tagged with `category`.
fn select_tab(document: &Document, clicked: &HtmlElement, category: Category) {
    if let Ok(links) = document.query_selector_all(&format!("a.{LINK_CLASS}")) {
        for i in 0..links.length() {
            let Some(link) = links.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
            set_style_props(&link, INACTIVE_LINK_PROPS);
        }
    }
    let _ = clicked.class_list().add_1(ACTIVE_CLASS);
    set_style_props(clicked, ACTIVE_LINK_PROPS);

    let sections = collect_sections(document);
    let tags: Vec<Option<Category>> = sections.iter().map(section_tag).collect();
    let visible = visible_for(&tags, category);
    if !visible.iter().any(|v| *v) {
        log::debug!("config tabs: no sections tagged '{}'", category.id());
    }
    apply_visibility(&sections, &visible);
}

fn set_style_props(el: &HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}
