//! Tabbed grouping for the ConfiguracionSistema admin form.
//!
//! The admin renderer emits the form as a flat run of fieldsets. This module
//! injects a tab bar in front of them, tags each fieldset with a category
//! derived from its heading text, and toggles inline display styles so that
//! one category group is visible at a time.
//!
//! Contains:
//! - `rules` - ordered heading match rules (single source of truth for
//!   classification)
//! - `state` - pure selection planning and the retry schedule
//! - `controller` - `TabController`, the live-DOM side
//! - `bootstrap` - readiness polling and the module entry path

pub mod bootstrap;
pub mod controller;
pub mod rules;
pub mod state;

/// URL path fragment identifying the target admin page.
pub const PAGE_MARKER: &str = "configuracionsistema";

/// Fieldsets the admin renderer emits for this form carry one of these two
/// classes; the comma union returns each element once even when both
/// classes co-occur.
pub const SECTION_SELECTOR: &str = "fieldset.module, fieldset.collapse";

/// A section's heading lives in its first descendant `h2`.
pub const HEADING_SELECTOR: &str = "h2";

/// Class on the injected tab-bar container. Its presence is the idempotency
/// key: a second initialization run finds it and skips reconstruction.
pub const BAR_CLASS: &str = "config-admin-tabs";

/// Class on each clickable tab-header link.
pub const LINK_CLASS: &str = "config-tab-link";

/// Class marking the active tab-header link.
pub const ACTIVE_CLASS: &str = "active";

/// Class marking the currently shown section(s).
pub const SECTION_ACTIVE_CLASS: &str = "config-tab-active";

/// Attribute on a tab-header link holding its category id.
pub const TAB_ATTR: &str = "data-tab";

/// One of the five fixed logical groupings a section can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Empresa,
    Pagos,
    Colores,
    Preview,
    Info,
}

impl Category {
    /// All categories in tab-bar display order.
    pub const ALL: [Category; 5] = [
        Category::Empresa,
        Category::Pagos,
        Category::Colores,
        Category::Preview,
        Category::Info,
    ];

    /// Stable id used in `data-tab` attributes and marker classes.
    pub fn id(self) -> &'static str {
        match self {
            Category::Empresa => "empresa",
            Category::Pagos => "pagos",
            Category::Colores => "colores",
            Category::Preview => "preview",
            Category::Info => "info",
        }
    }

    /// Tab-header display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Empresa => "Información de la Empresa",
            Category::Pagos => "Configuración de Pagos",
            Category::Colores => "Colores del Sistema",
            Category::Preview => "Vista Previa",
            Category::Info => "Información",
        }
    }

    /// Tab-header icon glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Empresa => "🏢",
            Category::Pagos => "💳",
            Category::Colores => "🎨",
            Category::Preview => "👁️",
            Category::Info => "ℹ️",
        }
    }

    /// Marker class recording this tag on a section element.
    pub fn marker_class(self) -> &'static str {
        match self {
            Category::Empresa => "config-tab-empresa",
            Category::Pagos => "config-tab-pagos",
            Category::Colores => "config-tab-colores",
            Category::Preview => "config-tab-preview",
            Category::Info => "config-tab-info",
        }
    }

    /// Reverse of [`Category::id`].
    pub fn from_id(id: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.id() == id)
    }
}

// Inline styles lifted from the original admin theme. The host page ships no
// stylesheet for the bar, so everything rides on the elements themselves.

pub const BAR_STYLE: &str =
    "border-bottom: 2px solid #ddd; margin: 20px 0 0 0; padding: 0; background: #fff;";

pub const LIST_STYLE: &str =
    "list-style: none; margin: 0; padding: 0; display: flex; gap: 5px; padding-left: 10px;";

pub const LINK_STYLE: &str = "display: block; padding: 12px 20px; background: #f5f5f5; \
     border: 1px solid #ddd; border-bottom: none; text-decoration: none; color: #666; \
     font-weight: 500; border-radius: 4px 4px 0 0; cursor: pointer;";

/// Visual treatment of the active header: white chip fused to the content
/// area below (white bottom border, nudged 1px down over the bar border).
pub const ACTIVE_LINK_PROPS: &[(&str, &str)] = &[
    ("background", "white"),
    ("color", "#417690"),
    ("border-bottom-color", "white"),
    ("position", "relative"),
    ("top", "1px"),
];

/// Reset applied to every header before the clicked one is re-activated.
pub const INACTIVE_LINK_PROPS: &[(&str, &str)] = &[
    ("background", "#f5f5f5"),
    ("color", "#666"),
    ("border-bottom-color", "#ddd"),
];
