//! Label text and class names for pager links.
//!
//! All of these are pass-through presentation values; none of them change
//! which pages are shown.

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the target page number in aria templates.
pub const PAGE_PLACEHOLDER: &str = "%n";

/// Visible text for the shortcut links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "«".to_string(),
            prev: "‹".to_string(),
            next: "›".to_string(),
            last: "»".to_string(),
        }
    }
}

/// Accessibility label templates.
///
/// `nav` labels the navigation landmark itself. The rest label individual
/// links and may contain [`PAGE_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AriaLabels {
    pub nav: String,
    pub link: String,
    pub first: String,
    pub current: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

impl Default for AriaLabels {
    fn default() -> Self {
        Self {
            nav: "Pagination Navigation".to_string(),
            link: "Go to page %n".to_string(),
            first: "Go to first page".to_string(),
            current: "Current page. Page %n".to_string(),
            prev: "Go to previous page. Page %n".to_string(),
            next: "Go to next page. Page %n".to_string(),
            last: "Go to last page. Page %n".to_string(),
        }
    }
}

/// CSS class names attached to every link.
///
/// `active` and `exact_active` are only forwarded when set, leaving the
/// router's own defaults in place otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkClasses {
    pub link: String,
    pub active: Option<String>,
    pub exact_active: Option<String>,
}

/// Substitute the first `%n` in `template` with `page`.
pub fn fill_page(template: &str, page: i64) -> String {
    template.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
}
