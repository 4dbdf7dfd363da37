use serde::Serialize;

/// What a link navigates to, relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    First,
    Prev,
    Page,
    Next,
    Last,
}

impl LinkKind {
    pub fn is_shortcut(self) -> bool {
        !matches!(self, LinkKind::Page)
    }
}

/// A single navigable link, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerLink {
    pub kind: LinkKind,
    /// Target page number.
    pub page: i64,
    pub text: String,
    pub path: String,
    pub aria_label: String,
    /// True when `page` is the page being viewed.
    pub aria_current: bool,
    /// Routers should only treat the link as active on an exact path match.
    pub exact: bool,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_active_class: Option<String>,
}

/// The rendered navigation landmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub role: &'static str,
    pub aria_label: String,
    pub links: Vec<PagerLink>,
}
