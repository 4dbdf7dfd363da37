//! Turns a resolved page window into navigable links.
//!
//! ```text
//! PaginationInfo → resolve → ResolvedRange → Pager::links → Navigation
//! ```
//!
//! The pager never renders markup. It hands plain [`PagerLink`] values to
//! whichever consumer draws them (the terminal bar in [`crate::ui`], the JSON
//! output of the CLI, or a caller's own templates).

mod labels;
mod link;
mod path;

pub use labels::{fill_page, AriaLabels, Labels, LinkClasses, PAGE_PLACEHOLDER};
pub use link::{LinkKind, Navigation, PagerLink};
pub use path::{page_path, strip_page_param, unslash_end};

use serde::{Deserialize, Serialize};

use crate::range::{PaginationInfo, ResolvedRange};

/// Navigation is suppressed when fewer links than this would be shown.
pub const MIN_LINKS: usize = 2;

/// Presentation options for the pager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerOptions {
    /// Show numbered page links.
    pub show_links: bool,
    /// Show first/prev/next/last shortcuts.
    pub show_navigation: bool,
    pub labels: Labels,
    pub aria: AriaLabels,
    pub classes: LinkClasses,
}

impl Default for PagerOptions {
    fn default() -> Self {
        Self {
            show_links: true,
            show_navigation: true,
            labels: Labels::default(),
            aria: AriaLabels::default(),
            classes: LinkClasses::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pager {
    options: PagerOptions,
}

impl Pager {
    pub fn new(options: PagerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PagerOptions {
        &self.options
    }

    /// Resolve `info` and build the navigation for the route at `current_path`.
    ///
    /// `page_param` is the page number the router matched in `current_path`,
    /// if any. Returns `None` when fewer than [`MIN_LINKS`] links result.
    pub fn render(
        &self,
        info: &PaginationInfo,
        current_path: &str,
        page_param: Option<i64>,
    ) -> Option<Navigation> {
        let range = info.resolve();
        let base_path = strip_page_param(current_path, page_param);
        let links = self.links(&range, &base_path);

        if links.len() < MIN_LINKS {
            tracing::debug!(
                current = range.current,
                total = range.total,
                links = links.len(),
                "pager suppressed"
            );
            return None;
        }

        Some(Navigation {
            role: "navigation",
            aria_label: self.options.aria.nav.clone(),
            links,
        })
    }

    /// Build links for `range`, in display order.
    ///
    /// Numbered pages come first, then shortcuts are added around them:
    /// previous and first in front, next and last behind.
    pub fn links(&self, range: &ResolvedRange, base_path: &str) -> Vec<PagerLink> {
        let opts = &self.options;
        let mut links: Vec<PagerLink> = if opts.show_links {
            range
                .pages
                .iter()
                .map(|&page| self.link(range, base_path, LinkKind::Page, page, page.to_string()))
                .collect()
        } else {
            Vec::new()
        };

        if opts.show_navigation {
            let labels = &opts.labels;
            if range.has_prev() {
                let prev = self.link(
                    range,
                    base_path,
                    LinkKind::Prev,
                    range.current - 1,
                    labels.prev.clone(),
                );
                links.insert(0, prev);
            }
            if range.has_first() {
                let first = self.link(range, base_path, LinkKind::First, 1, labels.first.clone());
                links.insert(0, first);
            }
            if range.has_next() {
                links.push(self.link(
                    range,
                    base_path,
                    LinkKind::Next,
                    range.current + 1,
                    labels.next.clone(),
                ));
            }
            if range.has_last() {
                links.push(self.link(
                    range,
                    base_path,
                    LinkKind::Last,
                    range.total,
                    labels.last.clone(),
                ));
            }
        }

        links
    }

    fn link(
        &self,
        range: &ResolvedRange,
        base_path: &str,
        kind: LinkKind,
        page: i64,
        text: String,
    ) -> PagerLink {
        let aria = &self.options.aria;
        let classes = &self.options.classes;
        let is_current = range.is_current(page);

        let template = if is_current {
            &aria.current
        } else {
            match kind {
                LinkKind::First => &aria.first,
                LinkKind::Prev => &aria.prev,
                LinkKind::Page => &aria.link,
                LinkKind::Next => &aria.next,
                LinkKind::Last => &aria.last,
            }
        };

        PagerLink {
            kind,
            page,
            text,
            path: page_path(base_path, page),
            aria_label: fill_page(template, page),
            aria_current: is_current,
            exact: true,
            class: classes.link.clone(),
            active_class: classes.active.clone(),
            exact_active_class: classes.exact_active.clone(),
        }
    }
}
