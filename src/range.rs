//! Page window resolution.
//!
//! Given the page being viewed and the total number of pages, decide which
//! page numbers fit in the visible window. Everything that turns the result
//! into links or markup lives in [`crate::pager`] and [`crate::ui`].

use serde::{Deserialize, Serialize};

/// Maximum number of numbered page links shown at once.
pub const WINDOW_LENGTH: i64 = 10;

/// Half the window, rounded up. Used to centre the window on the current page.
pub const WINDOW_OFFSET: i64 = (WINDOW_LENGTH + 1) / 2;

/// Caller-supplied pagination state.
///
/// The resolver does not check that `current_page <= total_pages`; see
/// [`resolve`] for how out-of-range input behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    #[serde(default = "default_page")]
    pub current_page: i64,
    #[serde(default = "default_page")]
    pub total_pages: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self {
            current_page: default_page(),
            total_pages: default_page(),
        }
    }
}

impl PaginationInfo {
    pub fn new(current_page: i64, total_pages: i64) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    /// Resolve the visible window for this state.
    pub fn resolve(&self) -> ResolvedRange {
        resolve(self.current_page, self.total_pages)
    }
}

/// The visible page window.
///
/// `start` is exclusive and `end` inclusive, both zero-based, so `pages`
/// always holds `start + 1 ..= end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRange {
    pub current: i64,
    pub total: i64,
    pub start: i64,
    pub end: i64,
    pub pages: Vec<i64>,
}

impl ResolvedRange {
    /// A "first" shortcut is useful when page 1 is outside the window.
    pub fn has_first(&self) -> bool {
        self.start > 0
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// A "last" shortcut is useful when the final page is outside the window.
    pub fn has_last(&self) -> bool {
        self.end < self.total
    }

    pub fn is_current(&self, page: i64) -> bool {
        self.current == page
    }
}

/// Which rule placed the window. Only reported through tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Whole,
    NearStart,
    NearEnd,
    Centered,
}

/// Compute the visible page window.
///
/// Rules are tried in order and the first match wins:
///
/// 1. `total <= WINDOW_LENGTH`: every page is shown.
/// 2. `current <= WINDOW_OFFSET`: the window is pinned to page 1.
/// 3. `current >= total - WINDOW_OFFSET`: the window is pinned to the last page.
/// 4. Otherwise the window is centred on `current`.
///
/// This never fails and never clamps. A `total` of zero or less yields no
/// pages. A `current` outside `1..=total` is passed through as-is, which makes
/// the shortcut predicates on [`ResolvedRange`] answer for that bogus page.
/// Callers that need clamping do it first.
pub fn resolve(current: i64, total: i64) -> ResolvedRange {
    let (placement, start, end) = if total <= WINDOW_LENGTH {
        (Placement::Whole, 0, total)
    } else if current <= WINDOW_OFFSET {
        (Placement::NearStart, 0, WINDOW_LENGTH)
    } else if current >= total - WINDOW_OFFSET {
        // total > WINDOW_LENGTH here, so the subtraction cannot overflow.
        (Placement::NearEnd, total - WINDOW_LENGTH, total)
    } else {
        (
            Placement::Centered,
            current - WINDOW_OFFSET,
            current + WINDOW_OFFSET,
        )
    };

    // Empty when end <= start, e.g. a non-positive total.
    let pages: Vec<i64> = (start + 1..=end).collect();

    tracing::trace!(current, total, start, end, ?placement, "resolved page window");

    ResolvedRange {
        current,
        total,
        start,
        end,
        pages,
    }
}
