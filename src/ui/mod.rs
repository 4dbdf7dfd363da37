//! Terminal rendering of pager output.

pub mod pager_bar;
pub mod theme;

pub use pager_bar::PagerBar;
