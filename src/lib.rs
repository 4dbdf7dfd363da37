//! Pagination window resolution and link building.
//!
//! [`range::resolve`] decides which page numbers are visible. Everything
//! else in the crate consumes its [`range::ResolvedRange`]: the [`pager`]
//! builds links from it, [`ui`] draws them in a terminal, and [`cli`] prints
//! them.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pager;
pub mod range;
pub mod ui;

pub use pager::{Navigation, Pager, PagerOptions};
pub use range::{resolve, PaginationInfo, ResolvedRange};
