use serde::{Deserialize, Serialize};

use crate::pager::PagerOptions;

/// Root configuration container.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Presentation options handed to the pager.
    pub pager: PagerOptions,
}
