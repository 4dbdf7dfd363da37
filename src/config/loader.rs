use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Why a pager config could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read pager config '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in pager config '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `pagenav/config.toml` under the platform config dir, or under `.`
    /// when the platform has none.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pagenav")
            .join("config.toml")
    }

    /// Pager options from [`Config::config_path`]. No file means defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads, parses and validates the config at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The navigation landmark has an accessible name
    /// - Shortcut labels are non-empty while shortcuts are shown
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pager = &self.pager;

        if pager.aria.nav.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "pager.aria.nav must not be empty".to_string(),
            });
        }

        if pager.show_navigation {
            let labels = &pager.labels;
            let shortcuts = [
                ("first", &labels.first),
                ("prev", &labels.prev),
                ("next", &labels.next),
                ("last", &labels.last),
            ];
            if let Some((name, _)) = shortcuts.iter().find(|(_, text)| text.is_empty()) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "pager.labels.{} must not be empty while show_navigation is enabled",
                        name
                    ),
                });
            }
        }

        Ok(())
    }
}
