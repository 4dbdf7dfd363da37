//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to a `config.toml` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the path is used.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Assert that `pages` is a strictly ascending run with no gaps.
pub fn assert_contiguous(pages: &[i64]) {
    for pair in pages.windows(2) {
        assert_eq!(
            pair[1],
            pair[0] + 1,
            "pages not contiguous: {:?}",
            pages
        );
    }
}

pub fn span(from: i64, to: i64) -> Vec<i64> {
    (from..=to).collect()
}
