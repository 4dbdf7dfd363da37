//! Tests that run the `pagenav` binary.

mod common;

use common::temp_config;
use std::process::Command;

/// Runs the binary against an empty config so the user's own file is ignored.
fn pagenav_cmd() -> (tempfile::TempDir, Command) {
    let (dir, path) = temp_config("");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pagenav"));
    cmd.arg("--config").arg(path).env_remove("PAGENAV_LOG");
    (dir, cmd)
}

#[test]
fn test_help_lists_options() {
    let output = Command::new(env!("CARGO_BIN_EXE_pagenav"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--current"));
    assert!(stdout.contains("--total"));
    assert!(stdout.contains("--format"));
}

#[test]
fn test_text_output() {
    let (_dir, mut cmd) = pagenav_cmd();
    let output = cmd
        .args(["--current", "1", "--total", "20", "--base-path", "/blog"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    // pages 1..=10, next, last
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "*1\t/blog\tCurrent page. Page 1");
    assert_eq!(lines[11], "»\t/blog/20\tGo to last page. Page 20");
}

#[test]
fn test_single_page_prints_nothing() {
    let (_dir, mut cmd) = pagenav_cmd();
    let output = cmd.output().expect("Failed to execute command");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_json_output() {
    let (_dir, mut cmd) = pagenav_cmd();
    let output = cmd
        .args(["--current", "10", "--total", "20", "--format", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let links = value["links"].as_array().expect("links array");
    assert_eq!(links.len(), 14);
    assert_eq!(links[0]["kind"], "first");
    assert_eq!(links[2]["page"], 6);
}

#[test]
fn test_range_only_output() {
    let (_dir, mut cmd) = pagenav_cmd();
    let output = cmd
        .args(["--current", "3", "--total", "5", "--range-only"])
        .output()
        .expect("Failed to execute command");

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["current"], 3);
    assert_eq!(value["pages"], serde_json::json!([1, 2, 3, 4, 5]));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[pager.aria]\nnav = \"\"\n");
    let output = Command::new(env!("CARGO_BIN_EXE_pagenav"))
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"), "got: {}", stderr);
}

#[test]
fn test_invalid_format_is_rejected() {
    let (_dir, mut cmd) = pagenav_cmd();
    let output = cmd
        .args(["--format", "html"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_current_at_i64_max_resolves_to_last_window() {
    let (_dir, mut cmd) = pagenav_cmd();
    let output = cmd
        .args(["--current", &i64::MAX.to_string(), "--total", "20", "--range-only"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["start"], 10);
    assert_eq!(value["end"], 20);
}
