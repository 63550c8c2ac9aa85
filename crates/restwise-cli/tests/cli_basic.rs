//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. They run
//! against the dev data directory (RESTWISE_ENV=dev).

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "restwise-cli", "--"])
        .args(args)
        .env("RESTWISE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_estimate_json() {
    let (stdout, _stderr, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "2", "--json",
    ]);
    assert_eq!(code, 0, "estimate failed");

    let alert: serde_json::Value = serde_json::from_str(&stdout).expect("alert JSON");
    let title = alert["title"].as_str().unwrap();
    assert!(
        title == "Your ideal bedtime is..." || title == "Error",
        "unexpected title: {title}"
    );
    assert!(alert["message"].as_str().is_some());
}

#[test]
fn test_estimate_human_output_has_title_and_message() {
    let (stdout, _stderr, code) = run_cli(&["estimate", "--wake", "06:30"]);
    assert_eq!(code, 0, "estimate with defaults failed");
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_estimate_rejects_out_of_range_sleep() {
    let (_stdout, stderr, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "12.5", "--coffee", "2",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("sleep hours"));
}

#[test]
fn test_estimate_rejects_off_step_sleep() {
    let (_stdout, stderr, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8.1", "--coffee", "2",
    ]);
    assert_ne!(code, 0);
    assert!(stderr.contains("multiple"));
}

#[test]
fn test_estimate_rejects_out_of_range_coffee() {
    let (_stdout, _stderr, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "21",
    ]);
    assert_ne!(code, 0);
}

#[test]
fn test_estimate_rejects_bad_wake_time() {
    let (_stdout, stderr, code) = run_cli(&["estimate", "--wake", "25:99", "--sleep", "8"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("wake time"));
}

#[test]
fn test_config_list_is_json() {
    let (stdout, _stderr, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");

    let config: serde_json::Value = serde_json::from_str(&stdout).expect("config JSON");
    assert!(config.get("clock").is_some());
    assert!(config.get("defaults").is_some());
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_stdout, stderr, code) = run_cli(&["config", "get", "no.such.key"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_model_info_json() {
    let (stdout, _stderr, code) = run_cli(&["model", "info", "--json"]);
    assert_eq!(code, 0, "model info failed");

    let info: serde_json::Value = serde_json::from_str(&stdout).expect("model info JSON");
    assert!(info.get("source").is_some());
    assert_eq!(
        info["artifact"]["feature_names"]
            .as_array()
            .map(|a| a.len()),
        Some(3)
    );
}

#[test]
fn test_model_check_rejects_missing_file() {
    let (_stdout, stderr, code) = run_cli(&["model", "check", "/nonexistent/artifact.json"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("invalid artifact"));
}
