//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs. Dates are pinned with `--date` so runs
//! are deterministic.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "habitgrove-cli", "--"])
        .args(args)
        .env("HABITGROVE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Enroll a fresh habit and return its id.
fn add_habit(title: &str) -> String {
    let (stdout, stderr, code) = run_cli(&["habit", "add", title]);
    assert_eq!(code, 0, "habit add failed: {stderr}");
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Habit created: "))
        .expect("habit id in output")
        .trim()
        .to_string()
}

#[test]
fn test_habit_add_and_list() {
    let id = add_habit("Read a bedtime story");
    let (stdout, _, code) = run_cli(&["habit", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains(&id));
    assert!(stdout.contains("Read a bedtime story"));

    let (stdout, _, code) = run_cli(&["habit", "remove", &id]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Habit removed"));
}

#[test]
fn test_checkin_is_idempotent_per_day() {
    let id = add_habit("Pack lunch together");

    let (stdout, _, code) = run_cli(&["checkin", &id, "--date", "2024-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("day 1 of 21"), "got: {stdout}");

    let (stdout, _, code) = run_cli(&["checkin", &id, "--date", "2024-01-01"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Already checked in"), "got: {stdout}");

    run_cli(&["habit", "remove", &id]);
}

#[test]
fn test_status_reports_broken_streak() {
    let id = add_habit("Evening walk");
    for date in ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"] {
        let (_, stderr, code) = run_cli(&["checkin", &id, "--date", date]);
        assert_eq!(code, 0, "checkin failed: {stderr}");
    }

    let (stdout, _, code) = run_cli(&["status", &id, "--date", "2024-01-05"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"isBroken\": false"), "got: {stdout}");

    let (stdout, _, code) = run_cli(&["status", &id, "--date", "2024-01-06"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("\"isBroken\": true"), "got: {stdout}");
    assert!(stdout.contains("\"canRevive\": true"), "got: {stdout}");

    run_cli(&["habit", "remove", &id]);
}

#[test]
fn test_revive_restores_broken_streak() {
    let id = add_habit("Screen-free dinner");
    for date in ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"] {
        run_cli(&["checkin", &id, "--date", date]);
    }

    let (stdout, _, code) = run_cli(&["revive", &id, "--date", "2024-01-06"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Revived 2024-01-05"), "got: {stdout}");

    // The revive is single-use.
    let (stdout, _, code) = run_cli(&["revive", &id, "--date", "2024-01-08"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Revive not available"), "got: {stdout}");

    run_cli(&["habit", "remove", &id]);
}

#[test]
fn test_unknown_habit_fails() {
    let (_, stderr, code) = run_cli(&["checkin", "no-such-habit", "--date", "2024-01-01"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown habit"), "got: {stderr}");
}

#[test]
fn test_stats_runs() {
    let (_, _, code) = run_cli(&["stats"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(&["stats", "--json"]);
    assert_eq!(code, 0);
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn test_config_list() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("reminders"));

    let (stdout, _, code) = run_cli(&["config", "get", "reminders.enabled"]);
    assert_eq!(code, 0);
    assert!(!stdout.trim().is_empty());
}
