//! Basic CLI E2E tests.
//!
//! Each test runs the binary against an isolated data directory so runs
//! never touch real task data or each other.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against `data_dir` and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_taskline"))
        .env("TASKLINE_DATA_DIR", data_dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI failed ({code}): {args:?}\nstderr: {stderr}");
    stdout
}

#[test]
fn test_add_and_list_tasks() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["task", "add-todo", "read book"]);
    run_cli_success(
        dir.path(),
        &[
            "task",
            "add-event",
            "standup",
            "02/05/2030 0900",
            "02/05/2030 0930",
            "--priority",
            "low",
        ],
    );

    let listed = run_cli_success(dir.path(), &["task", "list"]);
    assert!(listed.contains("1.[T]"));
    assert!(listed.contains("read book"));
    assert!(listed.contains("2.[E]"));
    assert!(listed.contains("standup"));
}

#[test]
fn test_list_json_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(dir.path(), &["task", "add-deadline", "report", "03/05/2030 1700"]);

    let json = run_cli_success(dir.path(), &["task", "list", "--json"]);
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(parsed["tasks"][0]["description"], "report");
}

#[test]
fn test_schedule_with_empty_list_is_free_anytime() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_cli_success(dir.path(), &["schedule", "find", "2"]);
    assert!(out.contains("You can schedule this task anytime."));
}

#[test]
fn test_schedule_rejects_non_positive_duration() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["schedule", "find", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("positive"));
}

#[test]
fn test_schedule_rejects_malformed_deadline() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["schedule", "find", "2", "--by", "tomorrow"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("dd/MM/yyyy"));
}

#[test]
fn test_mark_done_and_view() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(
        dir.path(),
        &[
            "task",
            "add-period",
            "laundry",
            "02/05/2030 0800",
            "02/05/2030 2000",
        ],
    );
    let done = run_cli_success(dir.path(), &["task", "done", "1"]);
    assert!(done.contains("\u{2713}"));

    let view = run_cli_success(dir.path(), &["view", "on", "02/05/2030"]);
    assert!(view.contains("laundry"));

    let empty = run_cli_success(dir.path(), &["view", "on", "09/05/2030"]);
    assert!(empty.contains("no tasks scheduled"));
}

#[test]
fn test_export_ics() {
    let dir = tempfile::tempdir().unwrap();
    run_cli_success(
        dir.path(),
        &[
            "task",
            "add-event",
            "standup",
            "02/05/2030 0900",
            "02/05/2030 0930",
        ],
    );
    let out_path = dir.path().join("out.ics");
    let out = run_cli_success(
        dir.path(),
        &["export", "ics", "--output", out_path.to_str().unwrap()],
    );
    assert!(out.contains("Exported 1 event(s)"));
    let text = std::fs::read_to_string(out_path).unwrap();
    assert!(text.contains("BEGIN:VEVENT"));
}
