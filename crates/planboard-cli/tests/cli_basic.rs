//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a board snapshot in
//! a temporary directory and verify outputs.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Run a CLI command against the given board file and return
/// (stdout, stderr, exit code).
fn run_cli(board: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "planboard-cli", "--quiet", "--"])
        .args(["--board", board.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(board: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(board, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

/// Extract the generated id from a "Thing created: title (id)" line.
fn created_id(stdout: &str) -> String {
    let open = stdout.rfind('(').expect("no id in output");
    let close = stdout.rfind(')').expect("no id in output");
    stdout[open + 1..close].to_string()
}

#[test]
fn board_workflow_end_to_end() {
    let dir = TempDir::new().unwrap();
    let board = dir.path().join("board.json");

    let stdout = run_cli_success(&board, &["column", "add", "Main stage"]);
    let column_id = created_id(&stdout);

    run_cli_success(&board, &["participant", "add", "Ana"]);
    run_cli_success(&board, &["participant", "add", "Joe"]);

    run_cli_success(
        &board,
        &[
            "task", "add", "Sound check",
            "--column", &column_id,
            "--start", "09:00",
            "--end", "10:00",
            "--participants", "Ana,Joe",
        ],
    );

    // Overlapping slot conflicts for both names, touching slot for none.
    let stdout = run_cli_success(&board, &["check", "--start", "09:30", "--end", "10:30"]);
    assert!(stdout.contains("Ana"), "expected Ana in: {stdout}");
    assert!(stdout.contains("Joe"), "expected Joe in: {stdout}");

    let stdout = run_cli_success(&board, &["check", "--start", "10:00", "--end", "11:00"]);
    assert!(stdout.contains("No conflicts"), "got: {stdout}");

    // Stats report the 60 minute assignment for both participants.
    let stdout = run_cli_success(&board, &["stats", "--json"]);
    let loads: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let loads = loads.as_array().unwrap();
    assert_eq!(loads.len(), 2);
    assert_eq!(loads[0]["total_minutes"], 60);

    run_cli_success(&board, &["validate"]);
}

#[test]
fn sub_segment_task_is_rejected_on_add() {
    let dir = TempDir::new().unwrap();
    let board = dir.path().join("board.json");

    let stdout = run_cli_success(&board, &["column", "add", "Stage"]);
    let column_id = created_id(&stdout);

    // Default config is 6 segments/hour: a 5 minute task is too short.
    let (_, stderr, code) = run_cli(
        &board,
        &[
            "task", "add", "Blip",
            "--column", &column_id,
            "--start", "09:00",
            "--end", "09:05",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("minimum segment duration"), "got: {stderr}");
}

#[test]
fn participant_removal_strips_assignments() {
    let dir = TempDir::new().unwrap();
    let board = dir.path().join("board.json");

    let stdout = run_cli_success(&board, &["column", "add", "Stage"]);
    let column_id = created_id(&stdout);

    run_cli_success(
        &board,
        &[
            "task", "add", "Setup",
            "--column", &column_id,
            "--start", "09:00",
            "--end", "10:00",
            "--participants", "Ana",
        ],
    );

    run_cli_success(&board, &["participant", "remove", "Ana"]);

    let stdout = run_cli_success(&board, &["task", "list", "--json"]);
    let tasks: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(tasks[0]["participants"].as_array().unwrap().len(), 0);

    let stdout = run_cli_success(&board, &["participant", "list"]);
    assert!(stdout.contains("No participants"), "got: {stdout}");
}

#[test]
fn duplicate_participant_add_fails() {
    let dir = TempDir::new().unwrap();
    let board = dir.path().join("board.json");

    run_cli_success(&board, &["participant", "add", "Ana"]);
    let (_, stderr, code) = run_cli(&board, &["participant", "add", "Ana"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("already exists"), "got: {stderr}");
}

#[test]
fn column_delete_removes_its_tasks() {
    let dir = TempDir::new().unwrap();
    let board = dir.path().join("board.json");

    let stdout = run_cli_success(&board, &["column", "add", "Stage"]);
    let column_id = created_id(&stdout);

    run_cli_success(
        &board,
        &[
            "task", "add", "Setup",
            "--column", &column_id,
            "--start", "09:00",
            "--end", "10:00",
        ],
    );

    run_cli_success(&board, &["column", "delete", &column_id]);

    let stdout = run_cli_success(&board, &["task", "list"]);
    assert!(stdout.contains("No tasks"), "got: {stdout}");
}
