//! Tests for the binary's non-interactive modes.

use std::fs;
use std::process::Command;

fn postboard_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_postboard"))
}

fn write_actions(lines: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actions.jsonl");
    fs::write(&path, lines.join("\n")).unwrap();
    (dir, path)
}

const SCENARIO: &str = r#"{"type":"SET_POSTS","payload":[{"id":1,"userId":7,"title":"A","body":"a"},{"id":2,"userId":7,"title":"B","body":"b"},{"id":3,"userId":9,"title":"C","body":"c"}]}"#;

#[test]
fn test_help_lists_modes() {
    let output = postboard_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--print"));
    assert!(stdout.contains("--replay"));
    assert!(stdout.contains("--url"));
}

#[test]
fn test_replay_prints_table_and_detail() {
    let (_dir, path) = write_actions(&[SCENARIO, r#"{"type":"SET_SELECTED_USER","payload":7}"#]);
    let output = postboard_cmd()
        .arg("--replay")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "\
User ID  Title
7        A
9        C

User 7

## A
a

## B
b
";
    assert_eq!(stdout, expected);
}

#[test]
fn test_replay_without_selection_prints_placeholder() {
    let (_dir, path) = write_actions(&[SCENARIO]);
    let output = postboard_cmd()
        .arg("--replay")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.ends_with("Please select a user to view their posts.\n"));
}

#[test]
fn test_replay_user_flag_selects() {
    let (_dir, path) = write_actions(&[SCENARIO]);
    let output = postboard_cmd()
        .arg("--replay")
        .arg(&path)
        .args(["--user", "9"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User 9"));
    assert!(stdout.contains("## C"));
}

#[test]
fn test_unknown_action_exits_with_error() {
    let (_dir, path) = write_actions(&[SCENARIO, r#"{"type":"RESET_EVERYTHING"}"#]);
    let output = postboard_cmd()
        .arg("--replay")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown action type 'RESET_EVERYTHING'"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_replay_file_exits_with_error() {
    let output = postboard_cmd()
        .args(["--replay", "/nonexistent/postboard/actions.jsonl"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read actions"));
}

#[test]
fn test_invalid_url_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = postboard_cmd()
        .arg("--config")
        .arg(dir.path().join("none.toml"))
        .args(["--print", "--url", "gopher://example"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http:// or https://"));
}
