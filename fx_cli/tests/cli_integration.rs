//! Integration tests for the fixture CLI binary
//!
//! These tests run the compiled binary and check its output and exit status.

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fx_cli"))
        .args(args)
        .env_remove("FIXTURE_TEAMS")
        .env_remove("FIXTURE_NAMES")
        .env_remove("FIXTURE_FORMAT")
        .env_remove("FIXTURE_OUTPUT")
        .env_remove("FIXTURE_DOUBLE_ROUND")
        .env_remove("FIXTURE_BALANCE")
        .env_remove("FIXTURE_BYE_LABEL")
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run fx_cli")
}

#[test]
fn test_help_exits_cleanly() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("USAGE:"));
}

#[test]
fn test_csv_to_stdout() {
    let output = run_cli(&["--teams", "4", "--format", "csv"]);
    assert!(output.status.success());
    assert!(output.stdout.starts_with(b"\xEF\xBB\xBFRonda,Mesa,Local,Visita,Nota\r\n"));

    // Header plus 6 matches
    let text = String::from_utf8_lossy(&output.stdout);
    assert_eq!(text.lines().count(), 7);
}

#[test]
fn test_names_define_team_count() {
    let output = run_cli(&["--names", "Tigres, Leones, Águilas", "--format", "table"]);
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Águilas"));
    assert!(text.contains("DESCANSA"));
}

#[test]
fn test_too_few_teams_fails() {
    let output = run_cli(&["--teams", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("At least 2 participants are required"));
}

#[test]
fn test_config_errors_are_logged() {
    let output = run_cli(&["--names", "A, B, A"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let logged = stderr
        .lines()
        .find(|line| line.contains("ERROR"))
        .expect("no error log line");
    assert!(logged.contains("Duplicate name: A"));
}

#[test]
fn test_name_count_mismatch_fails() {
    let output = run_cli(&["--teams", "4", "--names", "A,B"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Custom names must be exactly 4, got 2"));
}

#[test]
fn test_html_into_directory() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_str().unwrap();
    let output = run_cli(&["--teams", "5", "--double", "--format", "html", "--out", out]);
    assert!(output.status.success());

    let written = std::fs::read_to_string(dir.path().join("briscas_fixture_5_ida_vuelta.html"))
        .expect("HTML file should be written");
    assert!(written.contains("Fixture Brisca (5 equipos)"));
}
