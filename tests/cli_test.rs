use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn greetcheck() -> Command {
    let mut cmd = Command::cargo_bin("greetcheck").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_default_run_passes() {
    greetcheck()
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

#[test]
fn test_false_flag_fails() {
    greetcheck()
        .args(["--flag", "false"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected true"));
}

#[test]
fn test_blank_greeting_json_report() {
    let output = greetcheck()
        .args(["--greeting", "   ", "--json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1]["step"], "non_blank");
    assert_eq!(steps[1]["passed"], false);
}

#[test]
fn test_config_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("check.yaml");
    fs::write(&path, "greeting: Goodbye World!\n").unwrap();

    greetcheck()
        .arg("--config")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("starts_with"));
}

#[test]
fn test_bad_config_file_reports_error() {
    let dir = tempdir().unwrap();
    greetcheck()
        .arg("--config")
        .arg(dir.path().join("missing.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_help_lists_verbosity_flags() {
    greetcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-v, --verbose"))
        .stdout(predicate::str::contains("-q, --quiet"));
}
