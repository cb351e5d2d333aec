//! Integration tests for the supervisor binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_describes_the_surface() {
    let mut cmd = Command::cargo_bin("chore").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TASKS_FILE"))
        .stdout(predicate::str::contains("ARGS"));
}

#[test]
fn test_version_is_reported() {
    let mut cmd = Command::cargo_bin("chore").unwrap();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_tasks_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("chore").unwrap();

    cmd.current_dir(dir.path())
        .arg("does-not-exist/Cargo.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find a tasks manifest"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_default_probing_reports_every_candidate() {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("chore").unwrap();

    cmd.current_dir(dir.path())
        .env_remove("CHORE_TASKS_FILE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tasks/Cargo.toml"))
        .stderr(predicate::str::contains(".config/tasks/Cargo.toml"));
}
