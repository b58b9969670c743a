// Integration tests for the organizer CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument validation, exit codes and help output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to build a Command for the organizer binary with an isolated HOME.
fn organizer(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("organizer").expect("binary should exist");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_version_flag() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("organizer"));
}

#[test]
fn cli_help_flag() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python project organizer"));
}

#[test]
fn scan_without_path_or_saved_index_fails() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .current_dir(home.path())
        .arg("scan")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no scan path given"));
}

#[test]
fn scan_rejects_path_and_saved_together() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .args(["scan", "/tmp", "--saved", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn status_set_rejects_unknown_status() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .args(["status", "set", "/tmp", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown status"));
}

#[test]
fn bulk_requires_project_selector() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .args(["status", "bulk", "complete", "/tmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn bulk_rejects_both_selectors() {
    let home = TempDir::new().expect("home dir should be created");
    organizer(&home)
        .args([
            "status",
            "bulk",
            "complete",
            "/tmp",
            "--project",
            "alpha",
            "--all",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
