//! CLI surface tests
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests
//!
//! The benchmark takes no parameters; only the help/version surface and
//! the `--debug` diagnostics toggle exist. None of these start a run.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("fsync-tester").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("fsync-tester").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fsync-tester"));
}

#[test]
fn test_cli_rejects_unknown_flag() {
    let mut cmd = Command::cargo_bin("fsync-tester").unwrap();
    cmd.arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_cli_rejects_positional_args() {
    let mut cmd = Command::cargo_bin("fsync-tester").unwrap();
    cmd.arg("some-file").assert().failure();
}
