//! Integration tests for top-level CLI behavior.

mod common;

use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    epi_report!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("countries"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_flag() {
    epi_report!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epi-report"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    epi_report!().assert().code(2);
}

#[test]
fn invalid_format_is_rejected() {
    epi_report!()
        .args(["generate", "data.csv", "--format", "pdf"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn invalid_as_of_is_rejected() {
    epi_report!()
        .args(["generate", "data.csv", "--as-of", "yesterday"])
        .assert()
        .failure();
}
