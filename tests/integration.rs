// Integration tests for the strengths CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes, stdout/stderr output, and side effects.
//
// Prerequisites: tempfile, assert_cmd, predicates (dev-dependencies).

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the strengths binary.
fn strengths() -> Command {
    Command::cargo_bin("strengths").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    strengths()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("strengths"));
}

#[test]
fn cli_help_flag() {
    strengths()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("self-assessment"));
}

#[test]
fn rate_requires_all_positional_args() {
    strengths()
        .args(["rate", "preferences", "s1_research_qual_1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rate_rejects_value_out_of_range() {
    strengths()
        .args([
            "rate",
            "preferences",
            "s1_research_qual_1",
            "interest",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("5"));
}

#[test]
fn rate_rejects_unknown_section() {
    strengths()
        .args(["rate", "hobbies", "s1_research_qual_1", "interest", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn status_category_requires_section() {
    strengths()
        .args(["status", "--category", "s1_research"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--section"));
}

#[test]
fn import_requires_file() {
    strengths()
        .arg("import")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    strengths()
        .args(["--quiet", "-v", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
