//! Integration tests for the interviewer CLI
//!
//! These tests run the interviewer binary end to end.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

mod cli;

fn interviewer() -> Command {
    let mut cmd = cargo_bin_cmd!("interviewer");
    cmd.env_remove("INTERVIEWER_WORKSPACE")
        .env_remove("INTERVIEWER_LOG");
    cmd
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    interviewer()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: interviewer"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("export"));
}

#[test]
fn test_version_flag() {
    interviewer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("interviewer"));
}

#[test]
fn test_subcommand_help() {
    interviewer()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Run an interview session"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempdir().unwrap();
    interviewer()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("interviewer --help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    interviewer()
        .args(["--format", "yaml", "tracks"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_command_exit_code_2() {
    interviewer().arg("hire").assert().code(2);
}

#[test]
fn test_unknown_argument_json_envelope() {
    interviewer()
        .args(["--format", "json", "tracks", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""type":"usage_error""#));
}

#[test]
fn test_duplicate_format_json_envelope() {
    interviewer()
        .args(["--format", "json", "--format", "json", "tracks"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""type":"duplicate_format""#));
}

#[test]
fn test_missing_workspace_exit_code_3() {
    let dir = tempdir().unwrap();
    interviewer()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("workspace not found"));
}

#[test]
fn test_missing_workspace_json_envelope() {
    let dir = tempdir().unwrap();
    interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "export"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(r#""type":"workspace_not_found""#));
}
