use crate::cli::support::interviewer;
use predicates::prelude::*;

#[test]
fn test_verbose_logs_to_stderr() {
    interviewer()
        .args(["--verbose", "tracks"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_log_json_format() {
    let output = interviewer()
        .args(["--log-level", "debug", "--log-json", "tracks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.contains("parse_args"))
        .expect("parse_args event");
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "DEBUG");
}

#[test]
fn test_default_level_is_quiet() {
    interviewer()
        .arg("tracks")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_env_var_overrides_level() {
    interviewer()
        .env("INTERVIEWER_LOG", "interviewer=debug")
        .arg("tracks")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}
