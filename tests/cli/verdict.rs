use crate::cli::support::interviewer;
use predicates::prelude::*;

#[test]
fn test_verdict_against_track_rubric() {
    interviewer()
        .args([
            "verdict",
            "--track",
            "frontend",
            "--score",
            "technical-depth=3",
            "--score",
            "performance-accessibility=3",
            "--score",
            "architecture=3",
            "--score",
            "communication=2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict: Strong Hire"))
        .stdout(predicate::str::contains("Score:   11/12 (92%)"));
}

#[test]
fn test_verdict_red_flag_caps_at_strong_maybe() {
    interviewer()
        .args([
            "verdict",
            "--track",
            "frontend",
            "--score",
            "technical-depth=3",
            "--score",
            "performance-accessibility=3",
            "--score",
            "architecture=3",
            "--score",
            "communication=3",
            "--flag",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verdict: Strong Maybe"))
        .stdout(predicate::str::contains("Red flags identified"));
}

#[test]
fn test_verdict_without_track_uses_default_max() {
    let output = interviewer()
        .args(["--format", "json", "verdict", "--score", "a=3", "--score", "b=3", "--score", "c=3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["max_score"], 12);
    assert_eq!(json["total_score"], 9);
    assert_eq!(json["verdict"], "Hire");
    assert!(json["track"].is_null());
}

#[test]
fn test_verdict_unknown_criterion() {
    interviewer()
        .args(["verdict", "--track", "backend", "--score", "charisma=3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown criterion: charisma"));
}

#[test]
fn test_verdict_unknown_red_flag() {
    interviewer()
        .args(["verdict", "--track", "backend", "--flag", "Bad hair"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown red flag"));
}

#[test]
fn test_verdict_score_out_of_range() {
    interviewer()
        .args(["verdict", "--score", "communication=4"])
        .assert()
        .code(2);
}

#[test]
fn test_verdict_records() {
    interviewer()
        .args(["--format", "records", "verdict", "--track", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H interviewer=1 records=1 mode=verdict verdict=\"No Hire\" total=0 max=18",
        ));
}
