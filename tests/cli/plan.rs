use crate::cli::support::interviewer;
use predicates::prelude::*;

#[test]
fn test_plan_backend_human() {
    interviewer()
        .args(["plan", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Senior Backend Engineer (Node.js + NestJS)",
        ))
        .stdout(predicate::str::contains("1. Introduction [0-5 min"))
        .stdout(predicate::str::contains("tech-1  Explain how you would optimize"))
        .stdout(predicate::str::contains("Rubric (0-3 per criterion, max 18):"))
        .stdout(predicate::str::contains("Limited production experience"))
        // Prompts only appear with --details
        .stdout(predicate::str::contains("What metrics would you look at first?").not());
}

#[test]
fn test_plan_block_with_details() {
    interviewer()
        .args(["plan", "backend", "--block", "2", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Technical Depth [5-20 min"))
        .stdout(predicate::str::contains("> What metrics would you look at first?"))
        .stdout(predicate::str::contains("Expected: Should show a systematic approach"))
        .stdout(predicate::str::contains("Introduction").not())
        .stdout(predicate::str::contains("Rubric").not());
}

#[test]
fn test_plan_block_by_id() {
    interviewer()
        .args(["plan", "frontend", "--block", "performance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fe-perf-1"));
}

#[test]
fn test_plan_russian_questions() {
    interviewer()
        .args(["plan", "backend", "--block", "intro", "--lang", "ru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Расскажите о вашей недавней работе"));
}

#[test]
fn test_plan_unknown_track_exit_code_2() {
    interviewer()
        .args(["plan", "mobile"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown track"));
}

#[test]
fn test_plan_unknown_block_exit_code_2() {
    interviewer()
        .args(["plan", "backend", "--block", "9"])
        .assert()
        .code(2);
}

#[test]
fn test_plan_json_single_block() {
    let output = interviewer()
        .args(["--format", "json", "plan", "fullstack", "--block", "system-design"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["id"], "system-design");
    assert!(json["timeRange"].is_string());
    assert!(!json["questions"].as_array().unwrap().is_empty());
}

#[test]
fn test_plan_json_full() {
    let output = interviewer()
        .args(["--format", "json", "plan", "frontend"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["track"], "frontend");
    assert_eq!(json["blocks"].as_array().unwrap().len(), 5);
    assert_eq!(json["rubric"]["redFlags"][2], "Ignores accessibility");
}

#[test]
fn test_plan_records() {
    interviewer()
        .args(["--format", "records", "plan", "backend"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H interviewer=1 records=1 mode=plan track=backend blocks=5 lang=en",
        ))
        .stdout(predicate::str::contains("B 1 intro \"Introduction\""))
        .stdout(predicate::str::contains("C technical-depth \"Technical Depth\""))
        .stdout(predicate::str::contains("F 6 \"Limited production experience\""));
}
