use crate::cli::support::{finish_backend_interview, interviewer, workspace};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_summary_without_interview_prints_hint() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No finished interview to summarize"));
}

#[test]
fn test_summary_consumes_handoff() {
    let dir = workspace();
    finish_backend_interview(&dir);

    interviewer()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview Summary: BACKEND"))
        .stdout(predicate::str::contains("Verdict: Hire"))
        .stdout(predicate::str::contains("Score:   13/18 (72%)"))
        .stdout(predicate::str::contains("Explained EXPLAIN ANALYZE output in detail"))
        .stdout(predicate::str::contains("Strong NestJS background"))
        .stdout(predicate::str::contains("No red flags identified."));

    interviewer()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No finished interview to summarize"));
}

#[test]
fn test_summary_keep_leaves_handoff() {
    let dir = workspace();
    finish_backend_interview(&dir);

    for _ in 0..2 {
        interviewer()
            .current_dir(dir.path())
            .args(["summary", "--keep"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Verdict: Hire"));
    }
    assert!(dir.path().join(".interviewer/handoff.json").is_file());
}

#[test]
fn test_summary_export_writes_document() {
    let dir = workspace();
    finish_backend_interview(&dir);

    interviewer()
        .current_dir(dir.path())
        .args(["summary", "--export", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let files: Vec<_> = fs::read_dir(dir.path().join("out"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(files.len(), 1);
    let name = files[0].file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("interview-summary-backend-"));
    assert!(name.ends_with(".md"));
}

#[test]
fn test_summary_json() {
    let dir = workspace();
    finish_backend_interview(&dir);

    let output = interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["track"], "backend");
    assert_eq!(json["verdict"], "Hire");
    assert_eq!(json["total_score"], 13);
    assert_eq!(json["has_red_flags"], false);
    assert_eq!(json["criteria"].as_array().unwrap().len(), 6);
    assert!(json.get("export").is_none());
}

#[test]
fn test_summary_json_empty_status() {
    let dir = workspace();

    let output = interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "empty");
}

#[test]
fn test_summary_discards_malformed_handoff() {
    let dir = workspace();
    fs::write(dir.path().join(".interviewer/handoff.json"), "{\"track\": 7}").unwrap();

    interviewer()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No finished interview to summarize"));

    assert!(!dir.path().join(".interviewer/handoff.json").exists());
}

#[test]
fn test_summary_failed_export_keeps_handoff() {
    let dir = workspace();
    finish_backend_interview(&dir);
    fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["summary", "--export", "-o", "blocker/sub"])
        .assert()
        .code(1);

    assert!(dir.path().join(".interviewer/handoff.json").is_file());

    interviewer()
        .current_dir(dir.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Verdict:** Hire"));
    assert!(!dir.path().join(".interviewer/handoff.json").exists());
}
