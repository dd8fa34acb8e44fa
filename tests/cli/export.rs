use crate::cli::support::{finish_backend_interview, interviewer, workspace};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_export_writes_to_workspace_exports() {
    let dir = workspace();
    finish_backend_interview(&dir);

    let output = interviewer()
        .current_dir(dir.path())
        .args(["--quiet", "export"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    assert!(path.contains("exports"));
    assert!(path.contains("interview-summary-backend-"));

    let markdown = fs::read_to_string(&path).unwrap();
    assert!(markdown.starts_with("# Interview Summary\n"));
    assert!(markdown.contains("- **Track:** BACKEND"));
    assert!(markdown.contains("**Verdict:** Hire"));
    assert!(markdown.contains("**Score:** 13/18"));
    assert!(markdown.contains(
        "### Technical Depth\n\n**Score:** 3/3\n\n**Evidence:** Explained EXPLAIN ANALYZE output in detail"
    ));
    assert!(markdown.contains("## Questions Covered"));
    assert!(!markdown.contains("**Red Flags Identified**"));
    assert!(markdown.ends_with('\n') && !markdown.ends_with("\n\n"));

    // The hand-off is consumed
    assert!(!dir.path().join(".interviewer/handoff.json").exists());
}

#[test]
fn test_export_stdout() {
    let dir = workspace();
    finish_backend_interview(&dir);

    interviewer()
        .current_dir(dir.path())
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Interview Summary"))
        .stdout(predicate::str::contains("## Final Decision"));

    let exports = fs::read_dir(dir.path().join(".interviewer/exports")).unwrap();
    assert_eq!(exports.count(), 0);
}

#[test]
fn test_export_without_interview() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No finished interview to summarize"));
}

#[test]
fn test_export_output_conflicts_with_stdout() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["export", "--stdout", "-o", "out"])
        .assert()
        .code(2);
}

#[test]
fn test_export_json_status() {
    let dir = workspace();
    finish_backend_interview(&dir);

    let output = interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "export", "-o", "reports"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["verdict"], "Hire");
    assert!(json["path"].as_str().unwrap().contains("reports"));
    assert!(dir.path().join("reports").is_dir());
}

#[test]
fn test_export_conflict_json_is_usage_error() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "export", "--stdout", "-o", "out"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""type":"usage_error""#));
}

#[test]
fn test_failed_export_keeps_handoff() {
    let dir = workspace();
    finish_backend_interview(&dir);
    fs::write(dir.path().join("blocker"), "not a directory").unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["export", "-o", "blocker/sub"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to create"));

    assert!(dir.path().join(".interviewer/handoff.json").is_file());

    interviewer()
        .current_dir(dir.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview Summary: BACKEND"))
        .stdout(predicate::str::contains("Verdict: Hire"));
}
