use crate::cli::support::interviewer;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_tracks_human_without_workspace() {
    let dir = tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .arg("tracks")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available tracks:"))
        .stdout(predicate::str::contains("frontend"))
        .stdout(predicate::str::contains("backend"))
        .stdout(predicate::str::contains("fullstack"));
}

#[test]
fn test_tracks_json_counts() {
    let output = interviewer()
        .args(["--format", "json", "tracks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tracks = json.as_array().unwrap();
    assert_eq!(tracks.len(), 3);

    let backend = tracks.iter().find(|t| t["id"] == "backend").unwrap();
    assert_eq!(backend["blocks"], 5);
    assert_eq!(backend["criteria"], 6);
    assert_eq!(backend["red_flags"], 6);

    let frontend = tracks.iter().find(|t| t["id"] == "frontend").unwrap();
    assert_eq!(frontend["criteria"], 4);
}

#[test]
fn test_tracks_records() {
    interviewer()
        .args(["--format", "records", "tracks"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H interviewer=1 records=1 mode=tracks count=3",
        ))
        .stdout(predicate::str::contains("T backend "));
}
