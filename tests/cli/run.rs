use crate::cli::support::{interviewer, workspace, BACKEND_SESSION};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_run_finish_hands_off_to_workspace() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin(BACKEND_SESSION)
        .assert()
        .success()
        .stdout(predicate::str::contains("Started Senior Backend"))
        .stdout(predicate::str::contains("Block 2/5: Technical Depth"))
        .stdout(predicate::str::contains("Noted."))
        .stdout(predicate::str::contains("technical-depth = 3 (running total 3/18)"))
        .stdout(predicate::str::contains("Interview finished: Hire (13/18)."));

    assert!(dir.path().join(".interviewer/handoff.json").is_file());
}

#[test]
fn test_run_requires_workspace() {
    let dir = tempfile::tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin("finish\n")
        .assert()
        .code(3);
}

#[test]
fn test_run_summary_flag_prints_in_process() {
    let dir = tempfile::tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "frontend", "--summary"])
        .write_stdin("score technical-depth 3\nfinish\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview Summary: FRONTEND"))
        .stdout(predicate::str::contains("Verdict: No Hire"));

    assert!(!dir.path().join(".interviewer").exists());
}

#[test]
fn test_run_end_of_input_abandons() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin("score communication 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview abandoned; nothing was saved."))
        .stderr(predicate::str::contains("input ended before `finish`"));

    assert!(!dir.path().join(".interviewer/handoff.json").exists());
}

#[test]
fn test_run_quit_abandons() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin("quit\nfinish\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interview abandoned"))
        .stdout(predicate::str::contains("Interview finished").not());

    assert!(!dir.path().join(".interviewer/handoff.json").exists());
}

#[test]
fn test_run_errors_do_not_end_session() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin(
            "score charisma 3\n\
             score communication 5\n\
             ask design-1\n\
             block 9\n\
             dance\n\
             finish\n",
        )
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown criterion: charisma"))
        .stderr(predicate::str::contains("score must be between 0 and 3"))
        .stderr(predicate::str::contains("does not belong to block"))
        .stderr(predicate::str::contains(
            "block 9 is out of range (blocks are numbered 1 to 5)",
        ))
        .stderr(predicate::str::contains("unknown command `dance`"))
        .stdout(predicate::str::contains("Interview finished: No Hire (0/18)."));
}

#[test]
fn test_run_choose_track_in_session() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .arg("run")
        .write_stdin("finish\ntrack mobile\ntrack fullstack\nfinish\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Choose a track with `track <id>`:"))
        .stdout(predicate::str::contains("Unknown track `mobile`. Choose one of:"))
        .stdout(predicate::str::contains("Started Senior Fullstack"))
        .stderr(predicate::str::contains("unstarted"));
}

#[test]
fn test_run_next_stops_at_last_block() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin("block closing\nnext\nblocks\nfinish\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Block 5/5: Questions & Closing"))
        .stdout(predicate::str::contains(
            "Already at the last block. Use `finish` to end the interview.",
        ));
}

#[test]
fn test_run_red_flag_caps_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("session.txt");
    fs::write(
        &script,
        "# perfect scores, one red flag\n\
         score technical-depth 3\n\
         score system-design 3\n\
         score problem-solving 3\n\
         score communication 3\n\
         score leadership 3\n\
         score growth-mindset 3\n\
         flag ego issues / talks over others\n\
         flag 1\n\
         flag 1 off\n\
         finish\n",
    )
    .unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend", "--summary", "--script", "session.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red flag raised: Ego issues / talks over others"))
        .stdout(predicate::str::contains(
            "Red flag cleared: Poor communication / hard to follow",
        ))
        .stdout(predicate::str::contains("Verdict: Strong Maybe"))
        .stdout(predicate::str::contains("Score:   18/18 (100%)"))
        .stdout(predicate::str::contains("Red flags identified"));
}

#[test]
fn test_run_json_prints_outcome_only() {
    let dir = workspace();

    let output = interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "run", "backend"])
        .write_stdin(BACKEND_SESSION)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "finished");
    assert_eq!(json["track"], "backend");
    assert_eq!(json["verdict"], "Hire");
    assert_eq!(json["total_score"], 13);
    assert_eq!(json["max_score"], 18);
}

#[test]
fn test_run_missing_script_fails() {
    let dir = workspace();

    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend", "--script", "nope.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open"));
}
