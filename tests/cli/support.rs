use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for interviewer with a clean environment
pub fn interviewer() -> Command {
    let mut cmd = cargo_bin_cmd!("interviewer");
    cmd.env_remove("INTERVIEWER_WORKSPACE")
        .env_remove("INTERVIEWER_LOG");
    cmd
}

/// Temp directory with an initialized workspace
pub fn workspace() -> TempDir {
    let dir = tempdir().unwrap();
    interviewer()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// A backend interview that scores 13/18 with no red flags (Hire)
pub const BACKEND_SESSION: &str = "\
note Strong NestJS background
next
ask tech-1
score technical-depth 3
evidence technical-depth Explained EXPLAIN ANALYZE output in detail
score system-design 2
score problem-solving 2
score communication 3
score leadership 1
score growth-mindset 2
finish
";

/// Run a backend interview to completion, leaving it handed off
pub fn finish_backend_interview(dir: &TempDir) {
    interviewer()
        .current_dir(dir.path())
        .args(["run", "backend"])
        .write_stdin(BACKEND_SESSION)
        .assert()
        .success();
}
