use crate::cli::support::interviewer;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_init_creates_workspace() {
    let dir = tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized interviewer workspace at"));

    assert!(dir.path().join(".interviewer/config.toml").is_file());
    assert!(dir.path().join(".interviewer/exports").is_dir());
}

#[test]
fn test_init_idempotent_keeps_config() {
    let dir = tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let config = dir.path().join(".interviewer/config.toml");
    let edited = fs::read_to_string(&config)
        .unwrap()
        .replace("language = \"en\"", "language = \"ru\"");
    fs::write(&config, &edited).unwrap();

    interviewer()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&config).unwrap(), edited);
    assert!(edited.contains("language = \"ru\""));
}

#[test]
fn test_init_json_status() {
    let dir = tempdir().unwrap();

    let output = interviewer()
        .current_dir(dir.path())
        .args(["--format", "json", "init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["workspace"]
        .as_str()
        .unwrap()
        .ends_with(".interviewer"));
}

#[test]
fn test_init_at_explicit_workspace_path() {
    let dir = tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["--workspace", "team-ws", "init"])
        .assert()
        .success();

    assert!(dir.path().join("team-ws/config.toml").is_file());
}

#[test]
fn test_init_quiet_prints_nothing() {
    let dir = tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .args(["--quiet", "init"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_init_writes_default_config() {
    let dir = tempdir().unwrap();

    interviewer()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let content = fs::read_to_string(dir.path().join(".interviewer/config.toml")).unwrap();
    let config: toml::Value = toml::from_str(&content).unwrap();
    assert_eq!(config["version"].as_integer(), Some(1));
    assert_eq!(config["language"].as_str(), Some("en"));
    assert_eq!(config["duration_label"].as_str(), Some("60 min"));
    assert_eq!(config["handoff_ttl_minutes"].as_integer(), Some(1440));
}
