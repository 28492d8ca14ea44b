// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI integration tests for `reel replay` and `reel events`

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const POST_ROLL_SCRIPT: &str = r#"# one session with a post-roll
{"name": "ready"}
{"name": "adbreaks", "data": {"type": "ad_breaks", "ad_breaks": [{"id": "post", "kind": "postroll"}]}}
{"name": "player:play"}
{"name": "player:playing"}
{"name": "player:ended"}
{"name": "adbreak:started", "data": {"type": "ad_break", "ad_break": {"id": "post", "kind": "postroll"}}}
{"name": "adbreak:ended", "data": {"type": "ad_break", "ad_break": {"id": "post", "kind": "postroll"}}}
"#;

fn write_script(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("events.jsonl");
    fs::write(&path, contents).expect("Failed to write script");
    path
}

fn reel() -> Command {
    Command::cargo_bin("reel").unwrap()
}

#[test]
fn test_reel_help() {
    reel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("replay"));
}

#[test]
fn test_events_lists_inbound_catalogue() {
    reel()
        .arg("events")
        .assert()
        .success()
        .stdout(predicate::str::contains("player:timeupdate"))
        .stdout(predicate::str::contains("adbreak:ended"));
}

#[test]
fn test_events_outbound_json() {
    let output = reel()
        .args(["events", "--outbound", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert!(names.contains(&"state:ended".to_string()));
    assert!(!names.contains(&"state:change".to_string()));
}

#[test]
fn test_replay_prints_transitions_in_order() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, POST_ROLL_SCRIPT);

    let output = reel().arg("replay").arg(&script).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let events: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(
        events,
        vec![
            "state:ready",
            "state:adbreaks",
            "state:play-requested",
            "state:playing",
            "state:adbreak-started",
            "state:adbreak-ended",
            "state:ended",
        ]
    );
}

#[test]
fn test_replay_json_prints_final_snapshot() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, POST_ROLL_SCRIPT);

    let output = reel()
        .arg("replay")
        .arg(&script)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let state: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(state["ended"], true);
    assert_eq!(state["started"], false);
    assert_eq!(state["active_ad_break"], serde_json::Value::Null);
    assert_eq!(state["ad_breaks"][0]["played"], true);
}

#[test]
fn test_replay_no_autoplay_waits_for_user() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "{\"name\": \"ready\"}\n");

    reel()
        .args(["replay", "--no-autoplay"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("waiting_for_user: false -> true"));
}

#[test]
fn test_replay_config_disables_autoplay() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "{\"name\": \"ready\"}\n");
    let config = temp.path().join("reel.toml");
    fs::write(&config, "autoplay = false\n").unwrap();

    reel()
        .arg("replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("waiting_for_user: false -> true"));
}

#[test]
fn test_replay_rejects_bad_line() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "{\"name\": \"ready\"}\n{oops\n");

    reel()
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_replay_rejects_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    let script = write_script(&temp, "{\"name\": \"ready\"}\n");
    let config = temp.path().join("reel.toml");
    fs::write(&config, "autoplay_everything = true\n").unwrap();

    reel()
        .arg("replay")
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn test_replay_missing_script_fails() {
    reel()
        .args(["replay", "/nonexistent/events.jsonl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
