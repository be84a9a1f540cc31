//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary and verify outputs. Each run points
//! `TINNITUS_CONFIG` at a path that does not exist so host config never
//! leaks in.

use std::io::Write;
use std::process::{Command, Stdio};

fn cli(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tinnitus-cli"));
    cmd.env("TINNITUS_CONFIG", dir.path().join("missing.toml"))
        .env_remove("RUST_LOG");
    cmd
}

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    run_cli_with_input(args, "")
}

fn run_cli_with_input(args: &[&str], input: &str) -> (String, String, i32) {
    let dir = tempfile::tempdir().unwrap();
    let mut child = cli(&dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, stderr, code)
}

#[test]
fn test_tips_are_numbered() {
    let (stdout, _, code) = run_cli(&["tips"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("1. "));
    assert!(lines[9].starts_with("10. "));
}

#[test]
fn test_activities_lists_every_tab() {
    let (stdout, _, code) = run_cli(&["activities"]);
    assert_eq!(code, 0);
    for tab in ["Games", "Relax", "Care", "Settings"] {
        assert!(stdout.contains(tab), "missing tab {tab}");
    }
    assert!(stdout.contains("session meditation"));
    assert!(stdout.contains("Background Sound: White Noise"));
}

#[test]
fn test_about_mentions_emergency_help() {
    let (stdout, _, code) = run_cli(&["about"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Tinnitus Relief"));
}

#[test]
fn test_session_json_ends_finished() {
    let (stdout, _, code) = run_cli(&["session", "meditation", "--json"]);
    assert_eq!(code, 0);
    let lines: Vec<&str> = stdout.lines().collect();
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["type"], "SequenceStarted");
    let last: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
    assert_eq!(last["finished"], true);
    assert_eq!(last["running"], false);
    assert!(stdout.contains("SequenceCompleted"));
}

#[test]
fn test_session_with_tick_limit_stops_early() {
    let (stdout, _, code) = run_cli(&["session", "stretches", "--ticks", "20"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Stretch 2 of"));
    assert!(stdout.contains("Stopped at 00:10 of step 2"));
}

#[test]
fn test_session_cues_respect_no_haptics() {
    let (_, stderr, code) = run_cli(&["session", "jaw"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("[success]"));

    let (_, stderr, code) = run_cli(&["--no-haptics", "session", "jaw"]);
    assert_eq!(code, 0);
    assert!(!stderr.contains("[success]"));
}

#[test]
fn test_unknown_preset_fails() {
    let (_, stderr, code) = run_cli(&["session", "yoga"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("yoga"));
}

#[test]
fn test_breathe_json_reports_completion() {
    let (stdout, _, code) = run_cli(&["breathe", "--json"]);
    assert_eq!(code, 0);
    let event: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(event["type"], "BreathingCompleted");
    assert_eq!(event["breaths"], 5);
}

#[test]
fn test_color_plays_rounds_from_stdin() {
    let (stdout, _, code) = run_cli_with_input(&["color", "--seed", "1", "--rounds", "2"], "1\n2\n");
    assert_eq!(code, 0);
    assert_eq!(stdout.matches("Match this color:").count(), 2);
    assert!(stdout.contains("Final score:"));
}

#[test]
fn test_pattern_ends_when_input_runs_out() {
    let (stdout, _, code) = run_cli_with_input(&["pattern", "--seed", "3"], "1 1 1\n");
    assert_eq!(code, 0);
    assert!(stdout.starts_with("Watch: "));
    assert!(stdout.contains("Final score:"));
}

#[test]
fn test_pattern_reports_taps_past_the_round() {
    let (_, stderr, code) = run_cli_with_input(&["pattern", "--seed", "3"], "1 1 1 2 3\n");
    assert_eq!(code, 0);
    assert!(stderr.contains("ignoring '2 3' after the round ended"));
}

#[test]
fn test_pattern_rejects_invalid_rules() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[pattern]\ninitial_len = 0\n").unwrap();

    let output = cli(&dir)
        .args(["--config", path.to_str().unwrap(), "pattern"])
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_get_default_value() {
    let (stdout, _, code) = run_cli(&["config", "get", "routines.meditation_secs"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "300");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "nope.nothing"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));
}

#[test]
fn test_explicit_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[routines]\njaw_secs = 12\n").unwrap();

    let output = cli(&dir)
        .args(["--config", path.to_str().unwrap(), "config", "get", "routines.jaw_secs"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "12");
}
