//! End-to-end tests for the hoverpop binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn hoverpop() -> Command {
    let mut cmd = Command::cargo_bin("hoverpop").unwrap();
    // Keep a developer's own config out of the results
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn test_replays_hover_scenario() {
    hoverpop()
        .arg("tests/fixtures/hover_basic.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("t=300ms tip-1 open requested"))
        .stdout(predicate::str::contains("positioned at top=108 left=50"))
        .stdout(predicate::str::contains(
            "tip-1: closed, phase=idle, top=108 left=50, in portal",
        ));
}

#[test]
fn test_json_output_is_valid() {
    let output = hoverpop()
        .args(["tests/fixtures/edge_of_viewport.json", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["tooltips"][0]["placement"]["top"], 722.0);
    assert_eq!(report["tooltips"][0]["placement"]["left"], 816.0);
    assert_eq!(report["tooltips"][0]["open"], true);
}

#[test]
fn test_config_file_changes_delays() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[tooltip]\nshow_delay_ms = 500").unwrap();

    hoverpop()
        .arg("tests/fixtures/hover_basic.json")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("open requested").not());
}

#[test]
fn test_malformed_config_warns_but_runs() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[tooltip").unwrap();

    hoverpop()
        .arg("tests/fixtures/hover_basic.json")
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Invalid config file"))
        .stdout(predicate::str::contains("open requested"));
}

#[test]
fn test_missing_scenario_fails() {
    hoverpop()
        .arg("tests/fixtures/does_not_exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
