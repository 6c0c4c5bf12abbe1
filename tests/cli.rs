//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Run from an empty temp dir so no stray config is picked up
fn algoref_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_algoref"));
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn no_args_returns_error_not_panic() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir).assert().failure().code(2);
}

#[test]
fn classify_prints_label_and_resolution() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir)
        .args(["classify", "--no-color", "O(1)", "O(n^2 log n)", "nonsense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Best"))
        .stdout(predicate::str::contains("heuristic (quadratic)"))
        .stdout(predicate::str::contains("default"));
}

#[test]
fn classify_json_output_valid() {
    let dir = TempDir::new().unwrap();
    let output = algoref_cmd(&dir)
        .args(["classify", "--json", "  O(n)  ", "N/A"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value[0]["notation"], "O(n)");
    assert_eq!(value[0]["quality"], "fair");
    assert_eq!(value[1]["quality"], "na");
    assert_eq!(value[1]["style"]["label"], "N/A");
}

#[test]
fn classify_reads_stdin_when_no_arguments() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir)
        .args(["classify", "--no-color"])
        .write_stdin("O(n!)\n\nΘ(log n)\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Worst"))
        .stdout(predicate::str::contains("Good"));
}

#[test]
fn show_single_section() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir)
        .args(["show", "sorting-algorithms", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quicksort"))
        .stdout(predicate::str::contains("Hash Table").not());
}

#[test]
fn show_unknown_section_exit_2() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir)
        .args(["show", "recipes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown section"));
}

#[test]
fn show_json_output_valid() {
    let dir = TempDir::new().unwrap();
    let output = algoref_cmd(&dir)
        .args(["show", "data-structures", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("valid JSON");
    assert!(value["sections"]["data-structures"].is_array());
    assert!(value["notations"].as_array().map_or(false, |n| !n.is_empty()));
}

#[test]
fn show_uses_sections_from_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".algorefrc.json"),
        r#"{ "sections": ["python-zen"], "colors": false }"#,
    )
    .unwrap();
    algoref_cmd(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Beautiful is better than ugly."))
        .stdout(predicate::str::contains("Quicksort").not());
}

#[test]
fn invalid_config_exit_2() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".algorefrc.json"), "{ not json").unwrap();
    algoref_cmd(&dir)
        .arg("show")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid JSON in config"));
}

#[test]
fn missing_config_flag_exit_2() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir)
        .args(["audit", "--config", "nope.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn strict_audit_passes_on_shipped_catalog() {
    let dir = TempDir::new().unwrap();
    algoref_cmd(&dir)
        .args(["audit", "--strict", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default: 0"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".algorefrc.json");
    algoref_cmd(&dir)
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success();
    assert!(config_path.exists(), ".algorefrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("strict"));
    assert!(content.contains("colors"));
}

#[test]
fn init_does_not_overwrite_existing_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".algorefrc.json");
    fs::write(&config_path, r#"{ "strict": true }"#).unwrap();
    algoref_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&config_path).unwrap(), r#"{ "strict": true }"#);
}
