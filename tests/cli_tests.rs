// tests/cli_tests.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const LOG: &str = "2024-01-01 Input: {'a': [1], 'b': [2.5]}, Prediction: [0.9]\n\
                   2024-01-01 Input: {'a': [3], 'b': [4.0]}, Prediction: [0.1]\n";

fn predlog() -> Command {
    Command::cargo_bin("predlog").unwrap()
}

#[test]
fn test_default_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("predictions.log"), LOG).unwrap();

    predlog()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Generated current_inputs.csv\n");

    let csv = fs::read_to_string(dir.path().join("current_inputs.csv")).unwrap();
    assert_eq!(csv, "a,b\n1,2.5\n3,4.0\n");
}

#[test]
fn test_missing_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    predlog()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("predictions.log not found\n")
        .stderr("");

    assert!(!dir.path().join("current_inputs.csv").exists());
}

#[test]
fn test_explicit_paths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("service.log");
    let output = dir.path().join("inputs.csv");
    fs::write(&input, LOG).unwrap();

    predlog()
        .arg("--input")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(format!("Generated {}\n", output.display()));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "a,b\n1,2.5\n3,4.0\n"
    );
}

#[test]
fn test_malformed_record_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("predictions.log"),
        "Input: {'a': [1]}, Prediction: 0\nInput: {'a': [1, Prediction: 0\n",
    )
    .unwrap();

    predlog()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("predlog: error:"))
        .stderr(predicate::str::contains("Malformed record at line 2"));

    assert!(!dir.path().join("current_inputs.csv").exists());
}

#[test]
fn test_keys_option() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("predictions.log"), LOG).unwrap();

    predlog()
        .current_dir(dir.path())
        .args(["--keys", "b,a"])
        .assert()
        .success();

    let csv = fs::read_to_string(dir.path().join("current_inputs.csv")).unwrap();
    assert_eq!(csv, "b,a\n2.5,1\n4.0,3\n");
}

#[test]
fn test_later_keys_extend_header() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("predictions.log"),
        "Input: {'x': [1]}, Prediction: 0\nInput: {'x': [2], 'y': [3]}, Prediction: 0\n",
    )
    .unwrap();

    predlog()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("Generated current_inputs.csv\n")
        .stderr("");

    let csv = fs::read_to_string(dir.path().join("current_inputs.csv")).unwrap();
    assert_eq!(csv, "x,y\n1,\n2,3.0\n");
}

#[test]
fn test_error_cause_printed_once() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("predictions.log"),
        "Input: {'a': [1], Prediction: 0\n",
    )
    .unwrap();

    let assert = predlog().current_dir(dir.path()).assert().code(1);
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();

    assert_eq!(
        stderr,
        "predlog: error: Failed to convert 'predictions.log' to 'current_inputs.csv': \
         Malformed record at line 1: invalid mapping literal: unexpected end of input\n"
    );
    assert_eq!(stderr.matches("unexpected end of input").count(), 1);
    assert_eq!(stderr.matches("invalid mapping literal").count(), 1);
}

#[test]
fn test_custom_marker_and_terminator() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("predictions.log"),
        "features= {'f': [7]} => 0.5\nInput: ignored\n",
    )
    .unwrap();

    predlog()
        .current_dir(dir.path())
        .args(["--marker", "features=", "--terminator", " =>"])
        .assert()
        .success();

    let csv = fs::read_to_string(dir.path().join("current_inputs.csv")).unwrap();
    assert_eq!(csv, "f\n7\n");
}

#[test]
fn test_debug_output_goes_to_stderr() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("predictions.log"), LOG).unwrap();

    predlog()
        .current_dir(dir.path())
        .arg("--debug")
        .assert()
        .success()
        .stdout("Generated current_inputs.csv\n")
        .stderr(predicate::str::contains("predlog: reading from predictions.log"))
        .stderr(predicate::str::contains("Records extracted: 2"));
}

#[test]
fn test_empty_marker_rejected() {
    predlog()
        .args(["--marker", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--marker cannot be empty"));
}
