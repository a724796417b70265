//! Tests of the `truth-rs` binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn truth(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_truth-rs"))
        .args(args)
        .output()
        .expect("failed to run truth-rs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_tables() {
    let path = data("gates.tt");
    let output = truth(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "0 0 | 0 0\n0 1 | 0 1\n1 0 | 0 1\n1 1 | 1 1\n\n0 0 | 1\n0 1 | 1\n1 0 | 1\n\n"
    );
}

#[test]
fn no_prune_gives_same_tables() {
    let path = data("gates.tt");
    let pruned = truth(&[path.to_str().unwrap()]);
    let exhaustive = truth(&["--no-prune", path.to_str().unwrap()]);
    assert_eq!(stdout(&pruned), stdout(&exhaustive));
}

#[test]
fn header_flag() {
    let path = data("gates.tt");
    let output = truth(&["--header", path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("a b | conj disj\n0 0 | 0 0\n"));
}

#[test]
fn missing_file() {
    let output = truth(&["does/not/exist.tt"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output).trim_end(), "Error: File 'does/not/exist.tt' not found.");
}

#[test]
fn directory_is_an_execution_error() {
    let dir = data("");
    let output = truth(&[dir.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let stderr = stderr(&output);
    assert!(stderr.starts_with("Error during execution: "), "{}", stderr);
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn invalid_utf8_is_an_execution_error() {
    let path = data("latin1.tt");
    let output = truth(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).starts_with("Error during execution: "));
}

#[test]
fn execution_error() {
    let path = data("undefined.tt");
    let output = truth(&[path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output).trim_end(),
        "Error during execution: undefined variable 'c' used in expression"
    );
}
