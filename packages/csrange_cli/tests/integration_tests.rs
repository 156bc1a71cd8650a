//! Integration tests for the csrange tool.
//!
//! These tests spawn the built binary and verify its output and exit status.

#![cfg(not(miri))]

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Path to the csrange binary, provided by Cargo for integration tests.
const BINARY: &str = env!("CARGO_BIN_EXE_csrange");

/// Runs csrange with the given arguments and no standard input.
fn run_tool(args: &[&str]) -> Output {
    Command::new(BINARY)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to execute csrange")
}

/// Runs csrange with the given arguments, piping `stdin` to it.
fn run_tool_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(BINARY)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn csrange");

    child
        .stdin
        .take()
        .expect("stdin was requested as piped")
        .write_all(stdin)
        .expect("failed to write to csrange stdin");

    child
        .wait_with_output()
        .expect("failed to wait for csrange")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn compacts_argument() {
    let output = run_tool(&["5,1,2,3,9"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1-3,5,9\n");
}

#[test]
fn reads_piped_stdin() {
    let output = run_tool_with_stdin(&[], b"4,5,6,8\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "4-6,8\n");
}

#[test]
fn piped_stdin_takes_precedence() {
    let output = run_tool_with_stdin(&["100"], b"1-3\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1-3\n");
}

#[test]
fn unreadable_stdin_fails_with_read_error() {
    let output = run_tool_with_stdin(&["1-3"], &[0x31, 0xff, 0xfe, b'\n']);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("failed to read standard input"));
    assert!(!stderr_of(&output).contains("Usage"));
}

#[test]
fn integers_and_count() {
    let output = run_tool(&["-i", "-c", "1,4-6"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1,4,5,6\n\ncount: 4\n");
}

#[test]
fn split_contiguous_with_bucket() {
    let output = run_tool(&["--split", "3", "--contiguous", "--bucket", "3", "1-7"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "7\n");
}

#[test]
fn split_interleaved() {
    let output = run_tool(&["-s", "2", "1-5"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1,3,5\n2,4\n");
}

#[test]
fn missing_input_fails_with_usage() {
    let output = run_tool(&[]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("Usage"));
}

#[test]
fn invalid_input_fails() {
    let output = run_tool(&["3-1"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("parsing error"));
    assert!(stderr_of(&output).contains("3-1"));
}

#[test]
fn bucket_beyond_split_fails() {
    let output = run_tool(&["--split", "2", "--bucket", "3", "1-7"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("out of range"));
}
