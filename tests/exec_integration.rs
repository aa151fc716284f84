//! End-to-end execution tests.
//!
//! These spawn real processes and rely on POSIX userland (`sh`, `echo`,
//! `cat`, `ls`).

#![cfg(unix)]

use std::io::Cursor;

use exec_relay::{execute_simple, ExecRelayError, ExecResult, Task};
use tempfile::tempdir;

fn sh(script: &str) -> Task {
    Task::new("sh").args(["-c", script])
}

// ============================================================================
// Dry-run
// ============================================================================

#[test]
fn test_dry_run_spawns_no_process() {
    let dir = tempdir().unwrap();
    let marker = dir.path().join("marker");

    let mut task = Task::new("touch")
        .arg(marker.to_string_lossy())
        .dry_run(true);
    let result = task.execute().unwrap();

    assert_eq!(result, ExecResult::default());
    assert!(!marker.exists(), "dry-run must not spawn the command");
}

#[test]
fn test_dry_run_result_is_zero_valued() {
    let mut task = sh("echo should-not-run").dry_run(true);
    let result = task.execute().unwrap();
    assert!(result.stdout.is_empty());
    assert!(result.stderr.is_empty());
    assert_eq!(result.exit_code, 0);
}

// ============================================================================
// Capture
// ============================================================================

#[test]
fn test_echo_captures_stdout() {
    let mut task = Task::new("echo").arg("abc");
    let result = task.execute().unwrap();

    assert_eq!(result.stdout, "abc\n");
    assert_eq!(result.stderr, "");
    assert_eq!(result.exit_code, 0);
    assert!(result.success());
}

#[test]
fn test_stderr_is_captured_separately() {
    let mut task = sh("echo oops >&2");
    let result = task.execute().unwrap();

    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "oops\n");
}

#[test]
fn test_reexecution_runs_from_scratch() {
    let mut task = Task::new("echo").arg("again");
    let first = task.execute().unwrap();
    let second = task.execute().unwrap();
    assert_eq!(first, second);
}

// ============================================================================
// Inline-argument splitting
// ============================================================================

#[test]
fn test_inline_program_discards_explicit_args() {
    let mut task = Task::new("echo hello").args(["world"]);
    let result = task.execute().unwrap();

    assert_eq!(result.stdout, "hello\n");
    assert!(
        !result.stdout.contains("world"),
        "explicit args must be discarded when the program carries inline args"
    );
}

#[test]
fn test_naive_split_preserves_empty_tokens() {
    // The split is a plain single-space split with no quoting awareness:
    // consecutive spaces become empty arguments, which echo renders as an
    // extra separator. Surprising, but part of the contract.
    let result = execute_simple("echo hello  world").unwrap();
    assert_eq!(result.stdout, "hello  world\n");
}

// ============================================================================
// Exit codes and errors
// ============================================================================

#[test]
fn test_nonzero_exit_is_error_with_code() {
    let mut task = sh("exit 3");
    let err = task.execute().unwrap_err();

    match err {
        ExecRelayError::ExitCode { result } => assert_eq!(result.exit_code, 3),
        other => panic!("expected ExitCode error, got {other:?}"),
    }
}

#[test]
fn test_nonzero_exit_keeps_captured_output() {
    let mut task = sh("echo out; echo err >&2; exit 3");
    let err = task.execute().unwrap_err();

    let result = err.into_captured();
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "err\n");
    assert_eq!(result.exit_code, 3);
}

#[test]
fn test_missing_program_is_start_failure() {
    let mut task = Task::new("exec-relay-definitely-missing-binary");
    let err = task.execute().unwrap_err();

    assert!(matches!(err, ExecRelayError::Start(_)));
    // No exit code is meaningfully set for a process that never started.
    assert_eq!(err.into_captured().exit_code, 0);
}

#[test]
fn test_invalid_working_dir_is_start_failure() {
    let mut task = Task::new("echo")
        .arg("hi")
        .working_dir("/nonexistent/exec-relay-dir");
    let err = task.execute().unwrap_err();
    assert!(matches!(err, ExecRelayError::Start(_)));
}

#[test]
fn test_signal_termination_has_no_exit_code() {
    let mut task = sh("kill -9 $$");
    let err = task.execute().unwrap_err();

    match err {
        ExecRelayError::Terminated { result } => assert_eq!(result.exit_code, 0),
        other => panic!("expected Terminated error, got {other:?}"),
    }
}

// ============================================================================
// Streaming
// ============================================================================

#[test]
fn test_streaming_capture_matches_plain_capture() {
    let script = "echo visible; echo warned >&2";

    let plain = sh(script).execute().unwrap();
    let streamed = sh(script).stream_output(true).execute().unwrap();

    assert_eq!(plain, streamed, "mirroring must not alter the captured copy");
}

#[test]
fn test_streaming_nonzero_exit_still_captures() {
    let mut task = sh("echo streamed; exit 5").stream_output(true);
    let err = task.execute().unwrap_err();

    let result = err.into_captured();
    assert_eq!(result.stdout, "streamed\n");
    assert_eq!(result.exit_code, 5);
}

// ============================================================================
// Working directory
// ============================================================================

#[test]
fn test_working_directory_selects_listing() {
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    std::fs::write(first.path().join("alpha.txt"), b"").unwrap();
    std::fs::write(second.path().join("beta.txt"), b"").unwrap();

    let listing_a = Task::new("ls")
        .working_dir(first.path())
        .execute()
        .unwrap();
    let listing_b = Task::new("ls")
        .working_dir(second.path())
        .execute()
        .unwrap();

    assert!(listing_a.stdout.contains("alpha.txt"));
    assert!(!listing_a.stdout.contains("beta.txt"));
    assert!(listing_b.stdout.contains("beta.txt"));
    assert!(!listing_b.stdout.contains("alpha.txt"));
}

// ============================================================================
// Stdin
// ============================================================================

#[test]
fn test_stdin_is_wired_to_the_child() {
    let mut task = Task::new("cat").stdin(Box::new(Cursor::new(b"piped input".to_vec())));
    let result = task.execute().unwrap();
    assert_eq!(result.stdout, "piped input");
}

#[test]
fn test_without_stdin_child_reads_nothing() {
    // cat against a null stdin sees immediate EOF instead of blocking on
    // the test harness's terminal.
    let mut task = Task::new("cat");
    let result = task.execute().unwrap();
    assert_eq!(result.stdout, "");
    assert!(result.success());
}
