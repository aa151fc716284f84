//! Execution result types.

use serde::{Deserialize, Serialize};

/// Result of a single command execution.
///
/// A value of this type is produced once per invocation and never mutated
/// afterwards. The buffers hold the child's output up to the point it exited;
/// nothing is trimmed, re-decoded or size-bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
    /// Exit code reported by the process; 0 if it did not report one.
    pub exit_code: i32,
}

impl ExecResult {
    /// Check whether the command reported exit code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Captured stdout with surrounding whitespace removed.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }

    /// Captured stdout as lines.
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_valued() {
        let result = ExecResult::default();
        assert!(result.stdout.is_empty());
        assert!(result.stderr.is_empty());
        assert_eq!(result.exit_code, 0);
        assert!(result.success());
    }

    #[test]
    fn test_nonzero_exit_is_not_success() {
        let result = ExecResult {
            exit_code: 3,
            ..ExecResult::default()
        };
        assert!(!result.success());
    }

    #[test]
    fn test_stdout_trimmed() {
        let result = ExecResult {
            stdout: "  hello world  \n".to_string(),
            ..ExecResult::default()
        };
        assert_eq!(result.stdout_trimmed(), "hello world");
    }

    #[test]
    fn test_stdout_lines() {
        let result = ExecResult {
            stdout: "line1\nline2\nline3".to_string(),
            ..ExecResult::default()
        };
        let lines: Vec<_> = result.stdout_lines().collect();
        assert_eq!(lines, vec!["line1", "line2", "line3"]);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let original = ExecResult {
            stdout: "out\n".to_string(),
            stderr: "err\n".to_string(),
            exit_code: 7,
        };
        let json = serde_json::to_string(&original).unwrap();
        let loaded: ExecResult = serde_json::from_str(&json).unwrap();
        assert_eq!(original, loaded);
    }
}
