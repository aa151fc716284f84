//! Error types for exec-relay.

use thiserror::Error;

use crate::execution::ExecResult;

/// Main error type for exec-relay operations.
///
/// Variants that occur after the child process started carry whatever output
/// was captured up to the failure, so callers can distinguish "ran and
/// returned non-zero" from "could not run" by matching the variant.
#[derive(Error, Debug)]
pub enum ExecRelayError {
    /// The process could not be spawned (program missing, permission denied,
    /// invalid working directory).
    #[error("failed to start process: {0}")]
    Start(#[source] std::io::Error),

    /// Waiting on the process, or draining its output, failed after it had
    /// started. The exit code field of the carried result stays 0.
    #[error("failed waiting for process: {source}")]
    Wait {
        #[source]
        source: std::io::Error,
        result: Box<ExecResult>,
    },

    /// The process died without reporting an exit code (terminated by a
    /// signal). The exit code field of the carried result stays 0.
    #[error("process terminated without an exit code")]
    Terminated { result: Box<ExecResult> },

    /// The process ran to completion with a non-zero exit code. The code is
    /// in `result.exit_code`.
    #[error("process exited with code {}", .result.exit_code)]
    ExitCode { result: Box<ExecResult> },
}

impl ExecRelayError {
    /// Output captured before the failure, if the process got far enough to
    /// produce any.
    pub fn captured(&self) -> Option<&ExecResult> {
        match self {
            Self::Start(_) => None,
            Self::Wait { result, .. } | Self::Terminated { result } | Self::ExitCode { result } => {
                Some(result.as_ref())
            }
        }
    }

    /// Consume the error, yielding the captured result. `Start` failures
    /// produced no output and yield the zero-valued result.
    pub fn into_captured(self) -> ExecResult {
        match self {
            Self::Start(_) => ExecResult::default(),
            Self::Wait { result, .. } | Self::Terminated { result } | Self::ExitCode { result } => {
                *result
            }
        }
    }
}

/// Convenience Result type for exec-relay operations.
pub type Result<T> = std::result::Result<T, ExecRelayError>;
