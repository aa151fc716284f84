//! # exec-relay
//!
//! One-shot process execution with captured and live-relayed output.
//!
//! This crate builds and runs a single external process, always capturing
//! its stdout and stderr while optionally mirroring them live to the
//! caller's own streams, and reports the exit status as a structured value.
//!
//! ## Features
//!
//! - **Dual-destination output**: captured in memory, optionally teed live
//! - **Dry-run**: log the command line without spawning anything
//! - **Inline arguments**: a program string with embedded spaces is split
//!   into program + arguments
//! - **Structured errors**: start failures, wait failures and non-zero
//!   exits are distinct kinds, each carrying the captured output
//!
//! ## Quick Start
//!
//! ```no_run
//! use exec_relay::Task;
//!
//! fn main() -> exec_relay::Result<()> {
//!     // Initialize logging
//!     exec_relay::logging::try_init().ok();
//!
//!     let mut task = Task::new("git")
//!         .args(["status", "--short"])
//!         .working_dir("/project");
//!
//!     let result = task.execute()?;
//!     println!("exit {}: {}", result.exit_code, result.stdout);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod execution;
pub mod logging;

// Re-export commonly used types
pub use error::{ExecRelayError, Result};
pub use execution::{execute_simple, ExecResult, InputSource, Task};
