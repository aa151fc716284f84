//! Task execution engine.
//!
//! This module provides one-shot command execution:
//! - Dual-destination output: always captured, optionally mirrored live
//! - Dry-run short-circuit
//! - Structured results with the child's exit code
//!
//! # Example
//!
//! ```no_run
//! use exec_relay::execution::{execute_simple, Task};
//!
//! // Simple one-shot execution
//! let result = execute_simple("echo hello").unwrap();
//! println!("Output: {}", result.stdout);
//!
//! // Task with options
//! let mut task = Task::new("cargo")
//!     .args(["build", "--release"])
//!     .working_dir("/project")
//!     .stream_output(true);
//! let result = task.execute().unwrap();
//! assert!(result.success());
//! ```

mod result;
mod runner;
mod task;

pub use result::ExecResult;
pub use runner::execute_simple;
pub use task::{InputSource, Task};
