//! Task execution engine.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

use tracing::info;

use super::result::ExecResult;
use super::task::Task;
use crate::error::ExecRelayError;
use crate::Result;

/// Buffer size for draining child output pipes.
const READ_BUFFER_SIZE: usize = 4096;

type Mirror = Box<dyn Write + Send>;

impl Task {
    /// Run the task to completion, capturing its output.
    ///
    /// The command line is logged before anything else. In dry-run mode no
    /// process is spawned and the zero-valued result is returned. Otherwise
    /// the child runs in the configured working directory with stdout and
    /// stderr captured; when [`stream_output`](Task::stream_output) is set,
    /// output is additionally mirrored live to this process's own streams.
    /// The call blocks until the child exits.
    ///
    /// A non-zero exit is reported as [`ExecRelayError::ExitCode`] with the
    /// captured output and decoded code inside; see
    /// [`ExecRelayError::captured`].
    pub fn execute(&mut self) -> Result<ExecResult> {
        info!(cmd = %self, "execute command");
        if self.dry_run {
            return Ok(ExecResult::default());
        }

        let (program, args) = self.effective_command();
        let mut command = Command::new(&program);
        command.args(&args);
        if let Some(dir) = &self.cwd {
            command.current_dir(dir);
        }

        let input = self.stdin.take();
        command
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(ExecRelayError::Start)?;

        let feeder = match (input, child.stdin.take()) {
            (Some(mut source), Some(mut sink)) => Some(thread::spawn(move || {
                // The child closing its end early is not a failure.
                let _ = io::copy(&mut source, &mut sink);
            })),
            _ => None,
        };

        let stream = self.stream_output;
        let stdout_pipe = child.stdout.take();
        let stderr_pipe = child.stderr.take();
        let stdout_relay = thread::spawn(move || {
            relay(
                stdout_pipe,
                stream.then(|| Box::new(io::stdout()) as Mirror),
            )
        });
        let stderr_relay = thread::spawn(move || {
            relay(
                stderr_pipe,
                stream.then(|| Box::new(io::stderr()) as Mirror),
            )
        });

        let wait_outcome = child.wait();

        let (stdout_buf, stdout_failure) = join_relay(stdout_relay);
        let (stderr_buf, stderr_failure) = join_relay(stderr_relay);
        if let Some(handle) = feeder {
            let _ = handle.join();
        }

        let mut result = ExecResult {
            stdout: String::from_utf8_lossy(&stdout_buf).into_owned(),
            stderr: String::from_utf8_lossy(&stderr_buf).into_owned(),
            exit_code: 0,
        };
        if let Ok(status) = &wait_outcome {
            if let Some(code) = status.code() {
                result.exit_code = code;
            }
        }

        if !self.stream_output {
            info!(
                exit_code = result.exit_code,
                stdout = %result.stdout,
                stderr = %result.stderr,
                "command result"
            );
        }

        match wait_outcome {
            Err(source) => Err(ExecRelayError::Wait {
                source,
                result: Box::new(result),
            }),
            Ok(status) => {
                if let Some(source) = stdout_failure.or(stderr_failure) {
                    Err(ExecRelayError::Wait {
                        source,
                        result: Box::new(result),
                    })
                } else if status.success() {
                    Ok(result)
                } else if status.code().is_some() {
                    Err(ExecRelayError::ExitCode {
                        result: Box::new(result),
                    })
                } else {
                    Err(ExecRelayError::Terminated {
                        result: Box::new(result),
                    })
                }
            }
        }
    }
}

/// Drain a child pipe into a buffer, optionally mirroring each chunk.
///
/// Returns the captured bytes together with the read error that cut the
/// drain short, if any, so partial output survives a failure.
fn relay(pipe: Option<impl Read>, mut mirror: Option<Mirror>) -> (Vec<u8>, Option<io::Error>) {
    let Some(mut source) = pipe else {
        return (Vec::new(), None);
    };

    let mut captured = Vec::new();
    let mut buf = [0u8; READ_BUFFER_SIZE];
    loop {
        match source.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                captured.extend_from_slice(&buf[..n]);
                if let Some(writer) = mirror.as_mut() {
                    // A closed mirror stops the mirroring, not the capture.
                    if writer
                        .write_all(&buf[..n])
                        .and_then(|()| writer.flush())
                        .is_err()
                    {
                        mirror = None;
                    }
                }
            }
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return (captured, Some(e)),
        }
    }
    (captured, None)
}

fn join_relay(
    handle: thread::JoinHandle<(Vec<u8>, Option<io::Error>)>,
) -> (Vec<u8>, Option<io::Error>) {
    match handle.join() {
        Ok(outcome) => outcome,
        Err(_) => (
            Vec::new(),
            Some(io::Error::other("output relay thread panicked")),
        ),
    }
}

/// Simple one-shot command execution.
///
/// The command line is handed to [`Task::new`] whole; embedded spaces are
/// resolved by the naive splitting rule at execution time.
pub fn execute_simple(command_line: &str) -> Result<ExecResult> {
    Task::new(command_line).execute()
}
