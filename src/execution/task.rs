//! Task building and representation.

use std::fmt;
use std::io::Read;
use std::path::PathBuf;

/// A readable input source for the child process.
pub type InputSource = Box<dyn Read + Send>;

/// A command to execute, with its capture and relay options.
///
/// The fields are read at execution time; nothing is cached across runs.
/// `stdin` is consumed by the first execution that actually spawns a process.
pub struct Task {
    /// Program identifier. May contain embedded space-separated tokens, in
    /// which case it is split into "program + inline arguments" at execution
    /// time and [`args`](Self::args) is ignored.
    pub program: String,
    /// Explicit argument list.
    pub args: Vec<String>,
    /// Working directory for the child; `None` inherits the caller's.
    pub cwd: Option<PathBuf>,
    /// Log the command line without running it.
    pub dry_run: bool,
    /// Optional input wired to the child's stdin.
    pub stdin: Option<InputSource>,
    /// Mirror child output to this process's stdout/stderr while capturing it.
    pub stream_output: bool,
    /// Informational flag for callers; the command line is always logged
    /// before running regardless of this value.
    pub print_command: bool,
}

impl Task {
    /// Create a new task for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            dry_run: false,
            stdin: None,
            stream_output: false,
            print_command: false,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set the working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Wire a readable source to the child's stdin.
    pub fn stdin(mut self, input: InputSource) -> Self {
        self.stdin = Some(input);
        self
    }

    /// Set whether child output is mirrored live while being captured.
    pub fn stream_output(mut self, stream: bool) -> Self {
        self.stream_output = stream;
        self
    }

    /// Set dry-run mode.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Set the informational print flag.
    pub fn print_command(mut self, print: bool) -> Self {
        self.print_command = print;
        self
    }

    /// Resolve the program and argument list actually handed to the OS.
    ///
    /// A program identifier containing a space past the first character is
    /// split on single spaces: the first token becomes the program and the
    /// rest replace the explicit argument list. The split is naive on
    /// purpose; there is no shell-quoting awareness, and consecutive spaces
    /// produce empty-string arguments.
    pub(crate) fn effective_command(&self) -> (String, Vec<String>) {
        match self.program.find(' ') {
            Some(idx) if idx > 0 => {
                let mut parts = self.program.split(' ').map(str::to_string);
                let program = parts.next().unwrap_or_default();
                (program, parts.collect())
            }
            _ => (self.program.clone(), self.args.clone()),
        }
    }
}

/// Renders the reconstructed command line: the program followed by the
/// space-joined explicit arguments.
impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.args.join(" "))
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("program", &self.program)
            .field("args", &self.args)
            .field("cwd", &self.cwd)
            .field("dry_run", &self.dry_run)
            .field("stdin", &self.stdin.is_some())
            .field("stream_output", &self.stream_output)
            .field("print_command", &self.print_command)
            .finish()
    }
}
