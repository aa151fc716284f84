//! Command-line interface for exec-relay.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Program to execute.
    pub program: Option<String>,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory for the child.
    pub cwd: Option<PathBuf>,
    /// Log the command line without running it.
    pub dry_run: bool,
    /// Mirror child output live while capturing it.
    pub stream: bool,
    /// Connect this process's stdin to the child.
    pub stdin: bool,
    /// Print the captured result as JSON.
    pub json: bool,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
///
/// Everything after the first positional value (or after `--`) belongs to
/// the child command, so option parsing stops there.
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('C') | Long("cwd") => {
                result.cwd = Some(parser.value()?.parse()?);
            }
            Short('n') | Long("dry-run") => {
                result.dry_run = true;
            }
            Short('s') | Long("stream") => {
                result.stream = true;
            }
            Short('i') | Long("stdin") => {
                result.stdin = true;
            }
            Long("json") => {
                result.json = true;
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                result.program = Some(
                    val.into_string()
                        .map_err(|v| ArgsError::InvalidProgram(v.to_string_lossy().into()))?,
                );
                for rest in parser.raw_args()? {
                    result.args.push(
                        rest.into_string()
                            .map_err(|v| ArgsError::InvalidProgram(v.to_string_lossy().into()))?,
                    );
                }
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"exec-relay {version}
One-shot process execution with captured and live-relayed output

USAGE:
    exec-relay [OPTIONS] [--] <program> [args...]

OPTIONS:
    -C, --cwd <DIR>         Working directory for the child
    -n, --dry-run           Log the command line without running it
    -s, --stream            Mirror child output live while capturing it
    -i, --stdin             Connect this process's stdin to the child
        --json              Print the captured result as JSON
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    RUST_LOG                Log filter directives (overridden by --log-level)

EXAMPLES:
    # Run a command and print its captured output afterwards
    exec-relay ls -la

    # Watch output live from a working directory
    exec-relay -s -C /project cargo build

    # Show what would run without running it
    exec-relay -n rm -rf target

    # Feed stdin through and collect the result as JSON
    echo hello | exec-relay -i --json cat
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("exec-relay {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Program or argument was not valid Unicode.
    InvalidProgram(String),
    /// No program was given.
    MissingProgram,
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidProgram(value) => {
                write!(f, "program and arguments must be valid Unicode: '{}'", value)
            }
            Self::MissingProgram => write!(f, "no program given"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
