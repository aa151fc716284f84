//! exec-relay binary entry point.

use std::io;
use std::process::ExitCode;

use exec_relay::cli::{self, Args, ArgsError};
use exec_relay::{logging, ExecRelayError, ExecResult, Task};

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("exec-relay: {e}");
            return ExitCode::from(2);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    let Some(program) = args.program.clone() else {
        eprintln!("exec-relay: {}", ArgsError::MissingProgram);
        return ExitCode::from(2);
    };

    // --log-level narrows the filter; otherwise RUST_LOG decides.
    match args.log_level.as_deref() {
        Some(level) => {
            let _ = logging::init_with(&format!("exec_relay={level}"));
        }
        None => {
            let _ = logging::try_init();
        }
    }

    let mut task = Task::new(program)
        .args(args.args.clone())
        .stream_output(args.stream)
        .dry_run(args.dry_run)
        .print_command(true);
    if let Some(dir) = args.cwd.clone() {
        task = task.working_dir(dir);
    }
    if args.stdin {
        task = task.stdin(Box::new(io::stdin()));
    }

    match task.execute() {
        Ok(result) => {
            emit(&args, &result);
            exit_code_for(result.exit_code)
        }
        Err(ExecRelayError::ExitCode { result }) => {
            emit(&args, &result);
            exit_code_for(result.exit_code)
        }
        Err(err) => {
            if let Some(result) = err.captured() {
                emit(&args, result);
            }
            eprintln!("exec-relay: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Re-emit what the child produced: the whole result as JSON when requested,
/// or the captured streams when they were not already mirrored live.
fn emit(args: &Args, result: &ExecResult) {
    if args.json {
        match serde_json::to_string(result) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("exec-relay: failed to serialize result: {e}"),
        }
    } else if !args.stream {
        print!("{}", result.stdout);
        eprint!("{}", result.stderr);
    }
}

fn exit_code_for(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
