//! Interviewer - structured technical interview assistant
//!
//! Guides a time-boxed interview from a per-track question bank, records
//! notes, rubric scores and red flags, and turns the result into a hire
//! verdict and a Markdown summary.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use interviewer_core::error::{ExitCode as InterviewExitCode, InterviewError};
use interviewer_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // `--format` is global, but parsing can fail before `Cli.format`
        // exists. A JSON request still gets the structured envelope.
        Err(err) if argv_requests_json() && !is_informational(&err) => {
            let error = usage_error(&err);
            eprintln!("{}", error.to_json());
            return exit_code(&error);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(InterviewExitCode::Success as u8),
        Err(e) => {
            match cli.format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                _ if cli.quiet => {}
                _ => eprintln!("error: {}", e),
            }
            exit_code(&e)
        }
    }
}

fn exit_code(error: &InterviewError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

/// Help and version output are not failures
fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn usage_error(err: &clap::Error) -> InterviewError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument => InterviewError::UsageError(err.to_string()),
        ErrorKind::ArgumentConflict if err.to_string().contains("--format") => {
            InterviewError::DuplicateFormat
        }
        ErrorKind::ArgumentConflict => InterviewError::UsageError(err.to_string()),
        _ => InterviewError::Other(err.to_string()),
    }
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
