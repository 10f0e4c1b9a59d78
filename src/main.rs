//! Waypath - graph traversal and shortest-path CLI
//!
//! Loads graphs from JSON files or random labyrinths and runs BFS, DFS and
//! Dijkstra over them, printing per-vertex results and paths.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use waypath_core::error::{ExitCode as WaypathExitCode, WaypathError};
use waypath_core::format::OutputFormat;
use waypath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => to_process_code(WaypathExitCode::Success),
        Err(e) => {
            report(&e, cli.format, cli.quiet);
            to_process_code(e.exit_code())
        }
    }
}

/// clap fails before `Cli.format` exists, so a JSON request is read from argv
fn parse_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !json_requested(env::args().skip(1))
    {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => WaypathError::UsageError(err.to_string()),
        _ => WaypathError::Other(err.to_string()),
    };
    report(&error, OutputFormat::Json, false);
    to_process_code(error.exit_code())
}

fn report(error: &WaypathError, format: OutputFormat, quiet: bool) {
    match format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

fn to_process_code(code: WaypathExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

fn json_requested(args: impl Iterator<Item = String>) -> bool {
    let args: Vec<String> = args.collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
