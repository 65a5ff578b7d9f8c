//! Myos - personal knowledge notes CLI
//!
//! Capture short notes, link them, and let the note graph surface related and
//! forgotten ideas.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use myos_core::error::{ExitCode as MyosExitCode, MyosError};
use myos_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // A parse failure leaves no `Cli` to read the format from, so
            // fall back to scanning the raw arguments.
            if wants_json(env::args().skip(1)) {
                if let Some(error) = parse_failure(&err) {
                    eprintln!("{}", error.to_json());
                    return ExitCode::from(error.exit_code() as u8);
                }
            }
            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(MyosExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Whether the raw arguments ask for `--format json` in either spelling
fn wants_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}

/// Map a clap failure onto the error envelope. `None` for help and version
/// output, which clap prints itself.
fn parse_failure(err: &clap::Error) -> Option<MyosError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => Some(MyosError::UsageError(err.to_string())),
        _ => Some(MyosError::Other(err.to_string())),
    }
}
