//! Tramnet - tram network query CLI
//!
//! Loads a network snapshot and answers questions about lines, travel
//! times, distances and routes.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use tramnet_core::error::{ExitCode as TramExitCode, TramError};
use tramnet_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match argument_error(&err) {
            // Scripts asking for JSON get the same envelope as query failures
            Some(tram_error) if json_requested(env::args().skip(1)) => {
                eprintln!("{}", tram_error.to_json());
                return exit_with(&tram_error);
            }
            _ => err.exit(),
        },
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::run(&cli, start) {
        Ok(()) => ExitCode::from(TramExitCode::Success as u8),
        Err(e) => {
            report(&cli, &e);
            exit_with(&e)
        }
    }
}

/// Usage problems become `invalid_value`; help and version output is not
/// an error at all.
fn argument_error(err: &clap::Error) -> Option<TramError> {
    match err.kind() {
        ClapErrorKind::DisplayHelp
        | ClapErrorKind::DisplayVersion
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ClapErrorKind::ValueValidation
        | ClapErrorKind::InvalidValue
        | ClapErrorKind::InvalidSubcommand
        | ClapErrorKind::UnknownArgument
        | ClapErrorKind::MissingRequiredArgument => {
            Some(TramError::invalid_value("arguments", err.kind()))
        }
        _ => Some(TramError::Other(err.to_string())),
    }
}

fn report(cli: &Cli, err: &TramError) {
    if cli.format == OutputFormat::Json {
        eprintln!("{}", err.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", err);
    }
}

fn exit_with(err: &TramError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}

/// `--format json` or `--format=json` anywhere in raw argv. Used before clap
/// has produced a `Cli`.
fn json_requested<I>(args: I) -> bool
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
