//! Trellis - graph analysis CLI
//!
//! Reads a vertex/edge description, derives structural metrics, shortest
//! paths and traversal results, and renders them as a multi-column report
//! or JSON.

mod cli;
mod commands;
mod reader;
mod report;
mod writer;

use std::env;
use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, OutputFormat};
use trellis_core::error::{ExitCode as TrellisExitCode, TrellisError};
use trellis_core::logging;

fn main() -> ExitCode {
    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before
            // we can inspect `Cli.format`. If the user requested JSON
            // output, emit a structured error envelope.
            if argv_format_json {
                let error = match err.kind() {
                    // Help and version are informational - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => TrellisError::UsageError(err.to_string()),
                };
                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(TrellisExitCode::Success as u8),
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

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
