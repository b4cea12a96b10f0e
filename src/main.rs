//! roam-alfred - org-roam backed result lists for a desktop launcher
//!
//! Every invocation prints one JSON result document on stdout and exits.
//! Diagnostics and logs go to stderr.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use roam_alfred_core::error::ExitCode as RoamExitCode;
use roam_alfred_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RoamExitCode::Success as u8),
        Err(e) => {
            if cli.log_json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
