//! Command dispatch logic for roam-alfred

use std::time::Instant;

use roam_alfred_core::config::Config;
use roam_alfred_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

pub(crate) mod command;
mod commands;

use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load()?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);
    cli.command.execute(&ctx)
}
