//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use roam_alfred_core::automation::OsAutomation;
use roam_alfred_core::config::{Config, SearchEngine};
use roam_alfred_core::db::RoamDatabase;
use roam_alfred_core::error::Result;
use roam_alfred_core::history::HistoryStore;
use roam_alfred_core::node::NodeBuilder;
use roam_alfred_core::projector::IconResolver;

use crate::cli::Cli;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Notes store path: flag or environment, then config, then default.
    pub fn roam_db_path(&self) -> Result<PathBuf> {
        match &self.cli.db_path {
            Some(path) => Ok(path.clone()),
            None => self.config.roam_db_path(),
        }
    }

    pub fn history_db_path(&self) -> Result<PathBuf> {
        match &self.cli.history_db {
            Some(path) => Ok(path.clone()),
            None => self.config.history_db_path(),
        }
    }

    pub fn org_dir(&self) -> Result<PathBuf> {
        match &self.cli.org_dir {
            Some(path) => Ok(path.clone()),
            None => self.config.org_dir_path(),
        }
    }

    pub fn open_roam_db(&self) -> Result<RoamDatabase> {
        RoamDatabase::open(&self.roam_db_path()?)
    }

    pub fn open_history(&self) -> Result<HistoryStore> {
        HistoryStore::open(&self.history_db_path()?)
    }

    pub fn icons(&self) -> Result<IconResolver> {
        Ok(IconResolver::new(&self.org_dir()?))
    }

    pub fn node_builder(&self) -> NodeBuilder {
        NodeBuilder::new(self.config.exclusion.clone())
    }

    pub fn engines_for(&self, category: &str) -> &[SearchEngine] {
        self.config.engines_for(category)
    }

    pub fn automation(&self) -> OsAutomation {
        OsAutomation::new(self.config.automation_timeout())
    }

    pub fn trigger(&self) -> &str {
        &self.cli.trigger
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
