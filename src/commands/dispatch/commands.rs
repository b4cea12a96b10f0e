//! Command implementations for all roam-alfred commands

use roam_alfred_core::error::Result;

use crate::cli::{Commands, ElfeedCommands, HistoryCommands};
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{books, capture, chrome, elfeed, history, nodes, translit};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Nodes { category, query } => nodes::execute(ctx, category, query),
            Commands::Chrome { category, query } => chrome::execute(ctx, category, query),
            Commands::Elfeed { command } => command.execute(ctx),
            Commands::Books { query } => books::execute(ctx, query),
            Commands::Capture { category, query } => capture::execute(ctx, category, query),
            Commands::History { command } => command.execute(ctx),
            Commands::Translit { words } => translit::execute(words),
        };
        tracing::debug!(elapsed = ?ctx.start.elapsed(), ok = result.is_ok(), "command finished");
        result
    }
}

impl Command for ElfeedCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            ElfeedCommands::Items => elfeed::execute_items(ctx),
            ElfeedCommands::Resolve { title } => elfeed::execute_resolve(ctx, title),
        }
    }
}

impl Command for HistoryCommands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            HistoryCommands::Add { item, query } => history::execute_add(ctx, item, query),
            HistoryCommands::Find { query } => history::execute_find(ctx, query),
        }
    }
}
