//! CLI argument parsing for roam-alfred
//!
//! Global flags select the stores and logging; each subcommand prints one
//! launcher result document on stdout.

pub mod elfeed;
pub mod history;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use elfeed::ElfeedCommands;
pub use history::HistoryCommands;

/// Launcher result lists backed by an org-roam database
#[derive(Parser, Debug)]
#[command(name = "roam-alfred")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the org-roam database
    #[arg(long, global = true, env = "ROAM_ALFRED_DB")]
    pub db_path: Option<PathBuf>,

    /// Path to the selection history database
    #[arg(long, global = true, env = "ROAM_ALFRED_HISTORY_DB")]
    pub history_db: Option<PathBuf>,

    /// Org directory holding launcher icons
    #[arg(long, global = true, env = "ROAM_ALFRED_ORG_DIR")]
    pub org_dir: Option<PathBuf>,

    /// Name the current query is recorded and looked up under in history
    #[arg(long, global = true, default_value = "")]
    pub trigger: String,

    /// Log debug details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `roam_alfred_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs and errors as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List org-roam nodes matching the query
    Nodes {
        /// Only show nodes in this category (nodes in `any` always show)
        #[arg(long, default_value = "")]
        category: String,

        /// Words that must appear in order in the node title
        #[arg(long, default_value = "")]
        query: String,
    },

    /// List browser bookmarks from chrome.org
    Chrome {
        /// Bookmark category, also used as the browser profile
        #[arg(long)]
        category: String,

        /// Text to look for in bookmark titles and aliases
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Feed shortcuts from feeds.org
    Elfeed {
        #[command(subcommand)]
        command: ElfeedCommands,
    },

    /// Goodreads search, remembered searches and books from books.org
    Books {
        #[arg(long, default_value = "")]
        query: String,
    },

    /// List org-capture templates for the current context
    Capture {
        /// Capture category (`home` or `goog`)
        #[arg(long, short)]
        category: String,

        /// Text to capture
        #[arg(long, short, default_value = "")]
        query: String,
    },

    /// Record and look up chosen items
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },

    /// Convert Latin-transliterated Russian into Cyrillic
    Translit {
        /// Words to convert
        words: Vec<String>,
    },
}
