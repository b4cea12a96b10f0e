//! Subcommand implementations

pub mod books;
pub mod capture;
pub mod chrome;
pub mod dispatch;
pub mod elfeed;
pub mod history;
pub mod nodes;
pub mod output;
pub mod translit;
