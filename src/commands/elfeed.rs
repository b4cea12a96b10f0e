//! `roam-alfred elfeed` - feed shortcuts kept in feeds.org

use roam_alfred_core::alfred::{AlfredResult, Item};
use roam_alfred_core::error::Result;
use roam_alfred_core::projector::{feed_items, resolve_feed};

use crate::commands::dispatch::command::CommandContext;
use crate::commands::output::print_result;

const FEEDS_FILE: &str = "/feeds.org";

fn load_feeds(ctx: &CommandContext) -> Result<Vec<Item>> {
    let blobs = ctx.open_roam_db()?.level_two_properties(FEEDS_FILE)?;
    Ok(feed_items(&blobs))
}

pub fn execute_items(ctx: &CommandContext) -> Result<()> {
    print_result(&AlfredResult::new(load_feeds(ctx)?))
}

/// Print the feed's search string as-is, with no trailing newline.
pub fn execute_resolve(ctx: &CommandContext, title: &str) -> Result<()> {
    let arg = resolve_feed(&load_feeds(ctx)?, title)?;
    print!("{arg}");
    Ok(())
}
