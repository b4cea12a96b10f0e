//! `roam-alfred chrome` - bookmarks kept in chrome.org

use roam_alfred_core::alfred::AlfredResult;
use roam_alfred_core::error::Result;
use roam_alfred_core::projector::bookmark_items;

use crate::commands::dispatch::command::CommandContext;
use crate::commands::output::print_result;

const BOOKMARKS_FILE: &str = "/chrome.org";

pub fn execute(ctx: &CommandContext, category: &str, query: &str) -> Result<()> {
    let blobs = ctx.open_roam_db()?.level_two_properties(BOOKMARKS_FILE)?;
    let items = bookmark_items(
        &blobs,
        category,
        query,
        ctx.engines_for(category),
        &ctx.icons()?,
    );
    print_result(&AlfredResult::new(items))
}
