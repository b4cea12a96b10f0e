//! `roam-alfred books` - goodreads search, remembered picks and books.org

use roam_alfred_core::alfred::{AlfredResult, Item};
use roam_alfred_core::error::Result;
use roam_alfred_core::history::now_millis;
use roam_alfred_core::projector::{book_items, goodreads_item};

use crate::commands::dispatch::command::CommandContext;
use crate::commands::output::print_result;

const BOOKS_FILE: &str = "/books.org";

pub fn execute(ctx: &CommandContext, query: &str) -> Result<()> {
    let blobs = ctx.open_roam_db()?.level_two_properties(BOOKS_FILE)?;

    let mut items = vec![goodreads_item(query)];
    items.extend(remembered(ctx, query));
    items.extend(book_items(&blobs, query));

    let mut result = AlfredResult::new(items);
    result.attach_history_payloads()?;
    print_result(&result)
}

/// History is optional here: any failure is logged and yields nothing.
fn remembered(ctx: &CommandContext, query: &str) -> Vec<Item> {
    let found = ctx
        .open_history()
        .and_then(|store| store.find_matching_items(ctx.trigger(), query, now_millis()));
    match found {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "history lookup failed");
            Vec::new()
        }
    }
}
