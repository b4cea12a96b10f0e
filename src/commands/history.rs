//! `roam-alfred history` - record and recall chosen items

use roam_alfred_core::alfred::{AlfredResult, Item};
use roam_alfred_core::bail_usage;
use roam_alfred_core::error::{RoamError, Result};
use roam_alfred_core::history::now_millis;

use crate::commands::dispatch::command::CommandContext;
use crate::commands::output::print_result;

/// Validate `item` as a launcher item and append it under the trigger.
pub fn execute_add(ctx: &CommandContext, item: &str, query: &str) -> Result<()> {
    if item.trim().is_empty() {
        bail_usage!("--item must not be empty");
    }
    serde_json::from_str::<Item>(item)
        .map_err(|e| RoamError::invalid_value("history item", e))?;
    ctx.open_history()?
        .append(ctx.trigger(), query, item, now_millis())
}

pub fn execute_find(ctx: &CommandContext, query: &str) -> Result<()> {
    let items = ctx
        .open_history()?
        .find_matching_items(ctx.trigger(), query, now_millis())?;
    print_result(&AlfredResult::new(items))
}
