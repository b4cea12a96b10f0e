//! `roam-alfred nodes` - search org-roam nodes
//!
//! Lists every node that survives exclusion, the category filter and the
//! query, sorted by title. A query with no match gets web-search entries
//! instead of an empty list.

use std::time::Instant;

use roam_alfred_core::alfred::AlfredResult;
use roam_alfred_core::error::Result;
use roam_alfred_core::projector::node_items;
use roam_alfred_core::query::{search, NodeFilter, TitlePattern};
use roam_alfred_core::trace_time;

use crate::commands::dispatch::command::CommandContext;
use crate::commands::output::print_result;

pub fn execute(ctx: &CommandContext, category: &str, query: &str) -> Result<()> {
    let start = Instant::now();
    let db = ctx.open_roam_db()?;
    let rows = db.node_rows()?;
    trace_time!(start, "load_rows", rows = rows.len());

    let filter = NodeFilter::new()
        .with_category(category)
        .with_pattern(TitlePattern::compile(query)?);
    let nodes = search(&rows, &ctx.node_builder(), &filter);

    let items = node_items(&nodes, query, ctx.engines_for(category), &ctx.icons()?);
    tracing::debug!(category, query, items = items.len(), "nodes");
    print_result(&AlfredResult::new(items))
}
