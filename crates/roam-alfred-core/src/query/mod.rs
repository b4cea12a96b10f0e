//! Matching and ordering of nodes

pub mod filter;
pub mod pattern;

pub use filter::{matches_category, NodeFilter, ANY_CATEGORY};
pub use pattern::TitlePattern;

use std::time::Instant;

use crate::db::NodeRow;
use crate::node::{Node, NodeBuilder};
use crate::trace_time;

/// Sort nodes by title; equal titles keep their input order.
pub fn rank(nodes: &mut [Node]) {
    nodes.sort_by(|a, b| a.title().cmp(b.title()));
}

/// Build every row, keep the eligible nodes and rank them.
#[tracing::instrument(skip_all, fields(rows = rows.len(), category = %filter.category))]
pub fn search(rows: &[NodeRow], builder: &NodeBuilder, filter: &NodeFilter) -> Vec<Node> {
    let start = Instant::now();
    let mut nodes: Vec<Node> = rows
        .iter()
        .map(|row| builder.build_row(row))
        .filter(|node| filter.is_eligible(node))
        .collect();
    trace_time!(start, "filter_nodes", matched = nodes.len());

    rank(&mut nodes);
    tracing::debug!(matched = nodes.len(), "search complete");
    nodes
}
