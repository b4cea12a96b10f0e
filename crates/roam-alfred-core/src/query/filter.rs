//! Node eligibility

use super::pattern::TitlePattern;
use crate::node::Node;

/// Category value that matches every category filter
pub const ANY_CATEGORY: &str = "any";

/// Whether a node's category satisfies the caller's category filter.
///
/// An empty filter accepts everything; nodes in the `any` category are shown
/// under every filter.
pub fn matches_category(node_category: &str, filter: &str) -> bool {
    filter.is_empty() || node_category == ANY_CATEGORY || node_category == filter
}

/// Per-invocation filter over built nodes
#[derive(Debug, Clone, Default)]
pub struct NodeFilter {
    /// Category constraint; empty means unconstrained
    pub category: String,
    /// Title pattern; `None` means every title matches
    pub pattern: Option<TitlePattern>,
}

impl NodeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_pattern(mut self, pattern: Option<TitlePattern>) -> Self {
        self.pattern = pattern;
        self
    }

    /// Check whether a node should be listed
    pub fn is_eligible(&self, node: &Node) -> bool {
        if node.is_excluded() {
            return false;
        }
        if !matches_category(node.category(), &self.category) {
            return false;
        }
        match &self.pattern {
            Some(pattern) => pattern.is_match(node.title()),
            None => true,
        }
    }
}
