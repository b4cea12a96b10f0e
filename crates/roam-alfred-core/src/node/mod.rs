//! Nodes: one org-roam heading or file enriched with parsed properties

mod exclusion;
mod outline;

pub use exclusion::ExclusionPolicy;
pub use outline::{compose_title, outline_chain, outline_segments, OUTLINE_SEPARATOR};

use crate::db::NodeRow;
use crate::props::PropertySet;

/// A node ready for matching and display.
///
/// Built once per row and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: String,
    title: String,
    outline_path: String,
    properties: PropertySet,
    is_excluded: bool,
}

impl Node {
    /// Stable org-roam identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Searchable display title: category, breadcrumb and tags
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Breadcrumb without category prefix or tag suffix
    pub fn outline_path(&self) -> &str {
        &self.outline_path
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn category(&self) -> &str {
        &self.properties.category
    }

    /// Whether the exclusion policy hid this node at construction time
    pub fn is_excluded(&self) -> bool {
        self.is_excluded
    }
}

/// Builds nodes under a fixed exclusion policy.
#[derive(Debug, Clone, Default)]
pub struct NodeBuilder {
    policy: ExclusionPolicy,
}

impl NodeBuilder {
    pub fn new(policy: ExclusionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ExclusionPolicy {
        &self.policy
    }

    /// Parse the row's property blob and build the node.
    pub fn build_row(&self, row: &NodeRow) -> Node {
        self.build(
            row.id.clone(),
            row.level,
            PropertySet::parse(&row.properties),
            &row.file_title,
            &row.node_title,
            row.olp.as_deref(),
        )
    }

    /// Assemble a node from already-parsed properties.
    pub fn build(
        &self,
        id: String,
        level: i64,
        properties: PropertySet,
        file_title: &str,
        node_title: &str,
        outline: Option<&str>,
    ) -> Node {
        let outline_path = outline_chain(level, file_title, node_title, outline);
        let title = compose_title(&properties.category, &outline_path, &properties.tags);
        let is_excluded = self.policy.excludes(&properties, file_title);
        Node {
            id,
            title,
            outline_path,
            properties,
            is_excluded,
        }
    }
}
