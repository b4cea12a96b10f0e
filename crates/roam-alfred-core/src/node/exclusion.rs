//! Rules that hide noise nodes from every listing

use serde::{Deserialize, Serialize};

use crate::props::PropertySet;

/// Which nodes never show up in results.
///
/// A node is excluded when any rule holds: one of its tags is denied, its file
/// path contains a denied fragment, or its file title starts with a denied
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionPolicy {
    /// Tags that hide a node (exact match)
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,

    /// Path fragments that hide a node
    #[serde(default = "default_path_substrings")]
    pub path_substrings: Vec<String>,

    /// File title prefixes that hide a node
    #[serde(default = "default_file_title_prefixes")]
    pub file_title_prefixes: Vec<String>,
}

fn default_tags() -> Vec<String> {
    vec![
        "ARCHIVE".to_string(),
        "feeds".to_string(),
        "chrome_link".to_string(),
    ]
}

fn default_path_substrings() -> Vec<String> {
    vec!["/drive/".to_string()]
}

fn default_file_title_prefixes() -> Vec<String> {
    vec!["drive-shard".to_string()]
}

impl Default for ExclusionPolicy {
    fn default() -> Self {
        Self {
            tags: default_tags(),
            path_substrings: default_path_substrings(),
            file_title_prefixes: default_file_title_prefixes(),
        }
    }
}

impl ExclusionPolicy {
    /// Policy that excludes nothing
    pub fn none() -> Self {
        Self {
            tags: Vec::new(),
            path_substrings: Vec::new(),
            file_title_prefixes: Vec::new(),
        }
    }

    pub fn excludes(&self, props: &PropertySet, file_title: &str) -> bool {
        props
            .tags
            .contains_any_of(self.tags.iter().map(String::as_str))
            || self
                .path_substrings
                .iter()
                .any(|fragment| props.path.contains(fragment.as_str()))
            || self
                .file_title_prefixes
                .iter()
                .any(|prefix| file_title.starts_with(prefix.as_str()))
    }
}
