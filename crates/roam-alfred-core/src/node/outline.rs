//! Outline path (breadcrumb) handling

use std::sync::LazyLock;

use regex::Regex;

use crate::props::{unescape, TagSet};

/// Quoted heading in a printed elisp list: `("Q1" "Plans \"B\"")`
static OUTLINE_SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""((?:\\.|[^"])*)""#).expect("valid outline segment regex")
});

pub const OUTLINE_SEPARATOR: &str = " > ";

/// Headings of a serialized outline path, in order.
pub fn outline_segments(blob: &str) -> Vec<String> {
    OUTLINE_SEGMENT_RE
        .captures_iter(blob)
        .map(|caps| unescape(&caps[1]))
        .collect()
}

/// Breadcrumb from the file title down to the node.
///
/// File-level nodes (level 0) are just the file title; headings list their
/// ancestors from `outline` and end with their own title.
pub fn outline_chain(
    level: i64,
    file_title: &str,
    node_title: &str,
    outline: Option<&str>,
) -> String {
    let mut parts = vec![file_title.to_string()];
    if level > 0 {
        if let Some(blob) = outline {
            parts.extend(outline_segments(blob));
        }
        parts.push(node_title.to_string());
    }
    parts.join(OUTLINE_SEPARATOR)
}

/// `"<category>: <chain>  #tag1 #tag2"`
pub fn compose_title(category: &str, chain: &str, tags: &TagSet) -> String {
    let mut title = String::new();
    if !category.is_empty() {
        title.push_str(category);
        title.push_str(": ");
    }
    title.push_str(chain);
    if !tags.is_empty() {
        title.push(' ');
        for tag in tags.iter() {
            title.push_str(" #");
            title.push_str(tag);
        }
    }
    title
}
