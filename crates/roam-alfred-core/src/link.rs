//! Org link extraction

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::props::PropertySet;

/// `[[URL][DISPLAY]]`
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[([^\]]+)\]\[([^\]]+)\]\]").expect("valid org link regex")
});

/// Text did not contain an org link.
///
/// Many property values are plain text, so callers treat this as "skip the row".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a link: {0:?}")]
pub struct NotALink(pub String);

/// Target and description of an org link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub url: String,
    pub title: String,
}

/// Extract the first `[[URL][DISPLAY]]` link from `text`.
pub fn extract_link(text: &str) -> Result<Link, NotALink> {
    LINK_RE
        .captures(text)
        .map(|caps| Link {
            url: caps[1].to_string(),
            title: caps[2].to_string(),
        })
        .ok_or_else(|| NotALink(text.to_string()))
}

impl PropertySet {
    /// The link held in the `ITEM` property.
    pub fn item_link(&self) -> Result<Link, NotALink> {
        extract_link(&self.item)
    }
}
