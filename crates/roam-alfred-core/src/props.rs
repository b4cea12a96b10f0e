//! Property blob parsing
//!
//! org-roam stores each node's properties as a printed elisp association list:
//!
//! ```text
//! (("CATEGORY" . "work") ("ALLTAGS" . #(":a:b:" 0 5 (inherited t))) ("FILE" . "/x.org"))
//! ```
//!
//! Extraction is pattern based rather than a full s-expression reader. Only a
//! handful of keys matter and the blob is tolerated however it is malformed:
//! anything that does not match resolves to an empty field.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `"KEY" . "VALUE"` pairs; values may carry backslash escapes.
static PROPERTY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]+)" \. "((?:\\.|[^"\\])*)""#).expect("valid property regex")
});

/// `ALLTAGS` is a propertized string: `#(":a:b:" ...)` or a plain `":a:b:"`.
static TAGS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""ALLTAGS" \. .{0,2}":([^"]+):""#).expect("valid tags regex")
});

/// Unescape an elisp string body (`\"` and `\\`).
pub fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Unique, sorted set of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tag set from an org tag string such as `a:b:c`.
    pub fn from_colon_list(list: &str) -> Self {
        Self(
            list.split(':')
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(tag)
    }

    pub fn contains_any_of<'a>(&self, tags: impl IntoIterator<Item = &'a str>) -> bool {
        tags.into_iter().any(|tag| self.0.contains(tag))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Tags in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Structured view of one node's property blob.
///
/// Every text field uses the empty string for "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertySet {
    /// Originating file path (`FILE`)
    pub path: String,
    /// Free-form classification (`CATEGORY`)
    pub category: String,
    /// Heading text, often an org link (`ITEM`)
    pub item: String,
    /// Alternate search terms (`ALIASES`)
    pub aliases: String,
    /// Icon name override (`ICON`)
    pub icon: String,
    /// Browser selection override (`BROWSER_OVERRIDE`)
    pub browser_override: String,
    /// Open-in-new-window flag (`NEW_WINDOW`)
    pub new_window: String,
    /// Inherited and local tags (`ALLTAGS`)
    pub tags: TagSet,
}

impl PropertySet {
    /// Parse a raw property blob. Never fails.
    ///
    /// When a key appears more than once the first occurrence wins.
    pub fn parse(blob: &str) -> Self {
        let mut props = PropertySet::default();
        let mut seen = HashSet::new();

        for caps in PROPERTY_RE.captures_iter(blob) {
            let key = &caps[1];
            let field = match key {
                "FILE" => &mut props.path,
                "CATEGORY" => &mut props.category,
                "ITEM" => &mut props.item,
                "ALIASES" => &mut props.aliases,
                "ICON" => &mut props.icon,
                "BROWSER_OVERRIDE" => &mut props.browser_override,
                "NEW_WINDOW" => &mut props.new_window,
                _ => continue,
            };
            if seen.insert(key.to_string()) {
                *field = unescape(&caps[2]);
            }
        }

        if let Some(caps) = TAGS_RE.captures(blob) {
            props.tags = TagSet::from_colon_list(&caps[1]);
        }

        props
    }
}
