//! Mapping nodes and links to launcher items

pub mod dynamic;

pub use dynamic::{dynamic_items, insert_after_first};

use std::path::{Path, PathBuf};

use crate::alfred::{Icon, Item, Variables};
use crate::config::SearchEngine;
use crate::error::{RoamError, Result};
use crate::link::Link;
use crate::node::Node;
use crate::props::PropertySet;

/// Prefix org uses for elfeed search links
const ELFEED_PREFIX: &str = "elfeed:";

/// Tag marking feeds that belong in the launcher
pub const FEED_TAG: &str = "fomo";

const GOODREADS_SEARCH_URL: &str = "https://www.goodreads.com/search?q=";
const GOODREADS_BLANK_TITLE: &str = "search goodreads";

/// Launcher profile for personal browsing
const HOME_PROFILE: &str = "home";

/// Finds icons under `<org dir>/alfred/images`.
#[derive(Debug, Clone)]
pub struct IconResolver {
    images_dir: Option<PathBuf>,
}

impl IconResolver {
    pub fn new(org_dir: &Path) -> Self {
        Self {
            images_dir: Some(org_dir.join("alfred").join("images")),
        }
    }

    /// Resolver that never finds an icon
    pub fn disabled() -> Self {
        Self { images_dir: None }
    }

    /// First `<base>.png` that exists as a file; empty bases are skipped.
    pub fn pick(&self, bases: &[&str]) -> Option<Icon> {
        let dir = self.images_dir.as_ref()?;
        bases
            .iter()
            .filter(|base| !base.is_empty())
            .map(|base| dir.join(format!("{base}.png")))
            .find(|path| path.is_file())
            .map(|path| Icon {
                path: path.to_string_lossy().into_owned(),
            })
    }
}

/// Item for a node: the id is both uid and action value.
pub fn node_item(node: &Node) -> Item {
    let subtitle = if node.properties().path.is_empty() {
        node.outline_path()
    } else {
        &node.properties().path
    };
    Item::new(node.title())
        .with_uid(node.id())
        .with_subtitle(subtitle)
        .with_arg(node.id())
}

/// Items for ranked nodes, falling back to dynamic entries when nothing
/// matched a non-empty query.
pub fn node_items(
    nodes: &[Node],
    query: &str,
    engines: &[SearchEngine],
    icons: &IconResolver,
) -> Vec<Item> {
    if nodes.is_empty() {
        return dynamic_items(query.trim(), engines, icons);
    }
    nodes.iter().map(node_item).collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Bookmark entries from level-2 headings of the bookmarks file.
///
/// Only bookmarks in exactly `category` are listed. Dynamic entries follow
/// the first match and every item carries `profile = category`.
pub fn bookmark_items(
    blobs: &[String],
    category: &str,
    query: &str,
    engines: &[SearchEngine],
    icons: &IconResolver,
) -> Vec<Item> {
    let matches: Vec<Item> = blobs
        .iter()
        .map(|blob| PropertySet::parse(blob))
        .filter(|props| props.category == category)
        .filter_map(|props| match props.item_link() {
            Ok(link) => Some((props, link)),
            Err(e) => {
                tracing::trace!(error = %e, "skipping bookmark without link");
                None
            }
        })
        .filter(|(props, link)| {
            contains_ignore_case(&link.title, query) || contains_ignore_case(&props.aliases, query)
        })
        .map(|(props, link)| bookmark_item(&props, link, icons))
        .collect();
    tracing::debug!(category, matched = matches.len(), "bookmark search");

    let mut items = insert_after_first(matches, dynamic_items(query, engines, icons));
    for item in &mut items {
        item.variables.profile = category.to_string();
    }
    items
}

fn bookmark_item(props: &PropertySet, link: Link, icons: &IconResolver) -> Item {
    let title_icon = link.title.replace(' ', "_");
    Item::new(link.title.as_str())
        .with_subtitle(link.url.as_str())
        .with_autocomplete(link.url.as_str())
        .with_icon(icons.pick(&[props.icon.as_str(), title_icon.as_str()]))
        .with_variables(Variables {
            browser_override: props.browser_override.clone(),
            new_window: props.new_window.clone(),
            ..Variables::default()
        })
        .with_arg(link.url)
}

/// Feed entries: linked level-2 headings tagged `fomo`.
///
/// The action value keeps a trailing space so another search term can be
/// typed straight after it.
pub fn feed_items(blobs: &[String]) -> Vec<Item> {
    blobs
        .iter()
        .map(|blob| PropertySet::parse(blob))
        .filter(|props| props.tags.contains(FEED_TAG))
        .filter_map(|props| props.item_link().ok())
        .map(|link| {
            let url = link
                .url
                .strip_prefix(ELFEED_PREFIX)
                .unwrap_or(&link.url)
                .trim()
                .to_string();
            Item::new(link.title)
                .with_arg(format!("{url} "))
                .with_subtitle(url)
        })
        .collect()
}

/// Action value of the feed titled exactly `title`.
pub fn resolve_feed(items: &[Item], title: &str) -> Result<String> {
    items
        .iter()
        .find(|item| item.title == title)
        .map(|item| item.arg.clone())
        .ok_or_else(|| RoamError::not_found("feed", title))
}

/// The "search goodreads" entry that leads every book listing.
///
/// A blank query still yields a titled item that opens the search page.
pub fn goodreads_item(query: &str) -> Item {
    let title = if query.is_empty() {
        GOODREADS_BLANK_TITLE
    } else {
        query
    };
    Item::new(title)
        .with_subtitle(format!("search goodreads for {query}"))
        .with_arg(format!("{GOODREADS_SEARCH_URL}{query}"))
        .with_autocomplete(query)
        .with_variables(book_variables(query))
        .saveable()
}

/// Books whose title contains `query`, ignoring case.
pub fn book_items(blobs: &[String], query: &str) -> Vec<Item> {
    blobs
        .iter()
        .filter_map(|blob| PropertySet::parse(blob).item_link().ok())
        .filter(|link| contains_ignore_case(&link.title, query))
        .map(|link| {
            Item::new(link.title.as_str())
                .with_subtitle(link.url.as_str())
                .with_autocomplete(link.title.as_str())
                .with_arg(link.url)
                .with_variables(book_variables(query))
        })
        .collect()
}

fn book_variables(query: &str) -> Variables {
    Variables {
        profile: HOME_PROFILE.to_string(),
        query: query.to_string(),
        ..Variables::default()
    }
}
