//! Synthetic entries offered when the store has nothing for a query

use url::Url;

use super::IconResolver;
use crate::alfred::Item;
use crate::config::SearchEngine;

/// Icon used for "open as URL" entries
const BROWSER_ICON: &str = "chrome";

/// Whether `query` is something the browser can open directly.
fn is_openable_url(query: &str) -> bool {
    match Url::parse(query) {
        Ok(url) => url.scheme().starts_with("http") || url.scheme() == "chrome",
        Err(_) => false,
    }
}

/// Fallback entries for `query`.
///
/// A blank query gets none. A URL gets a single "open" entry, anything else
/// one web search per engine.
pub fn dynamic_items(query: &str, engines: &[SearchEngine], icons: &IconResolver) -> Vec<Item> {
    if query.is_empty() {
        return Vec::new();
    }
    if is_openable_url(query) {
        return vec![Item::new(format!("open \"{query}\""))
            .with_arg(query)
            .with_icon(icons.pick(&[BROWSER_ICON]))];
    }
    engines
        .iter()
        .map(|engine| {
            Item::new(format!("search {} for \"{}\"", engine.name, query))
                .with_arg(format!("{}{}", engine.url, query))
                .with_icon(icons.pick(&[engine.icon.as_str()]))
        })
        .collect()
}

/// Put `dynamic` right after the first real match, or use it alone when
/// nothing matched.
pub fn insert_after_first(mut matches: Vec<Item>, dynamic: Vec<Item>) -> Vec<Item> {
    if matches.is_empty() {
        return dynamic;
    }
    let rest = matches.split_off(1);
    matches.extend(dynamic);
    matches.extend(rest);
    matches
}
