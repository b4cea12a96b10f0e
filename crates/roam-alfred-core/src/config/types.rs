//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

use crate::node::ExclusionPolicy;

/// Default bound on OS automation subprocesses
pub const DEFAULT_AUTOMATION_TIMEOUT_MS: u64 = 2000;

/// Search-engine key used for categories without their own list
pub const DEFAULT_ENGINES_KEY: &str = "default";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// org-roam database (defaults to `~/org/.roam.db`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roam_db: Option<PathBuf>,

    /// History database (defaults to `<data dir>/roam-alfred/history.db`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_db: Option<PathBuf>,

    /// Org directory holding `alfred/images/*.png` icons (defaults to `~/org`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_dir: Option<PathBuf>,

    /// Upper bound for each OS automation call
    #[serde(default = "default_automation_timeout_ms")]
    pub automation_timeout_ms: u64,

    /// Nodes hidden from every listing
    #[serde(default)]
    pub exclusion: ExclusionPolicy,

    /// Web searches offered as dynamic entries, keyed by category.
    /// Configured categories are layered over the built-in `default` list.
    #[serde(
        default = "default_search_engines",
        deserialize_with = "merge_search_engines"
    )]
    pub search_engines: BTreeMap<String, Vec<SearchEngine>>,
}

/// A web search offered when nothing in the store matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEngine {
    /// Shown as `search <name> for "<query>"`
    pub name: String,
    /// Prefix the query is appended to
    pub url: String,
    /// Icon base name under `alfred/images`
    #[serde(default)]
    pub icon: String,
}

impl SearchEngine {
    pub fn new(name: &str, url: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
        }
    }
}

fn default_automation_timeout_ms() -> u64 {
    DEFAULT_AUTOMATION_TIMEOUT_MS
}

/// Engines offered when neither the category nor `default` has any
pub(crate) fn builtin_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine::new("google", "https://www.google.com/search?q=", "chrome"),
        SearchEngine::new("map", "https://www.google.com/maps/search/", "map"),
        SearchEngine::new(
            "youtube",
            "https://www.youtube.com/results?search_query=",
            "youtube",
        ),
    ]
}

pub(crate) fn default_search_engines() -> BTreeMap<String, Vec<SearchEngine>> {
    BTreeMap::from([(DEFAULT_ENGINES_KEY.to_string(), builtin_engines())])
}

fn merge_search_engines<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Vec<SearchEngine>>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut engines = default_search_engines();
    engines.extend(BTreeMap::<String, Vec<SearchEngine>>::deserialize(deserializer)?);
    Ok(engines)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roam_db: None,
            history_db: None,
            org_dir: None,
            automation_timeout_ms: DEFAULT_AUTOMATION_TIMEOUT_MS,
            exclusion: ExclusionPolicy::default(),
            search_engines: default_search_engines(),
        }
    }
}
