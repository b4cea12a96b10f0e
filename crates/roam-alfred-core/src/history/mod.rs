//! Append-only log of chosen launcher items
//!
//! Each record keeps the trigger it was chosen under, the query typed at the
//! time and the chosen item's JSON. Lookups return the newest matching items,
//! one per distinct item text.

mod schema;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Utc};
use rusqlite::Connection;

use crate::alfred::Item;
use crate::error::{RoamError, Result};
use crate::map_db_err;

/// Maximum rows scanned per lookup, before deduplication
pub const HISTORY_LIMIT: usize = 40;

const FIND_SQL: &str = "SELECT ts, item FROM items
WHERE trigger = ?1 AND query REGEXP ?2
ORDER BY ts DESC, id DESC
LIMIT ?3";

/// One remembered selection, newest first when returned from a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryHit {
    /// Unix milliseconds
    pub ts: i64,
    pub item: String,
}

pub struct HistoryStore {
    conn: Connection,
    path: PathBuf,
}

impl HistoryStore {
    /// Open the history store, creating the file and its schema when missing.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| RoamError::store_unavailable("history store", path, e))?;
        }
        let fresh = !path.exists();
        let conn = Connection::open(path)
            .map_err(|e| RoamError::store_unavailable("history store", path, e))?;
        schema::create_schema(&conn)
            .map_err(|e| RoamError::store_unavailable("history store", path, e))?;
        schema::register_regexp(&conn).map_err(|e| map_db_err!("register regexp", e))?;

        if fresh {
            tracing::info!(path = %path.display(), "initialized history store");
        } else {
            tracing::debug!(path = %path.display(), "opened history store");
        }
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a chosen item.
    pub fn append(&self, trigger: &str, query: &str, item_json: &str, ts_millis: i64) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO items (ts, trigger, query, item) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![ts_millis, trigger, query, item_json],
            )
            .map_err(|e| map_db_err!("append history item", e))?;
        tracing::debug!(trigger, query, "appended history item");
        Ok(())
    }

    /// Items recorded under `trigger` whose query shares a term with `query`.
    ///
    /// Newest first, deduplicated by item text (the newest copy is kept).
    pub fn find_matching(&self, trigger: &str, query: &str) -> Result<Vec<HistoryHit>> {
        let pattern = query_pattern(query);
        let mut stmt = self
            .conn
            .prepare(FIND_SQL)
            .map_err(|e| map_db_err!("prepare history lookup", e))?;
        let rows = stmt
            .query_map(
                rusqlite::params![trigger, pattern, HISTORY_LIMIT as i64],
                |row| {
                    Ok(HistoryHit {
                        ts: row.get(0)?,
                        item: row.get(1)?,
                    })
                },
            )
            .map_err(|e| map_db_err!("query history", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read history row", e))?;

        let mut seen = HashSet::new();
        let hits: Vec<HistoryHit> = rows
            .into_iter()
            .filter(|hit| seen.insert(hit.item.clone()))
            .collect();
        tracing::debug!(trigger, pattern = %pattern, hits = hits.len(), "history lookup");
        Ok(hits)
    }

    /// Matching history decoded into launcher items, titles prefixed with
    /// their age relative to `now_millis`.
    pub fn find_matching_items(
        &self,
        trigger: &str,
        query: &str,
        now_millis: i64,
    ) -> Result<Vec<Item>> {
        let items = self
            .find_matching(trigger, query)?
            .into_iter()
            .filter_map(|hit| match serde_json::from_str::<Item>(&hit.item) {
                Ok(mut item) => {
                    let age = Duration::milliseconds(now_millis.saturating_sub(hit.ts));
                    item.title = format!("{}: {}", age_label(age), item.title);
                    Some(item)
                }
                Err(e) => {
                    tracing::warn!(error = %e, item = %hit.item, "skipping undecodable history item");
                    None
                }
            })
            .collect();
        Ok(items)
    }
}

/// Current time in the unit the store uses
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Regex accepting any query that contains one of the terms of `query`.
///
/// An empty query yields the empty pattern, which matches everything.
pub fn query_pattern(query: &str) -> String {
    query
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

/// Coarse age bucket shown in front of remembered items
pub fn age_label(age: Duration) -> &'static str {
    if age > Duration::days(31) {
        "month+"
    } else if age > Duration::weeks(1) {
        "week+"
    } else if age > Duration::days(1) {
        "day+"
    } else if age > Duration::hours(1) {
        "hour+"
    } else if age > Duration::minutes(1) {
        "minute+"
    } else {
        "-minute"
    }
}
