//! History store schema and connection setup

use std::sync::Arc;

use regex::Regex;
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Error as SqlError};

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// `auto_vacuum` must be set before the first table is created to take effect.
const SCHEMA_SQL: &str = r#"
PRAGMA auto_vacuum = INCREMENTAL;
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts INTEGER NOT NULL,
    trigger VARCHAR(32) NOT NULL,
    query VARCHAR(128) NOT NULL,
    item VARCHAR(1024) NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_items_trigger_ts ON items(trigger, ts);
"#;

pub(super) fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Register `regexp(pattern, text)` so `text REGEXP pattern` works in queries.
///
/// The compiled pattern is cached per statement through the auxiliary data slot.
pub(super) fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let pattern: Arc<Regex> =
                ctx.get_or_create_aux(0, |value| -> Result<Regex, BoxError> {
                    Ok(Regex::new(value.as_str()?)?)
                })?;
            let text = ctx
                .get_raw(1)
                .as_str()
                .map_err(|e| SqlError::UserFunctionError(e.into()))?;
            Ok(pattern.is_match(text))
        },
    )
}
