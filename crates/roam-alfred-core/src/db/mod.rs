//! Read-only access to the org-roam SQLite database

mod rows;

pub use rows::{unquote, NodeRow};

use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::{Connection, OpenFlags};

use crate::error::{RoamError, Result};
use crate::{map_db_err, trace_time};

const NODE_ROWS_SQL: &str = "SELECT
  nodes.id,
  nodes.level,
  nodes.properties,
  files.title,
  nodes.title,
  nodes.olp
FROM nodes
INNER JOIN files ON nodes.file = files.file";

const LEVEL_TWO_PROPERTIES_SQL: &str = "SELECT nodes.properties
FROM nodes
INNER JOIN files ON nodes.file = files.file
WHERE nodes.level = 2 AND files.file LIKE ?1";

/// The notes store. The connection is closed when the value is dropped.
#[derive(Debug)]
pub struct RoamDatabase {
    conn: Connection,
    path: PathBuf,
}

impl RoamDatabase {
    /// Open an existing org-roam database without write access.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RoamError::store_unavailable(
                "notes store",
                path,
                "no such file",
            ));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| RoamError::store_unavailable("notes store", path, e))?;
        tracing::debug!(path = %path.display(), "opened notes store");
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every node joined with its file's title.
    pub fn node_rows(&self) -> Result<Vec<NodeRow>> {
        let start = Instant::now();
        let mut stmt = self
            .conn
            .prepare(NODE_ROWS_SQL)
            .map_err(|e| map_db_err!("prepare node query", e))?;
        let rows = stmt
            .query_map([], NodeRow::from_row)
            .map_err(|e| map_db_err!("query nodes", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read node row", e))?;
        trace_time!(start, "read_node_rows", rows = rows.len());
        Ok(rows)
    }

    /// Raw property blobs of level-2 headings in files whose path contains
    /// `file_fragment` (e.g. `/chrome.org`).
    pub fn level_two_properties(&self, file_fragment: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare(LEVEL_TWO_PROPERTIES_SQL)
            .map_err(|e| map_db_err!("prepare property query", e))?;
        let pattern = format!("%{}%", file_fragment);
        let blobs = stmt
            .query_map([pattern], |row| row.get::<_, Option<String>>(0))
            .map_err(|e| map_db_err!("query properties", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| map_db_err!("read property row", e))?;
        tracing::debug!(file_fragment, rows = blobs.len(), "read level-2 properties");
        Ok(blobs.into_iter().flatten().collect())
    }
}
