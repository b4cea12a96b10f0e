//! Row shapes read from the org-roam database

use crate::props::unescape;

/// One node row as stored by org-roam.
///
/// `properties` and `olp` keep their raw printed-elisp form; the parser and
/// node builder own their interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRow {
    pub id: String,
    pub level: i64,
    pub properties: String,
    pub file_title: String,
    pub node_title: String,
    pub olp: Option<String>,
}

impl NodeRow {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        let id: String = row.get(0)?;
        let file_title: Option<String> = row.get(3)?;
        let node_title: Option<String> = row.get(4)?;
        Ok(NodeRow {
            id: unquote(&id),
            level: row.get(1)?,
            properties: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            file_title: file_title.as_deref().map(unquote).unwrap_or_default(),
            node_title: node_title.as_deref().map(unquote).unwrap_or_default(),
            olp: row.get(5)?,
        })
    }
}

/// Strip the quotes org-roam keeps around text columns.
///
/// Values that are not quoted are returned unchanged.
pub fn unquote(value: &str) -> String {
    match value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => unescape(inner),
        None => value.to_string(),
    }
}
