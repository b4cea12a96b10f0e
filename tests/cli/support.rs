use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use rusqlite::{params, Connection};
use tempfile::TempDir;

/// Get a Command for roam-alfred
pub fn roam_alfred() -> Command {
    cargo_bin_cmd!("roam-alfred")
}

const ROAM_SCHEMA: &str = r#"
CREATE TABLE files (file UNIQUE PRIMARY KEY, title, hash NOT NULL, atime NOT NULL, mtime NOT NULL);
CREATE TABLE nodes (
    id NOT NULL PRIMARY KEY, file NOT NULL, level NOT NULL, pos NOT NULL,
    todo, priority, scheduled TEXT, deadline TEXT, title, properties, olp,
    FOREIGN KEY (file) REFERENCES files (file) ON DELETE CASCADE
);
"#;

/// Quote a value the way org-roam prints strings into its database.
fn q(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Throwaway org-roam database, history file, org dir and config dir.
pub struct Fixture {
    pub dir: TempDir,
    conn: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::create_dir_all(dir.path().join("org").join("alfred").join("images")).unwrap();
        let conn = Connection::open(dir.path().join("roam.db")).unwrap();
        conn.execute_batch(ROAM_SCHEMA).unwrap();
        Self { dir, conn }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("roam.db")
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("state").join("history.db")
    }

    pub fn org_dir(&self) -> PathBuf {
        self.dir.path().join("org")
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn add_file(&self, file: &str, title: &str) -> &Self {
        self.conn
            .execute(
                "INSERT INTO files (file, title, hash, atime, mtime) VALUES (?1, ?2, '', '', '')",
                params![q(file), q(title)],
            )
            .unwrap();
        self
    }

    pub fn add_node(
        &self,
        id: &str,
        file: &str,
        level: i64,
        title: &str,
        properties: &str,
        olp: Option<&str>,
    ) -> &Self {
        self.conn
            .execute(
                "INSERT INTO nodes (id, file, level, pos, title, properties, olp)
                 VALUES (?1, ?2, ?3, 1, ?4, ?5, ?6)",
                params![q(id), q(file), level, q(title), properties, olp],
            )
            .unwrap();
        self
    }

    pub fn add_icon(&self, name: &str) -> PathBuf {
        let path = self.org_dir().join("alfred").join("images").join(format!("{name}.png"));
        std::fs::write(&path, b"png").unwrap();
        path
    }

    /// roam-alfred pointed at this fixture, with a clean environment.
    pub fn cmd(&self) -> Command {
        self.cmd_with_db(&self.db_path())
    }

    /// Like [`Fixture::cmd`] but reading notes from `db`.
    pub fn cmd_with_db(&self, db: &Path) -> Command {
        self.cmd_with_stores(db, &self.history_path())
    }

    pub fn cmd_with_stores(&self, db: &Path, history: &Path) -> Command {
        let mut cmd = roam_alfred();
        cmd.arg("--db-path")
            .arg(db)
            .arg("--history-db")
            .arg(history)
            .arg("--org-dir")
            .arg(self.org_dir())
            .env("ROAM_ALFRED_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .env_remove("ROAM_ALFRED_LOG")
            .env("browser_state", "")
            .env("meeting", "")
            .env("clocked_in_task", "");
        cmd
    }
}

/// Run and parse stdout as one launcher JSON document.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Titles of the result items, in order
pub fn titles(value: &serde_json::Value) -> Vec<String> {
    value["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

