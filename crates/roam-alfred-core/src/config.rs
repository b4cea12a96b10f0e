//! Configuration for roam-alfred
//!
//! Stored in `<config dir>/roam-alfred/config.toml`. Every field is optional;
//! a missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use crate::error::{RoamError, Result};

pub use types::{Config, SearchEngine, DEFAULT_AUTOMATION_TIMEOUT_MS, DEFAULT_ENGINES_KEY};

const CONFIG_DIR: &str = "roam-alfred";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "ROAM_ALFRED_CONFIG_DIR";

static BUILTIN_ENGINES: LazyLock<Vec<SearchEngine>> = LazyLock::new(types::builtin_engines);

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| RoamError::Other("unable to determine home directory".to_string()))
}

impl Config {
    /// Location of the config file, honouring `ROAM_ALFRED_CONFIG_DIR`.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    RoamError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            RoamError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn roam_db_path(&self) -> Result<PathBuf> {
        match &self.roam_db {
            Some(path) => Ok(path.clone()),
            None => Ok(home_dir()?.join("org").join(".roam.db")),
        }
    }

    pub fn history_db_path(&self) -> Result<PathBuf> {
        match &self.history_db {
            Some(path) => Ok(path.clone()),
            None => Ok(dirs::data_dir()
                .ok_or_else(|| RoamError::Other("unable to determine data directory".to_string()))?
                .join(CONFIG_DIR)
                .join("history.db")),
        }
    }

    pub fn org_dir_path(&self) -> Result<PathBuf> {
        match &self.org_dir {
            Some(path) => Ok(path.clone()),
            None => Ok(home_dir()?.join("org")),
        }
    }

    pub fn automation_timeout(&self) -> Duration {
        Duration::from_millis(self.automation_timeout_ms)
    }

    /// Search engines for a category, falling back to the `default` list and
    /// then to the built-in engines. Never empty.
    pub fn engines_for(&self, category: &str) -> &[SearchEngine] {
        self.configured_engines(category)
            .or_else(|| self.configured_engines(DEFAULT_ENGINES_KEY))
            .unwrap_or(BUILTIN_ENGINES.as_slice())
    }

    fn configured_engines(&self, key: &str) -> Option<&[SearchEngine]> {
        self.search_engines
            .get(key)
            .filter(|engines| !engines.is_empty())
            .map(Vec::as_slice)
    }
}
