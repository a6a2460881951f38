//! TOML file storage backend

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::LocaleStorage;
use crate::constants::PREFERENCES_FILE;
use crate::error::{Error, Result};
use crate::helpers::{ensure_dir, get_or_create_config_dir, read_to_string_or_empty};

/// Flat `key = "value"` preferences file
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Store backed by an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `preferences.toml` in the platform config directory
    pub fn in_config_dir() -> Result<Self> {
        Self::in_dir(&get_or_create_config_dir()?)
    }

    /// Store backed by `preferences.toml` inside `dir`, which must be a directory
    pub fn in_dir(dir: &Path) -> Result<Self> {
        let path = ensure_dir(dir)?.join(PREFERENCES_FILE);
        info!(path = ?path, "Using preferences file");
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<toml::Table> {
        let content = read_to_string_or_empty(&self.path)?;
        if content.trim().is_empty() {
            return Ok(toml::Table::new());
        }
        Ok(toml::from_str(&content)?)
    }
}

impl LocaleStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let table = self.load_table()?;
        Ok(table
            .get(key)
            .and_then(|value| value.as_str())
            .map(str::to_string))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut table = match self.load_table() {
            Ok(table) => table,
            Err(Error::TomlDe { source }) => {
                warn!(error = %source, path = ?self.path, "Replacing unparsable preferences file");
                toml::Table::new()
            }
            Err(e) => return Err(e),
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&self.path, toml::to_string(&table)?)?;
        Ok(())
    }
}
