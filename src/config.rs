//! Switcher Configuration
//!
//! Optional `config.toml` in the platform config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::constants::{CONFIG_FILE, DEFAULT_TIMEZONE, LOCALE_QUERY_PARAM};
use crate::error::Result;
use crate::helpers::{get_or_create_config_dir, read_to_string_or_empty};

/// How a locale selection is propagated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistStrategy {
    /// In-memory state plus the persisted store
    #[default]
    ContextOnly,
    /// Also read the URL on activation and rewrite it on every selection
    UrlAndStorage,
}

/// Configuration for the locale layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitcherConfig {
    pub strategy: PersistStrategy,
    /// Query parameter carrying the locale code
    pub query_param: String,
    /// Fallback IANA timezone
    pub default_timezone: String,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            strategy: PersistStrategy::default(),
            query_param: LOCALE_QUERY_PARAM.to_string(),
            default_timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

impl SwitcherConfig {
    /// Path of the config file in the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
    }

    /// Load from `path`; a missing or empty file yields defaults
    pub fn try_load(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = read_to_string_or_empty(path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Load from the default location, logging and falling back to defaults on error
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::try_load(&path))
            .unwrap_or_else(|e| {
                error!(error = %e, "Using default configuration");
                Self::default()
            })
    }
}
