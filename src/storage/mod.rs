//! Storage Adapter
//!
//! Best-effort persistence of the chosen locale code. Backends are fallible;
//! the [`StorageAdapter`] swallows and logs every failure so callers only ever
//! observe "no value" or a dropped write.

mod file;
mod memory;

use std::sync::Arc;

use tracing::{debug, error};

use crate::constants::LOCALE_STORAGE_KEY;
use crate::error::Result;

pub use file::*;
pub use memory::*;

/// A persistent key-value store
pub trait LocaleStorage: Send + Sync {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Best-effort access to the persisted locale code
#[derive(Clone)]
pub struct StorageAdapter {
    backend: Arc<dyn LocaleStorage>,
    key: &'static str,
}

impl StorageAdapter {
    /// Wrap a backend using the default [`LOCALE_STORAGE_KEY`]
    pub fn new(backend: Arc<dyn LocaleStorage>) -> Self {
        Self {
            backend,
            key: LOCALE_STORAGE_KEY,
        }
    }

    /// In-memory adapter, mostly for tests and the `--memory` demo mode
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// The storage key
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Stored locale code, `None` when absent or when the store fails
    pub fn get(&self) -> Option<String> {
        match self.backend.read(self.key) {
            Ok(value) => value,
            Err(e) => {
                error!(error = %e, key = self.key, "Error reading locale from storage");
                None
            }
        }
    }

    /// Persist a locale code; failures are logged and dropped
    pub fn set(&self, value: &str) {
        match self.backend.write(self.key, value) {
            Ok(()) => debug!(key = self.key, value, "Locale persisted"),
            Err(e) => error!(error = %e, key = self.key, "Error saving locale to storage"),
        }
    }
}

impl std::fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAdapter").field("key", &self.key).finish()
    }
}

/// Retrieve the stored locale string, if any
pub fn get_stored_locale(storage: &StorageAdapter) -> Option<String> {
    storage.get()
}

/// Persist the given locale string
pub fn set_stored_locale(storage: &StorageAdapter, locale: &str) {
    storage.set(locale);
}
