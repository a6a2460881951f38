//! File System Utilities
//!
//! Configuration directory management.

use crate::constants::{PROJECT_APPLICATION, PROJECT_ORGANIZATION, PROJECT_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/locale-switcher/` or `$XDG_CONFIG_HOME/locale-switcher/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.locale-switcher/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\locale-switcher\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) =
        ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION)
    else {
        return Err(Error::StorageUnavailable {
            message: "Could not determine project directories".to_string(),
        });
    };

    ensure_dir(project_dirs.config_dir())
}

/// Create `dir` (and parents) if missing; an existing non-directory is an error
pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Read a file, treating a missing file as empty
pub fn read_to_string_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let content = read_to_string_or_empty(&dir.path().join("absent.toml")).expect("read");
        assert!(content.is_empty());
    }

    #[test]
    fn ensure_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b");
        let created = ensure_dir(&nested).expect("create");
        assert!(created.is_dir());
    }

    #[test]
    fn ensure_dir_fails_on_regular_file() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        assert!(ensure_dir(file.path()).is_err());
    }
}
