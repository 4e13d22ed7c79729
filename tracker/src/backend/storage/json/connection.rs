use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::TrackerConfig;

/// JsonConnection owns the data directory and maps storage keys to files
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection, creating the base directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
            info!("📁 Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the data directory named by the configuration
    pub fn from_config(config: &TrackerConfig) -> Result<Self> {
        Self::new(&config.data_directory)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file that holds the value for `key`.
    ///
    /// Keys become file names, so only `[A-Za-z0-9_-]` is accepted.
    pub fn key_file_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(anyhow!("Invalid storage key: {:?}", key));
        }
        Ok(self.base_directory.join(format!("{}.json", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let connection = JsonConnection::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(connection.base_directory(), nested.as_path());
    }

    #[test]
    fn test_key_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        assert_eq!(
            connection.key_file_path("records").unwrap(),
            temp_dir.path().join("records.json")
        );
    }

    #[test]
    fn test_key_file_path_rejects_unsafe_keys() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        for key in ["", "../records", "a/b", "with space", "dots.json"] {
            assert!(connection.key_file_path(key).is_err(), "key {:?}", key);
        }
    }
}
