/// Test utilities for filesystem-backed tests
///
/// `TestEnvironment` owns a temporary directory that is removed when the
/// environment is dropped, even if the test panics.
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::connection::JsonConnection;
use super::kv_repository::JsonKeyValueRepository;

pub struct TestEnvironment {
    /// Kept alive so the directory survives until drop
    _temp_dir: TempDir,
    pub connection: JsonConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = JsonConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    /// A fresh repository over this environment's directory
    pub fn repository(&self) -> JsonKeyValueRepository {
        JsonKeyValueRepository::new(self.connection.clone())
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Overwrite a key's file directly, bypassing the repository
    pub fn write_raw(&self, key: &str, content: &str) -> Result<()> {
        std::fs::write(self.connection.key_file_path(key)?, content)?;
        Ok(())
    }
}
