use anyhow::Result;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use tracing::debug;

use super::connection::JsonConnection;
use crate::backend::storage::traits::KeyValueStorage;

/// File-per-key store: the value for `key` lives in `<data dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonKeyValueRepository {
    connection: JsonConnection,
}

impl JsonKeyValueRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl KeyValueStorage for JsonKeyValueRepository {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let file_path = self.connection.key_file_path(key)?;
        match fs::read_to_string(&file_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        let file_path = self.connection.key_file_path(key)?;

        // Atomic write: temp file, fsync, then rename over the target
        let temp_path = file_path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &file_path)?;

        debug!("Saved {} bytes to {:?}", value.len(), file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::TestEnvironment;
    use super::*;

    #[test]
    fn test_put_and_get_value() {
        let env = TestEnvironment::new().unwrap();
        let mut repo = env.repository();

        repo.put_value("records", "[1,2]").unwrap();

        assert_eq!(repo.get_value("records").unwrap().as_deref(), Some("[1,2]"));
        assert!(env.base_directory().join("records.json").exists());
        assert!(!env.base_directory().join("records.tmp").exists());
    }

    #[test]
    fn test_get_nonexistent_value() {
        let env = TestEnvironment::new().unwrap();
        assert!(env.repository().get_value("shops").unwrap().is_none());
    }

    #[test]
    fn test_put_replace_value() {
        let env = TestEnvironment::new().unwrap();
        let mut repo = env.repository();

        repo.put_value("shops", "initial_value").unwrap();
        repo.put_value("shops", "updated_value").unwrap();

        assert_eq!(
            repo.get_value("shops").unwrap().as_deref(),
            Some("updated_value")
        );
    }

    #[test]
    fn test_values_visible_to_second_repository() {
        let env = TestEnvironment::new().unwrap();
        env.repository().put_value("records", "[]").unwrap();

        let other = env.repository();
        assert_eq!(other.get_value("records").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_invalid_key_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        let mut repo = env.repository();
        assert!(repo.put_value("../escape", "x").is_err());
        assert!(repo.get_value("../escape").is_err());
    }
}
