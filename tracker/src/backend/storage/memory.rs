//! In-process key-value store, used by tests and by embedders that manage
//! durability themselves.

use anyhow::Result;
use std::collections::BTreeMap;

use super::traits::KeyValueStorage;

#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: BTreeMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values, e.g. to simulate tampered data
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl KeyValueStorage for MemoryKeyValueStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get_value() {
        let mut store = MemoryKeyValueStore::new();
        store.put_value("records", "[]").unwrap();
        assert_eq!(store.get_value("records").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_get_nonexistent_value() {
        let store = MemoryKeyValueStore::new();
        assert!(store.get_value("missing").unwrap().is_none());
    }

    #[test]
    fn test_put_replace_value() {
        let mut store = MemoryKeyValueStore::with_values([("shops", "[\"A\"]")]);
        store.put_value("shops", "[\"B\"]").unwrap();
        assert_eq!(store.get_value("shops").unwrap().as_deref(), Some("[\"B\"]"));
    }
}
