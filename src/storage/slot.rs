//! Durable key-value slots
//!
//! The address book is kept as one serialized blob under one key. A
//! [`KeyValueStore`] is the seam between the entry store and wherever that
//! blob lives: a directory of JSON files on disk, or memory in tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{CepBookError, CepBookResult};

use super::file_io::{read_if_exists, write_atomic};

/// Whole-value storage keyed by name; no partial writes
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if it was never written
    fn get(&self, key: &str) -> CepBookResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> CepBookResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> CepBookResult<Option<String>> {
        read_if_exists(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> CepBookResult<()> {
        write_atomic(self.path_for(key), value)
    }
}

/// In-memory store for tests; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, bypassing `set`
    pub fn with_value(self, key: &str, value: &str) -> Self {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Make every subsequent `set` fail
    pub fn fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> CepBookResult<Option<String>> {
        let values = self.values.lock().map_err(|e| {
            CepBookError::StorageRead(format!("Failed to acquire lock: {}", e))
        })?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CepBookResult<()> {
        let failing = self.fail_writes.lock().map(|f| *f).unwrap_or(false);
        if failing {
            return Err(CepBookError::StorageWrite(format!(
                "Write to '{}' rejected",
                key
            )));
        }

        let mut values = self.values.lock().map_err(|e| {
            CepBookError::StorageWrite(format!("Failed to acquire lock: {}", e))
        })?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        assert_eq!(store.get("addressBook").unwrap(), None);
    }

    #[test]
    fn test_file_store_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf());

        store.set("addressBook", "[]").unwrap();

        assert!(temp_dir.path().join("addressBook.json").exists());
        assert_eq!(store.get("addressBook").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryKeyValueStore::new();
        let view = store.clone();

        store.set("k", "v").unwrap();
        assert_eq!(view.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(view.len(), 1);
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let store = MemoryKeyValueStore::new();
        store.fail_writes(true);

        let err = store.set("k", "v").unwrap_err();
        assert!(matches!(err, CepBookError::StorageWrite(_)));
        assert!(store.is_empty());
    }
}
