//! Storage layer for cepbook
//!
//! Provides the durable key-value slot (JSON files with atomic writes) and
//! the entry store that keeps the address book in sync with it.

pub mod entries;
pub mod file_io;
pub mod init;
pub mod slot;

pub use entries::{EntryStore, LoadOutcome};
pub use file_io::{read_if_exists, write_atomic};
pub use init::initialize_storage;
pub use slot::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

use crate::config::paths::BookPaths;
use crate::error::CepBookError;

/// Main storage coordinator for the file-backed address book
pub struct Storage {
    paths: BookPaths,
    pub entries: EntryStore<FileKeyValueStore>,
}

impl Storage {
    /// Create a new Storage instance; nothing is read until [`Self::load_all`]
    pub fn new(paths: BookPaths) -> Result<Self, CepBookError> {
        paths.ensure_directories()?;

        Ok(Self {
            entries: EntryStore::new(FileKeyValueStore::new(paths.data_dir())),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BookPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> LoadOutcome {
        self.entries.load()
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewEntry;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(!storage.entries.is_initialized());
    }

    #[test]
    fn test_entries_land_in_address_book_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths.clone()).unwrap();

        assert_eq!(storage.load_all(), LoadOutcome::Empty);
        storage
            .entries
            .create(NewEntry::new("Ana", "Casa", "01001000"))
            .unwrap();

        assert!(paths.address_book_file().exists());
    }
}
