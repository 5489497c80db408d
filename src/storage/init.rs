//! Storage initialization
//!
//! Handles first-run setup: directories, default settings, and an empty
//! address book.

use crate::config::paths::{BookPaths, ADDRESS_BOOK_STORAGE_KEY};
use crate::config::settings::Settings;
use crate::error::CepBookError;

use super::slot::{FileKeyValueStore, KeyValueStore};

/// Initialize storage for a fresh installation
///
/// Existing settings and entries are left untouched.
pub fn initialize_storage(paths: &BookPaths) -> Result<(), CepBookError> {
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    let slot = FileKeyValueStore::new(paths.data_dir());
    if slot.get(ADDRESS_BOOK_STORAGE_KEY)?.is_none() {
        slot.set(ADDRESS_BOOK_STORAGE_KEY, "[]")?;
    }

    Ok(())
}
