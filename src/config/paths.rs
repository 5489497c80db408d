//! Path management for cepbook
//!
//! ## Path Resolution Order
//!
//! 1. `CEPBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/cepbook` on Linux, `%APPDATA%\cepbook\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CepBookError;

/// Storage key of the address book slot
pub const ADDRESS_BOOK_STORAGE_KEY: &str = "addressBook";

/// Manages all paths used by cepbook
#[derive(Debug, Clone)]
pub struct BookPaths {
    /// Base directory for all cepbook data
    base_dir: PathBuf,
}

impl BookPaths {
    /// Create a new BookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and
    /// `CEPBOOK_DATA_DIR` is not set.
    pub fn new() -> Result<Self, CepBookError> {
        let base_dir = if let Ok(custom) = std::env::var("CEPBOOK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "cepbook")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    CepBookError::Config("Could not determine a home directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create BookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path of the durable address book slot
    pub fn address_book_file(&self) -> PathBuf {
        self.data_dir().join(format!("{}.json", ADDRESS_BOOK_STORAGE_KEY))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CepBookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CepBookError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CepBookError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if cepbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("CEPBOOK_DATA_DIR", custom_path);

        let paths = BookPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("CEPBOOK_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.address_book_file(),
            temp_dir.path().join("data").join("addressBook.json")
        );
    }
}
