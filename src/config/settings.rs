//! User settings for cepbook
//!
//! Manages the lookup service endpoint and entry defaults.

use serde::{Deserialize, Serialize};

use super::paths::BookPaths;
use crate::error::CepBookError;

/// User settings for cepbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the ViaCEP-compatible lookup service
    #[serde(default = "default_lookup_base_url")]
    pub lookup_base_url: String,

    /// Request timeout in seconds; `None` keeps the HTTP client's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lookup_timeout_secs: Option<u64>,

    /// Alias used when the lookup result has no street name
    #[serde(default = "default_alias")]
    pub default_alias: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_lookup_base_url() -> String {
    "https://viacep.com.br/ws".to_string()
}

fn default_alias() -> String {
    "Meu endereço".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            lookup_base_url: default_lookup_base_url(),
            lookup_timeout_secs: None,
            default_alias: default_alias(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BookPaths) -> Result<Self, CepBookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CepBookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CepBookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BookPaths) -> Result<(), CepBookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CepBookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            CepBookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.lookup_base_url, "https://viacep.com.br/ws");
        assert_eq!(settings.default_alias, "Meu endereço");
        assert!(settings.lookup_timeout_secs.is_none());
    }

    #[test]
    fn test_load_without_file_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.lookup_base_url = "http://localhost:8080/ws".into();
        settings.lookup_timeout_secs = Some(5);

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"default_alias": "Casa"}"#).unwrap();
        assert_eq!(settings.default_alias, "Casa");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.lookup_base_url, "https://viacep.com.br/ws");
    }
}
