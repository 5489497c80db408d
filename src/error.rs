//! Custom error types for cepbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cepbook operations
#[derive(Error, Debug)]
pub enum CepBookError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Missing or malformed user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The postal code is well-formed but the lookup service does not know it
    #[error("CEP not found: {0}")]
    PostalCodeNotFound(String),

    /// Network or service failure during a lookup
    #[error("Failed to look up CEP, try again later: {0}")]
    Transport(String),

    /// The durable slot could not be read or parsed
    #[error("Failed to read address book: {0}")]
    StorageRead(String),

    /// The durable slot could not be written
    #[error("Failed to save address book: {0}")]
    StorageWrite(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CepBookError {
    /// Create a "not found" error for address entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Address entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error (entries or postal codes)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PostalCodeNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether resubmitting the same request might succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CepBookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for cepbook operations
pub type CepBookResult<T> = Result<T, CepBookError>;
