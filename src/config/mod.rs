//! Configuration module for cepbook
//!
//! This module provides configuration management including:
//! - Platform path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BookPaths;
pub use settings::Settings;
