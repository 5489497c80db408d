//! cepbook - Terminal address book backed by CEP lookups
//!
//! Users look up a Brazilian postal code (CEP), label the result with a
//! name and an alias, and keep it in a local address book that can be
//! filtered by name, alias, city and state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: `tracing` subscriber setup
//! - `models`: Core data models (entries, IDs, postal codes)
//! - `storage`: Durable key-value slot and the entry store
//! - `lookup`: CEP lookup gateway and the ViaCEP client
//! - `services`: Business logic and the filter engine
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cepbook::config::{BookPaths, Settings};
//! use cepbook::storage::Storage;
//!
//! let paths = BookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CepBookError, CepBookResult};
