//! Export module for cepbook
//!
//! Writes the address book (or a filtered part of it) in several formats:
//! - CSV: spreadsheet-compatible, one row per entry
//! - JSON: machine-readable, wrapped in a versioned envelope
//! - YAML: human-readable version of the JSON envelope

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_entries_csv;
pub use json::{export_entries_json, AddressBookExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_entries_yaml;
