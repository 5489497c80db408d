//! JSON Export functionality
//!
//! Exports entries to JSON wrapped in a versioned envelope.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CepBookError, CepBookResult};
use crate::models::AddressEntry;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBookExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported entries
    pub entry_count: usize,

    /// Entries in address book order
    pub entries: Vec<AddressEntry>,
}

impl AddressBookExport {
    pub fn new(entries: &[&AddressEntry]) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            entry_count: entries.len(),
            entries: entries.iter().map(|e| (*e).clone()).collect(),
        }
    }
}

/// Export entries to JSON
pub fn export_entries_json<W: Write>(
    entries: &[&AddressEntry],
    writer: &mut W,
    pretty: bool,
) -> CepBookResult<()> {
    let export = AddressBookExport::new(entries);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| CepBookError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| CepBookError::Export(e.to_string()))?;
    Ok(())
}
