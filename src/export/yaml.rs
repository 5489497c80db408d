//! YAML Export functionality

use std::io::Write;

use crate::error::{CepBookError, CepBookResult};
use crate::export::json::AddressBookExport;
use crate::models::AddressEntry;

/// Export entries to YAML, using the same envelope as the JSON export
pub fn export_entries_yaml<W: Write>(
    entries: &[&AddressEntry],
    writer: &mut W,
) -> CepBookResult<()> {
    let export = AddressBookExport::new(entries);

    writeln!(writer, "# cepbook address book export")
        .map_err(|e| CepBookError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| CepBookError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CepBookError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CepBookError::Export(e.to_string()))?;

    Ok(())
}
