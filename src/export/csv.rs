//! CSV Export functionality

use std::io::Write;

use crate::error::{CepBookError, CepBookResult};
use crate::models::AddressEntry;

const HEADER: [&str; 13] = [
    "id",
    "username",
    "addressAlias",
    "cep",
    "logradouro",
    "complemento",
    "bairro",
    "localidade",
    "uf",
    "ibge",
    "gia",
    "ddd",
    "siafi",
];

/// Export entries to CSV, one row per entry, in the given order
pub fn export_entries_csv<W: Write>(entries: &[&AddressEntry], writer: W) -> CepBookResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| CepBookError::Export(e.to_string()))?;

    for entry in entries {
        let f = &entry.fields;
        let id = entry.id.as_uuid().to_string();
        let record: [&str; 13] = [
            &id,
            &entry.username,
            &entry.address_alias,
            &entry.cep,
            &f.logradouro,
            &f.complemento,
            &f.bairro,
            &f.localidade,
            &f.uf,
            &f.ibge,
            &f.gia,
            &f.ddd,
            &f.siafi,
        ];
        csv_writer
            .write_record(record)
            .map_err(|e| CepBookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CepBookError::Export(e.to_string()))?;

    Ok(())
}
