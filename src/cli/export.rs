//! CLI command for data export
//!
//! Writes the (optionally filtered) address book to a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{CepBookError, CepBookResult};
use crate::export::{export_entries_csv, export_entries_json, export_entries_yaml};
use crate::services::filter::apply_filters;
use crate::storage::Storage;

use super::address::FilterArgs;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per address
    Csv,
    /// JSON with a versioned envelope
    Json,
    /// YAML, human-readable
    Yaml,
}

/// Export arguments
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> CepBookResult<()> {
    let entries = apply_filters(storage.entries.entries(), &args.filters.to_criteria());

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CepBookError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Csv => export_entries_csv(&entries, &mut writer)?,
        ExportFormat::Json => export_entries_json(&entries, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_entries_yaml(&entries, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| CepBookError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        println!("Exported {} addresses to: {}", entries.len(), path.display());
    }

    Ok(())
}
