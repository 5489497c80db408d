//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod address;
pub mod export;

pub use address::{handle_address_command, AddressCommands, FilterArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
