//! Display formatting for terminal output
//!
//! Provides utilities for formatting address entries for terminal display.

pub mod entry;

pub use entry::{format_choices, format_entry_details, format_entry_list, format_view};
