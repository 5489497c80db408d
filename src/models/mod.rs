//! Core data models for cepbook
//!
//! This module contains the data structures of the address book domain:
//! entries, their identifiers, and postal codes.

pub mod entry;
pub mod ids;
pub mod postal_code;

pub use entry::{AddressEntry, AddressFields, EntryPatch, EntryValidationError, NewEntry};
pub use ids::EntryId;
pub use postal_code::{PostalCode, PostalCodeError};
