//! Service layer for cepbook
//!
//! The service layer provides business logic on top of the storage layer:
//! lookup-driven entry creation, validation of edits, and the filter engine.

pub mod address_book;
pub mod filter;

pub use address_book::AddressBookService;
pub use filter::{
    apply_filters, derive_cities, derive_states, Choice, FilterCriteria, FilterField,
    FilteredView,
};
