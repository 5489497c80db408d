//! Entry store for the address book
//!
//! Owns the canonical, insertion-ordered list of entries and keeps the
//! durable slot in sync with it. Writes are gated on [`EntryStore::load`]
//! having run, so an empty in-memory list can never overwrite a stored
//! address book that has not been read yet.

use tracing::{debug, error, warn};

use crate::config::paths::ADDRESS_BOOK_STORAGE_KEY;
use crate::error::{CepBookError, CepBookResult};
use crate::models::{AddressEntry, EntryId, EntryPatch, NewEntry};

use super::slot::KeyValueStore;

/// What [`EntryStore::load`] found in the durable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet (first run)
    Empty,
    /// Entries were rehydrated
    Loaded(usize),
    /// The slot was unreadable or corrupt; started empty instead
    Recovered,
}

/// Canonical address entry collection backed by a durable slot
pub struct EntryStore<S: KeyValueStore> {
    slot: S,
    entries: Vec<AddressEntry>,
    initialized: bool,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Create an empty, not yet initialized store
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            entries: Vec::new(),
            initialized: false,
        }
    }

    /// Create a store and rehydrate it immediately
    pub fn open(slot: S) -> Self {
        let mut store = Self::new(slot);
        store.load();
        store
    }

    /// Rehydrate from the durable slot
    ///
    /// Never fails: a corrupt or unreadable slot is logged and replaced by
    /// an empty list. The store is marked initialized either way.
    pub fn load(&mut self) -> LoadOutcome {
        let outcome = match self.read_slot() {
            Ok(Some(entries)) => {
                let count = entries.len();
                self.entries = entries;
                LoadOutcome::Loaded(count)
            }
            Ok(None) => {
                self.entries.clear();
                LoadOutcome::Empty
            }
            Err(err) => {
                warn!(error = %err, "address book unreadable, starting empty");
                self.entries.clear();
                LoadOutcome::Recovered
            }
        };

        self.initialized = true;
        debug!(?outcome, "address book loaded");
        outcome
    }

    fn read_slot(&self) -> CepBookResult<Option<Vec<AddressEntry>>> {
        match self.slot.get(ADDRESS_BOOK_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                CepBookError::StorageRead(format!("Malformed address book: {}", e))
            }),
            None => Ok(None),
        }
    }

    /// Whether the initial load has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The underlying slot
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[AddressEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Option<&AddressEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find an entry by full UUID or by its short `adr-xxxxxxxx` form
    pub fn find(&self, identifier: &str) -> CepBookResult<Option<&AddressEntry>> {
        if let Ok(id) = identifier.trim().parse::<EntryId>() {
            return Ok(self.get(id));
        }

        let mut matches = self.entries.iter().filter(|e| e.id.matches_short(identifier));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(Some(entry)),
            (None, _) => Ok(None),
            (Some(_), Some(_)) => Err(CepBookError::Validation(format!(
                "Identifier '{}' matches more than one entry",
                identifier
            ))),
        }
    }

    /// Append a new entry and persist
    ///
    /// Entries are never merged: the same CEP may be stored many times.
    pub fn create(&mut self, candidate: NewEntry) -> CepBookResult<AddressEntry> {
        candidate
            .validate()
            .map_err(|e| CepBookError::Validation(e.to_string()))?;

        let mut entry = AddressEntry::from_new(candidate);
        while self.get(entry.id).is_some() {
            entry.id = EntryId::new();
        }

        self.entries.push(entry.clone());
        debug!(id = %entry.id, cep = %entry.cep, "entry created");
        self.persist();

        Ok(entry)
    }

    /// Merge a partial update into the entry with `id`, keeping its position
    ///
    /// A missing ID is a no-op and returns `None`; nothing is written.
    pub fn update(&mut self, id: EntryId, patch: EntryPatch) -> Option<AddressEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        patch.apply_to(entry);
        let updated = entry.clone();

        debug!(id = %id, "entry updated");
        self.persist();

        Some(updated)
    }

    /// Remove the entry with `id`, keeping the order of the rest
    ///
    /// A missing ID is a no-op and returns `None`.
    pub fn remove(&mut self, id: EntryId) -> Option<AddressEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(index);

        debug!(id = %id, "entry removed");
        self.persist();

        Some(removed)
    }

    /// Serialize the full list into the durable slot
    ///
    /// Returns an error only for explicit callers; mutations go through
    /// [`Self::persist`], which logs instead.
    pub fn flush(&self) -> CepBookResult<()> {
        if !self.initialized {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.entries).map_err(|e| {
            CepBookError::StorageWrite(format!("Failed to serialize entries: {}", e))
        })?;
        self.slot.set(ADDRESS_BOOK_STORAGE_KEY, &json)
    }

    // The in-memory list stays authoritative when the write fails.
    fn persist(&self) {
        if let Err(err) = self.flush() {
            error!(error = %err, "failed to persist address book");
        }
    }
}
