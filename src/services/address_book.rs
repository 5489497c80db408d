//! Address book service
//!
//! The user-facing flows on top of the entry store: creating an entry from
//! a CEP lookup, renaming, removing, and rendering the filtered view.

use tracing::info;

use crate::error::{CepBookError, CepBookResult};
use crate::lookup::{LookupGateway, PostalCodeService};
use crate::models::{AddressEntry, EntryId, EntryPatch, NewEntry, PostalCode};
use crate::storage::{EntryStore, KeyValueStore};

use super::filter::{FilterCriteria, FilteredView};

/// Service for address book management
pub struct AddressBookService<'a, K: KeyValueStore> {
    store: &'a mut EntryStore<K>,
    default_alias: String,
}

impl<'a, K: KeyValueStore> AddressBookService<'a, K> {
    /// Create a new address book service
    pub fn new(store: &'a mut EntryStore<K>, default_alias: impl Into<String>) -> Self {
        Self {
            store,
            default_alias: default_alias.into(),
        }
    }

    /// Look up a CEP and save the result under `username`
    ///
    /// `cep_input` may contain punctuation. Without an explicit alias the
    /// street name is used, falling back to the configured default alias.
    /// Nothing is stored when the lookup fails.
    pub fn add_from_lookup<S: PostalCodeService>(
        &mut self,
        gateway: &LookupGateway<S>,
        username: &str,
        cep_input: &str,
        alias: Option<&str>,
    ) -> CepBookResult<AddressEntry> {
        let username = username.trim();
        if username.is_empty() {
            return Err(CepBookError::Validation("Username is required".into()));
        }

        let cep =
            PostalCode::sanitize(cep_input).map_err(|e| CepBookError::Validation(e.to_string()))?;

        let fields = gateway.lookup_code(&cep)?;

        let alias = match alias.map(str::trim).filter(|a| !a.is_empty()) {
            Some(alias) => alias.to_string(),
            None if !fields.logradouro.trim().is_empty() => fields.logradouro.clone(),
            None => self.default_alias.clone(),
        };

        let entry = self
            .store
            .create(NewEntry::new(username, alias, cep.as_str()).with_fields(fields))?;

        info!(id = %entry.id, cep = %entry.cep, "address saved");
        Ok(entry)
    }

    /// Change an entry's alias; blank aliases are rejected
    pub fn rename(&mut self, id: EntryId, alias: &str) -> CepBookResult<Option<AddressEntry>> {
        let alias = alias.trim();
        if alias.is_empty() {
            return Err(CepBookError::Validation(
                "Address alias cannot be empty".into(),
            ));
        }

        Ok(self.store.update(id, EntryPatch::alias(alias)))
    }

    /// Remove an entry
    pub fn remove(&mut self, id: EntryId) -> Option<AddressEntry> {
        self.store.remove(id)
    }

    /// Find an entry by full or short ID
    pub fn find(&self, identifier: &str) -> CepBookResult<Option<&AddressEntry>> {
        self.store.find(identifier)
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[AddressEntry] {
        self.store.entries()
    }

    /// Filtered entries plus the city/state choice lists
    pub fn view(&self, criteria: &FilterCriteria) -> FilteredView<'_> {
        FilteredView::compute(self.store.entries(), criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::testing::FakeService;
    use crate::models::AddressFields;
    use crate::services::filter::FilterField;
    use crate::storage::MemoryKeyValueStore;

    fn se() -> AddressFields {
        AddressFields {
            logradouro: "Praça da Sé".into(),
            bairro: "Sé".into(),
            localidade: "São Paulo".into(),
            uf: "SP".into(),
            ..AddressFields::default()
        }
    }

    fn no_street() -> AddressFields {
        AddressFields {
            localidade: "Acrelândia".into(),
            uf: "AC".into(),
            ..AddressFields::default()
        }
    }

    fn fake() -> FakeService {
        FakeService::new()
            .with("01001000", se())
            .with("69945000", no_street())
    }

    #[test]
    fn test_add_uses_street_as_alias() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let gateway = LookupGateway::new(fake());
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        let entry = service.add_from_lookup(&gateway, "Ana", "01001-000", None).unwrap();

        assert_eq!(entry.cep, "01001000");
        assert_eq!(entry.address_alias, "Praça da Sé");
        assert_eq!(entry.city(), "São Paulo");
        assert_eq!(service.entries().len(), 1);
    }

    #[test]
    fn test_add_falls_back_to_default_alias() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let gateway = LookupGateway::new(fake());
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        let entry = service.add_from_lookup(&gateway, "Ana", "69945000", None).unwrap();
        assert_eq!(entry.address_alias, "Meu endereço");

        let entry = service
            .add_from_lookup(&gateway, "Ana", "69945000", Some(" Sítio "))
            .unwrap();
        assert_eq!(entry.address_alias, "Sítio");
    }

    #[test]
    fn test_add_rejects_bad_input_without_lookup() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let service_backend = fake();
        let gateway = LookupGateway::new(&service_backend);
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        assert!(service
            .add_from_lookup(&gateway, "  ", "01001000", None)
            .unwrap_err()
            .is_validation());
        assert!(service
            .add_from_lookup(&gateway, "Ana", "1234567", None)
            .unwrap_err()
            .is_validation());

        assert!(service_backend.requests.borrow().is_empty());
        assert!(service.entries().is_empty());
    }

    #[test]
    fn test_add_unknown_cep_stores_nothing() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let gateway = LookupGateway::new(fake());
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        let err = service.add_from_lookup(&gateway, "Ana", "00000000", None).unwrap_err();
        assert!(matches!(err, CepBookError::PostalCodeNotFound(_)));
        assert!(service.entries().is_empty());
    }

    #[test]
    fn test_add_transport_failure_stores_nothing() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let gateway = LookupGateway::new(FakeService::failing());
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        let err = service.add_from_lookup(&gateway, "Ana", "01001000", None).unwrap_err();
        assert!(err.is_retryable());
        assert!(service.entries().is_empty());
    }

    #[test]
    fn test_rename() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let gateway = LookupGateway::new(fake());
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        let entry = service.add_from_lookup(&gateway, "Ana", "01001000", None).unwrap();

        let renamed = service.rename(entry.id, "Escritório").unwrap().unwrap();
        assert_eq!(renamed.address_alias, "Escritório");
        assert_eq!(renamed.fields, entry.fields);

        assert!(service.rename(entry.id, "   ").unwrap_err().is_validation());
        assert!(service.rename(EntryId::new(), "Casa").unwrap().is_none());
    }

    #[test]
    fn test_view_follows_mutations() {
        let mut store = EntryStore::open(MemoryKeyValueStore::new());
        let gateway = LookupGateway::new(fake());
        let mut service = AddressBookService::new(&mut store, "Meu endereço");

        let first = service.add_from_lookup(&gateway, "Ana", "01001000", None).unwrap();
        service.add_from_lookup(&gateway, "Bruno", "69945000", None).unwrap();

        let criteria = FilterCriteria::new().with(FilterField::State, "sp");
        assert_eq!(service.view(&criteria).entries.len(), 1);
        assert_eq!(service.view(&criteria).states, vec!["AC", "SP"]);

        service.remove(first.id);
        let view = service.view(&criteria);
        assert!(view.entries.is_empty());
        assert_eq!(view.states, vec!["AC"]);
    }
}
