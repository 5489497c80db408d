//! Address entry model
//!
//! An entry combines the descriptive fields returned by a CEP lookup with
//! two user-supplied labels: who the address belongs to and what to call it.
//! The JSON field names match the layout of the stored address book.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::EntryId;

/// Descriptive address fields as returned by the lookup service
///
/// Every field is optional on the wire. Missing and `null` values both
/// become empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    #[serde(default, deserialize_with = "nullable_string")]
    pub logradouro: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub complemento: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub bairro: String,
    /// City
    #[serde(default, deserialize_with = "nullable_string")]
    pub localidade: String,
    /// State code (UF)
    #[serde(default, deserialize_with = "nullable_string")]
    pub uf: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub ibge: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub gia: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub ddd: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub siafi: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One saved address record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressEntry {
    /// Unique identifier, never reused
    pub id: EntryId,

    /// Person the address belongs to
    pub username: String,

    /// Display name of the address
    pub address_alias: String,

    /// Postal code the entry was created from; immutable
    pub cep: String,

    #[serde(flatten)]
    pub fields: AddressFields,
}

impl AddressEntry {
    /// Build a stored entry from a candidate, assigning a fresh ID
    pub fn from_new(candidate: NewEntry) -> Self {
        Self {
            id: EntryId::new(),
            username: candidate.username,
            address_alias: candidate.address_alias,
            cep: candidate.cep,
            fields: candidate.fields,
        }
    }

    /// City
    pub fn city(&self) -> &str {
        &self.fields.localidade
    }

    /// State code
    pub fn state(&self) -> &str {
        &self.fields.uf
    }
}

impl fmt::Display for AddressEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.address_alias, self.username)
    }
}

/// Candidate for a new entry, before an ID is assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEntry {
    pub username: String,
    pub address_alias: String,
    pub cep: String,
    pub fields: AddressFields,
}

impl NewEntry {
    /// Create a candidate with the three required fields
    pub fn new(
        username: impl Into<String>,
        address_alias: impl Into<String>,
        cep: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            address_alias: address_alias.into(),
            cep: cep.into(),
            fields: AddressFields::default(),
        }
    }

    /// Attach lookup fields
    pub fn with_fields(mut self, fields: AddressFields) -> Self {
        self.fields = fields;
        self
    }

    /// Check the required fields
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.username.trim().is_empty() {
            return Err(EntryValidationError::EmptyUsername);
        }
        if self.address_alias.trim().is_empty() {
            return Err(EntryValidationError::EmptyAlias);
        }
        if self.cep.trim().is_empty() {
            return Err(EntryValidationError::EmptyCep);
        }
        Ok(())
    }
}

/// Partial update of an entry
///
/// `id` and `cep` are deliberately absent: they cannot change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub username: Option<String>,
    pub address_alias: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
    pub ibge: Option<String>,
    pub gia: Option<String>,
    pub ddd: Option<String>,
    pub siafi: Option<String>,
}

impl EntryPatch {
    /// Patch that only changes the alias
    pub fn alias(alias: impl Into<String>) -> Self {
        Self {
            address_alias: Some(alias.into()),
            ..Self::default()
        }
    }

    /// Merge the set fields into `entry`
    pub fn apply_to(self, entry: &mut AddressEntry) {
        fn merge(target: &mut String, value: Option<String>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        merge(&mut entry.username, self.username);
        merge(&mut entry.address_alias, self.address_alias);

        let fields = &mut entry.fields;
        merge(&mut fields.logradouro, self.logradouro);
        merge(&mut fields.complemento, self.complemento);
        merge(&mut fields.bairro, self.bairro);
        merge(&mut fields.localidade, self.localidade);
        merge(&mut fields.uf, self.uf);
        merge(&mut fields.ibge, self.ibge);
        merge(&mut fields.gia, self.gia);
        merge(&mut fields.ddd, self.ddd);
        merge(&mut fields.siafi, self.siafi);
    }
}

/// Validation errors for new entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyUsername,
    EmptyAlias,
    EmptyCep,
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username is required"),
            Self::EmptyAlias => write!(f, "Address alias is required"),
            Self::EmptyCep => write!(f, "CEP is required"),
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> AddressEntry {
        AddressEntry::from_new(
            NewEntry::new("Ana Silva", "Praça da Sé", "01001000").with_fields(AddressFields {
                logradouro: "Praça da Sé".into(),
                complemento: "lado ímpar".into(),
                bairro: "Sé".into(),
                localidade: "São Paulo".into(),
                uf: "SP".into(),
                ibge: "3550308".into(),
                gia: "1004".into(),
                ddd: "11".into(),
                siafi: "7107".into(),
            }),
        )
    }

    #[test]
    fn test_validation() {
        assert!(NewEntry::new("Ana", "Casa", "01001000").validate().is_ok());
        assert_eq!(
            NewEntry::new("", "Casa", "01001000").validate(),
            Err(EntryValidationError::EmptyUsername)
        );
        assert_eq!(
            NewEntry::new("Ana", "  ", "01001000").validate(),
            Err(EntryValidationError::EmptyAlias)
        );
        assert_eq!(
            NewEntry::new("Ana", "Casa", "").validate(),
            Err(EntryValidationError::EmptyCep)
        );
    }

    #[test]
    fn test_json_layout_uses_camel_case_and_flat_fields() {
        let entry = sample_entry();
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["addressAlias"], "Praça da Sé");
        assert_eq!(value["localidade"], "São Paulo");
        assert_eq!(value["uf"], "SP");
        assert!(value.get("fields").is_none());
    }

    #[test]
    fn test_missing_and_null_fields_default_to_empty() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "username": "Bruno",
            "addressAlias": "Trabalho",
            "cep": "20040002",
            "localidade": "Rio de Janeiro",
            "complemento": null
        }"#;

        let entry: AddressEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.city(), "Rio de Janeiro");
        assert_eq!(entry.fields.complemento, "");
        assert_eq!(entry.state(), "");
    }

    #[test]
    fn test_patch_changes_only_given_fields() {
        let mut entry = sample_entry();
        let before = entry.clone();

        EntryPatch::alias("Escritório").apply_to(&mut entry);

        assert_eq!(entry.address_alias, "Escritório");
        assert_eq!(entry.id, before.id);
        assert_eq!(entry.username, before.username);
        assert_eq!(entry.cep, before.cep);
        assert_eq!(entry.fields, before.fields);
    }
}
