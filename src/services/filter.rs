//! Filter engine
//!
//! Derives the visible subset of the address book from the current
//! criteria, plus the distinct city and state lists used to populate the
//! filter choices. Everything here is a pure function of
//! `(entries, criteria)` and is recomputed on demand.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::CepBookError;
use crate::models::AddressEntry;

/// Value that selects every city or state
pub const ALL_SENTINEL: &str = "all";

/// Exact-match selector with an "everything" option
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    /// `all` (any case) or an empty value select everything
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL) {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Case-insensitive exact comparison
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.to_lowercase() == value.to_lowercase(),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_SENTINEL),
            Self::Only(value) => write!(f, "{}", value),
        }
    }
}

/// Criteria field addressed by [`FilterCriteria::set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Username,
    AddressAlias,
    City,
    State,
}

impl FromStr for FilterField {
    type Err = CepBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "username" | "name" => Ok(Self::Username),
            "addressalias" | "address_alias" | "alias" => Ok(Self::AddressAlias),
            "city" | "localidade" => Ok(Self::City),
            "state" | "uf" => Ok(Self::State),
            other => Err(CepBookError::Validation(format!(
                "Unknown filter field: '{}'",
                other
            ))),
        }
    }
}

/// Current filter criteria; the default selects everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the username; empty = no filter
    pub username: String,
    /// Case-insensitive substring of the alias; empty = no filter
    pub address_alias: String,
    pub city: Choice,
    pub state: Choice,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a single field, leaving the others alone
    pub fn set(&mut self, field: FilterField, value: &str) {
        match field {
            FilterField::Username => self.username = value.to_string(),
            FilterField::AddressAlias => self.address_alias = value.to_string(),
            FilterField::City => self.city = Choice::parse(value),
            FilterField::State => self.state = Choice::parse(value),
        }
    }

    /// Builder form of [`Self::set`]
    pub fn with(mut self, field: FilterField, value: &str) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is at its all-inclusive default
    pub fn is_empty(&self) -> bool {
        self.username.is_empty()
            && self.address_alias.is_empty()
            && self.city.is_all()
            && self.state.is_all()
    }

    /// Whether a single entry passes every active criterion
    pub fn matches(&self, entry: &AddressEntry) -> bool {
        contains_ignore_case(&entry.username, &self.username)
            && contains_ignore_case(&entry.address_alias, &self.address_alias)
            && self.city.matches(entry.city())
            && self.state.matches(entry.state())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Entries matching all criteria, in their original order
pub fn apply_filters<'a>(
    entries: &'a [AddressEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a AddressEntry> {
    if criteria.is_empty() {
        return entries.iter().collect();
    }
    entries.iter().filter(|e| criteria.matches(e)).collect()
}

/// Distinct non-empty cities, sorted ascending
pub fn derive_cities(entries: &[AddressEntry]) -> Vec<String> {
    distinct_sorted(entries.iter().map(AddressEntry::city))
}

/// Distinct non-empty state codes, sorted ascending
pub fn derive_states(entries: &[AddressEntry]) -> Vec<String> {
    distinct_sorted(entries.iter().map(AddressEntry::state))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Everything the list screen renders, derived in one go
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    pub entries: Vec<&'a AddressEntry>,
    pub cities: Vec<String>,
    pub states: Vec<String>,
    /// Size of the unfiltered collection
    pub total: usize,
}

impl<'a> FilteredView<'a> {
    pub fn compute(entries: &'a [AddressEntry], criteria: &FilterCriteria) -> Self {
        Self {
            entries: apply_filters(entries, criteria),
            cities: derive_cities(entries),
            states: derive_states(entries),
            total: entries.len(),
        }
    }
}
