//! Strongly-typed ID wrapper for address entries
//!
//! Entries are addressed by a random UUID. The short display form
//! (`adr-` + first 8 hex digits) is what users see and type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "adr-";

/// Unique identifier of an address entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse an ID from a full UUID string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Check whether a user-typed short id (with or without the `adr-`
    /// prefix, hyphens ignored) is a prefix of this ID
    pub fn matches_short(&self, short: &str) -> bool {
        let short = short.trim().to_lowercase();
        let short: String = short
            .strip_prefix(DISPLAY_PREFIX)
            .unwrap_or(&short)
            .chars()
            .filter(|c| *c != '-')
            .collect();
        !short.is_empty() && self.0.simple().to_string().starts_with(&short)
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
