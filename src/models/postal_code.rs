//! Brazilian postal code (CEP)
//!
//! A CEP is exactly eight ASCII digits. User input may carry the usual
//! `00000-000` punctuation, which [`PostalCode::sanitize`] strips.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validated 8-digit postal code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostalCode(String);

impl PostalCode {
    /// Number of digits in a CEP
    pub const LEN: usize = 8;

    /// Parse an exact 8-digit string, without any cleanup
    pub fn parse(s: &str) -> Result<Self, PostalCodeError> {
        let len = s.chars().count();
        if len != Self::LEN {
            return Err(PostalCodeError::WrongLength(len));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PostalCodeError::NonDigit);
        }
        Ok(Self(s.to_string()))
    }

    /// Strip everything but ASCII digits from user input, then parse
    pub fn sanitize(input: &str) -> Result<Self, PostalCodeError> {
        let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
        Self::parse(&digits)
    }

    /// The eight digits
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `01001-000` style rendering
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostalCode {
    type Err = PostalCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = PostalCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.0
    }
}

/// Reasons a string is not a valid CEP
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostalCodeError {
    WrongLength(usize),
    NonDigit,
}

impl fmt::Display for PostalCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => write!(
                f,
                "Invalid CEP: must contain exactly 8 digits (got {})",
                len
            ),
            Self::NonDigit => write!(f, "Invalid CEP: only digits are allowed"),
        }
    }
}

impl std::error::Error for PostalCodeError {}
