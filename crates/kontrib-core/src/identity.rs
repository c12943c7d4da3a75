//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the identifiers used across the Kontrib stack.
//! These prevent accidental identifier confusion — you cannot pass a
//! `RateId` where a `SchemeId` is expected, and a bare string can never
//! stand in for a country code.
//!
//! `CountryCode` and `SchemeCode` validate at construction *and* at the
//! serde boundary (`try_from` conversions), so reference data loaded from
//! YAML or JSON cannot smuggle in malformed identifiers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// ISO 3166-1 alpha-2 country code (two ASCII uppercase letters).
///
/// The engine keys scheme catalogs by this code; it is validated at
/// construction so an unconfigured-but-well-formed country simply yields
/// an empty scheme list rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Construct a validated country code.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCountryCode`] unless the input is
    /// exactly two ASCII uppercase letters.
    pub fn new(code: &str) -> Result<Self, CoreError> {
        if code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Self(code.to_string()))
        } else {
            Err(CoreError::InvalidCountryCode {
                code: code.to_string(),
            })
        }
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(value: CountryCode) -> Self {
        value.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a statutory scheme row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemeId(pub u32);

impl std::fmt::Display for SchemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scheme:{}", self.0)
    }
}

/// Unique identifier for a statutory rate tier row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RateId(pub u32);

impl std::fmt::Display for RateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rate:{}", self.0)
    }
}

/// Human-facing scheme code (e.g., `EPF`, `CPF`, `SOCSO`, `BPJS_JKK`).
///
/// Non-empty by construction. Codes are unique per country in practice,
/// but uniqueness is a reference-data concern enforced at pack load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchemeCode(String);

impl SchemeCode {
    /// Construct a validated scheme code.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSchemeCode`] if the input is empty or
    /// whitespace-only.
    pub fn new(code: &str) -> Result<Self, CoreError> {
        if code.trim().is_empty() {
            Err(CoreError::InvalidSchemeCode {
                code: code.to_string(),
            })
        } else {
            Ok(Self(code.to_string()))
        }
    }

    /// Access the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SchemeCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SchemeCode> for String {
    fn from(value: SchemeCode) -> Self {
        value.0
    }
}

impl std::fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
