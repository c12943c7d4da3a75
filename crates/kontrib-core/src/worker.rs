//! # Worker Classification Vocabulary
//!
//! The employee-side classification enums shared between the reference-data
//! layer (rate tier predicates) and the calculation engine (employee
//! context): nationality and occupational risk category.
//!
//! `Nationality` deliberately has no `All` variant — "applies to all" is a
//! property of a rate tier's *condition*, never of an employee. The
//! condition-side enum lives with the rate model in `kontrib-refdata`.

use serde::{Deserialize, Serialize};

/// An employee's nationality classification relative to the country of
/// employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Nationality {
    /// Citizen of the employing country.
    Citizen,
    /// Permanent resident of the employing country.
    #[serde(rename = "PR")]
    PermanentResident,
    /// Foreign worker (work-permit or employment-pass holder).
    Foreign,
}

impl std::fmt::Display for Nationality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Citizen => "CITIZEN",
            Self::PermanentResident => "PR",
            Self::Foreign => "FOREIGN",
        };
        f.write_str(s)
    }
}

/// Occupational risk category for work-accident schemes
/// (e.g., Indonesian BPJS JKK premium classes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskCategory {
    /// Class I — administrative/office work.
    VeryLow,
    /// Class II.
    Low,
    /// Class III.
    Medium,
    /// Class IV.
    High,
    /// Class V — mining, heavy construction.
    VeryHigh,
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::VeryLow => "VERY_LOW",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY_HIGH",
        };
        f.write_str(s)
    }
}
