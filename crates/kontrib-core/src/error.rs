//! # Error Types — Foundational Validation Errors
//!
//! Defines the errors raised by validated constructors in this crate.
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Higher layers define their own error enums (`RefDataError` in
//! `kontrib-refdata`, `EngineError` in `kontrib-engine`) and wrap
//! `CoreError` where construction failures can surface.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from foundational type constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Country code is not two ASCII uppercase letters.
    #[error("invalid country code {code:?}: expected two ASCII uppercase letters")]
    InvalidCountryCode {
        /// The rejected input.
        code: String,
    },

    /// Scheme code is empty or whitespace-only.
    #[error("invalid scheme code {code:?}: must be non-empty")]
    InvalidSchemeCode {
        /// The rejected input.
        code: String,
    },

    /// Effective window runs backwards.
    #[error("invalid effective window: from {from} is after until {until}")]
    InvalidWindow {
        /// Start of the rejected window.
        from: NaiveDate,
        /// End of the rejected window.
        until: NaiveDate,
    },
}
