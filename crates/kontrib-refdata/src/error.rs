//! # Reference-Data Errors
//!
//! Errors raised while loading or validating country packs. These are
//! load-time errors: a pack that fails validation never reaches the store,
//! so the engine can assume structural invariants (ordered windows,
//! non-negative amounts, fraction-valued percentages, resolvable scheme
//! references) on every row it reads.

use thiserror::Error;

use kontrib_core::{CoreError, CountryCode, RateId, SchemeCode, SchemeId};

/// Errors from pack loading and structural validation.
#[derive(Error, Debug)]
pub enum RefDataError {
    /// Reading a pack file failed.
    #[error("failed to read pack file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Parsing a pack document failed.
    #[error("failed to parse pack {path}: {message}")]
    Parse {
        /// Path or label of the document.
        path: String,
        /// Parser diagnostic.
        message: String,
    },

    /// Pack file extension is not `.yaml`, `.yml`, or `.json`.
    #[error("unsupported pack file extension for {path}: expected .yaml, .yml, or .json")]
    UnsupportedExtension {
        /// The offending path.
        path: String,
    },

    /// Two scheme rows share one id.
    #[error("duplicate scheme id {id} in pack for {country}")]
    DuplicateSchemeId {
        /// The duplicated id.
        id: SchemeId,
        /// Pack country.
        country: CountryCode,
    },

    /// A scheme row is structurally invalid.
    #[error("invalid scheme {code}: {message}")]
    InvalidScheme {
        /// Scheme code.
        code: SchemeCode,
        /// What is wrong with it.
        message: String,
    },

    /// A rate row is structurally invalid.
    #[error("invalid rate {id}: {message}")]
    InvalidRate {
        /// Rate row id.
        id: RateId,
        /// What is wrong with it.
        message: String,
    },

    /// A rate/ceiling/bracket row references a scheme not in the pack.
    #[error("{row} references unknown scheme {scheme_id}")]
    UnknownScheme {
        /// Description of the referencing row.
        row: String,
        /// The dangling reference.
        scheme_id: SchemeId,
    },

    /// A ceiling row is structurally invalid.
    #[error("invalid ceiling for scheme {scheme_id}: {message}")]
    InvalidCeiling {
        /// Scheme the ceiling belongs to.
        scheme_id: SchemeId,
        /// What is wrong with it.
        message: String,
    },

    /// A table bracket row is structurally invalid.
    #[error("invalid bracket for scheme {scheme_id}: {message}")]
    InvalidBracket {
        /// Scheme the bracket belongs to.
        scheme_id: SchemeId,
        /// What is wrong with it.
        message: String,
    },

    /// A foundational constructor rejected a value.
    #[error(transparent)]
    Core(#[from] CoreError),
}
