//! # kontrib-refdata — Statutory Reference Data
//!
//! The reference-data layer of the Kontrib stack: the catalog of statutory
//! schemes per country, their conditional rate tiers, wage ceilings, and
//! table-lookup brackets, together with the loading and validation of
//! country packs (YAML/JSON documents maintained by a compliance process
//! outside this workspace).
//!
//! ## Ownership Model
//!
//! Reference data is **read-only** to everything in this workspace. Rows
//! are inserted, corrected, and superseded by an external compliance
//! administration process; the engine consumes them through the
//! [`ReferenceStore`] trait and never mutates them. That one-way flow is
//! what allows a rate enacted today with an `effective_from` two years out
//! to sit in the store inert until a calculation date reaches it.
//!
//! ## Modules
//!
//! - [`scheme`] — scheme catalog rows and nationality applicability.
//! - [`rate`] — conditional rate tiers and the per-side
//!   percentage-or-fixed basis union.
//! - [`ceiling`] — wage ceilings by ceiling type.
//! - [`bracket`] — table-lookup brackets (SOCSO-style contribution tables).
//! - [`pack`] — country-pack documents, parsing, and structural validation.
//! - [`store`] — the read-only store abstraction and in-memory index.
//! - [`schedule`] — enumeration of pre-seeded future rates for compliance
//!   alerting; decoupled from, and never consulted by, resolution.
//!
//! ## Crate Policy
//!
//! - Depends only on `kontrib-core` internally.
//! - No system-clock reads: every query takes an explicit date.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod bracket;
pub mod ceiling;
pub mod error;
pub mod pack;
pub mod rate;
pub mod schedule;
pub mod scheme;
pub mod store;

pub use bracket::TableLookupBracket;
pub use ceiling::{CeilingType, StatutoryCeiling};
pub use error::RefDataError;
pub use pack::CountryPack;
pub use rate::{NationalityCondition, RateBasis, StatutoryRate};
pub use schedule::{upcoming_rate_changes, ScheduledRateChange};
pub use scheme::{
    CalculationBase, CalculationMethod, NationalityApplicability, SchemeType, StatutoryScheme,
};
pub use store::{InMemoryStore, ReferenceStore};
