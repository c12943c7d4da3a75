//! # kontrib-engine — Statutory Contribution Calculation
//!
//! The calculation engine of the Kontrib stack. Given an employee's
//! attributes and an explicit calculation date, it filters the applicable
//! statutory schemes for the employee's country, resolves the single
//! best-matching rate tier (or wage-ceiling row, or table bracket) for
//! each scheme, dispatches on the scheme's calculation method, applies the
//! scheme's statutory rounding, and aggregates the results into a
//! totals-consistent summary.
//!
//! ## The Date Is a Parameter, Not a Clock
//!
//! Statutory rates are legislated ahead of time. Every resolver here is a
//! pure function of the caller-supplied `calculation_date`; nothing in
//! this crate reads the system clock. A rate row whose window opens on
//! 2027-10-01 is invisible on 2027-09-30 and selected on 2027-10-15 —
//! regardless of when the row was inserted or when the process runs.
//!
//! ## Failure Policy
//!
//! Reference-data gaps degrade per scheme, never per run. A scheme with no
//! matching tier is omitted with a warning; a scheme declaring a method
//! without a handler is omitted with an error log; a wage outside every
//! table bracket yields a zero-amount contribution. Only a structurally
//! invalid employee context ([`EngineError`]) propagates to the caller.
//!
//! ## Entry Points
//!
//! - [`ContributionEngine::calculate_all`] — full summary for one employee.
//! - [`ContributionEngine::calculate_scheme`] — one scheme, `None` on
//!   per-scheme failure.
//!
//! ## Crate Policy
//!
//! - Pure, synchronous computation; no mutable shared state, no I/O.
//! - No system-clock reads anywhere.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod applicability;
pub mod calculator;
pub mod ceilings;
pub mod context;
pub mod engine;
pub mod error;
pub mod output;
pub mod rates;
pub mod tables;

pub use applicability::applicable_schemes;
pub use ceilings::resolve_ceiling;
pub use context::EmployeeContext;
pub use engine::ContributionEngine;
pub use error::{EngineError, SkipReason};
pub use output::{ContributionSummary, StatutoryContribution};
pub use rates::resolve_rate;
pub use tables::lookup_bracket;
