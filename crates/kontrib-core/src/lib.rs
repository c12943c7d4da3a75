//! # kontrib-core — Foundational Types for the Kontrib Stack
//!
//! This crate is the bedrock of the Kontrib statutory contribution stack.
//! It defines the type-system primitives shared by the reference-data layer
//! and the calculation engine. Every other crate in the workspace depends
//! on `kontrib-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CountryCode`, `SchemeId`,
//!    `SchemeCode`, `RateId` — validated constructors, no bare strings or
//!    integers for identifiers.
//!
//! 2. **Civil dates, never clocks.** Statutory validity is expressed with
//!    `EffectiveWindow` over `chrono::NaiveDate`. Nothing in this crate (or
//!    in the crates above it) reads the system clock: every resolution is a
//!    function of a caller-supplied calculation date, which is what makes
//!    pre-seeded future rates activate on schedule.
//!
//! 3. **Decimal money only.** All amounts and rates are `rust_decimal::Decimal`.
//!    Statutory rounding (`NEAREST`, `NEAREST_WHOLE_UNIT`, `FLOOR`, `CEILING`)
//!    is centralized in [`RoundingPolicy`] so every scheme rounds the same way
//!    its governing authority does.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kontrib-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod country;
pub mod error;
pub mod identity;
pub mod money;
pub mod temporal;
pub mod worker;

// Re-export primary types for ergonomic imports.
pub use country::Country;
pub use error::CoreError;
pub use identity::{CountryCode, RateId, SchemeCode, SchemeId};
pub use money::{RoundingMethod, RoundingPolicy};
pub use temporal::EffectiveWindow;
pub use worker::{Nationality, RiskCategory};
