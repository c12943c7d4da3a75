//! # Ceiling Resolver
//!
//! Finds the wage cap in force for a scheme at a date, if any. Several
//! ceiling rows can exist per scheme (a legislated increase is a new row
//! with a later `effective_from`); among rows whose windows contain the
//! date, the most recently effective one wins. Absence means the scheme
//! is uncapped.

use chrono::NaiveDate;

use kontrib_refdata::{CeilingType, StatutoryCeiling};

/// Resolve the ceiling row in force for a scheme at `calculation_date`,
/// or `None` when the scheme is uncapped.
pub fn resolve_ceiling<'a>(
    ceilings: &'a [StatutoryCeiling],
    ceiling_type: CeilingType,
    calculation_date: NaiveDate,
) -> Option<&'a StatutoryCeiling> {
    ceilings
        .iter()
        .filter(|c| c.ceiling_type == ceiling_type && c.window.contains(calculation_date))
        .max_by_key(|c| c.window.from)
}
