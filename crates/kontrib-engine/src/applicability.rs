//! # Scheme Applicability Filter
//!
//! Selects the schemes that participate in one employee's calculation:
//! active, in force at the calculation date, and covering the employee's
//! nationality class. Output order is `sort_order` then scheme code —
//! payslips and logs list schemes the way a local payroll officer expects
//! to read them, and identically on every run.

use chrono::NaiveDate;

use kontrib_core::Nationality;
use kontrib_refdata::StatutoryScheme;

/// Filter a country's catalog down to the schemes applicable to one
/// employee at one date.
///
/// An empty result (unconfigured country, fully foreign-exempt catalog)
/// is a valid outcome, not an error.
pub fn applicable_schemes<'a>(
    schemes: &'a [StatutoryScheme],
    nationality: Nationality,
    calculation_date: NaiveDate,
) -> Vec<&'a StatutoryScheme> {
    let mut applicable: Vec<&StatutoryScheme> = schemes
        .iter()
        .filter(|s| s.in_force(calculation_date) && s.covers(nationality))
        .collect();
    applicable.sort_by(|a, b| {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.code.cmp(&b.code))
    });
    applicable
}
