//! # Calculation Outputs
//!
//! The audit-carrying results of a calculation. A contribution records not
//! just the amounts but everything needed to reproduce them: the base
//! amount before capping, the applied salary, whether the ceiling bit, the
//! resolved percentage per side, and the tier that matched.
//!
//! Outputs are serialize-only: a summary's totals are recomputed from its
//! contributions at construction and are never loaded from elsewhere, so
//! there is no deserialization path that could smuggle in stale totals.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use kontrib_core::{CountryCode, SchemeCode};
use kontrib_refdata::{CalculationMethod, SchemeType};

use crate::context::EmployeeContext;

/// The calculated contribution for one scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatutoryContribution {
    /// Scheme code (e.g., `EPF`).
    pub scheme_code: SchemeCode,
    /// Scheme English name.
    pub scheme_name: String,
    /// Statutory category of the scheme.
    pub scheme_type: SchemeType,
    /// Method the amounts were derived by.
    pub calculation_method: CalculationMethod,
    /// Wage base before any ceiling.
    pub calculation_base_amount: Decimal,
    /// Wage the rate was actually applied to (base, or the ceiling).
    pub applied_salary: Decimal,
    /// Whether the ceiling capped the base.
    pub capped: bool,
    /// Employee contribution after rounding.
    pub employee_amount: Decimal,
    /// Employer contribution after rounding.
    pub employer_amount: Decimal,
    /// `employee_amount + employer_amount`.
    pub total_amount: Decimal,
    /// Employee-side percentage used, when the side was percentage-based.
    pub employee_rate: Option<Decimal>,
    /// Employer-side percentage used, when the side was percentage-based.
    pub employer_rate: Option<Decimal>,
    /// Code of the matched rate tier (absent for table lookups).
    pub tier_code: Option<String>,
    /// Description of the matched rate tier.
    pub tier_description: Option<String>,
    /// Whether the scheme's rounding policy was applied to the sides.
    pub rounding_applied: bool,
}

/// All contributions for one employee at one date, with recomputed totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionSummary {
    /// Country the calculation ran for.
    pub country: CountryCode,
    /// The employee context the calculation was requested with.
    pub employee: EmployeeContext,
    /// The explicit date every resolution was driven by.
    pub calculation_date: NaiveDate,
    /// Contributions in applicability order (scheme sort order, then code).
    pub contributions: Vec<StatutoryContribution>,
    /// Sum of employee amounts.
    pub total_employee: Decimal,
    /// Sum of employer amounts.
    pub total_employer: Decimal,
    /// `total_employee + total_employer`.
    pub total_combined: Decimal,
}

impl ContributionSummary {
    /// Assemble a summary, computing the totals from the contributions.
    pub fn new(
        country: CountryCode,
        employee: EmployeeContext,
        calculation_date: NaiveDate,
        contributions: Vec<StatutoryContribution>,
    ) -> Self {
        let total_employee: Decimal = contributions.iter().map(|c| c.employee_amount).sum();
        let total_employer: Decimal = contributions.iter().map(|c| c.employer_amount).sum();
        Self {
            country,
            employee,
            calculation_date,
            contributions,
            total_employee,
            total_employer,
            total_combined: total_employee + total_employer,
        }
    }
}
