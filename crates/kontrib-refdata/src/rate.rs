//! # Rate Tiers
//!
//! A statutory rate row is one conditional tier within a scheme: "11%
//! employee / 13% employer for citizens under 60 earning at most 5,000".
//! The engine's rate resolver filters tiers by their predicates and picks
//! the most specific match for a calculation date; this module holds the
//! row shape and its per-side contribution basis.
//!
//! ## Percentage-or-Fixed, Never Both
//!
//! Legacy payroll tables carry four independently nullable columns
//! (`employee_rate`, `employer_rate`, `employee_fixed`, `employer_fixed`)
//! with an implicit "fixed wins" precedence. Here each side is a single
//! [`RateBasis`] — `Percentage` or `Fixed` — so the precedence question
//! cannot arise. A side with no basis contributes zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontrib_core::{EffectiveWindow, Nationality, RateId, RiskCategory, SchemeId};

/// Nationality condition on a rate tier.
///
/// Distinct from [`Nationality`]: `ALL` is meaningful as a tier condition
/// (matches every employee) but never as an employee attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NationalityCondition {
    /// Matches any nationality.
    All,
    /// Matches citizens only.
    Citizen,
    /// Matches permanent residents only.
    #[serde(rename = "PR")]
    PermanentResident,
    /// Matches foreign workers only.
    Foreign,
}

impl Default for NationalityCondition {
    fn default() -> Self {
        Self::All
    }
}

impl NationalityCondition {
    /// Whether this condition matches an employee's nationality.
    pub fn matches(self, nationality: Nationality) -> bool {
        match self {
            Self::All => true,
            Self::Citizen => nationality == Nationality::Citizen,
            Self::PermanentResident => nationality == Nationality::PermanentResident,
            Self::Foreign => nationality == Nationality::Foreign,
        }
    }

    /// Whether this condition discriminates (anything but `ALL`).
    pub fn is_specific(self) -> bool {
        !matches!(self, Self::All)
    }
}

/// How one side (employee or employer) of a tier contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBasis {
    /// Fraction of the applied salary (`0.11` = 11%).
    Percentage(Decimal),
    /// Fixed amount independent of salary.
    Fixed(Decimal),
}

impl RateBasis {
    /// The percentage rate, when this basis is a percentage.
    pub fn percentage(&self) -> Option<Decimal> {
        match self {
            Self::Percentage(rate) => Some(*rate),
            Self::Fixed(_) => None,
        }
    }
}

/// One conditional rate tier within a scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryRate {
    /// Row identifier, unique within a pack.
    pub id: RateId,
    /// The scheme this tier belongs to.
    pub scheme_id: SchemeId,
    /// Tier code (e.g., `BELOW_60_UPTO_5000`, `SENIOR`).
    pub tier_code: String,
    /// Human-readable tier description.
    #[serde(default)]
    pub tier_description: Option<String>,

    // Match predicates. A `None` bound is unbounded on that side.
    /// Minimum employee age (inclusive).
    #[serde(default)]
    pub min_age: Option<u8>,
    /// Maximum employee age (inclusive).
    #[serde(default)]
    pub max_age: Option<u8>,
    /// Minimum gross salary (inclusive).
    #[serde(default)]
    pub min_salary: Option<Decimal>,
    /// Maximum gross salary (inclusive).
    #[serde(default)]
    pub max_salary: Option<Decimal>,
    /// Nationality condition (`ALL` when absent).
    #[serde(default)]
    pub nationality_condition: NationalityCondition,
    /// Year of permanent residency this tier applies to (Singapore CPF
    /// graduated PR rates: 1 = first year, 2 = second year).
    #[serde(default)]
    pub pr_year_condition: Option<u8>,
    /// Occupational risk category (Indonesian JKK premium classes).
    #[serde(default)]
    pub risk_category: Option<RiskCategory>,
    /// Minimum company headcount (inclusive; absent = 0).
    #[serde(default)]
    pub employee_count_min: Option<u32>,
    /// Maximum company headcount (inclusive; absent = unbounded).
    #[serde(default)]
    pub employee_count_max: Option<u32>,

    /// Employee-side contribution basis; `None` contributes zero.
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub employee: Option<RateBasis>,
    /// Employer-side contribution basis; `None` contributes zero.
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub employer: Option<RateBasis>,

    /// Validity window.
    #[serde(flatten)]
    pub window: EffectiveWindow,
    /// Pre-seeded future rate, flagged for compliance alerting. Has no
    /// effect on resolution — only the window does.
    #[serde(default)]
    pub is_scheduled: bool,
    /// The rate row that replaces this one, forming a temporal chain per
    /// scheme + tier.
    #[serde(default)]
    pub superseded_by: Option<RateId>,

    /// Citation of the gazette/circular establishing this rate.
    #[serde(default)]
    pub source_reference: Option<String>,
    /// Date the compliance team last verified this row.
    #[serde(default)]
    pub verified_date: Option<chrono::NaiveDate>,
    /// Compliance notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl StatutoryRate {
    /// Employee-side percentage, for audit output. `None` when the side is
    /// fixed or absent.
    pub fn employee_percentage(&self) -> Option<Decimal> {
        self.employee.as_ref().and_then(RateBasis::percentage)
    }

    /// Employer-side percentage, for audit output.
    pub fn employer_percentage(&self) -> Option<Decimal> {
        self.employer.as_ref().and_then(RateBasis::percentage)
    }
}
