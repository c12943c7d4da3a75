//! # Wage Ceilings
//!
//! A ceiling caps the wage amount a scheme's rate is applied to: Singapore
//! CPF's ordinary-wage ceiling, Thailand SSO's 15,000-baht cap. Ceilings
//! are temporal rows like rates — a legislated ceiling increase is a new
//! row with a future `effective_from`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontrib_core::{EffectiveWindow, SchemeId};

/// Which kind of cap a ceiling row expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CeilingType {
    /// Cap on the monthly wage base.
    Monthly,
    /// Cap on the annual wage base.
    Annual,
    /// Cap on monthly ordinary wages (Singapore CPF OW ceiling).
    OrdinaryWageMonthly,
    /// Cap on annual additional wages (Singapore CPF AW ceiling).
    AdditionalWageAnnual,
    /// Cap on the daily wage base.
    Daily,
}

impl Default for CeilingType {
    fn default() -> Self {
        Self::Monthly
    }
}

impl std::fmt::Display for CeilingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Monthly => "MONTHLY",
            Self::Annual => "ANNUAL",
            Self::OrdinaryWageMonthly => "ORDINARY_WAGE_MONTHLY",
            Self::AdditionalWageAnnual => "ADDITIONAL_WAGE_ANNUAL",
            Self::Daily => "DAILY",
        };
        f.write_str(s)
    }
}

/// One wage-ceiling row for a scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryCeiling {
    /// The scheme this ceiling caps.
    pub scheme_id: SchemeId,
    /// Kind of cap.
    #[serde(default)]
    pub ceiling_type: CeilingType,
    /// Maximum wage used as the calculation base.
    pub ceiling_amount: Decimal,
    /// Statutory wage floor, where one exists. Carried as reference data;
    /// the calculator does not apply it.
    #[serde(default)]
    pub min_amount: Option<Decimal>,
    /// Validity window.
    #[serde(flatten)]
    pub window: EffectiveWindow,
}
