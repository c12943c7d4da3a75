//! # Scheme Catalog
//!
//! A statutory scheme is one named contribution program administered by a
//! government authority — a provident fund, a social-security fund, an
//! employment-insurance levy. Each row declares *how* contributions under
//! it are calculated (method, base, rounding) and *who* it applies to
//! (citizens, permanent residents, foreign workers), bounded by an
//! effective window.
//!
//! The scheme row is deliberately self-describing: the engine dispatches
//! on the closed [`CalculationMethod`] enum, so a method without a handler
//! is visible at the `match`, not discovered at runtime by string
//! comparison.

use serde::{Deserialize, Serialize};

use kontrib_core::{
    CountryCode, EffectiveWindow, Nationality, RoundingPolicy, SchemeCode, SchemeId,
};

use crate::ceiling::CeilingType;

/// The statutory category a scheme belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemeType {
    /// Retirement/provident funds (EPF, CPF, NSSF pension).
    Retirement,
    /// Work-injury and social-security funds (SOCSO, SSO).
    SocialSecurity,
    /// Health insurance (BPJS Kesehatan, PhilHealth).
    Health,
    /// Unemployment/employment insurance (EIS, JP).
    Unemployment,
    /// Withholding tax schemes.
    Tax,
    /// Statutory levies (HRDF, skills development).
    Levy,
    /// Trade-union dues collected statutorily.
    TradeUnion,
}

impl std::fmt::Display for SchemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Retirement => "RETIREMENT",
            Self::SocialSecurity => "SOCIAL_SECURITY",
            Self::Health => "HEALTH",
            Self::Unemployment => "UNEMPLOYMENT",
            Self::Tax => "TAX",
            Self::Levy => "LEVY",
            Self::TradeUnion => "TRADE_UNION",
        };
        f.write_str(s)
    }
}

/// How contribution amounts are derived for a scheme.
///
/// Closed enum — the engine matches exhaustively, so adding a variant
/// forces every dispatch site to decide how to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationMethod {
    /// Flat percentage of the applied salary.
    Percentage,
    /// Percentage where the rate depends on a matched tier. Computes
    /// identically to `PERCENTAGE` once a tier is chosen; the tiering is
    /// entirely in rate-resolution predicates.
    TieredPercentage,
    /// Fixed employee/employer amount pair read from a wage-bracket table.
    TableLookup,
    /// Fixed amount per scheme (no generic handler implemented).
    FixedAmount,
    /// Jurisdiction-specific formula (no generic handler implemented).
    Formula,
}

impl std::fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Percentage => "PERCENTAGE",
            Self::TieredPercentage => "TIERED_PERCENTAGE",
            Self::TableLookup => "TABLE_LOOKUP",
            Self::FixedAmount => "FIXED_AMOUNT",
            Self::Formula => "FORMULA",
        };
        f.write_str(s)
    }
}

/// Which wage component the scheme's rate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationBase {
    /// Gross salary.
    Gross,
    /// Basic salary (falls back to gross when not supplied).
    Basic,
    /// Basic salary plus fixed allowances.
    BasicFixedAllowances,
    /// Singapore CPF ordinary wages (falls back to gross).
    OrdinaryWages,
    /// Singapore CPF additional wages (falls back to zero).
    AdditionalWages,
    /// Total wages.
    TotalWages,
    /// Net salary.
    NetSalary,
}

impl Default for CalculationBase {
    fn default() -> Self {
        Self::Gross
    }
}

/// Which worker classes a scheme covers.
///
/// These are coarse catalog-level switches (e.g., Malaysian EPF does not
/// mandate foreign-worker contributions). Finer-grained conditions live on
/// the rate tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityApplicability {
    /// Scheme applies to citizens.
    #[serde(default = "default_true")]
    pub citizen: bool,
    /// Scheme applies to permanent residents.
    #[serde(default = "default_true")]
    pub permanent_resident: bool,
    /// Scheme applies to foreign workers.
    #[serde(default)]
    pub foreign_worker: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NationalityApplicability {
    fn default() -> Self {
        Self {
            citizen: true,
            permanent_resident: true,
            foreign_worker: false,
        }
    }
}

impl NationalityApplicability {
    /// Whether the scheme covers an employee of the given nationality.
    pub fn covers(&self, nationality: Nationality) -> bool {
        match nationality {
            Nationality::Citizen => self.citizen,
            Nationality::PermanentResident => self.permanent_resident,
            Nationality::Foreign => self.foreign_worker,
        }
    }
}

/// One statutory contribution scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatutoryScheme {
    /// Catalog identifier; unique across every pack loaded into one store.
    pub id: SchemeId,
    /// Country the scheme belongs to.
    pub country: CountryCode,
    /// Administering authority code (e.g., `KWSP`, `CPFB`), if recorded.
    #[serde(default)]
    pub authority: Option<String>,
    /// Human-facing scheme code (e.g., `EPF`, `CPF`).
    pub code: SchemeCode,
    /// English name.
    pub name_en: String,
    /// Local-language name.
    #[serde(default)]
    pub name_local: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Statutory category.
    pub scheme_type: SchemeType,
    /// Calculation method dispatched by the engine.
    pub calculation_method: CalculationMethod,
    /// Wage component the rate applies to.
    #[serde(default)]
    pub calculation_base: CalculationBase,
    /// Whether employees contribute under this scheme.
    #[serde(default = "default_true")]
    pub employee_contribution: bool,
    /// Whether employers contribute under this scheme.
    #[serde(default = "default_true")]
    pub employer_contribution: bool,
    /// Worker classes covered.
    #[serde(default)]
    pub applicability: NationalityApplicability,
    /// Whether the employee must hold a member number with the authority.
    #[serde(default)]
    pub member_number_required: bool,
    /// Label of the member number field (e.g., "EPF No.").
    #[serde(default)]
    pub member_number_label: Option<String>,
    /// Rounding method + precision applied to each contribution side.
    #[serde(default)]
    pub rounding: RoundingPolicy,
    /// Which ceiling type caps this scheme's base (default `MONTHLY`).
    #[serde(default)]
    pub ceiling_type: CeilingType,
    /// Catalog ordering for human-expected output (then by code).
    #[serde(default)]
    pub sort_order: u32,
    /// Administrative on/off switch, independent of the window.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Validity window.
    #[serde(flatten)]
    pub window: EffectiveWindow,
    /// Citation of the establishing act/regulation.
    #[serde(default)]
    pub legal_reference: Option<String>,
    /// Compliance notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl StatutoryScheme {
    /// Whether the scheme is active and in force on `date`.
    pub fn in_force(&self, date: chrono::NaiveDate) -> bool {
        self.is_active && self.window.contains(date)
    }

    /// Whether the scheme covers an employee of the given nationality.
    pub fn covers(&self, nationality: Nationality) -> bool {
        self.applicability.covers(nationality)
    }
}
