//! # Employee Context
//!
//! The per-request input to a calculation: who the employee is (country,
//! nationality, age, risk class) and what they earn (gross plus the
//! optional wage components some bases need). Constructed fresh per
//! request and never persisted by the engine.
//!
//! The calculation date is deliberately *not* a field here — every engine
//! operation takes it as an explicit parameter, so there is no stored
//! date to fall out of sync with and no place for an implicit "today" to
//! hide.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontrib_core::{CountryCode, Nationality, RiskCategory};

use crate::error::EngineError;

/// Employee attributes for one calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeContext {
    /// Country of employment.
    pub country: CountryCode,
    /// Nationality classification relative to that country.
    pub nationality: Nationality,
    /// Age in completed years at the calculation date.
    pub age: u8,
    /// Gross monthly salary. Also the wage rate tiers are matched against.
    pub gross_salary: Decimal,
    /// Basic salary, for `BASIC`-based schemes (falls back to gross).
    #[serde(default)]
    pub basic_salary: Option<Decimal>,
    /// Ordinary wages, for CPF-style `ORDINARY_WAGES` bases (falls back
    /// to gross).
    #[serde(default)]
    pub ordinary_wages: Option<Decimal>,
    /// Additional wages, for CPF-style `ADDITIONAL_WAGES` bases (falls
    /// back to zero).
    #[serde(default)]
    pub additional_wages: Option<Decimal>,
    /// Completed years of permanent residency, for graduated PR tiers.
    #[serde(default)]
    pub pr_years: Option<u8>,
    /// Occupational risk category of the employer's industry.
    #[serde(default)]
    pub risk_category: Option<RiskCategory>,
    /// Employer headcount, for headcount-conditional schemes.
    #[serde(default)]
    pub company_employee_count: Option<u32>,
}

impl EmployeeContext {
    /// Minimal context: everything optional absent.
    pub fn new(
        country: CountryCode,
        nationality: Nationality,
        age: u8,
        gross_salary: Decimal,
    ) -> Self {
        Self {
            country,
            nationality,
            age,
            gross_salary,
            basic_salary: None,
            ordinary_wages: None,
            additional_wages: None,
            pr_years: None,
            risk_category: None,
            company_employee_count: None,
        }
    }

    /// Set the basic salary component.
    pub fn with_basic_salary(mut self, amount: Decimal) -> Self {
        self.basic_salary = Some(amount);
        self
    }

    /// Set the ordinary-wages component.
    pub fn with_ordinary_wages(mut self, amount: Decimal) -> Self {
        self.ordinary_wages = Some(amount);
        self
    }

    /// Set the additional-wages component.
    pub fn with_additional_wages(mut self, amount: Decimal) -> Self {
        self.additional_wages = Some(amount);
        self
    }

    /// Set the completed PR years.
    pub fn with_pr_years(mut self, years: u8) -> Self {
        self.pr_years = Some(years);
        self
    }

    /// Set the occupational risk category.
    pub fn with_risk_category(mut self, category: RiskCategory) -> Self {
        self.risk_category = Some(category);
        self
    }

    /// Set the employer headcount.
    pub fn with_company_employee_count(mut self, count: u32) -> Self {
        self.company_employee_count = Some(count);
        self
    }

    /// Check structural validity: no wage component may be negative.
    ///
    /// This is the only input class that propagates as a hard error from
    /// the engine; everything else degrades per scheme.
    pub fn validate(&self) -> Result<(), EngineError> {
        let components = [
            ("gross_salary", Some(self.gross_salary)),
            ("basic_salary", self.basic_salary),
            ("ordinary_wages", self.ordinary_wages),
            ("additional_wages", self.additional_wages),
        ];
        for (name, value) in components {
            if let Some(value) = value {
                if value < Decimal::ZERO {
                    return Err(EngineError::InvalidContext {
                        reason: format!("{name} is negative: {value}"),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_context() -> EmployeeContext {
        EmployeeContext::new(
            CountryCode::new("MY").unwrap(),
            Nationality::Citizen,
            30,
            dec("4500.00"),
        )
    }

    #[test]
    fn test_valid_context_passes() {
        assert!(base_context().validate().is_ok());
    }

    #[test]
    fn test_zero_salary_is_structurally_valid() {
        let ctx = EmployeeContext::new(
            CountryCode::new("MY").unwrap(),
            Nationality::Citizen,
            30,
            Decimal::ZERO,
        );
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_negative_gross_rejected() {
        let mut ctx = base_context();
        ctx.gross_salary = dec("-1.00");
        assert!(ctx.validate().is_err());
    }

    #[test]
    fn test_negative_optional_component_rejected() {
        let ctx = base_context().with_additional_wages(dec("-500.00"));
        assert!(ctx.validate().is_err());
    }

    #[test]
    fn test_builder_sets_components() {
        let ctx = base_context()
            .with_ordinary_wages(dec("6000.00"))
            .with_pr_years(2)
            .with_company_employee_count(120);
        assert_eq!(ctx.ordinary_wages, Some(dec("6000.00")));
        assert_eq!(ctx.pr_years, Some(2));
        assert_eq!(ctx.company_employee_count, Some(120));
    }
}
