//! # Contribution Engine
//!
//! Orchestrates one employee's statutory calculation over a reference
//! store: applicability filtering, per-scheme resolution and dispatch,
//! rounding, and aggregation into a totals-consistent summary.
//!
//! The engine borrows its store for the duration of a calculation, which
//! is also the consistency boundary: every rate, ceiling, and bracket
//! read for one employee comes from the same store snapshot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use kontrib_refdata::{CalculationMethod, ReferenceStore, StatutoryScheme};

use crate::applicability::applicable_schemes;
use crate::calculator::{apply_ceiling, calculation_base_amount, side_amount};
use crate::ceilings::resolve_ceiling;
use crate::context::EmployeeContext;
use crate::error::{EngineError, SkipReason};
use crate::output::{ContributionSummary, StatutoryContribution};
use crate::rates::resolve_rate;
use crate::tables::lookup_bracket;

/// The statutory contribution calculator over a reference store.
///
/// Pure and reusable: the engine holds no per-request state, so one
/// instance can serve any number of employees (including concurrently —
/// calculations are independent).
pub struct ContributionEngine<'s, S: ReferenceStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: ReferenceStore + ?Sized> ContributionEngine<'s, S> {
    /// Create an engine over a store snapshot.
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// The schemes that would participate in this employee's calculation
    /// at `calculation_date`, in output order.
    pub fn applicable_schemes(
        &self,
        employee: &EmployeeContext,
        calculation_date: NaiveDate,
    ) -> Vec<&'s StatutoryScheme> {
        applicable_schemes(
            self.store.schemes_for_country(&employee.country),
            employee.nationality,
            calculation_date,
        )
    }

    /// Calculate one scheme's contribution, with the omission cause on
    /// failure.
    ///
    /// Expects a context that already passed
    /// [`EmployeeContext::validate`]; [`Self::calculate_all`] validates
    /// once for the whole run.
    pub fn try_calculate_scheme(
        &self,
        employee: &EmployeeContext,
        scheme: &StatutoryScheme,
        calculation_date: NaiveDate,
    ) -> Result<StatutoryContribution, SkipReason> {
        let base_amount = calculation_base_amount(employee, scheme.calculation_base);
        let ceiling = resolve_ceiling(
            self.store.ceilings_for_scheme(scheme.id),
            scheme.ceiling_type,
            calculation_date,
        );
        let (applied_salary, capped) = apply_ceiling(base_amount, ceiling);

        let (employee_raw, employer_raw, rate_used) = match scheme.calculation_method {
            CalculationMethod::Percentage | CalculationMethod::TieredPercentage => {
                let Some(rate) = resolve_rate(
                    self.store.rates_for_scheme(scheme.id),
                    employee,
                    calculation_date,
                ) else {
                    warn!(
                        scheme = %scheme.code,
                        age = employee.age,
                        nationality = %employee.nationality,
                        %calculation_date,
                        "no matching rate tier; scheme omitted"
                    );
                    return Err(SkipReason::MissingRate);
                };
                debug!(
                    scheme = %scheme.code,
                    tier = %rate.tier_code,
                    %applied_salary,
                    capped,
                    "resolved rate tier"
                );
                (
                    side_amount(applied_salary, rate.employee.as_ref()),
                    side_amount(applied_salary, rate.employer.as_ref()),
                    Some(rate),
                )
            }
            CalculationMethod::TableLookup => {
                // Brackets take the pre-ceiling base; published tables
                // carry their own top band.
                match lookup_bracket(
                    self.store.brackets_for_scheme(scheme.id),
                    base_amount,
                    calculation_date,
                ) {
                    Some(bracket) => {
                        debug!(
                            scheme = %scheme.code,
                            wage_from = %bracket.wage_from,
                            wage_to = %bracket.wage_to,
                            "resolved table bracket"
                        );
                        (bracket.employee_amount, bracket.employer_amount, None)
                    }
                    None => {
                        warn!(
                            scheme = %scheme.code,
                            wage = %base_amount,
                            %calculation_date,
                            "no table bracket covers wage; zero contribution"
                        );
                        (Decimal::ZERO, Decimal::ZERO, None)
                    }
                }
            }
            method @ (CalculationMethod::FixedAmount | CalculationMethod::Formula) => {
                error!(
                    scheme = %scheme.code,
                    %method,
                    "unsupported calculation method; scheme omitted"
                );
                return Err(SkipReason::UnsupportedMethod(method));
            }
        };

        let employee_amount = scheme.rounding.apply(employee_raw);
        let employer_amount = scheme.rounding.apply(employer_raw);

        Ok(StatutoryContribution {
            scheme_code: scheme.code.clone(),
            scheme_name: scheme.name_en.clone(),
            scheme_type: scheme.scheme_type,
            calculation_method: scheme.calculation_method,
            calculation_base_amount: base_amount,
            applied_salary,
            capped,
            employee_amount,
            employer_amount,
            total_amount: employee_amount + employer_amount,
            employee_rate: rate_used.and_then(|r| r.employee_percentage()),
            employer_rate: rate_used.and_then(|r| r.employer_percentage()),
            tier_code: rate_used.map(|r| r.tier_code.clone()),
            tier_description: rate_used.and_then(|r| r.tier_description.clone()),
            rounding_applied: true,
        })
    }

    /// Calculate one scheme's contribution; `None` when the scheme is
    /// omitted (cause already logged).
    pub fn calculate_scheme(
        &self,
        employee: &EmployeeContext,
        scheme: &StatutoryScheme,
        calculation_date: NaiveDate,
    ) -> Option<StatutoryContribution> {
        self.try_calculate_scheme(employee, scheme, calculation_date)
            .ok()
    }

    /// Calculate every applicable scheme for one employee at one date.
    ///
    /// Per-scheme failures shorten the contribution list and never abort
    /// the run; the only hard error is a structurally invalid context.
    pub fn calculate_all(
        &self,
        employee: &EmployeeContext,
        calculation_date: NaiveDate,
    ) -> Result<ContributionSummary, EngineError> {
        employee.validate()?;

        let schemes = self.applicable_schemes(employee, calculation_date);
        let mut contributions = Vec::with_capacity(schemes.len());
        for scheme in schemes {
            if let Some(contribution) =
                self.calculate_scheme(employee, scheme, calculation_date)
            {
                contributions.push(contribution);
            }
        }

        Ok(ContributionSummary::new(
            employee.country.clone(),
            employee.clone(),
            calculation_date,
            contributions,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kontrib_core::{CountryCode, Nationality};
    use kontrib_refdata::{CountryPack, InMemoryStore};
    use std::str::FromStr;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // A deliberately mixed catalog: a percentage scheme, a formula scheme
    // with no handler, and a percentage scheme with no rate rows.
    fn mixed_store() -> InMemoryStore {
        let yaml = r#"
country:
  code: PH
  name_en: Philippines
  currency_code: PHP
schemes:
  - id: 1
    country: PH
    code: SSS
    name_en: Social Security System
    scheme_type: SOCIAL_SECURITY
    calculation_method: PERCENTAGE
    sort_order: 10
    effective_from: 2020-01-01
  - id: 2
    country: PH
    code: WISP
    name_en: Workers Investment and Savings Program
    scheme_type: RETIREMENT
    calculation_method: FORMULA
    sort_order: 20
    effective_from: 2020-01-01
  - id: 3
    country: PH
    code: PAGIBIG
    name_en: Home Development Mutual Fund
    scheme_type: LEVY
    calculation_method: PERCENTAGE
    sort_order: 30
    effective_from: 2020-01-01
rates:
  - id: 10
    scheme_id: 1
    tier_code: DEFAULT
    employee:
      percentage: "0.045"
    employer:
      percentage: "0.095"
    effective_from: 2020-01-01
"#;
        let pack = CountryPack::from_yaml_str("ph.yaml", yaml).unwrap();
        InMemoryStore::from_pack(pack).unwrap()
    }

    fn ph_employee() -> EmployeeContext {
        EmployeeContext::new(
            CountryCode::new("PH").unwrap(),
            Nationality::Citizen,
            30,
            dec("20000.00"),
        )
    }

    #[test]
    fn test_unsupported_method_skips_scheme_only() {
        let store = mixed_store();
        let engine = ContributionEngine::new(&store);
        let summary = engine.calculate_all(&ph_employee(), d(2025, 6, 1)).unwrap();
        // WISP (formula) and PAGIBIG (no rates) are omitted; SSS computes.
        let codes: Vec<_> = summary
            .contributions
            .iter()
            .map(|c| c.scheme_code.as_str())
            .collect();
        assert_eq!(codes, vec!["SSS"]);
    }

    #[test]
    fn test_skip_reasons_are_inspectable() {
        let store = mixed_store();
        let engine = ContributionEngine::new(&store);
        let schemes = engine.applicable_schemes(&ph_employee(), d(2025, 6, 1));
        let wisp = schemes.iter().find(|s| s.code.as_str() == "WISP").unwrap();
        let pagibig = schemes
            .iter()
            .find(|s| s.code.as_str() == "PAGIBIG")
            .unwrap();

        let err = engine
            .try_calculate_scheme(&ph_employee(), wisp, d(2025, 6, 1))
            .unwrap_err();
        assert_eq!(
            err,
            SkipReason::UnsupportedMethod(CalculationMethod::Formula)
        );

        let err = engine
            .try_calculate_scheme(&ph_employee(), pagibig, d(2025, 6, 1))
            .unwrap_err();
        assert_eq!(err, SkipReason::MissingRate);
    }

    #[test]
    fn test_invalid_context_is_the_only_hard_error() {
        let store = mixed_store();
        let engine = ContributionEngine::new(&store);
        let mut employee = ph_employee();
        employee.gross_salary = dec("-1.00");
        assert!(engine.calculate_all(&employee, d(2025, 6, 1)).is_err());
    }

    #[test]
    fn test_unconfigured_country_yields_empty_summary() {
        let store = mixed_store();
        let engine = ContributionEngine::new(&store);
        let mut employee = ph_employee();
        employee.country = CountryCode::new("VN").unwrap();
        let summary = engine.calculate_all(&employee, d(2025, 6, 1)).unwrap();
        assert!(summary.contributions.is_empty());
        assert_eq!(summary.total_combined, Decimal::ZERO);
    }

    #[test]
    fn test_summary_is_idempotent() {
        let store = mixed_store();
        let engine = ContributionEngine::new(&store);
        let first = engine.calculate_all(&ph_employee(), d(2025, 6, 1)).unwrap();
        let second = engine.calculate_all(&ph_employee(), d(2025, 6, 1)).unwrap();
        assert_eq!(first, second);
    }
}
