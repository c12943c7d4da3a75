//! # Rate Resolver
//!
//! Selects exactly one rate tier for a scheme given the employee's
//! attributes and the calculation date. Candidate rows are filtered by
//! their predicates (effective window, age and salary bounds, nationality
//! condition, PR year, risk category, headcount range) and the survivors
//! are ranked most-specific-first.
//!
//! ## Specificity Ranking
//!
//! A narrow tier must beat a generic fallback that also matches: the
//! age-60 senior tier wins over the catch-all tier covering the same
//! salary band. Ranking is:
//!
//! 1. Count of populated predicate groups (age, salary, nationality,
//!    PR year, risk category, headcount), descending — a tier that
//!    discriminates on more axes is more specific. This also lets a
//!    tier discriminated by a *single* axis outside the classic trio
//!    (e.g., risk-category-only work-accident classes) outrank the
//!    scheme's generic row.
//! 2. Among equal counts, age-bounded before salary-bounded before
//!    nationality-specific rows (the conventional payroll-table order,
//!    kept so a one-predicate senior tier beats a one-predicate salary
//!    band).
//! 3. Latest `effective_from` — the newest gazetted row wins a tie.
//! 4. Tier code, ascending, as a final total-order guarantee.
//!
//! No match is not an error here; the calculator omits the scheme and
//! logs the gap.

use chrono::NaiveDate;

use kontrib_refdata::StatutoryRate;

use crate::context::EmployeeContext;

/// Whether a rate row's predicates all accept the employee at the date.
fn rate_matches(rate: &StatutoryRate, employee: &EmployeeContext, date: NaiveDate) -> bool {
    if !rate.window.contains(date) {
        return false;
    }
    if let Some(min) = rate.min_age {
        if employee.age < min {
            return false;
        }
    }
    if let Some(max) = rate.max_age {
        if employee.age > max {
            return false;
        }
    }
    if let Some(min) = rate.min_salary {
        if employee.gross_salary < min {
            return false;
        }
    }
    if let Some(max) = rate.max_salary {
        if employee.gross_salary > max {
            return false;
        }
    }
    if !rate.nationality_condition.matches(employee.nationality) {
        return false;
    }
    if let Some(year) = rate.pr_year_condition {
        if employee.pr_years != Some(year) {
            return false;
        }
    }
    if let Some(risk) = rate.risk_category {
        if employee.risk_category != Some(risk) {
            return false;
        }
    }
    // Unknown headcount satisfies a zero minimum but never a finite
    // maximum, matching how headcount-conditional levies are applied when
    // the employer size is unreported.
    if let Some(min) = rate.employee_count_min {
        if employee.company_employee_count.unwrap_or(0) < min {
            return false;
        }
    }
    if let Some(max) = rate.employee_count_max {
        if employee.company_employee_count.unwrap_or(u32::MAX) > max {
            return false;
        }
    }
    true
}

/// Number of predicate groups a rate row discriminates on.
fn predicate_count(rate: &StatutoryRate) -> u32 {
    u32::from(rate.min_age.is_some() || rate.max_age.is_some())
        + u32::from(rate.min_salary.is_some() || rate.max_salary.is_some())
        + u32::from(rate.nationality_condition.is_specific())
        + u32::from(rate.pr_year_condition.is_some())
        + u32::from(rate.risk_category.is_some())
        + u32::from(rate.employee_count_min.is_some() || rate.employee_count_max.is_some())
}

/// Resolve the single best-matching rate tier, or `None` when no row
/// matches.
///
/// Deterministic: identical inputs against identical rows always select
/// the same tier.
pub fn resolve_rate<'a>(
    rates: &'a [StatutoryRate],
    employee: &EmployeeContext,
    calculation_date: NaiveDate,
) -> Option<&'a StatutoryRate> {
    rates
        .iter()
        .filter(|r| rate_matches(r, employee, calculation_date))
        .min_by(|a, b| {
            predicate_count(b)
                .cmp(&predicate_count(a))
                .then_with(|| b.min_age.is_some().cmp(&a.min_age.is_some()))
                .then_with(|| b.min_salary.is_some().cmp(&a.min_salary.is_some()))
                .then_with(|| {
                    b.nationality_condition
                        .is_specific()
                        .cmp(&a.nationality_condition.is_specific())
                })
                .then_with(|| b.window.from.cmp(&a.window.from))
                .then_with(|| a.tier_code.cmp(&b.tier_code))
        })
}
