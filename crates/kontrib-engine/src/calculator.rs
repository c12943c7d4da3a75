//! # Per-Scheme Calculation Steps
//!
//! The arithmetic building blocks of a single-scheme calculation, in the
//! order the engine applies them: pick the wage base the scheme declares,
//! cap it with the resolved ceiling, then turn a tier's per-side basis
//! into an amount. Dispatch across calculation methods and the final
//! rounding live in [`crate::engine`].

use rust_decimal::Decimal;

use kontrib_refdata::{CalculationBase, RateBasis, StatutoryCeiling};

use crate::context::EmployeeContext;

/// Select the wage amount a scheme's `calculation_base` refers to.
///
/// Components the context does not carry fall back the way payroll
/// expects: basic and ordinary wages fall back to gross, additional wages
/// to zero. Bases with no distinct component in the context resolve to
/// gross.
pub fn calculation_base_amount(employee: &EmployeeContext, base: CalculationBase) -> Decimal {
    match base {
        CalculationBase::Gross => employee.gross_salary,
        CalculationBase::Basic => employee.basic_salary.unwrap_or(employee.gross_salary),
        CalculationBase::OrdinaryWages => {
            employee.ordinary_wages.unwrap_or(employee.gross_salary)
        }
        CalculationBase::AdditionalWages => employee.additional_wages.unwrap_or(Decimal::ZERO),
        CalculationBase::BasicFixedAllowances
        | CalculationBase::TotalWages
        | CalculationBase::NetSalary => employee.gross_salary,
    }
}

/// Cap the base with a resolved ceiling row.
///
/// Returns `(applied_salary, capped)`: the ceiling amount with `capped =
/// true` when the base exceeds it, otherwise the base unchanged.
pub fn apply_ceiling(
    base_amount: Decimal,
    ceiling: Option<&StatutoryCeiling>,
) -> (Decimal, bool) {
    match ceiling {
        Some(c) if base_amount > c.ceiling_amount => (c.ceiling_amount, true),
        _ => (base_amount, false),
    }
}

/// Amount contributed by one side of a matched tier.
///
/// A percentage basis multiplies the applied salary; a fixed basis is the
/// amount itself, independent of salary. A side with no basis contributes
/// zero — a matched tier that is silent on one side is an intentional
/// zero, not a data gap.
pub fn side_amount(applied_salary: Decimal, basis: Option<&RateBasis>) -> Decimal {
    match basis {
        None => Decimal::ZERO,
        Some(RateBasis::Percentage(rate)) => applied_salary * rate,
        Some(RateBasis::Fixed(amount)) => *amount,
    }
}
