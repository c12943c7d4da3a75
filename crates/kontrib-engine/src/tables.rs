//! # Table-Lookup Resolver
//!
//! For table-lookup schemes (Malaysian SOCSO and its relatives), the
//! published contribution table maps a wage band straight to a fixed
//! employee/employer pair. The resolver takes the *pre-ceiling* base wage
//! — the top band of a published table already encodes the scheme's
//! effective cap — and the calculation date, and returns the band in
//! force, most recently effective first.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use kontrib_refdata::TableLookupBracket;

/// Resolve the bracket covering `wage` at `calculation_date`, or `None`
/// when the wage falls outside every band (the calculator then emits a
/// zero-amount contribution with a warning).
pub fn lookup_bracket<'a>(
    brackets: &'a [TableLookupBracket],
    wage: Decimal,
    calculation_date: NaiveDate,
) -> Option<&'a TableLookupBracket> {
    brackets
        .iter()
        .filter(|b| b.covers_wage(wage) && b.window.contains(calculation_date))
        .max_by_key(|b| b.window.from)
}
