//! # Table-Lookup Brackets
//!
//! Some authorities publish contribution tables rather than rates:
//! Malaysian SOCSO maps a wage band directly to a fixed employee/employer
//! amount pair. A bracket row is one line of such a table, bounded by an
//! effective window like every other reference row.
//!
//! Brackets encode their own effective caps — the top band of a published
//! table covers "X and above" — so the engine looks brackets up with the
//! pre-ceiling base wage.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontrib_core::{EffectiveWindow, SchemeId};

/// One wage band of a contribution table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLookupBracket {
    /// The table-lookup scheme this band belongs to.
    pub scheme_id: SchemeId,
    /// Lower wage bound (inclusive).
    pub wage_from: Decimal,
    /// Upper wage bound (inclusive).
    pub wage_to: Decimal,
    /// Employee contribution for wages in this band.
    pub employee_amount: Decimal,
    /// Employer contribution for wages in this band.
    pub employer_amount: Decimal,
    /// Validity window.
    #[serde(flatten)]
    pub window: EffectiveWindow,
}

impl TableLookupBracket {
    /// Whether `wage` falls inside this band (inclusive on both ends).
    pub fn covers_wage(&self, wage: Decimal) -> bool {
        wage >= self.wage_from && wage <= self.wage_to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn band() -> TableLookupBracket {
        serde_json::from_str(
            r#"{
                "scheme_id": 2,
                "wage_from": "2900.01",
                "wage_to": "3000.00",
                "employee_amount": "14.75",
                "employer_amount": "51.65",
                "effective_from": "2020-01-01"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_covers_wage_inclusive_bounds() {
        let b = band();
        assert!(b.covers_wage(dec("2900.01")));
        assert!(b.covers_wage(dec("3000.00")));
        assert!(b.covers_wage(dec("2950.00")));
    }

    #[test]
    fn test_covers_wage_excludes_outside() {
        let b = band();
        assert!(!b.covers_wage(dec("2900.00")));
        assert!(!b.covers_wage(dec("3000.01")));
    }
}
