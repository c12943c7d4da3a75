//! # Money — Statutory Rounding Policies
//!
//! Every statutory authority prescribes its own rounding: Malaysian EPF
//! rounds to the nearest ringgit, Singapore CPF to the nearest cent,
//! some levies truncate. This module centralizes those rules as
//! [`RoundingPolicy`] so the calculation engine applies exactly one,
//! declared rounding per scheme side.
//!
//! All money flows through `rust_decimal::Decimal`. Percentage rates are
//! fractions (`0.11`, never `11`); contribution amounts are non-negative.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How a scheme rounds calculated contribution amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMethod {
    /// Round half-up to the scheme's precision.
    Nearest,
    /// Round half-up to zero decimal places ("nearest ringgit" rules),
    /// regardless of the scheme's precision.
    NearestWholeUnit,
    /// Round down to the scheme's precision.
    Floor,
    /// Round up to the scheme's precision.
    Ceiling,
}

impl std::fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Nearest => "NEAREST",
            Self::NearestWholeUnit => "NEAREST_WHOLE_UNIT",
            Self::Floor => "FLOOR",
            Self::Ceiling => "CEILING",
        };
        f.write_str(s)
    }
}

/// A scheme's rounding method plus decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundingPolicy {
    /// Rounding method declared by the scheme.
    #[serde(default = "default_method")]
    pub method: RoundingMethod,
    /// Number of decimal digits to keep (ignored by `NEAREST_WHOLE_UNIT`).
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_method() -> RoundingMethod {
    RoundingMethod::Nearest
}

fn default_precision() -> u32 {
    2
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            method: RoundingMethod::Nearest,
            precision: 2,
        }
    }
}

impl RoundingPolicy {
    /// Apply this policy to an amount.
    ///
    /// Contribution amounts are non-negative, so half-up is implemented as
    /// midpoint-away-from-zero and `FLOOR`/`CEILING` as rounding toward
    /// negative/positive infinity respectively.
    pub fn apply(&self, amount: Decimal) -> Decimal {
        match self.method {
            RoundingMethod::Nearest => {
                amount.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero)
            }
            RoundingMethod::NearestWholeUnit => {
                amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            }
            RoundingMethod::Floor => {
                amount.round_dp_with_strategy(self.precision, RoundingStrategy::ToNegativeInfinity)
            }
            RoundingMethod::Ceiling => {
                amount.round_dp_with_strategy(self.precision, RoundingStrategy::ToPositiveInfinity)
            }
        }
    }
}
