//! # Engine Errors and Per-Scheme Skip Reasons
//!
//! The engine distinguishes two failure shapes:
//!
//! - [`EngineError`] — hard failures that abort the request. The only
//!   member is a structurally invalid employee context; a broken input
//!   cannot produce a meaningful summary for *any* scheme.
//! - [`SkipReason`] — per-scheme degradations. A missing rate tier or an
//!   unimplemented calculation method omits that one scheme from the
//!   summary (with a log line carrying the cause) and never blocks the
//!   remaining schemes. The host-visible effect is a shorter contribution
//!   list, not a failed payroll run.

use thiserror::Error;

use kontrib_refdata::CalculationMethod;

/// Hard failures that propagate to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The employee context is structurally invalid (e.g., negative wage
    /// component).
    #[error("invalid employee context: {reason}")]
    InvalidContext {
        /// What is wrong with the context.
        reason: String,
    },
}

/// Why a single scheme was omitted from a summary.
///
/// Returned by [`ContributionEngine::try_calculate_scheme`] so tests and
/// diagnostics can assert on the cause without parsing logs.
///
/// [`ContributionEngine::try_calculate_scheme`]:
/// crate::engine::ContributionEngine::try_calculate_scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No rate tier matched the employee's conditions at the date.
    MissingRate,
    /// The scheme declares a calculation method with no handler.
    UnsupportedMethod(CalculationMethod),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRate => f.write_str("no matching rate tier"),
            Self::UnsupportedMethod(method) => {
                write!(f, "unsupported calculation method {method}")
            }
        }
    }
}
