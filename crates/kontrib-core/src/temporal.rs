//! # Temporal Types — Effective Windows over Civil Dates
//!
//! Defines [`EffectiveWindow`], the validity range attached to every
//! reference-data row (schemes, rate tiers, ceilings, table brackets).
//!
//! ## Discipline
//!
//! Statutory rates change by legislation, and legislation is enacted ahead
//! of time: a rate row inserted today may carry an `effective_from` years in
//! the future. Correct behavior therefore depends on one rule — membership
//! in a window is tested against a caller-supplied calculation date, never
//! against the system clock. This module deliberately offers no
//! "current window" or "today" helper.
//!
//! Windows are civil dates (`chrono::NaiveDate`): statutory effectivity is
//! defined by the gazette date in the jurisdiction, not by an instant on a
//! global timeline, so no timezone arithmetic belongs here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Inclusive validity range `[from, until]`; `until = None` means open-ended.
///
/// Constructed via [`EffectiveWindow::new`], which rejects backwards ranges.
/// Reference-data loading re-validates windows on ingest, so a hand-built
/// struct literal that bypasses `new` is still caught before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveWindow {
    /// First date (inclusive) on which the row is in force.
    #[serde(rename = "effective_from")]
    pub from: NaiveDate,
    /// Last date (inclusive) on which the row is in force; `None` = open.
    #[serde(rename = "effective_until", default)]
    pub until: Option<NaiveDate>,
}

impl EffectiveWindow {
    /// Construct a validated window.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidWindow`] if `until` is present and
    /// precedes `from`.
    pub fn new(from: NaiveDate, until: Option<NaiveDate>) -> Result<Self, CoreError> {
        if let Some(until) = until {
            if from > until {
                return Err(CoreError::InvalidWindow { from, until });
            }
        }
        Ok(Self { from, until })
    }

    /// An open-ended window starting at `from`.
    pub fn open_ended(from: NaiveDate) -> Self {
        Self { from, until: None }
    }

    /// Whether the window contains `date` (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        if date < self.from {
            return false;
        }
        match self.until {
            Some(until) => date <= until,
            None => true,
        }
    }

    /// Whether the window is structurally valid (`from <= until` or open).
    pub fn is_valid(&self) -> bool {
        match self.until {
            Some(until) => self.from <= until,
            None => true,
        }
    }
}
