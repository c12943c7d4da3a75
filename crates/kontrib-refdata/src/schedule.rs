//! # Scheduled-Rate Monitoring
//!
//! Compliance teams seed rate rows well before their effective dates — the
//! Cambodia NSSF pension increase gazetted for October 2027 sits in the
//! pack from the day it is announced. This module enumerates those rows so
//! a host application can raise advance alerts ("rate change in 90 days").
//!
//! ## Decoupling
//!
//! This surface is strictly observational. Resolution never consults
//! `is_scheduled` or anything produced here; a scheduled row activates
//! purely because a calculation date enters its effective window.

use chrono::{Days, NaiveDate};

use kontrib_core::CountryCode;

use crate::rate::StatutoryRate;
use crate::scheme::StatutoryScheme;
use crate::store::ReferenceStore;

/// One upcoming rate change, paired with the row it will replace.
#[derive(Debug, Clone)]
pub struct ScheduledRateChange<'a> {
    /// The scheme whose rate is changing.
    pub scheme: &'a StatutoryScheme,
    /// The pre-seeded future rate row.
    pub scheduled: &'a StatutoryRate,
    /// The rate currently in force for the same scheme + tier, if any.
    pub current: Option<&'a StatutoryRate>,
    /// Days between `as_of` and the scheduled row's effective date.
    pub days_until_effective: i64,
}

/// Enumerate scheduled rate rows for `country` whose `effective_from`
/// falls within `(as_of, as_of + days_ahead]`.
///
/// Results are ordered by effective date, then scheme code, then tier
/// code, so alert digests are stable across runs.
pub fn upcoming_rate_changes<'a, S: ReferenceStore + ?Sized>(
    store: &'a S,
    country: &CountryCode,
    as_of: NaiveDate,
    days_ahead: u32,
) -> Vec<ScheduledRateChange<'a>> {
    let horizon = as_of
        .checked_add_days(Days::new(u64::from(days_ahead)))
        .unwrap_or(NaiveDate::MAX);

    let mut changes = Vec::new();
    for scheme in store.schemes_for_country(country) {
        let rates = store.rates_for_scheme(scheme.id);
        for scheduled in rates {
            if !scheduled.is_scheduled {
                continue;
            }
            if scheduled.window.from <= as_of || scheduled.window.from > horizon {
                continue;
            }
            // The row being replaced: same tier, in force as of the query
            // date, latest effective_from when several qualify.
            let current = rates
                .iter()
                .filter(|r| r.tier_code == scheduled.tier_code && r.window.contains(as_of))
                .max_by_key(|r| r.window.from);
            changes.push(ScheduledRateChange {
                scheme,
                scheduled,
                current,
                days_until_effective: (scheduled.window.from - as_of).num_days(),
            });
        }
    }

    changes.sort_by(|a, b| {
        a.scheduled
            .window
            .from
            .cmp(&b.scheduled.window.from)
            .then_with(|| a.scheme.code.cmp(&b.scheme.code))
            .then_with(|| a.scheduled.tier_code.cmp(&b.scheduled.tier_code))
    });
    changes
}
