//! Resisted-period accounting and the resistance ratio.
//!
//! The denominator is the inclusive period span from the tracking start to
//! "today"; the weekly clamp in `periods_between` keeps it nonzero, so the
//! ratio never divides by zero.

use crate::{CompletionLedger, Periodicity};
use chrono::NaiveDate;

/// Number of tracked periods with no check-off
///
/// Can go negative if the ledger holds entries outside the tracking window;
/// `mark_complete` never produces such entries, and the value is reported
/// as-is rather than defended against.
pub fn total_resisted(
    ledger: &CompletionLedger,
    periodicity: Periodicity,
    tracking_start: NaiveDate,
    today: NaiveDate,
) -> i64 {
    periodicity.periods_between(tracking_start, today) - ledger.total_completed() as i64
}

/// Share of tracked periods with no check-off, formatted as "NN.NN%"
pub fn resistance_ratio(
    ledger: &CompletionLedger,
    periodicity: Periodicity,
    tracking_start: NaiveDate,
    today: NaiveDate,
) -> String {
    let periods = periodicity.periods_between(tracking_start, today);
    let resisted = periods - ledger.total_completed() as i64;
    format!("{:.2}%", resisted as f64 / periods as f64 * 100.0)
}
