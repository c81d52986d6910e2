//! Streak detection over a habit's check-off ledger.
//!
//! All three measures walk the ledger newest-to-oldest and decide adjacency
//! with the one shared `Periodicity::recede`, so a run of consecutive
//! months is detected exactly like a run of consecutive days or weeks.

use crate::{CompletionLedger, Periodicity};
use chrono::NaiveDate;

/// Number of consecutive completed periods ending in the period containing
/// `today`
///
/// Zero when the ledger is empty or when the period containing `today` has
/// no check-off: a streak that did not reach the present is not current.
pub fn current_streak(
    ledger: &CompletionLedger,
    periodicity: Periodicity,
    today: NaiveDate,
) -> u32 {
    let mut cursor = periodicity.anchor(today);
    let mut streak = 0;
    for entry in ledger.all().rev() {
        if entry != cursor {
            break;
        }
        streak += 1;
        cursor = periodicity.recede(cursor, 1);
    }
    streak
}

/// Length of the longest run of consecutive completed periods anywhere in
/// the ledger
///
/// A single isolated check-off is a run of length 1. Empty ledger is 0.
pub fn longest_streak(ledger: &CompletionLedger, periodicity: Periodicity) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;
    for entry in ledger.all().rev() {
        run = match prev {
            Some(later) if periodicity.recede(later, 1) == entry => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(entry);
    }
    longest
}

/// Mean length of all completed runs, rounded to two decimal places
///
/// Every run counts, including runs of length 1. Empty ledger is 0.0.
pub fn average_streak_length(ledger: &CompletionLedger, periodicity: Periodicity) -> f64 {
    let mut closed_runs: Vec<u32> = Vec::new();
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for entry in ledger.all().rev() {
        match prev {
            Some(later) if periodicity.recede(later, 1) == entry => run += 1,
            _ => {
                if run > 0 {
                    closed_runs.push(run);
                }
                run = 1;
            }
        }
        prev = Some(entry);
    }
    if run > 0 {
        closed_runs.push(run);
    }
    if closed_runs.is_empty() {
        return 0.0;
    }
    let total: u32 = closed_runs.iter().sum();
    round2(f64::from(total) / closed_runs.len() as f64)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
