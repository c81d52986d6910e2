//! The check-off ledger: which periods a habit was given in to.
//!
//! Entries are canonical period-start dates, kept unique and in ascending
//! order. Callers anchor dates before insertion; the ledger itself is
//! periodicity-agnostic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Deduplicated, ascending set of period-start dates
///
/// Serializes as a plain array of ISO-8601 dates, the same shape the
/// original check-off list had on disk.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CompletionLedger {
    entries: BTreeSet<NaiveDate>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            entries: dates.into_iter().collect(),
        }
    }

    /// Idempotent insert
    ///
    /// Returns false, with no side effect, if the period is already marked;
    /// marking the same period twice is always safe.
    pub fn add(&mut self, period_start: NaiveDate) -> bool {
        self.entries.insert(period_start)
    }

    /// Ascending iteration over the recorded period starts
    pub fn all(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.entries.iter().copied()
    }

    /// The most recent recorded period start, if any
    pub fn last(&self) -> Option<NaiveDate> {
        self.entries.iter().next_back().copied()
    }

    pub fn contains(&self, period_start: NaiveDate) -> bool {
        self.entries.contains(&period_start)
    }

    /// Number of distinct completed periods
    pub fn total_completed(&self) -> u64 {
        self.entries.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
