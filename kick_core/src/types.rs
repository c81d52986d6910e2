//! Core domain types for the Kick habit tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Periodicity classes and their string forms
//! - Habit records (identity, tracking window, check-off ledger)
//! - Computed statistics

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ledger::CompletionLedger;
use crate::{Error, Result};

// ============================================================================
// Periodicity
// ============================================================================

/// Tracking granularity of a habit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    Daily,
    Weekly,
    Monthly,
}

impl Periodicity {
    /// All supported periodicity classes, in tracking-granularity order
    pub const ALL: [Periodicity; 3] =
        [Periodicity::Daily, Periodicity::Weekly, Periodicity::Monthly];

    /// Parse a user- or storage-supplied periodicity string (case-insensitive)
    ///
    /// An unrecognized string is a configuration error: it must be rejected
    /// here, at record construction, not discovered mid-computation.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            "monthly" => Ok(Periodicity::Monthly),
            _ => Err(Error::UnknownPeriodicity(input.to_string())),
        }
    }

    /// Display label as shown in the statistics table
    pub fn label(self) -> &'static str {
        match self {
            Periodicity::Daily => "Daily",
            Periodicity::Weekly => "Weekly",
            Periodicity::Monthly => "Monthly",
        }
    }
}

impl FromStr for Periodicity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width flags working in aligned table output
        f.pad(self.label())
    }
}

// ============================================================================
// Habit Record
// ============================================================================

/// A tracked habit: identity fields, the tracking window, and the ledger of
/// periods the user gave in
///
/// Invariants: ledger entries are period starts under this record's own
/// periodicity; `tracking_start` only ever moves earlier (back-dated
/// check-offs widen the window, nothing shrinks it).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HabitRecord {
    pub name: String,
    pub descr: String,
    pub periodicity: Periodicity,
    pub tracking_start: NaiveDate,
    #[serde(default)]
    pub check_offs: CompletionLedger,
}

// ============================================================================
// Statistics
// ============================================================================

/// Computed completion statistics for one habit, at one externally supplied
/// "today"
#[derive(Clone, Debug, PartialEq)]
pub struct Statistics {
    pub current_streak: u32,
    pub total_completed: u64,
    pub total_resisted: i64,
    pub resistance_ratio: String,
    pub longest_streak: u32,
    pub average_streak: f64,
}
