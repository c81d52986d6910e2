#![forbid(unsafe_code)]

//! Core domain model and analytics for the Kick habit tracker.
//!
//! This crate provides:
//! - Domain types (periodicity, habit records, statistics)
//! - Period anchoring and arithmetic per periodicity class
//! - Streak detection and resistance accounting
//! - Persistence (locked, atomic JSON store)
//! - Aggregate reporting and CSV export

pub mod types;
pub mod error;
pub mod period;
pub mod ledger;
pub mod streak;
pub mod resistance;
pub mod record;
pub mod store;
pub mod report;
pub mod fixtures;
pub mod export;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use ledger::CompletionLedger;
pub use store::HabitStore;
pub use report::StatisticsRow;
pub use fixtures::{sample_habits, seed_store};
pub use export::write_statistics_csv;
pub use config::Config;
