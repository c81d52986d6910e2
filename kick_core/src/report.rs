//! Cross-habit aggregate reporting.
//!
//! A thin fan-out: compute the per-habit statistics once per record, then
//! reduce — filter by periodicity, take maxima with ties, or pick the two
//! extremes. Nothing here touches dates directly.

use crate::{HabitRecord, Periodicity, Statistics};
use chrono::NaiveDate;

/// One row of the statistics table: the habit's identity fields plus its
/// computed statistics
#[derive(Clone, Debug, PartialEq)]
pub struct StatisticsRow {
    pub name: String,
    pub tracking_start: NaiveDate,
    pub periodicity: Periodicity,
    pub statistics: Statistics,
}

impl StatisticsRow {
    pub fn new(record: &HabitRecord, today: NaiveDate) -> Self {
        Self {
            name: record.name.clone(),
            tracking_start: record.tracking_start,
            periodicity: record.periodicity,
            statistics: record.compute_statistics(today),
        }
    }
}

/// Statistics for every habit, in input order
pub fn all_statistics(records: &[HabitRecord], today: NaiveDate) -> Vec<StatisticsRow> {
    records
        .iter()
        .map(|record| StatisticsRow::new(record, today))
        .collect()
}

/// Statistics for the habits sharing one periodicity
pub fn by_periodicity(
    records: &[HabitRecord],
    periodicity: Periodicity,
    today: NaiveDate,
) -> Vec<StatisticsRow> {
    records
        .iter()
        .filter(|record| record.periodicity == periodicity)
        .map(|record| StatisticsRow::new(record, today))
        .collect()
}

/// The habit(s) with the largest current streak; ties are all returned
pub fn longest_current_streak(records: &[HabitRecord], today: NaiveDate) -> Vec<StatisticsRow> {
    let rows = all_statistics(records, today);
    let Some(max) = rows.iter().map(|r| r.statistics.current_streak).max() else {
        return Vec::new();
    };
    rows.into_iter()
        .filter(|r| r.statistics.current_streak == max)
        .collect()
}

/// The habit(s) with the largest historical streak; ties are all returned
pub fn longest_historical_streak(records: &[HabitRecord], today: NaiveDate) -> Vec<StatisticsRow> {
    let rows = all_statistics(records, today);
    let Some(max) = rows.iter().map(|r| r.statistics.longest_streak).max() else {
        return Vec::new();
    };
    rows.into_iter()
        .filter(|r| r.statistics.longest_streak == max)
        .collect()
}

/// The habits with the lowest and highest average streak, in that order
pub fn average_streak_extremes(
    records: &[HabitRecord],
    today: NaiveDate,
) -> Option<(StatisticsRow, StatisticsRow)> {
    let rows = all_statistics(records, today);
    let lowest = rows
        .iter()
        .min_by(|a, b| a.statistics.average_streak.total_cmp(&b.statistics.average_streak))?
        .clone();
    let highest = rows
        .iter()
        .max_by(|a, b| a.statistics.average_streak.total_cmp(&b.statistics.average_streak))?
        .clone();
    Some((lowest, highest))
}

/// The habits with the lowest and highest resistance ratio, in that order
///
/// Compared on the numeric ratio; the formatted string would order
/// "9.00%" after "81.00%".
pub fn resistance_ratio_extremes(
    records: &[HabitRecord],
    today: NaiveDate,
) -> Option<(StatisticsRow, StatisticsRow)> {
    let rows = all_statistics(records, today);
    let lowest = rows
        .iter()
        .min_by(|a, b| resistance_fraction(&a.statistics).total_cmp(&resistance_fraction(&b.statistics)))?
        .clone();
    let highest = rows
        .iter()
        .max_by(|a, b| resistance_fraction(&a.statistics).total_cmp(&resistance_fraction(&b.statistics)))?
        .clone();
    Some((lowest, highest))
}

// The period span is resisted + completed, so the fraction reconstructs
// without re-touching the record.
fn resistance_fraction(statistics: &Statistics) -> f64 {
    let periods = statistics.total_resisted + statistics.total_completed as i64;
    statistics.total_resisted as f64 / periods as f64
}
