//! The habit record: its one state transition and its statistics query.
//!
//! `mark_complete` is the only operation that mutates a record, and the
//! tracking-start adjustment lives here rather than at call sites. The
//! statistics query is pure: "today" is always an explicit parameter, never
//! sampled from a clock.

use crate::{resistance, streak, CompletionLedger, HabitRecord, Periodicity, Result, Statistics};
use chrono::NaiveDate;

impl HabitRecord {
    /// Create a record that starts tracking at `tracking_start` with an
    /// empty ledger
    pub fn new(
        name: impl Into<String>,
        descr: impl Into<String>,
        periodicity: Periodicity,
        tracking_start: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            descr: descr.into(),
            periodicity,
            tracking_start,
            check_offs: CompletionLedger::new(),
        }
    }

    /// Rebuild a record from stored fields
    ///
    /// The periodicity string is validated here; an unrecognized value is a
    /// configuration error surfaced before any computation runs. Stored
    /// check-off dates are anchored and deduplicated under the parsed
    /// periodicity.
    pub fn from_stored(
        name: impl Into<String>,
        descr: impl Into<String>,
        periodicity: &str,
        tracking_start: NaiveDate,
        check_off_dates: Vec<NaiveDate>,
    ) -> Result<Self> {
        let periodicity = Periodicity::parse(periodicity)?;
        let mut record = Self::new(name, descr, periodicity, tracking_start);
        record.check_offs = CompletionLedger::from_dates(
            check_off_dates.into_iter().map(|d| periodicity.anchor(d)),
        );
        Ok(record)
    }

    /// Re-anchor and deduplicate the ledger under this record's periodicity
    ///
    /// Upholds the ledger invariant for records loaded from storage that
    /// may have been written by hand.
    pub(crate) fn canonicalize_ledger(&mut self) {
        let periodicity = self.periodicity;
        let anchored: Vec<NaiveDate> = self
            .check_offs
            .all()
            .map(|entry| periodicity.anchor(entry))
            .collect();
        self.check_offs = CompletionLedger::from_dates(anchored);
    }

    /// Record a check-off for the period containing `date`
    ///
    /// The date is reduced to its canonical period start before insertion,
    /// and inserting an already-marked period is a no-op. A back-dated
    /// check-off earlier than the tracking start widens the tracking window
    /// so resistance accounting covers the newly revealed periods; this is
    /// the only way `tracking_start` moves, and it only moves earlier.
    ///
    /// Any date is accepted, including future dates. Returns whether the
    /// period was newly marked.
    pub fn mark_complete(&mut self, date: NaiveDate, today: NaiveDate) -> bool {
        let canonical = self.periodicity.anchor(date);
        let inserted = self.check_offs.add(canonical);
        if !inserted {
            tracing::debug!(
                "period {} already marked for habit '{}'",
                canonical,
                self.name
            );
        }
        if date != today && date < self.tracking_start {
            tracing::debug!(
                "back-dated check-off {} widens tracking window of '{}' (was {})",
                date,
                self.name,
                self.tracking_start
            );
            self.tracking_start = date;
        }
        inserted
    }

    /// Compute the full statistics value for this record at `today`
    pub fn compute_statistics(&self, today: NaiveDate) -> Statistics {
        Statistics {
            current_streak: streak::current_streak(&self.check_offs, self.periodicity, today),
            total_completed: self.check_offs.total_completed(),
            total_resisted: resistance::total_resisted(
                &self.check_offs,
                self.periodicity,
                self.tracking_start,
                today,
            ),
            resistance_ratio: resistance::resistance_ratio(
                &self.check_offs,
                self.periodicity,
                self.tracking_start,
                today,
            ),
            longest_streak: streak::longest_streak(&self.check_offs, self.periodicity),
            average_streak: streak::average_streak_length(&self.check_offs, self.periodicity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const TODAY: (i32, u32, u32) = (2024, 4, 23);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_mark_complete_anchors_weekly_dates() {
        let mut record =
            HabitRecord::new("Binge watching", "", Periodicity::Weekly, date(2024, 1, 1));
        // A Thursday check-off lands on that week's Monday
        assert!(record.mark_complete(date(2024, 3, 28), today()));
        assert_eq!(record.check_offs.last(), Some(date(2024, 3, 25)));
    }

    #[test]
    fn test_mark_complete_anchors_monthly_dates() {
        let mut record =
            HabitRecord::new("Procrastipondering", "", Periodicity::Monthly, date(2023, 1, 1));
        assert!(record.mark_complete(date(2023, 2, 17), today()));
        assert_eq!(record.check_offs.last(), Some(date(2023, 2, 1)));
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut record =
            HabitRecord::new("Swearstorming", "", Periodicity::Daily, date(2024, 3, 23));
        assert!(record.mark_complete(today(), today()));
        let before = record.clone();
        assert!(!record.mark_complete(today(), today()));
        assert_eq!(record, before);
    }

    #[test]
    fn test_two_dates_in_one_week_mark_one_period() {
        let mut record = HabitRecord::new("Rushing", "", Periodicity::Weekly, date(2024, 1, 1));
        record.mark_complete(date(2024, 4, 16), today());
        record.mark_complete(date(2024, 4, 18), today());
        assert_eq!(record.check_offs.total_completed(), 1);
    }

    #[test]
    fn test_back_dated_check_off_widens_tracking_window() {
        let mut record =
            HabitRecord::new("Swearstorming", "", Periodicity::Daily, date(2024, 3, 23));
        record.mark_complete(date(2024, 2, 10), today());
        assert_eq!(record.tracking_start, date(2024, 2, 10));
        // Later dates never move the window back
        record.mark_complete(date(2024, 4, 1), today());
        assert_eq!(record.tracking_start, date(2024, 2, 10));
    }

    #[test]
    fn test_back_dated_monthly_check_off_keeps_raw_date() {
        // The window widens to the raw check-off date, not its anchor
        let mut record =
            HabitRecord::new("Procrastipondering", "", Periodicity::Monthly, date(2023, 6, 15));
        record.mark_complete(date(2023, 3, 20), today());
        assert_eq!(record.tracking_start, date(2023, 3, 20));
        assert!(record.check_offs.contains(date(2023, 3, 1)));
    }

    #[test]
    fn test_future_dates_are_accepted() {
        let mut record =
            HabitRecord::new("Swearstorming", "", Periodicity::Daily, date(2024, 3, 23));
        assert!(record.mark_complete(date(2025, 1, 1), today()));
        assert_eq!(record.tracking_start, date(2024, 3, 23));
    }

    #[test]
    fn test_from_stored_rejects_unknown_periodicity() {
        let result = HabitRecord::from_stored(
            "Hoarding",
            "",
            "fortnightly",
            date(2024, 1, 1),
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_from_stored_anchors_and_dedups() {
        let record = HabitRecord::from_stored(
            "Rushing",
            "",
            "Weekly",
            date(2024, 1, 1),
            vec![date(2024, 4, 16), date(2024, 4, 18), date(2024, 1, 3)],
        )
        .unwrap();
        let entries: Vec<_> = record.check_offs.all().collect();
        assert_eq!(entries, vec![date(2024, 1, 1), date(2024, 4, 15)]);
    }

    #[test]
    fn test_statistics_composition() {
        let mut record =
            HabitRecord::new("Swearstorming", "", Periodicity::Daily, date(2024, 3, 23));
        for day in [23, 24, 25, 26, 27] {
            record.mark_complete(date(2024, 3, day), today());
        }
        record.mark_complete(today(), today());

        let stats = record.compute_statistics(today());
        assert_eq!(
            stats,
            Statistics {
                current_streak: 1,
                total_completed: 6,
                total_resisted: 26,
                resistance_ratio: "81.25%".into(),
                longest_streak: 5,
                average_streak: 3.0,
            }
        );
    }

    #[test]
    fn test_statistics_for_fresh_habit() {
        let record = HabitRecord::new("Rushing", "", Periodicity::Weekly, today());
        let stats = record.compute_statistics(today());
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.total_completed, 0);
        assert_eq!(stats.total_resisted, 1);
        assert_eq!(stats.resistance_ratio, "100.00%");
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.average_streak, 0.0);
    }
}
