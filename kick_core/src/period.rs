//! Period anchoring and arithmetic for each periodicity class.
//!
//! Every date entering the analytics is first reduced to the canonical
//! start of the period containing it: the day itself for daily habits, the
//! most recent Monday for weekly habits, the first of the month for monthly
//! habits. Streak walks step backward through canonical starts with
//! `recede`, and denominators come from the inclusive `periods_between`.

use crate::Periodicity;
use chrono::{Datelike, Duration, NaiveDate};

impl Periodicity {
    /// Canonical start of the period containing `date`
    pub fn anchor(self, date: NaiveDate) -> NaiveDate {
        match self {
            Periodicity::Daily => date,
            Periodicity::Weekly => {
                date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
            }
            Periodicity::Monthly => date.with_day(1).expect("day 1 exists in every month"),
        }
    }

    /// The period start `n` periods earlier than `period_start`
    ///
    /// Monthly recession is calendar-month subtraction, always landing on
    /// day 1 regardless of month length.
    pub fn recede(self, period_start: NaiveDate, n: u32) -> NaiveDate {
        match self {
            Periodicity::Daily => period_start - Duration::days(i64::from(n)),
            Periodicity::Weekly => period_start - Duration::days(7 * i64::from(n)),
            Periodicity::Monthly => {
                let months = i64::from(period_start.year()) * 12
                    + i64::from(period_start.month0())
                    - i64::from(n);
                let year = months.div_euclid(12) as i32;
                let month = months.rem_euclid(12) as u32 + 1;
                NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month")
            }
        }
    }

    /// Inclusive count of periods spanning `[start, end]`
    ///
    /// Weekly spans clamp a zero day-difference to 1: a habit created today
    /// has exactly one week of data, never a zero denominator.
    pub fn periods_between(self, start: NaiveDate, end: NaiveDate) -> i64 {
        match self {
            Periodicity::Daily => end.signed_duration_since(start).num_days() + 1,
            Periodicity::Weekly => {
                let days = end.signed_duration_since(start).num_days();
                if days == 0 {
                    1
                } else {
                    (days + 6).div_euclid(7)
                }
            }
            Periodicity::Monthly => {
                (i64::from(end.year()) - i64::from(start.year())) * 12
                    + (i64::from(end.month()) - i64::from(start.month()))
                    + 1
            }
        }
    }
}
