//! Built-in sample habits with known check-off histories.
//!
//! Five predefined habits spanning all three periodicity classes, with
//! enough history to exercise every statistic. Useful for demos and as
//! shared test data.

use crate::{HabitRecord, HabitStore, Periodicity};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Cached sample habits - built once and reused across all operations
static SAMPLE_HABITS: Lazy<Vec<HabitRecord>> = Lazy::new(build_sample_habits);

/// The built-in sample habits
pub fn sample_habits() -> &'static [HabitRecord] {
    &SAMPLE_HABITS
}

/// Insert any sample habits that are not already tracked
///
/// Existing habits with the same names are left untouched. Returns the
/// number of habits inserted.
pub fn seed_store(store: &mut HabitStore) -> usize {
    let mut inserted = 0;
    for habit in sample_habits() {
        if store.add(habit.clone()) {
            inserted += 1;
        }
    }
    tracing::info!("Seeded {} sample habits", inserted);
    inserted
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid")
}

fn build_sample_habits() -> Vec<HabitRecord> {
    let mut swearstorming = HabitRecord::new(
        "Swearstorming",
        "Unleashing a torrent of colorful language",
        Periodicity::Daily,
        date(2024, 3, 23),
    );
    for day in [23, 24, 25, 26, 27] {
        check_off(&mut swearstorming, date(2024, 3, day));
    }
    check_off(&mut swearstorming, date(2024, 4, 23));

    let mut overanalyzing = HabitRecord::new(
        "Overanalyzing",
        "To analyze sg too much or in too much detail",
        Periodicity::Daily,
        date(2024, 3, 23),
    );
    check_off(&mut overanalyzing, date(2024, 3, 23));
    for day in [20, 21, 22, 23] {
        check_off(&mut overanalyzing, date(2024, 4, day));
    }

    let mut binge_watching = HabitRecord::new(
        "Binge watching",
        "Viewing many episodes of a TV show in one sitting",
        Periodicity::Weekly,
        date(2024, 1, 1),
    );
    check_off(&mut binge_watching, date(2024, 3, 25));
    check_off(&mut binge_watching, date(2024, 4, 22));

    let mut rushing = HabitRecord::new(
        "Rushing",
        "Constantly being in a hurry for no good reason",
        Periodicity::Weekly,
        date(2024, 1, 1),
    );
    for monday in [date(2024, 1, 1), date(2024, 1, 8), date(2024, 1, 15)] {
        check_off(&mut rushing, monday);
    }
    check_off(&mut rushing, date(2024, 4, 15));
    check_off(&mut rushing, date(2024, 4, 22));

    let mut procrastipondering = HabitRecord::new(
        "Procrastipondering",
        "Delaying tasks while pondering over their importance",
        Periodicity::Monthly,
        date(2023, 1, 1),
    );
    for month in 1..=9 {
        check_off(&mut procrastipondering, date(2023, month, 1));
    }
    check_off(&mut procrastipondering, date(2024, 1, 1));

    vec![
        swearstorming,
        overanalyzing,
        binge_watching,
        rushing,
        procrastipondering,
    ]
}

// mark_complete would back-date the tracking window for these historical
// dates; the declared tracking starts must stand, so insert anchored dates
// directly.
fn check_off(record: &mut HabitRecord, date: NaiveDate) {
    record.check_offs.add(record.periodicity.anchor(date));
}
