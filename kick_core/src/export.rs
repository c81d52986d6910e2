//! CSV export of the statistics table.
//!
//! One row per habit, columns matching the displayed statistics panel, for
//! analysis outside the tracker.

use crate::report::StatisticsRow;
use crate::Result;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    name: String,
    recording_from: String,
    periodicity: &'static str,
    current_streak: u32,
    total_completed: u64,
    total_resisted: i64,
    resistance_ratio: String,
    longest_streak: u32,
    average_streak: f64,
}

impl From<&StatisticsRow> for CsvRow {
    fn from(row: &StatisticsRow) -> Self {
        CsvRow {
            name: row.name.clone(),
            recording_from: row.tracking_start.format("%Y-%m-%d").to_string(),
            periodicity: row.periodicity.label(),
            current_streak: row.statistics.current_streak,
            total_completed: row.statistics.total_completed,
            total_resisted: row.statistics.total_resisted,
            resistance_ratio: row.statistics.resistance_ratio.clone(),
            longest_streak: row.statistics.longest_streak,
            average_streak: row.statistics.average_streak,
        }
    }
}

/// Write the statistics table to a CSV file, replacing any previous export
///
/// Returns the number of rows written. The file is synced to disk before
/// returning.
pub fn write_statistics_csv(path: &Path, rows: &[StatisticsRow]) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(CsvRow::from(row))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Exported {} habit statistics to {:?}", rows.len(), path);
    Ok(rows.len())
}
