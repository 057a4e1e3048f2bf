//! Export the yardage table to CSV.
//!
//! Absent estimates are written as empty cells so spreadsheets keep them blank.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::domain::YardageRow;
use crate::error::AppError;

/// Write one CSV line per table row.
pub fn write_rows_csv(path: &Path, rows: &[YardageRow]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "club,baseline_label,category,rule,club_speed0_mph,carry0_yd,responsiveness,carry_yd,rollout_yd,total_yd,note"
    )
    .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for r in rows {
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{}",
            csv_field(&r.label),
            csv_field(&r.baseline_label),
            r.category,
            r.resolution.map(|res| res.display_name()).unwrap_or(""),
            opt(r.baseline.map(|b| b.club_speed_mph), 2),
            opt(r.baseline.map(|b| b.carry_yd), 2),
            opt(r.responsiveness, 4),
            opt(r.carry_yd, 2),
            opt(r.rollout_yd, 1),
            opt(r.total_yd, 2),
            csv_field(&r.note),
        )
        .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    info!(path = %path.display(), rows = rows.len(), "wrote CSV export");
    Ok(())
}

fn opt(v: Option<f64>, decimals: usize) -> String {
    v.map(|x| format!("{x:.decimals$}")).unwrap_or_default()
}

/// Quote fields containing separators or quotes.
fn csv_field(s: &str) -> String {
    if s.contains([',', '"', '\n']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
