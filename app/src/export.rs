//! CSV export of the annotated split.

use std::io::Write;
use std::path::Path;

use holdout::{HoldoutReport, Record};
use tracing::debug;

const HEADER: [&str; 5] = ["x1", "x2", "label", "prediction", "set"];

/// Writes every record of `report` to `path`, training records first.
pub fn export_to_path(path: &Path, report: &HoldoutReport<i64, f64>) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    export(file, report)?;
    debug!(path = %path.display(), "exported records");
    Ok(())
}

/// Writes a `x1,x2,label,prediction,set` row per record.
///
/// Training records have an empty prediction.
pub fn export<W: Write>(writer: W, report: &HoldoutReport<i64, f64>) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for record in &report.train {
        write_row(&mut wtr, record, "train")?;
    }
    for record in &report.test {
        write_row(&mut wtr, record, "test")?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_row<W: Write>(
    wtr: &mut csv::Writer<W>,
    record: &Record<i64, f64>,
    set: &str,
) -> Result<(), csv::Error> {
    let prediction = record
        .prediction()
        .map(|p| p.to_string())
        .unwrap_or_default();
    wtr.write_record([
        record.x1().to_string(),
        record.x2().to_string(),
        record.label().to_string(),
        prediction,
        set.to_string(),
    ])
}
