//! CSV export of records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use tracing::info;

use super::record::Record;
use crate::error::{JtError, Result};

/// Default `Created` column format (minute precision).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Export header, in column order. `Job Title` is the hierarchy level name.
pub const EXPORT_HEADER: [&str; 7] = [
    "Final Job Title",
    "PERNR",
    "JOB_CODE",
    "Division",
    "Subdivision",
    "Job Title",
    "Created",
];

/// Reject strftime patterns chrono cannot render.
pub fn validate_timestamp_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(JtError::Config(format!(
            "invalid timestamp format: {format:?}"
        )));
    }
    Ok(())
}

/// Write `records` as CSV with a header row. Returns the number of records
/// written.
pub fn write_csv<'a, W: Write>(
    writer: W,
    records: impl IntoIterator<Item = &'a Record>,
    timestamp_format: &str,
) -> Result<usize> {
    validate_timestamp_format(timestamp_format)?;

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(EXPORT_HEADER)?;
    let mut written = 0;
    for record in records {
        let created = record.created_at().format(timestamp_format).to_string();
        csv.write_record([
            record.final_title(),
            record.employee_id(),
            record.job_code(),
            record.division(),
            record.subdivision(),
            record.hierarchy_level().display_name(),
            created.as_str(),
        ])?;
        written += 1;
    }
    csv.flush()?;
    Ok(written)
}

/// Export records to a CSV file at `path`.
///
/// An empty selection is refused rather than producing a header-only file.
pub fn export_csv(path: &Path, records: &[&Record], timestamp_format: &str) -> Result<usize> {
    if records.is_empty() {
        return Err(JtError::InvalidInput(
            "no records to export".to_string(),
        ));
    }
    validate_timestamp_format(timestamp_format)?;

    let file = File::create(path)?;
    let written = write_csv(file, records.iter().copied(), timestamp_format)?;
    info!(path = %path.display(), records = written, "exported records");
    Ok(written)
}
