//! Turning a canonical [`RawTable`] into [`Record`]s.

use chrono::{DateTime, Utc};
use itertools::{Either, Itertools};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use super::record::{NewRecord, Record};
use crate::error::{JtError, Result};
use crate::ingest::RawTable;
use crate::ingest::columns::{DIVISION, JOB_CODE, JOB_TEXT, PERNR, PSL, REQUIRED_COLUMNS};
use crate::ingest::table::TableRow;

/// A data row that could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// Source line, 1-based.
    pub line: usize,
    pub reason: String,
}

/// Outcome of converting one table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Conversion {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedRow>,
}

struct ColumnMap {
    pernr: usize,
    division: usize,
    psl: usize,
    job_code: usize,
    job_text: Option<usize>,
}

impl ColumnMap {
    fn resolve(table: &RawTable) -> Result<Self> {
        let lookup = |name: &str| table.column_index(name);
        match (
            lookup(PERNR),
            lookup(DIVISION),
            lookup(PSL),
            lookup(JOB_CODE),
        ) {
            (Some(pernr), Some(division), Some(psl), Some(job_code)) => Ok(Self {
                pernr,
                division,
                psl,
                job_code,
                job_text: lookup(JOB_TEXT),
            }),
            _ => Err(JtError::MissingColumns {
                missing: REQUIRED_COLUMNS
                    .into_iter()
                    .filter(|name| lookup(*name).is_none())
                    .map(String::from)
                    .collect(),
                found: table.columns().to_vec(),
            }),
        }
    }

    fn convert(&self, row: &TableRow, created_at: DateTime<Utc>) -> Result<Record> {
        let raw_job_text = self
            .job_text
            .map(|idx| row.value(idx))
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        Record::new(
            NewRecord {
                employee_id: row.value(self.pernr).to_owned(),
                division: row.value(self.division).to_owned(),
                subdivision: row.value(self.psl).to_owned(),
                job_code: row.value(self.job_code).to_owned(),
                raw_job_text,
                hierarchy_level: None,
            },
            created_at,
        )
    }
}

/// Convert every row of a canonicalized table, stamped with the current time.
pub fn records_from_table(table: &RawTable) -> Result<Conversion> {
    records_from_table_at(table, Utc::now())
}

/// Convert every row of a canonicalized table.
///
/// Rows are classified in parallel; output order follows input order. Rows
/// with a blank division or subdivision are reported in
/// [`Conversion::skipped`] rather than failing the table.
pub fn records_from_table_at(table: &RawTable, created_at: DateTime<Utc>) -> Result<Conversion> {
    let columns = ColumnMap::resolve(table)?;

    let results: Vec<(usize, Result<Record>)> = table
        .rows()
        .par_iter()
        .map(|row| (row.line, columns.convert(row, created_at)))
        .collect();

    let (records, skipped): (Vec<_>, Vec<_>) =
        results
            .into_iter()
            .partition_map(|(line, result)| match result {
                Ok(record) => Either::Left(record),
                Err(err) => Either::Right(SkippedRow {
                    line,
                    reason: err.to_string(),
                }),
            });

    for row in &skipped {
        warn!(line = row.line, reason = %row.reason, "skipped row");
    }
    info!(
        records = records.len(),
        skipped = skipped.len(),
        "converted table"
    );
    Ok(Conversion { records, skipped })
}
