//! Canonical column names and the two-phase canonicalization pass.
//!
//! Phase one renames columns whose names match a canonical name
//! case-insensitively. Phase two, run only if a required column is still
//! missing, assigns canonical names by position using the known export
//! layouts. Whatever is still missing after that is reported, never guessed.

use tracing::{debug, info};

use super::table::RawTable;
use crate::error::{JtError, Result};

pub const PERNR: &str = "PERNR";
pub const JOB_TEXT: &str = "JOB_TEXT";
pub const DIVISION: &str = "DIVISION";
pub const PSL: &str = "PSL";
pub const SUBPSL: &str = "SUBPSL";
pub const SAL_BAND: &str = "SAL_BAND";
pub const JOB_CODE: &str = "JOB_CODE";

/// Columns every ingested table must end up with.
pub const REQUIRED_COLUMNS: [&str; 4] = [DIVISION, PSL, PERNR, JOB_CODE];

/// Header of the headerless 7-column export.
pub const FIXED_LAYOUT: [&str; 7] = [PERNR, JOB_TEXT, DIVISION, PSL, SUBPSL, SAL_BAND, JOB_CODE];

/// Positions of the required columns in a bare 4-column file.
const NARROW_POSITIONS: [(usize, &str); 4] =
    [(0, PERNR), (1, DIVISION), (2, PSL), (3, JOB_CODE)];

/// Positions of the required columns in the 7-column export layout.
const WIDE_POSITIONS: [(usize, &str); 4] = [(0, PERNR), (2, DIVISION), (3, PSL), (6, JOB_CODE)];

/// Where each required column sits in a table `width` columns wide.
///
/// Tables at least as wide as the 7-column layout follow that layout;
/// extra trailing columns are left alone.
fn fallback_positions(width: usize) -> &'static [(usize, &'static str)] {
    if width >= FIXED_LAYOUT.len() {
        &WIDE_POSITIONS
    } else if width >= NARROW_POSITIONS.len() {
        &NARROW_POSITIONS
    } else {
        &[]
    }
}

fn is_canonical(name: &str) -> bool {
    REQUIRED_COLUMNS.contains(&name) || name == JOB_TEXT
}

fn missing_required(table: &RawTable) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|name| !table.has_column(name))
        .collect()
}

/// Rename the table's columns so that all [`REQUIRED_COLUMNS`] are present.
///
/// `JOB_TEXT` is canonicalized by name when present but is never required.
pub fn canonicalize(table: &mut RawTable) -> Result<()> {
    for canonical in REQUIRED_COLUMNS.into_iter().chain([JOB_TEXT]) {
        if table.has_column(canonical) {
            continue;
        }
        if let Some(idx) = table
            .columns()
            .iter()
            .position(|column| column.eq_ignore_ascii_case(canonical))
        {
            debug!(from = %table.columns()[idx], to = canonical, "renamed column");
            table.rename_column(idx, canonical);
        }
    }

    let missing = missing_required(table);
    if missing.is_empty() {
        return Ok(());
    }

    for &(idx, canonical) in fallback_positions(table.columns().len()) {
        if !missing.contains(&canonical) || is_canonical(&table.columns()[idx]) {
            continue;
        }
        info!(
            position = idx,
            from = %table.columns()[idx],
            to = canonical,
            "assigned column by position"
        );
        table.rename_column(idx, canonical);
    }

    let missing = missing_required(table);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(JtError::MissingColumns {
            missing: missing.into_iter().map(String::from).collect(),
            found: table.columns().to_vec(),
        })
    }
}
