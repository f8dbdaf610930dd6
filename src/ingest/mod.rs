//! Tabular ingestion: bytes of unknown layout in, canonical [`RawTable`] out.
//!
//! The pipeline is strict about the caller's declared encoding and mode.
//! Nothing here retries with another encoding or delimiter; a wrong choice
//! fails visibly so the caller can ask again.

pub mod columns;
pub mod delimited;
pub mod encoding;
pub mod table;
pub mod tokenize;
pub mod whitespace;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use columns::{REQUIRED_COLUMNS, canonicalize};
pub use delimited::read_delimited;
pub use encoding::{EncodingChoice, decode};
pub use table::{HeaderSource, RawTable, TableRow};
pub use tokenize::tokenize_line;
pub use whitespace::read_whitespace;

use crate::error::{JtError, Result};

/// How fields are separated in an upload.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DelimiterMode {
    /// Standard comma-separated text with a header row.
    #[default]
    Comma,
    /// One record per line, fields separated by runs of whitespace.
    Whitespace,
}

impl DelimiterMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Comma => "comma",
            Self::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for DelimiterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DelimiterMode {
    type Err = JtError;

    fn from_str(s: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| JtError::InvalidInput(format!("unsupported delimiter mode: {s}")))
    }
}

/// Decode, read and canonicalize an upload.
///
/// On success the table holds every column in [`REQUIRED_COLUMNS`].
pub fn ingest(bytes: &[u8], encoding: EncodingChoice, mode: DelimiterMode) -> Result<RawTable> {
    debug!(%encoding, %mode, bytes = bytes.len(), "ingesting upload");
    let text = decode(bytes, encoding)?;

    let mut table = match mode {
        DelimiterMode::Comma => read_delimited(&text)?,
        DelimiterMode::Whitespace => read_whitespace(&text)?,
    };
    canonicalize(&mut table)?;

    info!(
        rows = table.len(),
        columns = table.columns().len(),
        dropped = table.dropped_rows(),
        "ingested table"
    );
    Ok(table)
}
