//! Comma-delimited reader built on the `csv` crate.

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use super::table::{HeaderSource, RawTable};
use crate::error::{JtError, Result};

fn parse_error(err: &csv::Error) -> JtError {
    match err.position() {
        Some(pos) => JtError::Parse(format!("line {}: {err}", pos.line())),
        None => JtError::Parse(err.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted { opened_on: usize },
    AfterQuote,
}

/// Reject malformed quoting before the csv reader sees the text.
///
/// The reader is lenient: an unterminated quote swallows the rest of the
/// file and a stray quote is merged into its field. A quote may only open
/// a field, `""` escapes a quote inside a quoted field, and a closing quote
/// must be followed by a delimiter or the end of the record.
fn check_quoting(text: &str) -> Result<()> {
    let mut state = QuoteState::FieldStart;
    let mut line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        state = match (state, ch) {
            (QuoteState::Quoted { opened_on }, '"') => {
                if chars.next_if_eq(&'"').is_some() {
                    QuoteState::Quoted { opened_on }
                } else {
                    QuoteState::AfterQuote
                }
            }
            (QuoteState::Quoted { .. }, _) => state,
            (QuoteState::FieldStart, '"') => QuoteState::Quoted { opened_on: line },
            (QuoteState::Unquoted, '"') => {
                return Err(JtError::Parse(format!(
                    "line {line}: quote inside unquoted field"
                )));
            }
            (_, ',' | '\n' | '\r') => QuoteState::FieldStart,
            (QuoteState::AfterQuote, other) => {
                return Err(JtError::Parse(format!(
                    "line {line}: unexpected {other:?} after closing quote"
                )));
            }
            (QuoteState::FieldStart | QuoteState::Unquoted, _) => QuoteState::Unquoted,
        };
        if ch == '\n' {
            line += 1;
        }
    }

    match state {
        QuoteState::Quoted { opened_on } => Err(JtError::Parse(format!(
            "line {opened_on}: unterminated quoted field"
        ))),
        _ => Ok(()),
    }
}

/// Read comma-delimited text whose first record is the header.
///
/// Records shorter than the header are padded. Records longer than the
/// header, and malformed quoting, fail the whole read with
/// [`JtError::Parse`].
pub fn read_delimited(text: &str) -> Result<RawTable> {
    if text.trim().is_empty() {
        return Err(JtError::EmptyInput);
    }
    check_quoting(text)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|err| parse_error(&err))?
        .iter()
        .map(str::to_owned)
        .collect();
    if columns.iter().all(|c| c.trim().is_empty()) {
        return Err(JtError::EmptyInput);
    }
    debug!(columns = columns.len(), "read header row");

    let width = columns.len();
    let mut table = RawTable::new(columns, HeaderSource::FirstRow);
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => return Err(parse_error(&err)),
        }
        let line = record
            .position()
            .and_then(|pos| usize::try_from(pos.line()).ok())
            .unwrap_or_default();
        if record.len() > width {
            return Err(JtError::Parse(format!(
                "line {line}: expected {width} fields, saw {}",
                record.len()
            )));
        }
        table.push_row(line, record.iter().map(str::to_owned).collect());
    }

    debug!(rows = table.len(), "read comma-delimited table");
    Ok(table)
}
