//! Whitespace-delimited reader.
//!
//! Each line is a record; fields are separated by runs of whitespace and
//! double quotes shield embedded spaces (see [`tokenize_line`]).

use tracing::{debug, trace};

use super::columns::{DIVISION, FIXED_LAYOUT, PERNR, PSL, SUBPSL};
use super::table::{HeaderSource, RawTable};
use super::tokenize::tokenize_line;
use crate::error::{JtError, Result};

/// Lines yielding fewer fields than this are unparseable and dropped.
pub const MIN_FIELDS: usize = 4;

/// Header tokens that mark the first line as a header.
const HEADER_MARKERS: [&str; 3] = [PERNR, DIVISION, PSL];

/// Fields of the 7-column layout that precede `SUBPSL`.
const LEADING_FIXED: usize = 4;

/// Fields of the 7-column layout that follow `SUBPSL`.
const TRAILING_FIXED: usize = 2;

/// Fit an over-long line to the 7-column layout.
///
/// The subdivision label is the only free-text field in the middle of the
/// layout, so surplus tokens are rejoined into `SUBPSL` and the salary band
/// and job code stay anchored to the end of the line.
fn fold_into_subpsl(mut tokens: Vec<String>) -> Vec<String> {
    if tokens.len() <= FIXED_LAYOUT.len() {
        return tokens;
    }
    let trailing = tokens.split_off(tokens.len() - TRAILING_FIXED);
    let middle = tokens.split_off(LEADING_FIXED).join(" ");
    tokens.push(middle);
    tokens.extend(trailing);
    tokens
}

/// Read whitespace-delimited text into a [`RawTable`].
///
/// Blank lines are ignored everywhere, including before the header. A
/// headerless file whose first line has at least seven fields is read with
/// the 7-column layout. Rows wider than the header are truncated, except
/// under that layout where surplus tokens belong to `SUBPSL`.
pub fn read_whitespace(text: &str) -> Result<RawTable> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .peekable();

    let Some(&(first_line_no, first_line)) = lines.peek() else {
        return Err(JtError::EmptyInput);
    };

    let first_tokens: Vec<&str> = first_line.split_whitespace().collect();
    let mut table = if HEADER_MARKERS
        .iter()
        .all(|marker| first_tokens.contains(marker))
    {
        lines.next();
        debug!(line = first_line_no, columns = first_tokens.len(), "detected header row");
        RawTable::new(
            first_tokens.into_iter().map(String::from).collect(),
            HeaderSource::Detected,
        )
    } else {
        let width = tokenize_line(first_line).len();
        if width >= FIXED_LAYOUT.len() {
            debug!(columns = width, "no header row; assuming 7-column layout");
            RawTable::new(
                FIXED_LAYOUT.iter().map(|c| (*c).to_string()).collect(),
                HeaderSource::FixedLayout,
            )
        } else {
            debug!(columns = width, "no header row; synthesizing column names");
            RawTable::new(
                (1..=width).map(|n| format!("Column_{n}")).collect(),
                HeaderSource::Generic,
            )
        }
    };

    let fixed_layout = table.header() == HeaderSource::FixedLayout;
    for (line_no, line) in lines {
        let mut tokens = tokenize_line(line);
        if tokens.len() < MIN_FIELDS {
            trace!(line = line_no, fields = tokens.len(), "dropped short line");
            table.record_dropped();
            continue;
        }
        if fixed_layout && tokens.len() > FIXED_LAYOUT.len() {
            trace!(line = line_no, fields = tokens.len(), column = SUBPSL, "folded surplus fields");
            tokens = fold_into_subpsl(tokens);
        }
        table.push_row(line_no, tokens);
    }

    debug!(
        rows = table.len(),
        dropped = table.dropped_rows(),
        "read whitespace-delimited table"
    );
    Ok(table)
}
