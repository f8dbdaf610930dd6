//! Loosely-typed intermediate table produced by ingestion.

use serde::Serialize;

/// Where a table's column names came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderSource {
    /// First line of a whitespace file named the key columns.
    Detected,
    /// No header; the 7-column export layout was assumed.
    FixedLayout,
    /// No header; `Column_1..Column_N` were synthesized.
    Generic,
    /// First record of a comma-delimited file.
    FirstRow,
}

/// One data row and the source line it came from (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub line: usize,
    pub values: Vec<String>,
}

impl TableRow {
    /// Cell at `idx`, or `""` past the end.
    #[must_use]
    pub fn value(&self, idx: usize) -> &str {
        self.values.get(idx).map_or("", String::as_str)
    }
}

/// Ordered named columns and rows of strings.
///
/// Every row holds exactly one value per column: [`RawTable::push_row`]
/// pads short rows with empty strings and truncates long ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<TableRow>,
    header: HeaderSource,
    dropped_rows: usize,
}

impl RawTable {
    #[must_use]
    pub const fn new(columns: Vec<String>, header: HeaderSource) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            header,
            dropped_rows: 0,
        }
    }

    /// Append a row, fitting it to the header width.
    pub fn push_row(&mut self, line: usize, mut values: Vec<String>) {
        values.resize(self.columns.len(), String::new());
        self.rows.push(TableRow { line, values });
    }

    /// Count a source line that was rejected as unparseable.
    pub fn record_dropped(&mut self) {
        self.dropped_rows += 1;
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    #[must_use]
    pub const fn header(&self) -> HeaderSource {
        self.header
    }

    /// Source lines rejected for having too few fields.
    #[must_use]
    pub const fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the column named exactly `name`.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub(crate) fn rename_column(&mut self, idx: usize, name: &str) {
        if let Some(column) = self.columns.get_mut(idx) {
            name.clone_into(column);
        }
    }

    /// Value of `column` in the row at `row`.
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| r.value(idx))
    }

    /// The row at `row` as `(column, value)` pairs in column order.
    pub fn cells(&self, row: usize) -> impl Iterator<Item = (&str, &str)> {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|r| self.columns.iter().zip(&r.values))
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }
}
