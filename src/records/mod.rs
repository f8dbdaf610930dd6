//! Records: classified job-title entries, the session collection that holds
//! them, conversion from ingested tables and CSV export.

pub mod convert;
pub mod export;
pub mod record;
pub mod set;

pub use convert::{Conversion, SkippedRow, records_from_table, records_from_table_at};
pub use export::{DEFAULT_TIMESTAMP_FORMAT, EXPORT_HEADER, export_csv, validate_timestamp_format, write_csv};
pub use record::{NewRecord, Record};
pub use set::{RecordFilter, RecordSet};
