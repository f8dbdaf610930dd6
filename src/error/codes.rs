//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Ingest errors
//! - 2xx: Input errors
//! - 3xx: Config errors
//! - 6xx: Storage errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for machine output.
///
/// Each variant maps to a numeric code (e.g., `MissingColumns` -> E104).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Ingest errors (1xx)
    // ========================================
    /// E101: Bytes are not valid in the declared encoding
    DecodeFailed,
    /// E102: Uploaded file has no content
    EmptyInput,
    /// E103: Delimited text has malformed quoting or ragged rows
    ParseFailed,
    /// E104: Required columns could not be identified
    MissingColumns,

    // ========================================
    // Input errors (2xx)
    // ========================================
    /// E201: Caller supplied an empty or unknown value
    InvalidInput,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E301: Explicit config file not found
    ConfigNotFound,
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,

    // ========================================
    // Storage errors (6xx)
    // ========================================
    /// E601: Failed to write export output
    StorageWriteError,
    /// E602: Serialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
    /// E902: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `EmptyInput` -> 102).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::DecodeFailed => 101,
            Self::EmptyInput => 102,
            Self::ParseFailed => 103,
            Self::MissingColumns => 104,

            Self::InvalidInput => 201,

            Self::ConfigNotFound => 301,
            Self::ConfigInvalid => 302,

            Self::StorageWriteError => 601,
            Self::SerializationError => 602,

            Self::InternalError => 901,
            Self::IoError => 902,
        }
    }

    /// Get the error code as a formatted string (e.g., "E104").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::DecodeFailed => "Retry with a different --encoding (utf-8, latin-1, iso-8859-1, cp1252, windows-1252)",
            Self::EmptyInput => "The file has no content. Check that the right file was selected",
            Self::ParseFailed => "Check quoting and field counts, or retry with --mode whitespace",
            Self::MissingColumns => "Add a header row naming PERNR, DIVISION, PSL and JOB_CODE, or use the 7-column layout",
            Self::InvalidInput => "Provide non-empty values for every required argument",
            Self::ConfigNotFound => "Check the --config path or the JT_CONFIG environment variable",
            Self::ConfigInvalid => "Run `jt config` to see current values. Check TOML syntax in the config file",
            Self::StorageWriteError => "Check disk space and write permissions for the export path",
            Self::SerializationError => "The data could not be serialized. Check input data for validity",
            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Check if this error is potentially recoverable by the user.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::DecodeFailed
            | Self::EmptyInput
            | Self::ParseFailed
            | Self::MissingColumns
            | Self::InvalidInput
            | Self::ConfigNotFound
            | Self::ConfigInvalid
            | Self::StorageWriteError
            | Self::IoError => true,

            Self::SerializationError | Self::InternalError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "ingest",
            2 => "input",
            3 => "config",
            6 => "storage",
            9 => "internal",
            _ => "unknown",
        }
    }

    /// Iterate over all error codes.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::DecodeFailed,
            Self::EmptyInput,
            Self::ParseFailed,
            Self::MissingColumns,
            Self::InvalidInput,
            Self::ConfigNotFound,
            Self::ConfigInvalid,
            Self::StorageWriteError,
            Self::SerializationError,
            Self::InternalError,
            Self::IoError,
        ]
        .into_iter()
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_numeric() {
        assert_eq!(ErrorCode::DecodeFailed.numeric(), 101);
        assert_eq!(ErrorCode::MissingColumns.numeric(), 104);
        assert_eq!(ErrorCode::InvalidInput.numeric(), 201);
        assert_eq!(ErrorCode::ConfigNotFound.numeric(), 301);
        assert_eq!(ErrorCode::StorageWriteError.numeric(), 601);
        assert_eq!(ErrorCode::InternalError.numeric(), 901);
    }

    #[test]
    fn test_error_code_string() {
        assert_eq!(ErrorCode::EmptyInput.code_string(), "E102");
        assert_eq!(ErrorCode::IoError.code_string(), "E902");
    }

    #[test]
    fn test_all_codes_have_suggestions_and_categories() {
        for code in ErrorCode::all() {
            assert!(
                !code.suggestion().is_empty(),
                "ErrorCode::{code:?} has empty suggestion"
            );
            assert_ne!(code.category(), "unknown", "ErrorCode::{code:?} has no category");
        }
    }

    #[test]
    fn test_error_code_serialization() {
        let code = ErrorCode::MissingColumns;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"MISSING_COLUMNS\"");

        let deserialized: ErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, code);
    }

    #[test]
    fn test_recoverable_categorization() {
        assert!(ErrorCode::DecodeFailed.is_recoverable());
        assert!(ErrorCode::MissingColumns.is_recoverable());
        assert!(!ErrorCode::InternalError.is_recoverable());
    }

    #[test]
    fn test_no_duplicate_numeric_codes() {
        let mut seen = std::collections::HashSet::new();
        for code in ErrorCode::all() {
            assert!(
                seen.insert(code.numeric()),
                "Duplicate numeric code: {}",
                code.numeric()
            );
        }
    }
}
