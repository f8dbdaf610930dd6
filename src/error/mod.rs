//! Error handling for jobtitle.
//!
//! This module provides:
//! - [`JtError`]: The main error enum for all operations
//! - [`ErrorCode`]: Standardized error codes for machine parsing
//! - [`StructuredError`]: Rich error type with suggestions and context

mod codes;
mod suggestions;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;
pub use suggestions::suggest_for_error;

/// Main error type for jobtitle operations.
#[derive(Error, Debug)]
pub enum JtError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Input is not valid {encoding}: invalid byte sequence at offset {offset}")]
    Decode { encoding: String, offset: usize },

    #[error("Input is empty")]
    EmptyInput,

    #[error("Malformed delimited text: {0}")]
    Parse(String),

    #[error(
        "Missing required columns: {} (found: {})",
        list_or_none(.missing),
        list_or_none(.found)
    )]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

impl JtError {
    /// Get the error code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
            Self::Csv(_) => ErrorCode::StorageWriteError,
            Self::Decode { .. } => ErrorCode::DecodeFailed,
            Self::EmptyInput => ErrorCode::EmptyInput,
            Self::Parse(_) => ErrorCode::ParseFailed,
            Self::MissingColumns { .. } => ErrorCode::MissingColumns,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::ConfigNotFound(_) => ErrorCode::ConfigNotFound,
        }
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::Decode { encoding, offset } => {
                Some(serde_json::json!({ "encoding": encoding, "offset": offset }))
            }
            Self::Parse(reason) | Self::InvalidInput(reason) => {
                Some(serde_json::json!({ "reason": reason }))
            }
            Self::MissingColumns { missing, found } => {
                Some(serde_json::json!({ "missing": missing, "found": found }))
            }
            Self::ConfigNotFound(path) => Some(serde_json::json!({ "path": path })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_jt_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
///
/// Emitted in machine output modes so scripts can branch on `code` and show
/// `suggestion` to a person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// The error code (e.g., "MISSING_COLUMNS")
    pub code: ErrorCode,

    /// The numeric error code (e.g., 104)
    pub numeric_code: u16,

    /// Human-readable error message
    pub message: String,

    /// Actionable suggestion for recovery
    pub suggestion: String,

    /// Additional context for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,

    /// Whether this error is potentially recoverable by the user
    pub recoverable: bool,

    /// Error category (e.g., "ingest", "config")
    pub category: String,
}

impl StructuredError {
    /// Create a new structured error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            numeric_code: code.numeric(),
            suggestion: code.suggestion().to_string(),
            context: None,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
            code,
            message: message.into(),
        }
    }

    /// Create a structured error from a [`JtError`].
    #[must_use]
    pub fn from_jt_error(err: &JtError) -> Self {
        let code = err.code();
        let context = err.context();
        let suggestion = suggest_for_error(code, context.as_ref());

        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion,
            context,
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }

    /// Add context to this error.
    #[must_use]
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self.suggestion = suggest_for_error(self.code, self.context.as_ref());
        self
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&JtError> for StructuredError {
    fn from(err: &JtError) -> Self {
        Self::from_jt_error(err)
    }
}

/// Result type alias using [`JtError`].
pub type Result<T> = std::result::Result<T, JtError>;
