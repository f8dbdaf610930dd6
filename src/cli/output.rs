use chrono::{DateTime, Utc};
use clap::ValueEnum;
use console::style;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, JtError, Result};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted output with colors (default)
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
    /// Newline-delimited JSON (one object per line)
    Jsonl,
    /// Plain text without colors or formatting
    Plain,
    /// Tab-separated values (for shell scripting)
    Tsv,
}

impl OutputFormat {
    /// Check if this format should use colors
    #[must_use]
    pub const fn use_colors(&self) -> bool {
        matches!(self, Self::Human)
    }

    /// Check if this format is machine-readable
    #[must_use]
    pub const fn is_machine_readable(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonl | Self::Tsv)
    }
}

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    #[serde(rename = "error")]
    StructuredError {
        /// Error code enum value (e.g., "MISSING_COLUMNS")
        code: ErrorCode,
        numeric_code: u16,
        message: String,
        /// Actionable suggestion for recovery
        suggestion: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        context: Option<serde_json::Value>,
        recoverable: bool,
        /// Error category (e.g., "ingest", "config")
        category: String,
    },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
        warnings: Vec::new(),
    }
}

impl<T> RobotResponse<T> {
    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }
}

/// Create a robot error response from a [`JtError`] with structured information.
pub fn robot_error_structured(err: &JtError) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: err.into(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
        warnings: Vec::new(),
    }
}

impl From<&JtError> for RobotStatus {
    fn from(err: &JtError) -> Self {
        let structured = err.to_structured();
        Self::StructuredError {
            code: structured.code,
            numeric_code: structured.numeric_code,
            message: structured.message,
            suggestion: structured.suggestion,
            context: structured.context,
            recoverable: structured.recoverable,
            category: structured.category,
        }
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Emit a slice of items in JSONL format (one JSON object per line)
pub fn emit_jsonl<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

/// Emit TSV output with headers
pub fn emit_tsv<T, F>(headers: &[&str], items: &[T], row_fn: F)
where
    F: Fn(&T) -> Vec<String>,
{
    println!("{}", headers.join("\t"));
    for item in items {
        println!("{}", row_fn(item).join("\t"));
    }
}

/// Line-oriented builder for human output.
///
/// With `plain` set, styling is skipped so the text is safe to pipe.
pub struct HumanLayout {
    lines: Vec<String>,
    key_width: usize,
    plain: bool,
}

impl Default for HumanLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanLayout {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_width: 18,
            plain: false,
        }
    }

    /// Layout for `format`; anything but `Human` renders unstyled.
    #[must_use]
    pub const fn for_format(format: OutputFormat) -> Self {
        let mut layout = Self::new();
        layout.plain = !format.use_colors();
        layout
    }

    fn bold(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            style(text).bold().to_string()
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        let line = self.bold(text);
        self.lines.push(line);
        self.lines.push(String::new());
        self
    }

    pub fn section(&mut self, text: &str) -> &mut Self {
        let line = self.bold(text);
        self.lines.push(line);
        self.lines.push("-".repeat(text.len().max(3)));
        self
    }

    pub fn kv(&mut self, key: &str, value: &str) -> &mut Self {
        let width = self.key_width;
        if self.plain {
            self.lines.push(format!("{key:width$} {value}"));
        } else {
            // Pad before styling so escape codes don't count toward width.
            let key_style = style(format!("{key:width$}")).dim().to_string();
            self.lines.push(format!("{key_style} {value}"));
        }
        self
    }

    pub fn bullet(&mut self, text: &str) -> &mut Self {
        self.lines.push(format!("- {text}"));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

pub fn emit_human(layout: HumanLayout) {
    println!("{}", layout.build());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_use_colors() {
        assert!(OutputFormat::Human.use_colors());
        assert!(!OutputFormat::Json.use_colors());
        assert!(!OutputFormat::Plain.use_colors());
    }

    #[test]
    fn output_format_is_machine_readable() {
        assert!(!OutputFormat::Human.is_machine_readable());
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(OutputFormat::Jsonl.is_machine_readable());
        assert!(!OutputFormat::Plain.is_machine_readable());
        assert!(OutputFormat::Tsv.is_machine_readable());
    }

    #[test]
    fn output_format_default_is_human() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }

    #[test]
    fn robot_error_structured_includes_all_fields() {
        let err = JtError::MissingColumns {
            missing: vec!["PSL".into()],
            found: vec!["PERNR".into(), "DIVISION".into()],
        };
        let response = robot_error_structured(&err);

        match response.status {
            RobotStatus::StructuredError {
                code,
                numeric_code,
                message,
                suggestion,
                context,
                recoverable,
                category,
            } => {
                assert_eq!(code, ErrorCode::MissingColumns);
                assert_eq!(numeric_code, 104);
                assert!(message.contains("PSL"));
                assert!(suggestion.contains("PSL"));
                assert!(context.is_some());
                assert!(recoverable);
                assert_eq!(category, "ingest");
            }
            RobotStatus::Ok => panic!("Expected StructuredError status"),
        }
    }

    #[test]
    fn robot_error_serializes_as_error_status() {
        let err = JtError::Config("bad config".into());
        let json = serde_json::to_string(&robot_error_structured(&err)).unwrap();
        assert!(json.contains("\"error\""), "{json}");
        assert!(json.contains("CONFIG_INVALID"), "{json}");
        assert!(json.contains("\"numeric_code\":302"), "{json}");
    }

    #[test]
    fn robot_ok_serializes_data() {
        let json = serde_json::to_string(&robot_ok(serde_json::json!({"n": 1}))).unwrap();
        assert!(json.contains("\"status\":\"ok\""), "{json}");
        assert!(json.contains("\"n\":1"), "{json}");
        assert!(!json.contains("warnings"), "{json}");
    }

    #[test]
    fn plain_layout_has_no_escape_codes() {
        let mut layout = HumanLayout::for_format(OutputFormat::Plain);
        layout.title("Levels").kv("Officer", "1").bullet("x");
        let text = layout.build();
        assert!(!text.contains('\u{1b}'));
        assert!(text.starts_with("Levels\n"));
        assert!(text.contains("Officer            1"));
    }
}
