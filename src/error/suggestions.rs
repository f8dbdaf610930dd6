//! Context-aware error suggestions.
//!
//! Complements the static suggestions in the `codes` module with hints
//! built from the error's JSON context.

use serde_json::Value;

use super::codes::ErrorCode;

const ENCODINGS: [&str; 5] = ["utf-8", "latin-1", "iso-8859-1", "cp1252", "windows-1252"];

/// Generate a context-aware suggestion for an error.
pub fn suggest_for_error(code: ErrorCode, context: Option<&Value>) -> String {
    match code {
        ErrorCode::DecodeFailed => suggest_decode_failed(context),
        ErrorCode::MissingColumns => suggest_missing_columns(context),
        ErrorCode::ConfigNotFound => suggest_config_not_found(context),
        _ => code.suggestion().to_string(),
    }
}

fn suggest_decode_failed(context: Option<&Value>) -> String {
    let Some(tried) = context
        .and_then(|c| c.get("encoding"))
        .and_then(Value::as_str)
    else {
        return ErrorCode::DecodeFailed.suggestion().to_string();
    };

    let others: Vec<&str> = ENCODINGS
        .iter()
        .copied()
        .filter(|label| *label != tried)
        .collect();
    format!(
        "The file is not {tried}. Retry with one of: {}",
        others
            .iter()
            .map(|label| format!("--encoding {label}"))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

fn names(context: Option<&Value>, key: &str) -> Vec<String> {
    context
        .and_then(|c| c.get(key))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

fn suggest_missing_columns(context: Option<&Value>) -> String {
    let missing = names(context, "missing");
    if missing.is_empty() {
        return ErrorCode::MissingColumns.suggestion().to_string();
    }
    let found = names(context, "found");

    let mut hint = format!(
        "Could not identify column(s) {}. Rename the matching header(s) in the file",
        missing.join(", ")
    );
    if found.is_empty() {
        hint.push_str("; no columns were read, check --mode and --encoding");
    } else {
        hint.push_str(&format!("; columns read were: {}", found.join(", ")));
        if found.len() < 4 {
            hint.push_str(". Fewer than 4 columns usually means the wrong --mode");
        }
    }
    hint
}

fn suggest_config_not_found(context: Option<&Value>) -> String {
    context
        .and_then(|c| c.get("path"))
        .and_then(Value::as_str)
        .map_or_else(
            || ErrorCode::ConfigNotFound.suggestion().to_string(),
            |path| format!("No config file at {path}. Create it or drop --config / JT_CONFIG"),
        )
}
