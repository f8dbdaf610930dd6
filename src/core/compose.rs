//! Final job title composition.

use super::level::HierarchyLevel;
use crate::error::{JtError, Result};

/// Render the final title for a division, subdivision and level.
///
/// Chief titles name the division only (`Chief {division} Officer`); every
/// other level renders `{division} {subdivision} {level}`. Both identifying
/// strings must be non-blank even when the subdivision is not rendered.
pub fn compose(division: &str, subdivision: &str, level: HierarchyLevel) -> Result<String> {
    if division.trim().is_empty() {
        return Err(JtError::InvalidInput("division must not be empty".to_string()));
    }
    if subdivision.trim().is_empty() {
        return Err(JtError::InvalidInput(
            "subdivision must not be empty".to_string(),
        ));
    }

    Ok(match level {
        HierarchyLevel::Chief => format!("Chief {division} Officer"),
        _ => format!("{division} {subdivision} {}", level.display_name()),
    })
}
