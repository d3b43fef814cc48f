//! Input validation for lines, stations, and sections.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum allowed length for a line or station name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum allowed length for a line color token (e.g. `bg-red-600`).
pub const MAX_COLOR_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_name(kind: &str, name: &str) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{kind} name must not be empty")));
    }
    if trimmed.len() != name.len() {
        return Err(CoreError::Validation(format!(
            "{kind} name must not have leading or trailing whitespace"
        )));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{kind} name must not exceed {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a line name: non-empty, trimmed, and within [`MAX_NAME_LENGTH`].
pub fn validate_line_name(name: &str) -> Result<(), CoreError> {
    validate_name("Line", name)
}

/// Validate a station name: non-empty, trimmed, and within [`MAX_NAME_LENGTH`].
pub fn validate_station_name(name: &str) -> Result<(), CoreError> {
    validate_name("Station", name)
}

pub fn validate_line_color(color: &str) -> Result<(), CoreError> {
    if color.trim().is_empty() {
        return Err(CoreError::Validation(
            "Line color must not be empty".to_string(),
        ));
    }
    if color.chars().count() > MAX_COLOR_LENGTH {
        return Err(CoreError::Validation(format!(
            "Line color must not exceed {MAX_COLOR_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate the fields of a new section before it touches the database.
pub fn validate_section_input(
    up_station_id: DbId,
    down_station_id: DbId,
    distance: i32,
    duration: Option<i32>,
) -> Result<(), CoreError> {
    if up_station_id == down_station_id {
        return Err(CoreError::Validation(format!(
            "Up and down station must differ, got {up_station_id} for both"
        )));
    }
    if distance <= 0 {
        return Err(CoreError::Validation(format!(
            "Section distance must be positive, got {distance}"
        )));
    }
    if let Some(duration) = duration.filter(|d| *d < 0) {
        return Err(CoreError::Validation(format!(
            "Section duration must not be negative, got {duration}"
        )));
    }
    Ok(())
}
