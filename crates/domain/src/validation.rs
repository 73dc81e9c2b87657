// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Smallest permitted grid axis.
pub const MIN_DIMENSION: usize = 1;

/// Largest permitted grid axis.
///
/// Far beyond any real auditorium; the bound exists so a corrupt payload
/// or a typo cannot demand an absurd allocation.
pub const MAX_DIMENSION: usize = 256;

/// Longest permitted room name, in characters.
pub const MAX_ROOM_NAME_CHARS: usize = 120;

/// Validates grid dimensions for creation and resizing.
///
/// # Arguments
///
/// * `rows` - The requested row count
/// * `cols` - The requested column count
///
/// # Returns
///
/// * `Ok(())` if both axes are inside the permitted range
/// * `Err(DomainError::InvalidDimensions)` otherwise
///
/// # Errors
///
/// Returns an error if either axis is below [`MIN_DIMENSION`] or above
/// [`MAX_DIMENSION`].
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<(), DomainError> {
    // Rule: both axes must lie within [MIN_DIMENSION, MAX_DIMENSION]
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if !range.contains(&rows) || !range.contains(&cols) {
        return Err(DomainError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

/// Validates a room name before a save is handed to room management.
///
/// # Arguments
///
/// * `name` - The room name to validate
///
/// # Returns
///
/// * `Ok(())` if the name is usable
/// * `Err(DomainError::InvalidRoomName)` otherwise
///
/// # Errors
///
/// Returns an error if the name is blank or longer than
/// [`MAX_ROOM_NAME_CHARS`] characters.
pub fn validate_room_name(name: &str) -> Result<(), DomainError> {
    // Rule: name must contain at least one non-whitespace character
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRoomName(String::from(
            "Room name cannot be empty",
        )));
    }

    // Rule: name must not exceed MAX_ROOM_NAME_CHARS characters
    if name.chars().count() > MAX_ROOM_NAME_CHARS {
        return Err(DomainError::InvalidRoomName(format!(
            "Room name cannot exceed {MAX_ROOM_NAME_CHARS} characters"
        )));
    }

    Ok(())
}
