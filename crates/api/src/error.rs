// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use cine_seat::CoreError;
use cine_seat_domain::{DomainError, FormatError, MAX_DIMENSION, MIN_DIMENSION};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A stored layout payload could not be encoded or decoded.
    LayoutFormat {
        /// A description of the codec failure.
        message: String,
    },
    /// A room could not be loaded from its store.
    LoadFailed {
        /// A description of the load failure.
        message: String,
    },
    /// A room could not be saved to its store.
    SaveFailed {
        /// A description of the save failure.
        message: String,
    },
    /// Showtime inventory could not be resolved.
    InventoryUnavailable {
        /// A description of the inventory failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::LayoutFormat { message } => {
                write!(f, "Layout format error: {message}")
            }
            Self::LoadFailed { message } => {
                write!(f, "Failed to load room: {message}")
            }
            Self::SaveFailed { message } => {
                write!(f, "Failed to save room: {message}")
            }
            Self::InventoryUnavailable { message } => {
                write!(f, "Showtime inventory unavailable: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDimensions { rows, cols } => ApiError::InvalidInput {
            field: String::from("dimensions"),
            message: format!(
                "Invalid grid dimensions {rows}x{cols}. Both axes must be between {MIN_DIMENSION} and {MAX_DIMENSION}"
            ),
        },
        DomainError::CellOutOfBounds {
            row,
            col,
            rows,
            cols,
        } => ApiError::InvalidInput {
            field: String::from("cell"),
            message: format!("Cell ({row}, {col}) is outside the {rows}x{cols} grid"),
        },
        DomainError::InvalidSeatType(tag) => ApiError::InvalidInput {
            field: String::from("seat_type"),
            message: format!("Unknown seat type '{tag}'"),
        },
        DomainError::InvalidPriceMultiplier { hundredths } => ApiError::InvalidInput {
            field: String::from("price_multiplier"),
            message: format!(
                "Invalid price multiplier: {hundredths} hundredths. Must be greater than 0"
            ),
        },
        DomainError::InvalidRoomName(msg) => ApiError::InvalidInput {
            field: String::from("room_name"),
            message: msg,
        },
        DomainError::SeatNotFound { seat_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Seat"),
            message: format!("Seat '{seat_id}' does not exist in this showtime"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::LayoutEncoding(format_err) => translate_format_error(&format_err),
        CoreError::DuplicateSeatId { seat_id } => ApiError::DomainRuleViolation {
            rule: String::from("unique_seat_ids"),
            message: format!(
                "Seat identifier '{seat_id}' appears more than once in the showtime inventory"
            ),
        },
    }
}

/// Translates a layout codec error into an API error.
///
/// Every codec failure maps onto [`ApiError::LayoutFormat`]; the variant
/// detail is carried in the message so callers can report what was wrong
/// with the payload.
#[must_use]
pub fn translate_format_error(err: &FormatError) -> ApiError {
    ApiError::LayoutFormat {
        message: err.to_string(),
    }
}
