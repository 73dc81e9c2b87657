// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_seat_domain::{DomainError, FormatError};

/// Errors that can occur during editor or selection transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The working layout could not be encoded for handoff.
    LayoutEncoding(FormatError),
    /// Inventory supplied two seats with the same identifier.
    DuplicateSeatId {
        /// The repeated identifier.
        seat_id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::LayoutEncoding(err) => write!(f, "Layout encoding failed: {err}"),
            Self::DuplicateSeatId { seat_id } => {
                write!(f, "Seat '{seat_id}' appears more than once in the showtime")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<FormatError> for CoreError {
    fn from(err: FormatError) -> Self {
        Self::LayoutEncoding(err)
    }
}
