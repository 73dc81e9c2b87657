// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Grid dimensions are outside the permitted range.
    InvalidDimensions {
        /// The requested row count.
        rows: usize,
        /// The requested column count.
        cols: usize,
    },
    /// A cell coordinate falls outside the grid.
    CellOutOfBounds {
        /// The requested row index.
        row: usize,
        /// The requested column index.
        col: usize,
        /// The grid's row count.
        rows: usize,
        /// The grid's column count.
        cols: usize,
    },
    /// Seat type tag is not recognized.
    InvalidSeatType(String),
    /// Price multiplier is not a positive factor.
    InvalidPriceMultiplier {
        /// The invalid value, in hundredths.
        hundredths: u32,
    },
    /// Room name is empty or invalid.
    InvalidRoomName(String),
    /// No seat with the given identifier exists for the showtime.
    SeatNotFound {
        /// The unknown seat identifier.
        seat_id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid grid dimensions {rows}x{cols}. Both axes must be between {} and {}",
                    crate::validation::MIN_DIMENSION,
                    crate::validation::MAX_DIMENSION
                )
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Cell ({row}, {col}) is outside the {rows}x{cols} grid"
                )
            }
            Self::InvalidSeatType(tag) => write!(f, "Invalid seat type: {tag}"),
            Self::InvalidPriceMultiplier { hundredths } => {
                write!(
                    f,
                    "Invalid price multiplier: {hundredths} hundredths. Must be greater than 0"
                )
            }
            Self::InvalidRoomName(msg) => write!(f, "Invalid room name: {msg}"),
            Self::SeatNotFound { seat_id } => {
                write!(f, "Seat '{seat_id}' not found for this showtime")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors raised by the layout wire codec.
///
/// A stored layout that fails to decode is rejected outright; the codec
/// never repairs or partially loads a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The payload is not valid JSON or uses an unknown field shape.
    Malformed {
        /// Parser detail describing the failure.
        detail: String,
    },
    /// The payload declares a format version this codec does not read.
    UnsupportedVersion {
        /// The declared version.
        version: u32,
    },
    /// The payload declares dimensions outside the permitted range.
    InvalidDimensions {
        /// The declared row count.
        rows: usize,
        /// The declared column count.
        cols: usize,
    },
    /// The cell grid has a different number of rows than declared.
    RowCountMismatch {
        /// The declared row count.
        expected: usize,
        /// The number of rows actually present.
        actual: usize,
    },
    /// A row in the cell grid has a different length than declared.
    RowLengthMismatch {
        /// The index of the offending row.
        row: usize,
        /// The declared column count.
        expected: usize,
        /// The number of cells actually present in the row.
        actual: usize,
    },
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { detail } => write!(f, "Malformed layout payload: {detail}"),
            Self::UnsupportedVersion { version } => {
                write!(f, "Unsupported layout format version {version}")
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "Layout payload declares invalid dimensions {rows}x{cols}")
            }
            Self::RowCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Layout payload declares {expected} rows but contains {actual}"
                )
            }
            Self::RowLengthMismatch {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row} of the layout payload has {actual} cells, expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}
