// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, FormatError};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDimensions { rows: 0, cols: 5 };
    assert_eq!(
        format!("{err}"),
        "Invalid grid dimensions 0x5. Both axes must be between 1 and 256"
    );

    let err: DomainError = DomainError::CellOutOfBounds {
        row: 7,
        col: 2,
        rows: 5,
        cols: 5,
    };
    assert_eq!(format!("{err}"), "Cell (7, 2) is outside the 5x5 grid");

    let err: DomainError = DomainError::InvalidSeatType(String::from("recliner"));
    assert_eq!(format!("{err}"), "Invalid seat type: recliner");

    let err: DomainError = DomainError::InvalidPriceMultiplier { hundredths: 0 };
    assert_eq!(
        format!("{err}"),
        "Invalid price multiplier: 0 hundredths. Must be greater than 0"
    );

    let err: DomainError = DomainError::InvalidRoomName(String::from("Room name cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid room name: Room name cannot be empty");

    let err: DomainError = DomainError::SeatNotFound {
        seat_id: String::from("seat-9"),
    };
    assert_eq!(format!("{err}"), "Seat 'seat-9' not found for this showtime");
}

#[test]
fn test_format_error_display() {
    let err: FormatError = FormatError::Malformed {
        detail: String::from("expected value at line 1 column 1"),
    };
    assert_eq!(
        format!("{err}"),
        "Malformed layout payload: expected value at line 1 column 1"
    );

    let err: FormatError = FormatError::UnsupportedVersion { version: 9 };
    assert_eq!(format!("{err}"), "Unsupported layout format version 9");

    let err: FormatError = FormatError::InvalidDimensions { rows: 0, cols: 300 };
    assert_eq!(
        format!("{err}"),
        "Layout payload declares invalid dimensions 0x300"
    );

    let err: FormatError = FormatError::RowCountMismatch {
        expected: 4,
        actual: 3,
    };
    assert_eq!(
        format!("{err}"),
        "Layout payload declares 4 rows but contains 3"
    );

    let err: FormatError = FormatError::RowLengthMismatch {
        row: 2,
        expected: 6,
        actual: 5,
    };
    assert_eq!(
        format!("{err}"),
        "Row 2 of the layout payload has 5 cells, expected 6"
    );
}
