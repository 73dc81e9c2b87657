// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, MAX_DIMENSION, SeatCell, SeatLayout, SeatType};

#[test]
fn test_new_fills_grid_with_active_standard_cells() {
    let layout: SeatLayout = SeatLayout::new(3, 4).unwrap();

    assert_eq!(layout.rows(), 3);
    assert_eq!(layout.cols(), 4);
    for row in 0..3 {
        for col in 0..4 {
            let cell: SeatCell = layout.cell(row, col).unwrap();
            assert!(cell.is_active());
            assert_eq!(cell.seat_type(), SeatType::Standard);
        }
    }
}

#[test]
fn test_new_rejects_zero_rows() {
    let result: Result<SeatLayout, DomainError> = SeatLayout::new(0, 4);
    assert!(matches!(
        result,
        Err(DomainError::InvalidDimensions { rows: 0, cols: 4 })
    ));
}

#[test]
fn test_new_rejects_zero_cols() {
    let result: Result<SeatLayout, DomainError> = SeatLayout::new(4, 0);
    assert!(matches!(
        result,
        Err(DomainError::InvalidDimensions { rows: 4, cols: 0 })
    ));
}

#[test]
fn test_new_rejects_oversized_axis() {
    let result: Result<SeatLayout, DomainError> = SeatLayout::new(MAX_DIMENSION + 1, 4);
    assert!(matches!(result, Err(DomainError::InvalidDimensions { .. })));
}

#[test]
fn test_cell_rejects_out_of_bounds_position() {
    let layout: SeatLayout = SeatLayout::new(2, 2).unwrap();

    let result: Result<SeatCell, DomainError> = layout.cell(2, 0);
    assert!(matches!(
        result,
        Err(DomainError::CellOutOfBounds {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        })
    ));
}

#[test]
fn test_with_cell_replaces_only_the_target() {
    let layout: SeatLayout = SeatLayout::new(2, 2).unwrap();

    let edited: SeatLayout = layout
        .with_cell(0, 1, SeatCell::new(SeatType::Vip, true))
        .unwrap();

    assert_eq!(edited.cell(0, 1).unwrap().seat_type(), SeatType::Vip);
    assert_eq!(edited.cell(0, 0).unwrap().seat_type(), SeatType::Standard);
    // The original layout is untouched
    assert_eq!(layout.cell(0, 1).unwrap().seat_type(), SeatType::Standard);
}

#[test]
fn test_with_cell_rejects_out_of_bounds_position() {
    let layout: SeatLayout = SeatLayout::new(2, 2).unwrap();

    let result: Result<SeatLayout, DomainError> =
        layout.with_cell(0, 5, SeatCell::new(SeatType::Vip, true));
    assert!(matches!(result, Err(DomainError::CellOutOfBounds { .. })));
}

#[test]
fn test_resize_preserves_the_overlap() {
    let layout: SeatLayout = SeatLayout::new(2, 2)
        .unwrap()
        .with_cell(0, 0, SeatCell::new(SeatType::Vip, true))
        .unwrap()
        .with_cell(1, 1, SeatCell::new(SeatType::Couple, false))
        .unwrap();

    let grown: SeatLayout = layout.resize(3, 3).unwrap();

    assert_eq!(grown.cell(0, 0).unwrap().seat_type(), SeatType::Vip);
    assert_eq!(grown.cell(1, 1).unwrap().seat_type(), SeatType::Couple);
    assert!(!grown.cell(1, 1).unwrap().is_active());
    // New positions are active standard cells
    assert_eq!(grown.cell(2, 2).unwrap().seat_type(), SeatType::Standard);
    assert!(grown.cell(2, 2).unwrap().is_active());
}

#[test]
fn test_resize_shrink_then_grow_loses_discarded_cells() {
    let layout: SeatLayout = SeatLayout::new(3, 3)
        .unwrap()
        .with_cell(2, 2, SeatCell::new(SeatType::Vip, true))
        .unwrap();

    let shrunk: SeatLayout = layout.resize(2, 2).unwrap();
    let regrown: SeatLayout = shrunk.resize(3, 3).unwrap();

    // The discarded corner comes back as a default cell, not a VIP seat
    assert_eq!(regrown.cell(2, 2).unwrap().seat_type(), SeatType::Standard);
    assert!(regrown.cell(2, 2).unwrap().is_active());
}

#[test]
fn test_resize_rejects_invalid_dimensions() {
    let layout: SeatLayout = SeatLayout::new(2, 2).unwrap();

    let result: Result<SeatLayout, DomainError> = layout.resize(0, 2);
    assert!(matches!(result, Err(DomainError::InvalidDimensions { .. })));
}

#[test]
fn test_active_seat_count_ignores_inactive_cells() {
    let layout: SeatLayout = SeatLayout::new(2, 2)
        .unwrap()
        .with_cell(0, 0, SeatCell::gap())
        .unwrap();

    assert_eq!(layout.active_seat_count(), 3);
    assert!(!layout.is_all_inactive());
}

#[test]
fn test_active_count_of_filters_by_category() {
    let layout: SeatLayout = SeatLayout::new(1, 3)
        .unwrap()
        .with_cell(0, 0, SeatCell::new(SeatType::Vip, true))
        .unwrap()
        .with_cell(0, 1, SeatCell::new(SeatType::Vip, false))
        .unwrap();

    assert_eq!(layout.active_count_of(SeatType::Vip), 1);
    assert_eq!(layout.active_count_of(SeatType::Standard), 1);
}

#[test]
fn test_is_all_inactive_when_every_cell_is_a_gap() {
    let layout: SeatLayout = SeatLayout::new(1, 2)
        .unwrap()
        .with_cell(0, 0, SeatCell::gap())
        .unwrap()
        .with_cell(0, 1, SeatCell::gap())
        .unwrap();

    assert!(layout.is_all_inactive());
}

#[test]
fn test_row_cells_returns_cells_in_column_order() {
    let layout: SeatLayout = SeatLayout::new(2, 3)
        .unwrap()
        .with_cell(1, 2, SeatCell::new(SeatType::Disabled, true))
        .unwrap();

    let row: &[SeatCell] = layout.row_cells(1).unwrap();

    assert_eq!(row.len(), 3);
    assert_eq!(row[2].seat_type(), SeatType::Disabled);
}

#[test]
fn test_row_cells_rejects_out_of_bounds_row() {
    let layout: SeatLayout = SeatLayout::new(2, 3).unwrap();

    let result: Result<&[SeatCell], DomainError> = layout.row_cells(2);
    assert!(matches!(result, Err(DomainError::CellOutOfBounds { .. })));
}
