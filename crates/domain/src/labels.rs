// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row label and seat number derivation for seating grids.
//!
//! Labels are presentation data computed from a layout on demand:
//! - Row labels run "A" through "Z", then continue bijectively as
//!   "AA", "AB", and so on (Excel column style)
//! - Seat numbers are 1-based and count only active cells, left to right
//! - A seat's display label is its row label followed by its seat number
//!
//! ## Invariants
//!
//! - Labels are never stored; every call derives them from the current grid
//! - An inactive cell consumes a grid column but no seat number
//! - Editing or resizing a layout renumbers seats on the next derivation
//!
//! ## Usage
//!
//! This logic is used by:
//! - The grid editor (to redraw headers and numbering after every edit)
//! - Inventory expansion (to stamp row names and labels onto seat instances)

use crate::layout::SeatLayout;
use crate::types::SeatCell;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// One grid position of a labeled row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberedCell {
    /// The 0-based grid column.
    pub col: usize,
    /// The cell at this position.
    pub cell: SeatCell,
    /// The 1-based seat number, or `None` for an inactive cell.
    pub seat_number: Option<u32>,
}

/// One fully labeled row of a layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    /// The 0-based grid row.
    pub row: usize,
    /// The derived row label (e.g. "C").
    pub label: String,
    /// The row's cells with their derived seat numbers.
    pub cells: Vec<NumberedCell>,
}

/// Derives the display label of a row from its 0-based index.
///
/// Index 0 is "A", 25 is "Z", 26 is "AA", 27 is "AB", continuing in
/// bijective base-26 for arbitrarily deep grids.
#[must_use]
pub fn row_label(index: usize) -> String {
    let mut n: usize = index + 1;
    let mut letters: Vec<u8> = Vec::new();
    while n > 0 {
        letters.push(ALPHABET[(n - 1) % 26]);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Derives the display label of a single seat.
///
/// The label is the row label immediately followed by the seat number,
/// e.g. row index 2, seat number 7 is "C7".
#[must_use]
pub fn seat_label(row_index: usize, seat_number: u32) -> String {
    format!("{}{seat_number}", row_label(row_index))
}

/// Derives the labeled view of every row in a layout.
///
/// # Arguments
///
/// * `layout` - The grid to label
///
/// # Returns
///
/// One `RowView` per grid row, in grid order. Within each row, every cell
/// appears in column order; active cells carry consecutive seat numbers
/// starting at 1 and inactive cells carry none.
#[must_use]
pub fn row_views(layout: &SeatLayout) -> Vec<RowView> {
    (0..layout.rows())
        .map(|row| {
            // row < layout.rows(), so row_cells cannot fail
            let cells: &[SeatCell] = layout.row_cells(row).unwrap_or_default();
            RowView {
                row,
                label: row_label(row),
                cells: number_cells(cells),
            }
        })
        .collect()
}

/// Numbers the cells of one row.
///
/// Active cells receive consecutive 1-based numbers in column order;
/// inactive cells receive `None`.
#[must_use]
pub fn number_cells(cells: &[SeatCell]) -> Vec<NumberedCell> {
    let mut next_number: u32 = 1;
    cells
        .iter()
        .enumerate()
        .map(|(col, cell)| {
            let seat_number: Option<u32> = if cell.is_active() {
                let number: u32 = next_number;
                next_number += 1;
                Some(number)
            } else {
                None
            };
            NumberedCell {
                col,
                cell: *cell,
                seat_number,
            }
        })
        .collect()
}
