// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_seat_domain::SeatType;

/// An editing gesture on the seat grid, as data only.
///
/// Commands are the only way to request layout changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Assign a specific category to a cell.
    SetCellType {
        /// The 0-based grid row.
        row: usize,
        /// The 0-based grid column.
        col: usize,
        /// The category to assign.
        seat_type: SeatType,
    },
    /// Advance a cell's category to the next one in the click cycle.
    CycleCellType {
        /// The 0-based grid row.
        row: usize,
        /// The 0-based grid column.
        col: usize,
    },
    /// Flip a cell between seat and gap.
    ToggleActive {
        /// The 0-based grid row.
        row: usize,
        /// The 0-based grid column.
        col: usize,
    },
    /// Resize the grid, preserving the overlapping cells.
    ChangeDimensions {
        /// The new row count.
        rows: usize,
        /// The new column count.
        cols: usize,
    },
}
