// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{SeatCell, SeatType};
use crate::validation::validate_dimensions;

/// The seating grid of one cinema room.
///
/// The grid is dense: every position inside `rows x cols` holds a cell,
/// active or not. Cells are stored row-major and the backing vector always
/// contains exactly `rows * cols` entries.
///
/// A layout is a template. It carries no occupancy and no prices; those
/// belong to the seat instances inventory derives from it per showtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatLayout {
    /// Number of rows in the grid.
    rows: usize,
    /// Number of columns in the grid.
    cols: usize,
    /// Row-major cell storage, exactly `rows * cols` entries.
    cells: Vec<SeatCell>,
}

impl SeatLayout {
    /// Creates a layout with every cell active and standard.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows
    /// * `cols` - Number of columns
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimensions` if either axis is outside
    /// the permitted range.
    pub fn new(rows: usize, cols: usize) -> Result<Self, DomainError> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![SeatCell::standard(); rows * cols],
        })
    }

    /// Assembles a layout from already validated parts.
    ///
    /// Callers must have checked the dimensions and that `cells` holds
    /// exactly `rows * cols` entries; the codec does this before calling.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<SeatCell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` if the position is outside
    /// the grid.
    pub fn cell(&self, row: usize, col: usize) -> Result<SeatCell, DomainError> {
        let index: usize = self.index(row, col)?;
        Ok(self.cells[index])
    }

    /// Returns a copy of this layout with one cell replaced.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` if the position is outside
    /// the grid.
    pub fn with_cell(&self, row: usize, col: usize, cell: SeatCell) -> Result<Self, DomainError> {
        let index: usize = self.index(row, col)?;
        let mut next: Self = self.clone();
        next.cells[index] = cell;
        Ok(next)
    }

    /// Returns a copy of this layout resized to new dimensions.
    ///
    /// Cells inside the overlap of the old and new grids are preserved
    /// unchanged; positions that only exist in the new grid become active
    /// standard cells. Shrinking discards the cells outside the new bounds,
    /// and a later grow does not bring them back.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimensions` if either axis is outside
    /// the permitted range.
    pub fn resize(&self, rows: usize, cols: usize) -> Result<Self, DomainError> {
        validate_dimensions(rows, cols)?;
        let mut next: Self = Self {
            rows,
            cols,
            cells: vec![SeatCell::standard(); rows * cols],
        };
        for row in 0..self.rows.min(rows) {
            for col in 0..self.cols.min(cols) {
                next.cells[row * cols + col] = self.cells[row * self.cols + col];
            }
        }
        Ok(next)
    }

    /// Returns the cells of one row in column order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CellOutOfBounds` if the row is outside the
    /// grid.
    pub fn row_cells(&self, row: usize) -> Result<&[SeatCell], DomainError> {
        if row >= self.rows {
            return Err(DomainError::CellOutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.cells[row * self.cols..(row + 1) * self.cols])
    }

    /// Returns the number of active cells, the sellable capacity of the
    /// room.
    #[must_use]
    pub fn active_seat_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_active()).count()
    }

    /// Returns the number of active cells of one category.
    #[must_use]
    pub fn active_count_of(&self, seat_type: SeatType) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_active() && cell.seat_type() == seat_type)
            .count()
    }

    /// Returns whether the layout has no sellable seats at all.
    #[must_use]
    pub fn is_all_inactive(&self) -> bool {
        self.active_seat_count() == 0
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, DomainError> {
        if row >= self.rows || col >= self.cols {
            return Err(DomainError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }
}
