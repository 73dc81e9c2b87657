// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire codec for persisted seat layouts.
//!
//! A layout travels to and from room management as a self-describing JSON
//! document:
//!
//! ```text
//! {"version":1,"rows":2,"cols":3,
//!  "cells":[[{"type":"standard","active":true}, ...], [...]]}
//! ```
//!
//! ## Invariants
//!
//! - Decoding validates everything before a layout is built; a payload
//!   that fails any check is rejected whole, never patched
//! - Encoding always writes explicit cell records, so a cell's category
//!   survives the round trip even while the cell is inactive
//! - A `null` cell on input is the legacy authoring shape for a gap and
//!   normalizes to an inactive standard cell
//! - Decoding the output of encoding reproduces the original layout

use crate::error::FormatError;
use crate::layout::SeatLayout;
use crate::types::{SeatCell, SeatType};
use crate::validation::validate_dimensions;
use serde::{Deserialize, Serialize};

/// The format version this codec reads and writes.
pub const LAYOUT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct LayoutWire {
    version: u32,
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Option<CellWire>>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct CellWire {
    #[serde(rename = "type")]
    seat_type: SeatType,
    active: bool,
}

/// Encodes a layout into its JSON transport form.
///
/// # Errors
///
/// Returns `FormatError::Malformed` if JSON encoding fails.
pub fn serialize_layout(layout: &SeatLayout) -> Result<String, FormatError> {
    let cells: Vec<Vec<Option<CellWire>>> = (0..layout.rows())
        .map(|row| {
            layout
                .row_cells(row)
                .unwrap_or_default()
                .iter()
                .map(|cell| {
                    Some(CellWire {
                        seat_type: cell.seat_type(),
                        active: cell.is_active(),
                    })
                })
                .collect()
        })
        .collect();
    let wire: LayoutWire = LayoutWire {
        version: LAYOUT_FORMAT_VERSION,
        rows: layout.rows(),
        cols: layout.cols(),
        cells,
    };
    serde_json::to_string(&wire).map_err(|error| FormatError::Malformed {
        detail: error.to_string(),
    })
}

/// Decodes a layout from its JSON transport form.
///
/// # Errors
///
/// - `FormatError::Malformed` for invalid JSON or an unknown seat type tag
/// - `FormatError::UnsupportedVersion` for any version other than
///   [`LAYOUT_FORMAT_VERSION`]
/// - `FormatError::InvalidDimensions` for declared dimensions outside the
///   permitted range
/// - `FormatError::RowCountMismatch` / `FormatError::RowLengthMismatch`
///   when the cell grid does not match the declared dimensions
pub fn deserialize_layout(payload: &str) -> Result<SeatLayout, FormatError> {
    let wire: LayoutWire =
        serde_json::from_str(payload).map_err(|error| FormatError::Malformed {
            detail: error.to_string(),
        })?;

    if wire.version != LAYOUT_FORMAT_VERSION {
        return Err(FormatError::UnsupportedVersion {
            version: wire.version,
        });
    }
    if validate_dimensions(wire.rows, wire.cols).is_err() {
        return Err(FormatError::InvalidDimensions {
            rows: wire.rows,
            cols: wire.cols,
        });
    }
    if wire.cells.len() != wire.rows {
        return Err(FormatError::RowCountMismatch {
            expected: wire.rows,
            actual: wire.cells.len(),
        });
    }

    let mut cells: Vec<SeatCell> = Vec::with_capacity(wire.rows * wire.cols);
    for (row, wire_row) in wire.cells.iter().enumerate() {
        if wire_row.len() != wire.cols {
            return Err(FormatError::RowLengthMismatch {
                row,
                expected: wire.cols,
                actual: wire_row.len(),
            });
        }
        for wire_cell in wire_row {
            cells.push(wire_cell.map_or_else(SeatCell::gap, |cell| {
                SeatCell::new(cell.seat_type, cell.active)
            }));
        }
    }

    Ok(SeatLayout::from_parts(wire.rows, wire.cols, cells))
}
