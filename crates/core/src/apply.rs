// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{EditOutcome, EditorState, TransitionResult};
use cine_seat_domain::{SeatCell, serialize_layout};

/// Applies an editing command to the current state, producing a new state.
///
/// The input state is never modified; callers that keep it keep a valid
/// pre-command layout. Seat numbering and row labels are not stored
/// anywhere in the state, so a caller re-deriving the labeled view after
/// this call always sees numbering that matches the new grid.
///
/// # Arguments
///
/// * `state` - The current editor state (immutable)
/// * `command` - The editing gesture to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` with the new state and what the command did
/// * `Err(CoreError)` if the command is invalid for this grid
///
/// # Errors
///
/// Returns an error if:
/// - The command targets a cell outside the grid
/// - The command resizes to dimensions outside the permitted range
pub fn apply(state: &EditorState, command: Command) -> Result<TransitionResult, CoreError> {
    match command {
        Command::SetCellType {
            row,
            col,
            seat_type,
        } => {
            let cell: SeatCell = state.layout.cell(row, col)?;

            // Rule: category changes on an inactive cell are ignored, not applied
            if !cell.is_active() {
                return Ok(TransitionResult {
                    new_state: state.clone(),
                    outcome: EditOutcome::IgnoredInactive,
                });
            }

            let new_state: EditorState =
                EditorState::new(state.layout.with_cell(row, col, cell.with_seat_type(seat_type))?);

            Ok(TransitionResult {
                new_state,
                outcome: EditOutcome::Applied,
            })
        }
        Command::CycleCellType { row, col } => {
            let cell: SeatCell = state.layout.cell(row, col)?;

            // Rule: category changes on an inactive cell are ignored, not applied
            if !cell.is_active() {
                return Ok(TransitionResult {
                    new_state: state.clone(),
                    outcome: EditOutcome::IgnoredInactive,
                });
            }

            let next: SeatCell = cell.with_seat_type(cell.seat_type().cycle_next());
            let new_state: EditorState = EditorState::new(state.layout.with_cell(row, col, next)?);

            Ok(TransitionResult {
                new_state,
                outcome: EditOutcome::Applied,
            })
        }
        Command::ToggleActive { row, col } => {
            // Rule: toggling works on any cell; it is how gaps are carved and restored
            let cell: SeatCell = state.layout.cell(row, col)?;
            let new_state: EditorState =
                EditorState::new(state.layout.with_cell(row, col, cell.toggled())?);

            Ok(TransitionResult {
                new_state,
                outcome: EditOutcome::Applied,
            })
        }
        Command::ChangeDimensions { rows, cols } => {
            let new_state: EditorState = EditorState::new(state.layout.resize(rows, cols)?);

            Ok(TransitionResult {
                new_state,
                outcome: EditOutcome::Applied,
            })
        }
    }
}

/// Encodes the working layout for handoff to room management.
///
/// The editor performs no I/O of its own; the caller passes the returned
/// payload to whatever stores rooms.
///
/// # Arguments
///
/// * `state` - The editor state to encode
///
/// # Returns
///
/// The layout in its JSON transport form.
///
/// # Errors
///
/// Returns `CoreError::LayoutEncoding` if the layout cannot be encoded.
pub fn save_payload(state: &EditorState) -> Result<String, CoreError> {
    Ok(serialize_layout(&state.layout)?)
}
