// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod request_response;
mod stores;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error, translate_format_error};
pub use request_response::{
    CycleCellRequest, CycleCellResponse, EditCellRequest, EditCellResponse, GridView,
    OpenEditorRequest, OpenEditorResponse, OpenRoomEditorResponse, ResizeGridRequest,
    ResizeGridResponse, RowGroupView, SaveRoomRequest, SaveRoomResponse, SeatSummary, SeatView,
    SelectionChanged, SelectionViewResponse, StartSelectionRequest, StartSelectionResponse,
    ToggleCellRequest, ToggleCellResponse, ToggleSeatRequest, ToggleSeatResponse,
};
pub use stores::{RoomDraft, RoomRecord, RoomStore, ShowtimeInventory, StoreError};

use cine_seat::{
    BlockedReason, Command, EditOutcome, EditorState, SeatRowGroup, SelectionPolicy,
    SelectionState, SelectionTransition, ToggleOutcome, TransitionResult, apply, grouped_rows,
    save_payload, seat_appearance,
};
use cine_seat_domain::{
    Amount, RoomId, SeatCell, SeatId, SeatInstance, SeatLayout, SeatType, ShowtimeId,
    deserialize_layout, row_views, validate_dimensions, validate_room_name,
};

/// An editing session over one room's grid.
///
/// The session records which stored room the grid came from, if any, so a
/// later save knows whether to create or update. The grid itself lives in
/// the core editor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    /// The stored room this session edits, or `None` for a new room.
    pub room_id: Option<RoomId>,
    /// The current editor state.
    pub state: EditorState,
}

impl EditorSession {
    /// Returns the session carried forward with a new editor state.
    ///
    /// The room binding is preserved; only the grid changes.
    #[must_use]
    pub fn with_state(&self, state: EditorState) -> Self {
        Self {
            room_id: self.room_id.clone(),
            state,
        }
    }
}

/// A seat-picking session over one showtime's seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSession {
    /// The showtime the patron is picking seats for.
    pub showtime_id: ShowtimeId,
    /// The current selection state.
    pub state: SelectionState,
}

impl SelectionSession {
    /// Returns the session carried forward with a new selection state.
    #[must_use]
    pub fn with_state(&self, state: SelectionState) -> Self {
        Self {
            showtime_id: self.showtime_id.clone(),
            state,
        }
    }
}

/// The result of an editor API operation: the response and the session to
/// carry forward.
///
/// This ensures that successful operations always hand back the session
/// the caller should continue with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorApiResult<T> {
    /// The API response.
    pub response: T,
    /// The editor session after the operation.
    pub session: EditorSession,
}

/// The result of a selection API operation: the response and the session
/// to carry forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionApiResult<T> {
    /// The API response.
    pub response: T,
    /// The selection session after the operation.
    pub session: SelectionSession,
}

fn grid_view(state: &EditorState) -> GridView {
    GridView {
        rows: state.layout.rows(),
        cols: state.layout.cols(),
        row_views: row_views(&state.layout),
        active_seats: state.layout.active_seat_count(),
    }
}

/// Opens the editor on a fresh grid of active standard cells.
///
/// This function:
/// - Validates the requested dimensions
/// - Builds the empty grid and a session with no room binding
/// - Returns the labeled grid snapshot
///
/// # Arguments
///
/// * `request` - The API request carrying the grid dimensions
///
/// # Returns
///
/// * `Ok(EditorApiResult<OpenEditorResponse>)` on success
/// * `Err(ApiError)` if the dimensions are out of range
///
/// # Errors
///
/// Returns an error if either dimension is outside the permitted range.
pub fn open_editor(
    request: OpenEditorRequest,
) -> Result<EditorApiResult<OpenEditorResponse>, ApiError> {
    let OpenEditorRequest { rows, cols } = request;

    // Build the empty grid; the layout enforces the dimension bounds
    let layout: SeatLayout = SeatLayout::new(rows, cols).map_err(translate_domain_error)?;
    let state: EditorState = EditorState::new(layout);
    let session: EditorSession = EditorSession {
        room_id: None,
        state,
    };

    tracing::info!(rows, cols, "Opened seat grid editor for a new room");

    let response: OpenEditorResponse = OpenEditorResponse {
        grid: grid_view(&session.state),
        message: format!("Opened a new {rows}x{cols} grid"),
    };

    Ok(EditorApiResult { response, session })
}

/// Opens the editor on a stored room.
///
/// This function:
/// - Loads the room record from the store
/// - Decodes the stored layout payload
/// - Returns a session bound to the room for a later save
///
/// # Arguments
///
/// * `store` - The room store to load from
/// * `room_id` - The identifier of the room to edit
///
/// # Returns
///
/// * `Ok(EditorApiResult<OpenRoomEditorResponse>)` on success
/// * `Err(ApiError)` if the room is missing, the store is unreachable, or
///   the stored payload does not decode
///
/// # Errors
///
/// Returns an error if:
/// - No room is stored under the identifier
/// - The store cannot be reached
/// - The stored layout payload is rejected by the codec
pub fn open_room_editor(
    store: &impl RoomStore,
    room_id: &RoomId,
) -> Result<EditorApiResult<OpenRoomEditorResponse>, ApiError> {
    // Load the stored record
    let record: RoomRecord = store.load_room(room_id).map_err(|err| match err {
        StoreError::Rejected { detail } => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: detail,
        },
        StoreError::Unavailable { detail } => ApiError::LoadFailed { message: detail },
    })?;

    // Decode the stored layout; a payload that fails to decode is rejected
    // outright, never repaired
    let layout: SeatLayout = deserialize_layout(&record.serialized_layout)
        .map_err(|err| translate_format_error(&err))?;
    let state: EditorState = EditorState::new(layout);

    tracing::info!(
        room_id = record.room_id.value(),
        name = record.name.as_str(),
        rows = state.layout.rows(),
        cols = state.layout.cols(),
        "Loaded room into the seat grid editor"
    );

    let message: String = format!("Loaded room '{}'", record.name);
    let response: OpenRoomEditorResponse = OpenRoomEditorResponse {
        room_id: String::from(record.room_id.value()),
        name: record.name,
        grid: grid_view(&state),
        message,
    };
    let session: EditorSession = EditorSession {
        room_id: Some(record.room_id),
        state,
    };

    Ok(EditorApiResult { response, session })
}

/// Sets the seat type of one cell via the API boundary.
///
/// This function:
/// - Parses the seat type tag from the request
/// - Applies the edit through the core transition
/// - Reports whether the edit was applied or ignored
///
/// # Arguments
///
/// * `session` - The current editor session
/// * `request` - The API request naming the cell and the seat type tag
///
/// # Returns
///
/// * `Ok(EditorApiResult<EditCellResponse>)` on success
/// * `Err(ApiError)` if the tag is unknown or the cell is out of bounds
///
/// # Errors
///
/// Returns an error if:
/// - The seat type tag is not recognized
/// - The cell coordinate falls outside the grid
pub fn edit_cell(
    session: &EditorSession,
    request: EditCellRequest,
) -> Result<EditorApiResult<EditCellResponse>, ApiError> {
    let EditCellRequest {
        row,
        col,
        seat_type,
    } = request;

    // Translate API request into domain types
    let seat_type: SeatType = seat_type.parse().map_err(translate_domain_error)?;

    // Create core command
    let command: Command = Command::SetCellType {
        row,
        col,
        seat_type,
    };

    // Apply command via core transition
    let transition: TransitionResult =
        apply(&session.state, command).map_err(translate_core_error)?;

    let message: String = match transition.outcome {
        EditOutcome::Applied => format!("Set cell ({row}, {col}) to {seat_type}"),
        EditOutcome::IgnoredInactive => {
            format!("Cell ({row}, {col}) is inactive; seat type unchanged")
        }
    };

    // Translate to API response
    let response: EditCellResponse = EditCellResponse {
        outcome: transition.outcome,
        grid: grid_view(&transition.new_state),
        message,
    };

    Ok(EditorApiResult {
        response,
        session: session.with_state(transition.new_state),
    })
}

/// Cycles one cell to the next seat type via the API boundary.
///
/// This function:
/// - Reads the cell to determine the next type in the cycle
/// - Applies the cycle through the core transition
/// - Reports whether the cycle was applied or ignored
///
/// # Arguments
///
/// * `session` - The current editor session
/// * `request` - The API request naming the cell
///
/// # Returns
///
/// * `Ok(EditorApiResult<CycleCellResponse>)` on success
/// * `Err(ApiError)` if the cell is out of bounds
///
/// # Errors
///
/// Returns an error if the cell coordinate falls outside the grid.
pub fn cycle_cell(
    session: &EditorSession,
    request: CycleCellRequest,
) -> Result<EditorApiResult<CycleCellResponse>, ApiError> {
    let CycleCellRequest { row, col } = request;

    let current: SeatCell = session
        .state
        .layout
        .cell(row, col)
        .map_err(translate_domain_error)?;
    let next_type: SeatType = current.seat_type().cycle_next();

    // Create and apply the cycle command
    let command: Command = Command::CycleCellType { row, col };
    let transition: TransitionResult =
        apply(&session.state, command).map_err(translate_core_error)?;

    let message: String = match transition.outcome {
        EditOutcome::Applied => format!("Cycled cell ({row}, {col}) to {next_type}"),
        EditOutcome::IgnoredInactive => {
            format!("Cell ({row}, {col}) is inactive; seat type unchanged")
        }
    };

    let response: CycleCellResponse = CycleCellResponse {
        outcome: transition.outcome,
        grid: grid_view(&transition.new_state),
        message,
    };

    Ok(EditorApiResult {
        response,
        session: session.with_state(transition.new_state),
    })
}

/// Toggles one cell between active and inactive via the API boundary.
///
/// This function:
/// - Reads the cell to report which direction the toggle went
/// - Applies the toggle through the core transition
/// - Returns the renumbered grid snapshot
///
/// # Arguments
///
/// * `session` - The current editor session
/// * `request` - The API request naming the cell
///
/// # Returns
///
/// * `Ok(EditorApiResult<ToggleCellResponse>)` on success
/// * `Err(ApiError)` if the cell is out of bounds
///
/// # Errors
///
/// Returns an error if the cell coordinate falls outside the grid.
pub fn toggle_cell_active(
    session: &EditorSession,
    request: ToggleCellRequest,
) -> Result<EditorApiResult<ToggleCellResponse>, ApiError> {
    let ToggleCellRequest { row, col } = request;

    let current: SeatCell = session
        .state
        .layout
        .cell(row, col)
        .map_err(translate_domain_error)?;

    // Create and apply the toggle command
    let command: Command = Command::ToggleActive { row, col };
    let transition: TransitionResult =
        apply(&session.state, command).map_err(translate_core_error)?;

    let message: String = if current.is_active() {
        format!("Deactivated cell ({row}, {col})")
    } else {
        format!("Activated cell ({row}, {col})")
    };

    let response: ToggleCellResponse = ToggleCellResponse {
        outcome: transition.outcome,
        grid: grid_view(&transition.new_state),
        message,
    };

    Ok(EditorApiResult {
        response,
        session: session.with_state(transition.new_state),
    })
}

/// Changes the grid dimensions via the API boundary.
///
/// This function:
/// - Applies the resize through the core transition
/// - Returns the renumbered grid snapshot
///
/// Cells inside the overlap of the old and new dimensions keep their
/// state; cells outside the new bounds are discarded.
///
/// # Arguments
///
/// * `session` - The current editor session
/// * `request` - The API request carrying the new dimensions
///
/// # Returns
///
/// * `Ok(EditorApiResult<ResizeGridResponse>)` on success
/// * `Err(ApiError)` if the dimensions are out of range
///
/// # Errors
///
/// Returns an error if either dimension is outside the permitted range.
pub fn resize_grid(
    session: &EditorSession,
    request: ResizeGridRequest,
) -> Result<EditorApiResult<ResizeGridResponse>, ApiError> {
    let ResizeGridRequest { rows, cols } = request;

    // Create and apply the resize command
    let command: Command = Command::ChangeDimensions { rows, cols };
    let transition: TransitionResult =
        apply(&session.state, command).map_err(translate_core_error)?;

    let response: ResizeGridResponse = ResizeGridResponse {
        grid: grid_view(&transition.new_state),
        message: format!("Resized grid to {rows}x{cols}"),
    };

    Ok(EditorApiResult {
        response,
        session: session.with_state(transition.new_state),
    })
}

/// Saves the edited grid as a room via the API boundary.
///
/// This function:
/// - Validates the room name and grid dimensions before touching the store
/// - Serializes the layout into its wire form
/// - Persists the draft, creating or updating depending on the session's
///   room binding
///
/// On a store failure the session is untouched; the caller may fix the
/// problem and save the same session again.
///
/// # Arguments
///
/// * `store` - The room store to persist into
/// * `session` - The current editor session
/// * `request` - The API request carrying the room name
///
/// # Returns
///
/// * `Ok(EditorApiResult<SaveRoomResponse>)` with the session now bound to
///   the stored room
/// * `Err(ApiError)` if validation fails or the store refuses the draft
///
/// # Errors
///
/// Returns an error if:
/// - The room name is empty or too long
/// - The grid dimensions are out of range
/// - The layout cannot be serialized
/// - The store cannot persist the draft
pub fn save_room(
    store: &mut impl RoomStore,
    session: &EditorSession,
    request: SaveRoomRequest,
) -> Result<EditorApiResult<SaveRoomResponse>, ApiError> {
    let SaveRoomRequest { name } = request;

    // Rule: the draft is validated before the store sees it
    validate_room_name(&name).map_err(translate_domain_error)?;
    validate_dimensions(session.state.layout.rows(), session.state.layout.cols())
        .map_err(translate_domain_error)?;

    // Serialize the layout into its wire form
    let serialized_layout: String = save_payload(&session.state).map_err(translate_core_error)?;
    let draft: RoomDraft = RoomDraft {
        name: name.clone(),
        serialized_layout,
    };

    let room_id: RoomId = store
        .save_room(session.room_id.as_ref(), &draft)
        .map_err(|err| ApiError::SaveFailed {
            message: err.to_string(),
        })?;

    tracing::info!(
        room_id = room_id.value(),
        name = name.as_str(),
        rows = session.state.layout.rows(),
        cols = session.state.layout.cols(),
        active_seats = session.state.layout.active_seat_count(),
        "Saved room layout"
    );

    let message: String = format!("Successfully saved room '{name}'");
    let response: SaveRoomResponse = SaveRoomResponse {
        room_id: String::from(room_id.value()),
        name,
        message,
    };

    Ok(EditorApiResult {
        response,
        session: EditorSession {
            room_id: Some(room_id),
            state: session.state.clone(),
        },
    })
}

fn seat_view(seat: &SeatInstance, state: &SelectionState) -> SeatView {
    SeatView {
        seat_id: String::from(seat.id().value()),
        seat_label: String::from(seat.seat_label()),
        seat_number: seat.seat_number(),
        seat_type: seat.seat_type(),
        appearance: seat_appearance(seat, state.is_selected(seat.id())),
        price_minor_units: seat.price(state.base_price()).minor_units(),
    }
}

fn selection_changed(state: &SelectionState) -> SelectionChanged {
    let selected: Vec<SeatSummary> = state
        .selected_seats()
        .into_iter()
        .map(|seat| SeatSummary {
            seat_id: String::from(seat.id().value()),
            seat_label: String::from(seat.seat_label()),
            price_minor_units: seat.price(state.base_price()).minor_units(),
        })
        .collect();

    SelectionChanged {
        selected,
        total_minor_units: state.total_amount().minor_units(),
    }
}

/// Starts a seat selection session for a showtime.
///
/// This function:
/// - Resolves the showtime's seats from inventory, occupancy included
/// - Builds a selection state under the session's seat cap
/// - Returns the initial view with nothing selected
///
/// # Arguments
///
/// * `inventory` - The showtime inventory to resolve seats from
/// * `request` - The API request naming the showtime, base price, and
///   optional seat cap
///
/// # Returns
///
/// * `Ok(SelectionApiResult<StartSelectionResponse>)` on success
/// * `Err(ApiError)` if inventory fails or delivers duplicate seats
///
/// # Errors
///
/// Returns an error if:
/// - The inventory cannot be resolved
/// - Two resolved seats share an identifier
pub fn start_selection(
    inventory: &impl ShowtimeInventory,
    request: StartSelectionRequest,
) -> Result<SelectionApiResult<StartSelectionResponse>, ApiError> {
    let StartSelectionRequest {
        showtime_id,
        base_price_minor_units,
        max_seats,
    } = request;

    let id: ShowtimeId = ShowtimeId::new(&showtime_id);

    // Resolve the showtime's seats; occupancy arrives already decided
    let seats: Vec<SeatInstance> =
        inventory
            .resolve_seats(&id)
            .map_err(|err| ApiError::InventoryUnavailable {
                message: err.to_string(),
            })?;

    let policy: SelectionPolicy =
        max_seats.map_or_else(SelectionPolicy::default, |max_seats| SelectionPolicy {
            max_seats,
        });
    let base_price: Amount = Amount::from_minor_units(base_price_minor_units);

    let state: SelectionState =
        SelectionState::new(seats, base_price, policy).map_err(translate_core_error)?;

    tracing::info!(
        showtime_id = id.value(),
        seat_count = state.seats().len(),
        max_seats = policy.max_seats,
        "Started seat selection session"
    );

    let session: SelectionSession = SelectionSession {
        showtime_id: id,
        state,
    };
    let response: StartSelectionResponse = StartSelectionResponse {
        view: selection_view(&session),
        message: format!("Started seat selection for showtime '{showtime_id}'"),
    };

    Ok(SelectionApiResult { response, session })
}

/// Toggles a seat in or out of the selection via the API boundary.
///
/// This function:
/// - Applies the toggle through the core transition
/// - Reports the outcome, including why a refused toggle did nothing
/// - Carries the new selection contents when the selection changed
///
/// # Arguments
///
/// * `session` - The current selection session
/// * `request` - The API request naming the seat
///
/// # Returns
///
/// * `Ok(SelectionApiResult<ToggleSeatResponse>)` with the outcome; a
///   refused toggle is a success whose outcome says why nothing changed
/// * `Err(ApiError)` if no seat with this identifier exists
///
/// # Errors
///
/// Returns an error if the seat identifier is not part of this showtime.
pub fn toggle_seat(
    session: &SelectionSession,
    request: ToggleSeatRequest,
) -> Result<SelectionApiResult<ToggleSeatResponse>, ApiError> {
    let ToggleSeatRequest { seat_id } = request;
    let id: SeatId = SeatId::new(&seat_id);

    // Apply the toggle via the core transition
    let transition: SelectionTransition =
        cine_seat::toggle_seat(&session.state, &id).map_err(translate_core_error)?;

    let seat_label: String = session
        .state
        .seat(&id)
        .map_or_else(|| seat_id.clone(), |seat| seat.seat_label().to_string());

    let message: String = match transition.outcome {
        ToggleOutcome::Selected => format!("Selected seat '{seat_label}'"),
        ToggleOutcome::Deselected => format!("Removed seat '{seat_label}' from the selection"),
        ToggleOutcome::Blocked(BlockedReason::AlreadyBooked) => {
            format!("Seat '{seat_label}' is already booked")
        }
        ToggleOutcome::Blocked(BlockedReason::InactiveSeat) => {
            format!("Seat '{seat_label}' is not a sellable seat")
        }
        ToggleOutcome::CapacityExceeded { max_seats } => {
            format!("No more than {max_seats} seats may be selected")
        }
    };

    let selection: Option<SelectionChanged> = match transition.outcome {
        ToggleOutcome::Selected | ToggleOutcome::Deselected => {
            Some(selection_changed(&transition.new_state))
        }
        ToggleOutcome::Blocked(_) | ToggleOutcome::CapacityExceeded { .. } => None,
    };

    match transition.outcome {
        ToggleOutcome::Selected | ToggleOutcome::Deselected => {
            tracing::info!(
                showtime_id = session.showtime_id.value(),
                seat_id = seat_id.as_str(),
                selected_count = transition.new_state.selected_count(),
                total_minor_units = transition.new_state.total_amount().minor_units(),
                "Updated seat selection"
            );
        }
        ToggleOutcome::Blocked(_) | ToggleOutcome::CapacityExceeded { .. } => {
            tracing::warn!("Seat toggle refused: {message}");
        }
    }

    let response: ToggleSeatResponse = ToggleSeatResponse {
        outcome: transition.outcome,
        selection,
        message,
    };

    Ok(SelectionApiResult {
        response,
        session: session.with_state(transition.new_state),
    })
}

/// Builds the full seat-picking view for the session's current state.
///
/// Rows are sorted by row label; seats within a row are in ascending seat
/// number order. Every seat carries exactly one appearance, so the caller
/// renders without re-deriving any state.
///
/// # Arguments
///
/// * `session` - The selection session to present
#[must_use]
pub fn selection_view(session: &SelectionSession) -> SelectionViewResponse {
    let groups: Vec<SeatRowGroup> = grouped_rows(session.state.seats());
    let rows: Vec<RowGroupView> = groups
        .into_iter()
        .map(|group| RowGroupView {
            row_name: group.row_name,
            seats: group
                .seats
                .iter()
                .map(|seat| seat_view(seat, &session.state))
                .collect(),
        })
        .collect();

    SelectionViewResponse {
        showtime_id: String::from(session.showtime_id.value()),
        rows,
        selected_count: session.state.selected_count(),
        max_seats: session.state.policy().max_seats,
        total_minor_units: session.state.total_amount().minor_units(),
    }
}
