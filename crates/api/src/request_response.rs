// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use cine_seat::{EditOutcome, SeatAppearance, ToggleOutcome};
use cine_seat_domain::{RowView, SeatType};

/// API request to open the editor on a fresh grid.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenEditorRequest {
    /// The number of rows in the new grid.
    pub rows: usize,
    /// The number of columns in the new grid.
    pub cols: usize,
}

/// API request to change the seat type of one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCellRequest {
    /// The row index of the cell.
    pub row: usize,
    /// The column index of the cell.
    pub col: usize,
    /// The seat type tag to assign (standard, vip, couple, disabled).
    pub seat_type: String,
}

/// API request to cycle one cell to the next seat type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleCellRequest {
    /// The row index of the cell.
    pub row: usize,
    /// The column index of the cell.
    pub col: usize,
}

/// API request to toggle one cell between active and inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleCellRequest {
    /// The row index of the cell.
    pub row: usize,
    /// The column index of the cell.
    pub col: usize,
}

/// API request to change the grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeGridRequest {
    /// The new row count.
    pub rows: usize,
    /// The new column count.
    pub cols: usize,
}

/// API request to save the edited grid as a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRoomRequest {
    /// The display name to store the room under.
    pub name: String,
}

/// A labeled snapshot of the grid as the editor currently sees it.
///
/// Row labels and seat numbers are derived from the grid on every snapshot;
/// they are never stored, so a snapshot taken after any edit already
/// reflects renumbering.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GridView {
    /// The number of rows in the grid.
    pub rows: usize,
    /// The number of columns in the grid.
    pub cols: usize,
    /// Every row with its label and numbered cells, in grid order.
    pub row_views: Vec<RowView>,
    /// The number of active cells in the grid.
    pub active_seats: usize,
}

/// API response for opening the editor on a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OpenEditorResponse {
    /// The labeled grid snapshot.
    pub grid: GridView,
    /// A success message.
    pub message: String,
}

/// API response for opening the editor on a stored room.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OpenRoomEditorResponse {
    /// The identifier of the loaded room.
    pub room_id: String,
    /// The display name of the loaded room.
    pub name: String,
    /// The labeled grid snapshot.
    pub grid: GridView,
    /// A success message.
    pub message: String,
}

/// API response for a seat type edit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EditCellResponse {
    /// Whether the edit was applied or ignored.
    pub outcome: EditOutcome,
    /// The labeled grid snapshot after the edit.
    pub grid: GridView,
    /// A message describing what happened.
    pub message: String,
}

/// API response for cycling a cell's seat type.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CycleCellResponse {
    /// Whether the cycle was applied or ignored.
    pub outcome: EditOutcome,
    /// The labeled grid snapshot after the cycle.
    pub grid: GridView,
    /// A message describing what happened.
    pub message: String,
}

/// API response for toggling a cell between active and inactive.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleCellResponse {
    /// Whether the toggle was applied or ignored.
    pub outcome: EditOutcome,
    /// The labeled grid snapshot after the toggle.
    pub grid: GridView,
    /// A message describing what happened.
    pub message: String,
}

/// API response for a grid resize.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResizeGridResponse {
    /// The labeled grid snapshot after the resize.
    pub grid: GridView,
    /// A success message.
    pub message: String,
}

/// API response for a successful room save.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveRoomResponse {
    /// The identifier the room is now stored under.
    pub room_id: String,
    /// The display name the room was saved with.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to start a seat selection session for a showtime.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartSelectionRequest {
    /// The showtime identifier.
    pub showtime_id: String,
    /// The showtime's base ticket price, in minor currency units.
    pub base_price_minor_units: i64,
    /// Optional cap on selected seats. `None` uses the default policy.
    pub max_seats: Option<usize>,
}

/// API request to toggle one seat in or out of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSeatRequest {
    /// The identifier of the seat to toggle.
    pub seat_id: String,
}

/// One seat as the selection view presents it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatView {
    /// The seat's identifier.
    pub seat_id: String,
    /// The display label, such as "C7".
    pub seat_label: String,
    /// The seat's number within its row.
    pub seat_number: u32,
    /// The seat's type classification.
    pub seat_type: SeatType,
    /// The single appearance the seat renders with.
    pub appearance: SeatAppearance,
    /// The seat's price for this showtime, in minor currency units.
    pub price_minor_units: i64,
}

/// One row of seats in the selection view.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowGroupView {
    /// The row label the seats share.
    pub row_name: String,
    /// The row's seats in ascending seat number order.
    pub seats: Vec<SeatView>,
}

/// The full selection view: every row of the showtime plus running totals.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionViewResponse {
    /// The showtime this view belongs to.
    pub showtime_id: String,
    /// Rows sorted by row label, each with its seats in numeric order.
    pub rows: Vec<RowGroupView>,
    /// How many seats are currently selected.
    pub selected_count: usize,
    /// The most seats the session may select.
    pub max_seats: usize,
    /// The total price of the selection, in minor currency units.
    pub total_minor_units: i64,
}

/// API response for starting a selection session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StartSelectionResponse {
    /// The initial selection view, with nothing selected yet.
    pub view: SelectionViewResponse,
    /// A success message.
    pub message: String,
}

/// A selected seat as reported to checkout.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SeatSummary {
    /// The seat's identifier.
    pub seat_id: String,
    /// The display label, such as "C7".
    pub seat_label: String,
    /// The seat's price for this showtime, in minor currency units.
    pub price_minor_units: i64,
}

/// The selection contents after a change, for checkout consumers.
///
/// Present only when a toggle actually changed the selection; blocked and
/// refused toggles do not produce one.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionChanged {
    /// Every selected seat, in the order the seats were picked.
    pub selected: Vec<SeatSummary>,
    /// The total price of the selection, in minor currency units.
    pub total_minor_units: i64,
}

/// API response for a seat toggle.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToggleSeatResponse {
    /// What the toggle did, or why it did nothing.
    pub outcome: ToggleOutcome,
    /// The new selection contents, when the toggle changed them.
    pub selection: Option<SelectionChanged>,
    /// A message describing what happened.
    pub message: String,
}
