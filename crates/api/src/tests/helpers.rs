// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::HashMap;

use cine_seat_domain::{PriceMultiplier, RoomId, SeatId, SeatInstance, SeatType, ShowtimeId};

use crate::{
    EditorSession, OpenEditorRequest, RoomDraft, RoomRecord, RoomStore, SeatView,
    SelectionApiResult, SelectionSession, SelectionViewResponse, ShowtimeInventory,
    StartSelectionRequest, StoreError, ToggleSeatRequest, ToggleSeatResponse, open_editor,
    start_selection, toggle_seat,
};

/// An in-memory room store backed by a map, with call counting.
pub struct InMemoryRoomStore {
    pub rooms: HashMap<String, RoomRecord>,
    pub next_id: usize,
    pub save_calls: usize,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
            next_id: 1,
            save_calls: 0,
        }
    }
}

impl Default for InMemoryRoomStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomStore for InMemoryRoomStore {
    fn load_room(&self, room_id: &RoomId) -> Result<RoomRecord, StoreError> {
        self.rooms
            .get(room_id.value())
            .cloned()
            .ok_or_else(|| StoreError::Rejected {
                detail: format!("No room stored under '{}'", room_id.value()),
            })
    }

    fn save_room(
        &mut self,
        room_id: Option<&RoomId>,
        draft: &RoomDraft,
    ) -> Result<RoomId, StoreError> {
        self.save_calls += 1;
        let id: RoomId = match room_id {
            Some(existing) => existing.clone(),
            None => {
                let assigned: RoomId = RoomId::new(&format!("room-{}", self.next_id));
                self.next_id += 1;
                assigned
            }
        };
        self.rooms.insert(
            id.value().to_string(),
            RoomRecord {
                room_id: id.clone(),
                name: draft.name.clone(),
                serialized_layout: draft.serialized_layout.clone(),
            },
        );
        Ok(id)
    }
}

/// A room store that is always unreachable.
pub struct FailingRoomStore;

impl RoomStore for FailingRoomStore {
    fn load_room(&self, _room_id: &RoomId) -> Result<RoomRecord, StoreError> {
        Err(StoreError::Unavailable {
            detail: String::from("store offline"),
        })
    }

    fn save_room(
        &mut self,
        _room_id: Option<&RoomId>,
        _draft: &RoomDraft,
    ) -> Result<RoomId, StoreError> {
        Err(StoreError::Unavailable {
            detail: String::from("store offline"),
        })
    }
}

/// An inventory that returns a fixed seat list for any showtime.
pub struct InMemoryInventory {
    pub seats: Vec<SeatInstance>,
}

impl ShowtimeInventory for InMemoryInventory {
    fn resolve_seats(&self, _showtime_id: &ShowtimeId) -> Result<Vec<SeatInstance>, StoreError> {
        Ok(self.seats.clone())
    }
}

/// An inventory that is always unreachable.
pub struct FailingInventory;

impl ShowtimeInventory for FailingInventory {
    fn resolve_seats(&self, _showtime_id: &ShowtimeId) -> Result<Vec<SeatInstance>, StoreError> {
        Err(StoreError::Unavailable {
            detail: String::from("inventory offline"),
        })
    }
}

pub fn create_test_seat(id: &str, row_name: &str, seat_number: u32) -> SeatInstance {
    SeatInstance::new(
        SeatId::new(id),
        row_name,
        seat_number,
        SeatType::Standard,
        PriceMultiplier::new(100).unwrap(),
        true,
        false,
    )
}

pub fn create_test_vip_seat(id: &str, row_name: &str, seat_number: u32) -> SeatInstance {
    SeatInstance::new(
        SeatId::new(id),
        row_name,
        seat_number,
        SeatType::Vip,
        PriceMultiplier::new(120).unwrap(),
        true,
        false,
    )
}

pub fn create_test_booked_seat(id: &str, row_name: &str, seat_number: u32) -> SeatInstance {
    SeatInstance::new(
        SeatId::new(id),
        row_name,
        seat_number,
        SeatType::Standard,
        PriceMultiplier::new(100).unwrap(),
        true,
        true,
    )
}

pub fn create_test_inactive_seat(id: &str, row_name: &str, seat_number: u32) -> SeatInstance {
    SeatInstance::new(
        SeatId::new(id),
        row_name,
        seat_number,
        SeatType::Standard,
        PriceMultiplier::new(100).unwrap(),
        false,
        false,
    )
}

/// A small mixed showtime: open, VIP, booked, and inactive seats across
/// two rows.
pub fn create_showtime_seats() -> Vec<SeatInstance> {
    vec![
        create_test_seat("s-a1", "A", 1),
        create_test_vip_seat("s-a2", "A", 2),
        create_test_booked_seat("s-b1", "B", 1),
        create_test_inactive_seat("s-b2", "B", 2),
        create_test_seat("s-b3", "B", 3),
    ]
}

pub fn create_start_request(max_seats: Option<usize>) -> StartSelectionRequest {
    StartSelectionRequest {
        showtime_id: String::from("show-42"),
        base_price_minor_units: 100_000,
        max_seats,
    }
}

pub fn create_test_editor() -> EditorSession {
    open_editor(OpenEditorRequest { rows: 3, cols: 4 })
        .unwrap()
        .session
}

pub fn create_test_selection_session() -> SelectionSession {
    let inventory: InMemoryInventory = InMemoryInventory {
        seats: create_showtime_seats(),
    };
    start_selection(&inventory, create_start_request(None))
        .unwrap()
        .session
}

pub fn toggle(
    session: &SelectionSession,
    seat_id: &str,
) -> SelectionApiResult<ToggleSeatResponse> {
    toggle_seat(
        session,
        ToggleSeatRequest {
            seat_id: String::from(seat_id),
        },
    )
    .unwrap()
}

pub fn find_seat<'a>(view: &'a SelectionViewResponse, seat_label: &str) -> &'a SeatView {
    view.rows
        .iter()
        .flat_map(|row| row.seats.iter())
        .find(|seat| seat.seat_label == seat_label)
        .unwrap()
}
