// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator seams for room storage and showtime inventory.
//!
//! The API layer never talks to a concrete database or remote service.
//! Callers supply implementations of these traits; tests supply in-memory
//! fakes. Layouts cross the seam in their serialized wire form so that a
//! store never needs to understand the grid model.

use cine_seat_domain::{RoomId, SeatInstance, ShowtimeId};
use thiserror::Error;

/// Errors surfaced by a room store or showtime inventory.
///
/// Collaborators distinguish "I could not be reached" from "I refused the
/// request". The API layer maps both onto operation-specific [`crate::ApiError`]
/// variants, so workflow callers never see this type directly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The collaborator could not be reached or failed internally.
    #[error("Collaborator unavailable: {detail}")]
    Unavailable { detail: String },

    /// The collaborator understood the request and refused it.
    #[error("Collaborator rejected the request: {detail}")]
    Rejected { detail: String },
}

/// A stored room: identifier, display name, and the serialized layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRecord {
    /// Identifier the room is stored under.
    pub room_id: RoomId,
    /// Display name of the room.
    pub name: String,
    /// Layout in wire form, as produced by the layout codec.
    pub serialized_layout: String,
}

/// A room about to be saved. Carries no identifier; the store assigns or
/// keeps one depending on whether the save is a create or an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDraft {
    /// Display name of the room.
    pub name: String,
    /// Layout in wire form, as produced by the layout codec.
    pub serialized_layout: String,
}

/// Storage for room layouts.
pub trait RoomStore {
    /// Loads the room stored under `room_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Rejected`] when no room is stored under the
    /// identifier, and [`StoreError::Unavailable`] when the store cannot
    /// be reached.
    fn load_room(&self, room_id: &RoomId) -> Result<RoomRecord, StoreError>;

    /// Persists `draft`, creating a new room when `room_id` is `None` and
    /// updating the existing room otherwise. Returns the identifier the
    /// room is now stored under.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the room cannot be persisted.
    fn save_room(
        &mut self,
        room_id: Option<&RoomId>,
        draft: &RoomDraft,
    ) -> Result<RoomId, StoreError>;
}

/// Inventory resolution for a scheduled showtime.
///
/// A showtime binds a room layout to a screening, which is where per-seat
/// identity, pricing, and occupancy become concrete. The API layer treats
/// the resolved seats as the complete ground truth for a selection session.
pub trait ShowtimeInventory {
    /// Resolves every seat of the showtime, including booked and inactive
    /// ones.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the inventory cannot be resolved.
    fn resolve_seats(&self, showtime_id: &ShowtimeId) -> Result<Vec<SeatInstance>, StoreError>;
}
