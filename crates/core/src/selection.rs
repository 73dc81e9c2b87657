// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat selection for one patron and one showtime.
//!
//! A selection session owns the showtime's seat instances as delivered by
//! inventory and an ordered list of the patron's chosen seats. Seats are
//! value objects here; nothing in this module changes a seat's booking or
//! activity flags.
//!
//! ## Invariants
//!
//! - Every selected identifier refers to a seat of this session
//! - A seat is selected at most once
//! - The selection never exceeds the policy's seat cap
//! - Refused toggles return the reason and leave the state untouched

use crate::error::CoreError;
use crate::policy::SelectionPolicy;
use cine_seat_domain::{Amount, DomainError, SeatId, SeatInstance, SeatType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A patron's in-progress seat selection for one showtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// The showtime's seats, exactly as inventory delivered them.
    seats: Vec<SeatInstance>,
    /// Chosen seat identifiers, in the order they were picked.
    selected: Vec<SeatId>,
    /// The showtime's base price.
    base_price: Amount,
    /// The selection rules for this session.
    policy: SelectionPolicy,
}

impl SelectionState {
    /// Creates a selection session over a showtime's seats.
    ///
    /// # Arguments
    ///
    /// * `seats` - The showtime's seat instances, occupancy included
    /// * `base_price` - The showtime's base price
    /// * `policy` - The selection rules for this session
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateSeatId` if two seats share an
    /// identifier.
    pub fn new(
        seats: Vec<SeatInstance>,
        base_price: Amount,
        policy: SelectionPolicy,
    ) -> Result<Self, CoreError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(seats.len());
        for seat in &seats {
            if !seen.insert(seat.id().value()) {
                return Err(CoreError::DuplicateSeatId {
                    seat_id: seat.id().value().to_string(),
                });
            }
        }
        Ok(Self {
            seats,
            selected: Vec::new(),
            base_price,
            policy,
        })
    }

    /// Returns the showtime's seats in inventory order.
    #[must_use]
    pub fn seats(&self) -> &[SeatInstance] {
        &self.seats
    }

    /// Returns the seat with the given identifier, if it exists.
    #[must_use]
    pub fn seat(&self, seat_id: &SeatId) -> Option<&SeatInstance> {
        self.seats.iter().find(|seat| seat.id() == seat_id)
    }

    /// Returns the showtime's base price.
    #[must_use]
    pub const fn base_price(&self) -> Amount {
        self.base_price
    }

    /// Returns the selection rules for this session.
    #[must_use]
    pub const fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Returns whether a seat is currently selected.
    #[must_use]
    pub fn is_selected(&self, seat_id: &SeatId) -> bool {
        self.selected.contains(seat_id)
    }

    /// Returns the number of currently selected seats.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns the selected seats in the order they were picked.
    #[must_use]
    pub fn selected_seats(&self) -> Vec<&SeatInstance> {
        self.selected
            .iter()
            .filter_map(|seat_id| self.seat(seat_id))
            .collect()
    }

    /// Returns the total price of the current selection.
    ///
    /// The total is the sum of each selected seat's base price scaled by
    /// its own multiplier; it is recomputed from scratch on every call.
    #[must_use]
    pub fn total_amount(&self) -> Amount {
        self.selected_seats()
            .iter()
            .map(|seat| seat.price(self.base_price))
            .fold(Amount::ZERO, |total, price| total.saturating_add(price))
    }

    fn with_seat_added(&self, seat_id: SeatId) -> Self {
        let mut next: Self = self.clone();
        next.selected.push(seat_id);
        next
    }

    fn with_seat_removed(&self, seat_id: &SeatId) -> Self {
        let mut next: Self = self.clone();
        next.selected.retain(|selected_id| selected_id != seat_id);
        next
    }
}

/// Why a seat refused to be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedReason {
    /// The seat is already taken for this showtime.
    AlreadyBooked,
    /// The seat is an inactive cell and cannot be sold.
    InactiveSeat,
}

/// What a toggle request did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// The seat was added to the selection.
    Selected,
    /// The seat was removed from the selection.
    Deselected,
    /// The seat refused the request; the selection is unchanged.
    Blocked(BlockedReason),
    /// Adding the seat would exceed the session's cap; the selection is
    /// unchanged.
    CapacityExceeded {
        /// The cap that would have been exceeded.
        max_seats: usize,
    },
}

/// The result of a toggle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTransition {
    /// The selection state after the request.
    pub new_state: SelectionState,
    /// What the request did.
    pub outcome: ToggleOutcome,
}

/// Toggles a seat in or out of the selection.
///
/// A selected seat is always removable; an unselected seat joins the
/// selection if the seat allows it and the cap has room. Refusals are
/// ordinary outcomes, not errors: the unknown-identifier case is the only
/// failure.
///
/// # Arguments
///
/// * `state` - The current selection state (immutable)
/// * `seat_id` - The seat the patron tapped
///
/// # Returns
///
/// * `Ok(SelectionTransition)` with the new state and what happened
/// * `Err(CoreError)` if no seat with this identifier exists
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` with `DomainError::SeatNotFound`
/// for an identifier that is not part of this showtime.
pub fn toggle_seat(
    state: &SelectionState,
    seat_id: &SeatId,
) -> Result<SelectionTransition, CoreError> {
    let seat: &SeatInstance = state.seat(seat_id).ok_or_else(|| {
        CoreError::DomainViolation(DomainError::SeatNotFound {
            seat_id: seat_id.value().to_string(),
        })
    })?;

    // Rule: a booked seat reports AlreadyBooked even if it is also inactive
    if seat.is_booked() {
        return Ok(SelectionTransition {
            new_state: state.clone(),
            outcome: ToggleOutcome::Blocked(BlockedReason::AlreadyBooked),
        });
    }
    if !seat.is_active() {
        return Ok(SelectionTransition {
            new_state: state.clone(),
            outcome: ToggleOutcome::Blocked(BlockedReason::InactiveSeat),
        });
    }

    // Rule: deselection is always allowed and frees a slot under the cap
    if state.is_selected(seat_id) {
        return Ok(SelectionTransition {
            new_state: state.with_seat_removed(seat_id),
            outcome: ToggleOutcome::Deselected,
        });
    }

    // Rule: the cap applies to adding only
    if state.selected_count() >= state.policy().max_seats {
        return Ok(SelectionTransition {
            new_state: state.clone(),
            outcome: ToggleOutcome::CapacityExceeded {
                max_seats: state.policy().max_seats,
            },
        });
    }

    Ok(SelectionTransition {
        new_state: state.with_seat_added(seat_id.clone()),
        outcome: ToggleOutcome::Selected,
    })
}

/// One display row of the seat-picking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRowGroup {
    /// The row name shared by these seats.
    pub row_name: String,
    /// The row's seats in ascending seat number order.
    pub seats: Vec<SeatInstance>,
}

/// Groups a showtime's seats into display rows.
///
/// # Arguments
///
/// * `seats` - The seats to group, in any order
///
/// # Returns
///
/// One group per distinct row name, in ascending lexicographic order of
/// the name; within each group, seats are in ascending seat number order.
#[must_use]
pub fn grouped_rows(seats: &[SeatInstance]) -> Vec<SeatRowGroup> {
    let mut rows: BTreeMap<String, Vec<SeatInstance>> = BTreeMap::new();
    for seat in seats {
        rows.entry(seat.row_name().to_string())
            .or_default()
            .push(seat.clone());
    }
    rows.into_iter()
        .map(|(row_name, mut row_seats)| {
            row_seats.sort_by_key(SeatInstance::seat_number);
            SeatRowGroup {
                row_name,
                seats: row_seats,
            }
        })
        .collect()
}

/// How a seat should be presented to the patron.
///
/// Exactly one appearance applies to a seat at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatAppearance {
    /// Taken for this showtime.
    Booked,
    /// An inactive cell; not sellable.
    Inactive,
    /// Part of the patron's current selection.
    Selected,
    /// An open VIP seat.
    Vip,
    /// An open couple seat.
    Couple,
    /// An open wheelchair-accessible seat.
    Disabled,
    /// An open standard seat.
    Standard,
}

/// Classifies how a seat should be presented.
///
/// The first matching rule wins: booked beats inactive, inactive beats
/// selected, selected beats the category appearances.
#[must_use]
pub const fn seat_appearance(seat: &SeatInstance, is_selected: bool) -> SeatAppearance {
    if seat.is_booked() {
        return SeatAppearance::Booked;
    }
    if !seat.is_active() {
        return SeatAppearance::Inactive;
    }
    if is_selected {
        return SeatAppearance::Selected;
    }
    match seat.seat_type() {
        SeatType::Vip => SeatAppearance::Vip,
        SeatType::Couple => SeatAppearance::Couple,
        SeatType::Disabled => SeatAppearance::Disabled,
        SeatType::Standard => SeatAppearance::Standard,
    }
}
