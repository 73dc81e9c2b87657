// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Seat category assigned to a grid cell.
///
/// The category drives pricing (through the rate card) and rendering; it
/// says nothing about occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeatType {
    /// Regular seat.
    #[default]
    Standard,
    /// Premium seat.
    Vip,
    /// Double-width couple seat.
    Couple,
    /// Wheelchair-accessible seat.
    Disabled,
}

impl FromStr for SeatType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "vip" => Ok(Self::Vip),
            "couple" => Ok(Self::Couple),
            "disabled" => Ok(Self::Disabled),
            _ => Err(DomainError::InvalidSeatType(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SeatType {
    /// Converts this seat type to its wire tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Vip => "vip",
            Self::Couple => "couple",
            Self::Disabled => "disabled",
        }
    }

    /// Returns the next type in the editor's click cycle.
    ///
    /// The cycle order is Standard, Vip, Couple, Disabled, then back to
    /// Standard.
    #[must_use]
    pub const fn cycle_next(&self) -> Self {
        match self {
            Self::Standard => Self::Vip,
            Self::Vip => Self::Couple,
            Self::Couple => Self::Disabled,
            Self::Disabled => Self::Standard,
        }
    }
}

/// A single cell of a seating grid.
///
/// An inactive cell is an aisle or gap: it occupies a grid position but is
/// never sellable. The seat type is retained while a cell is inactive so
/// that reactivating it restores the previous category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCell {
    /// The seat category.
    seat_type: SeatType,
    /// Whether this cell holds a sellable seat.
    active: bool,
}

impl Default for SeatCell {
    fn default() -> Self {
        Self {
            seat_type: SeatType::Standard,
            active: true,
        }
    }
}

impl SeatCell {
    /// Creates a cell with the given category and activity flag.
    #[must_use]
    pub const fn new(seat_type: SeatType, active: bool) -> Self {
        Self { seat_type, active }
    }

    /// Creates an active standard cell, the state of every cell in a
    /// freshly created layout.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            seat_type: SeatType::Standard,
            active: true,
        }
    }

    /// Creates an inactive standard cell, the normalized form of a wire
    /// `null`.
    #[must_use]
    pub const fn gap() -> Self {
        Self {
            seat_type: SeatType::Standard,
            active: false,
        }
    }

    /// Returns the seat category.
    #[must_use]
    pub const fn seat_type(&self) -> SeatType {
        self.seat_type
    }

    /// Returns whether this cell holds a sellable seat.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns this cell with a different seat category.
    #[must_use]
    pub const fn with_seat_type(&self, seat_type: SeatType) -> Self {
        Self {
            seat_type,
            active: self.active,
        }
    }

    /// Returns this cell with the activity flag flipped.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        Self {
            seat_type: self.seat_type,
            active: !self.active,
        }
    }
}

/// Opaque identifier of a cinema room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId {
    /// The identifier value as issued by room management.
    value: String,
}

impl RoomId {
    /// Creates a new `RoomId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque identifier of a showtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowtimeId {
    /// The identifier value as issued by scheduling.
    value: String,
}

impl ShowtimeId {
    /// Creates a new `ShowtimeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque identifier of a seat instance within a showtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId {
    /// The identifier value as issued by inventory.
    value: String,
}

impl SeatId {
    /// Creates a new `SeatId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A monetary amount in minor currency units (e.g. cents).
///
/// All price arithmetic in this system is integer arithmetic; currency
/// rounding policy belongs to checkout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Amount {
    /// The value in minor units.
    minor_units: i64,
}

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self { minor_units: 0 };

    /// Creates an amount from minor currency units.
    #[must_use]
    pub const fn from_minor_units(minor_units: i64) -> Self {
        Self { minor_units }
    }

    /// Returns the value in minor units.
    #[must_use]
    pub const fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Adds two amounts, saturating at the numeric bounds.
    #[must_use]
    pub const fn saturating_add(&self, other: Self) -> Self {
        Self {
            minor_units: self.minor_units.saturating_add(other.minor_units),
        }
    }
}

/// A positive price factor stored in hundredths.
///
/// `150` hundredths is a factor of 1.50. Keeping the factor integral makes
/// every derived price exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceMultiplier {
    /// The factor in hundredths.
    hundredths: u32,
}

impl Default for PriceMultiplier {
    fn default() -> Self {
        Self { hundredths: 100 }
    }
}

impl PriceMultiplier {
    /// Creates a multiplier from hundredths of the base price.
    ///
    /// # Arguments
    ///
    /// * `hundredths` - The factor in hundredths (100 = unchanged price)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPriceMultiplier` if `hundredths` is zero.
    pub const fn new(hundredths: u32) -> Result<Self, DomainError> {
        if hundredths == 0 {
            return Err(DomainError::InvalidPriceMultiplier { hundredths });
        }
        Ok(Self { hundredths })
    }

    /// Returns the factor in hundredths.
    #[must_use]
    pub const fn hundredths(&self) -> u32 {
        self.hundredths
    }

    /// Applies this factor to a base amount.
    ///
    /// The product is computed in widened integer arithmetic and truncated
    /// toward zero; it saturates at the bounds of `Amount`.
    #[must_use]
    pub fn apply(&self, base: Amount) -> Amount {
        let widened: i128 = i128::from(base.minor_units()) * i128::from(self.hundredths);
        Amount::from_minor_units(saturate_to_i64(widened / 100))
    }
}

fn saturate_to_i64(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// The price factor assigned to each seat category.
///
/// Hosts expand a stored layout into seat instances by looking the cell's
/// category up here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    /// Factor for standard seats.
    standard: PriceMultiplier,
    /// Factor for VIP seats.
    vip: PriceMultiplier,
    /// Factor for couple seats.
    couple: PriceMultiplier,
    /// Factor for wheelchair-accessible seats.
    disabled: PriceMultiplier,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            standard: PriceMultiplier { hundredths: 100 },
            vip: PriceMultiplier { hundredths: 120 },
            couple: PriceMultiplier { hundredths: 150 },
            disabled: PriceMultiplier { hundredths: 100 },
        }
    }
}

impl RateCard {
    /// Creates a rate card with an explicit factor per category.
    #[must_use]
    pub const fn new(
        standard: PriceMultiplier,
        vip: PriceMultiplier,
        couple: PriceMultiplier,
        disabled: PriceMultiplier,
    ) -> Self {
        Self {
            standard,
            vip,
            couple,
            disabled,
        }
    }

    /// Returns the factor for a seat category.
    #[must_use]
    pub const fn multiplier_for(&self, seat_type: SeatType) -> PriceMultiplier {
        match seat_type {
            SeatType::Standard => self.standard,
            SeatType::Vip => self.vip,
            SeatType::Couple => self.couple,
            SeatType::Disabled => self.disabled,
        }
    }
}

/// A concrete, sellable seat of one showtime.
///
/// Instances are produced by inventory from a room's layout and already
/// reflect occupancy; this crate never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatInstance {
    /// The inventory identifier.
    id: SeatId,
    /// The display row name (e.g. "C").
    row_name: String,
    /// The 1-based seat number within the row.
    seat_number: u32,
    /// The display label (row name plus seat number, e.g. "C7").
    seat_label: String,
    /// The seat category.
    seat_type: SeatType,
    /// The price factor for this seat.
    price_multiplier: PriceMultiplier,
    /// Whether the seat is sellable at all.
    active: bool,
    /// Whether the seat is already taken for this showtime.
    is_booked: bool,
}

impl SeatInstance {
    /// Creates a seat instance.
    ///
    /// The display label is derived from `row_name` and `seat_number`, so
    /// the two can never disagree.
    #[must_use]
    pub fn new(
        id: SeatId,
        row_name: &str,
        seat_number: u32,
        seat_type: SeatType,
        price_multiplier: PriceMultiplier,
        active: bool,
        is_booked: bool,
    ) -> Self {
        Self {
            id,
            row_name: row_name.to_string(),
            seat_number,
            seat_label: format!("{row_name}{seat_number}"),
            seat_type,
            price_multiplier,
            active,
            is_booked,
        }
    }

    /// Returns the inventory identifier.
    #[must_use]
    pub const fn id(&self) -> &SeatId {
        &self.id
    }

    /// Returns the display row name.
    #[must_use]
    pub fn row_name(&self) -> &str {
        &self.row_name
    }

    /// Returns the 1-based seat number within the row.
    #[must_use]
    pub const fn seat_number(&self) -> u32 {
        self.seat_number
    }

    /// Returns the display label.
    #[must_use]
    pub fn seat_label(&self) -> &str {
        &self.seat_label
    }

    /// Returns the seat category.
    #[must_use]
    pub const fn seat_type(&self) -> SeatType {
        self.seat_type
    }

    /// Returns the price factor for this seat.
    #[must_use]
    pub const fn price_multiplier(&self) -> PriceMultiplier {
        self.price_multiplier
    }

    /// Returns whether the seat is sellable at all.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns whether the seat is already taken for this showtime.
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        self.is_booked
    }

    /// Returns the price of this seat against a showtime base price.
    #[must_use]
    pub fn price(&self, base: Amount) -> Amount {
        self.price_multiplier.apply(base)
    }

    /// Returns whether a patron may currently pick this seat.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        self.active && !self.is_booked
    }
}
