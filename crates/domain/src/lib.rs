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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod codec;
mod error;
mod labels;
mod layout;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use codec::{LAYOUT_FORMAT_VERSION, deserialize_layout, serialize_layout};
pub use labels::{NumberedCell, RowView, number_cells, row_label, row_views, seat_label};
pub use layout::SeatLayout;

// Re-export public types
pub use error::{DomainError, FormatError};
pub use types::{
    Amount, PriceMultiplier, RateCard, RoomId, SeatCell, SeatId, SeatInstance, SeatType,
    ShowtimeId,
};
pub use validation::{
    MAX_DIMENSION, MAX_ROOM_NAME_CHARS, MIN_DIMENSION, validate_dimensions, validate_room_name,
};
