// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{SelectionPolicy, SelectionState};
use cine_seat_domain::{
    Amount, PriceMultiplier, SeatCell, SeatId, SeatInstance, SeatLayout, SeatType,
};

pub const TEST_BASE_PRICE: Amount = Amount::from_minor_units(100_000);

pub fn create_test_layout() -> SeatLayout {
    // 3x4 grid: VIP across row 0, a gap at (1, 1)
    let layout: SeatLayout = SeatLayout::new(3, 4).unwrap();
    let layout: SeatLayout = (0..4).fold(layout, |acc, col| {
        acc.with_cell(0, col, SeatCell::new(SeatType::Vip, true)).unwrap()
    });
    layout.with_cell(1, 1, SeatCell::gap()).unwrap()
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

pub fn create_test_couple_seat(id: &str, row_name: &str, seat_number: u32) -> SeatInstance {
    SeatInstance::new(
        SeatId::new(id),
        row_name,
        seat_number,
        SeatType::Couple,
        PriceMultiplier::new(150).unwrap(),
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

pub fn create_test_selection(seats: Vec<SeatInstance>) -> SelectionState {
    SelectionState::new(seats, TEST_BASE_PRICE, SelectionPolicy::default()).unwrap()
}
