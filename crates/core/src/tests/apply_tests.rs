// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_layout;
use crate::{Command, CoreError, EditOutcome, EditorState, TransitionResult, apply, save_payload};
use cine_seat_domain::{
    DomainError, RowView, SeatCell, SeatLayout, SeatType, deserialize_layout, row_views,
};

#[test]
fn test_set_cell_type_changes_an_active_cell() {
    let state: EditorState = EditorState::new(create_test_layout());
    let command: Command = Command::SetCellType {
        row: 1,
        col: 0,
        seat_type: SeatType::Couple,
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command);

    assert!(result.is_ok());
    let transition: TransitionResult = result.unwrap();
    assert_eq!(transition.outcome, EditOutcome::Applied);
    assert_eq!(
        transition.new_state.layout.cell(1, 0).unwrap().seat_type(),
        SeatType::Couple
    );
}

#[test]
fn test_apply_returns_a_new_state_and_keeps_the_input() {
    let state: EditorState = EditorState::new(create_test_layout());
    let command: Command = Command::SetCellType {
        row: 1,
        col: 0,
        seat_type: SeatType::Couple,
    };

    let transition: TransitionResult = apply(&state, command).unwrap();

    // The input state still shows the original category
    assert_eq!(
        state.layout.cell(1, 0).unwrap().seat_type(),
        SeatType::Standard
    );
    assert_ne!(transition.new_state, state);
}

#[test]
fn test_set_cell_type_on_inactive_cell_is_ignored() {
    let state: EditorState = EditorState::new(create_test_layout());
    let command: Command = Command::SetCellType {
        row: 1,
        col: 1,
        seat_type: SeatType::Vip,
    };

    let transition: TransitionResult = apply(&state, command).unwrap();

    assert_eq!(transition.outcome, EditOutcome::IgnoredInactive);
    assert_eq!(transition.new_state.layout, state.layout);
    // The gap kept its stored category
    assert_eq!(
        transition.new_state.layout.cell(1, 1).unwrap().seat_type(),
        SeatType::Standard
    );
}

#[test]
fn test_set_cell_type_out_of_bounds_returns_error() {
    let state: EditorState = EditorState::new(create_test_layout());
    let command: Command = Command::SetCellType {
        row: 9,
        col: 0,
        seat_type: SeatType::Vip,
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::CellOutOfBounds {
            row: 9,
            ..
        }))
    ));
}

#[test]
fn test_cycle_cell_type_advances_the_category() {
    let state: EditorState = EditorState::new(create_test_layout());

    // Row 0 is VIP; one click moves it to Couple
    let transition: TransitionResult =
        apply(&state, Command::CycleCellType { row: 0, col: 2 }).unwrap();

    assert_eq!(transition.outcome, EditOutcome::Applied);
    assert_eq!(
        transition.new_state.layout.cell(0, 2).unwrap().seat_type(),
        SeatType::Couple
    );
}

#[test]
fn test_cycle_cell_type_on_inactive_cell_is_ignored() {
    let state: EditorState = EditorState::new(create_test_layout());

    let transition: TransitionResult =
        apply(&state, Command::CycleCellType { row: 1, col: 1 }).unwrap();

    assert_eq!(transition.outcome, EditOutcome::IgnoredInactive);
    assert_eq!(transition.new_state.layout, state.layout);
}

#[test]
fn test_toggle_active_carves_a_gap() {
    let state: EditorState = EditorState::new(create_test_layout());

    let transition: TransitionResult =
        apply(&state, Command::ToggleActive { row: 0, col: 0 }).unwrap();

    assert_eq!(transition.outcome, EditOutcome::Applied);
    let cell: SeatCell = transition.new_state.layout.cell(0, 0).unwrap();
    assert!(!cell.is_active());
    assert_eq!(cell.seat_type(), SeatType::Vip); // category survives the gap
}

#[test]
fn test_toggle_active_twice_restores_the_cell() {
    let state: EditorState = EditorState::new(create_test_layout());

    let off: TransitionResult = apply(&state, Command::ToggleActive { row: 0, col: 0 }).unwrap();
    let on: TransitionResult =
        apply(&off.new_state, Command::ToggleActive { row: 0, col: 0 }).unwrap();

    assert_eq!(on.new_state.layout, state.layout);
}

#[test]
fn test_change_dimensions_preserves_the_overlap() {
    let state: EditorState = EditorState::new(create_test_layout());

    let transition: TransitionResult =
        apply(&state, Command::ChangeDimensions { rows: 2, cols: 2 }).unwrap();

    let layout: &SeatLayout = &transition.new_state.layout;
    assert_eq!(layout.rows(), 2);
    assert_eq!(layout.cols(), 2);
    assert_eq!(layout.cell(0, 0).unwrap().seat_type(), SeatType::Vip);
    assert!(!layout.cell(1, 1).unwrap().is_active());
}

#[test]
fn test_change_dimensions_rejects_a_zero_axis() {
    let state: EditorState = EditorState::new(create_test_layout());

    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::ChangeDimensions { rows: 0, cols: 4 });

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidDimensions { rows: 0, cols: 4 }
        ))
    ));
}

#[test]
fn test_labels_derived_from_the_new_state_renumber() {
    let state: EditorState = EditorState::new(create_test_layout());

    // Carve a gap at the start of row 2 and re-derive the view
    let transition: TransitionResult =
        apply(&state, Command::ToggleActive { row: 2, col: 0 }).unwrap();
    let views: Vec<RowView> = row_views(&transition.new_state.layout);

    assert_eq!(views[2].label, "C");
    assert_eq!(views[2].cells[0].seat_number, None);
    assert_eq!(views[2].cells[1].seat_number, Some(1));
}

#[test]
fn test_save_payload_round_trips_the_layout() {
    let state: EditorState = EditorState::new(create_test_layout());

    let payload: String = save_payload(&state).unwrap();
    let restored: SeatLayout = deserialize_layout(&payload).unwrap();

    assert_eq!(restored, state.layout);
}
