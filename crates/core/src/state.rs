// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use cine_seat_domain::SeatLayout;
use serde::{Deserialize, Serialize};

/// The grid editor's working state.
///
/// The editor is always idle between commands; there are no pending or
/// multi-step gestures. Every applied command yields a fresh state and the
/// previous one stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// The layout being edited.
    pub layout: SeatLayout,
}

impl EditorState {
    /// Creates an editor state around a layout.
    ///
    /// # Arguments
    ///
    /// * `layout` - The layout to edit, freshly created or loaded
    #[must_use]
    pub const fn new(layout: SeatLayout) -> Self {
        Self { layout }
    }
}

/// What an applied editor command did to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOutcome {
    /// The command changed the layout.
    Applied,
    /// The command targeted an inactive cell and was ignored.
    IgnoredInactive,
}

/// The result of a successful editor transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// touching the input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The editor state after the command.
    pub new_state: EditorState,
    /// What the command did.
    pub outcome: EditOutcome,
}
