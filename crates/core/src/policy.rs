// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seat selection policy.
//!
//! This module holds the per-session knobs for picking seats. There is no
//! global configuration; hosts pass a policy into each selection session.

use serde::{Deserialize, Serialize};

/// Seat selection configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Maximum number of seats one order may hold.
    pub max_seats: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self { max_seats: 8 }
    }
}
