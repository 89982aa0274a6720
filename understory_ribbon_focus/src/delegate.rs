// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::coord::{FocusTransition, ItemCoord};

/// Host hooks that refine the coordinator's focus decisions.
///
/// Every method has a neutral default, and `()` implements the trait with
/// those defaults for hosts that have no opinion.
pub trait FocusDelegate {
    /// Overrides the skip guard for `transition`.
    ///
    /// `Some(answer)` is returned to the focus engine as is, with no redirect;
    /// `None` lets the coordinator decide.
    fn should_update_focus(&self, transition: &FocusTransition) -> Option<bool> {
        let _ = transition;
        None
    }

    /// Whether the item at `coord` may take focus.
    fn can_focus_item(&self, coord: ItemCoord) -> bool {
        let _ = coord;
        true
    }

    /// Item that should receive focus when the list gains it.
    fn preferred_focus(&self) -> Option<ItemCoord> {
        None
    }
}

impl FocusDelegate for () {}
