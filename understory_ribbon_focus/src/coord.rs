// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Position of one item: its section and its index within that section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemCoord {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl ItemCoord {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for ItemCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.item)
    }
}

/// A proposed or completed move of focus.
///
/// `previous == None` means focus enters the list from outside; `next == None`
/// means it leaves the list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusTransition {
    /// Item losing focus.
    pub previous: Option<ItemCoord>,
    /// Item gaining focus.
    pub next: Option<ItemCoord>,
}

impl FocusTransition {
    /// Creates a transition.
    #[must_use]
    pub const fn new(previous: Option<ItemCoord>, next: Option<ItemCoord>) -> Self {
        Self { previous, next }
    }

    /// Focus moving from one item to another.
    #[must_use]
    pub const fn between(previous: ItemCoord, next: ItemCoord) -> Self {
        Self::new(Some(previous), Some(next))
    }

    /// Focus entering the list at `next`.
    #[must_use]
    pub const fn entering(next: ItemCoord) -> Self {
        Self::new(None, Some(next))
    }

    /// Focus leaving the list from `previous`.
    #[must_use]
    pub const fn leaving(previous: ItemCoord) -> Self {
        Self::new(Some(previous), None)
    }
}
