// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-provided queries the coordinator consults.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect};

use crate::coord::ItemCoord;

/// How the list settles its vertical scroll offset after a focus move.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Keep the proposed offset.
    None,
    /// Ask [`FocusGeometry::manual_target_offset`].
    Manual,
    /// Align the top of the focused item.
    ItemPaging,
    /// Align the header of the focused section, or the item when there is no
    /// header.
    #[default]
    SectionPaging,
}

/// Frame lookups in list content coordinates.
///
/// Lookups return `None` when the host has no frame for the element, for
/// example because it has not been laid out yet; the coordinator then keeps
/// the proposed offset.
pub trait FocusGeometry {
    /// Frame of the header of `section`, if it has one.
    fn header_frame(&self, section: usize) -> Option<Rect>;

    /// Frame of the item at `coord`.
    fn item_frame(&self, coord: ItemCoord) -> Option<Rect>;

    /// Inset of the list content inside its scroll container.
    fn content_inset(&self) -> Insets {
        Insets::ZERO
    }

    /// Offset for [`ScrollBehavior::Manual`].
    fn manual_target_offset(&self, proposed: Point) -> Option<Point> {
        let _ = proposed;
        None
    }
}

/// Section and item counts of the list's data.
pub trait SectionCounts {
    /// Number of sections.
    fn section_count(&self) -> usize;

    /// Number of items in `section`; zero for sections that do not exist.
    fn item_count(&self, section: usize) -> usize;
}

impl SectionCounts for [usize] {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.get(section).copied().unwrap_or(0)
    }
}

impl<const N: usize> SectionCounts for [usize; N] {
    fn section_count(&self) -> usize {
        N
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }
}

impl SectionCounts for Vec<usize> {
    fn section_count(&self) -> usize {
        self.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.as_slice().item_count(section)
    }
}
