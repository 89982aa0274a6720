// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved section geometry produced by the planner.

use kurbo::{Insets, Point, Size};
use smallvec::SmallVec;

use crate::config::ListStyle;

/// Which [`SectionLayoutKind`](crate::SectionLayoutKind) a plan was derived from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlanKind {
    /// A single row of slots.
    Horizontal,
    /// Stacked rows per page.
    Vertical,
    /// Native list rows.
    List,
    /// Fixed items per row, wrapping.
    Wall,
    /// One page, no sideways scrolling.
    Single,
}

/// Direction the slots of one group are laid out in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Side by side, left to right.
    Horizontal,
    /// Stacked, top to bottom.
    Vertical,
}

/// How successive groups of a section are placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupAdvance {
    /// Groups continue sideways; the section scrolls orthogonally.
    Orthogonal,
    /// Groups wrap into new rows down the section; no orthogonal scrolling.
    Wrap,
}

/// Orthogonal scrolling behavior of a section.
///
/// Sections that wrap their groups always report [`OrthogonalScrolling::None`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrthogonalScrolling {
    /// No sideways scrolling.
    None,
    /// Free scrolling.
    Continuous,
    /// Free scrolling that settles on the leading edge of a group.
    #[default]
    ContinuousGroupLeadingBoundary,
    /// Scrolls one container width at a time.
    Paging,
    /// Scrolls one group at a time.
    GroupPaging,
    /// Scrolls one group at a time, keeping the group centered.
    GroupPagingCentered,
}

/// One item slot inside a group.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slot {
    /// Origin relative to the group origin.
    pub origin: Point,
    /// Resolved size.
    pub size: Size,
    /// Whether the width is an estimate the host may refine.
    pub estimated: bool,
}

/// The repeating unit (page) of a section.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupPlan {
    /// Size of one group.
    pub size: Size,
    /// Whether the group width is an estimate (any slot is estimated).
    pub width_is_estimated: bool,
    /// Direction of the slots inside the group.
    pub slot_axis: Axis,
    /// Placement of successive groups.
    pub advance: GroupAdvance,
    /// Gap between neighbouring slots inside the group.
    pub inter_item_spacing: f64,
    /// Slots in item order.
    pub slots: SmallVec<[Slot; 4]>,
}

impl GroupPlan {
    /// Number of items one group holds, at least one.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len().max(1)
    }
}

/// Header or footer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Above the items.
    Header,
    /// Below the items.
    Footer,
}

/// Where a boundary item attaches to the section.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryAlignment {
    /// Top edge, leading side.
    TopLeading,
    /// Bottom edge, leading side.
    BottomLeading,
}

/// A full-width header or footer slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryItem {
    /// Header or footer.
    pub kind: BoundaryKind,
    /// Resolved height.
    pub height: f64,
    /// Whether the height is an estimate.
    pub estimated: bool,
    /// Attachment edge.
    pub alignment: BoundaryAlignment,
    /// Insets applied around the boundary content.
    pub insets: Insets,
}

/// Resolved layout of one section.
///
/// Plans are plain values: recompute them whenever the configuration, the
/// container size or the orientation changes, and compare successive plans to
/// decide whether the host needs to invalidate its layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Section index the plan was computed for.
    pub section: usize,
    /// Layout strategy.
    pub kind: PlanKind,
    /// Width of the section (the container width).
    pub width: f64,
    /// Repeating group, `None` for lists.
    pub group: Option<GroupPlan>,
    /// Gap between successive groups (or list rows).
    pub inter_group_spacing: f64,
    /// Insets around the item content.
    pub content_insets: Insets,
    /// Sideways scrolling behavior.
    pub orthogonal_scrolling: OrthogonalScrolling,
    /// Header slot, if the host reported a positive header height.
    pub header: Option<BoundaryItem>,
    /// Footer slot, if the host reported a positive footer height.
    pub footer: Option<BoundaryItem>,
    /// List style, for list sections.
    pub list_style: Option<ListStyle>,
}

impl LayoutPlan {
    /// Number of groups needed for `item_count` items.
    #[must_use]
    pub fn group_count(&self, item_count: usize) -> usize {
        match &self.group {
            Some(group) => item_count.div_ceil(group.capacity()),
            None => item_count,
        }
    }
}
