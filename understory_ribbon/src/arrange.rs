// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concrete item frames for a planned section.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::plan::{BoundaryItem, GroupAdvance, LayoutPlan};

/// Row height used for list sections before the host measures its rows.
pub const ESTIMATED_LIST_ROW_HEIGHT: f64 = 44.0;

/// Frames of one section in section-local coordinates.
///
/// The origin is the top-left corner of the section. Items of sections that
/// scroll orthogonally extend past `size.width`; `content_size` covers them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionFrames {
    /// Header frame, inside its insets.
    pub header: Option<Rect>,
    /// Item frames in item order.
    pub items: Vec<Rect>,
    /// Footer frame, inside its insets.
    pub footer: Option<Rect>,
    /// Size of the section along the list: full width, total height.
    pub size: Size,
    /// Extent of the item content, excluding section insets.
    pub content_size: Size,
}

impl SectionFrames {
    /// Number of items arranged.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl LayoutPlan {
    /// Places `item_count` items, header and footer.
    ///
    /// Items cycle through the group's slots; each new group starts
    /// `inter_group_spacing` past the previous one, sideways for ribbons and
    /// downwards for walls. List rows stack full width at
    /// [`ESTIMATED_LIST_ROW_HEIGHT`].
    #[must_use]
    pub fn arrange(&self, item_count: usize) -> SectionFrames {
        let mut y = 0.0;
        let header = self
            .header
            .as_ref()
            .map(|boundary| place_boundary(boundary, self.width, &mut y));

        let insets = self.content_insets;
        let content_origin = Point::new(insets.x0, y + insets.y0);
        let (items, content_size) = match &self.group {
            Some(group) => {
                let capacity = group.capacity();
                let step = match group.advance {
                    GroupAdvance::Orthogonal => {
                        Vec2::new(group.size.width + self.inter_group_spacing, 0.0)
                    }
                    GroupAdvance::Wrap => {
                        Vec2::new(0.0, group.size.height + self.inter_group_spacing)
                    }
                };
                let items = (0..item_count)
                    .map(|index| {
                        let slot = &group.slots[index % capacity];
                        let group_origin = content_origin + step * (index / capacity) as f64;
                        Rect::from_origin_size(group_origin + slot.origin.to_vec2(), slot.size)
                    })
                    .collect();

                let groups = self.group_count(item_count) as f64;
                let gaps = (groups - 1.0).max(0.0) * self.inter_group_spacing;
                let content_size = if item_count == 0 {
                    Size::ZERO
                } else {
                    match group.advance {
                        GroupAdvance::Orthogonal => {
                            Size::new(groups * group.size.width + gaps, group.size.height)
                        }
                        GroupAdvance::Wrap => {
                            Size::new(group.size.width, groups * group.size.height + gaps)
                        }
                    }
                };
                (items, content_size)
            }
            None => {
                let row_width = (self.width - insets.x0 - insets.x1).max(0.0);
                let stride = ESTIMATED_LIST_ROW_HEIGHT + self.inter_group_spacing;
                let items = (0..item_count)
                    .map(|index| {
                        Rect::from_origin_size(
                            content_origin + Vec2::new(0.0, index as f64 * stride),
                            Size::new(row_width, ESTIMATED_LIST_ROW_HEIGHT),
                        )
                    })
                    .collect();
                let content_height = if item_count == 0 {
                    0.0
                } else {
                    item_count as f64 * stride - self.inter_group_spacing
                };
                (items, Size::new(row_width, content_height))
            }
        };
        y += insets.y0 + content_size.height + insets.y1;

        let footer = self
            .footer
            .as_ref()
            .map(|boundary| place_boundary(boundary, self.width, &mut y));

        SectionFrames {
            header,
            items,
            footer,
            size: Size::new(self.width, y),
            content_size,
        }
    }
}

/// Places a boundary at `*y` and advances `*y` past it and its insets.
fn place_boundary(boundary: &BoundaryItem, width: f64, y: &mut f64) -> Rect {
    let insets = boundary.insets;
    let top = *y + insets.y0;
    let frame = Rect::new(
        insets.x0,
        top,
        (width - insets.x1).max(insets.x0),
        top + boundary.height,
    );
    *y = frame.y1 + insets.y1;
    frame
}
