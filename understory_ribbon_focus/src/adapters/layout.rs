// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout adapter: stack arranged sections into one list.
//!
//! [`understory_ribbon::LayoutPlan::arrange`] produces frames in
//! section-local coordinates. [`StackedSections`] places those sections one
//! below the other, the way a vertical list shows them, and answers frame and
//! count queries in list content coordinates. An optional list header sits
//! above the first section and pushes every section down by its height.
//!
//! ## Example
//!
//! ```no_run
//! use kurbo::{Point, Size};
//! use understory_ribbon::{
//!     Dimension, LayoutEnvironment, SectionBoundaries, SectionConfiguration, plan,
//! };
//! use understory_ribbon_focus::adapters::layout::StackedSections;
//! use understory_ribbon_focus::{FocusCoordinator, FocusTransition, ItemCoord, ScrollBehavior};
//!
//! let env = LayoutEnvironment::new(Size::new(400.0, 800.0));
//! let config = SectionConfiguration::default();
//! let frames: Vec<_> = (0..3)
//!     .map(|section| {
//!         let boundaries = SectionBoundaries::header(Dimension::Absolute(30.0));
//!         plan(section, &config, &env, boundaries).arrange(6)
//!     })
//!     .collect();
//! let list = StackedSections::new(&frames, 20.0);
//!
//! let mut coordinator = FocusCoordinator::new();
//! coordinator.record_transition_completed(FocusTransition::entering(ItemCoord::new(1, 2)));
//! let offset =
//!     coordinator.target_scroll_offset(Point::ZERO, ScrollBehavior::SectionPaging, &list);
//! assert_eq!(offset.y, list.section_origin(1).unwrap().y);
//! ```

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};
use understory_ribbon::{Dimension, SectionFrames};

use crate::{FocusGeometry, ItemCoord, SectionCounts};

/// Height of the list header when the host does not supply one.
pub const DEFAULT_LIST_HEADER_HEIGHT: Dimension = Dimension::Estimated(44.0);

/// Arranged sections stacked vertically with a fixed spacing.
#[derive(Clone, Debug)]
pub struct StackedSections<'a> {
    sections: &'a [SectionFrames],
    origins: Vec<f64>,
    content_height: f64,
    content_inset: Insets,
    list_header: Option<Rect>,
}

impl<'a> StackedSections<'a> {
    /// Stacks `sections` from the top, `section_spacing` apart.
    ///
    /// Negative or non-finite spacing counts as zero.
    #[must_use]
    pub fn new(sections: &'a [SectionFrames], section_spacing: f64) -> Self {
        let spacing = if section_spacing.is_finite() {
            section_spacing.max(0.0)
        } else {
            0.0
        };
        let mut origins = Vec::with_capacity(sections.len());
        let mut y = 0.0;
        for (index, frames) in sections.iter().enumerate() {
            if index > 0 {
                y += spacing;
            }
            origins.push(y);
            y += frames.size.height;
        }
        Self {
            sections,
            origins,
            content_height: y,
            content_inset: Insets::ZERO,
            list_header: None,
        }
    }

    /// Places a full-width header of `height` above the first section.
    ///
    /// `height` resolves against `container`; a non-positive or non-finite
    /// height removes the header. Section spacing does not apply between the header and the
    /// first section.
    #[must_use]
    pub fn with_list_header(mut self, height: Dimension, container: Size) -> Self {
        let value = height.value();
        let header = (value.is_finite() && value > 0.0).then(|| {
            let width = Dimension::FractionalWidth(1.0).resolve(container);
            Rect::new(0.0, 0.0, width, height.resolve(container))
        });
        let old = self.list_header.map_or(0.0, |r| r.height());
        let shift = header.map_or(0.0, |r| r.height()) - old;
        for y in &mut self.origins {
            *y += shift;
        }
        self.content_height += shift;
        self.list_header = header;
        self
    }

    /// Frame of the list header, if there is one.
    #[must_use]
    pub fn list_header_frame(&self) -> Option<Rect> {
        self.list_header
    }

    /// Sets the inset of the list content inside its scroll container.
    #[must_use]
    pub fn with_content_inset(mut self, inset: Insets) -> Self {
        self.content_inset = inset;
        self
    }

    /// Top-left corner of `section` in list content coordinates.
    #[must_use]
    pub fn section_origin(&self, section: usize) -> Option<Point> {
        self.origins.get(section).map(|y| Point::new(0.0, *y))
    }

    /// Height of the list header and all sections together, spacing included.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    fn offset(&self, section: usize) -> Option<(&'a SectionFrames, Vec2)> {
        let frames = self.sections.get(section)?;
        let y = *self.origins.get(section)?;
        Some((frames, Vec2::new(0.0, y)))
    }
}

impl FocusGeometry for StackedSections<'_> {
    fn header_frame(&self, section: usize) -> Option<Rect> {
        let (frames, offset) = self.offset(section)?;
        frames.header.map(|header| header + offset)
    }

    fn item_frame(&self, coord: ItemCoord) -> Option<Rect> {
        let (frames, offset) = self.offset(coord.section)?;
        frames.items.get(coord.item).map(|item| *item + offset)
    }

    fn content_inset(&self) -> Insets {
        self.content_inset
    }
}

impl SectionCounts for StackedSections<'_> {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn item_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, SectionFrames::item_count)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Insets, Rect, Size};
    use understory_ribbon::{
        Dimension, LayoutEnvironment, SectionBoundaries, SectionConfiguration, SectionFrames,
        plan,
    };

    use super::{DEFAULT_LIST_HEADER_HEIGHT, StackedSections};
    use crate::{FocusGeometry, ItemCoord, SectionCounts};

    fn sections() -> Vec<SectionFrames> {
        let env = LayoutEnvironment::new(Size::new(400.0, 800.0));
        let config = SectionConfiguration::default();
        vec![
            plan(0, &config, &env, SectionBoundaries::header(Dimension::Absolute(30.0))).arrange(3),
            plan(1, &config, &env, SectionBoundaries::NONE).arrange(0),
            plan(2, &config, &env, SectionBoundaries::header(Dimension::Absolute(30.0))).arrange(5),
        ]
    }

    #[test]
    fn sections_stack_with_spacing() {
        let frames = sections();
        let list = StackedSections::new(&frames, 10.0);

        // Section 0: 30 header + 80 row; section 1 is empty.
        assert_eq!(list.section_origin(0).map(|p| p.y), Some(0.0));
        assert_eq!(list.section_origin(1).map(|p| p.y), Some(120.0));
        assert_eq!(list.section_origin(2).map(|p| p.y), Some(130.0));
        assert_eq!(list.content_height(), 240.0);

        assert_eq!(
            list.header_frame(2),
            Some(Rect::new(0.0, 130.0, 400.0, 160.0))
        );
        assert_eq!(
            list.item_frame(ItemCoord::new(2, 1)),
            Some(Rect::new(86.0, 160.0, 166.0, 240.0))
        );
        assert_eq!(list.header_frame(1), None);
        assert_eq!(list.item_frame(ItemCoord::new(0, 7)), None);
        assert_eq!(list.header_frame(5), None);
    }

    #[test]
    fn counts_and_inset_come_from_the_frames() {
        let frames = sections();
        let list = StackedSections::new(&frames, f64::NAN)
            .with_content_inset(Insets::new(0.0, 64.0, 0.0, 0.0));
        assert_eq!(list.section_count(), 3);
        assert_eq!(list.item_count(0), 3);
        assert_eq!(list.item_count(1), 0);
        assert_eq!(list.item_count(3), 0);
        assert_eq!(list.content_inset().y0, 64.0);
        assert_eq!(list.section_origin(1).map(|p| p.y), Some(110.0));
    }

    #[test]
    fn list_header_pushes_sections_down() {
        let frames = sections();
        let container = Size::new(400.0, 800.0);
        let list = StackedSections::new(&frames, 10.0)
            .with_list_header(DEFAULT_LIST_HEADER_HEIGHT, container);

        assert_eq!(
            list.list_header_frame(),
            Some(Rect::new(0.0, 0.0, 400.0, 44.0))
        );
        assert_eq!(list.section_origin(0).map(|p| p.y), Some(44.0));
        assert_eq!(list.section_origin(2).map(|p| p.y), Some(174.0));
        assert_eq!(list.content_height(), 284.0);
        assert_eq!(
            list.header_frame(2),
            Some(Rect::new(0.0, 174.0, 400.0, 204.0))
        );

        // Replacing the header shifts by the difference; zero removes it.
        let list = list.with_list_header(Dimension::FractionalHeight(0.1), container);
        assert_eq!(list.section_origin(0).map(|p| p.y), Some(80.0));
        let list = list.with_list_header(Dimension::ZERO, container);
        assert_eq!(list.list_header_frame(), None);
        assert_eq!(list.section_origin(2).map(|p| p.y), Some(130.0));
        assert_eq!(list.content_height(), 240.0);
    }
}
