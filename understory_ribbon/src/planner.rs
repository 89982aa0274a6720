// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section layout planning.

use kurbo::{Insets, Point, Size};
use smallvec::SmallVec;

use crate::config::{
    DEFAULT_ITEM_WIDTH, ItemsPerDeviceClass, MAX_ITEMS_PER_GROUP, SectionConfiguration,
    SectionLayoutKind,
};
use crate::dimension::Dimension;
use crate::environment::LayoutEnvironment;
use crate::error::{ConfigError, ConfigField};
use crate::log::debug;
use crate::plan::{
    Axis, BoundaryAlignment, BoundaryItem, BoundaryKind, GroupAdvance, GroupPlan, LayoutPlan,
    OrthogonalScrolling, PlanKind, Slot,
};
use crate::search::WidthSearch;

/// Header and footer heights the host resolved for a section.
///
/// A boundary is emitted only when its raw value is positive; `None`, zero and
/// negative values omit it entirely.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionBoundaries {
    /// Header height.
    pub header: Option<Dimension>,
    /// Footer height.
    pub footer: Option<Dimension>,
}

impl SectionBoundaries {
    /// No header and no footer.
    pub const NONE: Self = Self {
        header: None,
        footer: None,
    };

    /// Only a header.
    #[must_use]
    pub fn header(height: Dimension) -> Self {
        Self {
            header: Some(height),
            footer: None,
        }
    }

    /// Sets the footer.
    #[must_use]
    pub fn with_footer(mut self, height: Dimension) -> Self {
        self.footer = Some(height);
        self
    }

    /// Checks that both heights are finite and not negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        [self.header, self.footer]
            .into_iter()
            .flatten()
            .try_for_each(|height| height.validate(ConfigField::Boundary))
    }
}

/// Knobs that apply to every section a planner plans.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerOptions {
    /// Sideways scrolling for sections that scroll orthogonally.
    pub orthogonal_scrolling: OrthogonalScrolling,
    /// Width search used by single sections with an aspect ratio.
    pub width_search: WidthSearch,
}

/// Computes [`LayoutPlan`]s from section configurations.
///
/// A planner holds only its [`PlannerOptions`]; [`LayoutPlanner::plan`] is a
/// pure function of its arguments, so planning the same inputs twice yields
/// equal plans.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct LayoutPlanner {
    options: PlannerOptions,
}

impl LayoutPlanner {
    /// Creates a planner with the given options.
    #[must_use]
    pub fn new(options: PlannerOptions) -> Self {
        Self { options }
    }

    /// Returns the planner options.
    #[must_use]
    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Plans section `section`.
    ///
    /// - Horizontal: one slot per declared width, side by side with
    ///   `inter_item_spacing`; groups continue sideways.
    /// - Vertical: `rows` equal-height slots stacked with `inter_item_spacing`
    ///   filling the declared height; groups continue sideways.
    /// - List: no group; the host's list rows take over.
    /// - Wall: table count per row, `width = container / count`,
    ///   `height = width * aspect_ratio`; rows wrap down the section.
    /// - Single: like wall, but with an aspect ratio the count comes from the
    ///   [`WidthSearch`]; without one, items fill the container height. No
    ///   section insets or group spacing apply.
    #[must_use]
    pub fn plan(
        &self,
        section: usize,
        configuration: &SectionConfiguration,
        environment: &LayoutEnvironment,
        boundaries: SectionBoundaries,
    ) -> LayoutPlan {
        let container = environment.container_size;
        let item_spacing = clamp_length(configuration.inter_item_spacing);
        let group_spacing = clamp_length(configuration.inter_group_spacing);

        let (kind, group, list_style) = match &configuration.layout {
            SectionLayoutKind::Horizontal {
                height,
                item_widths,
            } => (
                PlanKind::Horizontal,
                Some(horizontal_group(*height, item_widths, item_spacing, container)),
                None,
            ),
            SectionLayoutKind::Vertical {
                rows,
                height,
                item_width,
            } => (
                PlanKind::Vertical,
                Some(vertical_group(
                    *rows,
                    *height,
                    *item_width,
                    item_spacing,
                    container,
                )),
                None,
            ),
            SectionLayoutKind::List(style) => (PlanKind::List, None, Some(*style)),
            SectionLayoutKind::Wall(items) => (
                PlanKind::Wall,
                Some(table_group(items, environment, None)),
                None,
            ),
            SectionLayoutKind::Single(items) => {
                let group = if items.aspect_ratio == 0.0 {
                    table_group(items, environment, Some(container.height))
                } else {
                    searched_group(
                        items.aspect_ratio,
                        item_spacing,
                        container.width,
                        &self.options.width_search,
                    )
                };
                (PlanKind::Single, Some(group), None)
            }
        };

        let (content_insets, inter_group_spacing) = if kind == PlanKind::Single {
            (Insets::ZERO, 0.0)
        } else {
            (clamp_insets(configuration.section_insets), group_spacing)
        };
        let orthogonal_scrolling = if configuration.layout.scrolls_orthogonally() {
            self.options.orthogonal_scrolling
        } else {
            OrthogonalScrolling::None
        };

        let header = boundary(
            BoundaryKind::Header,
            boundaries.header,
            configuration.header_insets,
            container,
        );
        let footer = boundary(
            BoundaryKind::Footer,
            boundaries.footer,
            configuration.footer_insets,
            container,
        );

        debug!(
            section,
            ?kind,
            has_header = header.is_some(),
            has_footer = footer.is_some(),
            "planned section"
        );

        LayoutPlan {
            section,
            kind,
            width: clamp_length(container.width),
            group,
            inter_group_spacing,
            content_insets,
            orthogonal_scrolling,
            header,
            footer,
            list_style,
        }
    }
}

/// Plans `section` with default [`PlannerOptions`].
#[must_use]
pub fn plan(
    section: usize,
    configuration: &SectionConfiguration,
    environment: &LayoutEnvironment,
    boundaries: SectionBoundaries,
) -> LayoutPlan {
    LayoutPlanner::default().plan(section, configuration, environment, boundaries)
}

fn horizontal_group(
    height: Dimension,
    item_widths: &[Dimension],
    spacing: f64,
    container: Size,
) -> GroupPlan {
    let default_width = [DEFAULT_ITEM_WIDTH];
    let item_widths = if item_widths.is_empty() {
        &default_width[..]
    } else {
        item_widths
    };

    let group_height = height.resolve(container);
    // Slot fractions of the height refer to the group, not the container.
    let slot_reference = Size::new(container.width, group_height);

    let mut slots = SmallVec::new();
    let mut x = 0.0;
    for (index, width) in item_widths.iter().enumerate() {
        if index > 0 {
            x += spacing;
        }
        let slot_width = width.resolve(slot_reference);
        slots.push(Slot {
            origin: Point::new(x, 0.0),
            size: Size::new(slot_width, group_height),
            estimated: width.is_estimated(),
        });
        x += slot_width;
    }

    GroupPlan {
        size: Size::new(x, group_height),
        width_is_estimated: item_widths.iter().any(|w| w.is_estimated()),
        slot_axis: Axis::Horizontal,
        advance: GroupAdvance::Orthogonal,
        inter_item_spacing: spacing,
        slots,
    }
}

fn vertical_group(
    rows: usize,
    height: Dimension,
    item_width: Dimension,
    spacing: f64,
    container: Size,
) -> GroupPlan {
    let rows = rows.clamp(1, MAX_ITEMS_PER_GROUP);
    let group_height = height.resolve(container);
    let width = item_width.resolve(container);
    let gaps = spacing * (rows - 1) as f64;
    let slot_height = clamp_length((group_height - gaps) / rows as f64);

    let slots = (0..rows)
        .map(|row| Slot {
            origin: Point::new(0.0, row as f64 * (slot_height + spacing)),
            size: Size::new(width, slot_height),
            estimated: item_width.is_estimated(),
        })
        .collect();

    GroupPlan {
        size: Size::new(width, group_height),
        width_is_estimated: item_width.is_estimated(),
        slot_axis: Axis::Vertical,
        advance: GroupAdvance::Orthogonal,
        inter_item_spacing: spacing,
        slots,
    }
}

/// A full-width row of table-counted items that tile the container exactly.
///
/// `fill_height` replaces the aspect-derived height when given.
fn table_group(
    items: &ItemsPerDeviceClass,
    environment: &LayoutEnvironment,
    fill_height: Option<f64>,
) -> GroupPlan {
    let container_width = clamp_length(environment.container_size.width);
    let count = items.item_count(environment);
    let width = container_width / count as f64;
    let height = match fill_height {
        Some(height) => clamp_length(height),
        None => clamp_length(width * items.aspect_ratio),
    };
    row_group(count, width, height, 0.0, container_width)
}

fn searched_group(
    aspect_ratio: f64,
    spacing: f64,
    container_width: f64,
    search: &WidthSearch,
) -> GroupPlan {
    let container_width = clamp_length(container_width);
    let result = search.run(container_width, spacing);
    debug!(
        width = result.width,
        count = result.count,
        steps = result.steps,
        "width search settled"
    );
    let height = clamp_length(result.width * aspect_ratio);
    row_group(result.count, result.width, height, spacing, container_width)
}

fn row_group(count: usize, width: f64, height: f64, spacing: f64, row_width: f64) -> GroupPlan {
    let slots = (0..count.min(MAX_ITEMS_PER_GROUP))
        .map(|index| Slot {
            origin: Point::new(index as f64 * (width + spacing), 0.0),
            size: Size::new(width, height),
            estimated: false,
        })
        .collect();
    GroupPlan {
        size: Size::new(row_width, height),
        width_is_estimated: false,
        slot_axis: Axis::Horizontal,
        advance: GroupAdvance::Wrap,
        inter_item_spacing: spacing,
        slots,
    }
}

fn boundary(
    kind: BoundaryKind,
    height: Option<Dimension>,
    insets: Insets,
    container: Size,
) -> Option<BoundaryItem> {
    let height = height.filter(|h| h.value() > 0.0)?;
    Some(BoundaryItem {
        kind,
        height: height.resolve(container),
        estimated: height.is_estimated(),
        alignment: match kind {
            BoundaryKind::Header => BoundaryAlignment::TopLeading,
            BoundaryKind::Footer => BoundaryAlignment::BottomLeading,
        },
        insets: clamp_insets(insets),
    })
}

fn clamp_length(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn clamp_insets(insets: Insets) -> Insets {
    Insets::new(
        clamp_length(insets.x0),
        clamp_length(insets.y0),
        clamp_length(insets.x1),
        clamp_length(insets.y1),
    )
}
