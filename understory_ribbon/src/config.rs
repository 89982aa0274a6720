// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative per-section configuration.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::Insets;

use crate::dimension::Dimension;
use crate::environment::{DeviceClass, LayoutEnvironment, Orientation};
use crate::error::{ConfigError, ConfigField};

/// Width used for a horizontal layout declared without any item widths.
pub const DEFAULT_ITEM_WIDTH: Dimension = Dimension::Estimated(80.0);

/// Largest number of slots one group holds.
///
/// Validation rejects larger row counts and items-per-page entries; the
/// planner clamps to it.
pub const MAX_ITEMS_PER_GROUP: usize = 256;

/// How a section arranges its items.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SectionLayoutKind {
    /// One row of items side by side, each slot with its own width.
    ///
    /// The widths form a repeating pattern: item `i` uses
    /// `item_widths[i % item_widths.len()]`.
    Horizontal {
        /// Height of the row.
        height: Dimension,
        /// Widths of the slots in one group, in order.
        item_widths: Vec<Dimension>,
    },
    /// Items stacked into `rows` rows per page before advancing sideways.
    Vertical {
        /// Number of stacked rows per page.
        rows: usize,
        /// Height of one page.
        height: Dimension,
        /// Width of every item.
        item_width: Dimension,
    },
    /// Full-width rows handled by the host's native list construct.
    List(ListStyle),
    /// A fixed number of items per row, rows wrapping down the section.
    Wall(ItemsPerDeviceClass),
    /// Like [`SectionLayoutKind::Wall`], sized to fill exactly one page.
    Single(ItemsPerDeviceClass),
}

impl SectionLayoutKind {
    /// A single row of items with the given widths.
    ///
    /// An empty `item_widths` is replaced by one [`DEFAULT_ITEM_WIDTH`] slot.
    #[must_use]
    pub fn horizontal(height: Dimension, item_widths: Vec<Dimension>) -> Self {
        let item_widths = if item_widths.is_empty() {
            vec![DEFAULT_ITEM_WIDTH]
        } else {
            item_widths
        };
        Self::Horizontal {
            height,
            item_widths,
        }
    }

    /// A single row of uniformly sized items.
    #[must_use]
    pub fn horizontal_uniform(height: Dimension, item_width: Dimension) -> Self {
        Self::horizontal(height, vec![item_width])
    }

    /// Items stacked into `rows` rows per page.
    #[must_use]
    pub fn vertical(rows: usize, height: Dimension, item_width: Dimension) -> Self {
        Self::Vertical {
            rows,
            height,
            item_width,
        }
    }

    /// Plain list rows with the given style.
    #[must_use]
    pub fn list(style: ListStyle) -> Self {
        Self::List(style)
    }

    /// A wall of items, count taken from the device table.
    #[must_use]
    pub fn wall(items: ItemsPerDeviceClass) -> Self {
        Self::Wall(items)
    }

    /// A single page of items that does not scroll sideways.
    #[must_use]
    pub fn single(items: ItemsPerDeviceClass) -> Self {
        Self::Single(items)
    }

    /// Whether the section scrolls along the orthogonal (horizontal) axis.
    #[must_use]
    pub fn scrolls_orthogonally(&self) -> bool {
        matches!(self, Self::Horizontal { .. } | Self::Vertical { .. })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::Horizontal {
                height,
                item_widths,
            } => {
                height.validate(ConfigField::Height)?;
                item_widths
                    .iter()
                    .try_for_each(|w| w.validate(ConfigField::ItemWidth))
            }
            Self::Vertical {
                rows,
                height,
                item_width,
            } => {
                if *rows == 0 {
                    return Err(ConfigError::ZeroRows);
                }
                check_item_limit(*rows)?;
                height.validate(ConfigField::Height)?;
                item_width.validate(ConfigField::ItemWidth)
            }
            Self::List(_) => Ok(()),
            Self::Wall(items) | Self::Single(items) => items.validate(),
        }
    }
}

impl Default for SectionLayoutKind {
    fn default() -> Self {
        Self::horizontal_uniform(Dimension::Absolute(80.0), Dimension::Absolute(80.0))
    }
}

/// Visual appearance of a list section.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListAppearance {
    /// Edge-to-edge rows.
    #[default]
    Plain,
    /// Rows grouped in a block.
    Grouped,
    /// Grouped rows inset from the container edges.
    InsetGrouped,
    /// Sidebar rows.
    Sidebar,
    /// Sidebar rows without grouping.
    SidebarPlain,
}

/// Style of a [`SectionLayoutKind::List`] section.
///
/// The swipe-action flags only tell the host whether to install its own
/// action providers; the planner does not interpret them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListStyle {
    /// Row appearance.
    pub appearance: ListAppearance,
    /// Whether separators are drawn between rows.
    pub shows_separators: bool,
    /// Whether rows offer leading swipe actions.
    pub leading_swipe_actions: bool,
    /// Whether rows offer trailing swipe actions.
    pub trailing_swipe_actions: bool,
}

impl ListStyle {
    /// A style with the given appearance, separators on and no swipe actions.
    #[must_use]
    pub fn new(appearance: ListAppearance) -> Self {
        Self {
            appearance,
            shows_separators: true,
            leading_swipe_actions: false,
            trailing_swipe_actions: false,
        }
    }
}

impl Default for ListStyle {
    fn default() -> Self {
        Self::new(ListAppearance::Plain)
    }
}

/// Items per page for one device class, by orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OrientationItems {
    /// Items per page in portrait.
    pub portrait: usize,
    /// Items per page in landscape.
    pub landscape: usize,
}

impl OrientationItems {
    /// Creates a portrait/landscape pair.
    #[must_use]
    pub const fn new(portrait: usize, landscape: usize) -> Self {
        Self {
            portrait,
            landscape,
        }
    }

    /// Count for the given orientation.
    #[must_use]
    pub fn for_orientation(self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Portrait => self.portrait,
            Orientation::Landscape => self.landscape,
        }
    }
}

/// Items-per-page table for wall and single sections.
///
/// With `aspect_ratio == 0` the table is authoritative everywhere. A non-zero
/// ratio sizes item heights as `width * aspect_ratio`, and for single sections
/// switches the item count from the table to a width search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemsPerDeviceClass {
    /// Phone counts; defaults to 1 portrait / 2 landscape.
    pub phone: OrientationItems,
    /// Tablet counts; defaults to 2 portrait / 4 landscape.
    pub tablet: OrientationItems,
    /// TV count; TVs do not rotate. Defaults to 4.
    pub tv: usize,
    /// Item height as a multiple of item width.
    pub aspect_ratio: f64,
    /// Device class to use instead of the environment's.
    pub device_class_override: Option<DeviceClass>,
}

impl ItemsPerDeviceClass {
    /// Default table with the given aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(aspect_ratio: f64) -> Self {
        Self {
            aspect_ratio,
            ..Self::default()
        }
    }

    /// Items per page for `environment`, clamped to
    /// `1..=`[`MAX_ITEMS_PER_GROUP`].
    #[must_use]
    pub fn item_count(&self, environment: &LayoutEnvironment) -> usize {
        let class = self
            .device_class_override
            .unwrap_or_else(|| environment.resolved_device_class());
        let orientation = environment.resolved_orientation();
        let count = match class {
            DeviceClass::Phone => self.phone.for_orientation(orientation),
            DeviceClass::Tablet => self.tablet.for_orientation(orientation),
            DeviceClass::Tv => self.tv,
        };
        count.clamp(1, MAX_ITEMS_PER_GROUP)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            self.phone.portrait,
            self.phone.landscape,
            self.tablet.portrait,
            self.tablet.landscape,
            self.tv,
        ];
        if counts.contains(&0) {
            return Err(ConfigError::ZeroItemCount);
        }
        counts.into_iter().try_for_each(check_item_limit)?;
        if !self.aspect_ratio.is_finite() {
            return Err(ConfigError::NonFiniteValue {
                field: ConfigField::AspectRatio,
            });
        }
        if self.aspect_ratio < 0.0 {
            return Err(ConfigError::NegativeAspectRatio(self.aspect_ratio));
        }
        Ok(())
    }
}

impl Default for ItemsPerDeviceClass {
    fn default() -> Self {
        Self {
            phone: OrientationItems::new(1, 2),
            tablet: OrientationItems::new(2, 4),
            tv: 4,
            aspect_ratio: 0.0,
            device_class_override: None,
        }
    }
}

/// Layout configuration of one section.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionConfiguration {
    /// Arrangement of the items.
    pub layout: SectionLayoutKind,
    /// Spacing between items inside a group.
    pub inter_item_spacing: f64,
    /// Spacing between successive groups (pages).
    pub inter_group_spacing: f64,
    /// Insets around the item content.
    pub section_insets: Insets,
    /// Insets around the header.
    pub header_insets: Insets,
    /// Insets around the footer.
    pub footer_insets: Insets,
}

impl SectionConfiguration {
    /// Spacing used when none is given.
    pub const DEFAULT_SPACING: f64 = 6.0;

    /// Creates a configuration with default spacing and zero insets.
    #[must_use]
    pub fn new(layout: SectionLayoutKind) -> Self {
        Self {
            layout,
            inter_item_spacing: Self::DEFAULT_SPACING,
            inter_group_spacing: Self::DEFAULT_SPACING,
            section_insets: Insets::ZERO,
            header_insets: Insets::ZERO,
            footer_insets: Insets::ZERO,
        }
    }

    /// Sets the spacing between items inside a group.
    #[must_use]
    pub fn with_inter_item_spacing(mut self, spacing: f64) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    /// Sets the spacing between groups.
    #[must_use]
    pub fn with_inter_group_spacing(mut self, spacing: f64) -> Self {
        self.inter_group_spacing = spacing;
        self
    }

    /// Sets the section insets.
    #[must_use]
    pub fn with_section_insets(mut self, insets: Insets) -> Self {
        self.section_insets = insets;
        self
    }

    /// Sets the header insets.
    #[must_use]
    pub fn with_header_insets(mut self, insets: Insets) -> Self {
        self.header_insets = insets;
        self
    }

    /// Sets the footer insets.
    #[must_use]
    pub fn with_footer_insets(mut self, insets: Insets) -> Self {
        self.footer_insets = insets;
        self
    }

    /// Checks construction-time preconditions.
    ///
    /// Lengths, spacings and insets must be finite and non-negative, vertical
    /// layouts need at least one row and device tables at least one item.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;
        validate_spacing(ConfigField::InterItemSpacing, self.inter_item_spacing)?;
        validate_spacing(ConfigField::InterGroupSpacing, self.inter_group_spacing)?;
        validate_insets(ConfigField::SectionInsets, self.section_insets)?;
        validate_insets(ConfigField::HeaderInsets, self.header_insets)?;
        validate_insets(ConfigField::FooterInsets, self.footer_insets)
    }
}

impl Default for SectionConfiguration {
    fn default() -> Self {
        Self::new(SectionLayoutKind::default())
    }
}

fn check_item_limit(count: usize) -> Result<(), ConfigError> {
    if count > MAX_ITEMS_PER_GROUP {
        return Err(ConfigError::TooManyItems {
            value: count,
            max: MAX_ITEMS_PER_GROUP,
        });
    }
    Ok(())
}

fn validate_spacing(field: ConfigField, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ConfigError::NegativeSpacing { field, value });
    }
    Ok(())
}

fn validate_insets(field: ConfigField, insets: Insets) -> Result<(), ConfigError> {
    let edges = [insets.x0, insets.y0, insets.x1, insets.y1];
    if edges.iter().any(|e| !e.is_finite()) {
        return Err(ConfigError::NonFiniteValue { field });
    }
    if edges.iter().any(|e| *e < 0.0) {
        return Err(ConfigError::NegativeInset { field });
    }
    Ok(())
}
