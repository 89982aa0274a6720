// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Which configuration field failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigField {
    /// A section or group height.
    Height,
    /// An item width.
    ItemWidth,
    /// A header or footer height.
    Boundary,
    /// Spacing between items within a group.
    InterItemSpacing,
    /// Spacing between groups (pages).
    InterGroupSpacing,
    /// Insets around the section content.
    SectionInsets,
    /// Insets around the section header.
    HeaderInsets,
    /// Insets around the section footer.
    FooterInsets,
    /// The height/width ratio of wall and single items.
    AspectRatio,
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Height => "height",
            Self::ItemWidth => "item width",
            Self::Boundary => "boundary height",
            Self::InterItemSpacing => "inter-item spacing",
            Self::InterGroupSpacing => "inter-group spacing",
            Self::SectionInsets => "section insets",
            Self::HeaderInsets => "header insets",
            Self::FooterInsets => "footer insets",
            Self::AspectRatio => "aspect ratio",
        };
        f.write_str(name)
    }
}

/// A configuration value that violates a construction-time precondition.
///
/// The planner itself never fails; it clamps out-of-range values. Hosts that
/// build configurations from untrusted input call the `validate` methods to
/// reject them up front instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A length is negative.
    NegativeDimension {
        /// Field holding the length.
        field: ConfigField,
        /// Offending value.
        value: f64,
    },
    /// A length, spacing, inset or ratio is NaN or infinite.
    NonFiniteValue {
        /// Field holding the value.
        field: ConfigField,
    },
    /// A spacing value is negative.
    NegativeSpacing {
        /// Field holding the spacing.
        field: ConfigField,
        /// Offending value.
        value: f64,
    },
    /// One of the four inset edges is negative.
    NegativeInset {
        /// Field holding the insets.
        field: ConfigField,
    },
    /// A vertical layout declares zero rows.
    ZeroRows,
    /// A device-class table entry declares zero items per page.
    ZeroItemCount,
    /// A row count or items-per-page entry exceeds the per-group limit.
    TooManyItems {
        /// Offending count.
        value: usize,
        /// Largest accepted count.
        max: usize,
    },
    /// The aspect ratio is negative.
    NegativeAspectRatio(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDimension { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::NonFiniteValue { field } => write!(f, "{field} must be finite"),
            Self::NegativeSpacing { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::NegativeInset { field } => write!(f, "{field} must not have negative edges"),
            Self::ZeroRows => f.write_str("a vertical layout needs at least one row"),
            Self::ZeroItemCount => f.write_str("items per page must be at least one"),
            Self::TooManyItems { value, max } => {
                write!(f, "at most {max} items fit in one group (got {value})")
            }
            Self::NegativeAspectRatio(ratio) => {
                write!(f, "aspect ratio must not be negative (got {ratio})")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
