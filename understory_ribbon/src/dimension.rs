// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::error::{ConfigError, ConfigField};

/// A length along one axis.
///
/// Fractional variants are resolved against a reference size: the container
/// for section-level lengths, the enclosing group for slot-level lengths.
/// Two dimensions are equal only when both the variant and the value match, so
/// `Absolute(80.0) != Estimated(80.0)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// A fixed length in points.
    Absolute(f64),
    /// An initial estimate in points; the host may refine it after measuring.
    Estimated(f64),
    /// A fraction of the reference height.
    FractionalHeight(f64),
    /// A fraction of the reference width.
    FractionalWidth(f64),
}

impl Dimension {
    /// The zero length, `Absolute(0.0)`.
    pub const ZERO: Self = Self::Absolute(0.0);

    /// The raw value carried by the variant, before resolution.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Absolute(value)
            | Self::Estimated(value)
            | Self::FractionalHeight(value)
            | Self::FractionalWidth(value) => value,
        }
    }

    /// Returns `true` for [`Dimension::Estimated`].
    #[must_use]
    pub fn is_estimated(self) -> bool {
        matches!(self, Self::Estimated(_))
    }

    /// Resolves this dimension to points against `reference`.
    ///
    /// The result is always finite and `>= 0`; negative or non-finite results
    /// collapse to zero.
    #[must_use]
    pub fn resolve(self, reference: Size) -> f64 {
        let raw = match self {
            Self::Absolute(value) | Self::Estimated(value) => value,
            Self::FractionalHeight(fraction) => fraction * reference.height,
            Self::FractionalWidth(fraction) => fraction * reference.width,
        };
        if raw.is_finite() && raw > 0.0 {
            raw
        } else {
            0.0
        }
    }

    /// Checks that the raw value is finite and not negative.
    pub fn validate(self, field: ConfigField) -> Result<(), ConfigError> {
        let value = self.value();
        if !value.is_finite() {
            return Err(ConfigError::NonFiniteValue { field });
        }
        if value < 0.0 {
            return Err(ConfigError::NegativeDimension { field, value });
        }
        Ok(())
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::Dimension;
    use crate::error::{ConfigError, ConfigField};

    const CONTAINER: Size = Size::new(400.0, 900.0);

    #[test]
    fn resolves_each_variant() {
        assert_eq!(Dimension::Absolute(80.0).resolve(CONTAINER), 80.0);
        assert_eq!(Dimension::Estimated(44.0).resolve(CONTAINER), 44.0);
        assert_eq!(Dimension::FractionalWidth(0.25).resolve(CONTAINER), 100.0);
        assert_eq!(Dimension::FractionalHeight(0.5).resolve(CONTAINER), 450.0);
    }

    #[test]
    fn resolved_lengths_are_never_negative() {
        assert_eq!(Dimension::Absolute(-3.0).resolve(CONTAINER), 0.0);
        assert_eq!(Dimension::FractionalWidth(-1.0).resolve(CONTAINER), 0.0);
        assert_eq!(Dimension::Absolute(f64::NAN).resolve(CONTAINER), 0.0);
    }

    #[test]
    fn equality_requires_same_variant() {
        assert_ne!(Dimension::Absolute(80.0), Dimension::Estimated(80.0));
        assert_eq!(Dimension::ZERO, Dimension::Absolute(0.0));
    }

    #[test]
    fn validate_rejects_negative_and_non_finite() {
        assert_eq!(
            Dimension::Absolute(-1.0).validate(ConfigField::Height),
            Err(ConfigError::NegativeDimension {
                field: ConfigField::Height,
                value: -1.0
            })
        );
        assert_eq!(
            Dimension::Estimated(f64::INFINITY).validate(ConfigField::ItemWidth),
            Err(ConfigError::NonFiniteValue {
                field: ConfigField::ItemWidth
            })
        );
        assert!(Dimension::FractionalWidth(0.3).validate(ConfigField::ItemWidth).is_ok());
    }
}
