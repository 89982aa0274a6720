// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Iterative item-width search for single sections with an aspect ratio.

use crate::log::trace;

/// Parameters of the item-width search.
///
/// Starting at `seed`, the candidate width grows by `step` until
/// `container_width / (candidate + spacing)` lies within `tolerance` of a whole
/// number, so a whole number of slots fits the container with no partial slot
/// showing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidthSearch {
    /// First candidate width.
    pub seed: f64,
    /// Growth per iteration; non-positive values use [`WidthSearch::DEFAULT_STEP`].
    pub step: f64,
    /// Allowed distance of the slot ratio from a whole number.
    pub tolerance: f64,
    /// Iteration cap before falling back to a single slot.
    pub max_steps: usize,
}

impl WidthSearch {
    /// Default first candidate width.
    pub const DEFAULT_SEED: f64 = 80.0;
    /// Default growth per iteration.
    pub const DEFAULT_STEP: f64 = 5.0;
    /// Default tolerance around whole slot counts.
    pub const DEFAULT_TOLERANCE: f64 = 0.1;
    /// Default iteration cap.
    pub const DEFAULT_MAX_STEPS: usize = 10_000;

    /// Runs the search for a container of `container_width` with `spacing`
    /// between slots.
    ///
    /// Always returns at least one slot. When the candidate outgrows the
    /// container or the iteration cap is hit, the result is one slot of
    /// `container_width - spacing`.
    #[must_use]
    pub fn run(&self, container_width: f64, spacing: f64) -> WidthSearchResult {
        let container_width = non_negative(container_width);
        let spacing = non_negative(spacing);
        let step = if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            Self::DEFAULT_STEP
        };
        let tolerance = if self.tolerance.is_finite() {
            self.tolerance.abs()
        } else {
            Self::DEFAULT_TOLERANCE
        };

        let mut candidate = non_negative(self.seed);
        if container_width > 0.0 {
            for steps in 0..=self.max_steps {
                let stride = candidate + spacing;
                if stride > 0.0 {
                    let ratio = container_width / stride;
                    if ratio < 1.0 - tolerance {
                        break;
                    }
                    let count = nearest_count(ratio);
                    let distance = (ratio - count as f64).abs();
                    if distance <= tolerance {
                        return WidthSearchResult {
                            width: candidate,
                            count,
                            steps,
                        };
                    }
                }
                candidate += step;
            }
        }

        trace!(
            container_width,
            spacing, "width search fell back to a single slot"
        );
        WidthSearchResult {
            width: non_negative(container_width - spacing),
            count: 1,
            steps: 0,
        }
    }
}

impl Default for WidthSearch {
    fn default() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            step: Self::DEFAULT_STEP,
            tolerance: Self::DEFAULT_TOLERANCE,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }
}

/// Outcome of [`WidthSearch::run`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WidthSearchResult {
    /// Width of one slot.
    pub width: f64,
    /// Number of slots that fit the container.
    pub count: usize,
    /// Iterations taken.
    pub steps: usize,
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Rounds a positive ratio to the nearest whole count, at least one.
fn nearest_count(ratio: f64) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Ratio is finite and positive; truncating `ratio + 0.5` rounds it"
    )]
    let count = (ratio + 0.5) as usize;
    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::WidthSearch;

    #[test]
    fn seed_that_already_fits_is_kept() {
        // 400 / (80 + 0) = 5 exactly.
        let result = WidthSearch::default().run(400.0, 0.0);
        assert_eq!(result.width, 80.0);
        assert_eq!(result.count, 5);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn grows_until_whole_slots_fit() {
        // 375 / (80 + 6) = 4.36 -> grow by 5 until within 0.1 of a whole count.
        let result = WidthSearch::default().run(375.0, 6.0);
        let ratio = 375.0 / (result.width + 6.0);
        assert!(
            (ratio - result.count as f64).abs() <= 0.1,
            "ratio {ratio} not within tolerance of {}",
            result.count
        );
        assert!(result.width > 80.0, "seed should have grown");
        assert_eq!((result.width - 80.0) % 5.0, 0.0);
    }

    #[test]
    fn step_and_tolerance_are_configurable() {
        let search = WidthSearch {
            step: 1.0,
            tolerance: 0.01,
            ..WidthSearch::default()
        };
        let result = search.run(375.0, 6.0);
        let ratio = 375.0 / (result.width + 6.0);
        assert!((ratio - result.count as f64).abs() <= 0.01, "ratio {ratio}");
    }

    #[test]
    fn seed_wider_than_container_falls_back_to_one_slot() {
        let search = WidthSearch {
            seed: 500.0,
            ..WidthSearch::default()
        };
        let result = search.run(300.0, 10.0);
        assert_eq!(result.count, 1);
        assert_eq!(result.width, 290.0);
    }

    #[test]
    fn empty_container_yields_one_empty_slot() {
        let result = WidthSearch::default().run(0.0, 6.0);
        assert_eq!(result.count, 1);
        assert_eq!(result.width, 0.0);
    }
}
