// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ribbon --heading-base-level=0

//! Understory Ribbon: section layout planning for paginated ribbon rows.
//!
//! A ribbon list is a vertical list of sections where each section shows its
//! items as a horizontally paginated row (a "ribbon"), a wrapping wall, a
//! single page, or plain list rows. This crate turns a declarative
//! [`SectionConfiguration`] plus the running [`LayoutEnvironment`] into a
//! [`LayoutPlan`]: slot sizes, group (page) arrangement, spacing, insets and
//! optional header/footer slots.
//!
//! The core concepts are:
//!
//! - [`Dimension`]: absolute, estimated, or fractional lengths.
//! - [`SectionLayoutKind`]: the closed set of arrangements (`Horizontal`,
//!   `Vertical`, `List`, `Wall`, `Single`).
//! - [`LayoutPlanner`]: a pure function from section index, configuration,
//!   environment and boundary heights to a [`LayoutPlan`].
//! - [`LayoutPlan::arrange`]: concrete item, header and footer frames for a
//!   given item count, in section-local coordinates.
//!
//! This crate deliberately does **not** know about views, cells, or any
//! particular UI toolkit. Host frameworks are responsible for:
//!
//! - Supplying a configuration for every section (use
//!   [`SectionConfiguration::default`] when they have none).
//! - Re-planning when the container size, orientation or configuration
//!   changes, by passing a new [`LayoutEnvironment`].
//! - Resolving header/footer heights into [`SectionBoundaries`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_ribbon::{
//!     Dimension, LayoutEnvironment, SectionBoundaries, SectionConfiguration, SectionLayoutKind,
//!     plan,
//! };
//!
//! let config = SectionConfiguration::new(SectionLayoutKind::horizontal_uniform(
//!     Dimension::Absolute(80.0),
//!     Dimension::Absolute(80.0),
//! ));
//! let env = LayoutEnvironment::new(Size::new(400.0, 800.0));
//!
//! let plan = plan(0, &config, &env, SectionBoundaries::NONE);
//! let frames = plan.arrange(5);
//! assert_eq!(frames.items.len(), 5);
//! assert_eq!(frames.items[1].x0, 86.0);
//! ```
//!
//! All lengths live in a caller-chosen coordinate space (typically points)
//! and resolve to finite, non-negative values.
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arrange;
mod config;
mod dimension;
mod environment;
mod error;
mod log;
mod plan;
mod planner;
mod search;

pub use arrange::{ESTIMATED_LIST_ROW_HEIGHT, SectionFrames};
pub use config::{
    DEFAULT_ITEM_WIDTH, ItemsPerDeviceClass, ListAppearance, ListStyle, MAX_ITEMS_PER_GROUP,
    OrientationItems, SectionConfiguration, SectionLayoutKind,
};
pub use dimension::Dimension;
pub use environment::{DeviceClass, LayoutEnvironment, Orientation};
pub use error::{ConfigError, ConfigField};
pub use plan::{
    Axis, BoundaryAlignment, BoundaryItem, BoundaryKind, GroupAdvance, GroupPlan, LayoutPlan,
    OrthogonalScrolling, PlanKind, Slot,
};
pub use planner::{LayoutPlanner, PlannerOptions, SectionBoundaries, plan};
pub use search::{WidthSearch, WidthSearchResult};
