// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ribbon_focus --heading-base-level=0

//! Understory Ribbon Focus: focus and scroll coordination for sectioned lists.
//!
//! Directional focus engines (D-pad, remote, arrow keys) pick the next focused
//! item geometrically. In a vertical list of horizontally scrolling ribbons
//! that often means moving up from a wide row lands two or three sections
//! higher than the user expects, or leaves the list entirely from the middle.
//! [`FocusCoordinator`] guards against that:
//!
//! - [`FocusCoordinator::should_allow_transition`] refuses a move that skips
//!   sections upwards, or leaves the list from an interior section, and
//!   remembers the last item of the section directly above as a one-shot
//!   redirect target.
//! - [`FocusCoordinator::can_focus_item`] and
//!   [`FocusCoordinator::preferred_focus`] steer the focus engine onto that
//!   target on its next pass.
//! - [`FocusCoordinator::target_scroll_offset`] settles the vertical scroll
//!   offset on the focused item or its section header.
//!
//! The coordinator never holds on to views. The host answers its questions
//! through three small traits:
//!
//! - [`SectionCounts`]: how many sections and items exist.
//! - [`FocusGeometry`]: where headers and items are.
//! - [`FocusDelegate`]: optional overrides, implemented by `()` when unused.
//!
//! With the `layout_adapter` feature, `adapters::layout::StackedSections`
//! answers the first two from `understory_ribbon` section frames.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_ribbon_focus::{FocusCoordinator, FocusTransition, ItemCoord};
//!
//! let mut coordinator = FocusCoordinator::new();
//! let item_counts = [3_usize, 3, 3, 3, 4, 2];
//!
//! // Moving up from section 5 straight to section 2 is refused...
//! let skip = FocusTransition::between(ItemCoord::new(5, 0), ItemCoord::new(2, 1));
//! assert!(!coordinator.should_allow_transition(skip, &item_counts));
//!
//! // ...and focus is sent to the last item of section 4 instead.
//! assert!(coordinator.can_focus_item(ItemCoord::new(4, 3), &()));
//! assert!(!coordinator.can_focus_item(ItemCoord::new(2, 1), &()));
//! assert_eq!(coordinator.consume_forced_focus(), Some(ItemCoord::new(4, 3)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;

mod coord;
mod coordinator;
mod delegate;
mod geometry;
mod log;

pub use coord::{FocusTransition, ItemCoord};
pub use coordinator::{FocusCoordinator, FocusDecision};
pub use delegate::FocusDelegate;
pub use geometry::{FocusGeometry, ScrollBehavior, SectionCounts};
