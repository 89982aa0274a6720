// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for other Understory crates.
//!
//! Modules in this file are behind feature flags so `understory_ribbon_focus`
//! can remain usable in contexts that do not depend on those crates.
//!
//! - `layout` (`layout_adapter` feature): answer [`crate::FocusGeometry`]
//!   and [`crate::SectionCounts`] queries from `understory_ribbon::SectionFrames`,
//!   optionally below a list header.

#[cfg(feature = "layout_adapter")]
pub mod layout;
