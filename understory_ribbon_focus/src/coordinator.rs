// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The focus and scroll coordinator.

use kurbo::{Point, Rect};

use crate::coord::{FocusTransition, ItemCoord};
use crate::delegate::FocusDelegate;
use crate::geometry::{FocusGeometry, ScrollBehavior, SectionCounts};
use crate::log::{debug, trace};

/// Outcome of evaluating a [`FocusTransition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusDecision {
    /// Let the focus engine perform the move.
    Allow,
    /// Refuse the move and send focus to this item instead.
    Redirect(ItemCoord),
}

impl FocusDecision {
    /// Whether the transition may proceed.
    #[must_use]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Keeps directional focus from skipping sections and settles the scroll
/// offset on the focused section.
///
/// The coordinator stores three coordinates: the previously and currently
/// focused items, updated by [`record_transition_completed`], and a one-shot
/// forced target written when a transition is redirected. The target is taken
/// by [`consume_forced_focus`] and dropped once any transition completes.
///
/// [`record_transition_completed`]: FocusCoordinator::record_transition_completed
/// [`consume_forced_focus`]: FocusCoordinator::consume_forced_focus
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusCoordinator {
    previously_focused: Option<ItemCoord>,
    currently_focused: Option<ItemCoord>,
    forced_next_focus: Option<ItemCoord>,
}

impl FocusCoordinator {
    /// Creates a coordinator with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Item that had focus before the last completed transition.
    #[must_use]
    pub fn previously_focused(&self) -> Option<ItemCoord> {
        self.previously_focused
    }

    /// Item focused by the last completed transition.
    #[must_use]
    pub fn currently_focused(&self) -> Option<ItemCoord> {
        self.currently_focused
    }

    /// Pending redirect target, without consuming it.
    #[must_use]
    pub fn forced_focus(&self) -> Option<ItemCoord> {
        self.forced_next_focus
    }

    /// Decides `transition` without touching any state.
    ///
    /// A move from section `p` to section `n < p - 1`, or leaving the list from
    /// a section other than the first and the last, is redirected to the last
    /// item of section `p - 1`. Forward skips are allowed. When the redirect
    /// target section is empty or does not exist, the move is allowed.
    #[must_use]
    pub fn evaluate_transition<S>(&self, transition: FocusTransition, sections: &S) -> FocusDecision
    where
        S: SectionCounts + ?Sized,
    {
        let Some(previous) = transition.previous else {
            return FocusDecision::Allow;
        };
        let skips = match transition.next {
            Some(next) => previous.section.saturating_sub(next.section) > 1,
            None => {
                previous.section > 0
                    && previous.section < sections.section_count().saturating_sub(1)
            }
        };
        if !skips {
            return FocusDecision::Allow;
        }

        let target = previous.section - 1;
        if target >= sections.section_count() {
            return FocusDecision::Allow;
        }
        match sections.item_count(target) {
            0 => FocusDecision::Allow,
            count => FocusDecision::Redirect(ItemCoord::new(target, count - 1)),
        }
    }

    /// Answers the focus engine's "may focus move?" query.
    ///
    /// Returns `false` when the move is redirected; the target is then
    /// available from [`FocusCoordinator::consume_forced_focus`] and
    /// any older unconsumed target is replaced.
    pub fn should_allow_transition<S>(&mut self, transition: FocusTransition, sections: &S) -> bool
    where
        S: SectionCounts + ?Sized,
    {
        self.should_allow_transition_with(transition, sections, &())
    }

    /// Like [`FocusCoordinator::should_allow_transition`], but the delegate's
    /// answer wins when it has one.
    pub fn should_allow_transition_with<S, D>(
        &mut self,
        transition: FocusTransition,
        sections: &S,
        delegate: &D,
    ) -> bool
    where
        S: SectionCounts + ?Sized,
        D: FocusDelegate + ?Sized,
    {
        if let Some(answer) = delegate.should_update_focus(&transition) {
            debug!(answer, "focus transition decided by delegate");
            return answer;
        }
        match self.evaluate_transition(transition, sections) {
            FocusDecision::Allow => true,
            FocusDecision::Redirect(target) => {
                debug!(%target, "redirecting skipped focus transition");
                self.forced_next_focus = Some(target);
                false
            }
        }
    }

    /// Records that the focus engine finished `transition`.
    ///
    /// Focus has landed, so a pending redirect target is dropped.
    pub fn record_transition_completed(&mut self, transition: FocusTransition) {
        self.forced_next_focus = None;
        self.previously_focused = transition.previous;
        self.currently_focused = transition.next;
    }

    /// Takes the pending redirect target.
    pub fn consume_forced_focus(&mut self) -> Option<ItemCoord> {
        self.forced_next_focus.take()
    }

    /// Item that should receive focus when the list regains it.
    ///
    /// A pending redirect target wins and is consumed; otherwise the delegate
    /// chooses.
    pub fn preferred_focus<D>(&mut self, delegate: &D) -> Option<ItemCoord>
    where
        D: FocusDelegate + ?Sized,
    {
        self.consume_forced_focus().or_else(|| delegate.preferred_focus())
    }

    /// Whether `coord` may take focus.
    ///
    /// While a redirect is pending only its target is focusable, so the focus
    /// engine cannot settle anywhere else.
    #[must_use]
    pub fn can_focus_item<D>(&self, coord: ItemCoord, delegate: &D) -> bool
    where
        D: FocusDelegate + ?Sized,
    {
        match self.forced_next_focus {
            Some(forced) => forced == coord,
            None => delegate.can_focus_item(coord),
        }
    }

    /// Vertical scroll offset the list should settle on instead of `proposed`.
    ///
    /// The horizontal component of `proposed` is always kept. Missing frames
    /// leave `proposed` unchanged.
    #[must_use]
    pub fn target_scroll_offset<G>(
        &self,
        proposed: Point,
        behavior: ScrollBehavior,
        geometry: &G,
    ) -> Point
    where
        G: FocusGeometry + ?Sized,
    {
        let frame = match behavior {
            ScrollBehavior::None => return proposed,
            ScrollBehavior::Manual => {
                return geometry.manual_target_offset(proposed).unwrap_or(proposed);
            }
            ScrollBehavior::ItemPaging => {
                self.currently_focused.and_then(|c| geometry.item_frame(c))
            }
            ScrollBehavior::SectionPaging => self.currently_focused.and_then(|c| {
                geometry
                    .header_frame(c.section)
                    .or_else(|| geometry.item_frame(c))
            }),
        };
        match frame {
            Some(frame) => align_top(proposed, frame, geometry),
            None => {
                trace!(?behavior, "no frame to align, keeping proposed offset");
                proposed
            }
        }
    }
}

fn align_top<G: FocusGeometry + ?Sized>(proposed: Point, frame: Rect, geometry: &G) -> Point {
    Point::new(proposed.x, frame.y0 - geometry.content_inset().y0)
}
