// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Drag: drag-gesture tracking and close-vs-settle resolution.
//!
//! This crate models exactly one continuous drag gesture on a bottom sheet:
//! a start event, zero or more moves, and one terminating event carrying the
//! release velocity. At every point it computes the *candidate height*, the
//! sheet height implied by the finger position, and on release it resolves
//! the gesture into a single [`DragOutcome`]: close the sheet, or settle at
//! a snap index chosen by `undersheet_snap`'s midpoint bucketing.
//!
//! Positions are absolute screen coordinates ([`kurbo::Point`], y growing
//! downward), so the candidate height is
//!
//! ```text
//! clamp(screen_height - position.y - keyboard_height, 0, screen_height)
//! ```
//!
//! with both ends clamped so out-of-bounds touches and oversized keyboards
//! degrade gracefully rather than producing negative or over-tall sheets.
//!
//! Screen and keyboard metrics are an explicitly injected [`DragContext`],
//! never ambient lookups, so gestures are fully resolvable in tests without
//! a UI host. The keyboard height may change mid-gesture; update the context
//! and the next move incorporates it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use undersheet_drag::{DragContext, DragOutcome, DragSession};
//! use undersheet_snap::{SnapHeights, SnapPoint};
//!
//! let snaps = SnapHeights::resolve(&[SnapPoint::Px(500.0), SnapPoint::Px(600.0)], 800.0);
//! let ctx = DragContext { screen_height: 800.0, keyboard_height: 0.0 };
//!
//! // Grab the sheet near the top of its 600px extent…
//! let mut session = DragSession::begin(ctx, Point::new(40.0, 200.0));
//! // …drag down to a 520px candidate and release gently.
//! session.move_to(Point::new(40.0, 280.0));
//! let outcome = session.finish(Point::new(40.0, 280.0), 12.0, &snaps);
//!
//! assert_eq!(outcome, Some(DragOutcome::Settle(0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use undersheet_snap::SnapHeights;

/// Metrics a drag gesture is resolved against.
///
/// A snapshot of the injected host state: the screen height the candidate
/// formula and the fling threshold use, and the last known keyboard height
/// (zero when hidden).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragContext {
    /// Current screen height in logical pixels.
    pub screen_height: f64,
    /// Last known on-screen keyboard height, `0.0` when hidden.
    pub keyboard_height: f64,
}

impl DragContext {
    /// The sheet height implied by a finger at `position`.
    ///
    /// Clamped into `0..=screen_height` so touches beyond the screen bounds
    /// and very large keyboard heights cannot produce out-of-range heights.
    #[must_use]
    pub fn candidate(&self, position: Point) -> f64 {
        let ceiling = self.screen_height.max(0.0);
        (self.screen_height - position.y - self.keyboard_height).clamp(0.0, ceiling)
    }
}

/// The single decision produced when a drag gesture ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dismiss the sheet: fast downward fling, or released too low.
    Close,
    /// Animate to the snap height at this index and commit it as current.
    Settle(usize),
}

/// Tracker for one continuous drag gesture.
///
/// Owns only per-gesture bookkeeping; the authoritative sheet state lives in
/// the state machine that consumes the [`DragOutcome`]. A session is created
/// at the start event, fed move events, and consumed by [`finish`].
///
/// [`finish`]: DragSession::finish
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    ctx: DragContext,
    candidate: f64,
}

impl DragSession {
    /// Start a gesture at the initial touch position.
    #[must_use]
    pub fn begin(ctx: DragContext, position: Point) -> Self {
        let candidate = ctx.candidate(position);
        Self { ctx, candidate }
    }

    /// The metrics this session currently resolves against.
    #[must_use]
    pub const fn context(&self) -> DragContext {
        self.ctx
    }

    /// Replace the metrics snapshot (e.g. the keyboard appeared mid-drag).
    ///
    /// Takes effect from the next move; the stored candidate is not
    /// retroactively recomputed, matching hosts that only observe the live
    /// height on move events.
    pub fn set_context(&mut self, ctx: DragContext) {
        self.ctx = ctx;
    }

    /// Track a move event and return the new candidate height.
    pub fn move_to(&mut self, position: Point) -> f64 {
        self.candidate = self.ctx.candidate(position);
        self.candidate
    }

    /// The candidate height as of the last start/move event.
    #[must_use]
    pub const fn candidate(&self) -> f64 {
        self.candidate
    }

    /// Resolve the gesture at its terminating event.
    ///
    /// `velocity_y` is the release velocity in pixels per second, positive
    /// downward. The sheet closes when *either*:
    ///
    /// - the release is a fast downward fling: `velocity_y` is positive and
    ///   numerically at least the screen height (the threshold scales with
    ///   the screen, so a fling must cover roughly a screen per second), or
    /// - the candidate height is below [`SnapHeights::dismiss_threshold`]
    ///   (two-thirds of the smallest snap).
    ///
    /// Otherwise the gesture settles at [`SnapHeights::settle_index`].
    ///
    /// Returns `None` when `snaps` is empty (misconfigured host; documented
    /// precondition rather than a runtime error).
    #[must_use]
    pub fn finish(
        mut self,
        position: Point,
        velocity_y: f64,
        snaps: &SnapHeights,
    ) -> Option<DragOutcome> {
        let candidate = self.move_to(position);
        let threshold = snaps.dismiss_threshold()?;

        let downward_fling = velocity_y > 0.0 && velocity_y >= self.ctx.screen_height;
        if downward_fling || candidate < threshold {
            return Some(DragOutcome::Close);
        }
        snaps.settle_index(candidate).map(DragOutcome::Settle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use undersheet_snap::SnapPoint;

    fn snaps() -> SnapHeights {
        SnapHeights::resolve(&[SnapPoint::Px(500.0), SnapPoint::Px(600.0)], 800.0)
    }

    fn ctx() -> DragContext {
        DragContext {
            screen_height: 800.0,
            keyboard_height: 0.0,
        }
    }

    /// Position whose candidate height equals `height` under `ctx()`.
    fn at(height: f64) -> Point {
        Point::new(0.0, 800.0 - height)
    }

    #[test]
    fn candidate_tracks_position_and_keyboard() {
        let mut session = DragSession::begin(ctx(), at(500.0));
        assert_eq!(session.candidate(), 500.0);

        assert_eq!(session.move_to(at(560.0)), 560.0);

        // The keyboard appears mid-drag: the next move subtracts it.
        session.set_context(DragContext {
            screen_height: 800.0,
            keyboard_height: 150.0,
        });
        assert_eq!(session.move_to(at(560.0)), 410.0);
    }

    #[test]
    fn candidate_is_clamped_to_screen_bounds() {
        let c = ctx();
        // Finger below the bottom edge.
        assert_eq!(c.candidate(Point::new(0.0, 900.0)), 0.0);
        // Finger above the top edge.
        assert_eq!(c.candidate(Point::new(0.0, -100.0)), 800.0);
        // Oversized keyboard cannot push the candidate negative.
        let kb = DragContext {
            screen_height: 800.0,
            keyboard_height: 1000.0,
        };
        assert_eq!(kb.candidate(Point::new(0.0, 100.0)), 0.0);
    }

    #[test]
    fn release_below_dismiss_threshold_closes() {
        // Threshold is 500 * 2/3 ≈ 333: 300 closes, 340 settles.
        let session = DragSession::begin(ctx(), at(500.0));
        let outcome = session.finish(at(300.0), 0.0, &snaps());
        assert_eq!(outcome, Some(DragOutcome::Close));

        let session = DragSession::begin(ctx(), at(500.0));
        let outcome = session.finish(at(340.0), 0.0, &snaps());
        assert_eq!(outcome, Some(DragOutcome::Settle(0)));
    }

    #[test]
    fn fast_downward_fling_closes_regardless_of_height() {
        // Candidate 550 would otherwise settle, but the fling wins.
        let session = DragSession::begin(ctx(), at(550.0));
        let outcome = session.finish(at(550.0), 800.0, &snaps());
        assert_eq!(outcome, Some(DragOutcome::Close));
    }

    #[test]
    fn upward_fling_never_closes() {
        // Large upward velocity (negative) is not a dismissal.
        let session = DragSession::begin(ctx(), at(550.0));
        let outcome = session.finish(at(550.0), -2000.0, &snaps());
        assert_eq!(outcome, Some(DragOutcome::Settle(0)));
    }

    #[test]
    fn slow_downward_release_settles() {
        // Downward but below the screen-height fling threshold.
        let session = DragSession::begin(ctx(), at(580.0));
        let outcome = session.finish(at(580.0), 799.0, &snaps());
        assert_eq!(outcome, Some(DragOutcome::Settle(1)));
    }

    #[test]
    fn settle_uses_midpoint_bucketing() {
        for (height, index) in [(549.0, 0), (550.0, 0), (551.0, 1), (700.0, 1)] {
            let session = DragSession::begin(ctx(), at(height));
            let outcome = session.finish(at(height), 0.0, &snaps());
            assert_eq!(outcome, Some(DragOutcome::Settle(index)), "height {height}");
        }
    }

    #[test]
    fn empty_snaps_resolve_to_none() {
        let session = DragSession::begin(ctx(), at(400.0));
        assert_eq!(session.finish(at(400.0), 0.0, &SnapHeights::default()), None);
    }
}
