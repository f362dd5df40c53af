// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet controller: exclusive owner of sheet state and live height.

use alloc::vec::Vec;
use core::mem;

use kurbo::Point;
use smallvec::SmallVec;
use undersheet_drag::{DragContext, DragOutcome, DragSession};
use undersheet_snap::{SnapHeights, SnapPoint};
use undersheet_tween::TweenSpec;

use crate::types::{
    AnimationRequest, AnimationToken, DismissFlags, SheetConfig, SheetEvent, SheetState,
};
use crate::{backdrop, keyboard};

/// What an in-flight tween will commit once it completes.
#[derive(Clone, Copy, Debug, PartialEq)]
enum AnimationGoal {
    /// Land exactly at this height (the committed snap height).
    Settle(f64),
    /// Land at zero and notify the host to remove the presentation.
    Close,
}

/// The latest requested tween. Frames and completions carrying any other
/// token are stale and must be discarded.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PendingAnimation {
    token: AnimationToken,
    goal: AnimationGoal,
}

/// Headless state machine for one bottom-sheet presentation.
///
/// Owns [`SheetState`], the live height, and the last known keyboard
/// height; nothing else writes them. See the crate docs for the host
/// contract. In short: call the event methods in the order the host
/// delivers events, run any returned [`AnimationRequest`], and poll
/// [`live_height`](Self::live_height) /
/// [`backdrop_opacity`](Self::backdrop_opacity) after each call.
#[derive(Debug)]
pub struct SheetController {
    points: Vec<SnapPoint>,
    dismiss: DismissFlags,
    animation: TweenSpec,

    screen_height: f64,
    keyboard_height: f64,
    snaps: SnapHeights,

    state: SheetState,
    /// Last committed snap index. Survives the transient `Dragging` state so
    /// settling back where the drag began does not re-notify.
    committed_index: Option<usize>,
    live_height: f64,
    drag: Option<DragSession>,
    pending: Option<PendingAnimation>,
    next_token: u64,
    events: SmallVec<[SheetEvent; 4]>,
}

impl SheetController {
    /// Create a controller for one presentation.
    ///
    /// Snap points resolve eagerly against `screen_height`; the sheet
    /// starts [`SheetState::Closed`] with a live height of zero. Call
    /// [`mount`](Self::mount) to auto-open.
    #[must_use]
    pub fn new(config: SheetConfig, screen_height: f64) -> Self {
        let SheetConfig {
            snap_points,
            dismiss,
            animation,
        } = config;
        let snaps = SnapHeights::resolve(&snap_points, screen_height);
        Self {
            points: snap_points,
            dismiss,
            animation,
            screen_height,
            keyboard_height: 0.0,
            snaps,
            state: SheetState::Closed,
            committed_index: None,
            live_height: 0.0,
            drag: None,
            pending: None,
            next_token: 0,
            events: SmallVec::new(),
        }
    }

    // ---------------------------------------------------------------------
    // Outputs.

    /// The current discrete state.
    #[must_use]
    pub const fn state(&self) -> SheetState {
        self.state
    }

    /// The committed snap index, if the sheet is settled.
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        match self.state {
            SheetState::Settled(index) => Some(index),
            SheetState::Closed | SheetState::Dragging => None,
        }
    }

    /// The authoritative live height the view layer should render.
    #[must_use]
    pub const fn live_height(&self) -> f64 {
        self.live_height
    }

    /// Backdrop darkness derived from the live height. See [`backdrop`].
    #[must_use]
    pub fn backdrop_opacity(&self) -> f64 {
        backdrop::opacity(self.live_height, self.screen_height, self.keyboard_height)
    }

    /// The resolved snap heights.
    #[must_use]
    pub const fn snap_heights(&self) -> &SnapHeights {
        &self.snaps
    }

    /// The screen height snap points are resolved against.
    #[must_use]
    pub const fn screen_height(&self) -> f64 {
        self.screen_height
    }

    /// The last known keyboard height, zero when hidden.
    #[must_use]
    pub const fn keyboard_height(&self) -> f64 {
        self.keyboard_height
    }

    /// Whether a requested tween has not yet completed (or been superseded).
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain queued discrete events, oldest first.
    pub fn drain_events(&mut self) -> SmallVec<[SheetEvent; 4]> {
        mem::take(&mut self.events)
    }

    // ---------------------------------------------------------------------
    // Configuration updates.

    /// Replace the snap-point list and re-resolve eagerly.
    ///
    /// Resolution completes before this returns, so any later open or
    /// gesture sees the new heights. A settled index beyond the new list is
    /// clamped; an emptied list closes the sheet outright.
    pub fn set_snap_points(&mut self, points: Vec<SnapPoint>) {
        self.points = points;
        self.resolve_snaps();
    }

    /// Update the screen height and re-resolve percentage snap points.
    pub fn set_screen_height(&mut self, screen_height: f64) {
        self.screen_height = screen_height;
        self.resolve_snaps();
        let ctx = self.drag_context();
        if let Some(drag) = &mut self.drag {
            drag.set_context(ctx);
        }
    }

    fn resolve_snaps(&mut self) {
        self.snaps = SnapHeights::resolve(&self.points, self.screen_height);
        match self.state {
            SheetState::Settled(_) if self.snaps.is_empty() => {
                log::debug!("snap points emptied while settled; closing");
                self.state = SheetState::Closed;
                self.committed_index = None;
                self.live_height = 0.0;
                self.pending = None;
            }
            SheetState::Settled(index) if index >= self.snaps.len() => {
                self.commit_index(self.snaps.len() - 1);
            }
            _ => {}
        }
    }

    // ---------------------------------------------------------------------
    // Open / close.

    /// Mount-time entry point: reset keyboard state and auto-open to the
    /// first snap height.
    ///
    /// Returns the open tween to run, or `None` when no snap points are
    /// configured (the open is a no-op, not an error).
    pub fn mount(&mut self) -> Option<AnimationRequest> {
        self.keyboard_height = 0.0;
        self.open(0)
    }

    /// Animate to the snap height at `index` and commit it as current.
    ///
    /// Valid from any state except mid-drag; indices beyond the last snap
    /// are clamped. Supersedes an in-flight tween. No-op while a drag is
    /// active, and when no snap points are configured.
    pub fn open(&mut self, index: usize) -> Option<AnimationRequest> {
        if self.drag.is_some() {
            return None;
        }
        if self.snaps.is_empty() {
            log::debug!("open({index}) ignored: no snap points configured");
            return None;
        }
        let index = index.min(self.snaps.len() - 1);
        let target = self.snaps.get(index)?;
        self.commit_index(index);
        Some(self.begin_animation(AnimationGoal::Settle(target), target))
    }

    /// Close the sheet from any state (backdrop tap, back press, host
    /// logic).
    ///
    /// The live height tweens to zero; [`SheetEvent::Dismissed`] is emitted
    /// only once that tween completes. Supersedes an in-flight tween.
    /// Returns `None` when the sheet is already fully closed and idle.
    pub fn close(&mut self) -> Option<AnimationRequest> {
        self.drag = None;
        if self.state == SheetState::Closed && self.pending.is_none() && self.live_height == 0.0 {
            return None;
        }
        self.state = SheetState::Closed;
        self.committed_index = None;
        Some(self.begin_animation(AnimationGoal::Close, 0.0))
    }

    /// A tap on the backdrop. Closes only when
    /// [`DismissFlags::BACKDROP_TAP`] is enabled.
    pub fn backdrop_tap(&mut self) -> Option<AnimationRequest> {
        if self.dismiss.contains(DismissFlags::BACKDROP_TAP) {
            self.close()
        } else {
            None
        }
    }

    /// The hardware back signal.
    ///
    /// The signal is always consumed (hosts suppress their default back
    /// behavior regardless), but it closes the sheet only when
    /// [`DismissFlags::HARDWARE_BACK`] is enabled.
    pub fn back_pressed(&mut self) -> Option<AnimationRequest> {
        if self.dismiss.contains(DismissFlags::HARDWARE_BACK) {
            self.close()
        } else {
            None
        }
    }

    // ---------------------------------------------------------------------
    // Drag gesture.

    /// A drag gesture touched down.
    ///
    /// Only a presented sheet can be grabbed; while closed (including while
    /// the close tween is still running) the event is ignored. Grabbing a
    /// sheet mid-settle preempts the tween: its later frames and completion
    /// become stale.
    pub fn drag_start(&mut self, position: Point) {
        if matches!(self.state, SheetState::Closed) {
            return;
        }
        self.pending = None;
        let session = DragSession::begin(self.drag_context(), position);
        self.live_height = session.candidate();
        self.drag = Some(session);
        self.state = SheetState::Dragging;
    }

    /// A drag moved; the live height tracks the finger directly, without
    /// animation.
    pub fn drag_move(&mut self, position: Point) {
        if let Some(drag) = &mut self.drag {
            self.live_height = drag.move_to(position);
        }
    }

    /// The drag ended with the given release velocity (pixels per second,
    /// positive downward).
    ///
    /// Resolves the gesture into exactly one outcome: a close tween toward
    /// zero, or a settle tween toward the chosen snap height.
    pub fn drag_end(&mut self, position: Point, velocity_y: f64) -> Option<AnimationRequest> {
        let mut session = self.drag.take()?;
        self.live_height = session.move_to(position);

        match session.finish(position, velocity_y, &self.snaps) {
            Some(DragOutcome::Close) => {
                log::debug!(
                    "drag end: close (candidate {:.1}, velocity {velocity_y:.1})",
                    self.live_height
                );
                self.state = SheetState::Closed;
                self.committed_index = None;
                Some(self.begin_animation(AnimationGoal::Close, 0.0))
            }
            Some(DragOutcome::Settle(index)) => {
                log::debug!("drag end: settle at {index} (candidate {:.1})", self.live_height);
                // settle_index is in range for a non-empty set.
                let target = self.snaps.get(index)?;
                self.commit_index(index);
                Some(self.begin_animation(AnimationGoal::Settle(target), target))
            }
            None => {
                // Snap points vanished mid-drag. Resolve the transient state
                // rather than leaving the machine mid-drag.
                log::debug!("drag end: no snap points; resolving to closed");
                self.state = SheetState::Closed;
                self.committed_index = None;
                self.live_height = 0.0;
                None
            }
        }
    }

    // ---------------------------------------------------------------------
    // Keyboard.

    /// The on-screen keyboard appeared (or changed height).
    ///
    /// Mid-drag, only the stored height updates; the next move event folds
    /// it into the candidate. While settled, the sheet shrinks to stay
    /// above the keyboard (see [`keyboard::reflow_height`]) without
    /// changing the committed index.
    pub fn keyboard_shown(&mut self, height: f64) {
        self.keyboard_height = height.max(0.0);
        self.apply_keyboard();
    }

    /// The keyboard hid; a settled sheet returns to exactly its snap
    /// height.
    pub fn keyboard_hidden(&mut self) {
        self.keyboard_height = 0.0;
        self.apply_keyboard();
    }

    fn apply_keyboard(&mut self) {
        let ctx = self.drag_context();
        if let Some(drag) = &mut self.drag {
            drag.set_context(ctx);
            return;
        }
        if let SheetState::Settled(index) = self.state {
            if let Some(snap) = self.snaps.get(index) {
                self.live_height =
                    keyboard::reflow_height(snap, self.keyboard_height, self.screen_height);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Animation feedback.

    /// A sampled tween value for the given token.
    ///
    /// Values for a superseded token are discarded; the live height only
    /// ever reflects the latest requested tween.
    pub fn animation_frame(&mut self, token: AnimationToken, value: f64) {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.live_height = value.max(0.0);
            }
            _ => log::trace!("discarding stale animation frame for {token:?}"),
        }
    }

    /// The tween for the given token completed.
    ///
    /// Commits the goal exactly: a settle lands on the snap height, a close
    /// lands on zero and emits [`SheetEvent::Dismissed`]. Returns `false`
    /// for stale tokens, which mutate nothing.
    pub fn animation_complete(&mut self, token: AnimationToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                match pending.goal {
                    AnimationGoal::Settle(height) => self.live_height = height,
                    AnimationGoal::Close => {
                        self.live_height = 0.0;
                        self.events.push(SheetEvent::Dismissed);
                    }
                }
                true
            }
            _ => {
                log::debug!("discarding stale animation completion for {token:?}");
                false
            }
        }
    }

    // ---------------------------------------------------------------------
    // Internals.

    const fn drag_context(&self) -> DragContext {
        DragContext {
            screen_height: self.screen_height,
            keyboard_height: self.keyboard_height,
        }
    }

    /// Commit a settled index, emitting [`SheetEvent::IndexChanged`] when
    /// the committed value actually changes.
    fn commit_index(&mut self, index: usize) {
        self.state = SheetState::Settled(index);
        if self.committed_index != Some(index) {
            self.committed_index = Some(index);
            self.events.push(SheetEvent::IndexChanged(index));
        }
    }

    /// Mint a fresh token and supersede any in-flight tween.
    fn begin_animation(&mut self, goal: AnimationGoal, to: f64) -> AnimationRequest {
        let token = AnimationToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(PendingAnimation { token, goal });
        AnimationRequest {
            token,
            from: self.live_height,
            to,
            spec: self.animation,
        }
    }
}
