// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the sheet controller: states, configuration, animation
//! handles, and host-facing events.

use alloc::vec::Vec;

use undersheet_snap::SnapPoint;
use undersheet_tween::TweenSpec;

/// The discrete state of the sheet.
///
/// `Dragging` is transient: it exists only between a drag-start and the
/// matching drag-end, and always resolves to `Closed` or `Settled` before
/// the next non-drag event is processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetState {
    /// Not presented; live height is (animating toward) zero.
    Closed,
    /// Committed to the snap height at this index.
    Settled(usize),
    /// Live height tracks the finger; no committed index.
    Dragging,
}

bitflags::bitflags! {
    /// Which external dismiss signals are allowed to close the sheet.
    ///
    /// Hosts mirroring the classic single "backdrop close" switch set both
    /// bits. A hardware back press is *consumed* by the sheet either way
    /// (the host suppresses its default behavior); the flag only decides
    /// whether it also closes the sheet.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DismissFlags: u8 {
        /// A tap on the backdrop closes the sheet.
        const BACKDROP_TAP  = 0b0000_0001;
        /// The hardware back signal closes the sheet.
        const HARDWARE_BACK = 0b0000_0010;
    }
}

/// Caller configuration for one sheet presentation.
///
/// Snap points must be supplied in ascending height order (index order *is*
/// presentation order) and should contain at least one entry; with an empty
/// list every open and gesture resolution becomes a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Snap points, ascending, resolved against the screen height.
    pub snap_points: Vec<SnapPoint>,
    /// Which dismiss signals may close the sheet.
    pub dismiss: DismissFlags,
    /// Timing for open/settle/close tweens.
    pub animation: TweenSpec,
}

impl SheetConfig {
    /// Configuration with the given snap points, no external dismiss
    /// signals, and the default animation timing.
    #[must_use]
    pub fn new(snap_points: Vec<SnapPoint>) -> Self {
        Self {
            snap_points,
            dismiss: DismissFlags::empty(),
            animation: TweenSpec::default(),
        }
    }

    /// Enable the given dismiss signals.
    #[must_use]
    pub fn with_dismiss(mut self, dismiss: DismissFlags) -> Self {
        self.dismiss = dismiss;
        self
    }

    /// Override the animation timing.
    #[must_use]
    pub fn with_animation(mut self, animation: TweenSpec) -> Self {
        self.animation = animation;
        self
    }
}

/// Identity of one requested animation.
///
/// A fresh token is minted for every [`AnimationRequest`]; the controller
/// only honors frames and completions carrying the latest token, so a
/// superseded tween can keep running (and eventually complete) on the host
/// side without corrupting sheet state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationToken(pub(crate) u64);

/// A tween the host should start running.
///
/// Produced by open/close/settle transitions. The host interpolates from
/// `from` to `to` under `spec` (see [`undersheet_tween::Tween`]), feeding
/// sampled values into [`SheetController::animation_frame`] and finally
/// calling [`SheetController::animation_complete`] with this `token`.
///
/// [`SheetController::animation_frame`]: crate::SheetController::animation_frame
/// [`SheetController::animation_complete`]: crate::SheetController::animation_complete
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    /// Identity to echo back in frame and completion calls.
    pub token: AnimationToken,
    /// Current live height at request time.
    pub from: f64,
    /// Target height.
    pub to: f64,
    /// Timing parameters.
    pub spec: TweenSpec,
}

/// Discrete notifications for host-side consumers.
///
/// Continuous outputs (live height, backdrop opacity) are polled via
/// getters instead; drain these after each controller call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetEvent {
    /// The committed snap index changed.
    IndexChanged(usize),
    /// The close tween completed; the host should remove the presentation.
    Dismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_flags_default_to_empty() {
        assert_eq!(DismissFlags::default(), DismissFlags::empty());
        assert!(!DismissFlags::default().contains(DismissFlags::BACKDROP_TAP));
    }

    #[test]
    fn config_builder_sets_fields() {
        let config = SheetConfig::new(alloc::vec![SnapPoint::Px(500.0)])
            .with_dismiss(DismissFlags::BACKDROP_TAP)
            .with_animation(TweenSpec::linear(100));
        assert_eq!(config.dismiss, DismissFlags::BACKDROP_TAP);
        assert_eq!(config.animation.duration_ms, 100);
    }
}
