// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tween value holder and its spec.

use crate::Easing;

/// Duration and easing for one tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenSpec {
    /// Duration in milliseconds. Zero-duration tweens jump straight to the
    /// target on the first sample.
    pub duration_ms: u64,
    /// Easing applied to linear progress.
    pub easing: Easing,
}

impl TweenSpec {
    /// Create a spec with the given duration and easing.
    #[must_use]
    pub const fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// A linear tween with the given duration.
    #[must_use]
    pub const fn linear(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }
}

impl Default for TweenSpec {
    /// 300 ms with [`Easing::FastOutSlowIn`], the conventional timing for
    /// sheet open/settle/close transitions.
    fn default() -> Self {
        Self::new(300, Easing::FastOutSlowIn)
    }
}

/// A time-driven interpolation from `from` to `to`.
///
/// Tweens are passive: the host records when the tween started, and calls
/// [`sample`] with the elapsed time whenever it wants a value. Elapsed times
/// at or past the duration yield exactly `to`, so there is no residual
/// offset at completion.
///
/// [`sample`]: Tween::sample
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Value at elapsed time zero.
    pub from: f64,
    /// Value at and beyond the duration.
    pub to: f64,
    /// Timing parameters.
    pub spec: TweenSpec,
}

impl Tween {
    /// Create a tween between two values under `spec`.
    #[must_use]
    pub const fn new(from: f64, to: f64, spec: TweenSpec) -> Self {
        Self { from, to, spec }
    }

    /// The eased value at `elapsed_ms` since the tween started.
    #[must_use]
    pub fn sample(&self, elapsed_ms: u64) -> f64 {
        if self.is_finished(elapsed_ms) {
            return self.to;
        }
        // Not finished, so duration is non-zero.
        let linear = elapsed_ms as f64 / self.spec.duration_ms as f64;
        let progress = self.spec.easing.transform(linear);
        self.from + (self.to - self.from) * progress
    }

    /// Whether the tween has reached its target at `elapsed_ms`.
    #[must_use]
    pub const fn is_finished(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.spec.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_tween_interpolates_and_finishes_exactly() {
        let tween = Tween::new(600.0, 0.0, TweenSpec::linear(300));
        assert_eq!(tween.sample(0), 600.0);
        assert_eq!(tween.sample(150), 300.0);
        assert_eq!(tween.sample(300), 0.0);
        assert_eq!(tween.sample(10_000), 0.0);
        assert!(!tween.is_finished(299));
        assert!(tween.is_finished(300));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let tween = Tween::new(100.0, 500.0, TweenSpec::linear(0));
        assert_eq!(tween.sample(0), 500.0);
        assert!(tween.is_finished(0));
    }

    #[test]
    fn eased_tween_stays_between_endpoints() {
        let tween = Tween::new(500.0, 600.0, TweenSpec::default());
        for elapsed in (0..=300).step_by(10) {
            let value = tween.sample(elapsed);
            assert!((500.0..=600.0).contains(&value), "at {elapsed}: {value}");
        }
    }

    #[test]
    fn downward_tween_is_monotonically_decreasing() {
        let tween = Tween::new(600.0, 0.0, TweenSpec::default());
        let mut prev = tween.sample(0);
        for elapsed in (10..=300).step_by(10) {
            let value = tween.sample(elapsed);
            assert!(value <= prev + 1e-9, "rose at {elapsed}");
            prev = value;
        }
    }

    #[test]
    fn degenerate_tween_holds_its_value() {
        let tween = Tween::new(420.0, 420.0, TweenSpec::default());
        assert_eq!(tween.sample(0), 420.0);
        assert_eq!(tween.sample(150), 420.0);
        assert_eq!(tween.sample(300), 420.0);
    }
}
