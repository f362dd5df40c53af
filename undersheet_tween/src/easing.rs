// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves over a linear `0..=1` fraction.

/// Easing applied to a tween's linear progress.
///
/// All variants map `0.0 → 0.0` and `1.0 → 1.0`; the non-linear ones are
/// standard cubic-bezier timing curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Accelerate from rest: bezier `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Decelerate to rest: bezier `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Accelerate then decelerate: bezier `(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// The material-design standard curve: bezier `(0.4, 0, 0.2, 1)`.
    #[default]
    FastOutSlowIn,
}

impl Easing {
    /// Apply the curve to a linear fraction, clamped into `0..=1`.
    #[must_use]
    pub fn transform(self, fraction: f64) -> f64 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Self::Linear => fraction,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Evaluate a CSS-style cubic bezier timing curve at `x`.
///
/// The curve runs from `(0, 0)` to `(1, 1)` with control points `(x1, y1)`
/// and `(x2, y2)`. Solving y-for-x needs the parametric `t` at the given
/// `x`; Newton-Raphson converges in a few steps for well-behaved timing
/// curves, with bisection as the fallback for flat spots.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Polynomial coefficients for one axis of the curve.
    fn coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        (a, b, c)
    }
    fn sample(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }
    fn derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Tolerance check using only arithmetic, no float intrinsics.
    fn near_zero(v: f64) -> bool {
        const EPSILON: f64 = 1e-7;
        v > -EPSILON && v < EPSILON
    }

    let (ax, bx, cx) = coefficients(x1, x2);
    let (ay, by, cy) = coefficients(y1, y2);

    let mut t = x;
    let mut converged = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - x;
        if near_zero(error) {
            converged = true;
            break;
        }
        let slope = derivative(ax, bx, cx, t);
        if near_zero(slope) {
            break;
        }
        t = (t - error / slope).clamp(0.0, 1.0);
    }

    if !converged {
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..32 {
            let error = sample(ax, bx, cx, t) - x;
            if near_zero(error) {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact_for_every_curve() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::FastOutSlowIn,
        ] {
            assert_eq!(easing.transform(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.transform(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn out_of_range_fractions_clamp() {
        assert_eq!(Easing::FastOutSlowIn.transform(-0.5), 0.0);
        assert_eq!(Easing::FastOutSlowIn.transform(1.5), 1.0);
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Easing::Linear.transform(0.25), 0.25);
        assert_eq!(Easing::Linear.transform(0.75), 0.75);
    }

    #[test]
    fn ease_in_out_is_symmetric_around_the_midpoint() {
        let a = Easing::EaseInOut.transform(0.25);
        let b = Easing::EaseInOut.transform(0.75);
        assert!((a + b - 1.0).abs() < 1e-6, "a = {a}, b = {b}");
        // Slow start, slow finish.
        assert!(a < 0.25);
        assert!(b > 0.75);
    }

    #[test]
    fn curves_are_monotonic_over_the_unit_interval() {
        for easing in [
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::FastOutSlowIn,
        ] {
            let mut prev = 0.0;
            for step in 1..=100 {
                let value = easing.transform(f64::from(step) / 100.0);
                assert!(value >= prev - 1e-9, "{easing:?} dipped at step {step}");
                prev = value;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_front_loads_progress() {
        // The material curve covers well over half the distance by t = 0.5.
        let half = Easing::FastOutSlowIn.transform(0.5);
        assert!(half > 0.6, "half = {half}");
    }
}
