// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backdrop darkness derived from the live sheet height.
//!
//! The backdrop is the translucent full-screen layer behind the sheet. Its
//! darkness is a pure function of the live height; it is never stored, so it
//! can never drift out of sync with the sheet.

/// Backdrop opacity for a given live height.
///
/// Linear in the live height over `0..=(screen_height - keyboard_height)`:
/// `0.0` when fully retracted, `0.9` at full extension, and clamped at `0.9`
/// beyond it so an over-tall sheet never produces full black. Monotonic
/// non-decreasing in `live_height`.
///
/// A degenerate range (keyboard at least as tall as the screen) yields the
/// full-extension value.
#[must_use]
pub fn opacity(live_height: f64, screen_height: f64, keyboard_height: f64) -> f64 {
    const MAX_DARKNESS: f64 = 0.9;

    let range = screen_height - keyboard_height;
    if range <= 0.0 {
        return MAX_DARKNESS;
    }
    let extension = (live_height.max(0.0) / range).min(1.0);
    MAX_DARKNESS * extension
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retracted_is_clear_and_extended_is_capped() {
        assert_eq!(opacity(0.0, 800.0, 0.0), 0.0);
        assert!((opacity(800.0, 800.0, 0.0) - 0.9).abs() < 1e-9);
        // Beyond full extension stays at the cap.
        assert!((opacity(1200.0, 800.0, 0.0) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn opacity_is_monotonic_in_live_height() {
        let mut prev = opacity(0.0, 800.0, 0.0);
        for step in 1..=100 {
            let value = opacity(f64::from(step) * 10.0, 800.0, 0.0);
            assert!(value >= prev, "dipped at step {step}");
            prev = value;
        }
    }

    #[test]
    fn keyboard_shrinks_the_interpolation_range() {
        // With a 150px keyboard on an 800px screen, full darkness is
        // reached at 650px instead of 800px.
        assert!((opacity(650.0, 800.0, 150.0) - 0.9).abs() < 1e-9);
        assert!(opacity(650.0, 800.0, 0.0) < 0.9);
    }

    #[test]
    fn degenerate_range_is_fully_dark() {
        assert!((opacity(100.0, 800.0, 800.0) - 0.9).abs() < 1e-9);
        assert!((opacity(0.0, 800.0, 900.0) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn negative_live_height_is_treated_as_zero() {
        assert_eq!(opacity(-10.0, 800.0, 0.0), 0.0);
    }
}
