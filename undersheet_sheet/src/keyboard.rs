// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard reflow: keep a settled sheet above the on-screen keyboard.
//!
//! The policy fires only while the sheet is settled; during a drag the
//! candidate-height formula already subtracts the keyboard height live, so
//! no separate reconciliation is needed there.

/// Live height for a settled sheet while the keyboard is visible.
///
/// If the snap height plus the keyboard would overflow the screen, the sheet
/// shrinks by the keyboard height to make room (never below zero); the
/// committed snap index is unchanged. If the sheet fits, the snap height is
/// kept as-is. When the keyboard hides, callers restore the live height to
/// exactly the snap height.
#[must_use]
pub fn reflow_height(snap_height: f64, keyboard_height: f64, screen_height: f64) -> f64 {
    if snap_height + keyboard_height > screen_height {
        (snap_height - keyboard_height).max(0.0)
    } else {
        snap_height
    }
}
