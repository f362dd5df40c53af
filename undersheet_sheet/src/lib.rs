// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Sheet: the headless bottom-sheet state machine.
//!
//! A bottom sheet slides up from the screen edge, can be dragged, settles at
//! one of several configured snap heights, and dismisses itself when dragged
//! low enough or flung downward fast enough. This crate owns the discrete
//! sheet state and the authoritative live height, and mediates every
//! transition: explicit open/close calls, drag gestures (resolved via
//! `undersheet_drag`), keyboard reflow, and animation completions.
//!
//! It is deliberately headless. Rendering, gesture recognition, keyboard
//! detection, and the animation clock all live in the host; the
//! [`SheetController`] consumes ordered host callbacks and hands back
//! [`AnimationRequest`]s describing the tweens the host should run.
//!
//! ## Driving the controller
//!
//! The host contract, in order of a typical lifecycle:
//!
//! 1. Construct with a [`SheetConfig`] and the screen height; snap points
//!    resolve eagerly.
//! 2. Call [`SheetController::mount`] and run the returned request: the
//!    sheet auto-opens to its first snap height.
//! 3. Forward gesture events to `drag_start` / `drag_move` / `drag_end`,
//!    keyboard events to `keyboard_shown` / `keyboard_hidden`, and dismiss
//!    signals to `backdrop_tap` / `back_pressed`.
//! 4. For each [`AnimationRequest`], drive a tween (for example
//!    [`undersheet_tween::Tween`]) and feed values back through
//!    [`SheetController::animation_frame`], then report
//!    [`SheetController::animation_complete`]. Requests carry an
//!    [`AnimationToken`]; a newer request supersedes an older one, and
//!    frames or completions for a superseded token are discarded, never
//!    applied.
//! 5. After any call, read [`SheetController::live_height`] and
//!    [`SheetController::backdrop_opacity`] to render, and drain
//!    [`SheetEvent`]s for discrete notifications. [`SheetEvent::Dismissed`]
//!    fires only once the close tween completes; the host then removes the
//!    presentation.
//!
//! ```rust
//! use kurbo::Point;
//! use undersheet_sheet::{DismissFlags, SheetConfig, SheetController, SheetState};
//! use undersheet_snap::SnapPoint;
//!
//! let config = SheetConfig::new(vec![SnapPoint::Px(500.0), SnapPoint::Px(600.0)])
//!     .with_dismiss(DismissFlags::all());
//! let mut sheet = SheetController::new(config, 800.0);
//!
//! // Mount auto-opens to the first snap.
//! let open = sheet.mount().unwrap();
//! assert_eq!(open.to, 500.0);
//! sheet.animation_frame(open.token, 250.0);
//! assert!(sheet.animation_complete(open.token));
//! assert_eq!(sheet.state(), SheetState::Settled(0));
//! assert_eq!(sheet.live_height(), 500.0);
//!
//! // Drag up past the midpoint and release: settle at the larger snap.
//! sheet.drag_start(Point::new(40.0, 300.0));
//! sheet.drag_move(Point::new(40.0, 220.0));
//! let settle = sheet.drag_end(Point::new(40.0, 220.0), -50.0).unwrap();
//! assert_eq!(settle.to, 600.0);
//! ```
//!
//! All state transitions happen on the single host thread; the interleaving
//! hazards (a keyboard notification mid-drag, a completion for a superseded
//! tween) are handled by the controller, not by locking.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod backdrop;
mod controller;
pub mod keyboard;
mod types;

pub use controller::SheetController;
pub use types::{
    AnimationRequest, AnimationToken, DismissFlags, SheetConfig, SheetEvent, SheetState,
};

// Re-exported so hosts can configure and drive animations without naming the
// leaf crates directly.
pub use undersheet_snap::{SnapHeights, SnapPoint};
pub use undersheet_tween::{Easing, Tween, TweenSpec};
