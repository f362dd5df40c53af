// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Tween: host-ticked value interpolation.
//!
//! A [`Tween`] describes a time-driven interpolation from one scalar value
//! to another under a [`TweenSpec`] (duration plus [`Easing`]). It owns no
//! clock and schedules nothing: the host samples it with an elapsed time
//! each frame and decides when to stop. That keeps the sheet state
//! machine, and its tests, free of any real timing dependency.
//!
//! ```rust
//! use undersheet_tween::{Easing, Tween, TweenSpec};
//!
//! let tween = Tween::new(600.0, 0.0, TweenSpec::new(300, Easing::Linear));
//!
//! assert_eq!(tween.sample(0), 600.0);
//! assert_eq!(tween.sample(150), 300.0);
//! assert_eq!(tween.sample(300), 0.0);
//! assert!(tween.is_finished(300));
//! ```
//!
//! The default spec (300 ms, [`Easing::FastOutSlowIn`]) matches the timing
//! bottom-sheet hosts conventionally use for open/settle/close transitions.
//!
//! This crate is `no_std` and has no dependencies.

#![no_std]

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{Tween, TweenSpec};
