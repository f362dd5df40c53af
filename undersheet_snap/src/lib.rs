// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Undersheet Snap: snap-point resolution for bottom sheets.
//!
//! A bottom sheet settles at one of several configured heights ("snap
//! points"). Callers describe those heights either as absolute pixel values
//! or as percentages of the current screen height; this crate resolves that
//! description into absolute heights and answers the two pure questions the
//! rest of the stack asks about them:
//!
//! - [`SnapHeights::settle_index`]: given a candidate height at the end of a
//!   drag, which snap index should the sheet settle at?
//! - [`SnapHeights::dismiss_threshold`]: below which candidate height should
//!   the sheet close instead of settling?
//!
//! The core concepts are:
//!
//! - [`SnapPoint`]: one caller-supplied entry, pixels or percent. Parseable
//!   from strings like `"55%"` via [`FromStr`](core::str::FromStr).
//! - [`SnapHeights`]: the resolved, absolute heights in caller order. Input
//!   order is preserved (never sorted); callers are expected to supply
//!   ascending heights, and index order *is* caller order.
//!
//! Resolution is a pure function of the snap-point list and the screen
//! height, so it is cheap to recompute eagerly whenever either changes.
//!
//! ## Minimal example
//!
//! ```rust
//! use undersheet_snap::{SnapHeights, SnapPoint};
//!
//! // A half-screen and a 600px snap on an 800px-tall screen.
//! let points = ["50%".parse::<SnapPoint>().unwrap(), SnapPoint::Px(600.0)];
//! let heights = SnapHeights::resolve(&points, 800.0);
//!
//! assert_eq!(heights.as_slice(), &[400.0, 600.0]);
//!
//! // A drag ending at 420px settles at the lower snap…
//! assert_eq!(heights.settle_index(420.0), Some(0));
//! // …and one ending below two-thirds of the smallest snap closes the sheet.
//! assert!(250.0 < heights.dismiss_threshold().unwrap());
//! ```
//!
//! This crate deliberately does **not** know about gestures, animation, or
//! any view system; those live in the sibling `undersheet` crates.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod heights;
mod point;

pub use heights::SnapHeights;
pub use point::{ParseSnapPointError, SnapPoint};
