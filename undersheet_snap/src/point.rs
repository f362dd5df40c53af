// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied snap-point entries.

use core::fmt;
use core::str::FromStr;

/// One entry in a snap-point configuration.
///
/// Pixel entries pass through resolution unchanged; percent entries are
/// resolved against the current screen height. Percentages are expressed in
/// the `0..=100` range (`SnapPoint::Percent(55.0)` is 55% of the screen),
/// though values outside that range are not rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPoint {
    /// An absolute height in logical pixels.
    Px(f64),
    /// A height as a percentage of the screen height.
    Percent(f64),
}

impl SnapPoint {
    /// Resolve this entry to an absolute height for the given screen height.
    #[must_use]
    pub fn resolve(self, screen_height: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Percent(p) => screen_height * p / 100.0,
        }
    }
}

impl From<f64> for SnapPoint {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// Error parsing a [`SnapPoint`] from a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseSnapPointError {
    /// The input was empty (or only a `%` sign).
    Empty,
    /// The numeric part did not parse as a finite number.
    InvalidNumber,
}

impl fmt::Display for ParseSnapPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty snap point"),
            Self::InvalidNumber => write!(f, "snap point is not a valid number"),
        }
    }
}

impl core::error::Error for ParseSnapPointError {}

impl FromStr for SnapPoint {
    type Err = ParseSnapPointError;

    /// Parse `"<number>%"` as a percent entry or `"<number>"` as pixels.
    ///
    /// Surrounding whitespace is tolerated; the number must be finite.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "%" {
            return Err(ParseSnapPointError::Empty);
        }
        let (number, percent) = match s.strip_suffix('%') {
            Some(head) => (head.trim_end(), true),
            None => (s, false),
        };
        let value: f64 = number
            .parse()
            .map_err(|_| ParseSnapPointError::InvalidNumber)?;
        if !value.is_finite() {
            return Err(ParseSnapPointError::InvalidNumber);
        }
        Ok(if percent {
            Self::Percent(value)
        } else {
            Self::Px(value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_pixels_unchanged() {
        assert_eq!(SnapPoint::Px(500.0).resolve(800.0), 500.0);
    }

    #[test]
    fn resolves_percent_against_screen_height() {
        // 55% of an 800px screen.
        assert_eq!(SnapPoint::Percent(55.0).resolve(800.0), 440.0);
        assert_eq!(SnapPoint::Percent(100.0).resolve(640.0), 640.0);
    }

    #[test]
    fn parses_percent_and_pixel_strings() {
        assert_eq!("55%".parse::<SnapPoint>(), Ok(SnapPoint::Percent(55.0)));
        assert_eq!(" 40 % ".parse::<SnapPoint>(), Ok(SnapPoint::Percent(40.0)));
        assert_eq!("500".parse::<SnapPoint>(), Ok(SnapPoint::Px(500.0)));
        assert_eq!("12.5%".parse::<SnapPoint>(), Ok(SnapPoint::Percent(12.5)));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!("".parse::<SnapPoint>(), Err(ParseSnapPointError::Empty));
        assert_eq!("%".parse::<SnapPoint>(), Err(ParseSnapPointError::Empty));
        assert_eq!(
            "abc%".parse::<SnapPoint>(),
            Err(ParseSnapPointError::InvalidNumber)
        );
        assert_eq!(
            "NaN".parse::<SnapPoint>(),
            Err(ParseSnapPointError::InvalidNumber)
        );
    }

    #[test]
    fn from_f64_is_pixels() {
        assert_eq!(SnapPoint::from(320.0), SnapPoint::Px(320.0));
    }
}
