// Copyright 2025 the Undersheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved snap heights and nearest-bucket selection.

use smallvec::SmallVec;

use crate::SnapPoint;

/// The resolved, absolute snap heights for one sheet, in caller order.
///
/// Input order is preserved; callers are expected to supply ascending
/// heights, and the rest of the stack treats index `0` as the smallest/first
/// snap and the last index as the largest. An empty set is representable;
/// every query on it returns `None`, so hosts with no configured snap points
/// degrade to no-ops rather than panicking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapHeights {
    heights: SmallVec<[f64; 4]>,
}

impl SnapHeights {
    /// Resolve a snap-point list against the given screen height.
    ///
    /// Pure and idempotent: resolving the same inputs twice yields the same
    /// heights. Recompute whenever the point list or the screen height
    /// changes.
    #[must_use]
    pub fn resolve(points: &[SnapPoint], screen_height: f64) -> Self {
        Self {
            heights: points.iter().map(|p| p.resolve(screen_height)).collect(),
        }
    }

    /// Number of snap heights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if no snap points were configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// The height at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.heights.get(index).copied()
    }

    /// The smallest/first snap height.
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.heights.first().copied()
    }

    /// The largest/last snap height.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.heights.last().copied()
    }

    /// All resolved heights, in caller order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.heights
    }

    /// The candidate height below which a drag closes the sheet instead of
    /// settling: two-thirds of the smallest snap height.
    #[must_use]
    pub fn dismiss_threshold(&self) -> Option<f64> {
        self.first().map(|first| first / 3.0 * 2.0)
    }

    /// Choose the snap index a candidate height should settle at.
    ///
    /// This is a nearest-*midpoint* bucketing rule, not nearest by absolute
    /// distance in general:
    ///
    /// - below the first height → index `0`,
    /// - above the last height → the last index,
    /// - otherwise, scan consecutive pairs in order and pick the side of the
    ///   pair's midpoint the candidate falls on; the lower-bound check runs
    ///   first, so an exact midpoint ties to the lower index.
    ///
    /// The scan is order-dependent first-match on purpose: changing it to a
    /// true nearest-distance search would change observable settle points.
    ///
    /// Returns `None` when no snap points are configured.
    #[must_use]
    pub fn settle_index(&self, candidate: f64) -> Option<usize> {
        let first = self.first()?;
        let last = self.last()?;
        if candidate < first {
            return Some(0);
        }
        if candidate > last {
            return Some(self.heights.len() - 1);
        }
        for i in 1..self.heights.len() {
            let lo = self.heights[i - 1];
            let hi = self.heights[i];
            let mid = lo + (hi - lo) / 2.0;
            if lo <= candidate && candidate <= mid {
                return Some(i - 1);
            }
            if mid <= candidate && candidate <= hi {
                return Some(i);
            }
        }
        // Single snap point (candidate == first == last), or a non-ascending
        // list in violation of the caller-order precondition.
        Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(values: &[f64]) -> SnapHeights {
        let points: alloc::vec::Vec<SnapPoint> =
            values.iter().map(|&v| SnapPoint::Px(v)).collect();
        SnapHeights::resolve(&points, 800.0)
    }

    #[test]
    fn resolve_is_idempotent() {
        let points = [SnapPoint::Px(500.0), SnapPoint::Percent(75.0)];
        let a = SnapHeights::resolve(&points, 800.0);
        let b = SnapHeights::resolve(&points, 800.0);
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[500.0, 600.0]);
    }

    #[test]
    fn order_is_preserved_not_sorted() {
        // Callers own the order; resolution must not reorder entries.
        let points = [SnapPoint::Px(600.0), SnapPoint::Px(500.0)];
        let h = SnapHeights::resolve(&points, 800.0);
        assert_eq!(h.as_slice(), &[600.0, 500.0]);
    }

    #[test]
    fn empty_set_answers_none() {
        let h = SnapHeights::resolve(&[], 800.0);
        assert!(h.is_empty());
        assert_eq!(h.settle_index(100.0), None);
        assert_eq!(h.dismiss_threshold(), None);
        assert_eq!(h.first(), None);
        assert_eq!(h.last(), None);
    }

    #[test]
    fn dismiss_threshold_is_two_thirds_of_first() {
        let h = heights(&[500.0, 600.0]);
        let threshold = h.dismiss_threshold().unwrap();
        assert!((threshold - 500.0 / 3.0 * 2.0).abs() < 1e-9);
        // 300 is below the threshold, 340 above.
        assert!(300.0 < threshold);
        assert!(340.0 > threshold);
    }

    #[test]
    fn candidates_below_first_clamp_to_index_zero() {
        let h = heights(&[500.0, 600.0]);
        assert_eq!(h.settle_index(100.0), Some(0));
        assert_eq!(h.settle_index(499.9), Some(0));
    }

    #[test]
    fn candidates_above_last_clamp_to_last_index() {
        let h = heights(&[500.0, 600.0]);
        assert_eq!(h.settle_index(700.0), Some(1));
    }

    #[test]
    fn midpoint_bucketing_with_tie_to_lower_index() {
        let h = heights(&[500.0, 600.0]);
        // Just below the midpoint → lower snap.
        assert_eq!(h.settle_index(549.0), Some(0));
        // Just above → upper snap.
        assert_eq!(h.settle_index(551.0), Some(1));
        // Exact midpoint: the lower-bound check runs first and wins the tie.
        assert_eq!(h.settle_index(550.0), Some(0));
    }

    #[test]
    fn first_matching_pair_wins_across_three_snaps() {
        let h = heights(&[200.0, 400.0, 800.0]);
        assert_eq!(h.settle_index(250.0), Some(0));
        assert_eq!(h.settle_index(350.0), Some(1));
        // 400 is the shared boundary of both pairs; the first pair claims it.
        assert_eq!(h.settle_index(400.0), Some(1));
        assert_eq!(h.settle_index(500.0), Some(1));
        assert_eq!(h.settle_index(700.0), Some(2));
    }

    #[test]
    fn single_snap_point_always_settles_at_zero() {
        let h = heights(&[500.0]);
        assert_eq!(h.settle_index(100.0), Some(0));
        assert_eq!(h.settle_index(500.0), Some(0));
        assert_eq!(h.settle_index(900.0), Some(0));
    }
}
