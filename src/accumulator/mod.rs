// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental accumulation of ratios and closest-pair search.
//!
//! The accumulator owns every distinct ratio value seen so far. Each call to
//! [`RatioAccumulator::extend_and_find_closest`] adds the ratios for the
//! denominators between the previous bound and the new one, re-sorts, and
//! scans adjacent values for the smallest gap.
//!
//! # Symmetry
//!
//! For a fixed denominator `d`, the ratios `n/d` and `(d-n)/d` mirror each
//! other about 0.5. Any pair of ratios in the upper half has a mirror-image
//! pair in the lower half with the same gap, and 0.5 itself separates the
//! halves. So only numerators `n <= d/2` are generated.
//!
//! # Floating point keys
//!
//! Values are keyed by their `f64` bit pattern. Two pairs are collapsed only
//! if `n1 as f64 / d1 as f64` and `n2 as f64 / d2 as f64` are bit-identical;
//! there is no fraction normalization. The first pair generated wins
//! (lower denominator first, then lower numerator).

pub mod errors;

pub use errors::PreconditionViolation;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::ratio::Ratio;

/// High-water mark of a fresh accumulator.
const INITIAL_HIGH_WATER_MARK: u32 = 2;

/// Result of one extension: the closest adjacent pair at the new bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair {
    /// Representation of the smaller value.
    pub lower: Ratio,
    /// Representation of the larger value.
    pub upper: Ratio,
    /// `upper.value() - lower.value()`.
    pub gap: f64,
    /// Neither ratio touches an extremity at the bound that produced this pair.
    pub is_mid_pack: bool,
}

/// Growing collection of unique ratio values.
///
/// There is no deletion: values are only ever added, and the high-water mark
/// only moves up.
#[derive(Debug, Clone)]
pub struct RatioAccumulator {
    /// Value bits to the first ratio that produced them.
    representations: HashMap<u64, Ratio>,
    /// Every key of `representations`, sorted ascending after each extension.
    values: Vec<f64>,
    /// Largest bound already incorporated.
    high_water_mark: u32,
}

impl RatioAccumulator {
    pub fn new() -> Self {
        Self {
            representations: HashMap::new(),
            values: Vec::new(),
            high_water_mark: INITIAL_HIGH_WATER_MARK,
        }
    }

    /// Smallest acceptable bound is one above this.
    pub fn degenerate_limit(mid_pack_only: bool) -> u32 {
        if mid_pack_only {
            4
        } else {
            2
        }
    }

    pub fn high_water_mark(&self) -> u32 {
        self.high_water_mark
    }

    /// Number of distinct values accumulated.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The canonical ratio for a value, if it has been generated.
    pub fn representation(&self, value: f64) -> Option<Ratio> {
        self.representations.get(&value.to_bits()).copied()
    }

    /// Check that `new_bound` may be passed to
    /// [`extend_and_find_closest`](Self::extend_and_find_closest).
    pub fn check_bound(
        &self,
        new_bound: u32,
        mid_pack_only: bool,
    ) -> Result<(), PreconditionViolation> {
        let minimum = Self::degenerate_limit(mid_pack_only);
        if new_bound <= minimum {
            return Err(PreconditionViolation::Degenerate {
                bound: new_bound,
                minimum,
            });
        }
        if new_bound <= self.high_water_mark {
            return Err(PreconditionViolation::OutOfOrder {
                bound: new_bound,
                high_water_mark: self.high_water_mark,
            });
        }
        Ok(())
    }

    /// Add all ratios with denominator up to `new_bound` and return the
    /// closest adjacent pair among everything accumulated.
    ///
    /// With `mid_pack_only`, numerator 1 is never generated (and, by
    /// symmetry, neither is `d - 1`).
    ///
    /// # Panics
    ///
    /// Panics if [`check_bound`](Self::check_bound) fails: the bound is in the
    /// degenerate range, or not strictly above the high-water mark.
    pub fn extend_and_find_closest(
        &mut self,
        new_bound: u32,
        mid_pack_only: bool,
    ) -> ClosestPair {
        if let Err(violation) = self.check_bound(new_bound, mid_pack_only) {
            panic!("{}", violation);
        }

        let first_numerator = if mid_pack_only { 2 } else { 1 };
        let before = self.values.len();
        // The previous bound is revisited; its ratios are already keys.
        for denominator in self.high_water_mark..=new_bound {
            for numerator in first_numerator..=denominator / 2 {
                let ratio = Ratio::new(numerator, denominator);
                let value = ratio.value();
                if let Entry::Vacant(slot) = self.representations.entry(value.to_bits()) {
                    slot.insert(ratio);
                    self.values.push(value);
                }
            }
        }
        self.high_water_mark = new_bound;
        self.values.sort_unstable_by(f64::total_cmp);

        debug!(
            bound = new_bound,
            mid_pack_only,
            added = self.values.len() - before,
            total = self.values.len(),
            "extended ratios"
        );

        let (low, high, gap) = self.closest_adjacent();
        let lower = self.representations[&low.to_bits()];
        let upper = self.representations[&high.to_bits()];
        let is_mid_pack =
            !lower.touches_extremity(new_bound) && !upper.touches_extremity(new_bound);

        ClosestPair {
            lower,
            upper,
            gap,
            is_mid_pack,
        }
    }

    /// Scan the sorted values for the smallest adjacent gap.
    ///
    /// The scan starts from 0.0, but that leading gap (at least `1/b`) always
    /// loses to the gap between `1/b` and `1/(b-1)` (or `2/b` and `2/(b-1)` in
    /// mid-pack mode), so the winning pair is always two real keys. Ties keep
    /// the first pair in sorted order.
    fn closest_adjacent(&self) -> (f64, f64, f64) {
        let mut previous = 0.0;
        let mut min_gap = 1.0;
        let mut pair = (0.0, 0.0);
        for &value in &self.values {
            if value - previous < min_gap {
                min_gap = value - previous;
                pair = (previous, value);
            }
            previous = value;
        }
        (pair.0, pair.1, min_gap)
    }
}

impl Default for RatioAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {} got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_new_accumulator() {
        let acc = RatioAccumulator::new();
        assert_eq!(acc.high_water_mark(), 2);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_bound_three() {
        let mut acc = RatioAccumulator::new();
        let closest = acc.extend_and_find_closest(3, false);

        assert_eq!(closest.lower, Ratio::new(1, 3));
        assert_eq!(closest.upper, Ratio::new(1, 2));
        assert_close(closest.gap, 0.5 - 1.0 / 3.0);
        assert!(!closest.is_mid_pack);
        assert_eq!(acc.len(), 2);
        assert_eq!(acc.high_water_mark(), 3);
    }

    #[test]
    fn test_bound_five_mid_pack() {
        let mut acc = RatioAccumulator::new();
        let closest = acc.extend_and_find_closest(5, true);

        assert_eq!(closest.lower, Ratio::new(2, 5));
        assert_eq!(closest.upper, Ratio::new(2, 4));
        assert_close(closest.gap, 0.1);
        assert!(closest.is_mid_pack);
        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn test_bound_four_pairs_extremities() {
        let mut acc = RatioAccumulator::new();
        let closest = acc.extend_and_find_closest(4, false);

        assert_eq!(closest.lower, Ratio::new(1, 4));
        assert_eq!(closest.upper, Ratio::new(1, 3));
        assert!(!closest.is_mid_pack);
        // 2/4 collapses into 1/2.
        assert_eq!(acc.len(), 3);
    }

    #[test]
    fn test_first_representation_wins() {
        let mut acc = RatioAccumulator::new();
        acc.extend_and_find_closest(8, false);

        assert_eq!(acc.representation(0.5), Some(Ratio::new(1, 2)));
        assert_eq!(acc.representation(0.25), Some(Ratio::new(1, 4)));
        assert_eq!(acc.representation(2.0 / 6.0), Some(Ratio::new(1, 3)));
        assert_eq!(acc.representation(0.9), None);
    }

    #[test]
    fn test_mid_pack_skips_numerator_one() {
        let mut acc = RatioAccumulator::new();
        acc.extend_and_find_closest(6, true);

        assert_eq!(acc.representation(0.5), Some(Ratio::new(2, 4)));
        assert_eq!(acc.representation(1.0 / 6.0), None);
        assert_eq!(acc.representation(3.0 / 6.0), Some(Ratio::new(2, 4)));
    }

    #[test]
    fn test_check_bound() {
        let acc = RatioAccumulator::new();
        assert_eq!(
            acc.check_bound(2, false),
            Err(PreconditionViolation::Degenerate { bound: 2, minimum: 2 })
        );
        assert_eq!(
            acc.check_bound(4, true),
            Err(PreconditionViolation::Degenerate { bound: 4, minimum: 4 })
        );
        assert!(acc.check_bound(3, false).is_ok());
        assert!(acc.check_bound(5, true).is_ok());
    }

    #[test]
    fn test_check_bound_out_of_order() {
        let mut acc = RatioAccumulator::new();
        acc.extend_and_find_closest(6, false);
        assert_eq!(
            acc.check_bound(6, false),
            Err(PreconditionViolation::OutOfOrder {
                bound: 6,
                high_water_mark: 6
            })
        );
        assert!(acc.check_bound(4, false).is_err());
        assert!(acc.check_bound(7, false).is_ok());
    }

    #[test]
    #[should_panic(expected = "Calling out of order")]
    fn test_same_bound_twice() {
        let mut acc = RatioAccumulator::new();
        acc.extend_and_find_closest(3, false);
        acc.extend_and_find_closest(3, false);
    }

    #[test]
    #[should_panic(expected = "Degenerate case")]
    fn test_degenerate_mid_pack() {
        let mut acc = RatioAccumulator::new();
        acc.extend_and_find_closest(4, true);
    }

    #[test]
    fn test_values_stay_sorted_and_unique() {
        let mut acc = RatioAccumulator::new();
        for bound in 3..=20 {
            acc.extend_and_find_closest(bound, false);
        }
        assert!(acc.values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(acc.values.len(), acc.representations.len());
    }

    #[test]
    fn test_equal_gaps_keep_first_pair() {
        let mut acc = RatioAccumulator::new();
        // 4/8, 5/8, 6/8 are exact in binary, so both adjacent gaps are 0.125.
        for numerator in 4..=6 {
            let ratio = Ratio::new(numerator, 8);
            acc.representations.insert(ratio.value().to_bits(), ratio);
            acc.values.push(ratio.value());
        }

        assert_eq!(acc.closest_adjacent(), (0.5, 0.625, 0.125));
    }
}
