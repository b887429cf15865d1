// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ratio type: a numerator/denominator pair.
//!
//! Ratios are only ever generated with `numerator <= denominator / 2`; the
//! upper half of the numerator range mirrors the lower half about 0.5.

use std::fmt;

/// A ratio `numerator / denominator` between 0 and 1.
///
/// Equality is on the pair, not on the value: `1/2` and `2/4` are distinct
/// `Ratio`s even though they evaluate to the same `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: u32,
    denominator: u32,
}

impl Ratio {
    /// Create a new ratio.
    ///
    /// # Panics
    ///
    /// Panics if `numerator == 0` or `numerator >= denominator`.
    pub fn new(numerator: u32, denominator: u32) -> Self {
        assert!(
            numerator >= 1 && numerator < denominator,
            "Ratio out of range: {}/{}",
            numerator,
            denominator
        );
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(self) -> u32 {
        self.numerator
    }

    pub fn denominator(self) -> u32 {
        self.denominator
    }

    /// The quotient as computed by plain `f64` division.
    ///
    /// No normalization happens here: two pairs collapse to the same value
    /// only when their quotients are bit-identical.
    pub fn value(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Whether this ratio sits at an extremity for the given bound, i.e. has
    /// numerator 1 or numerator `bound - 1`.
    pub fn touches_extremity(self, bound: u32) -> bool {
        self.numerator == 1 || self.numerator == bound.saturating_sub(1)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
