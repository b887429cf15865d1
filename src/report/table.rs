// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CSV table of mid-pack results.
//!
//! Each row sets the closest mid-pack gap at a bound against the gap between
//! the two extremity ratios `1/(n-1)` and `1/n` at that bound.

use std::fmt;

use crate::driver::BoundResult;

/// Column names, in order.
pub const HEADER: &str =
    "max_denom,mp_diff,extrm_diff,mp_ratio1_num,mp_ratio1_denom,mp_ratio2_num,mp_ratio2_denom";

/// Gap between the extremity ratios `1/(bound-1)` and `1/bound`.
///
/// # Panics
///
/// Panics if `bound < 2`.
pub fn extremity_gap(bound: u32) -> f64 {
    assert!(bound >= 2, "Extremity gap undefined for bound {}", bound);
    1.0 / (bound - 1) as f64 - 1.0 / bound as f64
}

/// One CSV row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRow {
    pub bound: u32,
    pub mid_pack_gap: f64,
    pub extremity_gap: f64,
    pub ratio1: (u32, u32),
    pub ratio2: (u32, u32),
}

impl DataRow {
    pub fn from_result(result: &BoundResult) -> Self {
        let BoundResult { bound, closest } = *result;
        Self {
            bound,
            mid_pack_gap: closest.gap,
            extremity_gap: extremity_gap(bound),
            ratio1: (closest.lower.numerator(), closest.lower.denominator()),
            ratio2: (closest.upper.numerator(), closest.upper.denominator()),
        }
    }
}

impl fmt::Display for DataRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.bound,
            self.mid_pack_gap,
            self.extremity_gap,
            self.ratio1.0,
            self.ratio1.1,
            self.ratio2.0,
            self.ratio2.1
        )
    }
}
