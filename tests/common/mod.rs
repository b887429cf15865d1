// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use closest_ratios::{ClosestPair, RatioAccumulator};

/// Smallest adjacent gap over every numerator `1..d` (or `2..d-1` in
/// mid-pack mode) for every denominator up to `bound`, without using the
/// half-range symmetry.
pub fn brute_force_min_gap(bound: u32, mid_pack_only: bool) -> f64 {
    let (first, trim) = if mid_pack_only { (2, 2) } else { (1, 1) };
    let mut values: Vec<f64> = (2..=bound)
        .flat_map(|d| (first..=d.saturating_sub(trim)).map(move |n| n as f64 / d as f64))
        .collect();
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| a.to_bits() == b.to_bits());
    values
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min)
}

/// Feed `bounds` in order into a fresh accumulator, collecting each result.
pub fn run_bounds(bounds: &[u32], mid_pack_only: bool) -> Vec<ClosestPair> {
    let mut acc = RatioAccumulator::new();
    bounds
        .iter()
        .map(|&b| acc.extend_and_find_closest(b, mid_pack_only))
        .collect()
}

/// Ascending bounds starting at `start`, stepping by each increment.
pub fn ascending_bounds(start: u32, increments: &[u32]) -> Vec<u32> {
    let mut bound = start;
    let mut bounds = vec![start];
    for &step in increments {
        bound += step;
        bounds.push(bound);
    }
    bounds
}
