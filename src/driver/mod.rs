// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search driver.
//!
//! Feeds an ascending range of bounds into a [`RatioAccumulator`] and keeps
//! two running optima:
//! - the overall closest pair, whichever ratios it involves
//! - the closest pair that stays away from both extremities (mid-pack)
//!
//! The loop checks a shared stop flag before each bound. Setting the flag
//! (normally from a Ctrl-C handler) ends the loop gracefully; results for
//! the bounds already processed are kept and reported.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use crate::accumulator::{ClosestPair, RatioAccumulator};

/// First bound searched in mid-pack mode.
pub const MID_PACK_START_BOUND: u32 = 5;

/// First bound searched when all ratios are considered.
pub const OVERALL_START_BOUND: u32 = 3;

/// A closest pair together with the bound that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundResult {
    pub bound: u32,
    pub closest: ClosestPair,
}

/// Outcome of a [`SearchDriver::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    /// Whether extremity ratios were excluded from the search.
    pub mid_pack_only: bool,
    /// First bound of the range.
    pub start_bound: u32,
    /// Number of bounds fully processed.
    pub completed: u32,
    /// The stop flag ended the loop before `max_bound` was reached.
    pub interrupted: bool,
    /// Smallest gap at any bound.
    pub overall: Option<BoundResult>,
    /// Smallest gap among mid-pack results.
    pub mid_pack: Option<BoundResult>,
}

/// Runs the accumulator across bounds and tracks the best results.
#[derive(Debug, Clone)]
pub struct SearchDriver {
    accumulator: RatioAccumulator,
    mid_pack_only: bool,
}

impl SearchDriver {
    pub fn new(mid_pack_only: bool) -> Self {
        Self {
            accumulator: RatioAccumulator::new(),
            mid_pack_only,
        }
    }

    /// Smallest bound at which a non-degenerate pair exists in this mode.
    pub fn start_bound(&self) -> u32 {
        if self.mid_pack_only {
            MID_PACK_START_BOUND
        } else {
            OVERALL_START_BOUND
        }
    }

    pub fn accumulator(&self) -> &RatioAccumulator {
        &self.accumulator
    }

    /// Search every bound from the start bound up to `max_bound` inclusive.
    ///
    /// `on_bound` is called with each result as soon as it is computed. The
    /// stop flag is checked before every bound; a flag set from inside
    /// `on_bound` takes effect before the next one.
    ///
    /// A driver that has already run continues from one above its
    /// high-water mark, so bounds are never revisited.
    pub fn run<F>(&mut self, max_bound: u32, stop: &AtomicBool, mut on_bound: F) -> SearchReport
    where
        F: FnMut(&BoundResult),
    {
        let start_bound = self
            .start_bound()
            .max(self.accumulator.high_water_mark() + 1);
        let mut report = SearchReport {
            mid_pack_only: self.mid_pack_only,
            start_bound,
            completed: 0,
            interrupted: false,
            overall: None,
            mid_pack: None,
        };
        let mut overall_gap = 1.0;
        let mut mid_pack_gap = 1.0;

        info!(start_bound, max_bound, mid_pack_only = self.mid_pack_only, "starting search");

        for bound in start_bound..=max_bound {
            if stop.load(Ordering::Relaxed) {
                warn!(completed = report.completed, "search interrupted");
                report.interrupted = true;
                break;
            }

            let closest = self
                .accumulator
                .extend_and_find_closest(bound, self.mid_pack_only);
            let result = BoundResult { bound, closest };
            on_bound(&result);

            if closest.gap < overall_gap {
                overall_gap = closest.gap;
                report.overall = Some(result);
            }
            if closest.is_mid_pack && closest.gap < mid_pack_gap {
                mid_pack_gap = closest.gap;
                report.mid_pack = Some(result);
            }
            report.completed += 1;
        }

        info!(
            completed = report.completed,
            ratios = self.accumulator.len(),
            "search finished"
        );
        report
    }
}
