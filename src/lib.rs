// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for the closest pair of distinct ratios with bounded denominator.
//!
//! Given a maximum denominator `b`, find the two distinct values `n1/d1` and
//! `n2/d2` (with `d1, d2 <= b`) that lie closest together in `(0, 1)`. The
//! open question is whether the closest pair is ever *not* at the
//! extremities, i.e. involves neither `1/b` nor `(b-1)/b`.
//!
//! # Architecture
//!
//! ## RatioAccumulator
//!
//! Owns every distinct ratio value generated so far, keyed by its `f64` bits,
//! plus a sorted list of those values and a high-water mark. Bounds are fed in
//! strictly ascending order; each call only generates the denominators above
//! the previous bound, then re-sorts and scans adjacent gaps.
//!
//! ## SearchDriver
//!
//! Runs the accumulator over `start..=max` and keeps two optima: the best
//! pair overall and the best mid-pack pair (neither ratio at an extremity).
//! A stop flag, raised by Ctrl-C, ends the loop between bounds.
//!
//! # Binaries
//!
//! - `closest-ratios <MAX_DENOM> [MID_PACK] [TRACE]`: search and summarize
//! - `cr-data <MAX_DENOM>`: CSV of mid-pack gaps against the extremity gap
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//! use closest_ratios::SearchDriver;
//!
//! let stop = AtomicBool::new(false);
//! let mut driver = SearchDriver::new(false);
//! let report = driver.run(10, &stop, |_| {});
//!
//! assert_eq!(report.completed, 8);
//! assert!(report.overall.is_some());
//! ```

pub mod accumulator;
pub mod cli;
pub mod driver;
pub mod interrupt;
pub mod ratio;
pub mod report;

// Re-export commonly used types
pub use accumulator::{ClosestPair, PreconditionViolation, RatioAccumulator};
pub use driver::{BoundResult, SearchDriver, SearchReport};
pub use ratio::Ratio;
