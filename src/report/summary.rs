// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable search summary.

use std::fmt;

use crate::driver::{BoundResult, SearchReport};

/// Display wrapper for the end-of-search report.
///
/// The overall slot is only shown when extremities were part of the search;
/// the mid-pack slot is always shown.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a>(pub &'a SearchReport);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        if report.interrupted {
            writeln!(f, "Interrupted after {} loops...", report.completed)?;
        }
        if !report.mid_pack_only {
            write_slot(f, report.overall.as_ref(), "overall")?;
        }
        write_slot(f, report.mid_pack.as_ref(), "midpack")
    }
}

fn write_slot(f: &mut fmt::Formatter<'_>, slot: Option<&BoundResult>, scope: &str) -> fmt::Result {
    match slot {
        None => writeln!(f, "\nNo {} closest ratios found", scope),
        Some(result) => {
            writeln!(f, "\nClosest {} ratios found:", scope)?;
            writeln!(
                f,
                "For max denom {}: {} and {}, diff = {:.12}",
                result.bound, result.closest.lower, result.closest.upper, result.closest.gap
            )
        }
    }
}

/// One progress line, emitted per bound when tracing is enabled.
#[derive(Debug, Clone, Copy)]
pub struct TraceLine<'a>(pub &'a BoundResult);

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let BoundResult { bound, closest } = self.0;
        write!(
            f,
            "{}: {}, {}, {:.12}, {}",
            bound, closest.lower, closest.upper, closest.gap, closest.is_mid_pack
        )
    }
}
