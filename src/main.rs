// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `closest-ratios <MAX_DENOM> [MID_PACK] [TRACE]`
//!
//! Searches every denominator bound up to `MAX_DENOM` and prints the closest
//! pair found overall (unless `MID_PACK`) and the closest mid-pack pair.
//! Ctrl-C stops the search early and prints what has been found so far.

use std::io::{self, Write};
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};

use closest_ratios::cli::{self, SearchArgs};
use closest_ratios::interrupt::install_interrupt_handler;
use closest_ratios::report::{Summary, TraceLine};
use closest_ratios::SearchDriver;

fn main() -> Result<()> {
    let args: SearchArgs = cli::parse_or_exit();
    cli::init_tracing();

    let stop = install_interrupt_handler().context("installing Ctrl-C handler")?;
    let trace = args.trace();
    let mut driver = SearchDriver::new(args.mid_pack());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut trace_error = None;
    let report = driver.run(args.max_denom, &stop, |result| {
        if trace && trace_error.is_none() {
            if let Err(err) = writeln!(out, "{}", TraceLine(result)) {
                trace_error = Some(err);
                stop.store(true, Ordering::Relaxed);
            }
        }
    });
    if let Some(err) = trace_error {
        return Err(err).context("writing trace output");
    }

    write!(out, "{}", Summary(&report)).context("writing summary")?;
    out.flush()?;
    Ok(())
}
