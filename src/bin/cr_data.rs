// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `cr-data <MAX_DENOM>`
//!
//! Prints a CSV row per denominator bound (from 5) with the closest mid-pack
//! gap, the extremity gap `1/(n-1) - 1/n`, and the winning mid-pack pair.

use std::io::{self, Write};
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};

use closest_ratios::cli::{self, DataArgs};
use closest_ratios::interrupt::install_interrupt_handler;
use closest_ratios::report::{DataRow, HEADER};
use closest_ratios::SearchDriver;

fn main() -> Result<()> {
    let args: DataArgs = cli::parse_or_exit();
    cli::init_tracing();

    let stop = install_interrupt_handler().context("installing Ctrl-C handler")?;
    let mut driver = SearchDriver::new(true);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", HEADER).context("writing header")?;

    let mut write_error = None;
    driver.run(args.max_denom, &stop, |result| {
        if write_error.is_none() {
            if let Err(err) = writeln!(out, "{}", DataRow::from_result(result)) {
                write_error = Some(err);
                stop.store(true, Ordering::Relaxed);
            }
        }
    });
    if let Some(err) = write_error {
        return Err(err).context("writing row");
    }

    out.flush()?;
    Ok(())
}
