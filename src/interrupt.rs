// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ctrl-C handling.
//!
//! The handler only raises a flag; [`SearchDriver::run`](crate::driver::SearchDriver::run)
//! reads it between bounds, so an interrupted search still reports everything
//! completed so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Install a process-wide SIGINT handler and return the flag it sets.
///
/// Can only succeed once per process.
pub fn install_interrupt_handler() -> Result<Arc<AtomicBool>, ctrlc::Error> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;
    Ok(stop)
}
