// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text output for search results.
//!
//! - `summary`: the closing report of a search and per-bound trace lines
//! - `table`: CSV rows comparing mid-pack gaps against the extremity gap

pub mod summary;
pub mod table;

pub use summary::{Summary, TraceLine};
pub use table::{extremity_gap, DataRow, HEADER};
