// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line plumbing shared by the `closest-ratios` and `cr-data` binaries.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exit code for missing or malformed arguments.
pub const USAGE_EXIT_CODE: i32 = 1;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Arguments of `closest-ratios`.
#[derive(Parser, Debug)]
#[command(
    name = "closest-ratios",
    version,
    about = "Find the closest pair of distinct ratios with denominator up to MAX_DENOM"
)]
pub struct SearchArgs {
    /// Search up to this denominator.
    #[arg(value_name = "MAX_DENOM", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_denom: u32,

    /// Ignore ratios at the extremities (a mid-pack pair is always reported if found).
    #[arg(value_name = "MID_PACK")]
    pub mid_pack: Option<String>,

    /// Print one line per denominator searched.
    #[arg(value_name = "TRACE")]
    pub trace: Option<String>,
}

impl SearchArgs {
    pub fn mid_pack(&self) -> bool {
        self.mid_pack.as_deref().is_some_and(flag_token)
    }

    pub fn trace(&self) -> bool {
        self.trace.as_deref().is_some_and(flag_token)
    }
}

/// Arguments of `cr-data`.
#[derive(Parser, Debug)]
#[command(
    name = "cr-data",
    version,
    about = "Print CSV of mid-pack closest gaps against the extremity gap, per denominator"
)]
pub struct DataArgs {
    /// Search up to this denominator.
    #[arg(value_name = "MAX_DENOM", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_denom: u32,
}

/// Interpret a boolean-like token.
///
/// Empty is false; otherwise anything not starting with `0`, `n` or `f`
/// (case-insensitive) is true.
pub fn flag_token(token: &str) -> bool {
    match token.chars().next() {
        None => false,
        Some(c) => !matches!(c.to_ascii_lowercase(), '0' | 'n' | 'f'),
    }
}

/// Parse the process arguments, exiting with [`USAGE_EXIT_CODE`] on error.
///
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(USAGE_EXIT_CODE);
            }
        },
    }
}

/// Send `tracing` output to stderr, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
