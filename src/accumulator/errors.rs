// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for accumulator preconditions.

use thiserror::Error;

/// Ways a bound can be unacceptable to [`RatioAccumulator`](super::RatioAccumulator).
///
/// Both indicate a bug in the caller: bounds must be fed in strictly
/// ascending order, starting above the degenerate range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionViolation {
    /// Bound too small for any valid numerator range to exist.
    #[error("Degenerate case: bound {bound} must exceed {minimum}")]
    Degenerate { bound: u32, minimum: u32 },

    /// Bound not strictly greater than the high-water mark.
    #[error("Calling out of order: bound {bound} must exceed high-water mark {high_water_mark}")]
    OutOfOrder { bound: u32, high_water_mark: u32 },
}
