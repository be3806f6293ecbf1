//! Construction-time error definitions.
//!
//! All predictor operations after construction are deterministic, bounded
//! state transitions with nothing transient to report, so the only error
//! surface is configuration validation. Contract violations at runtime
//! (an out-of-range thread id) are caller bugs and fail fast via assertions
//! rather than `Result`s.

use thiserror::Error;

/// Errors raised while validating a predictor configuration.
///
/// Any of these prevents the predictor from being constructed at all; there
/// is no degraded mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The prediction table size must be a power of two.
    ///
    /// The table is indexed through a bitmask of `size - 1`; any other size
    /// would alias entries unpredictably instead of failing loudly.
    #[error("prediction table size {size} is not a power of two")]
    TableSizeNotPowerOfTwo {
        /// The rejected table size.
        size: usize,
    },

    /// The history register width is outside the supported range.
    ///
    /// History registers are held in `u64` storage, so widths of 1 through
    /// 64 bits are representable.
    #[error("history register width {bits} is outside the supported range 1..=64")]
    HistoryBitsOutOfRange {
        /// The rejected register width in bits.
        bits: usize,
    },

    /// The saturating counter width is outside the supported range.
    ///
    /// Counters are held in `u8` storage, so widths of 1 through 8 bits are
    /// representable.
    #[error("saturating counter width {bits} is outside the supported range 1..=8")]
    CounterBitsOutOfRange {
        /// The rejected counter width in bits.
        bits: usize,
    },

    /// The predictor needs at least one hardware thread to track history for.
    #[error("predictor requires at least one hardware thread")]
    NoThreads,
}
