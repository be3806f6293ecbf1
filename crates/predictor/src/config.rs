//! Configuration system for the predictor core.
//!
//! This module defines the configuration structure used to parameterize the
//! predictor. It provides:
//! 1. **Defaults:** Baseline hardware constants (table size, history and
//!    counter widths, thread count).
//! 2. **Deserialization:** Configuration is supplied as JSON by the host
//!    simulator, or use `PredictorConfig::default()`.
//! 3. **Validation:** Structural checks that must pass before a predictor
//!    can be constructed.

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the predictor.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden by the host.
mod defaults {
    /// Default prediction table size (4096 saturating counters).
    ///
    /// Must be a power of two so the index mask `size - 1` is valid.
    pub const TABLE_SIZE: usize = 4096;

    /// Default speculative history register width (12 bits).
    pub const HISTORY_BITS: usize = 12;

    /// Default saturating counter width (2 bits, the classic
    /// strongly/weakly taken/not-taken scheme).
    pub const COUNTER_BITS: usize = 2;

    /// Default number of hardware threads tracked (1).
    pub const NUM_THREADS: usize = 1;
}

/// Predictor hardware configuration.
///
/// All fields have defaults, so a partial JSON document (or an empty `{}`)
/// deserializes to a usable configuration. Validation is separate from
/// deserialization: call [`PredictorConfig::validate`] (or construct the
/// predictor, which validates internally) before use.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictorConfig {
    /// Number of saturating counters in the prediction table.
    ///
    /// Must be a power of two.
    #[serde(default = "PredictorConfig::default_table_size")]
    pub table_size: usize,

    /// Width of each per-thread speculative history register, in bits (1..=64).
    #[serde(default = "PredictorConfig::default_history_bits")]
    pub history_bits: usize,

    /// Width of each saturating counter, in bits (1..=8).
    #[serde(default = "PredictorConfig::default_counter_bits")]
    pub counter_bits: usize,

    /// Number of hardware threads the predictor tracks history for.
    ///
    /// Thread ids passed to predictor operations must be below this count.
    #[serde(default = "PredictorConfig::default_num_threads")]
    pub num_threads: usize,
}

impl PredictorConfig {
    /// Returns the default prediction table size.
    fn default_table_size() -> usize {
        defaults::TABLE_SIZE
    }

    /// Returns the default history register width.
    fn default_history_bits() -> usize {
        defaults::HISTORY_BITS
    }

    /// Returns the default saturating counter width.
    fn default_counter_bits() -> usize {
        defaults::COUNTER_BITS
    }

    /// Returns the default hardware thread count.
    fn default_num_threads() -> usize {
        defaults::NUM_THREADS
    }

    /// Checks that the configuration describes a constructible predictor.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the table size is not a power of two,
    /// if the history or counter widths fall outside their representable
    /// ranges, or if the thread count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.table_size.is_power_of_two() {
            return Err(ConfigError::TableSizeNotPowerOfTwo {
                size: self.table_size,
            });
        }
        if !(1..=64).contains(&self.history_bits) {
            return Err(ConfigError::HistoryBitsOutOfRange {
                bits: self.history_bits,
            });
        }
        if !(1..=8).contains(&self.counter_bits) {
            return Err(ConfigError::CounterBitsOutOfRange {
                bits: self.counter_bits,
            });
        }
        if self.num_threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        Ok(())
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            table_size: defaults::TABLE_SIZE,
            history_bits: defaults::HISTORY_BITS,
            counter_bits: defaults::COUNTER_BITS,
            num_threads: defaults::NUM_THREADS,
        }
    }
}
