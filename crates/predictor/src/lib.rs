//! Speculative branch-direction predictor core.
//!
//! This crate implements a single-table, history-indexed direction predictor
//! with the following pieces:
//! 1. **History tracker:** One speculative history register per hardware
//!    thread, updated on prediction, resolution, and rollback.
//! 2. **Pattern history table:** A power-of-two table of saturating counters
//!    indexed by a NAND-style hash of branch address and history.
//! 3. **Orchestration:** Token-based lookup/resolve/squash lifecycle keeping
//!    speculative history consistent across mispredictions.
//! 4. **Configuration:** Hierarchical config with defaults, JSON
//!    deserialization, and construction-time validation.
//!
//! The host pipeline drives the predictor through the
//! [`DirectionPredictor`] trait: `lookup` issues a prediction and a
//! [`PredictionToken`], and the pipeline later hands the token back to
//! exactly one of `update` (branch resolved) or `squash` (speculative work
//! discarded).

/// Common types shared across the predictor (error definitions).
pub mod common;
/// Predictor configuration (defaults, validation, JSON deserialization).
pub mod config;
/// Branch-prediction unit (history tracker, pattern table, orchestration).
pub mod bpu;
/// Prediction statistics collection.
pub mod stats;

/// Root configuration type; use `PredictorConfig::default()` or deserialize from JSON.
pub use crate::config::PredictorConfig;
/// Construction-time validation errors.
pub use crate::common::ConfigError;
/// The direction-prediction interface the host pipeline calls through.
pub use crate::bpu::DirectionPredictor;
/// The single predictor implementation; construct with `NandSharePredictor::new`.
pub use crate::bpu::NandSharePredictor;
/// Per-prediction handle consumed by `update` or `squash`.
pub use crate::bpu::PredictionToken;
/// Counters describing predictor activity.
pub use crate::stats::PredictorStats;
