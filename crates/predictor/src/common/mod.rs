//! Common types shared across the predictor core.
//!
//! This module provides the building blocks used by the configuration layer
//! and the prediction unit:
//! 1. **Error Handling:** Construction-time validation errors.

/// Error type definitions.
pub mod error;

pub use error::ConfigError;
