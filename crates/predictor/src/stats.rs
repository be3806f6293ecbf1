//! Prediction statistics collection.
//!
//! This module tracks predictor activity for the host's reporting surface.
//! It provides:
//! 1. **Token issue counts:** Lookups, unconditional branches, and
//!    target-buffer-miss recordings.
//! 2. **Resolution counts:** Normal and squashed resolutions, full-squash
//!    notifications.
//! 3. **Accuracy:** Misprediction count and derived misprediction rate.

/// Activity counters for a direction predictor.
///
/// Every counter corresponds to one predictor operation; the three
/// token-issuing counts together equal the number of tokens ever created,
/// and the resolution/squash counts together equal the number consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PredictorStats {
    /// Conditional-branch lookups performed.
    pub lookups: u64,
    /// Unconditional branches recorded.
    pub uncond_branches: u64,
    /// Branches recorded through the target-buffer-miss hook.
    pub btb_updates: u64,

    /// Non-squashed resolutions (each trains the table once).
    pub updates: u64,
    /// Resolutions of squashed branches (each rewinds history once).
    pub squashed_updates: u64,
    /// Full-squash notifications that consumed a token.
    pub squashes: u64,

    /// Non-squashed resolutions whose outcome disagreed with the prediction.
    pub mispredictions: u64,
}

impl PredictorStats {
    /// Fraction of non-squashed resolutions that were mispredicted.
    ///
    /// Returns 0.0 before any branch has resolved.
    pub fn mispredict_rate(&self) -> f64 {
        if self.updates == 0 {
            0.0
        } else {
            self.mispredictions as f64 / self.updates as f64
        }
    }
}
