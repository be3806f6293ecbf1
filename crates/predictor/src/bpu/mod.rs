//! Branch-prediction unit (BPU).
//!
//! This module contains the speculative direction predictor: the per-thread
//! history tracker, the pattern history table of saturating counters, and
//! the orchestrating predictor that ties their lifecycles together through
//! prediction tokens.

pub use self::nandshare::{NandSharePredictor, PredictionToken};

/// Saturating confidence counters.
pub mod counter;

/// Per-thread speculative history registers.
pub mod history;

/// Pattern history table with NAND-style indexing.
pub mod pht;

/// The orchestrating predictor and its token lifecycle.
pub mod nandshare;

/// Trait for speculative direction-prediction units.
///
/// Defines the interface the host pipeline drives: each in-flight branch
/// obtains a [`PredictionToken`] from exactly one of the three entry
/// operations (`lookup`, `uncond_branch`, `btb_update`) and hands it back to
/// exactly one of the two terminal operations (`update`, `squash`). Tokens
/// are move-only, so double resolution of the same branch is rejected at
/// compile time.
pub trait DirectionPredictor {
    /// Predicts whether the conditional branch at `addr` will be taken.
    ///
    /// Speculatively folds the predicted outcome into the thread's history
    /// register before returning.
    ///
    /// # Arguments
    ///
    /// * `tid` - Hardware thread id of the branch.
    /// * `addr` - Program counter of the branch instruction.
    ///
    /// # Returns
    ///
    /// A tuple `(taken, token)` where `taken` is the predicted direction and
    /// `token` must later be passed to [`DirectionPredictor::update`] or
    /// [`DirectionPredictor::squash`].
    fn lookup(&mut self, tid: usize, addr: u64) -> (bool, PredictionToken);

    /// Records a branch that is statically known to be taken.
    ///
    /// Used for unconditional jumps: there is no direction to predict, so
    /// no table lookup happens, but the branch still participates in history
    /// and token bookkeeping exactly like a predicted-taken branch.
    ///
    /// # Arguments
    ///
    /// * `tid` - Hardware thread id of the branch.
    /// * `pc` - Program counter of the jump instruction.
    fn uncond_branch(&mut self, tid: usize, pc: u64) -> PredictionToken;

    /// Records a branch discovered through a target-buffer miss.
    ///
    /// The branch has no predicted direction yet, so instead of shifting a
    /// new outcome into the history register this clears only its newest
    /// bit. The asymmetry with `lookup` is deliberate and load-bearing.
    ///
    /// # Arguments
    ///
    /// * `tid` - Hardware thread id of the branch.
    /// * `addr` - Program counter of the branch instruction.
    fn btb_update(&mut self, tid: usize, addr: u64) -> PredictionToken;

    /// Resolves a branch with its actual outcome, consuming its token.
    ///
    /// For a squashed branch this rewinds the thread's history to the value
    /// captured at prediction time and folds in the real outcome; the table
    /// is untouched. For a normally resolved branch this trains the table
    /// entry selected by the *prediction-time* history, never the current
    /// (possibly further-advanced) register.
    ///
    /// # Arguments
    ///
    /// * `tid` - Hardware thread id of the branch.
    /// * `addr` - Program counter of the branch instruction.
    /// * `taken` - The actual resolved direction.
    /// * `token` - The token issued when this branch entered the predictor.
    /// * `squashed` - Whether the branch was squashed before resolving.
    fn update(&mut self, tid: usize, addr: u64, taken: bool, token: PredictionToken, squashed: bool);

    /// Discards a speculative branch on pipeline flush, consuming its token.
    ///
    /// Restores the thread's history register to the value captured at
    /// prediction time. `None` is an expected no-op: paths that never
    /// predicted have no token to surrender.
    ///
    /// # Arguments
    ///
    /// * `tid` - Hardware thread id of the flushed branch.
    /// * `token` - The token issued for the branch, if one exists.
    fn squash(&mut self, tid: usize, token: Option<PredictionToken>);
}
