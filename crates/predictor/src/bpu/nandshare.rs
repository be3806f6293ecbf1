//! The orchestrating predictor and its token lifecycle.
//!
//! `NandSharePredictor` ties the history tracker and the pattern history
//! table together. Every in-flight branch moves through exactly one of two
//! terminal transitions, `Predicted -> Resolved` (`update`) or
//! `Predicted -> Squashed` (`squash`), carried by a move-only
//! [`PredictionToken`] that snapshots the history register at prediction
//! time.

use tracing::trace;

use crate::bpu::DirectionPredictor;
use crate::bpu::history::HistoryTracker;
use crate::bpu::pht::PatternHistoryTable;
use crate::common::ConfigError;
use crate::config::PredictorConfig;
use crate::stats::PredictorStats;

/// Per-prediction handle carrying the state needed to resolve or roll back
/// one specific prediction.
///
/// Tokens are deliberately not `Clone` or `Copy`: each one is owned by the
/// pipeline slot that requested the prediction and is consumed by value
/// exactly once, so double resolution and leaked rollback state are
/// unrepresentable.
#[derive(Debug, PartialEq, Eq)]
pub struct PredictionToken {
    /// History register value at prediction time.
    history: u64,
    /// Direction the predictor committed to.
    prediction: bool,
}

impl PredictionToken {
    /// Returns the history register value captured at prediction time.
    pub fn history(&self) -> u64 {
        self.history
    }

    /// Returns the direction that was predicted.
    pub fn prediction(&self) -> bool {
        self.prediction
    }
}

/// Single-table direction predictor with NAND-style history indexing.
#[derive(Debug, Clone)]
pub struct NandSharePredictor {
    /// Shared prediction table, mutated only by non-squashed resolutions.
    pht: PatternHistoryTable,
    /// Per-thread speculative history registers.
    history: HistoryTracker,
    /// Activity counters.
    stats: PredictorStats,
}

impl NandSharePredictor {
    /// Creates a predictor from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation; the
    /// predictor is never constructed in a half-valid state.
    pub fn new(config: &PredictorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            pht: PatternHistoryTable::new(config.table_size, config.counter_bits),
            history: HistoryTracker::new(config.num_threads, config.history_bits),
            stats: PredictorStats::default(),
        })
    }

    /// Returns the number of entries in the prediction table.
    pub fn table_size(&self) -> usize {
        self.pht.size()
    }

    /// Returns the live history register value for a thread.
    ///
    /// Read-only; exposed for the host's debug and statistics surfaces.
    pub fn current_history(&self, tid: usize) -> u64 {
        self.history.current(tid)
    }

    /// Returns the activity counters accumulated so far.
    pub fn stats(&self) -> &PredictorStats {
        &self.stats
    }
}

impl DirectionPredictor for NandSharePredictor {
    /// Predicts the branch at `addr` and speculatively advances history.
    fn lookup(&mut self, tid: usize, addr: u64) -> (bool, PredictionToken) {
        let history = self.history.current(tid);
        let prediction = self.pht.predict(addr, history);

        let token = PredictionToken {
            history,
            prediction,
        };
        self.history.advance(tid, prediction);
        self.stats.lookups += 1;
        trace!(tid, addr, history, prediction, "lookup");

        (prediction, token)
    }

    /// Records an unconditional jump as a taken branch, no table lookup.
    fn uncond_branch(&mut self, tid: usize, pc: u64) -> PredictionToken {
        let history = self.history.current(tid);
        let token = PredictionToken {
            history,
            prediction: true,
        };
        self.history.advance(tid, true);
        self.stats.uncond_branches += 1;
        trace!(tid, pc, history, "uncond_branch");

        token
    }

    /// Records a target-buffer miss: token issued, newest history bit
    /// cleared, nothing shifted in.
    fn btb_update(&mut self, tid: usize, addr: u64) -> PredictionToken {
        let history = self.history.current(tid);
        let token = PredictionToken {
            history,
            prediction: false,
        };
        self.history.clear_latest(tid);
        self.stats.btb_updates += 1;
        trace!(tid, addr, history, "btb_update");

        token
    }

    /// Resolves a branch, training the table or rewinding history.
    fn update(&mut self, tid: usize, addr: u64, taken: bool, token: PredictionToken, squashed: bool) {
        if squashed {
            // The token's snapshot recomputes the valid-path history; the
            // table is untouched for squashed branches.
            self.history.rollback(tid, token.history, taken);
            self.stats.squashed_updates += 1;
            trace!(tid, addr, taken, history = token.history, "update (squashed)");
        } else {
            // Train with the history as it was at prediction time, never
            // the current register.
            self.pht.train(addr, token.history, taken);
            self.stats.updates += 1;
            if taken != token.prediction {
                self.stats.mispredictions += 1;
            }
            trace!(tid, addr, taken, history = token.history, "update");
        }
    }

    /// Discards a speculative branch on pipeline flush.
    fn squash(&mut self, tid: usize, token: Option<PredictionToken>) {
        // No token means this path never predicted; expected no-op.
        if let Some(token) = token {
            self.history.restore(tid, token.history);
            self.stats.squashes += 1;
            trace!(tid, history = token.history, "squash");
        }
    }
}
