//! Per-thread speculative history tracking.
//!
//! Each hardware thread owns one history register recording the sequence of
//! *predicted* (not yet necessarily resolved) branch outcomes, newest in
//! bit 0. The register must reflect only the path still considered valid:
//! after a misprediction the pipeline rewinds it from a value saved at
//! prediction time, discarding the outcomes of every younger, now-squashed
//! branch.

/// Per-thread speculative history registers.
///
/// Registers are always masked to the configured width, so reads never see
/// stale bits beyond it.
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    /// One history register per hardware thread, indexed by thread id.
    regs: Vec<u64>,
    /// Mask selecting the low `history_bits` bits of a register.
    mask: u64,
}

impl HistoryTracker {
    /// Creates a tracker for `num_threads` threads with `history_bits`-wide
    /// registers, all initialized to zero.
    ///
    /// # Panics
    ///
    /// Panics if `history_bits` is outside `1..=64` or `num_threads` is
    /// zero; both are validated at configuration time, so hitting this is a
    /// caller bug.
    pub fn new(num_threads: usize, history_bits: usize) -> Self {
        assert!(
            (1..=64).contains(&history_bits),
            "history width {history_bits} is outside the supported range 1..=64"
        );
        assert!(num_threads > 0, "history tracker requires at least one thread");
        Self {
            regs: vec![0; num_threads],
            mask: u64::MAX >> (64 - history_bits),
        }
    }

    /// Validates a thread id, failing fast on out-of-range callers.
    fn check_tid(&self, tid: usize) {
        assert!(
            tid < self.regs.len(),
            "thread id {tid} out of range ({} threads configured)",
            self.regs.len()
        );
    }

    /// Returns the live history register value for a thread.
    pub fn current(&self, tid: usize) -> u64 {
        self.check_tid(tid);
        self.regs[tid]
    }

    /// Shifts a new outcome into bit 0 of a thread's register.
    ///
    /// The oldest bit beyond the configured width is evicted by the mask.
    pub fn advance(&mut self, tid: usize, taken: bool) {
        self.check_tid(tid);
        self.regs[tid] = ((self.regs[tid] << 1) | u64::from(taken)) & self.mask;
    }

    /// Rewinds a thread's register to `saved`, then folds in `taken`.
    ///
    /// Used when resolving a branch that was squashed: `saved` is the value
    /// captured at the original prediction, so the outcomes of every
    /// younger, since-squashed prediction are discarded before the real
    /// outcome is recorded.
    pub fn rollback(&mut self, tid: usize, saved: u64, taken: bool) {
        self.check_tid(tid);
        self.regs[tid] = saved & self.mask;
        self.advance(tid, taken);
    }

    /// Sets a thread's register to `saved`, masked to the configured width,
    /// with no re-shift.
    ///
    /// Used on pipeline squash notification, where no outcome is known yet.
    pub fn restore(&mut self, tid: usize, saved: u64) {
        self.check_tid(tid);
        self.regs[tid] = saved & self.mask;
    }

    /// Forces the newest history bit of a thread's register to zero.
    ///
    /// Used when a branch is recorded on a target-buffer miss: it has no
    /// predicted direction yet, so nothing is shifted in; only bit 0 is
    /// cleared.
    pub fn clear_latest(&mut self, tid: usize) {
        self.check_tid(tid);
        self.regs[tid] &= self.mask & !1;
    }
}
