//! Pattern history table with NAND-style indexing.
//!
//! The table is a flat, power-of-two array of saturating counters shared by
//! all threads. The index hash NANDs the alignment-shifted branch address
//! with the speculative history: a result bit is 1 unless the corresponding
//! address bit *and* history bit are both 1. This is deliberately not the
//! conventional XOR (gshare) hash: the two schemes alias differently, and
//! the NAND form is the defining choice of this predictor.

use crate::bpu::counter::SatCounter;

/// Number of low address bits discarded before indexing.
///
/// Instructions are word-aligned, so the bottom two address bits carry no
/// information.
pub const INST_SHIFT: u32 = 2;

/// A shared table of saturating counters indexed by (address, history).
#[derive(Debug, Clone)]
pub struct PatternHistoryTable {
    /// The counter array; length is always a power of two.
    counters: Vec<SatCounter>,
    /// Index mask, `len - 1`.
    index_mask: u64,
}

impl PatternHistoryTable {
    /// Creates a table of `size` counters of `counter_bits` width each.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not a power of two (the index mask would be
    /// invalid); sizes are validated at configuration time, so hitting this
    /// is a caller bug.
    pub fn new(size: usize, counter_bits: usize) -> Self {
        assert!(
            size.is_power_of_two(),
            "prediction table size {size} is not a power of two"
        );
        Self {
            counters: vec![SatCounter::new(counter_bits); size],
            index_mask: (size - 1) as u64,
        }
    }

    /// Returns the number of counters in the table.
    pub fn size(&self) -> usize {
        self.counters.len()
    }

    /// Computes the table slot for a branch address and history value.
    ///
    /// The hash is `!((addr >> INST_SHIFT) & history) & (size - 1)`: every
    /// bit position where both the shifted address and the history are 1 is
    /// forced to 0, and all other positions read as 1.
    pub fn index(&self, addr: u64, history: u64) -> usize {
        (!((addr >> INST_SHIFT) & history) & self.index_mask) as usize
    }

    /// Reads the taken/not-taken signal for a branch.
    pub fn predict(&self, addr: u64, history: u64) -> bool {
        self.counters[self.index(addr, history)].taken()
    }

    /// Trains the counter selected by `(addr, history)` with an outcome.
    ///
    /// Saturating increment for a taken branch, saturating decrement
    /// otherwise.
    pub fn train(&mut self, addr: u64, history: u64, taken: bool) {
        let idx = self.index(addr, history);
        if taken {
            self.counters[idx].increment();
        } else {
            self.counters[idx].decrement();
        }
    }
}
