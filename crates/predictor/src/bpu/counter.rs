//! Saturating confidence counter.
//!
//! An N-bit unsigned counter clamped to `[0, 2^N - 1]` that tracks
//! confidence in a branch direction. The top bit is the taken/not-taken
//! signal, so the counter crosses from "predict not-taken" to "predict
//! taken" at the halfway point `2^(N-1)`.

/// An N-bit saturating counter (1..=8 bits, stored in a `u8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SatCounter {
    /// Current counter value, always within `[0, max]`.
    count: u8,
    /// Inclusive upper bound, `2^bits - 1`.
    max: u8,
    /// Taken threshold, `2^(bits - 1)`.
    threshold: u8,
}

impl SatCounter {
    /// Creates a counter of the given bit width, initialized to zero.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is outside `1..=8`; widths are validated at
    /// configuration time, so hitting this is a caller bug.
    pub fn new(bits: usize) -> Self {
        assert!(
            (1..=8).contains(&bits),
            "counter width {bits} is outside the supported range 1..=8"
        );
        Self {
            count: 0,
            max: ((1u16 << bits) - 1) as u8,
            threshold: 1 << (bits - 1),
        }
    }

    /// Increments the counter, saturating at its upper bound.
    pub fn increment(&mut self) {
        if self.count < self.max {
            self.count += 1;
        }
    }

    /// Decrements the counter, saturating at zero.
    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Returns the taken/not-taken signal: the counter's top bit.
    pub fn taken(self) -> bool {
        self.count >= self.threshold
    }

    /// Returns the raw counter value.
    pub fn value(self) -> u8 {
        self.count
    }
}
