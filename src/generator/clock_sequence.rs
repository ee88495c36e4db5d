//! 14-bit clock sequence state machine
//!
//! Disambiguates UUIDs minted within the same 100 ns tick or after the
//! clock regressed. The count caps at the 14-bit space; it is never wrapped
//! silently, since a wrap could repeat a `(timestamp, sequence, node)`
//! triple. Exhaustion is reported to the caller instead.

use rand::RngCore;

/// Number of distinct 14-bit clock sequence values
const CLOCK_SEQ_SPACE: u16 = 0x4000;

/// Clock sequence state: the last emitted value and how many times it has
/// been incremented since the last randomization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClockSequence {
    count: u16,
    value: u16,
}

impl ClockSequence {
    /// Creates a freshly randomized clock sequence.
    pub(crate) fn new(rng: &mut impl RngCore) -> Self {
        let mut seq = Self { count: 0, value: 0 };
        seq.randomize(rng);
        seq
    }

    #[cfg(test)]
    pub(crate) const fn with_state(count: u16, value: u16) -> Self {
        Self { count, value }
    }

    /// Returns the current value, or `None` once the count space is spent.
    pub(crate) fn get(&self) -> Option<u16> {
        (self.count < CLOCK_SEQ_SPACE).then_some(self.value)
    }

    /// Advances and returns the new value, or `None` when no unique value is
    /// left for the current tick.
    ///
    /// The value itself is not masked to 14 bits here; the UUID packer masks
    /// it, which keeps the emitted sequence values distinct across exactly
    /// one full 0x4000-value cycle.
    pub(crate) fn increment_and_get(&mut self) -> Option<u16> {
        if self.count < CLOCK_SEQ_SPACE - 1 {
            self.count += 1;
            self.value = self.value.wrapping_add(1);
            Some(self.value)
        } else {
            None
        }
    }

    /// Draws a fresh value uniformly from `[0, 0x4000)` and resets the count.
    pub(crate) fn randomize(&mut self, rng: &mut impl RngCore) -> u16 {
        self.value = (rng.next_u32() & (CLOCK_SEQ_SPACE as u32 - 1)) as u16;
        self.count = 0;
        self.value
    }
}
