//! Deterministic PRNG used for the re-seed action.
//!
//! Picking a fresh sprite seed is ordinary external randomness, not
//! synthesizer state: the synthesizer only consumes the seed it is given.
//! Xorshift64 is more than enough for that, and stays reproducible when
//! constructed with an explicit seed.

use std::time::{SystemTime, UNIX_EPOCH};

/// Xorshift64 PRNG with the standard (13, 7, 17) shift parameters.
///
/// Seed of 0 is replaced with a non-zero fallback to avoid the all-zeros
/// fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0, which is a fixed point
    /// of the xorshift algorithm.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a PRNG seeded from the system clock.
    ///
    /// Non-reproducible by design; use [`Xorshift64::new`] where replayable
    /// sequences matter.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(Self::FALLBACK_SEED);
        Self::new(nanos)
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a value uniformly distributed in [0, max).
    ///
    /// Simple modulo reduction; the bias is negligible at 64-bit state
    /// width for the small ranges sprite seeds use.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_below(&mut self, max: u64) -> u64 {
        self.next_u64() % max
    }
}
