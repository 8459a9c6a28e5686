//! Deterministic randomizer using a 32-bit linear congruential generator.

use super::Randomizer;
use crate::error::{DiceError, DiceResult};

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Produces the same sequence of rolls for the same seed.
///
/// Each draw advances `seed = (1664525 * seed + 1013904223) mod 2^32` and
/// yields `seed / 2^32` as the raw roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRandomizer {
    seed: u32,
}

impl SeededRandomizer {
    /// Create a randomizer starting from `seed`.
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Create a randomizer from an unchecked seed.
    ///
    /// Fails unless `0 <= seed < 2^32`.
    pub fn try_new(seed: i64) -> DiceResult<Self> {
        u32::try_from(seed)
            .map(Self::new)
            .map_err(|_| DiceError::InvalidSeed(seed))
    }

    /// The current generator state (the seed the next draw advances from).
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Randomizer for SeededRandomizer {
    fn generator(&mut self) -> DiceResult<f64> {
        // Wrapping arithmetic on u32 is the mod 2^32 step.
        self.seed = self
            .seed
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        Ok(f64::from(self.seed) / LCG_MODULUS)
    }
}
