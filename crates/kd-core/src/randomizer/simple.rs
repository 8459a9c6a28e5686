//! Uniform randomizer backed by the standard generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Randomizer;
use crate::error::DiceResult;

/// Draws uniformly distributed raw rolls from an OS-seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct SimpleRandomizer {
    rng: StdRng,
}

impl SimpleRandomizer {
    /// Create a randomizer seeded from operating system entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Create a randomizer drawing from the given generator.
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }
}

impl Default for SimpleRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomizer for SimpleRandomizer {
    fn generator(&mut self) -> DiceResult<f64> {
        Ok(self.rng.random::<f64>())
    }
}
