//! Test doubles for mechanics and the roll façade.

use crate::error::DiceResult;
use crate::randomizer::Randomizer;

/// A randomizer that returns values from a predetermined sequence.
///
/// Ignores the requested range. Panics if the sequence is exhausted, so a
/// test that draws more than it scripted fails loudly.
#[derive(Debug)]
pub struct SequenceRandomizer {
    values: Vec<i64>,
    index: usize,
}

impl SequenceRandomizer {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values, index: 0 }
    }

    /// How many values have been drawn so far.
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl Randomizer for SequenceRandomizer {
    fn generator(&mut self) -> DiceResult<f64> {
        Ok(0.0)
    }

    fn generate(&mut self, _min: i64, _max: i64) -> DiceResult<i64> {
        let value = self.values[self.index];
        self.index += 1;
        Ok(value)
    }
}
