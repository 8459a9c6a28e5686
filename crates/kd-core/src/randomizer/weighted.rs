//! Weighted randomizer over a custom discrete distribution.
//!
//! Faces are numbered `1..=N` without gaps and carry a probability weight
//! in `[0, 1]`. The weights must add up to exactly `1.0`; no floating-point
//! tolerance is applied, so callers supply exactly representable totals.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Randomizer;
use crate::error::{DiceError, DiceResult};

/// Draws faces according to a validated weight table.
///
/// The selected face is the outcome: [`Randomizer::generate`] still
/// validates `min` and `max` but does not scale into them.
#[derive(Debug, Clone)]
pub struct WeightedRandomizer {
    weights: Vec<f64>,
    cumulative_weights: Vec<f64>,
    rng: StdRng,
}

impl WeightedRandomizer {
    /// Create a randomizer from a face-to-weight table.
    pub fn new(weights: BTreeMap<u32, f64>) -> DiceResult<Self> {
        Self::with_rng(weights, StdRng::from_os_rng())
    }

    /// Create a randomizer drawing from the given generator.
    pub fn with_rng(weights: BTreeMap<u32, f64>, rng: StdRng) -> DiceResult<Self> {
        validate_weights(&weights)?;
        let weights: Vec<f64> = weights.into_values().collect();
        let cumulative_weights = to_cumulative(&weights);
        Ok(Self {
            weights,
            cumulative_weights,
            rng,
        })
    }

    /// The weights in face order.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Running sums of the weights in face order.
    pub fn cumulative_weights(&self) -> &[f64] {
        &self.cumulative_weights
    }

    /// Number of faces in the distribution.
    pub fn faces(&self) -> u32 {
        self.weights.len() as u32
    }
}

impl Randomizer for WeightedRandomizer {
    fn generator(&mut self) -> DiceResult<f64> {
        let face = map_to_weighted_value(self.rng.random::<f64>(), &self.cumulative_weights)?;
        Ok(f64::from(face))
    }

    fn scale_to_range(&self, weighted_roll: f64, _min: i64, _max: i64) -> i64 {
        weighted_roll as i64
    }
}

#[allow(clippy::float_cmp)]
fn validate_weights(weights: &BTreeMap<u32, f64>) -> DiceResult<()> {
    let mut max_face: u32 = 0;
    let mut weight_sum = 0.0;

    for (&face, &weight) in weights {
        if face == 0 {
            return Err(DiceError::InvalidWeightKey(face));
        }
        // Also rejects NaN.
        if !(0.0..=1.0).contains(&weight) {
            return Err(DiceError::InvalidWeightValue { face, weight });
        }
        max_face = max_face.max(face);
        weight_sum += weight;
    }

    if max_face as usize != weights.len() {
        return Err(DiceError::WeightEntryCount {
            max_face,
            entries: weights.len(),
        });
    }

    if weight_sum != 1.0 {
        return Err(DiceError::WeightSum(weight_sum));
    }

    Ok(())
}

fn to_cumulative(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0_f64, |sum, weight| {
            *sum += weight;
            Some(*sum)
        })
        .collect()
}

/// Return the smallest face whose cumulative weight exceeds `random_value`.
fn map_to_weighted_value(random_value: f64, cumulative_weights: &[f64]) -> DiceResult<u32> {
    cumulative_weights
        .iter()
        .position(|&cumulative| random_value < cumulative)
        .map(|index| index as u32 + 1)
        .ok_or(DiceError::Distribution)
}
