//! Randomizer strategies: how raw entropy becomes a bounded integer.
//!
//! Every strategy produces a raw roll in `[0, 1)` through
//! [`Randomizer::generator`]; [`Randomizer::generate`] validates the range
//! and scales the raw roll into it:
//! - **Simple**: uniform draws from an OS-seeded generator
//! - **Seeded**: a 32-bit linear congruential generator, fully reproducible
//! - **Weighted**: a custom discrete distribution over faces `1..=N`
//! - **Karmic**: uniform draws nudged against recent hot or cold streaks

pub mod karmic;
pub mod seeded;
pub mod simple;
pub mod weighted;

pub use karmic::{HistoryEntry, KarmicConfig, KarmicRandomizer};
pub use seeded::SeededRandomizer;
pub use simple::SimpleRandomizer;
pub use weighted::WeightedRandomizer;

use crate::error::DiceResult;
use crate::range::validate_min_max;

/// Raw rolls at or above this value scale straight to the maximum.
///
/// The top percent of the unit interval belongs to the maximum outcome, so
/// moving this threshold shifts probability mass onto or off that face.
pub const MAX_ROLL_THRESHOLD: f64 = 0.99;

/// A source of bounded random integers.
///
/// Implementors supply [`generator`](Randomizer::generator); range
/// validation and scaling are shared. A randomizer is owned by one caller
/// at a time and may mutate internal state on every draw.
pub trait Randomizer: std::fmt::Debug {
    /// Produce the next raw roll, normally in `[0, 1)`.
    fn generator(&mut self) -> DiceResult<f64>;

    /// Map a raw roll onto `[min, max]`.
    fn scale_to_range(&self, raw_roll: f64, min: i64, max: i64) -> i64 {
        scale_to_range(raw_roll, min, max)
    }

    /// Draw an integer in `[min, max]`.
    ///
    /// Fails without drawing when the range is invalid.
    fn generate(&mut self, min: i64, max: i64) -> DiceResult<i64> {
        validate_min_max(min, max)?;
        let raw_roll = self.generator()?;
        Ok(self.scale_to_range(raw_roll, min, max))
    }
}

/// The default scaling policy shared by the uniform strategies.
///
/// Raw rolls at or above [`MAX_ROLL_THRESHOLD`] give `max`, raw rolls at or
/// below zero give `min`, anything else is spread evenly across the range.
pub fn scale_to_range(raw_roll: f64, min: i64, max: i64) -> i64 {
    if raw_roll >= MAX_ROLL_THRESHOLD {
        return max;
    }
    if raw_roll <= 0.0 {
        return min;
    }
    let span = (max - min + 1) as f64;
    (raw_roll * span).floor() as i64 + min
}
