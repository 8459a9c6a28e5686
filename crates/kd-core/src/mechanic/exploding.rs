//! Exploding mechanic: rolling the maximum earns another roll.

use super::{Mechanic, MechanicResult};
use crate::error::{DiceError, DiceResult};
use crate::randomizer::Randomizer;

/// Keeps drawing while the maximum comes up and sums every draw.
///
/// There is no cap on the number of explosions. With a fair randomizer
/// the chain ends with probability 1; a randomizer that always returns
/// `max` never lets it end, and bounding that is up to the caller. A sum
/// past `i64::MAX` fails with [`DiceError::ResultOverflow`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplodingMechanic;

impl Mechanic for ExplodingMechanic {
    fn name(&self) -> &'static str {
        "exploding"
    }

    fn apply(
        &self,
        min: i64,
        max: i64,
        randomizer: &mut dyn Randomizer,
    ) -> DiceResult<MechanicResult> {
        // Every draw would be the maximum; explode never.
        if min == max {
            return Ok(MechanicResult::single(min));
        }

        let mut result: i64 = 0;
        let mut rolls = Vec::new();
        loop {
            let roll = randomizer.generate(min, max)?;
            rolls.push(roll);
            result = result
                .checked_add(roll)
                .ok_or(DiceError::ResultOverflow)?;
            if roll != max {
                break;
            }
        }

        Ok(MechanicResult { result, rolls })
    }
}
