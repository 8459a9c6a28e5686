//! Single-roll mechanic.

use super::{Mechanic, MechanicResult};
use crate::error::DiceResult;
use crate::randomizer::Randomizer;

/// Draws once and reports that draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleRollMechanic;

impl Mechanic for SingleRollMechanic {
    fn name(&self) -> &'static str {
        "single"
    }

    fn apply(
        &self,
        min: i64,
        max: i64,
        randomizer: &mut dyn Randomizer,
    ) -> DiceResult<MechanicResult> {
        let result = randomizer.generate(min, max)?;
        Ok(MechanicResult::single(result))
    }
}
