//! Disadvantage mechanic: roll twice, keep the lower.

use super::{Mechanic, MechanicResult};
use crate::error::DiceResult;
use crate::randomizer::Randomizer;

/// Draws twice and keeps the lower value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisadvantageMechanic;

impl Mechanic for DisadvantageMechanic {
    fn name(&self) -> &'static str {
        "disadvantage"
    }

    fn apply(
        &self,
        min: i64,
        max: i64,
        randomizer: &mut dyn Randomizer,
    ) -> DiceResult<MechanicResult> {
        let a = randomizer.generate(min, max)?;
        let b = randomizer.generate(min, max)?;
        Ok(MechanicResult {
            result: a.min(b),
            rolls: vec![a, b],
        })
    }
}
