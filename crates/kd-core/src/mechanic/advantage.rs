//! Advantage mechanic: roll twice, keep the higher.

use super::{Mechanic, MechanicResult};
use crate::error::DiceResult;
use crate::randomizer::Randomizer;

/// Draws twice and keeps the higher value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdvantageMechanic;

impl Mechanic for AdvantageMechanic {
    fn name(&self) -> &'static str {
        "advantage"
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
            result: a.max(b),
            rolls: vec![a, b],
        })
    }
}
