//! Roll mechanics: how one or more draws combine into a result.
//!
//! Each mechanic draws from a [`Randomizer`] and reports the final value
//! together with every draw in the order it was made:
//! - **Single**: one draw
//! - **Advantage**: two draws, keep the higher
//! - **Disadvantage**: two draws, keep the lower
//! - **Exploding**: keep drawing while the maximum comes up, sum everything
//! - **Reroll**: redraw target values up to a budget, keep the last draw
//!
//! Mechanics never validate the range themselves; the randomizer does, and
//! its errors pass through unchanged.

pub mod advantage;
pub mod disadvantage;
pub mod exploding;
pub mod reroll;
pub mod single;

pub use advantage::AdvantageMechanic;
pub use disadvantage::DisadvantageMechanic;
pub use exploding::ExplodingMechanic;
pub use reroll::{RerollMechanic, RerollOptions};
pub use single::SingleRollMechanic;

use serde::{Deserialize, Serialize};

use crate::error::DiceResult;
use crate::randomizer::Randomizer;

/// The outcome of applying a mechanic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanicResult {
    /// The combined value.
    pub result: i64,
    /// Every draw, in the order it was made.
    pub rolls: Vec<i64>,
}

impl MechanicResult {
    /// A result made of one draw.
    pub fn single(value: i64) -> Self {
        Self {
            result: value,
            rolls: vec![value],
        }
    }
}

impl std::fmt::Display for MechanicResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.result)
    }
}

/// A rule for turning draws into a result.
pub trait Mechanic: std::fmt::Debug {
    /// Short identifier (e.g. "advantage").
    fn name(&self) -> &'static str;

    /// Draw from `randomizer` over `[min, max]` and combine the draws.
    fn apply(&self, min: i64, max: i64, randomizer: &mut dyn Randomizer)
    -> DiceResult<MechanicResult>;
}

/// Any of the built-in mechanics, selectable from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MechanicKind {
    /// One draw.
    #[default]
    Single,
    /// Two draws, keep the higher.
    Advantage,
    /// Two draws, keep the lower.
    Disadvantage,
    /// Draw again on the maximum, sum all draws.
    Exploding,
    /// Redraw target values up to a budget.
    Reroll(RerollMechanic),
}

impl Mechanic for MechanicKind {
    fn name(&self) -> &'static str {
        match self {
            Self::Single => SingleRollMechanic.name(),
            Self::Advantage => AdvantageMechanic.name(),
            Self::Disadvantage => DisadvantageMechanic.name(),
            Self::Exploding => ExplodingMechanic.name(),
            Self::Reroll(m) => m.name(),
        }
    }

    fn apply(
        &self,
        min: i64,
        max: i64,
        randomizer: &mut dyn Randomizer,
    ) -> DiceResult<MechanicResult> {
        match self {
            Self::Single => SingleRollMechanic.apply(min, max, randomizer),
            Self::Advantage => AdvantageMechanic.apply(min, max, randomizer),
            Self::Disadvantage => DisadvantageMechanic.apply(min, max, randomizer),
            Self::Exploding => ExplodingMechanic.apply(min, max, randomizer),
            Self::Reroll(m) => m.apply(min, max, randomizer),
        }
    }
}

impl From<RerollMechanic> for MechanicKind {
    fn from(mechanic: RerollMechanic) -> Self {
        Self::Reroll(mechanic)
    }
}
