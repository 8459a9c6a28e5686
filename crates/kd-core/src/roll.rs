//! The roll façade: a range, a randomizer, a mechanic, and a modifier.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::mechanic::{AdvantageMechanic, DisadvantageMechanic, Mechanic, MechanicKind};
use crate::randomizer::{Randomizer, SimpleRandomizer};

/// The outcome of a [`Roll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The mechanic's result before the modifier.
    pub natural: i64,
    /// `natural` plus the modifier.
    pub modified: i64,
    /// Every draw, in the order it was made.
    pub rolls: Vec<i64>,
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        let modifier = i128::from(self.modified) - i128::from(self.natural);
        match modifier {
            0 => write!(f, "[{}] = {}", values.join(", "), self.modified),
            m if m > 0 => write!(
                f,
                "[{}] {} + {m} = {}",
                values.join(", "),
                self.natural,
                self.modified
            ),
            m => write!(
                f,
                "[{}] {} - {} = {}",
                values.join(", "),
                self.natural,
                m.unsigned_abs(),
                self.modified
            ),
        }
    }
}

/// Per-call replacements for a roll's default mechanic or randomizer.
#[derive(Debug, Default)]
pub struct RollOverrides<'a> {
    /// Mechanic to use instead of the default.
    pub mechanic: Option<&'a dyn Mechanic>,
    /// Randomizer to use instead of the default.
    pub randomizer: Option<&'a mut dyn Randomizer>,
}

impl<'a> RollOverrides<'a> {
    /// Use `mechanic` for this call.
    pub fn with_mechanic(mut self, mechanic: &'a dyn Mechanic) -> Self {
        self.mechanic = Some(mechanic);
        self
    }

    /// Use `randomizer` for this call.
    pub fn with_randomizer(mut self, randomizer: &'a mut dyn Randomizer) -> Self {
        self.randomizer = Some(randomizer);
        self
    }
}

/// A reusable roll over `[min, max]`.
///
/// Defaults to a [`SimpleRandomizer`] and a single draw. The range is not
/// checked here; the randomizer rejects invalid ranges on every draw.
#[derive(Debug)]
pub struct Roll {
    min: i64,
    max: i64,
    randomizer: Box<dyn Randomizer>,
    mechanic: MechanicKind,
}

impl Roll {
    /// Create a single-draw roll over `[min, max]` with a uniform randomizer.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            randomizer: Box::new(SimpleRandomizer::new()),
            mechanic: MechanicKind::default(),
        }
    }

    /// Replace the default randomizer.
    pub fn with_randomizer(mut self, randomizer: Box<dyn Randomizer>) -> Self {
        self.randomizer = randomizer;
        self
    }

    /// Replace the default mechanic.
    pub fn with_mechanic(mut self, mechanic: MechanicKind) -> Self {
        self.mechanic = mechanic;
        self
    }

    /// Lower bound of the range.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// The default mechanic.
    pub fn mechanic(&self) -> &MechanicKind {
        &self.mechanic
    }

    /// Roll with the defaults and add `modifier`.
    ///
    /// Fails with [`DiceError::ResultOverflow`] when the modified result
    /// leaves `i64`.
    pub fn roll(&mut self, modifier: i64) -> DiceResult<RollOutcome> {
        self.roll_with(modifier, RollOverrides::default())
    }

    /// Roll, replacing the mechanic and/or randomizer for this call only.
    pub fn roll_with(
        &mut self,
        modifier: i64,
        overrides: RollOverrides<'_>,
    ) -> DiceResult<RollOutcome> {
        let mechanic: &dyn Mechanic = match overrides.mechanic {
            Some(mechanic) => mechanic,
            None => &self.mechanic,
        };
        let randomizer: &mut dyn Randomizer = match overrides.randomizer {
            Some(randomizer) => randomizer,
            None => self.randomizer.as_mut(),
        };

        let result = mechanic.apply(self.min, self.max, randomizer)?;
        let modified = result
            .result
            .checked_add(modifier)
            .ok_or(DiceError::ResultOverflow)?;
        Ok(RollOutcome {
            natural: result.result,
            modified,
            rolls: result.rolls,
        })
    }

    /// Roll twice and keep the higher, optionally with another randomizer.
    pub fn roll_advantage(
        &mut self,
        modifier: i64,
        randomizer: Option<&mut dyn Randomizer>,
    ) -> DiceResult<RollOutcome> {
        let overrides = RollOverrides {
            mechanic: Some(&AdvantageMechanic),
            randomizer,
        };
        self.roll_with(modifier, overrides)
    }

    /// Roll twice and keep the lower, optionally with another randomizer.
    pub fn roll_disadvantage(
        &mut self,
        modifier: i64,
        randomizer: Option<&mut dyn Randomizer>,
    ) -> DiceResult<RollOutcome> {
        let overrides = RollOverrides {
            mechanic: Some(&DisadvantageMechanic),
            randomizer,
        };
        self.roll_with(modifier, overrides)
    }
}
