//! Reroll mechanic: redraw unwanted values up to a budget.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Mechanic, MechanicResult};
use crate::error::{DiceError, DiceResult};
use crate::randomizer::Randomizer;

/// Budget used when none is given.
pub const DEFAULT_MAX_REROLL_COUNT: i64 = 1;

/// Unvalidated options for a [`RerollMechanic`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RerollOptions {
    /// Values that trigger a reroll.
    pub target: Vec<i64>,
    /// Maximum number of rerolls (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_reroll_count: Option<i64>,
}

impl RerollOptions {
    /// Options rerolling `target` values with the default budget.
    pub fn new(target: Vec<i64>) -> Self {
        Self {
            target,
            max_reroll_count: None,
        }
    }

    /// Set the reroll budget.
    pub fn with_max_reroll_count(mut self, count: i64) -> Self {
        self.max_reroll_count = Some(count);
        self
    }
}

/// Redraws while the latest draw is a target value and budget remains.
///
/// The result is the last draw, not a sum. Options are validated once at
/// construction and cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RerollOptions", into = "RerollOptions")]
pub struct RerollMechanic {
    target: BTreeSet<i64>,
    max_reroll_count: u64,
}

impl RerollMechanic {
    /// Validate `options` and build the mechanic.
    ///
    /// Fails if the target is empty or an explicit budget is not positive.
    pub fn new(options: RerollOptions) -> DiceResult<Self> {
        if options.target.is_empty() {
            return Err(DiceError::EmptyRerollTarget);
        }
        let count = options
            .max_reroll_count
            .unwrap_or(DEFAULT_MAX_REROLL_COUNT);
        let max_reroll_count = u64::try_from(count)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(DiceError::InvalidRerollCount(count))?;

        Ok(Self {
            target: options.target.into_iter().collect(),
            max_reroll_count,
        })
    }

    /// Values that trigger a reroll.
    pub fn target(&self) -> &BTreeSet<i64> {
        &self.target
    }

    /// Maximum number of rerolls per application.
    pub fn max_reroll_count(&self) -> u64 {
        self.max_reroll_count
    }
}

impl TryFrom<RerollOptions> for RerollMechanic {
    type Error = DiceError;

    fn try_from(options: RerollOptions) -> DiceResult<Self> {
        Self::new(options)
    }
}

impl From<RerollMechanic> for RerollOptions {
    fn from(mechanic: RerollMechanic) -> Self {
        Self {
            target: mechanic.target.into_iter().collect(),
            max_reroll_count: Some(i64::try_from(mechanic.max_reroll_count).unwrap_or(i64::MAX)),
        }
    }
}

impl Mechanic for RerollMechanic {
    fn name(&self) -> &'static str {
        "reroll"
    }

    fn apply(
        &self,
        min: i64,
        max: i64,
        randomizer: &mut dyn Randomizer,
    ) -> DiceResult<MechanicResult> {
        let mut result = randomizer.generate(min, max)?;
        let mut rolls = vec![result];
        let mut remaining_rerolls = self.max_reroll_count;

        while self.target.contains(&result) && remaining_rerolls > 0 {
            result = randomizer.generate(min, max)?;
            rolls.push(result);
            remaining_rerolls -= 1;
        }

        Ok(MechanicResult { result, rolls })
    }
}
