//! Dice rolling engine for Karmadice.
//!
//! Provides range validation, pluggable randomizer strategies (uniform,
//! seeded, weighted, and karmic streak-correcting), roll mechanics
//! (single, advantage, disadvantage, reroll, exploding), a [`Roll`] façade
//! combining the two with a modifier, and serde-backed roll configs.

pub mod config;
pub mod error;
pub mod mechanic;
pub mod randomizer;
pub mod range;
pub mod roll;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{RandomizerConfig, RollConfig};
pub use error::{DiceError, DiceResult};
pub use mechanic::{
    AdvantageMechanic, DisadvantageMechanic, ExplodingMechanic, Mechanic, MechanicKind,
    MechanicResult, RerollMechanic, RerollOptions, SingleRollMechanic,
};
pub use randomizer::{
    HistoryEntry, KarmicConfig, KarmicRandomizer, Randomizer, SeededRandomizer,
    SimpleRandomizer, WeightedRandomizer,
};
pub use range::{RawBound, validate_min_max, validate_raw_bounds};
pub use roll::{Roll, RollOutcome, RollOverrides};
