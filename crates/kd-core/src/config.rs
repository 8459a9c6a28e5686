//! Serializable roll definitions.
//!
//! A [`RollConfig`] describes a complete roll (range, randomizer, mechanic,
//! modifier) and can be read from JSON:
//!
//! ```json
//! {
//!   "min": 1,
//!   "max": 20,
//!   "randomizer": { "kind": "karmic", "bias_factor": 0.3 },
//!   "mechanic": { "kind": "reroll", "target": [1], "max_reroll_count": 2 },
//!   "modifier": 4
//! }
//! ```
//!
//! Omitted fields fall back to a uniform randomizer, a single draw, and no
//! modifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};
use crate::mechanic::MechanicKind;
use crate::randomizer::{
    KarmicConfig, KarmicRandomizer, Randomizer, SeededRandomizer, SimpleRandomizer,
    WeightedRandomizer,
};
use crate::roll::Roll;

/// Which randomizer to build, with its settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RandomizerConfig {
    /// Uniform draws.
    #[default]
    Simple,
    /// Reproducible LCG draws.
    Seeded {
        /// Starting seed, `0 <= seed < 2^32`.
        seed: i64,
    },
    /// Draws from a weight table.
    Weighted {
        /// Weights of faces `1..=N`, in face order.
        weights: Vec<f64>,
    },
    /// Streak-correcting draws.
    Karmic(KarmicConfig),
}

impl RandomizerConfig {
    /// Build the configured randomizer, running its construction checks.
    pub fn build(&self) -> DiceResult<Box<dyn Randomizer>> {
        let randomizer: Box<dyn Randomizer> = match self {
            Self::Simple => Box::new(SimpleRandomizer::new()),
            Self::Seeded { seed } => Box::new(SeededRandomizer::try_new(*seed)?),
            Self::Weighted { weights } => Box::new(WeightedRandomizer::new(face_table(weights))?),
            Self::Karmic(config) => Box::new(KarmicRandomizer::new(config.clone())),
        };
        Ok(randomizer)
    }
}

/// Number weights in order as faces `1..=N`.
pub fn face_table(weights: &[f64]) -> BTreeMap<u32, f64> {
    (1..).zip(weights.iter().copied()).collect()
}

/// A complete roll definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollConfig {
    /// Lower bound of the range.
    pub min: i64,
    /// Upper bound of the range.
    pub max: i64,
    /// Randomizer settings (default: simple).
    #[serde(default)]
    pub randomizer: RandomizerConfig,
    /// Mechanic (default: single).
    #[serde(default)]
    pub mechanic: MechanicKind,
    /// Added to the natural result (default: 0).
    #[serde(default)]
    pub modifier: i64,
}

impl RollConfig {
    /// A single uniform draw over `[min, max]`.
    pub fn new(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            randomizer: RandomizerConfig::default(),
            mechanic: MechanicKind::default(),
            modifier: 0,
        }
    }

    /// Parse a roll definition from JSON.
    pub fn from_json(json: &str) -> DiceResult<Self> {
        serde_json::from_str(json).map_err(|e| DiceError::InvalidConfig(e.to_string()))
    }

    /// Build the [`Roll`] this config describes.
    ///
    /// The range is checked when rolling, not here.
    pub fn build(&self) -> DiceResult<Roll> {
        Ok(Roll::new(self.min, self.max)
            .with_randomizer(self.randomizer.build()?)
            .with_mechanic(self.mechanic.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanic::{RerollMechanic, RerollOptions};

    #[test]
    fn minimal_config_uses_defaults() {
        let config = RollConfig::from_json(r#"{"min": 1, "max": 6}"#).unwrap();
        assert_eq!(config, RollConfig::new(1, 6));
    }

    #[test]
    fn full_config() {
        let config = RollConfig::from_json(
            r#"{
                "min": 1,
                "max": 20,
                "randomizer": { "kind": "karmic", "bias_factor": 0.3 },
                "mechanic": { "kind": "reroll", "target": [1], "max_reroll_count": 2 },
                "modifier": 4
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.randomizer,
            RandomizerConfig::Karmic(KarmicConfig::default().with_bias_factor(0.3))
        );
        let reroll =
            RerollMechanic::new(RerollOptions::new(vec![1]).with_max_reroll_count(2)).unwrap();
        assert_eq!(config.mechanic, MechanicKind::Reroll(reroll));
        assert_eq!(config.modifier, 4);
    }

    #[test]
    fn weighted_config_lists_faces_in_order() {
        let config: RandomizerConfig =
            serde_json::from_str(r#"{"kind": "weighted", "weights": [0.25, 0.25, 0.5]}"#).unwrap();
        assert_eq!(
            config,
            RandomizerConfig::Weighted {
                weights: vec![0.25, 0.25, 0.5]
            }
        );
        assert!(config.build().is_ok());
        assert_eq!(
            face_table(&[0.25, 0.25, 0.5]),
            BTreeMap::from([(1, 0.25), (2, 0.25), (3, 0.5)])
        );
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let json = r#"{"min": 1, "max": 20, "randomizer": {"kind": "seeded", "seed": 42}}"#;
        let mut a = RollConfig::from_json(json).unwrap().build().unwrap();
        let mut b = RollConfig::from_json(json).unwrap().build().unwrap();
        for _ in 0..10 {
            assert_eq!(a.roll(0).unwrap(), b.roll(0).unwrap());
        }
    }

    #[test]
    fn build_runs_construction_checks() {
        let config = RandomizerConfig::Seeded { seed: -5 };
        assert_eq!(config.build().unwrap_err(), DiceError::InvalidSeed(-5));

        let config = RandomizerConfig::Weighted { weights: vec![0.5] };
        assert!(matches!(
            config.build().unwrap_err(),
            DiceError::WeightSum(_)
        ));
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let err = RollConfig::from_json(r#"{"min": 1}"#).unwrap_err();
        assert!(matches!(err, DiceError::InvalidConfig(_)));
        assert!(err.to_string().starts_with("invalid roll config:"));

        let err = RollConfig::from_json(
            r#"{"min": 1, "max": 6, "mechanic": {"kind": "reroll", "target": []}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Target can not be an empty array."));
    }

    #[test]
    fn built_roll_applies_modifier() {
        let mut config = RollConfig::new(1, 20);
        config.randomizer = RandomizerConfig::Seeded { seed: 0 };
        config.mechanic = MechanicKind::Advantage;
        config.modifier = 2;
        let mut roll = config.build().unwrap();
        let outcome = roll.roll(config.modifier).unwrap();
        assert_eq!(outcome.natural, 6);
        assert_eq!(outcome.modified, 8);
    }
}
