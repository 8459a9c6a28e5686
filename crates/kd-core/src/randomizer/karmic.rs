//! Karmic randomizer: streak-correcting bias.
//!
//! Each draw is classified as high, low, or neutral and remembered in a
//! bounded history. While lows outnumber highs the next raw roll is pushed
//! up by the bias factor; while highs outnumber lows it is pushed down.
//! Only the classifications drive the bias, never the raw values.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Randomizer;
use crate::error::DiceResult;

/// Default threshold at or above which a roll counts as high.
pub const DEFAULT_HIGH_ROLL_THRESHOLD: f64 = 0.8;
/// Default threshold at or below which a roll counts as low.
pub const DEFAULT_LOW_ROLL_THRESHOLD: f64 = 0.2;
/// Default amount added to or subtracted from a biased roll.
pub const DEFAULT_BIAS_FACTOR: f64 = 0.2;
/// Default number of classifications remembered.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// How a biased roll was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// At or above the high threshold.
    High,
    /// At or below the low threshold.
    Low,
    /// Strictly between the thresholds.
    Neutral,
}

/// Configuration for a [`KarmicRandomizer`].
///
/// Every field is optional; missing fields, zeros and NaN take the
/// `DEFAULT_*` values when the randomizer is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KarmicConfig {
    /// Threshold at or above which a roll is high (default 0.8).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_roll_threshold: Option<f64>,
    /// Threshold at or below which a roll is low (default 0.2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_roll_threshold: Option<f64>,
    /// Strength of the streak correction (default 0.2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bias_factor: Option<f64>,
    /// How many recent classifications are remembered (default 10).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl KarmicConfig {
    /// Set the high roll threshold.
    pub fn with_high_roll_threshold(mut self, threshold: f64) -> Self {
        self.high_roll_threshold = Some(threshold);
        self
    }

    /// Set the low roll threshold.
    pub fn with_low_roll_threshold(mut self, threshold: f64) -> Self {
        self.low_roll_threshold = Some(threshold);
        self
    }

    /// Set the bias factor.
    pub fn with_bias_factor(mut self, bias_factor: f64) -> Self {
        self.bias_factor = Some(bias_factor);
        self
    }

    /// Set the history limit.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}

/// Uniform randomizer that leans against recent streaks.
#[derive(Debug, Clone)]
pub struct KarmicRandomizer {
    high_roll_threshold: f64,
    low_roll_threshold: f64,
    bias_factor: f64,
    history_limit: usize,
    history: VecDeque<HistoryEntry>,
    rng: StdRng,
}

impl KarmicRandomizer {
    /// Create a randomizer seeded from operating system entropy.
    pub fn new(config: KarmicConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a randomizer drawing from the given generator.
    pub fn with_rng(config: KarmicConfig, rng: StdRng) -> Self {
        Self {
            high_roll_threshold: or_default(
                config.high_roll_threshold,
                DEFAULT_HIGH_ROLL_THRESHOLD,
            ),
            low_roll_threshold: or_default(config.low_roll_threshold, DEFAULT_LOW_ROLL_THRESHOLD),
            bias_factor: or_default(config.bias_factor, DEFAULT_BIAS_FACTOR),
            history_limit: config
                .history_limit
                .filter(|&limit| limit > 0)
                .unwrap_or(DEFAULT_HISTORY_LIMIT),
            history: VecDeque::new(),
            rng,
        }
    }

    /// Threshold at or above which a roll is high.
    pub fn high_roll_threshold(&self) -> f64 {
        self.high_roll_threshold
    }

    /// Threshold at or below which a roll is low.
    pub fn low_roll_threshold(&self) -> f64 {
        self.low_roll_threshold
    }

    /// Strength of the streak correction.
    pub fn bias_factor(&self) -> f64 {
        self.bias_factor
    }

    /// Maximum number of remembered classifications.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Remembered classifications, oldest first.
    pub fn history(&self) -> impl Iterator<Item = HistoryEntry> + '_ {
        self.history.iter().copied()
    }

    /// Number of high rolls in the history.
    pub fn recent_high_rolls(&self) -> usize {
        self.count(HistoryEntry::High)
    }

    /// Number of low rolls in the history.
    pub fn recent_low_rolls(&self) -> usize {
        self.count(HistoryEntry::Low)
    }

    /// Number of neutral rolls in the history.
    pub fn recent_neutral_rolls(&self) -> usize {
        self.count(HistoryEntry::Neutral)
    }

    /// Forget all remembered classifications.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Push `raw_roll` against the current streak.
    ///
    /// A low majority adds `bias_factor` (capped at 1), a high majority
    /// subtracts it (floored at 0), a tie leaves the roll unchanged.
    pub fn apply_bias(&self, bias_factor: f64, raw_roll: f64) -> f64 {
        let highs = self.recent_high_rolls();
        let lows = self.recent_low_rolls();
        if lows > highs {
            (raw_roll + bias_factor).min(1.0)
        } else if highs > lows {
            (raw_roll - bias_factor).max(0.0)
        } else {
            raw_roll
        }
    }

    /// Classify a roll. Thresholds are inclusive.
    pub fn evaluate_roll(&self, roll: f64) -> HistoryEntry {
        if roll >= self.high_roll_threshold {
            HistoryEntry::High
        } else if roll <= self.low_roll_threshold {
            HistoryEntry::Low
        } else {
            HistoryEntry::Neutral
        }
    }

    fn count(&self, kind: HistoryEntry) -> usize {
        self.history.iter().filter(|&&entry| entry == kind).count()
    }

    fn record(&mut self, entry: HistoryEntry) {
        self.history.push_back(entry);
        while self.history.len() > self.history_limit {
            self.history.pop_front();
        }
    }

    fn generate_raw_roll(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// `value`, unless it is missing, zero or NaN.
fn or_default(value: Option<f64>, default: f64) -> f64 {
    value
        .filter(|v| !v.is_nan() && *v != 0.0)
        .unwrap_or(default)
}

impl Default for KarmicRandomizer {
    fn default() -> Self {
        Self::new(KarmicConfig::default())
    }
}

impl Randomizer for KarmicRandomizer {
    fn generator(&mut self) -> DiceResult<f64> {
        let raw_roll = self.generate_raw_roll();
        let biased_roll = self.apply_bias(self.bias_factor, raw_roll);
        let entry = self.evaluate_roll(biased_roll);
        self.record(entry);
        Ok(biased_roll)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seeded(config: KarmicConfig) -> KarmicRandomizer {
        KarmicRandomizer::with_rng(config, StdRng::seed_from_u64(42))
    }

    fn with_history(entries: &[HistoryEntry]) -> KarmicRandomizer {
        let mut randomizer = seeded(KarmicConfig::default());
        for &entry in entries {
            randomizer.record(entry);
        }
        randomizer
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn defaults_apply_to_missing_fields() {
        let randomizer = KarmicRandomizer::default();
        assert_close(randomizer.high_roll_threshold(), 0.8);
        assert_close(randomizer.low_roll_threshold(), 0.2);
        assert_close(randomizer.bias_factor(), 0.2);
        assert_eq!(randomizer.history_limit(), 10);
        assert_eq!(randomizer.history().count(), 0);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = KarmicConfig::default()
            .with_high_roll_threshold(0.9)
            .with_low_roll_threshold(0.1)
            .with_bias_factor(0.3)
            .with_history_limit(4);
        let randomizer = seeded(config);
        assert_close(randomizer.high_roll_threshold(), 0.9);
        assert_close(randomizer.low_roll_threshold(), 0.1);
        assert_close(randomizer.bias_factor(), 0.3);
        assert_eq!(randomizer.history_limit(), 4);
    }

    #[test]
    fn config_from_partial_json() {
        let config: KarmicConfig = serde_json::from_str(r#"{"bias_factor": 0.5}"#).unwrap();
        assert_eq!(config, KarmicConfig::default().with_bias_factor(0.5));

        let config: KarmicConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, KarmicConfig::default());
    }

    #[test]
    fn evaluate_roll_thresholds_are_inclusive() {
        let randomizer = seeded(KarmicConfig::default());
        assert_eq!(randomizer.evaluate_roll(0.8), HistoryEntry::High);
        assert_eq!(randomizer.evaluate_roll(0.9), HistoryEntry::High);
        assert_eq!(randomizer.evaluate_roll(0.2), HistoryEntry::Low);
        assert_eq!(randomizer.evaluate_roll(0.1), HistoryEntry::Low);
        assert_eq!(randomizer.evaluate_roll(0.5), HistoryEntry::Neutral);
        assert_eq!(randomizer.evaluate_roll(0.79), HistoryEntry::Neutral);
    }

    #[test]
    fn counts_by_classification() {
        let randomizer = with_history(&[
            HistoryEntry::High,
            HistoryEntry::Low,
            HistoryEntry::High,
            HistoryEntry::Neutral,
        ]);
        assert_eq!(randomizer.recent_high_rolls(), 2);
        assert_eq!(randomizer.recent_low_rolls(), 1);
        assert_eq!(randomizer.recent_neutral_rolls(), 1);
    }

    #[test]
    fn empty_history_counts_zero() {
        let randomizer = with_history(&[]);
        assert_eq!(randomizer.recent_high_rolls(), 0);
        assert_eq!(randomizer.recent_low_rolls(), 0);
    }

    #[test]
    fn low_majority_pushes_up() {
        let randomizer = with_history(&[HistoryEntry::Low; 3]);
        assert_close(randomizer.apply_bias(0.3, 0.5), 0.8);

        let randomizer = with_history(&[HistoryEntry::Low, HistoryEntry::Low, HistoryEntry::High]);
        assert_close(randomizer.apply_bias(0.3, 0.5), 0.8);
    }

    #[test]
    fn high_majority_pushes_down() {
        let randomizer = with_history(&[HistoryEntry::High; 3]);
        assert_close(randomizer.apply_bias(0.3, 0.5), 0.2);
    }

    #[test]
    fn balanced_history_passes_through() {
        assert_close(with_history(&[]).apply_bias(0.3, 0.5), 0.5);
        let randomizer = with_history(&[
            HistoryEntry::High,
            HistoryEntry::Low,
            HistoryEntry::Neutral,
        ]);
        assert_close(randomizer.apply_bias(0.3, 0.5), 0.5);
    }

    #[test]
    fn bias_is_clamped_to_unit_interval() {
        let randomizer = with_history(&[HistoryEntry::Low]);
        assert_close(randomizer.apply_bias(0.3, 0.9), 1.0);

        let randomizer = with_history(&[HistoryEntry::High]);
        assert_close(randomizer.apply_bias(0.3, 0.1), 0.0);
    }

    #[test]
    fn history_evicts_oldest_first() {
        let mut randomizer = seeded(KarmicConfig::default().with_history_limit(3));
        randomizer.record(HistoryEntry::Low);
        randomizer.record(HistoryEntry::High);
        randomizer.record(HistoryEntry::Neutral);
        randomizer.record(HistoryEntry::High);
        let history: Vec<_> = randomizer.history().collect();
        assert_eq!(
            history,
            vec![HistoryEntry::High, HistoryEntry::Neutral, HistoryEntry::High]
        );
    }

    #[test]
    fn zero_settings_fall_back_to_defaults() {
        let config = KarmicConfig::default()
            .with_high_roll_threshold(0.0)
            .with_low_roll_threshold(0.0)
            .with_bias_factor(0.0)
            .with_history_limit(0);
        let mut randomizer = seeded(config);
        assert_close(randomizer.high_roll_threshold(), 0.8);
        assert_close(randomizer.low_roll_threshold(), 0.2);
        assert_close(randomizer.bias_factor(), 0.2);
        assert_eq!(randomizer.history_limit(), 10);

        for _ in 0..5 {
            randomizer.generate(1, 20).unwrap();
        }
        assert_eq!(randomizer.history().count(), 5);
    }

    #[test]
    fn nan_settings_fall_back_to_defaults() {
        let config = KarmicConfig::default()
            .with_bias_factor(f64::NAN)
            .with_high_roll_threshold(f64::NAN);
        let randomizer = seeded(config);
        assert_close(randomizer.bias_factor(), 0.2);
        assert_close(randomizer.high_roll_threshold(), 0.8);
    }

    #[test]
    fn each_draw_records_one_entry() {
        let mut randomizer = seeded(KarmicConfig::default());
        for expected in 1..=10 {
            let value = randomizer.generate(1, 20).unwrap();
            assert!((1..=20).contains(&value));
            assert_eq!(randomizer.history().count(), expected);
        }
        randomizer.generate(1, 20).unwrap();
        assert_eq!(randomizer.history().count(), 10);
    }

    #[test]
    fn invalid_range_records_nothing() {
        let mut randomizer = seeded(KarmicConfig::default());
        assert!(randomizer.generate(4, 2).is_err());
        assert_eq!(randomizer.history().count(), 0);
    }

    #[test]
    fn clear_history_resets_bias() {
        let mut randomizer = with_history(&[HistoryEntry::High; 4]);
        randomizer.clear_history();
        assert_close(randomizer.apply_bias(0.2, 0.5), 0.5);
    }

    #[test]
    fn full_bias_breaks_streaks() {
        let mut randomizer = seeded(KarmicConfig::default().with_bias_factor(1.0));
        randomizer.record(HistoryEntry::High);
        assert_eq!(randomizer.generate(1, 20).unwrap(), 1);
        assert_eq!(randomizer.history().last(), Some(HistoryEntry::Low));

        let mut randomizer = seeded(KarmicConfig::default().with_bias_factor(1.0));
        randomizer.record(HistoryEntry::Low);
        assert_eq!(randomizer.generate(1, 20).unwrap(), 20);
        assert_eq!(randomizer.history().last(), Some(HistoryEntry::High));
    }

    proptest! {
        #[test]
        fn history_never_exceeds_limit(seed in any::<u64>(), limit in 1usize..16, draws in 0usize..64) {
            let config = KarmicConfig::default().with_history_limit(limit);
            let mut randomizer = KarmicRandomizer::with_rng(config, StdRng::seed_from_u64(seed));
            for _ in 0..draws {
                randomizer.generate(1, 20).unwrap();
                prop_assert!(randomizer.history().count() <= limit);
            }
            let total = randomizer.recent_high_rolls()
                + randomizer.recent_low_rolls()
                + randomizer.recent_neutral_rolls();
            prop_assert_eq!(total, randomizer.history().count());
            prop_assert_eq!(total, draws.min(limit));
        }

        #[test]
        fn biased_rolls_stay_in_range(seed in any::<u64>(), bias in 0.01f64..1.0, max in 1i64..200) {
            let config = KarmicConfig::default().with_bias_factor(bias);
            let mut randomizer = KarmicRandomizer::with_rng(config, StdRng::seed_from_u64(seed));
            for _ in 0..32 {
                let value = randomizer.generate(1, max).unwrap();
                prop_assert!((1..=max).contains(&value));
            }
        }
    }
}
