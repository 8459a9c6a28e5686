pub mod roll;
pub mod stats;

use clap::{Args, ValueEnum};

use kd_core::{
    DiceError, KarmicConfig, MechanicKind, RandomizerConfig, RerollMechanic, RerollOptions,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MechanicChoice {
    Single,
    Advantage,
    Disadvantage,
    Exploding,
    Reroll,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RandomizerChoice {
    Simple,
    Seeded,
    Weighted,
    Karmic,
}

#[derive(Debug, Args)]
pub struct MechanicArgs {
    /// How draws combine into a result
    #[arg(short, long, value_enum, default_value_t = MechanicChoice::Single)]
    pub mechanic: MechanicChoice,

    /// Values that trigger a reroll (reroll mechanic), comma separated
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    pub target: Vec<i64>,

    /// Maximum rerolls per roll (reroll mechanic, default 1)
    #[arg(long, allow_negative_numbers = true)]
    pub max_rerolls: Option<i64>,
}

impl MechanicArgs {
    pub fn build(&self) -> Result<MechanicKind, DiceError> {
        Ok(match self.mechanic {
            MechanicChoice::Single => MechanicKind::Single,
            MechanicChoice::Advantage => MechanicKind::Advantage,
            MechanicChoice::Disadvantage => MechanicKind::Disadvantage,
            MechanicChoice::Exploding => MechanicKind::Exploding,
            MechanicChoice::Reroll => {
                let options = RerollOptions {
                    target: self.target.clone(),
                    max_reroll_count: self.max_rerolls,
                };
                MechanicKind::Reroll(RerollMechanic::new(options)?)
            }
        })
    }
}

#[derive(Debug, Args)]
pub struct RandomizerArgs {
    /// Where randomness comes from
    #[arg(short, long, value_enum, default_value_t = RandomizerChoice::Simple)]
    pub randomizer: RandomizerChoice,

    /// Starting seed (seeded randomizer)
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Weights of faces 1..N in order (weighted randomizer), comma separated
    #[arg(long, value_delimiter = ',')]
    pub weights: Vec<f64>,

    /// Strength of the streak correction (karmic randomizer)
    #[arg(long)]
    pub bias_factor: Option<f64>,

    /// Number of remembered rolls (karmic randomizer)
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Raw roll at or above which a draw counts as high (karmic randomizer)
    #[arg(long)]
    pub high_roll_threshold: Option<f64>,

    /// Raw roll at or below which a draw counts as low (karmic randomizer)
    #[arg(long)]
    pub low_roll_threshold: Option<f64>,
}

impl RandomizerArgs {
    pub fn config(&self) -> Result<RandomizerConfig, String> {
        Ok(match self.randomizer {
            RandomizerChoice::Simple => RandomizerConfig::Simple,
            RandomizerChoice::Seeded => RandomizerConfig::Seeded {
                seed: self
                    .seed
                    .ok_or("the seeded randomizer needs --seed")?,
            },
            RandomizerChoice::Weighted => RandomizerConfig::Weighted {
                weights: self.weights.clone(),
            },
            RandomizerChoice::Karmic => RandomizerConfig::Karmic(KarmicConfig {
                high_roll_threshold: self.high_roll_threshold,
                low_roll_threshold: self.low_roll_threshold,
                bias_factor: self.bias_factor,
                history_limit: self.history_limit,
            }),
        })
    }
}
