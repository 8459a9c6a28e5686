//! CLI frontend for the Karmadice rolling engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use kd_core::RawBound;

use commands::{MechanicArgs, RandomizerArgs};

#[derive(Parser)]
#[command(
    name = "kd",
    about = "Karmadice: dice rolls with pluggable randomness and mechanics",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll over an inclusive range
    Roll {
        /// Lowest possible value
        #[arg(required_unless_present = "config", allow_negative_numbers = true)]
        min: Option<RawBound>,

        /// Highest possible value
        #[arg(required_unless_present = "config", allow_negative_numbers = true)]
        max: Option<RawBound>,

        #[command(flatten)]
        mechanic: MechanicArgs,

        #[command(flatten)]
        randomizer: RandomizerArgs,

        /// Value added to the natural result
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        modifier: i64,

        /// Number of times to roll
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,

        /// Print outcomes as JSON
        #[arg(long)]
        json: bool,

        /// Read the roll definition from a JSON file (flags are ignored)
        #[arg(short, long, conflicts_with_all = ["min", "max"])]
        config: Option<PathBuf>,
    },

    /// Sample a randomizer and show how often each value comes up
    Stats {
        /// Lowest possible value
        #[arg(allow_negative_numbers = true)]
        min: RawBound,

        /// Highest possible value
        #[arg(allow_negative_numbers = true)]
        max: RawBound,

        #[command(flatten)]
        randomizer: RandomizerArgs,

        /// Number of draws
        #[arg(short, long, default_value = "10000")]
        samples: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            min,
            max,
            mechanic,
            randomizer,
            modifier,
            times,
            json,
            config,
        } => match (config, min, max) {
            (Some(path), _, _) => commands::roll::run_config(&path, times, json),
            (None, Some(min), Some(max)) => {
                commands::roll::run(min, max, &mechanic, &randomizer, modifier, times, json)
            }
            (None, _, _) => Err("roll needs <MIN> and <MAX> or --config".to_string()),
        },
        Commands::Stats {
            min,
            max,
            randomizer,
            samples,
        } => commands::stats::run(min, max, &randomizer, samples),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
