use std::fs;
use std::path::Path;

use colored::Colorize;

use kd_core::{Mechanic, RawBound, Roll, RollConfig, RollOutcome, validate_raw_bounds};

use super::{MechanicArgs, RandomizerArgs};

pub fn run(
    min: RawBound,
    max: RawBound,
    mechanic: &MechanicArgs,
    randomizer: &RandomizerArgs,
    modifier: i64,
    times: u32,
    json: bool,
) -> Result<(), String> {
    let (min, max) = validate_raw_bounds(min, max).map_err(|e| e.to_string())?;
    let mechanic = mechanic.build().map_err(|e| e.to_string())?;
    let randomizer = randomizer.config()?.build().map_err(|e| e.to_string())?;

    let mut roll = Roll::new(min, max)
        .with_randomizer(randomizer)
        .with_mechanic(mechanic);
    roll_and_print(&mut roll, modifier, times, json)
}

pub fn run_config(path: &Path, times: u32, json: bool) -> Result<(), String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let config = RollConfig::from_json(&text).map_err(|e| e.to_string())?;
    let mut roll = config.build().map_err(|e| e.to_string())?;
    roll_and_print(&mut roll, config.modifier, times, json)
}

fn roll_and_print(roll: &mut Roll, modifier: i64, times: u32, json: bool) -> Result<(), String> {
    let outcomes = (0..times)
        .map(|_| roll.roll(modifier))
        .collect::<Result<Vec<RollOutcome>, _>>()
        .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&outcomes).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let modifier_label = match modifier {
        0 => String::new(),
        m if m > 0 => format!(" +{m}"),
        m => format!(" {m}"),
    };
    println!(
        "  {} {}..={} {}{}",
        "Rolling".bold(),
        roll.min(),
        roll.max(),
        roll.mechanic().name().dimmed(),
        modifier_label
    );

    for outcome in &outcomes {
        println!("  {}", colorize_outcome(roll, outcome));
    }

    Ok(())
}

/// Natural maximums in green, natural minimums in red.
fn colorize_outcome(roll: &Roll, outcome: &RollOutcome) -> colored::ColoredString {
    let line = outcome.to_string();
    if outcome.natural >= roll.max() {
        line.green().bold()
    } else if outcome.natural <= roll.min() {
        line.red().bold()
    } else {
        line.normal()
    }
}
