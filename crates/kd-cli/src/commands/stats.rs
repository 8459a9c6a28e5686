use std::collections::BTreeMap;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use kd_core::{RawBound, validate_raw_bounds};

use super::RandomizerArgs;

/// Ranges wider than this only list the values that came up.
const MAX_LISTED_SPAN: i64 = 100;

pub fn run(
    min: RawBound,
    max: RawBound,
    randomizer: &RandomizerArgs,
    samples: u32,
) -> Result<(), String> {
    let (min, max) = validate_raw_bounds(min, max).map_err(|e| e.to_string())?;
    if samples == 0 {
        return Err("--samples must be at least 1".to_string());
    }
    let mut randomizer = randomizer.config()?.build().map_err(|e| e.to_string())?;

    let mut counts: BTreeMap<i64, u32> = BTreeMap::new();
    if max - min <= MAX_LISTED_SPAN {
        counts.extend((min..=max).map(|value| (value, 0)));
    }
    // u32 samples of i64 values always fit.
    let mut total: i128 = 0;
    for _ in 0..samples {
        let value = randomizer.generate(min, max).map_err(|e| e.to_string())?;
        *counts.entry(value).or_default() += 1;
        total += i128::from(value);
    }

    println!("  {} {min}..={max} ({samples} samples)", "Distribution".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Value", "Count", "Share"]);
    for (value, count) in &counts {
        let share = f64::from(*count) / f64::from(samples);
        table.add_row(vec![value.to_string(), count.to_string(), format_share(share)]);
    }
    println!("{table}");
    println!();
    println!("  mean {:.2}", total as f64 / f64::from(samples));

    Ok(())
}

fn format_share(share: f64) -> String {
    let filled = (share * 20.0).round() as usize;
    let bar = "#".repeat(filled);
    format!("{:>6.2}% {}", share * 100.0, bar.green())
}
