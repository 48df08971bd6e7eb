//! Example: sensor coverage along a row, then remapping seed ranges.
//!
//! Run with: `cargo run --example coverage`

use std::error::Error;

use log::LevelFilter;
use rangekit::{Interval, IntervalSet, RangeMap};
use simple_logger::SimpleLogger;

/// Sensor position and the Manhattan radius it covers.
const SENSORS: [(i64, i64, i64); 4] = [(8, 7, 9), (2, 18, 7), (16, 7, 5), (20, 14, 8)];

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().with_level(LevelFilter::Debug).init()?;

    println!("=== Row Coverage ===\n");
    let row = 10;
    let mut covered = IntervalSet::new();
    for (x, y, radius) in SENSORS {
        let reach = radius - (row - y).abs();
        if reach >= 0 {
            let span = Interval::new(x - reach, x + reach);
            println!("sensor at ({}, {}) covers {}", x, y, span);
            covered.insert(span);
        }
    }
    println!("\nCovered on row {}: {}", row, covered);
    println!("Covered positions: {}", covered.total_length());

    let window = Interval::new(0, 30);
    println!("Uncovered inside {}: {:?}", window, covered.gaps(window));

    println!("\n=== Range Remapping ===\n");
    let mut seed_to_soil = RangeMap::new();
    seed_to_soil.add_translation(50, 98, 2)?;
    seed_to_soil.add_translation(52, 50, 48)?;

    let seeds: IntervalSet<i64> = ["79-92", "55-67"]
        .iter()
        .map(|text| text.parse::<Interval<i64>>())
        .collect::<Result<_, _>>()?;
    println!("Seeds: {}", seeds);

    let soil = seed_to_soil.map_set(&seeds);
    println!("Soil:  {}", soil);
    if let Some(bounds) = soil.bounds() {
        println!("Lowest soil value: {}", bounds.min());
    }

    Ok(())
}
