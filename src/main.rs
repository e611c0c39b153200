// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::hash::Hash;

use clap::Parser;
use env_logger::Env;

use damerau::{try_distance_within, DistanceError, DistanceTable, Variant};

mod cli;
use cli::display::{self, DistanceReport};
use cli::{Cli, Commands, Pair, Unit};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Distance {
            a,
            b,
            variant,
            unit,
            max,
            normalize,
            json,
        } => run_distance(&a, &b, variant.into(), unit, max, normalize, json),
        Commands::Table {
            a,
            b,
            unit,
            normalize,
        } => run_table(&a, &b, unit, normalize),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_distance(
    a: &str,
    b: &str,
    variant: Variant,
    unit: Unit,
    max: Option<usize>,
    normalize: bool,
    json: bool,
) -> Result<(), String> {
    let pair = Pair::split(a, b, unit, normalize);
    let (a_len, b_len) = pair.lens();
    log::debug!("{} vs {} {} ({})", a_len, b_len, unit.as_str(), variant);

    if max.is_some() && variant == Variant::Unrestricted {
        log::warn!("--max has no early exit for the unrestricted variant; computing in full");
    }

    let d = match &pair {
        Pair::Chars(x, y) => compute(x, y, variant, max),
        Pair::Bytes(x, y) => compute(x, y, variant, max),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let report = DistanceReport {
            a_len,
            b_len,
            variant,
            unit: unit.as_str(),
            distance: d,
            max,
        };
        println!("{}", report.to_json_line()?);
    } else {
        println!("{}", display::format_distance(d, max));
    }
    Ok(())
}

/// Distance under `variant`, or `None` when it exceeds `max`.
fn compute<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    variant: Variant,
    max: Option<usize>,
) -> Result<Option<usize>, DistanceError> {
    match (variant, max) {
        (Variant::Restricted, Some(k)) => try_distance_within(a, b, k),
        (_, Some(k)) => Ok(Some(variant.try_distance(a, b)?).filter(|&d| d <= k)),
        (_, None) => variant.try_distance(a, b).map(Some),
    }
}

fn run_table(a: &str, b: &str, unit: Unit, normalize: bool) -> Result<(), String> {
    let pair = Pair::split(a, b, unit, normalize);
    let table = match &pair {
        Pair::Chars(x, y) => DistanceTable::build(x, y),
        Pair::Bytes(x, y) => DistanceTable::build(x, y),
    }
    .map_err(|e| e.to_string())?;
    let (rows, cols) = pair.labels();

    println!(
        "{}",
        display::render_table(&table, &rows, &cols, display::use_colors())
    );
    println!("distance: {}", table.distance());
    Ok(())
}
