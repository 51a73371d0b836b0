//! Command-line sampler for checking weight tables by hand.
use std::collections::BTreeMap;

use anyhow::{bail, Result};
use clap::Parser;
use game_utils::{choose_weighted_map_with, init_logging, with_thread_rng};
use hashbrown::HashMap;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Draw from a weight table and report how often each entry came up
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Number of draws to make
    #[arg(short, long, default_value_t = 10_000)]
    trials: u32,

    /// Seed for a reproducible run; the thread-local generator is used otherwise
    #[arg(short, long)]
    seed: Option<u64>,

    /// Weight table entries written as KEY=WEIGHT; repeated keys accumulate
    #[arg(required = true, value_parser = parse_entry)]
    entries: Vec<(String, f32)>,
}

fn parse_entry(raw: &str) -> Result<(String, f32), String> {
    let (key, weight) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=WEIGHT, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    let weight: f32 = weight
        .trim()
        .parse()
        .map_err(|e| format!("invalid weight in `{raw}`: {e}"))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight must be finite and non-negative in `{raw}`"));
    }
    Ok((key.to_owned(), weight))
}

#[derive(Debug, Serialize)]
struct Outcome {
    weight: f32,
    count: u32,
    expected: f64,
    observed: f64,
}

#[derive(Debug, Serialize)]
struct Summary {
    trials: u32,
    misses: u32,
    outcomes: BTreeMap<String, Outcome>,
}

fn tally<R: Rng>(table: &HashMap<String, f32>, trials: u32, rng: &mut R) -> Summary {
    let total: f32 = table.values().sum();
    let mut counts: BTreeMap<&String, u32> = table.keys().map(|key| (key, 0)).collect();
    let mut scratch = Vec::with_capacity(table.len());
    let mut misses = 0;

    for _ in 0..trials {
        match choose_weighted_map_with(table, &mut scratch, rng) {
            Some(key) => *counts.entry(key).or_default() += 1,
            None => misses += 1,
        }
    }

    let outcomes = counts
        .into_iter()
        .map(|(key, count)| {
            let weight = table.get(key).copied().unwrap_or_default();
            let outcome = Outcome {
                weight,
                count,
                expected: f64::from(weight) / f64::from(total),
                observed: f64::from(count) / f64::from(trials.max(1)),
            };
            (key.clone(), outcome)
        })
        .collect();

    Summary {
        trials,
        misses,
        outcomes,
    }
}

#[expect(clippy::print_stdout, reason = "The report is the CLI's output.")]
fn main() -> Result<()> {
    let args = Args::parse();
    if !init_logging(args.verbose) {
        debug!("logger already installed");
    }

    let mut table: HashMap<String, f32> = HashMap::with_capacity(args.entries.len());
    for (key, weight) in args.entries {
        *table.entry(key).or_default() += weight;
    }
    let total: f32 = table.values().sum();
    if total <= 0.0 {
        bail!("weight table needs a positive total, got {total}");
    }

    info!("drawing {} samples from {} entries", args.trials, table.len());
    let summary = match args.seed {
        Some(seed) => {
            debug!("using seed {seed}");
            tally(&table, args.trials, &mut SmallRng::seed_from_u64(seed))
        }
        None => with_thread_rng(|rng| tally(&table, args.trials, rng)),
    };
    let report = serde_json::to_string_pretty(&summary)?;
    println!("{report}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("gold=3", Ok(("gold".to_owned(), 3.0)))]
    #[case("gold= 0.5", Ok(("gold".to_owned(), 0.5)))]
    #[case("gold", Err(()))]
    #[case("=1", Err(()))]
    #[case("gold=-1", Err(()))]
    #[case("gold=heavy", Err(()))]
    fn parses_entries(#[case] raw: &str, #[case] expected: Result<(String, f32), ()>) {
        assert_eq!(parse_entry(raw).map_err(|_| ()), expected);
    }

    #[rstest]
    fn tally_counts_every_trial() {
        let table: HashMap<String, f32> =
            HashMap::from([("a".to_owned(), 1.0), ("b".to_owned(), 3.0)]);
        let mut rng = SmallRng::seed_from_u64(11);
        let summary = tally(&table, 4_000, &mut rng);
        let counted: u32 = summary.outcomes.values().map(|o| o.count).sum();
        assert_eq!(counted + summary.misses, 4_000);
        let b = summary.outcomes.get("b").map(|o| o.observed).unwrap_or_default();
        assert!((b - 0.75).abs() < 0.05, "observed {b}");
    }

    #[rstest]
    fn tally_draws_from_thread_generator_without_seed() {
        let table: HashMap<String, f32> = HashMap::from([("only".to_owned(), 2.0)]);
        let summary = with_thread_rng(|rng| tally(&table, 500, rng));
        assert_eq!(summary.misses, 0);
        assert_eq!(summary.outcomes.get("only").map(|o| o.count), Some(500));
    }
}
