//! Talent Forge - command-line entry point
//!
//! Two batch subcommands: `talents` searches a class grid for the choice
//! paths maximizing a stat priority order, `training` estimates the odds of
//! training a hero to max level by Monte Carlo simulation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use talent_forge::core::error::{ForgeError, Result};
use talent_forge::data::Database;
use talent_forge::report;
use talent_forge::talents::{self, Goal, SEARCH_WIDTH};
use talent_forge::training;

/// Hero talent and training evaluator
#[derive(Parser, Debug)]
#[command(name = "talent-forge")]
#[command(about = "Evaluate talent grid paths and training odds")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the talent grid paths maximizing stat priorities
    Talents {
        /// Extra database file(s), merged over the built-in data
        #[arg(short = 'i', long = "input")]
        input: Vec<PathBuf>,

        /// Class name and priority codes (t a d h l c m), once or twice
        #[arg(required = true, num_args = 2..=4)]
        goal: Vec<String>,
    },
    /// Estimate the odds of training a hero to max level
    Training {
        /// Extra database file(s), merged over the built-in data
        #[arg(short = 'i', long = "input")]
        input: Vec<PathBuf>,

        /// Number of runs to simulate
        #[arg(short = 'n', long = "runs", default_value_t = 1000)]
        runs: u32,

        /// Random seed for reproducible runs
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Rarity to evaluate
        #[arg(value_parser = clap::value_parser!(u32).range(3..=5))]
        goal: u32,

        /// Rarity to train with
        #[arg(value_parser = clap::value_parser!(u32).range(1..=2))]
        source: u32,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talent_forge=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Talents { input, goal } => run_talents(&input, &goal),
        Command::Training {
            input,
            runs,
            seed,
            goal,
            source,
        } => run_training(&input, runs, seed, goal, source),
    }
}

fn run_talents(input: &[PathBuf], goal_args: &[String]) -> Result<()> {
    if goal_args.len() % 2 != 0 {
        return Err(ForgeError::Config(
            "goals must be class-name/priorities pairs".to_string(),
        ));
    }
    let db = Database::load(input)?;

    let goals = goal_args
        .chunks_exact(2)
        .map(|pair| {
            Ok(Goal {
                class: db.class(&pair[0])?,
                priorities: talents::parse_priorities(&pair[1])?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let outcomes = talents::evaluate(&goals, SEARCH_WIDTH)?;
    report::print_talent_report(&goals, &outcomes);
    Ok(())
}

fn run_training(input: &[PathBuf], runs: u32, seed: u64, goal: u32, source: u32) -> Result<()> {
    let db = Database::load(input)?;
    let tier = db.tier(goal)?;
    let resource = db.resource(source)?;

    // Compare a cautious one-at-a-time strategy against a bulk one.
    for max_batch in [1, 10] {
        let outcome =
            training::estimate_max_odds(&tier.ascensions, max_batch, resource, runs, seed);
        report::print_training_report(max_batch, &outcome);
    }
    Ok(())
}
