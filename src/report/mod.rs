//! Plain-stdout reporters for both pipelines.

use crate::talents::{Goal, PathOutcome};
use crate::training::SimulationOutcome;

/// Print every surviving path with the resolved tally per goal class.
pub fn print_talent_report(goals: &[Goal], outcomes: &[PathOutcome]) {
    for outcome in outcomes {
        println!("{}:", outcome.path);
        for (goal, tally) in goals.iter().zip(&outcome.tallies) {
            println!("\t{}: {}", goal.class.name, tally);
        }
    }
}

/// Print the estimated odds of maxing for one batch size.
pub fn print_training_report(max_batch: u32, outcome: &SimulationOutcome) {
    println!(
        "Batch: {}  Odds of maxing: {:.2}%",
        max_batch,
        outcome.odds_percent()
    );
}
