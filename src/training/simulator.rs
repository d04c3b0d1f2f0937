//! Monte Carlo estimation of the odds of training a hero to max level.

use crate::training::tier::TrainingResource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Target level a run must reach to count as a success.
pub const MAX_LEVEL: u32 = 8;

/// Aggregate result of a simulation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOutcome {
    pub successes: u32,
    pub runs: u32,
}

impl SimulationOutcome {
    /// Estimated success probability as a percentage.
    pub fn odds_percent(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        f64::from(self.successes) / f64::from(self.runs) * 100.0
    }
}

/// Estimate the probability of reaching `MAX_LEVEL` before the ascension
/// list runs dry, applying at most `max_batch` resources per step.
///
/// Runs `num_runs` independent simulations. Each run draws from its own
/// `ChaCha8Rng` stream derived from `seed` (run index = stream id), so
/// results are reproducible and runs stay independent.
pub fn estimate_max_odds(
    ascensions: &[u32],
    max_batch: u32,
    resource: &TrainingResource,
    num_runs: u32,
    seed: u64,
) -> SimulationOutcome {
    estimate_odds(ascensions, max_batch, resource, num_runs, seed, MAX_LEVEL)
}

/// Same as [`estimate_max_odds`] with an explicit target level.
pub fn estimate_odds(
    ascensions: &[u32],
    max_batch: u32,
    resource: &TrainingResource,
    num_runs: u32,
    seed: u64,
    target_level: u32,
) -> SimulationOutcome {
    let mut successes = 0;
    for run in 0..num_runs {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(u64::from(run));
        if run_training(ascensions, max_batch, resource, target_level, &mut rng) {
            successes += 1;
        }
    }
    tracing::debug!(successes, num_runs, max_batch, "simulation batch done");
    SimulationOutcome {
        successes,
        runs: num_runs,
    }
}

/// One simulated training career. Returns true when the hero reaches
/// `target_level` before exhausting the ascension requirements.
///
/// The batch never applies more resources than needed to clear the current
/// ascension. The level-up check compares one `[0,100)` draw against
/// `batch * chance`: a linear percentage threshold, deliberately not a
/// compounded per-resource probability.
fn run_training(
    ascensions: &[u32],
    max_batch: u32,
    resource: &TrainingResource,
    target_level: u32,
    rng: &mut impl Rng,
) -> bool {
    let xp = i64::from(resource.xp.max(1));
    let mut remaining: Vec<i64> = ascensions.iter().map(|&a| i64::from(a)).collect();
    let mut level = 1;
    while let Some(&front) = remaining.first() {
        let needed = (front + xp - 1) / xp;
        let batch = needed.min(i64::from(max_batch)).max(0) as u32;
        if rng.gen_range(0..100u32) < batch * resource.chance {
            level += 1;
        }
        if level == target_level {
            return true;
        }
        remaining[0] = front - i64::from(batch) * xp;
        if remaining[0] <= 0 {
            remaining.remove(0);
        }
    }
    false
}
