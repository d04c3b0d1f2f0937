//! Path search over the talent grid with lexicographic priority filtering.

use crate::core::error::{ForgeError, Result};
use crate::stats::{StatKind, StatTally};
use crate::talents::class::{ClassTalents, Path};

/// Fixed width of the path search used by the CLI. Every evaluated class
/// must carry exactly this many splits.
pub const SEARCH_WIDTH: usize = 7;

/// One optimization request: a class and the ordered stat priorities to
/// maximize for it, first entry dominating.
#[derive(Debug, Clone)]
pub struct Goal<'a> {
    pub class: &'a ClassTalents,
    pub priorities: Vec<StatKind>,
}

/// A surviving path with the resolved tally per goal, in goal order.
#[derive(Debug, Clone)]
pub struct PathOutcome {
    pub path: Path,
    pub tallies: Vec<StatTally>,
}

/// Parse a priority string of single-character stat codes.
pub fn parse_priorities(codes: &str) -> Result<Vec<StatKind>> {
    codes.chars().map(StatKind::from_code).collect()
}

/// Find the paths of length `width` that are simultaneously optimal for all
/// goals.
///
/// All `2^width` candidate paths are resolved against every goal's class,
/// then narrowed by elimination rounds: round `i` keeps, for each goal with
/// an `i`-th priority, only the paths achieving the round maximum of that
/// stat, intersecting goal by goal. Goals with fewer priorities than the
/// round index are skipped. Ties that no priority breaks leave multiple
/// survivors.
///
/// A class whose branch count differs from `width` is rejected with
/// `ShapeMismatch` before any search happens.
pub fn evaluate(goals: &[Goal], width: usize) -> Result<Vec<PathOutcome>> {
    for goal in goals {
        if goal.class.branches.len() != width {
            return Err(ForgeError::ShapeMismatch {
                class: goal.class.name.clone(),
                expected: width,
                actual: goal.class.branches.len(),
            });
        }
    }

    let mut survivors: Vec<PathOutcome> = Path::enumerate_all(width)
        .into_iter()
        .map(|path| {
            let tallies = goals
                .iter()
                .map(|goal| goal.class.resolve_path(&path))
                .collect::<Result<Vec<_>>>()?;
            Ok(PathOutcome { path, tallies })
        })
        .collect::<Result<_>>()?;

    let rounds = goals.iter().map(|g| g.priorities.len()).max().unwrap_or(0);
    for round in 0..rounds {
        for (idx, goal) in goals.iter().enumerate() {
            let Some(&priority) = goal.priorities.get(round) else {
                continue;
            };
            let best = survivors
                .iter()
                .map(|outcome| outcome.tallies[idx].get(priority))
                .max()
                .unwrap_or(0);
            survivors.retain(|outcome| outcome.tallies[idx].get(priority) == best);
        }
        tracing::debug!(round, remaining = survivors.len(), "elimination round");
    }

    Ok(survivors)
}
