//! Class talent grids and the paths that walk them.

use crate::core::error::{ForgeError, Result};
use crate::stats::StatTally;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One split in the grid: exactly two alternative stat bundles, of which a
/// path picks one.
pub type BranchChoice = [StatTally; 2];

/// A named talent grid: unconditional base stats plus an ordered sequence of
/// binary splits. Built once by the loader, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassTalents {
    pub name: String,
    pub base: StatTally,
    pub branches: Vec<BranchChoice>,
}

impl ClassTalents {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(ForgeError::Config(
                "class requires a non-empty name".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
            base: StatTally::new(),
            branches: Vec::new(),
        })
    }

    /// Resolve a complete path to its total stat tally: base plus the chosen
    /// alternative at every split. The path length must match the branch
    /// count exactly.
    pub fn resolve_path(&self, path: &Path) -> Result<StatTally> {
        if path.len() != self.branches.len() {
            return Err(ForgeError::ShapeMismatch {
                class: self.name.clone(),
                expected: path.len(),
                actual: self.branches.len(),
            });
        }
        let mut total = self.base;
        for (choice, &selector) in self.branches.iter().zip(path.selectors()) {
            total.merge(&choice[selector as usize]);
        }
        Ok(total)
    }
}

/// A complete sequence of split choices, one binary selector per branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path(Vec<u8>);

impl Path {
    pub fn new(selectors: Vec<u8>) -> Self {
        debug_assert!(selectors.iter().all(|&s| s < 2));
        Self(selectors)
    }

    pub fn selectors(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All `2^width` binary paths of the given width, first selector varying
    /// slowest.
    pub fn enumerate_all(width: usize) -> Vec<Path> {
        (0..1u32 << width)
            .map(|mask| {
                Path(
                    (0..width)
                        .map(|i| ((mask >> (width - 1 - i)) & 1) as u8)
                        .collect(),
                )
            })
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, selector) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", selector)?;
        }
        write!(f, ")")
    }
}
