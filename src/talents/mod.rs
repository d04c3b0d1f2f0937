pub mod class;
pub mod evaluator;

pub use class::{BranchChoice, ClassTalents, Path};
pub use evaluator::{evaluate, parse_priorities, Goal, PathOutcome, SEARCH_WIDTH};
