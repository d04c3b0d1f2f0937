pub mod simulator;
pub mod tier;

pub use simulator::{estimate_max_odds, estimate_odds, SimulationOutcome, MAX_LEVEL};
pub use tier::{Tier, TrainingResource};
