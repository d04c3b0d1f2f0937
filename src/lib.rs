//! Talent Forge - hero talent grid and training odds evaluator

pub mod core;
pub mod data;
pub mod report;
pub mod stats;
pub mod talents;
pub mod training;
