//! Hero rarity tiers and the training resources that feed them.

use serde::{Deserialize, Serialize};

/// Ascension XP requirements for one hero rarity, in level order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tier {
    pub rarity: u32,
    pub ascensions: Vec<u32>,
}

/// A training input: each application grants `xp` toward the current
/// ascension and contributes `chance` percentage points to the level-up roll.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainingResource {
    pub rarity: u32,
    pub xp: u32,
    pub chance: u32,
}
