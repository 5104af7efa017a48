//! Engine configuration.
//!
//! Every field has a default, so a partial JSON document only overrides
//! what it names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a monster fight that ends in a tie is settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterTiePolicy {
    /// Roll again until one side is strictly higher
    #[default]
    Reroll,
    /// The monster wins ties on the first roll
    MonsterWins,
}

/// Tunable rules of the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fame granted for exploring a tile
    pub exploration_fame: u32,
    /// Claim quota per player, home tile included
    pub max_claims: u32,
    /// Adventure tokens placed on each adventure tile at board generation
    pub adventure_tokens: u8,
    pub monster_tie_policy: MonsterTiePolicy,
    /// Fame needed for a fame victory
    pub fame_to_win: u32,
    /// Gold needed for an economic victory
    pub gold_to_win: u32,
    /// Claimed starred tiles needed for a territorial victory
    pub starred_tiles_to_win: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exploration_fame: 1,
            max_claims: 10,
            adventure_tokens: 2,
            monster_tie_policy: MonsterTiePolicy::Reroll,
            fame_to_win: 15,
            gold_to_win: 20,
            starred_tiles_to_win: 3,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Errors that are not game-rule violations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("A game needs exactly {expected} players, got {actual}")]
    WrongPlayerCount { expected: usize, actual: usize },
}
