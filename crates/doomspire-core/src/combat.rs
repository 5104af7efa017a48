//! Combat resolution.
//!
//! Every fight is the same contest: each side rolls a D3 and adds its
//! might plus modifiers (combat support, item bonuses). Champion fights
//! re-roll ties until one side is strictly higher. Monster fights settle
//! ties by the configured [`MonsterTiePolicy`].
//!
//! The functions here only decide who won. Applying the consequences
//! (teleporting home, tolls, rewards) is done by the resolver on the
//! snapshot.

use crate::board::PlayerId;
use crate::cards::Monster;
use crate::config::MonsterTiePolicy;
use crate::game::GameState;
use crate::position::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Roll a three-sided die
pub fn roll_d3<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=3)
}

/// One side's final score in a single roll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRoll {
    pub die: u32,
    pub modifier: u32,
}

impl CombatRoll {
    pub fn total(&self) -> u32 {
        self.die + self.modifier
    }
}

/// Who won a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Attacker,
    Defender,
}

/// The decisive roll of a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    pub winner: Winner,
    pub attacker: CombatRoll,
    pub defender: CombatRoll,
    /// Number of tied rolls before the decisive one
    pub rerolls: u32,
}

impl CombatOutcome {
    pub fn attacker_won(&self) -> bool {
        self.winner == Winner::Attacker
    }
}

/// Roll `attacker_modifier + d3` against `defender_modifier + d3`.
///
/// With `reroll_ties` the contest repeats until one side is strictly
/// higher, so the recorded roll is never a tie. Without it, a tie goes to
/// the defender.
pub fn contest<R: Rng + ?Sized>(
    attacker_modifier: u32,
    defender_modifier: u32,
    reroll_ties: bool,
    rng: &mut R,
) -> CombatOutcome {
    let mut rerolls = 0;
    loop {
        let attacker = CombatRoll {
            die: roll_d3(rng),
            modifier: attacker_modifier,
        };
        let defender = CombatRoll {
            die: roll_d3(rng),
            modifier: defender_modifier,
        };

        let winner = if attacker.total() > defender.total() {
            Some(Winner::Attacker)
        } else if defender.total() > attacker.total() {
            Some(Winner::Defender)
        } else if !reroll_ties {
            Some(Winner::Defender)
        } else {
            None
        };

        if let Some(winner) = winner {
            return CombatOutcome {
                winner,
                attacker,
                defender,
                rerolls,
            };
        }
        rerolls = rerolls.saturating_add(1);
    }
}

/// Combat strength of a champion fighting at `position`: the owner's
/// might, support from adjacent friends and warships, and carried items.
pub fn champion_strength(
    state: &GameState,
    player: PlayerId,
    champion_id: u8,
    position: Position,
) -> u32 {
    let Some(owner) = state.player(player) else {
        return 0;
    };
    let items = owner
        .champion(champion_id)
        .map(|c| c.item_bonus())
        .unwrap_or(0);
    owner.might + state.combat_support(player, position) + items
}

/// Fight between two champions on `position`. Ties are always re-rolled.
pub fn fight_champion<R: Rng + ?Sized>(
    state: &GameState,
    attacker: (PlayerId, u8),
    defender: (PlayerId, u8),
    position: Position,
    rng: &mut R,
) -> CombatOutcome {
    let attack = champion_strength(state, attacker.0, attacker.1, position);
    let defend = champion_strength(state, defender.0, defender.1, position);
    contest(attack, defend, true, rng)
}

/// Fight between a champion (attacker) and a monster on `position`
pub fn fight_monster<R: Rng + ?Sized>(
    state: &GameState,
    attacker: (PlayerId, u8),
    monster: &Monster,
    position: Position,
    rng: &mut R,
) -> CombatOutcome {
    let attack = champion_strength(state, attacker.0, attacker.1, position);
    let reroll = state.config.monster_tie_policy == MonsterTiePolicy::Reroll;
    contest(attack, monster.might, reroll, rng)
}
