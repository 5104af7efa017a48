//! Bot players for Doomspire.
//!
//! Bots spend one die at a time. Difficulty levels:
//! - Easy: Random legal action
//! - Medium: Greedy heuristics (explore, claim, fight what it can beat)

use crate::actions::Action;
use crate::board::{PlayerId, Tile, TileKind};
use crate::combat;
use crate::decision::{Decision, DecisionContext, DecisionSource};
use crate::game::GameState;
use crate::paths::{harvest_options, reachable_paths};
use crate::position::Position;
use crate::resolver::{DROP_ITEM_PREFIX, LEAVE_NEW_ITEM};
use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Bot difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotDifficulty {
    Easy,
    Medium,
}

/// A bot player that can decide on actions
pub struct Bot {
    pub player_id: PlayerId,
    pub difficulty: BotDifficulty,
    rng: StdRng,
}

impl Bot {
    pub fn new(player_id: PlayerId, difficulty: BotDifficulty) -> Self {
        Self {
            player_id,
            difficulty,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(player_id: PlayerId, difficulty: BotDifficulty, seed: u64) -> Self {
        Self {
            player_id,
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose an action to spend a die of value `die` on
    pub fn choose_action(&mut self, game: &GameState, die: u8) -> Option<Action> {
        let candidates = candidate_actions(game, self.player_id, die);
        if candidates.is_empty() {
            return None;
        }

        match self.difficulty {
            BotDifficulty::Easy => candidates.choose(&mut self.rng).cloned(),
            BotDifficulty::Medium => self.choose_medium(game, candidates),
        }
    }

    /// Medium: best score wins, ties broken at random
    fn choose_medium(&mut self, game: &GameState, mut candidates: Vec<Action>) -> Option<Action> {
        candidates.shuffle(&mut self.rng);
        candidates
            .into_iter()
            .map(|action| {
                let score = self.score_action(game, &action);
                (action, score)
            })
            .max_by_key(|(_, score)| *score)
            .map(|(action, _)| action)
    }

    fn score_action(&self, game: &GameState, action: &Action) -> i32 {
        match action {
            Action::MoveChampion {
                champion_id,
                path,
                claim_tile,
                ..
            } => match path.last() {
                Some(&to) => self.score_arrival(game, *champion_id, to, *claim_tile),
                None => i32::MIN,
            },
            Action::MoveBoat {
                champion_id: Some(champion_id),
                champion_drop_position: Some(to),
                claim_tile,
                ..
            } => self.score_arrival(game, *champion_id, *to, *claim_tile) - 1,
            Action::MoveBoat { .. } => -1,
            Action::Harvest { resources, .. } => resources
                .to_bundle()
                .map_or(i32::MIN, |b| (b.total() + b.gold) as i32),
            Action::Unsupported => i32::MIN,
        }
    }

    /// Score ending a move on `to`
    fn score_arrival(&self, game: &GameState, champion_id: u8, to: Position, claim: bool) -> i32 {
        let Some(tile) = game.tile(to) else {
            return i32::MIN;
        };
        let strength = combat::champion_strength(game, self.player_id, champion_id, to) as i32;
        let mut score = 0;

        if !tile.explored {
            score += 3;
        }
        if claim {
            score += if tile.is_starred() { 6 } else { 4 };
        }
        if tile.adventure_tokens().is_some_and(|n| n > 0) {
            score += 2;
        }

        if let Some(monster) = &tile.monster {
            // A D3 swing is 2 at most
            let margin = strength - monster.might as i32;
            score += if margin >= 2 {
                let bonus = monster.fame as i32 * 2;
                if tile.kind == TileKind::Doomspire {
                    bonus + 100
                } else {
                    bonus
                }
            } else {
                -5
            };
        }

        for (owner, champion) in game.champions_at(to) {
            if owner == self.player_id {
                continue;
            }
            let theirs = combat::champion_strength(game, owner, champion.id, to) as i32;
            score += if strength > theirs { 3 } else { -6 };
        }

        if tile.claimed_by().is_some_and(|owner| owner != self.player_id) && tile.is_resource() {
            score += 1;
        }

        score
    }
}

impl DecisionSource for Bot {
    /// Easy picks at random. Medium swaps out the first carried item,
    /// since items found later come from deeper tiers.
    fn decide(&mut self, context: &DecisionContext) -> Decision {
        match self.difficulty {
            BotDifficulty::Easy => {
                let id = context
                    .options
                    .choose(&mut self.rng)
                    .map(|o| o.id.clone())
                    .unwrap_or_default();
                Decision::new(id).with_reasoning("random choice")
            }
            BotDifficulty::Medium => {
                let swap = format!("{DROP_ITEM_PREFIX}0");
                let id = if context.option(&swap).is_some() {
                    swap
                } else {
                    LEAVE_NEW_ITEM.to_string()
                };
                Decision::new(id).with_reasoning("replace the oldest item")
            }
        }
    }
}

/// Every action `player` could spend a die of value `die` on.
///
/// Walks and voyages that would enter another player's home are left out,
/// as are zero-step walks. Harvests always include the pass option, so the
/// list is never empty for a known player.
pub fn candidate_actions(game: &GameState, player: PlayerId, die: u8) -> Vec<Action> {
    let Some(me) = game.player(player) else {
        return Vec::new();
    };
    let budget = u32::from(die);
    let claims_left = game.is_under_claim_quota(player);
    let enterable = |tile: &Tile| tile.home_owner().map_or(true, |owner| owner == player);
    let claimable = |tile: &Tile| claims_left && tile.is_claimable();
    let mut actions = Vec::new();

    for champion in &me.champions {
        for path in reachable_paths(champion.position, budget) {
            if path.len() < 2 {
                continue;
            }
            let Some(tile) = path.last().and_then(|&to| game.tile(to)) else {
                continue;
            };
            if !enterable(tile) {
                continue;
            }
            if claimable(tile) {
                actions.push(Action::MoveChampion {
                    player,
                    champion_id: champion.id,
                    path: path.clone(),
                    claim_tile: true,
                });
            }
            actions.push(Action::MoveChampion {
                player,
                champion_id: champion.id,
                path,
                claim_tile: false,
            });
        }
    }

    if budget > 0 {
        for boat in &me.boats {
            for next in boat.zone.neighbors() {
                let path = vec![boat.zone, next];
                actions.push(Action::MoveBoat {
                    player,
                    boat_id: boat.id,
                    path: path.clone(),
                    champion_id: None,
                    champion_drop_position: None,
                    claim_tile: false,
                });

                for champion in me.champions.iter().filter(|c| boat.zone.touches(c.position)) {
                    for drop in next.coastal_tiles() {
                        let Some(tile) = game.tile(drop).filter(|t| enterable(*t)) else {
                            continue;
                        };
                        actions.push(Action::MoveBoat {
                            player,
                            boat_id: boat.id,
                            path: path.clone(),
                            champion_id: Some(champion.id),
                            champion_drop_position: Some(drop),
                            claim_tile: claimable(tile),
                        });
                    }
                }
            }
        }
    }

    for bundle in harvest_options(&game.harvestable_resources(player), budget) {
        actions.push(Action::Harvest {
            player,
            resources: bundle.into(),
        });
    }

    actions
}
