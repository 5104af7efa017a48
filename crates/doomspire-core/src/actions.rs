//! Actions players can take and the events they produce.
//!
//! Actions arrive as JSON from agents, so the enum is internally tagged
//! and unknown tags land on `Action::Unsupported` instead of failing to
//! parse.

use crate::board::PlayerId;
use crate::cards::{AdventureCard, Item};
use crate::combat::CombatOutcome;
use crate::game::GameState;
use crate::player::{ResourceBundle, Toll};
use crate::position::{OceanZone, Position};
use serde::{Deserialize, Serialize};

/// All actions a player can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Walk a champion along a path, optionally claiming the destination
    MoveChampion {
        player: PlayerId,
        champion_id: u8,
        /// Starts at the champion's current position
        path: Vec<Position>,
        #[serde(default)]
        claim_tile: bool,
    },
    /// Sail a boat through adjacent sea zones, optionally carrying a
    /// champion from a coastal tile to another coastal tile
    MoveBoat {
        player: PlayerId,
        boat_id: u8,
        /// Starts at the boat's current zone
        path: Vec<OceanZone>,
        #[serde(default)]
        champion_id: Option<u8>,
        #[serde(default)]
        champion_drop_position: Option<Position>,
        #[serde(default)]
        claim_tile: bool,
    },
    /// Collect resources
    Harvest {
        player: PlayerId,
        resources: HarvestRequest,
    },
    /// Any action type this engine does not know
    #[serde(other)]
    Unsupported,
}

impl Action {
    /// The acting player, if the action names one
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Action::MoveChampion { player, .. }
            | Action::MoveBoat { player, .. }
            | Action::Harvest { player, .. } => Some(*player),
            Action::Unsupported => None,
        }
    }

    /// Parse an action submitted as JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Requested harvest amounts. Signed because requests come from agents
/// and negative amounts must be rejected rather than be unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestRequest {
    pub food: i32,
    pub wood: i32,
    pub ore: i32,
    pub gold: i32,
}

impl HarvestRequest {
    pub fn new(food: i32, wood: i32, ore: i32, gold: i32) -> Self {
        Self {
            food,
            wood,
            ore,
            gold,
        }
    }

    /// Convert to a bundle, or `None` if any amount is negative
    pub fn to_bundle(&self) -> Option<ResourceBundle> {
        Some(ResourceBundle::with_amounts(
            u32::try_from(self.food).ok()?,
            u32::try_from(self.wood).ok()?,
            u32::try_from(self.ore).ok()?,
            u32::try_from(self.gold).ok()?,
        ))
    }
}

impl From<ResourceBundle> for HarvestRequest {
    fn from(bundle: ResourceBundle) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(
            clamp(bundle.food),
            clamp(bundle.wood),
            clamp(bundle.ore),
            clamp(bundle.gold),
        )
    }
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A champion reached its destination
    ChampionMoved {
        player: PlayerId,
        champion_id: u8,
        to: Position,
    },

    /// A boat reached its final zone
    BoatSailed {
        player: PlayerId,
        boat_id: u8,
        to: OceanZone,
    },

    /// Two champions fought; the loser went home and paid the toll
    ChampionCombat {
        attacker: PlayerId,
        defender: PlayerId,
        position: Position,
        outcome: CombatOutcome,
        loser_toll: Toll,
    },

    /// A champion beat a monster
    MonsterDefeated {
        player: PlayerId,
        position: Position,
        monster: String,
        outcome: CombatOutcome,
        fame: u32,
        reward: ResourceBundle,
    },

    /// A monster beat a champion, which went home and paid the toll
    DefeatedByMonster {
        player: PlayerId,
        position: Position,
        monster: String,
        outcome: CombatOutcome,
        toll: Toll,
    },

    TileExplored {
        player: PlayerId,
        position: Position,
        fame: u32,
    },

    TileClaimed {
        player: PlayerId,
        position: Position,
    },

    /// An enemy champion now stands on an unprotected claimed tile
    Blockade {
        blockader: PlayerId,
        owner: PlayerId,
        position: Position,
    },

    AdventureDrawn {
        player: PlayerId,
        position: Position,
        card: AdventureCard,
        tokens_left: u8,
    },

    ItemGained {
        player: PlayerId,
        champion_id: u8,
        item: Item,
    },

    /// An item was left on the ground
    ItemDropped {
        player: PlayerId,
        position: Position,
        item: Item,
    },

    Harvested {
        player: PlayerId,
        resources: ResourceBundle,
    },

    GameWon {
        player: PlayerId,
    },
}

impl GameEvent {
    /// One human-readable sentence, using player names from `state`
    pub fn describe(&self, state: &GameState) -> String {
        let name = |id: PlayerId| {
            state
                .player(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("Player {id}"))
        };

        match self {
            GameEvent::ChampionMoved {
                player,
                champion_id,
                to,
            } => format!("{}'s champion {} moved to {}.", name(*player), champion_id, to),
            GameEvent::BoatSailed {
                player,
                boat_id,
                to,
            } => format!("{}'s boat {} sailed to the {} sea.", name(*player), boat_id, to),
            GameEvent::ChampionCombat {
                attacker,
                defender,
                position,
                outcome,
                loser_toll,
            } => {
                let (winner, loser) = if outcome.attacker_won() {
                    (attacker, defender)
                } else {
                    (defender, attacker)
                };
                format!(
                    "{} attacked {} at {} ({} vs {}): {} won, {} was sent home and {}.",
                    name(*attacker),
                    name(*defender),
                    position,
                    outcome.attacker.total(),
                    outcome.defender.total(),
                    name(*winner),
                    name(*loser),
                    loser_toll
                )
            }
            GameEvent::MonsterDefeated {
                player,
                position,
                monster,
                fame,
                reward,
                ..
            } => format!(
                "{} defeated the {} at {} and gained {} fame and {}.",
                name(*player),
                monster,
                position,
                fame,
                reward
            ),
            GameEvent::DefeatedByMonster {
                player,
                position,
                monster,
                toll,
                ..
            } => format!(
                "{} was defeated by the {} at {}, was sent home and {}.",
                name(*player),
                monster,
                position,
                toll
            ),
            GameEvent::TileExplored {
                player,
                position,
                fame,
            } => format!("{} explored {} (+{} fame).", name(*player), position, fame),
            GameEvent::TileClaimed { player, position } => {
                format!("{} claimed {}.", name(*player), position)
            }
            GameEvent::Blockade {
                blockader,
                owner,
                position,
            } => format!(
                "{} is blockading {}'s tile at {}.",
                name(*blockader),
                name(*owner),
                position
            ),
            GameEvent::AdventureDrawn {
                player,
                position,
                card,
                tokens_left,
            } => format!(
                "{} drew {} at {} ({} adventure tokens left).",
                name(*player),
                card,
                position,
                tokens_left
            ),
            GameEvent::ItemGained {
                player,
                champion_id,
                item,
            } => format!(
                "{}'s champion {} picked up the {}.",
                name(*player),
                champion_id,
                item.name
            ),
            GameEvent::ItemDropped {
                player,
                position,
                item,
            } => format!("{} left the {} at {}.", name(*player), item.name, position),
            GameEvent::Harvested { player, resources } => {
                format!("{} harvested {}.", name(*player), resources)
            }
            GameEvent::GameWon { player } => format!("{} has won the game!", name(*player)),
        }
    }
}

/// The outcome of resolving an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// The successor snapshot (the input snapshot on most failures)
    pub state: GameState,
    pub success: bool,
    /// All sub-events, or the violated rule on failure
    pub summary: String,
    pub events: Vec<GameEvent>,
    /// Dice committed to the action, echoed back
    pub dice_used: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_round_trip() {
        let action = Action::MoveChampion {
            player: 1,
            champion_id: 1,
            path: vec![Position::new(0, 7), Position::new(1, 7)],
            claim_tile: true,
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"move_champion\""));
        assert_eq!(Action::from_json(&json).unwrap(), action);
    }

    #[test]
    fn test_unknown_action_type_is_unsupported() {
        let action = Action::from_json(r#"{ "type": "build_castle", "player": 0 }"#).unwrap();
        assert_eq!(action, Action::Unsupported);
        assert_eq!(action.player(), None);
    }

    #[test]
    fn test_harvest_request_defaults_and_negatives() {
        let json = r#"{ "type": "harvest", "player": 2, "resources": { "ore": 2 } }"#;
        let action = Action::from_json(json).unwrap();
        let Action::Harvest { resources, .. } = action else {
            panic!("expected harvest");
        };
        assert_eq!(resources.to_bundle(), Some(ResourceBundle::with_amounts(0, 0, 2, 0)));
        assert_eq!(HarvestRequest::new(1, -1, 0, 0).to_bundle(), None);
    }

    #[test]
    fn test_boat_move_optional_fields() {
        let action = Action::from_json(
            r#"{ "type": "move_boat", "player": 0, "boat_id": 1, "path": ["nw", "ne"] }"#,
        )
        .unwrap();
        assert_eq!(
            action,
            Action::MoveBoat {
                player: 0,
                boat_id: 1,
                path: vec![OceanZone::Nw, OceanZone::Ne],
                champion_id: None,
                champion_drop_position: None,
                claim_tile: false,
            }
        );
    }
}
