//! Doomspire - a four-player territory and combat board game engine
//!
//! This crate provides the turn-resolution engine for Doomspire, including:
//! - Positions on the 8x8 board and the four surrounding sea zones
//! - Board, player and world-state snapshots with pure update operations
//! - Dice combat between champions and against monsters
//! - Path and harvest enumeration for agents
//! - Action resolution with arrival consequences and suspendable decisions
//!
//! # Architecture
//!
//! Every operation takes a snapshot and returns a new one; nothing is shared
//! or mutated in place. Randomness is always injected, so a seeded `StdRng`
//! replays a game exactly.
//!
//! # Modules
//!
//! - [`position`]: Board coordinates and sea zones
//! - [`board`]: Tiles and the board grid
//! - [`cards`]: Monsters, items and adventure decks
//! - [`player`]: Player state, champions, boats and resources
//! - [`game`]: The world-state snapshot
//! - [`combat`]: Combat contests
//! - [`paths`]: Reachability and harvest enumeration
//! - [`actions`]: Actions, events and results
//! - [`decision`]: The decision protocol
//! - [`resolver`]: Action and arrival resolution
//! - [`bot`]: Bot players

pub mod actions;
pub mod board;
pub mod bot;
pub mod cards;
pub mod combat;
pub mod config;
pub mod decision;
pub mod game;
pub mod paths;
pub mod player;
pub mod position;
pub mod resolver;

// Re-export commonly used types
pub use actions::{Action, ActionResult, GameEvent, HarvestRequest};
pub use board::{Board, PlayerId, Resource, Tile, TileKind};
pub use bot::{candidate_actions, Bot, BotDifficulty};
pub use cards::{AdventureCard, AdventureDecks, Item, Monster};
pub use combat::{CombatOutcome, Winner};
pub use config::{EngineConfig, EngineError, MonsterTiePolicy};
pub use decision::{Decision, DecisionContext, DecisionOption, DecisionSource, FirstOptionDecider};
pub use game::{GameState, GameStateUpdate};
pub use paths::{harvest_options, reachable_destinations, reachable_paths};
pub use player::{Boat, Champion, Player, PlayerColor, ResourceBundle, Toll};
pub use position::{OceanZone, Position};
pub use resolver::{
    resolve_action, resolve_with, resume, PendingDecision, Resolution, RuleViolation, TurnContext,
};
