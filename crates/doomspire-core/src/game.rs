//! The world model.
//!
//! `GameState` is the authoritative snapshot of board, players, champions,
//! boats and turn counters. Every method is either a query or a transition
//! that consumes the snapshot and returns its successor; callers that need
//! to keep the old snapshot clone it first.

use crate::board::{home_position, Board, PlayerId, Resource, Tile, PLAYER_COUNT};
use crate::config::{EngineConfig, EngineError};
use crate::player::{Boat, Champion, Player};
use crate::position::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The game board
    pub board: Board,
    /// All players, indexed by id
    pub players: Vec<Player>,
    /// Whose turn it is
    pub current_player: PlayerId,
    /// Who opened the current round
    pub round_starting_player: PlayerId,
    /// Round number (starts at 1)
    pub round: u32,
    pub ended: bool,
    pub winner: Option<PlayerId>,
    /// Rules in effect for this game
    pub config: EngineConfig,
}

/// A partial set of field replacements for [`GameState::updated`]
#[derive(Debug, Clone, Default)]
pub struct GameStateUpdate {
    pub board: Option<Board>,
    pub players: Option<Vec<Player>>,
    pub current_player: Option<PlayerId>,
    pub round_starting_player: Option<PlayerId>,
    pub round: Option<u32>,
    pub ended: Option<bool>,
    pub winner: Option<Option<PlayerId>>,
}

impl GameState {
    /// Create a new game on a freshly generated board
    pub fn new<R: Rng + ?Sized>(
        player_names: Vec<String>,
        config: EngineConfig,
        rng: &mut R,
    ) -> Result<Self, EngineError> {
        let board = Board::generate(rng, config.adventure_tokens);
        Self::from_board(board, player_names, config)
    }

    /// Create a new game on a prepared board.
    /// Each player starts with one champion on their home corner.
    pub fn from_board(
        board: Board,
        player_names: Vec<String>,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        if player_names.len() != PLAYER_COUNT {
            return Err(EngineError::WrongPlayerCount {
                expected: PLAYER_COUNT,
                actual: player_names.len(),
            });
        }

        let players: Vec<Player> = player_names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let id = i as PlayerId;
                Player::new(id, name, home_position(id), config.max_claims)
            })
            .collect();

        // Home corners are claimed from creation, whatever the board said
        let mut board = board;
        for player in &players {
            board.put(Tile::home(player.home, player.id));
        }

        Ok(Self {
            board,
            players,
            current_player: 0,
            round_starting_player: 0,
            round: 1,
            ended: false,
            winner: None,
            config,
        })
    }

    /// Get the number of players
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    // ==================== Queries ====================

    /// Get a player by ID
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Get a tile by position
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.board.tile(position)
    }

    /// Get a champion by owner and owner-scoped id
    pub fn champion(&self, player: PlayerId, id: u8) -> Option<&Champion> {
        self.player(player)?.champion(id)
    }

    pub fn boat(&self, player: PlayerId, id: u8) -> Option<&Boat> {
        self.player(player)?.boat(id)
    }

    /// Every champion standing on a tile, with its owner
    pub fn champions_at(&self, position: Position) -> Vec<(PlayerId, &Champion)> {
        self.players
            .iter()
            .flat_map(|p| p.champions.iter().map(move |c| (p.id, c)))
            .filter(|(_, c)| c.position == position)
            .collect()
    }

    /// Tiles held by a player, home tile included
    pub fn claimed_tiles(&self, player: PlayerId) -> Vec<&Tile> {
        self.board
            .tiles()
            .filter(|t| t.claimed_by() == Some(player))
            .collect()
    }

    /// Claimed starred tiles
    pub fn starred_claims(&self, player: PlayerId) -> usize {
        self.claimed_tiles(player)
            .iter()
            .filter(|t| t.is_starred())
            .count()
    }

    /// Whether a player can claim another tile
    pub fn is_under_claim_quota(&self, player: PlayerId) -> bool {
        match self.player(player) {
            Some(p) => (self.claimed_tiles(player).len() as u32) < p.max_claims,
            None => false,
        }
    }

    /// Combat bonus for `player` fighting at `position`: one per friendly
    /// champion on an orthogonal neighbor, plus one per boat in an adjacent
    /// sea zone when the player has warships.
    pub fn combat_support(&self, player: PlayerId, position: Position) -> u32 {
        let Some(p) = self.player(player) else {
            return 0;
        };

        let neighbors = position.neighbors();
        let champions = p
            .champions
            .iter()
            .filter(|c| neighbors.contains(&c.position))
            .count() as u32;

        let warships = if p.has_warships() {
            let zones = position.adjacent_ocean_zones();
            p.boats.iter().filter(|b| zones.contains(&b.zone)).count() as u32
        } else {
            0
        };

        champions + warships
    }

    /// A claimed tile is protected when its owner has a champion on it or
    /// next to it, or a warship in an adjacent sea zone.
    pub fn is_protected(&self, position: Position) -> bool {
        let Some(owner) = self.tile(position).and_then(Tile::claimed_by) else {
            return false;
        };
        let Some(p) = self.player(owner) else {
            return false;
        };

        if p
            .champions
            .iter()
            .any(|c| c.position == position || c.position.is_adjacent(&position))
        {
            return true;
        }

        if p.has_warships() {
            let zones = position.adjacent_ocean_zones();
            return p.boats.iter().any(|b| zones.contains(&b.zone));
        }

        false
    }

    /// The player blockading a claimed resource tile: the owner of an enemy
    /// champion standing on it, unless the tile is protected.
    pub fn blockading_player(&self, position: Position) -> Option<PlayerId> {
        let tile = self.tile(position)?;
        if !tile.is_resource() {
            return None;
        }
        let owner = tile.claimed_by()?;
        if self.is_protected(position) {
            return None;
        }
        self.champions_at(position)
            .into_iter()
            .map(|(player, _)| player)
            .find(|&player| player != owner)
    }

    /// Resource types the player can currently harvest: those yielded by
    /// claimed resource tiles that are not blockaded.
    pub fn harvestable_resources(&self, player: PlayerId) -> Vec<Resource> {
        let mut result: Vec<Resource> = Vec::new();
        for tile in self.claimed_tiles(player) {
            if self.blockading_player(tile.position).is_some() {
                continue;
            }
            if let Some(yields) = tile.yields() {
                for resource in yields.kinds() {
                    if !result.contains(&resource) {
                        result.push(resource);
                    }
                }
            }
        }
        result.sort_by_key(|r| Resource::ALL.iter().position(|x| x == r));
        result
    }

    /// The first player meeting a fame, gold or territorial victory condition
    pub fn check_winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| {
                p.fame >= self.config.fame_to_win
                    || p.resources.gold >= self.config.gold_to_win
                    || self.starred_claims(p.id) >= self.config.starred_tiles_to_win
            })
            .map(|p| p.id)
    }

    // ==================== Transitions ====================

    /// Apply a partial set of field replacements
    pub fn updated(self, update: GameStateUpdate) -> Self {
        Self {
            board: update.board.unwrap_or(self.board),
            players: update.players.unwrap_or(self.players),
            current_player: update.current_player.unwrap_or(self.current_player),
            round_starting_player: update
                .round_starting_player
                .unwrap_or(self.round_starting_player),
            round: update.round.unwrap_or(self.round),
            ended: update.ended.unwrap_or(self.ended),
            winner: update.winner.unwrap_or(self.winner),
            config: self.config,
        }
    }

    /// Replace the player with the same id
    pub fn with_player(mut self, player: Player) -> Self {
        if let Some(slot) = self.players.get_mut(player.id as usize) {
            *slot = player;
        }
        self
    }

    /// Replace the tile at the same position
    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.board.put(tile);
        self
    }

    /// End the game with a winner
    pub fn with_winner(self, winner: PlayerId) -> Self {
        self.updated(GameStateUpdate {
            ended: Some(true),
            winner: Some(Some(winner)),
            ..Default::default()
        })
    }

    /// End the game if someone has met a victory condition
    pub fn with_victory_check(self) -> Self {
        if self.ended {
            return self;
        }
        match self.check_winner() {
            Some(winner) => self.with_winner(winner),
            None => self,
        }
    }

    /// Pass the turn to the next player. When the rotation wraps back to
    /// the player who opened the round, the next round opens with the
    /// following player.
    pub fn advance_turn(self) -> Self {
        let count = self.player_count().max(1) as PlayerId;
        let next = (self.current_player + 1) % count;

        if next == self.round_starting_player {
            let starter = (self.round_starting_player + 1) % count;
            let round = self.round + 1;
            self.updated(GameStateUpdate {
                current_player: Some(starter),
                round_starting_player: Some(starter),
                round: Some(round),
                ..Default::default()
            })
        } else {
            self.updated(GameStateUpdate {
                current_player: Some(next),
                ..Default::default()
            })
        }
    }
}
