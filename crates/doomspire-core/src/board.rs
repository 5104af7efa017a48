//! Game board representation: tiles, tile kinds and board generation.
//!
//! This module contains:
//! - Resource types
//! - Tile kinds, each carrying only the fields meaningful to it
//! - The fixed 8x8 board grid
//! - Random board generation with home tiles in the corners

use crate::cards::{Item, Monster};
use crate::player::ResourceBundle;
use crate::position::{Position, BOARD_SIZE};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Player identifier (0-3 for a 4-player game)
pub type PlayerId = u8;

/// Number of players in a game
pub const PLAYER_COUNT: usize = 4;

/// Position of the Doomspire tile
pub const DOOMSPIRE_POSITION: Position = Position::new(3, 3);

/// Resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Food,
    Wood,
    Ore,
    Gold,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 4] = [Resource::Food, Resource::Wood, Resource::Ore, Resource::Gold];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Food => "food",
            Resource::Wood => "wood",
            Resource::Ore => "ore",
            Resource::Gold => "gold",
        }
    }
}

/// What kind of tile this is, with the state that only that kind carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TileKind {
    /// A player's home, permanently claimed by its owner
    Home { owner: PlayerId },
    /// Produces resources for whoever claims it
    Resource {
        #[serde(rename = "yield")]
        yields: ResourceBundle,
        /// Counts toward the territorial victory
        starred: bool,
        claimed_by: Option<PlayerId>,
    },
    /// Draws an adventure card per visit while tokens remain
    Adventure { tokens: u8 },
    Temple,
    Trader,
    Mercenary,
    Doomspire,
    Empty,
}

/// A single tile on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    /// Difficulty rank 1-3, fixed at creation
    pub tier: u8,
    /// One-way flag: once true it never reverts
    pub explored: bool,
    pub kind: TileKind,
    pub monster: Option<Monster>,
    /// Items dropped here
    pub items: Vec<Item>,
}

impl Tile {
    /// Create an unexplored tile with the tier of its ring
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            tier: tier_for(position),
            explored: false,
            kind,
            monster: None,
            items: Vec::new(),
        }
    }

    /// An explored home tile owned by `owner`
    pub fn home(position: Position, owner: PlayerId) -> Self {
        let mut tile = Self::new(position, TileKind::Home { owner });
        tile.explored = true;
        tile
    }

    /// An unclaimed resource tile
    pub fn resource(position: Position, yields: ResourceBundle, starred: bool) -> Self {
        Self::new(
            position,
            TileKind::Resource {
                yields,
                starred,
                claimed_by: None,
            },
        )
    }

    pub fn adventure(position: Position, tokens: u8) -> Self {
        Self::new(position, TileKind::Adventure { tokens })
    }

    pub fn with_monster(mut self, monster: Monster) -> Self {
        self.monster = Some(monster);
        self
    }

    pub fn explored(mut self) -> Self {
        self.explored = true;
        self
    }

    /// The player holding this tile: the owner of a home tile or the
    /// claimant of a resource tile
    pub fn claimed_by(&self) -> Option<PlayerId> {
        match self.kind {
            TileKind::Home { owner } => Some(owner),
            TileKind::Resource { claimed_by, .. } => claimed_by,
            _ => None,
        }
    }

    /// Owner of a home tile
    pub fn home_owner(&self) -> Option<PlayerId> {
        match self.kind {
            TileKind::Home { owner } => Some(owner),
            _ => None,
        }
    }

    pub fn is_resource(&self) -> bool {
        matches!(self.kind, TileKind::Resource { .. })
    }

    pub fn is_starred(&self) -> bool {
        matches!(self.kind, TileKind::Resource { starred: true, .. })
    }

    /// Resources this tile yields, if it is a resource tile
    pub fn yields(&self) -> Option<ResourceBundle> {
        match self.kind {
            TileKind::Resource { yields, .. } => Some(yields),
            _ => None,
        }
    }

    /// Remaining adventure tokens, if this is an adventure tile
    pub fn adventure_tokens(&self) -> Option<u8> {
        match self.kind {
            TileKind::Adventure { tokens } => Some(tokens),
            _ => None,
        }
    }

    /// A resource tile nobody has claimed yet
    pub fn is_claimable(&self) -> bool {
        matches!(
            self.kind,
            TileKind::Resource {
                claimed_by: None,
                ..
            }
        )
    }

    /// Set the claimant of a resource tile. Other kinds are left unchanged.
    pub(crate) fn set_claim(&mut self, player: PlayerId) {
        if let TileKind::Resource { claimed_by, .. } = &mut self.kind {
            *claimed_by = Some(player);
        }
    }

    /// Consume one adventure token. Returns false when none were left.
    pub(crate) fn take_adventure_token(&mut self) -> bool {
        match &mut self.kind {
            TileKind::Adventure { tokens } if *tokens > 0 => {
                *tokens -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Tier of a position: outer ring 1, second ring 2, inner 4x4 tier 3
pub fn tier_for(position: Position) -> u8 {
    match position.ring() {
        0 => 1,
        1 => 2,
        _ => 3,
    }
}

/// Home corner of each player
pub fn home_position(player: PlayerId) -> Position {
    let last = BOARD_SIZE - 1;
    match player % 4 {
        0 => Position::new(0, 0),
        1 => Position::new(0, last),
        2 => Position::new(last, 0),
        _ => Position::new(last, last),
    }
}

/// The complete game board. Every cell always holds a tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: [[Tile; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board of empty, unexplored tiles with the four home corners
    pub fn blank() -> Self {
        let tiles = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                Tile::new(Position::new(row as u8, col as u8), TileKind::Empty)
            })
        });
        let mut board = Self { tiles };
        for player in 0..PLAYER_COUNT as PlayerId {
            let home = home_position(player);
            board.put(Tile::home(home, player));
        }
        board
    }

    /// Generate a random board.
    ///
    /// Each tier gets a fixed mix of tile kinds which is shuffled over that
    /// tier's free cells. The Doomspire sits near the centre guarded by the
    /// dragon; tier 3 resource tiles and half of tier 2 resource tiles start
    /// with a monster.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, adventure_tokens: u8) -> Self {
        let mut board = Self::blank();
        board.put(
            Tile::new(DOOMSPIRE_POSITION, TileKind::Doomspire).with_monster(Monster::dragon()),
        );

        for tier in 1..=3u8 {
            let mut cells: Vec<Position> = Position::all()
                .filter(|p| tier_for(*p) == tier)
                .filter(|p| board.tile(*p).is_some_and(|t| t.kind == TileKind::Empty))
                .collect();
            cells.shuffle(rng);

            let (resources, adventures, traders, temples, mercenaries) = match tier {
                1 => (16, 4, 2, 1, 1),
                2 => (12, 5, 1, 1, 1),
                _ => (8, 5, 0, 1, 0),
            };
            let starred = match tier {
                1 => 0,
                2 => 2,
                _ => 3,
            };

            let mut cells = cells.into_iter();
            for i in 0..resources {
                let Some(position) = cells.next() else { break };
                let mut tile = Tile::resource(position, random_yield(tier, rng), i < starred);
                if tier == 3 || (tier == 2 && i % 2 == 0) {
                    tile.monster = Some(Monster::random_for_tier(tier, rng));
                }
                board.put(tile);
            }
            for _ in 0..adventures {
                let Some(position) = cells.next() else { break };
                board.put(Tile::adventure(position, adventure_tokens));
            }
            let specials = std::iter::repeat(TileKind::Trader)
                .take(traders)
                .chain(std::iter::repeat(TileKind::Temple).take(temples))
                .chain(std::iter::repeat(TileKind::Mercenary).take(mercenaries));
            for kind in specials {
                let Some(position) = cells.next() else { break };
                board.put(Tile::new(position, kind));
            }
            // Whatever remains stays empty
        }

        board
    }

    // ==================== Query Methods ====================

    /// Get a tile by position
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        if !position.is_on_board() {
            return None;
        }
        Some(&self.tiles[position.row as usize][position.col as usize])
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flat_map(|row| row.iter())
    }

    /// Replace the tile at its own position, builder style
    pub fn with_tile(mut self, tile: Tile) -> Self {
        self.put(tile);
        self
    }

    /// Replace the tile at its own position. Off-board tiles are ignored.
    pub(crate) fn put(&mut self, tile: Tile) {
        let position = tile.position;
        if position.is_on_board() {
            self.tiles[position.row as usize][position.col as usize] = tile;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::blank()
    }
}

/// Yield of a generated resource tile: one resource type, `tier + 1` units.
/// Gold is rarer than the rest.
fn random_yield<R: Rng + ?Sized>(tier: u8, rng: &mut R) -> ResourceBundle {
    const WEIGHTED: [Resource; 7] = [
        Resource::Food,
        Resource::Food,
        Resource::Wood,
        Resource::Wood,
        Resource::Ore,
        Resource::Ore,
        Resource::Gold,
    ];
    let resource = WEIGHTED[rng.gen_range(0..WEIGHTED.len())];
    ResourceBundle::single(resource, u32::from(tier) + 1)
}
