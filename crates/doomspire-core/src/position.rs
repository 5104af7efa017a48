//! Square-grid coordinates and the ocean zones around the board.
//!
//! This module provides the foundational coordinate types:
//! - `Position`: identifies a tile on the 8x8 board
//! - `OceanZone`: one of the four sea quadrants boats sail in
//!
//! Movement is orthogonal only, so adjacency is a Manhattan distance of one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A tile position on the board (row 0 is the north edge, col 0 the west edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a new position
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the board
    pub const fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// The orthogonal neighbors that are still on the board (N, E, S, W order)
    pub fn neighbors(&self) -> Vec<Position> {
        let mut result = Vec::with_capacity(4);
        if self.row > 0 {
            result.push(Position::new(self.row - 1, self.col));
        }
        if self.col + 1 < BOARD_SIZE {
            result.push(Position::new(self.row, self.col + 1));
        }
        if self.row + 1 < BOARD_SIZE {
            result.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            result.push(Position::new(self.row, self.col - 1));
        }
        result
    }

    /// Manhattan distance to another position
    pub fn distance_to(&self, other: &Position) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    /// True when the two positions differ by exactly one step on one axis.
    /// Diagonals and identical positions are not adjacent.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        self.distance_to(other) == 1
    }

    /// Whether this tile touches the outer edge of the board
    pub const fn is_edge(&self) -> bool {
        self.row == 0 || self.col == 0 || self.row == BOARD_SIZE - 1 || self.col == BOARD_SIZE - 1
    }

    /// Ring index counted from the outside (0 = outer ring)
    pub fn ring(&self) -> u8 {
        let last = BOARD_SIZE - 1;
        self.row
            .min(self.col)
            .min(last - self.row)
            .min(last - self.col)
    }

    /// Every position on the board in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }

    /// Ocean zones this tile borders. Only edge tiles touch the sea, and
    /// each edge tile touches exactly the zone of its quadrant.
    pub fn adjacent_ocean_zones(&self) -> Vec<OceanZone> {
        if !self.is_edge() {
            return Vec::new();
        }
        vec![OceanZone::for_quadrant(*self)]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four sea zones surrounding the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OceanZone {
    Nw,
    Ne,
    Sw,
    Se,
}

impl OceanZone {
    /// All zones, clockwise from the north-west
    pub const ALL: [OceanZone; 4] = [OceanZone::Nw, OceanZone::Ne, OceanZone::Se, OceanZone::Sw];

    /// The zone whose quadrant contains the given position
    pub fn for_quadrant(position: Position) -> Self {
        let half = BOARD_SIZE / 2;
        match (position.row < half, position.col < half) {
            (true, true) => OceanZone::Nw,
            (true, false) => OceanZone::Ne,
            (false, true) => OceanZone::Sw,
            (false, false) => OceanZone::Se,
        }
    }

    /// Zones a boat can sail to in one step. The zones form a ring,
    /// so each has exactly two neighbors.
    pub fn neighbors(&self) -> [OceanZone; 2] {
        match self {
            OceanZone::Nw => [OceanZone::Ne, OceanZone::Sw],
            OceanZone::Ne => [OceanZone::Nw, OceanZone::Se],
            OceanZone::Se => [OceanZone::Ne, OceanZone::Sw],
            OceanZone::Sw => [OceanZone::Se, OceanZone::Nw],
        }
    }

    /// Whether a boat can sail directly between the two zones
    pub fn is_adjacent(&self, other: &OceanZone) -> bool {
        self.neighbors().contains(other)
    }

    /// Edge tiles bordering this zone
    pub fn coastal_tiles(&self) -> Vec<Position> {
        Position::all()
            .filter(|p| p.is_edge() && OceanZone::for_quadrant(*p) == *self)
            .collect()
    }

    /// Whether the tile at `position` borders this zone
    pub fn touches(&self, position: Position) -> bool {
        position.is_edge() && OceanZone::for_quadrant(position) == *self
    }
}

impl fmt::Display for OceanZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OceanZone::Nw => "nw",
            OceanZone::Ne => "ne",
            OceanZone::Sw => "sw",
            OceanZone::Se => "se",
        };
        f.write_str(name)
    }
}
