//! Player state and resource management.
//!
//! This module contains:
//! - Player struct with fame, might, resources, champions and boats
//! - ResourceBundle for managing resource counts
//! - Champions (units) and boats (vessels)
//! - Buildings and per-player statistics

use crate::board::{PlayerId, Resource};
use crate::cards::Item;
use crate::position::{OceanZone, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of items a champion can carry
pub const CHAMPION_ITEM_CAPACITY: usize = 2;

/// Player color for UI rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}

impl PlayerColor {
    /// Get color for a player index
    pub fn for_player(id: PlayerId) -> Self {
        match id % 4 {
            0 => PlayerColor::Red,
            1 => PlayerColor::Blue,
            2 => PlayerColor::Green,
            _ => PlayerColor::Yellow,
        }
    }
}

/// A bundle of resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceBundle {
    pub food: u32,
    pub wood: u32,
    pub ore: u32,
    pub gold: u32,
}

impl ResourceBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bundle with specific amounts
    pub fn with_amounts(food: u32, wood: u32, ore: u32, gold: u32) -> Self {
        Self {
            food,
            wood,
            ore,
            gold,
        }
    }

    /// Create a bundle with a single resource
    pub fn single(resource: Resource, amount: u32) -> Self {
        let mut bundle = Self::new();
        bundle.add(resource, amount);
        bundle
    }

    /// Total number of resources, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        self.checked_total().unwrap_or(u32::MAX)
    }

    /// Total number of resources, or `None` if it does not fit in a `u32`
    pub fn checked_total(&self) -> Option<u32> {
        self.food
            .checked_add(self.wood)?
            .checked_add(self.ore)?
            .checked_add(self.gold)
    }

    /// Check if bundle is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get count of a specific resource
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Food => self.food,
            Resource::Wood => self.wood,
            Resource::Ore => self.ore,
            Resource::Gold => self.gold,
        }
    }

    /// Add resources to the bundle
    pub fn add(&mut self, resource: Resource, amount: u32) {
        match resource {
            Resource::Food => self.food = self.food.saturating_add(amount),
            Resource::Wood => self.wood = self.wood.saturating_add(amount),
            Resource::Ore => self.ore = self.ore.saturating_add(amount),
            Resource::Gold => self.gold = self.gold.saturating_add(amount),
        }
    }

    /// Add another bundle to this one, saturating each count
    pub fn add_bundle(&mut self, other: &ResourceBundle) {
        self.food = self.food.saturating_add(other.food);
        self.wood = self.wood.saturating_add(other.wood);
        self.ore = self.ore.saturating_add(other.ore);
        self.gold = self.gold.saturating_add(other.gold);
    }

    /// Sum of two bundles, or `None` if any count overflows
    pub fn checked_add_bundle(&self, other: &ResourceBundle) -> Option<Self> {
        Some(Self {
            food: self.food.checked_add(other.food)?,
            wood: self.wood.checked_add(other.wood)?,
            ore: self.ore.checked_add(other.ore)?,
            gold: self.gold.checked_add(other.gold)?,
        })
    }

    /// Resource types present in this bundle
    pub fn kinds(&self) -> Vec<Resource> {
        Resource::ALL
            .into_iter()
            .filter(|r| self.get(*r) > 0)
            .collect()
    }
}

impl fmt::Display for ResourceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Resource::ALL
            .into_iter()
            .filter(|r| self.get(*r) > 0)
            .map(|r| format!("{} {}", self.get(r), r.name()))
            .collect();
        if parts.is_empty() {
            f.write_str("nothing")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Buildings a player can construct in their home
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Building {
    Blacksmith,
    Market,
    Chapel,
    /// Naval upgrade: boats support combat and protect coastal claims
    Warship,
}

/// A follower travelling with a champion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follower {
    pub name: String,
}

/// A champion (unit) on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Id scoped to the owning player (1-based)
    pub id: u8,
    pub position: Position,
    /// At most [`CHAMPION_ITEM_CAPACITY`] items
    pub items: Vec<Item>,
    pub followers: Vec<Follower>,
}

impl Champion {
    pub fn new(id: u8, position: Position) -> Self {
        Self {
            id,
            position,
            items: Vec::new(),
            followers: Vec::new(),
        }
    }

    /// Combat bonus from carried items
    pub fn item_bonus(&self) -> u32 {
        self.items.iter().map(|i| i.combat_bonus).sum()
    }

    pub fn has_free_item_slot(&self) -> bool {
        self.items.len() < CHAMPION_ITEM_CAPACITY
    }
}

/// A boat (vessel) sailing one of the ocean zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boat {
    /// Id scoped to the owning player (1-based)
    pub id: u8,
    pub zone: OceanZone,
}

/// Cumulative per-player counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub champion_wins: u32,
    pub champion_losses: u32,
    pub monsters_defeated: u32,
    pub monster_losses: u32,
    pub tiles_explored: u32,
    pub tiles_claimed: u32,
    pub adventures: u32,
    pub resources_harvested: u32,
}

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID (0-3)
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Player color
    pub color: PlayerColor,
    pub fame: u32,
    pub might: u32,
    pub resources: ResourceBundle,
    pub champions: Vec<Champion>,
    pub boats: Vec<Boat>,
    pub buildings: Vec<Building>,
    /// Home tile, permanently claimed by this player
    pub home: Position,
    /// Maximum number of claimed tiles, home included
    pub max_claims: u32,
    pub stats: PlayerStats,
}

impl Player {
    /// Create a new player with one champion at home and one boat in the
    /// home quadrant's sea zone
    pub fn new(id: PlayerId, name: String, home: Position, max_claims: u32) -> Self {
        Self {
            id,
            name,
            color: PlayerColor::for_player(id),
            fame: 0,
            might: 0,
            resources: ResourceBundle::new(),
            champions: vec![Champion::new(1, home)],
            boats: vec![Boat {
                id: 1,
                zone: OceanZone::for_quadrant(home),
            }],
            buildings: Vec::new(),
            home,
            max_claims,
            stats: PlayerStats::default(),
        }
    }

    pub fn champion(&self, id: u8) -> Option<&Champion> {
        self.champions.iter().find(|c| c.id == id)
    }

    pub fn champion_mut(&mut self, id: u8) -> Option<&mut Champion> {
        self.champions.iter_mut().find(|c| c.id == id)
    }

    pub fn boat(&self, id: u8) -> Option<&Boat> {
        self.boats.iter().find(|b| b.id == id)
    }

    pub fn has_building(&self, building: Building) -> bool {
        self.buildings.contains(&building)
    }

    /// Naval upgrade: boats count as warships
    pub fn has_warships(&self) -> bool {
        self.has_building(Building::Warship)
    }

    /// Pay the defeat toll: 1 gold if available, otherwise 1 fame (never below 0)
    pub fn pay_defeat_toll(&mut self) -> Toll {
        if self.resources.gold > 0 {
            self.resources.gold -= 1;
            Toll::Gold
        } else if self.fame > 0 {
            self.fame -= 1;
            Toll::Fame
        } else {
            Toll::Nothing
        }
    }
}

/// What a defeated player paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toll {
    Gold,
    Fame,
    /// Nothing left to pay
    Nothing,
}

impl fmt::Display for Toll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toll::Gold => f.write_str("paid 1 gold"),
            Toll::Fame => f.write_str("lost 1 fame"),
            Toll::Nothing => f.write_str("had nothing to pay"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_bundle_total() {
        let bundle = ResourceBundle::with_amounts(1, 2, 3, 4);
        assert_eq!(bundle.total(), 10);
        assert!(!bundle.is_empty());
        assert!(ResourceBundle::new().is_empty());
    }

    #[test]
    fn test_resource_bundle_add() {
        let mut bundle = ResourceBundle::single(Resource::Ore, 2);
        bundle.add_bundle(&ResourceBundle::with_amounts(1, 0, 1, 0));
        assert_eq!(bundle, ResourceBundle::with_amounts(1, 0, 3, 0));
        assert_eq!(bundle.kinds(), vec![Resource::Food, Resource::Ore]);
    }

    #[test]
    fn test_bundle_overflow_is_detected() {
        let huge = ResourceBundle::with_amounts(u32::MAX, 1, 0, 0);
        assert_eq!(huge.checked_total(), None);
        assert_eq!(huge.total(), u32::MAX);
        assert_eq!(huge.checked_add_bundle(&ResourceBundle::single(Resource::Food, 1)), None);

        let mut saturated = huge;
        saturated.add_bundle(&huge);
        assert_eq!(saturated.food, u32::MAX);
        assert_eq!(saturated.wood, 2);
    }

    #[test]
    fn test_bundle_display() {
        assert_eq!(ResourceBundle::with_amounts(2, 0, 0, 1).to_string(), "2 food, 1 gold");
        assert_eq!(ResourceBundle::new().to_string(), "nothing");
    }

    #[test]
    fn test_toll_prefers_gold() {
        let mut player = Player::new(0, "Test".to_string(), Position::new(0, 0), 10);
        player.resources.gold = 2;
        player.fame = 3;

        assert_eq!(player.pay_defeat_toll(), Toll::Gold);
        assert_eq!(player.resources.gold, 1);
        assert_eq!(player.fame, 3);
    }

    #[test]
    fn test_toll_falls_back_to_fame_and_floors_at_zero() {
        let mut player = Player::new(0, "Test".to_string(), Position::new(0, 0), 10);
        player.fame = 1;

        assert_eq!(player.pay_defeat_toll(), Toll::Fame);
        assert_eq!(player.fame, 0);
        assert_eq!(player.pay_defeat_toll(), Toll::Nothing);
        assert_eq!(player.fame, 0);
    }

    #[test]
    fn test_new_player_starts_at_home() {
        let player = Player::new(3, "D".to_string(), Position::new(7, 7), 10);
        assert_eq!(player.color, PlayerColor::Yellow);
        assert_eq!(player.champion(1).map(|c| c.position), Some(Position::new(7, 7)));
        assert_eq!(player.boat(1).map(|b| b.zone), Some(OceanZone::Se));
        assert!(!player.has_warships());
    }
}
