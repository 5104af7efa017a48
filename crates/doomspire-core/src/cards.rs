//! Adventure content: monsters, treasure items and the tiered adventure decks.
//!
//! Adventure tiles draw from the deck matching their tier. The decks are
//! shared by all players and live outside the game snapshot, so the
//! orchestrator hands them to the engine on each call.

use crate::player::ResourceBundle;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest tile and card tier
pub const MAX_TIER: u8 = 3;

/// A monster guarding a tile or drawn from an adventure deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub tier: u8,
    /// Fixed combat strength added to the monster's roll
    pub might: u32,
    /// Fame granted to whoever defeats it
    pub fame: u32,
    /// Resources granted to whoever defeats it
    pub reward: ResourceBundle,
}

impl Monster {
    pub fn new(name: &str, tier: u8, might: u32, fame: u32, reward: ResourceBundle) -> Self {
        Self {
            name: name.to_string(),
            tier,
            might,
            fame,
            reward,
        }
    }

    /// The guardian of the Doomspire. Defeating it wins the game.
    pub fn dragon() -> Self {
        Self::new("Dragon", MAX_TIER, 8, 5, ResourceBundle::with_amounts(0, 0, 0, 5))
    }

    /// All monsters that can appear at a tier
    pub fn catalogue(tier: u8) -> Vec<Monster> {
        match tier {
            1 => vec![
                Monster::new("Wolf", 1, 1, 1, ResourceBundle::with_amounts(1, 0, 0, 0)),
                Monster::new("Goblin", 1, 1, 1, ResourceBundle::with_amounts(0, 0, 1, 0)),
                Monster::new("Bandit", 1, 2, 1, ResourceBundle::with_amounts(0, 0, 0, 1)),
            ],
            2 => vec![
                Monster::new("Harpy", 2, 3, 2, ResourceBundle::with_amounts(0, 2, 0, 0)),
                Monster::new("Troll", 2, 3, 2, ResourceBundle::with_amounts(0, 0, 2, 0)),
                Monster::new("Ogre", 2, 4, 2, ResourceBundle::with_amounts(0, 0, 0, 2)),
            ],
            _ => vec![
                Monster::new("Wyvern", 3, 5, 3, ResourceBundle::with_amounts(0, 0, 0, 3)),
                Monster::new("Golem", 3, 6, 3, ResourceBundle::with_amounts(0, 0, 3, 0)),
                Monster::new("Lich", 3, 6, 4, ResourceBundle::new()),
            ],
        }
    }

    /// Pick a random monster of the given tier
    pub fn random_for_tier<R: Rng + ?Sized>(tier: u8, rng: &mut R) -> Self {
        let catalogue = Monster::catalogue(tier);
        let index = rng.gen_range(0..catalogue.len());
        catalogue[index].clone()
    }
}

impl fmt::Display for Monster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (might {})", self.name, self.might)
    }
}

/// Equipment a champion can carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Added to the carrier's combat roll
    pub combat_bonus: u32,
}

impl Item {
    pub fn new(name: &str, combat_bonus: u32) -> Self {
        Self {
            name: name.to_string(),
            combat_bonus,
        }
    }
}

/// A card drawn from an adventure deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdventureCard {
    /// Must be fought immediately
    Monster(Monster),
    /// An item for the visiting champion
    Treasure(Item),
    /// Flavour event without a mechanical effect
    Event(String),
}

impl AdventureCard {
    /// The standard deck for a tier (12 cards, unshuffled)
    pub fn standard_deck(tier: u8) -> Vec<AdventureCard> {
        let mut deck = Vec::with_capacity(12);

        // Two copies of each monster
        for monster in Monster::catalogue(tier) {
            deck.push(AdventureCard::Monster(monster.clone()));
            deck.push(AdventureCard::Monster(monster));
        }

        let treasures = match tier {
            1 => [Item::new("Dagger", 1), Item::new("Shield", 1), Item::new("Lantern", 0)],
            2 => [Item::new("Longsword", 2), Item::new("Chainmail", 1), Item::new("Warhorn", 1)],
            _ => [
                Item::new("Dragonbane Spear", 3),
                Item::new("Rune Armor", 2),
                Item::new("Crown of Ash", 1),
            ],
        };
        deck.extend(treasures.into_iter().map(AdventureCard::Treasure));

        for event in ["Wandering Merchant", "Sudden Storm", "Village Festival"] {
            deck.push(AdventureCard::Event(event.to_string()));
        }

        deck
    }
}

impl fmt::Display for AdventureCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdventureCard::Monster(m) => write!(f, "monster {m}"),
            AdventureCard::Treasure(item) => write!(f, "treasure {}", item.name),
            AdventureCard::Event(name) => write!(f, "event {name}"),
        }
    }
}

/// The three shared adventure decks, one per tier.
/// Cards are drawn from the end of each vector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdventureDecks {
    decks: [Vec<AdventureCard>; 3],
}

impl AdventureDecks {
    /// Build and shuffle all three standard decks
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut decks = Self::default();
        for tier in 1..=MAX_TIER {
            decks.refill(tier, rng);
        }
        decks
    }

    /// A deck stacked for a tier: `cards[0]` is drawn first.
    /// Other tiers start empty and are refilled on demand.
    pub fn stacked(tier: u8, mut cards: Vec<AdventureCard>) -> Self {
        cards.reverse();
        let mut decks = Self::default();
        decks.decks[Self::index(tier)] = cards;
        decks
    }

    /// Cards left in a tier's deck
    pub fn remaining(&self, tier: u8) -> usize {
        self.decks[Self::index(tier)].len()
    }

    /// Draw the top card of a tier's deck, reshuffling a fresh standard
    /// deck in when it runs out.
    pub fn draw<R: Rng + ?Sized>(&mut self, tier: u8, rng: &mut R) -> AdventureCard {
        let index = Self::index(tier);
        if self.decks[index].is_empty() {
            self.refill(tier, rng);
        }
        match self.decks[index].pop() {
            Some(card) => card,
            // A standard deck is never empty
            None => AdventureCard::Event("Quiet Road".to_string()),
        }
    }

    fn refill<R: Rng + ?Sized>(&mut self, tier: u8, rng: &mut R) {
        let mut deck = AdventureCard::standard_deck(tier);
        deck.shuffle(rng);
        self.decks[Self::index(tier)] = deck;
    }

    fn index(tier: u8) -> usize {
        usize::from(tier.clamp(1, MAX_TIER) - 1)
    }
}
