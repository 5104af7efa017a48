//! Bot-vs-bot match runner.

use doomspire_core::player::PlayerStats;
use doomspire_core::{
    resolve_with, AdventureDecks, Bot, BotDifficulty, EngineConfig, EngineError, GameState,
    PlayerId, TurnContext,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Dice rolled by each player at the start of a turn
pub const DICE_PER_TURN: usize = 2;

const PLAYER_NAMES: [&str; 4] = ["Red", "Blue", "Green", "Yellow"];

#[derive(Debug, Error)]
pub enum SimError {
    #[error("Could not set up the game: {0}")]
    Setup(#[from] EngineError),

    #[error("Bot for player {0} had no action")]
    NoAction(PlayerId),
}

/// Final standing of one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub name: String,
    pub fame: u32,
    pub gold: u32,
    pub claims: usize,
    pub stats: PlayerStats,
}

/// Outcome of one simulated game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameReport {
    pub seed: u64,
    pub rounds: u32,
    pub winner: Option<String>,
    pub actions: u32,
    pub failed_actions: u32,
    pub players: Vec<PlayerReport>,
}

/// One game between four bots
pub struct Match {
    seed: u64,
    state: GameState,
    decks: AdventureDecks,
    bots: Vec<Bot>,
    rng: StdRng,
    actions: u32,
    failed_actions: u32,
}

impl Match {
    /// Set up a game. Even seats get medium bots, odd seats easy ones.
    pub fn new(seed: u64, config: EngineConfig) -> Result<Self, SimError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let names = PLAYER_NAMES.iter().map(|n| n.to_string()).collect();
        let state = GameState::new(names, config, &mut rng)?;
        let decks = AdventureDecks::new(&mut rng);
        let bots = (0..state.player_count() as PlayerId)
            .map(|id| {
                let difficulty = if id % 2 == 0 {
                    BotDifficulty::Medium
                } else {
                    BotDifficulty::Easy
                };
                Bot::with_seed(id, difficulty, seed.wrapping_add(u64::from(id) + 1))
            })
            .collect();

        Ok(Self {
            seed,
            state,
            decks,
            bots,
            rng,
            actions: 0,
            failed_actions: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Roll the current player's dice, spend each on one action, then pass
    /// the turn
    pub fn play_turn(&mut self) -> Result<(), SimError> {
        let player = self.state.current_player;
        let dice: Vec<u8> = (0..DICE_PER_TURN).map(|_| self.rng.gen_range(1..=6)).collect();
        debug!(player, ?dice, round = self.state.round, "turn started");

        for die in dice {
            if self.state.ended {
                break;
            }
            let bot = &mut self.bots[usize::from(player)];
            let action = bot
                .choose_action(&self.state, die)
                .ok_or(SimError::NoAction(player))?;

            let mut ctx = TurnContext::new(vec![die], &mut self.decks, &mut self.rng);
            let result = resolve_with(&self.state, &action, &mut ctx, bot);

            self.actions += 1;
            if result.success {
                debug!(player, "{}", result.summary);
            } else {
                self.failed_actions += 1;
                warn!(player, "action failed: {}", result.summary);
            }
            self.state = result.state;
        }

        if !self.state.ended {
            self.state = self.state.clone().advance_turn();
        }
        Ok(())
    }

    /// Play until someone wins or `max_rounds` have been played
    pub fn run(mut self, max_rounds: u32) -> Result<GameReport, SimError> {
        while !self.state.ended && self.state.round <= max_rounds {
            self.play_turn()?;
        }

        let report = self.report();
        match &report.winner {
            Some(name) => info!(seed = self.seed, rounds = report.rounds, "{name} won"),
            None => info!(seed = self.seed, "no winner after {max_rounds} rounds"),
        }
        Ok(report)
    }

    pub fn report(&self) -> GameReport {
        let players = self
            .state
            .players
            .iter()
            .map(|p| PlayerReport {
                name: p.name.clone(),
                fame: p.fame,
                gold: p.resources.gold,
                claims: self.state.claimed_tiles(p.id).len(),
                stats: p.stats.clone(),
            })
            .collect();

        GameReport {
            seed: self.seed,
            rounds: self.state.round,
            winner: self
                .state
                .winner
                .and_then(|id| self.state.player(id))
                .map(|p| p.name.clone()),
            actions: self.actions,
            failed_actions: self.failed_actions,
            players,
        }
    }
}
