//! Action resolution.
//!
//! `resolve_action` validates an action against a snapshot and applies it,
//! running arrival resolution for any champion that ends a move on a tile:
//!
//! 1. entering someone else's home tile fails
//! 2. enemy champions on the tile are fought one by one; losing aborts
//! 3. a monster on the tile is fought; losing sends the champion home but
//!    the action still succeeds
//! 4. a requested claim is validated
//! 5. an unexplored tile is explored for fame
//! 6. the claim is applied
//! 7. standing on an unprotected enemy claim is reported as a blockade
//! 8. an adventure tile with tokens draws a card
//! 9. the successor snapshot and summary are assembled
//!
//! Rule violations never panic: they produce a failed `ActionResult`
//! carrying the input snapshot. The one failure that changes the snapshot
//! is losing a champion fight, since the attacker has already paid.

use crate::actions::{Action, ActionResult, GameEvent, HarvestRequest};
use crate::board::{PlayerId, Tile, TileKind};
use crate::cards::{AdventureCard, AdventureDecks, Item, Monster};
use crate::combat;
use crate::decision::{Decision, DecisionContext, DecisionOption, DecisionSource};
use crate::game::GameState;
use crate::player::{Player, Toll};
use crate::position::{OceanZone, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Decision option id for keeping the current items and leaving the new one
pub const LEAVE_NEW_ITEM: &str = "leave_new";

/// Decision option id prefix for dropping a carried item by index
pub const DROP_ITEM_PREFIX: &str = "drop_";

/// Rule violations. These are expected input errors, reported through a
/// failed `ActionResult` rather than returned as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("The game is over")]
    GameOver,

    #[error("Unrecognized action type")]
    UnsupportedAction,

    #[error("No player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("It is not player {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("Player {player} has no champion {champion}")]
    UnknownChampion { player: PlayerId, champion: u8 },

    #[error("Player {player} has no boat {boat}")]
    UnknownBoat { player: PlayerId, boat: u8 },

    #[error("The path is empty")]
    EmptyPath,

    #[error("The path starts at {actual} but the mover is at {expected}")]
    PathStartMismatch { expected: String, actual: String },

    #[error("{0} is not on the board")]
    OffBoard(Position),

    #[error("Cannot step from {from} to {to}: cells are not orthogonally adjacent")]
    NotAdjacent { from: Position, to: Position },

    #[error("Cannot sail from {from} to {to}: zones are not adjacent")]
    ZonesNotAdjacent { from: OceanZone, to: OceanZone },

    #[error("The move takes {steps} steps but only {budget} were rolled")]
    OverBudget { steps: u32, budget: u32 },

    #[error("Cannot enter another player's home tile at {0}")]
    ForeignHome(Position),

    #[error("Cannot claim {0}: only unclaimed resource tiles can be claimed")]
    NotClaimable(Position),

    #[error("Claim quota of {0} tiles reached")]
    ClaimQuotaReached(u32),

    #[error("Champion at {position} is not on the coast of the {zone} sea")]
    NotCoastal { position: Position, zone: OceanZone },

    #[error("A boat carrying a champion needs a drop position")]
    MissingDropPosition,

    #[error("Harvest amounts must not be negative")]
    NegativeHarvest,

    #[error("Harvest amounts are too large to hold")]
    HarvestTooLarge,

    #[error("Harvest of {amount} exceeds the {budget} rolled")]
    HarvestOverBudget { amount: u32, budget: u32 },

    #[error("Option '{0}' was not offered")]
    UnknownOption(String),
}

/// What the engine needs for one action besides the snapshot
pub struct TurnContext<'a, R: Rng + ?Sized> {
    /// Dice faces committed to this action. Empty means no budget check.
    pub dice: Vec<u8>,
    /// The shared adventure decks
    pub decks: &'a mut AdventureDecks,
    pub rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> TurnContext<'a, R> {
    pub fn new(dice: Vec<u8>, decks: &'a mut AdventureDecks, rng: &'a mut R) -> Self {
        Self { dice, decks, rng }
    }

    fn budget(&self) -> Option<u32> {
        if self.dice.is_empty() {
            None
        } else {
            Some(self.dice.iter().map(|&d| u32::from(d)).sum())
        }
    }

    fn dice_used(&self) -> Option<Vec<u8>> {
        (!self.dice.is_empty()).then(|| self.dice.clone())
    }
}

/// Either a finished action or a question that must be answered first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    Complete(ActionResult),
    Pending(PendingDecision),
}

impl Resolution {
    pub fn into_result(self) -> Option<ActionResult> {
        match self {
            Resolution::Complete(result) => Some(result),
            Resolution::Pending(_) => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingDecision> {
        match self {
            Resolution::Pending(pending) => Some(pending),
            Resolution::Complete(_) => None,
        }
    }
}

/// An arrival suspended on a decision. Pass it back to [`resume`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingDecision {
    pub context: DecisionContext,
    /// Snapshot before the action, restored if the answer is invalid
    origin: GameState,
    arrival: Arrival,
    /// The item waiting for a free slot
    offered_item: Item,
    dice_used: Option<Vec<u8>>,
}

/// Work-in-progress of one arrival
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Arrival {
    state: GameState,
    player: PlayerId,
    champion_id: u8,
    destination: Position,
    claim: bool,
    events: Vec<GameEvent>,
}

/// Resolve one action against `state`.
///
/// `state` is never modified; the successor snapshot is in the result.
pub fn resolve_action<R: Rng + ?Sized>(
    state: &GameState,
    action: &Action,
    ctx: &mut TurnContext<'_, R>,
) -> Resolution {
    let dice_used = ctx.dice_used();
    match try_resolve(state, action, ctx) {
        Ok(resolution) => resolution,
        Err(violation) => {
            debug!(player = ?action.player(), %violation, "action rejected");
            Resolution::Complete(rejected(state, violation, dice_used))
        }
    }
}

/// Continue a suspended arrival with the decision maker's answer.
///
/// An answer that names an option that was not offered is an input
/// error: the result fails and carries the snapshot from before the action.
pub fn resume(pending: PendingDecision, decision: &Decision) -> Resolution {
    let PendingDecision {
        context,
        origin,
        arrival,
        offered_item,
        dice_used,
    } = pending;

    if context.option(&decision.option_id).is_none() {
        let violation = RuleViolation::UnknownOption(decision.option_id.clone());
        debug!(player = context.player, %violation, "decision rejected");
        return Resolution::Complete(rejected(&origin, violation, dice_used));
    }

    let mut arrival = arrival;
    let (player, champion_id, destination) =
        (arrival.player, arrival.champion_id, arrival.destination);

    let dropped = if decision.option_id == LEAVE_NEW_ITEM {
        offered_item
    } else {
        let index = decision
            .option_id
            .strip_prefix(DROP_ITEM_PREFIX)
            .and_then(|i| i.parse::<usize>().ok());
        let mut swapped = None;
        arrival.state = update_player(arrival.state, player, |p| {
            if let Some(champion) = p.champion_mut(champion_id) {
                if let Some(index) = index.filter(|&i| i < champion.items.len()) {
                    swapped = Some(champion.items.remove(index));
                    champion.items.push(offered_item.clone());
                }
            }
        });
        match swapped {
            Some(old) => {
                arrival.events.push(GameEvent::ItemGained {
                    player,
                    champion_id,
                    item: offered_item,
                });
                old
            }
            None => offered_item,
        }
    };

    arrival.state = update_tile(arrival.state, destination, |t| t.items.push(dropped.clone()));
    arrival.events.push(GameEvent::ItemDropped {
        player,
        position: destination,
        item: dropped,
    });

    Resolution::Complete(finish(arrival, dice_used))
}

/// Resolve an action, answering any decision with `decider` until the
/// action completes
pub fn resolve_with<R: Rng + ?Sized>(
    state: &GameState,
    action: &Action,
    ctx: &mut TurnContext<'_, R>,
    decider: &mut dyn DecisionSource,
) -> ActionResult {
    let mut resolution = resolve_action(state, action, ctx);
    loop {
        match resolution {
            Resolution::Complete(result) => return result,
            Resolution::Pending(pending) => {
                let decision = decider.decide(&pending.context);
                resolution = resume(pending, &decision);
            }
        }
    }
}

fn rejected(
    state: &GameState,
    violation: RuleViolation,
    dice_used: Option<Vec<u8>>,
) -> ActionResult {
    ActionResult {
        state: state.clone(),
        success: false,
        summary: violation.to_string(),
        events: Vec::new(),
        dice_used,
    }
}

fn try_resolve<R: Rng + ?Sized>(
    state: &GameState,
    action: &Action,
    ctx: &mut TurnContext<'_, R>,
) -> Result<Resolution, RuleViolation> {
    if state.ended {
        return Err(RuleViolation::GameOver);
    }
    let Some(player) = action.player() else {
        return Err(RuleViolation::UnsupportedAction);
    };
    if state.player(player).is_none() {
        return Err(RuleViolation::UnknownPlayer(player));
    }
    if player != state.current_player {
        return Err(RuleViolation::NotYourTurn(player));
    }

    match action {
        Action::MoveChampion {
            champion_id,
            path,
            claim_tile,
            ..
        } => {
            let destination = validate_walk(state, player, *champion_id, path, ctx.budget())?;
            let arrival = Arrival {
                state: state.clone(),
                player,
                champion_id: *champion_id,
                destination,
                claim: *claim_tile,
                events: Vec::new(),
            };
            arrive(state, arrival, ctx)
        }

        Action::MoveBoat {
            boat_id,
            path,
            champion_id,
            champion_drop_position,
            claim_tile,
            ..
        } => {
            let final_zone = validate_voyage(state, player, *boat_id, path, ctx.budget())?;
            let start_zone = path[0];

            // Validate the passenger before anything moves
            let passenger = match champion_id {
                Some(id) => {
                    let missing = RuleViolation::UnknownChampion {
                        player,
                        champion: *id,
                    };
                    let champion = state.champion(player, *id).ok_or(missing)?;
                    if !start_zone.touches(champion.position) {
                        return Err(RuleViolation::NotCoastal {
                            position: champion.position,
                            zone: start_zone,
                        });
                    }
                    let drop = champion_drop_position.ok_or(RuleViolation::MissingDropPosition)?;
                    if !drop.is_on_board() {
                        return Err(RuleViolation::OffBoard(drop));
                    }
                    if !final_zone.touches(drop) {
                        return Err(RuleViolation::NotCoastal {
                            position: drop,
                            zone: final_zone,
                        });
                    }
                    Some((*id, drop))
                }
                None => None,
            };

            let boat_id = *boat_id;
            let sailed = update_player(state.clone(), player, |p| {
                if let Some(boat) = p.boats.iter_mut().find(|b| b.id == boat_id) {
                    boat.zone = final_zone;
                }
            });
            let sailed_event = GameEvent::BoatSailed {
                player,
                boat_id,
                to: final_zone,
            };

            match passenger {
                Some((champion_id, destination)) => {
                    let arrival = Arrival {
                        state: sailed,
                        player,
                        champion_id,
                        destination,
                        claim: *claim_tile,
                        events: vec![sailed_event],
                    };
                    arrive(state, arrival, ctx)
                }
                None => {
                    let result = ActionResult {
                        summary: sailed_event.describe(&sailed),
                        state: sailed,
                        success: true,
                        events: vec![sailed_event],
                        dice_used: ctx.dice_used(),
                    };
                    Ok(Resolution::Complete(result))
                }
            }
        }

        Action::Harvest { resources, .. } => harvest(state, player, resources, ctx),

        Action::Unsupported => Err(RuleViolation::UnsupportedAction),
    }
}

/// Check a walking path and return its destination
fn validate_walk(
    state: &GameState,
    player: PlayerId,
    champion_id: u8,
    path: &[Position],
    budget: Option<u32>,
) -> Result<Position, RuleViolation> {
    let champion = state
        .champion(player, champion_id)
        .ok_or(RuleViolation::UnknownChampion {
            player,
            champion: champion_id,
        })?;

    let (&first, _) = path.split_first().ok_or(RuleViolation::EmptyPath)?;
    if first != champion.position {
        return Err(RuleViolation::PathStartMismatch {
            expected: champion.position.to_string(),
            actual: first.to_string(),
        });
    }
    if let Some(off) = path.iter().find(|p| !p.is_on_board()) {
        return Err(RuleViolation::OffBoard(*off));
    }
    for pair in path.windows(2) {
        if !pair[0].is_adjacent(&pair[1]) {
            return Err(RuleViolation::NotAdjacent {
                from: pair[0],
                to: pair[1],
            });
        }
    }
    check_budget(path.len(), budget)?;

    Ok(path[path.len() - 1])
}

/// Check a sailing path and return the final zone
fn validate_voyage(
    state: &GameState,
    player: PlayerId,
    boat_id: u8,
    path: &[OceanZone],
    budget: Option<u32>,
) -> Result<OceanZone, RuleViolation> {
    let boat = state
        .boat(player, boat_id)
        .ok_or(RuleViolation::UnknownBoat {
            player,
            boat: boat_id,
        })?;

    let (&first, _) = path.split_first().ok_or(RuleViolation::EmptyPath)?;
    if first != boat.zone {
        return Err(RuleViolation::PathStartMismatch {
            expected: boat.zone.to_string(),
            actual: first.to_string(),
        });
    }
    for pair in path.windows(2) {
        if !pair[0].is_adjacent(&pair[1]) {
            return Err(RuleViolation::ZonesNotAdjacent {
                from: pair[0],
                to: pair[1],
            });
        }
    }
    check_budget(path.len(), budget)?;

    Ok(path[path.len() - 1])
}

fn check_budget(path_len: usize, budget: Option<u32>) -> Result<(), RuleViolation> {
    let steps = path_len.saturating_sub(1) as u32;
    match budget {
        Some(budget) if steps > budget => Err(RuleViolation::OverBudget { steps, budget }),
        _ => Ok(()),
    }
}

fn harvest<R: Rng + ?Sized>(
    state: &GameState,
    player: PlayerId,
    request: &HarvestRequest,
    ctx: &TurnContext<'_, R>,
) -> Result<Resolution, RuleViolation> {
    let bundle = request.to_bundle().ok_or(RuleViolation::NegativeHarvest)?;
    let amount = bundle.checked_total().ok_or(RuleViolation::HarvestTooLarge)?;
    if let Some(budget) = ctx.budget() {
        if amount > budget {
            return Err(RuleViolation::HarvestOverBudget { amount, budget });
        }
    }
    let merged = state
        .player(player)
        .and_then(|p| p.resources.checked_add_bundle(&bundle))
        .ok_or(RuleViolation::HarvestTooLarge)?;

    let next = update_player(state.clone(), player, |p| {
        p.resources = merged;
        p.stats.resources_harvested = p.stats.resources_harvested.saturating_add(amount);
    });
    let mut events = vec![GameEvent::Harvested {
        player,
        resources: bundle,
    }];
    let next = check_victory(next, &mut events);

    Ok(Resolution::Complete(ActionResult {
        summary: summarize(&next, &events),
        state: next,
        success: true,
        events,
        dice_used: ctx.dice_used(),
    }))
}

/// Arrival resolution for a champion ending its move on `arrival.destination`.
/// `origin` is the untouched input snapshot, returned on rule violations.
fn arrive<R: Rng + ?Sized>(
    origin: &GameState,
    mut arrival: Arrival,
    ctx: &mut TurnContext<'_, R>,
) -> Result<Resolution, RuleViolation> {
    let (player, champion_id, destination) =
        (arrival.player, arrival.champion_id, arrival.destination);
    let dice_used = ctx.dice_used();

    // Step 1: home tiles belong to their owner
    let tile = arrival
        .state
        .tile(destination)
        .ok_or(RuleViolation::OffBoard(destination))?;
    if tile.home_owner().is_some_and(|owner| owner != player) {
        return Err(RuleViolation::ForeignHome(destination));
    }

    // A zero-step move is not a visit: the tile can still be claimed, but
    // it is not explored or adventured again.
    let stayed = arrival
        .state
        .champion(player, champion_id)
        .is_some_and(|c| c.position == destination);

    // The champion stands on the destination from here on, so it never
    // counts as its own support.
    arrival.state = place_champion(arrival.state, player, champion_id, destination);
    arrival.events.push(GameEvent::ChampionMoved {
        player,
        champion_id,
        to: destination,
    });

    // Step 2: fight every enemy champion on the tile
    loop {
        let defender = arrival
            .state
            .champions_at(destination)
            .into_iter()
            .find(|(owner, _)| *owner != player)
            .map(|(owner, c)| (owner, c.id));
        let Some(defender) = defender else {
            break;
        };

        let outcome = combat::fight_champion(
            &arrival.state,
            (player, champion_id),
            defender,
            destination,
            &mut *ctx.rng,
        );
        info!(
            attacker = player,
            defender = defender.0,
            %destination,
            attacker_won = outcome.attacker_won(),
            "champion combat"
        );

        let (winner, loser) = if outcome.attacker_won() {
            ((player, champion_id), defender)
        } else {
            (defender, (player, champion_id))
        };
        let (state, toll) = defeat(arrival.state, loser.0, loser.1);
        arrival.state = update_player(state, winner.0, |p| p.stats.champion_wins += 1);
        arrival.state = update_player(arrival.state, loser.0, |p| p.stats.champion_losses += 1);
        arrival.events.push(GameEvent::ChampionCombat {
            attacker: player,
            defender: defender.0,
            position: destination,
            outcome,
            loser_toll: toll,
        });

        if !outcome.attacker_won() {
            let summary = format!("Attack failed. {}", summarize(&arrival.state, &arrival.events));
            return Ok(Resolution::Complete(ActionResult {
                state: arrival.state,
                success: false,
                summary,
                events: arrival.events,
                dice_used,
            }));
        }
    }

    // Step 3: a monster guarding the tile
    let guardian = arrival.state.tile(destination).and_then(|t| t.monster.clone());
    if let Some(monster) = guardian {
        let won = fight_monster(&mut arrival, &monster, &mut *ctx.rng);
        if !won {
            return Ok(Resolution::Complete(finish(arrival, dice_used)));
        }
        let is_doomspire = arrival
            .state
            .tile(destination)
            .is_some_and(|t| t.kind == TileKind::Doomspire);
        arrival.state = update_tile(arrival.state, destination, |t| t.monster = None);
        if is_doomspire {
            info!(player, "the Doomspire has fallen");
            arrival.state = arrival.state.with_winner(player);
            arrival.events.push(GameEvent::GameWon { player });
        }
    }

    // Step 4: validate the claim before changing anything else
    if arrival.claim {
        let claimable = arrival
            .state
            .tile(destination)
            .is_some_and(Tile::is_claimable);
        if !claimable {
            return Err(RuleViolation::NotClaimable(destination));
        }
        if !arrival.state.is_under_claim_quota(player) {
            let max = arrival.state.player(player).map_or(0, |p| p.max_claims);
            return Err(RuleViolation::ClaimQuotaReached(max));
        }
    }

    // Step 5: exploration pays once per tile
    let unexplored = !stayed && arrival.state.tile(destination).is_some_and(|t| !t.explored);
    if unexplored {
        let fame = arrival.state.config.exploration_fame;
        arrival.state = update_tile(arrival.state, destination, |t| t.explored = true);
        arrival.state = update_player(arrival.state, player, |p| {
            p.fame += fame;
            p.stats.tiles_explored += 1;
        });
        arrival.events.push(GameEvent::TileExplored {
            player,
            position: destination,
            fame,
        });
    }

    // Step 6: claim
    if arrival.claim {
        arrival.state = update_tile(arrival.state, destination, |t| t.set_claim(player));
        arrival.state = update_player(arrival.state, player, |p| p.stats.tiles_claimed += 1);
        arrival.events.push(GameEvent::TileClaimed {
            player,
            position: destination,
        });
    }

    // Step 7: blockade
    let foreign_claim = arrival
        .state
        .tile(destination)
        .filter(|t| t.is_resource())
        .and_then(Tile::claimed_by)
        .filter(|&owner| owner != player);
    if let Some(owner) = foreign_claim {
        if !arrival.state.is_protected(destination) {
            arrival.events.push(GameEvent::Blockade {
                blockader: player,
                owner,
                position: destination,
            });
        }
    }

    // Step 8: adventure
    let adventure_tier = arrival
        .state
        .tile(destination)
        .filter(|t| !stayed && t.adventure_tokens().is_some_and(|n| n > 0))
        .map(|t| t.tier);
    if let Some(tier) = adventure_tier {
        arrival.state = update_tile(arrival.state, destination, |t| {
            t.take_adventure_token();
        });
        arrival.state = update_player(arrival.state, player, |p| p.stats.adventures += 1);
        let tokens_left = arrival
            .state
            .tile(destination)
            .and_then(Tile::adventure_tokens)
            .unwrap_or(0);

        let card = ctx.decks.draw(tier, &mut *ctx.rng);
        arrival.events.push(GameEvent::AdventureDrawn {
            player,
            position: destination,
            card: card.clone(),
            tokens_left,
        });

        match card {
            AdventureCard::Monster(monster) => {
                fight_monster(&mut arrival, &monster, &mut *ctx.rng);
            }
            AdventureCard::Treasure(item) => {
                let has_room = arrival
                    .state
                    .champion(player, champion_id)
                    .is_some_and(|c| c.has_free_item_slot());
                if has_room {
                    arrival.state = update_player(arrival.state, player, |p| {
                        if let Some(c) = p.champion_mut(champion_id) {
                            c.items.push(item.clone());
                        }
                    });
                    arrival.events.push(GameEvent::ItemGained {
                        player,
                        champion_id,
                        item,
                    });
                } else {
                    let context = item_swap_context(&arrival, &item);
                    return Ok(Resolution::Pending(PendingDecision {
                        context,
                        origin: origin.clone(),
                        arrival,
                        offered_item: item,
                        dice_used,
                    }));
                }
            }
            AdventureCard::Event(_) => {}
        }
    }

    Ok(Resolution::Complete(finish(arrival, dice_used)))
}

/// Fight a monster at the arrival tile. The winner takes the reward; a
/// beaten champion goes home and pays the toll. Returns whether the
/// champion won.
fn fight_monster<R: Rng + ?Sized>(arrival: &mut Arrival, monster: &Monster, rng: &mut R) -> bool {
    let (player, champion_id, destination) =
        (arrival.player, arrival.champion_id, arrival.destination);
    let outcome = combat::fight_monster(
        &arrival.state,
        (player, champion_id),
        monster,
        destination,
        rng,
    );
    info!(player, monster = %monster.name, won = outcome.attacker_won(), "monster combat");

    if outcome.attacker_won() {
        let reward = monster.reward;
        let fame = monster.fame;
        arrival.state = update_player(arrival.state.clone(), player, |p| {
            p.fame += fame;
            p.resources.add_bundle(&reward);
            p.stats.monsters_defeated += 1;
        });
        arrival.events.push(GameEvent::MonsterDefeated {
            player,
            position: destination,
            monster: monster.name.clone(),
            outcome,
            fame,
            reward,
        });
        true
    } else {
        let (state, toll) = defeat(arrival.state.clone(), player, champion_id);
        arrival.state = update_player(state, player, |p| p.stats.monster_losses += 1);
        arrival.events.push(GameEvent::DefeatedByMonster {
            player,
            position: destination,
            monster: monster.name.clone(),
            outcome,
            toll,
        });
        false
    }
}

fn item_swap_context(arrival: &Arrival, offered: &Item) -> DecisionContext {
    let carried = arrival
        .state
        .champion(arrival.player, arrival.champion_id)
        .map(|c| c.items.clone())
        .unwrap_or_default();

    let mut options: Vec<DecisionOption> = carried
        .iter()
        .enumerate()
        .map(|(i, item)| {
            DecisionOption::new(
                format!("{DROP_ITEM_PREFIX}{i}"),
                format!("Drop the {} and take the {}", item.name, offered.name),
            )
        })
        .collect();
    options.push(DecisionOption::new(
        LEAVE_NEW_ITEM,
        format!("Keep your items and leave the {} behind", offered.name),
    ));

    DecisionContext {
        player: arrival.player,
        description: format!(
            "Your champion found the {} (+{}) but can only carry two items.",
            offered.name, offered.combat_bonus
        ),
        options,
    }
}

/// Assemble the successor snapshot and summary
fn finish(arrival: Arrival, dice_used: Option<Vec<u8>>) -> ActionResult {
    let mut events = arrival.events;
    let state = check_victory(arrival.state, &mut events);
    ActionResult {
        summary: summarize(&state, &events),
        state,
        success: true,
        events,
        dice_used,
    }
}

fn check_victory(state: GameState, events: &mut Vec<GameEvent>) -> GameState {
    if state.ended {
        return state;
    }
    let state = state.with_victory_check();
    if let Some(winner) = state.winner {
        info!(player = winner, "victory");
        events.push(GameEvent::GameWon { player: winner });
    }
    state
}

fn summarize(state: &GameState, events: &[GameEvent]) -> String {
    events
        .iter()
        .map(|e| e.describe(state))
        .collect::<Vec<_>>()
        .join(" ")
}

// ==================== Snapshot helpers ====================

fn update_player(state: GameState, id: PlayerId, f: impl FnOnce(&mut Player)) -> GameState {
    let player = state.player(id).cloned();
    match player {
        Some(mut player) => {
            f(&mut player);
            state.with_player(player)
        }
        None => state,
    }
}

fn update_tile(state: GameState, position: Position, f: impl FnOnce(&mut Tile)) -> GameState {
    let tile = state.tile(position).cloned();
    match tile {
        Some(mut tile) => {
            f(&mut tile);
            state.with_tile(tile)
        }
        None => state,
    }
}

fn place_champion(state: GameState, player: PlayerId, champion_id: u8, at: Position) -> GameState {
    update_player(state, player, |p| {
        if let Some(c) = p.champion_mut(champion_id) {
            c.position = at;
        }
    })
}

/// Send a beaten champion home and collect the toll from its owner
fn defeat(state: GameState, player: PlayerId, champion_id: u8) -> (GameState, Toll) {
    let mut toll = Toll::Nothing;
    let state = update_player(state, player, |p| {
        let home = p.home;
        if let Some(c) = p.champion_mut(champion_id) {
            c.position = home;
        }
        toll = p.pay_defeat_toll();
    });
    (state, toll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Resource};
    use crate::cards::AdventureDecks;
    use crate::config::EngineConfig;
    use crate::decision::FirstOptionDecider;
    use crate::player::{Champion, ResourceBundle};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(board: Board) -> GameState {
        GameState::from_board(
            board,
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            EngineConfig::default(),
        )
        .unwrap()
    }

    fn walk(player: PlayerId, path: Vec<Position>, claim: bool) -> Action {
        Action::MoveChampion {
            player,
            champion_id: 1,
            path,
            claim_tile: claim,
        }
    }

    fn run(
        state: &GameState,
        action: &Action,
        decks: &mut AdventureDecks,
        seed: u64,
    ) -> Resolution {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = TurnContext::new(Vec::new(), decks, &mut rng);
        resolve_action(state, action, &mut ctx)
    }

    fn complete(resolution: Resolution) -> ActionResult {
        match resolution {
            Resolution::Complete(result) => result,
            Resolution::Pending(p) => panic!("unexpected decision: {}", p.context.description),
        }
    }

    fn set_champion(
        state: GameState,
        player: PlayerId,
        at: Position,
        items: Vec<Item>,
    ) -> GameState {
        update_player(state, player, |p| {
            p.champions[0] = Champion {
                items,
                ..Champion::new(1, at)
            };
        })
    }

    #[test]
    fn test_simple_move_explores() {
        let state = game(Board::blank());
        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(0, 0), Position::new(0, 1)], false),
            &mut AdventureDecks::default(),
            1,
        ));

        assert!(result.success, "{}", result.summary);
        assert_eq!(result.state.champion(0, 1).unwrap().position, Position::new(0, 1));
        assert_eq!(result.state.player(0).unwrap().fame, 1);
        assert!(result.state.tile(Position::new(0, 1)).unwrap().explored);
        assert!(result.summary.contains("explored"));
        // Input snapshot is untouched
        assert_eq!(state.champion(0, 1).unwrap().position, Position::new(0, 0));
    }

    #[test]
    fn test_path_validation() {
        let state = game(Board::blank());
        let mut decks = AdventureDecks::default();

        let cases = vec![
            (walk(0, vec![], false), "empty"),
            (walk(0, vec![Position::new(0, 1)], false), "starts at"),
            (
                walk(0, vec![Position::new(0, 0), Position::new(1, 1)], false),
                "not orthogonally adjacent",
            ),
            (
                walk(0, vec![Position::new(0, 0), Position::new(0, 2)], false),
                "not orthogonally adjacent",
            ),
        ];
        for (action, expected) in cases {
            let result = complete(run(&state, &action, &mut decks, 1));
            assert!(!result.success);
            assert!(result.summary.contains(expected), "{}", result.summary);
            assert_eq!(result.state, state);
        }
    }

    #[test]
    fn test_dice_budget_limits_steps() {
        let state = game(Board::blank());
        let mut decks = AdventureDecks::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = TurnContext::new(vec![1], &mut decks, &mut rng);
        let action = walk(
            0,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
            false,
        );

        let result = complete(resolve_action(&state, &action, &mut ctx));
        assert!(!result.success);
        assert_eq!(result.dice_used, Some(vec![1]));
        assert!(result.summary.contains("only 1 were rolled"));
    }

    #[test]
    fn test_not_your_turn_and_game_over() {
        let state = game(Board::blank());
        let mut decks = AdventureDecks::default();
        let action = walk(1, vec![Position::new(0, 7), Position::new(1, 7)], false);
        let result = complete(run(&state, &action, &mut decks, 1));
        assert!(!result.success);
        assert_eq!(result.summary, RuleViolation::NotYourTurn(1).to_string());

        let ended = state.with_winner(2);
        let stay = walk(0, vec![Position::new(0, 0)], false);
        let result = complete(run(&ended, &stay, &mut decks, 1));
        assert_eq!(result.summary, RuleViolation::GameOver.to_string());
    }

    #[test]
    fn test_unsupported_action_fails_closed() {
        let state = game(Board::blank());
        let result = complete(run(&state, &Action::Unsupported, &mut AdventureDecks::default(), 1));
        assert!(!result.success);
        assert_eq!(result.state, state);
    }

    #[test]
    fn test_cannot_enter_foreign_home() {
        let state = set_champion(game(Board::blank()), 0, Position::new(0, 6), vec![]);
        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(0, 6), Position::new(0, 7)], false),
            &mut AdventureDecks::default(),
            1,
        ));
        assert!(!result.success);
        assert!(result.summary.contains("home tile"));
    }

    #[test]
    fn test_claim_rules() {
        let field = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::resource(
            field,
            ResourceBundle::single(Resource::Wood, 2),
            false,
        ));
        let state = game(board);
        let mut decks = AdventureDecks::default();
        let action = walk(0, vec![Position::new(0, 0), field], true);

        let result = complete(run(&state, &action, &mut decks, 1));
        assert!(result.success, "{}", result.summary);
        assert_eq!(result.state.tile(field).unwrap().claimed_by(), Some(0));
        assert_eq!(result.state.player(0).unwrap().stats.tiles_claimed, 1);

        // Empty tiles cannot be claimed
        let empty = walk(0, vec![Position::new(0, 0), Position::new(1, 0)], true);
        let result = complete(run(&state, &empty, &mut decks, 1));
        assert!(!result.success);
        assert_eq!(result.state, state);
    }

    #[test]
    fn test_claim_quota() {
        let field = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::resource(
            field,
            ResourceBundle::single(Resource::Wood, 2),
            false,
        ));
        let state = update_player(game(board), 0, |p| p.max_claims = 1);
        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(0, 0), field], true),
            &mut AdventureDecks::default(),
            1,
        ));
        assert!(!result.success);
        assert_eq!(result.summary, RuleViolation::ClaimQuotaReached(1).to_string());
    }

    #[test]
    fn test_monster_win_clears_tile() {
        let lair = Position::new(0, 1);
        let weakling = Monster::new("Rat", 1, 0, 2, ResourceBundle::single(Resource::Gold, 1));
        let board =
            Board::blank().with_tile(Tile::new(lair, TileKind::Empty).with_monster(weakling));
        let state = update_player(game(board), 0, |p| p.might = 5);

        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(0, 0), lair], false),
            &mut AdventureDecks::default(),
            3,
        ));
        assert!(result.success);
        assert!(result.state.tile(lair).unwrap().monster.is_none());
        let player = result.state.player(0).unwrap();
        // 2 fame from the rat, 1 for exploring
        assert_eq!(player.fame, 3);
        assert_eq!(player.resources.gold, 1);
        assert_eq!(player.champions[0].position, lair);
    }

    #[test]
    fn test_monster_loss_is_a_successful_action() {
        let lair = Position::new(0, 1);
        let brute = Monster::new("Giant", 1, 10, 2, ResourceBundle::new());
        let board = Board::blank().with_tile(Tile::new(lair, TileKind::Empty).with_monster(brute));
        let state = update_player(game(board), 0, |p| p.resources.gold = 2);

        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(0, 0), lair], false),
            &mut AdventureDecks::default(),
            3,
        ));
        assert!(result.success);
        assert!(result.summary.contains("defeated by the Giant"));
        let player = result.state.player(0).unwrap();
        assert_eq!(player.champions[0].position, player.home);
        assert_eq!(player.resources.gold, 1);
        // The monster stays and the tile is not explored
        assert!(result.state.tile(lair).unwrap().monster.is_some());
        assert!(!result.state.tile(lair).unwrap().explored);
    }

    #[test]
    fn test_defeating_the_dragon_wins() {
        let spire = Position::new(3, 3);
        let board = Board::blank()
            .with_tile(Tile::new(spire, TileKind::Doomspire).with_monster(Monster::dragon()));
        let state = update_player(game(board), 0, |p| p.might = 20);
        let state = set_champion(state, 0, Position::new(3, 2), vec![]);

        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(3, 2), spire], false),
            &mut AdventureDecks::default(),
            3,
        ));
        assert!(result.success);
        assert!(result.state.ended);
        assert_eq!(result.state.winner, Some(0));
        assert!(result.summary.contains("has won the game"));
    }

    #[test]
    fn test_treasure_with_full_pack_suspends() {
        let den = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::adventure(den, 2));
        let pack = vec![Item::new("Dagger", 1), Item::new("Shield", 1)];
        let state = set_champion(game(board), 0, Position::new(0, 0), pack);
        let axe = AdventureCard::Treasure(Item::new("Axe", 2));
        let mut decks = AdventureDecks::stacked(1, vec![axe]);

        let action = walk(0, vec![Position::new(0, 0), den], false);
        let resolution = run(&state, &action, &mut decks, 1);
        let pending = resolution.pending().cloned().expect("decision expected");
        assert_eq!(pending.context.options.len(), 3);

        // Unknown option: rejected with the original snapshot
        let result = complete(resume(pending.clone(), &Decision::new("drop_7")));
        assert!(!result.success);
        assert_eq!(result.state, state);

        // Swap the dagger for the axe
        let result = complete(resume(pending, &Decision::new("drop_0")));
        assert!(result.success, "{}", result.summary);
        let names: Vec<String> = result
            .state
            .champion(0, 1)
            .unwrap()
            .items
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, vec!["Shield".to_string(), "Axe".to_string()]);
        assert_eq!(result.state.tile(den).unwrap().items, vec![Item::new("Dagger", 1)]);
        assert_eq!(result.state.tile(den).unwrap().adventure_tokens(), Some(1));
    }

    #[test]
    fn test_leaving_the_new_item() {
        let den = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::adventure(den, 1));
        let pack = vec![Item::new("Dagger", 1), Item::new("Shield", 1)];
        let state = set_champion(game(board), 0, Position::new(0, 0), pack.clone());
        let axe = AdventureCard::Treasure(Item::new("Axe", 2));
        let mut decks = AdventureDecks::stacked(1, vec![axe]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = TurnContext::new(Vec::new(), &mut decks, &mut rng);

        let mut decider = FixedDecider(LEAVE_NEW_ITEM);
        let result = resolve_with(
            &state,
            &walk(0, vec![Position::new(0, 0), den], false),
            &mut ctx,
            &mut decider,
        );
        assert!(result.success);
        assert_eq!(result.state.champion(0, 1).unwrap().items, pack);
        assert_eq!(result.state.tile(den).unwrap().items, vec![Item::new("Axe", 2)]);
    }

    #[test]
    fn test_treasure_with_room_is_taken() {
        let den = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::adventure(den, 1));
        let state = game(board);
        let axe = AdventureCard::Treasure(Item::new("Axe", 2));
        let mut decks = AdventureDecks::stacked(1, vec![axe]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = TurnContext::new(Vec::new(), &mut decks, &mut rng);

        let result = resolve_with(
            &state,
            &walk(0, vec![Position::new(0, 0), den], false),
            &mut ctx,
            &mut FirstOptionDecider,
        );
        assert!(result.success);
        assert_eq!(result.state.champion(0, 1).unwrap().items, vec![Item::new("Axe", 2)]);
        assert_eq!(result.state.tile(den).unwrap().adventure_tokens(), Some(0));
    }

    #[test]
    fn test_event_card_only_spends_token() {
        let den = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::adventure(den, 1).explored());
        let state = game(board);
        let mut decks = AdventureDecks::stacked(1, vec![AdventureCard::Event("Fog".into())]);

        let action = walk(0, vec![Position::new(0, 0), den], false);
        let result = complete(run(&state, &action, &mut decks, 1));
        assert!(result.success);
        assert_eq!(result.state.tile(den).unwrap().adventure_tokens(), Some(0));
        assert_eq!(result.state.player(0).unwrap().fame, 0);
        assert_eq!(result.state.player(0).unwrap().stats.adventures, 1);

        // No tokens left: no draw
        let state = result.state.advance_turn().advance_turn().advance_turn().advance_turn();
        let state = set_champion(state, 0, Position::new(0, 0), vec![]);
        let state = set_champion(state, 1, Position::new(0, 2), vec![]);
        assert_eq!(state.current_player, 1);
        let action = walk(1, vec![Position::new(0, 2), den], false);
        let result = complete(run(&state, &action, &mut decks, 1));
        assert!(result.success);
        assert!(!result.summary.contains("drew"));
    }

    #[test]
    fn test_blockade_is_reported() {
        let field = Position::new(2, 2);
        let mut tile =
            Tile::resource(field, ResourceBundle::single(Resource::Ore, 3), true).explored();
        tile.set_claim(1);
        let state = game(Board::blank().with_tile(tile));
        let state = set_champion(state, 0, Position::new(2, 1), vec![]);

        let result = complete(run(
            &state,
            &walk(0, vec![Position::new(2, 1), field], false),
            &mut AdventureDecks::default(),
            1,
        ));
        assert!(result.success);
        assert!(result.summary.contains("blockading"));
        assert_eq!(result.state.blockading_player(field), Some(0));
    }

    #[test]
    fn test_boat_voyage() {
        let state = game(Board::blank());
        let sail = Action::MoveBoat {
            player: 0,
            boat_id: 1,
            path: vec![OceanZone::Nw, OceanZone::Ne],
            champion_id: None,
            champion_drop_position: None,
            claim_tile: false,
        };
        let result = complete(run(&state, &sail, &mut AdventureDecks::default(), 1));
        assert!(result.success, "{}", result.summary);
        assert_eq!(result.state.boat(0, 1).unwrap().zone, OceanZone::Ne);

        let bad = Action::MoveBoat {
            player: 0,
            boat_id: 1,
            path: vec![OceanZone::Nw, OceanZone::Se],
            champion_id: None,
            champion_drop_position: None,
            claim_tile: false,
        };
        let result = complete(run(&state, &bad, &mut AdventureDecks::default(), 1));
        assert!(!result.success);
    }

    #[test]
    fn test_boat_carries_champion_to_coast() {
        let state = game(Board::blank());
        let drop = Position::new(0, 5);
        let ferry = Action::MoveBoat {
            player: 0,
            boat_id: 1,
            path: vec![OceanZone::Nw, OceanZone::Ne],
            champion_id: Some(1),
            champion_drop_position: Some(drop),
            claim_tile: false,
        };
        let result = complete(run(&state, &ferry, &mut AdventureDecks::default(), 1));
        assert!(result.success, "{}", result.summary);
        assert_eq!(result.state.champion(0, 1).unwrap().position, drop);
        assert!(result.state.tile(drop).unwrap().explored);

        let inland = Action::MoveBoat {
            player: 0,
            boat_id: 1,
            path: vec![OceanZone::Nw, OceanZone::Ne],
            champion_id: Some(1),
            champion_drop_position: Some(Position::new(2, 5)),
            claim_tile: false,
        };
        let result = complete(run(&state, &inland, &mut AdventureDecks::default(), 1));
        assert!(!result.success);
        assert!(result.summary.contains("coast"));
    }

    #[test]
    fn test_harvest() {
        let state = game(Board::blank());
        let mut decks = AdventureDecks::default();

        let action = Action::Harvest {
            player: 0,
            resources: HarvestRequest::new(1, 0, 2, 0),
        };
        let result = complete(run(&state, &action, &mut decks, 1));
        assert!(result.success);
        assert_eq!(
            result.state.player(0).unwrap().resources,
            ResourceBundle::with_amounts(1, 0, 2, 0)
        );

        let negative = Action::Harvest {
            player: 0,
            resources: HarvestRequest::new(0, -1, 0, 0),
        };
        let result = complete(run(&state, &negative, &mut decks, 1));
        assert!(!result.success);
        assert_eq!(result.summary, RuleViolation::NegativeHarvest.to_string());
    }

    /// Assert a rejection with `violation` that left the snapshot untouched
    fn assert_rejected(state: &GameState, result: &ActionResult, violation: RuleViolation) {
        assert!(!result.success);
        assert_eq!(result.summary, violation.to_string());
        assert_eq!(&result.state, state);
    }

    fn ferry(champion_id: Option<u8>, drop: Option<Position>) -> Action {
        Action::MoveBoat {
            player: 0,
            boat_id: 1,
            path: vec![OceanZone::Nw, OceanZone::Ne],
            champion_id,
            champion_drop_position: drop,
            claim_tile: false,
        }
    }

    #[test]
    fn test_harvest_over_budget() {
        let state = game(Board::blank());
        let mut decks = AdventureDecks::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut ctx = TurnContext::new(vec![2], &mut decks, &mut rng);
        let action = Action::Harvest {
            player: 0,
            resources: HarvestRequest::new(2, 1, 0, 0),
        };

        let result = complete(resolve_action(&state, &action, &mut ctx));
        assert_rejected(
            &state,
            &result,
            RuleViolation::HarvestOverBudget {
                amount: 3,
                budget: 2,
            },
        );
        assert_eq!(result.dice_used, Some(vec![2]));
    }

    #[test]
    fn test_oversized_harvest_is_rejected() {
        let state = game(Board::blank());
        let mut decks = AdventureDecks::default();

        let huge = Action::Harvest {
            player: 0,
            resources: HarvestRequest::new(i32::MAX, i32::MAX, i32::MAX, 0),
        };
        let result = complete(run(&state, &huge, &mut decks, 1));
        assert_rejected(&state, &result, RuleViolation::HarvestTooLarge);

        // Fits on its own but not on top of what the player holds
        let rich = update_player(state, 0, |p| p.resources.food = u32::MAX - 1);
        let more = Action::Harvest {
            player: 0,
            resources: HarvestRequest::new(5, 0, 0, 0),
        };
        let result = complete(run(&rich, &more, &mut decks, 1));
        assert_rejected(&rich, &result, RuleViolation::HarvestTooLarge);
    }

    #[test]
    fn test_unknown_player() {
        let state = game(Board::blank());
        let action = walk(9, vec![Position::new(0, 0), Position::new(0, 1)], false);
        let result = complete(run(&state, &action, &mut AdventureDecks::default(), 1));
        assert_rejected(&state, &result, RuleViolation::UnknownPlayer(9));
    }

    #[test]
    fn test_unknown_champion() {
        let state = game(Board::blank());
        let action = Action::MoveChampion {
            player: 0,
            champion_id: 7,
            path: vec![Position::new(0, 0), Position::new(0, 1)],
            claim_tile: false,
        };
        let result = complete(run(&state, &action, &mut AdventureDecks::default(), 1));
        assert_rejected(
            &state,
            &result,
            RuleViolation::UnknownChampion {
                player: 0,
                champion: 7,
            },
        );
    }

    #[test]
    fn test_unknown_boat() {
        let state = game(Board::blank());
        let action = Action::MoveBoat {
            player: 0,
            boat_id: 4,
            path: vec![OceanZone::Nw, OceanZone::Ne],
            champion_id: None,
            champion_drop_position: None,
            claim_tile: false,
        };
        let result = complete(run(&state, &action, &mut AdventureDecks::default(), 1));
        assert_rejected(&state, &result, RuleViolation::UnknownBoat { player: 0, boat: 4 });
    }

    #[test]
    fn test_passenger_needs_drop_position() {
        let state = game(Board::blank());
        let action = ferry(Some(1), None);
        let result = complete(run(&state, &action, &mut AdventureDecks::default(), 1));
        assert_rejected(&state, &result, RuleViolation::MissingDropPosition);
    }

    #[test]
    fn test_passenger_must_board_from_the_coast() {
        let inland = Position::new(2, 2);
        let state = set_champion(game(Board::blank()), 0, inland, vec![]);
        let action = ferry(Some(1), Some(Position::new(0, 5)));

        let result = complete(run(&state, &action, &mut AdventureDecks::default(), 1));
        assert_rejected(
            &state,
            &result,
            RuleViolation::NotCoastal {
                position: inland,
                zone: OceanZone::Nw,
            },
        );
    }

    #[test]
    fn test_staying_put_is_not_a_visit() {
        let den = Position::new(0, 1);
        let board = Board::blank().with_tile(Tile::adventure(den, 2));
        let state = set_champion(game(board), 0, den, vec![]);
        let mut decks = AdventureDecks::stacked(1, vec![AdventureCard::Event("Fog".into())]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = TurnContext::new(vec![1], &mut decks, &mut rng);

        let result = complete(resolve_action(&state, &walk(0, vec![den], false), &mut ctx));
        assert!(result.success, "{}", result.summary);
        let tile = result.state.tile(den).unwrap();
        assert_eq!(tile.adventure_tokens(), Some(2));
        assert!(!tile.explored);
        assert!(!result.summary.contains("drew"));
        assert_eq!(result.state.player(0).unwrap().fame, 0);
        assert_eq!(result.state.player(0).unwrap().stats.adventures, 0);
    }

    #[test]
    fn test_claiming_in_place() {
        let field = Position::new(0, 1);
        let tile =
            Tile::resource(field, ResourceBundle::single(Resource::Food, 1), false).explored();
        let state = set_champion(game(Board::blank().with_tile(tile)), 0, field, vec![]);

        let result = complete(run(
            &state,
            &walk(0, vec![field], true),
            &mut AdventureDecks::default(),
            1,
        ));
        assert!(result.success, "{}", result.summary);
        assert_eq!(result.state.tile(field).unwrap().claimed_by(), Some(0));
        assert_eq!(result.state.player(0).unwrap().fame, 0);
    }

    struct FixedDecider(&'static str);

    impl DecisionSource for FixedDecider {
        fn decide(&mut self, _context: &DecisionContext) -> Decision {
            Decision::new(self.0)
        }
    }
}
