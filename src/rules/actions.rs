//! Action validation and application.
//!
//! Every action validates against the current state first and only then
//! builds the successor state, so a rejection leaves nothing half-applied.
//! Validation short-circuits on the first failure; the order of checks is
//! part of the contract.
//!
//! ## Actions
//!
//! - `play_card`: main phase; pay the cost, move the card out of hand
//! - `draw_card`: draw phase; once per turn
//! - `tap_for_mana`: any phase of the player's turn; land produces mana
//! - `attack`: combat phase; damage a player or fight a creature
//! - `surrender`: any time; opponent wins

use tracing::{debug, info};

use super::outcome::{conclude, MatchResult};
use crate::cards::{CardId, CardRef, EffectTrigger};
use crate::core::{AttackTarget, GameState, Phase, PlayerId, RulesConfig, Seat};
use crate::error::Rejection;
use crate::mana::{can_afford, pay_cost_in_order, ManaColor};
use crate::zones::Zone;

/// Reject if the match has ended.
pub(crate) fn ensure_active(state: &GameState) -> Result<(), Rejection> {
    if state.is_active {
        Ok(())
    } else {
        Err(Rejection::InactiveMatch)
    }
}

/// Reject unless `player` is the current player. Returns their seat.
///
/// An id that holds no seat is also "not your turn".
fn ensure_turn(state: &GameState, player: &PlayerId) -> Result<Seat, Rejection> {
    ensure_active(state)?;
    if state.is_turn_of(player) {
        Ok(state.current_player)
    } else {
        Err(Rejection::NotYourTurn)
    }
}

fn ensure_phase(state: &GameState, required: Phase, action: &'static str) -> Result<(), Rejection> {
    if state.phase == required {
        Ok(())
    } else {
        Err(Rejection::WrongPhase {
            action,
            required,
            actual: state.phase,
        })
    }
}

/// Find an untapped card on the player's battlefield.
fn untapped_permanent(state: &GameState, seat: Seat, card: &CardId) -> Result<CardRef, Rejection> {
    let player = state.player(seat);
    let found = player
        .zones
        .find(Zone::Battlefield, card)
        .ok_or_else(|| Rejection::CardNotOnBattlefield { card: card.clone() })?;
    if player.is_tapped(card) {
        return Err(Rejection::AlreadyTapped { card: card.clone() });
    }
    Ok(found.clone())
}

/// Play a card from hand.
///
/// Checks, in order: turn, main phase, card in hand, affordability, and
/// for creatures a free battlefield slot. Permanents land on the
/// battlefield; spells go to the graveyard with their effects left to an
/// external resolver.
pub fn play_card(
    config: &RulesConfig,
    state: &GameState,
    player: &PlayerId,
    card: &CardId,
) -> Result<GameState, Rejection> {
    let seat = ensure_turn(state, player)?;
    ensure_phase(state, Phase::Main, "play cards")?;

    let actor = state.player(seat);
    let played = actor
        .zones
        .find(Zone::Hand, card)
        .cloned()
        .ok_or_else(|| Rejection::CardNotInHand { card: card.clone() })?;

    if !can_afford(&actor.mana, &played.mana_cost) {
        return Err(Rejection::InsufficientMana {
            required: played.mana_cost.total(),
            available: actor.mana.total(),
        });
    }

    if played.is_creature() && actor.zones.len(Zone::Battlefield) >= config.max_battlefield_size {
        return Err(Rejection::BattlefieldFull {
            max: config.max_battlefield_size,
        });
    }

    let mana = pay_cost_in_order(&actor.mana, &played.mana_cost, &config.payment_order)?;

    let mut next = state.clone();
    let actor = next.player_mut(seat);
    actor.zones.take(Zone::Hand, card);
    actor.mana = mana;
    let destination = if played.card_type.is_permanent() {
        Zone::Battlefield
    } else {
        Zone::Graveyard
    };

    debug!(
        match_id = %state.id,
        player = %player,
        card = %card,
        card_type = %played.card_type,
        cost = %played.mana_cost,
        to = %destination,
        "card played"
    );
    actor.zones.push(destination, played);
    Ok(next)
}

/// Draw the top card of the deck.
///
/// Checks, in order: turn, draw phase, not yet drawn this turn, hand below
/// the maximum, deck not empty.
pub fn draw_card(
    config: &RulesConfig,
    state: &GameState,
    player: &PlayerId,
) -> Result<GameState, Rejection> {
    let seat = ensure_turn(state, player)?;
    ensure_phase(state, Phase::Draw, "draw cards")?;

    let actor = state.player(seat);
    if actor.has_drawn {
        return Err(Rejection::AlreadyDrew);
    }
    if actor.zones.len(Zone::Hand) >= config.max_hand_size {
        return Err(Rejection::HandFull {
            max: config.max_hand_size,
        });
    }

    let mut next = state.clone();
    let actor = next.player_mut(seat);
    let drawn = actor.zones.pop_top(Zone::Deck).ok_or(Rejection::DeckEmpty)?;
    debug!(match_id = %state.id, player = %player, card = %drawn.id, "card drawn");
    actor.zones.push(Zone::Hand, drawn);
    actor.has_drawn = true;
    Ok(next)
}

/// Tap a land for mana.
///
/// The land produces the mana of its activated `AddMana` effects, or one
/// `learning` if it has none.
pub fn tap_for_mana(
    state: &GameState,
    player: &PlayerId,
    card: &CardId,
) -> Result<GameState, Rejection> {
    let seat = ensure_turn(state, player)?;
    let land = untapped_permanent(state, seat, card)?;
    if !land.is_land() {
        return Err(Rejection::NotALand { card: card.clone() });
    }

    let mut next = state.clone();
    let actor = next.player_mut(seat);
    let mut produced = land
        .effects_with(EffectTrigger::Activated)
        .filter_map(|effect| effect.mana_produced())
        .peekable();
    if produced.peek().is_none() {
        actor.mana.add(ManaColor::Learning, 1);
    }
    for (color, amount) in produced {
        actor.mana.add(color, amount);
    }
    actor.tapped.insert(card.clone());

    debug!(
        match_id = %state.id,
        player = %player,
        card = %card,
        pool = actor.mana.total(),
        "land tapped"
    );
    Ok(next)
}

/// Attack with an untapped creature.
///
/// Against the player, the opponent loses life equal to the attacker's
/// attack. Against a creature, both deal damage at once and each creature
/// whose damage reaches its defense is destroyed. The attacker taps.
pub fn attack(
    state: &GameState,
    player: &PlayerId,
    attacker: &CardId,
    target: &AttackTarget,
) -> Result<GameState, Rejection> {
    let seat = ensure_turn(state, player)?;
    ensure_phase(state, Phase::Combat, "attack")?;

    let striker = untapped_permanent(state, seat, attacker)?;
    if !striker.is_creature() {
        return Err(Rejection::NotACreature {
            card: attacker.clone(),
        });
    }

    let defender_seat = seat.opponent();
    let mut next = state.clone();
    next.player_mut(seat).tapped.insert(attacker.clone());

    match target {
        AttackTarget::Player => {
            let damage = i32::try_from(striker.power()).unwrap_or(i32::MAX);
            let defender = next.player_mut(defender_seat);
            defender.life = defender.life.saturating_sub(damage);
            debug!(
                match_id = %state.id,
                attacker = %attacker,
                damage,
                life = defender.life,
                "player attacked"
            );
        }
        AttackTarget::Creature(blocker) => {
            let blocker_card = state
                .player(defender_seat)
                .zones
                .find(Zone::Battlefield, blocker)
                .filter(|c| c.is_creature())
                .cloned()
                .ok_or_else(|| Rejection::InvalidTarget {
                    card: blocker.clone(),
                })?;

            let attacker_dies = lethal(blocker_card.power(), striker.toughness());
            let blocker_dies = lethal(striker.power(), blocker_card.toughness());
            if attacker_dies {
                destroy(&mut next, seat, attacker);
            }
            if blocker_dies {
                destroy(&mut next, defender_seat, blocker);
            }
            debug!(
                match_id = %state.id,
                attacker = %attacker,
                blocker = %blocker,
                attacker_dies,
                blocker_dies,
                "creatures fought"
            );
        }
    }

    Ok(conclude(next))
}

fn lethal(damage: u32, toughness: u32) -> bool {
    damage > 0 && damage >= toughness
}

/// Move a permanent to its owner's graveyard.
fn destroy(state: &mut GameState, seat: Seat, card: &CardId) {
    let owner = state.player_mut(seat);
    if let Some(dead) = owner.zones.take(Zone::Battlefield, card) {
        owner.tapped.remove(card);
        owner.zones.push(Zone::Graveyard, dead);
    }
}

/// Concede the match. The opponent wins.
pub fn surrender(state: &GameState, player: &PlayerId) -> Result<GameState, Rejection> {
    ensure_active(state)?;
    let seat = state
        .seat_of(player)
        .ok_or_else(|| Rejection::UnknownPlayer {
            player: player.clone(),
        })?;

    let winner_seat = seat.opponent();
    let result = MatchResult {
        winner: state.player(winner_seat).id.clone(),
        winner_seat,
        reason: format!("{} surrendered", state.player(seat).display_name()),
    };
    info!(
        match_id = %state.id,
        winner = %result.winner,
        reason = %result.reason,
        "match ended"
    );

    let mut next = state.clone();
    next.is_active = false;
    next.result = Some(result);
    Ok(next)
}
