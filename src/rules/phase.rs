//! Match lifecycle: creation, setup, and phase sequencing.
//!
//! The sequencing state is `(current_player, phase, turn)`. Phases advance
//! through `RulesConfig::phase_order`; past the last phase the turn passes
//! to the other seat, the cycle restarts, and the new current player's
//! turn-scoped resources are reset.

use std::time::{SystemTime, UNIX_EPOCH};

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::actions::ensure_active;
use crate::cards::CardRef;
use crate::core::{GameRng, GameState, MatchId, Player, PlayerId, RulesConfig, Seat, Seats};
use crate::error::Rejection;
use crate::zones::Zone;

/// Create a match stamped with the current wall-clock time.
///
/// Rejects two seats held by the same player id.
pub fn create_match(
    config: &RulesConfig,
    player_a: impl Into<PlayerId>,
    player_b: impl Into<PlayerId>,
    match_id: impl Into<MatchId>,
) -> Result<GameState, Rejection> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    create_match_at(config, player_a, player_b, match_id, now)
}

/// Create a match with an explicit creation time (ms since epoch).
///
/// Both players start at the configured life with empty pools and zones.
/// Seat 0 takes the first turn.
pub fn create_match_at(
    config: &RulesConfig,
    player_a: impl Into<PlayerId>,
    player_b: impl Into<PlayerId>,
    match_id: impl Into<MatchId>,
    created_at: u64,
) -> Result<GameState, Rejection> {
    let (player_a, player_b) = (player_a.into(), player_b.into());
    if player_a == player_b {
        return Err(Rejection::DuplicatePlayer { player: player_a });
    }

    let state = GameState {
        id: match_id.into(),
        players: Seats::from_pair(
            Player::new(player_a, config.starting_life),
            Player::new(player_b, config.starting_life),
        ),
        current_player: Seat::FIRST,
        phase: config.first_phase(),
        turn: 1,
        is_active: true,
        created_at,
        last_action: None,
        result: None,
    };

    info!(
        match_id = %state.id,
        player_a = %state.player(Seat::FIRST).id,
        player_b = %state.player(Seat::SECOND).id,
        "match created"
    );
    Ok(state)
}

/// Load both decks, shuffle them with `seed`, and deal starting hands.
///
/// Cards are validated against their authoring constraints, and every card
/// id must be unique across both decks. Only a freshly created match with
/// empty zones can be started.
pub fn start_match(
    config: &RulesConfig,
    state: &GameState,
    deck_a: &[CardRef],
    deck_b: &[CardRef],
    seed: u64,
) -> Result<GameState, Rejection> {
    ensure_active(state)?;
    let untouched = state.turn == 1
        && state
            .players
            .iter()
            .all(|(_, p)| p.zones.card_count() == 0);
    if !untouched {
        return Err(Rejection::MatchAlreadyStarted);
    }

    let mut seen = FxHashSet::default();
    for card in deck_a.iter().chain(deck_b) {
        card.validate().map_err(|error| Rejection::InvalidCard {
            card: card.id.clone(),
            error,
        })?;
        if !seen.insert(&card.id) {
            return Err(Rejection::DuplicateCard {
                card: card.id.clone(),
            });
        }
    }

    let mut rng = GameRng::new(seed);
    let mut next = state.clone();
    for (seat, deck) in [(Seat::FIRST, deck_a), (Seat::SECOND, deck_b)] {
        let mut cards = deck.to_vec();
        rng.shuffle(&mut cards);

        let player = next.player_mut(seat);
        player.zones.deck = cards.into_iter().collect();
        for _ in 0..config.starting_hand_size {
            match player.zones.pop_top(Zone::Deck) {
                Some(card) => player.zones.push(Zone::Hand, card),
                None => break,
            }
        }
    }

    info!(
        match_id = %next.id,
        seed = rng.seed(),
        deck_a = deck_a.len(),
        deck_b = deck_b.len(),
        "match started"
    );
    Ok(next)
}

/// Advance to the next phase, passing the turn after the last one.
///
/// Not gated on the caller's identity; only on the match being active.
pub fn advance_phase(config: &RulesConfig, state: &GameState) -> Result<GameState, Rejection> {
    ensure_active(state)?;

    let mut next = state.clone();
    match config.next_phase(state.phase) {
        Some(phase) => next.phase = phase,
        None => {
            next.current_player = state.current_player.opponent();
            next.phase = config.first_phase();
            next.turn = state.turn + 1;
            let current = next.current_player;
            next.player_mut(current).begin_turn();
        }
    }

    debug!(
        match_id = %next.id,
        from = %state.phase,
        to = %next.phase,
        turn = next.turn,
        current = %next.current().id,
        "phase advanced"
    );
    Ok(next)
}
