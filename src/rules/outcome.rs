//! Win-condition evaluation.
//!
//! A match ends when a player's life drops to zero or below, or when a
//! player surrenders. Seats are scanned in index order and the first seat
//! at zero or below loses, so when both players fall in the same action
//! seat 0 loses and seat 1 wins.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameState, PlayerId, Seat};

/// Final result recorded on an ended match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: PlayerId,
    pub winner_seat: Seat,
    pub reason: String,
}

/// Report from `check_game_end`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnd {
    pub ended: bool,
    pub winner: Option<PlayerId>,
    pub reason: Option<String>,
}

impl GameEnd {
    /// The match continues.
    #[must_use]
    pub fn ongoing() -> Self {
        Self::default()
    }
}

impl From<&MatchResult> for GameEnd {
    fn from(result: &MatchResult) -> Self {
        Self {
            ended: true,
            winner: Some(result.winner.clone()),
            reason: Some(result.reason.clone()),
        }
    }
}

/// Inspect a state for a terminal condition.
///
/// An already recorded result (e.g. a surrender) takes precedence over
/// life totals.
#[must_use]
pub fn check_game_end(state: &GameState) -> GameEnd {
    if let Some(result) = &state.result {
        return GameEnd::from(result);
    }
    life_result(state)
        .map(|result| GameEnd::from(&result))
        .unwrap_or_else(GameEnd::ongoing)
}

/// Mark the state ended if a life total reached zero.
///
/// No-op for a state that is already inactive or has no loser.
#[must_use]
pub fn conclude(mut state: GameState) -> GameState {
    if !state.is_active {
        return state;
    }
    if let Some(result) = life_result(&state) {
        info!(
            match_id = %state.id,
            winner = %result.winner,
            reason = %result.reason,
            "match ended"
        );
        state.is_active = false;
        state.result = Some(result);
    }
    state
}

fn life_result(state: &GameState) -> Option<MatchResult> {
    let loser = Seat::all().find(|&seat| state.player(seat).life <= 0)?;
    let winner_seat = loser.opponent();

    Some(MatchResult {
        winner: state.player(winner_seat).id.clone(),
        winner_seat,
        reason: format!("{} was reduced to 0 life", state.player(loser).display_name()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, Player, Seats};
    use crate::core::MatchId;

    fn state(life_a: i32, life_b: i32) -> GameState {
        GameState {
            id: MatchId::new("m-1"),
            players: Seats::from_pair(
                Player::new("alice", life_a).with_username("Alice"),
                Player::new("bob", life_b).with_username("Bob"),
            ),
            current_player: Seat::FIRST,
            phase: Phase::Combat,
            turn: 3,
            is_active: true,
            created_at: 0,
            last_action: None,
            result: None,
        }
    }

    #[test]
    fn test_no_winner_while_both_alive() {
        let end = check_game_end(&state(20, 1));
        assert_eq!(end, GameEnd::ongoing());
        assert!(!end.ended);
    }

    #[test]
    fn test_opponent_wins_at_zero_life() {
        let end = check_game_end(&state(20, 0));
        assert!(end.ended);
        assert_eq!(end.winner, Some(PlayerId::new("alice")));
        assert_eq!(end.reason.as_deref(), Some("Bob was reduced to 0 life"));

        let end = check_game_end(&state(-3, 5));
        assert_eq!(end.winner, Some(PlayerId::new("bob")));
    }

    #[test]
    fn test_simultaneous_zero_life_seat_one_wins() {
        for _ in 0..10 {
            let end = check_game_end(&state(0, -2));
            assert_eq!(end.winner, Some(PlayerId::new("bob")));
            assert_eq!(end.reason.as_deref(), Some("Alice was reduced to 0 life"));
        }
    }

    #[test]
    fn test_conclude_marks_inactive() {
        let ended = conclude(state(20, 0));
        assert!(!ended.is_active);

        let result = ended.result.unwrap();
        assert_eq!(result.winner, PlayerId::new("alice"));
        assert_eq!(result.winner_seat, Seat::FIRST);

        let ongoing = conclude(state(20, 20));
        assert!(ongoing.is_active);
        assert!(ongoing.result.is_none());
    }

    #[test]
    fn test_recorded_result_takes_precedence() {
        let mut surrendered = state(20, 20);
        surrendered.is_active = false;
        surrendered.result = Some(MatchResult {
            winner: PlayerId::new("bob"),
            winner_seat: Seat::SECOND,
            reason: "Alice surrendered".to_string(),
        });

        let end = check_game_end(&surrendered);
        assert!(end.ended);
        assert_eq!(end.winner, Some(PlayerId::new("bob")));
    }
}
