//! Authoritative match state.
//!
//! ## GameState
//!
//! Everything about an in-progress match:
//! - Both players (life, mana, zones), indexed by seat
//! - Sequencing: current seat, phase, turn number
//! - Lifecycle: active flag, creation time, final result
//! - The collaborator-stamped audit record of the last action
//!
//! Operations never mutate a `GameState` in place. Each accepted operation
//! returns a new value; zones are `im` persistent vectors, so the clone
//! shares structure with its predecessor.
//!
//! ## Snapshots
//!
//! `to_snapshot` / `from_snapshot` encode the full state with bincode for
//! collaborators that store or ship a compact binary copy.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::GameAction;
use super::config::Phase;
use super::player::{Player, PlayerId, Seat, Seats};
use crate::cards::CardId;
use crate::error::{InvariantViolation, SnapshotError};
use crate::rules::MatchResult;
use crate::zones::Zone;

/// Collaborator-assigned match identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub String);

impl MatchId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MatchId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MatchId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub id: MatchId,

    /// Exactly two players. Seat order is significant.
    pub players: Seats<Player>,

    /// Seat whose turn it is.
    pub current_player: Seat,

    pub phase: Phase,

    /// Turn number (starts at 1).
    pub turn: u32,

    /// False once a win condition is reached.
    pub is_active: bool,

    /// Milliseconds since the Unix epoch.
    pub created_at: u64,

    /// Set by the collaborator via `stamp`, never by the engine.
    pub last_action: Option<GameAction>,

    /// Present once the match has ended.
    pub result: Option<MatchResult>,
}

impl GameState {
    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat]
    }

    /// Seat held by a player id.
    #[must_use]
    pub fn seat_of(&self, player: &PlayerId) -> Option<Seat> {
        self.players
            .iter()
            .find(|(_, p)| &p.id == player)
            .map(|(seat, _)| seat)
    }

    /// Is it this player's turn?
    #[must_use]
    pub fn is_turn_of(&self, player: &PlayerId) -> bool {
        &self.current().id == player
    }

    /// Record the collaborator's audit entry for the action that produced
    /// this state.
    #[must_use]
    pub fn stamp(mut self, action: GameAction) -> Self {
        self.last_action = Some(action);
        self
    }

    /// Check structural invariants.
    ///
    /// - The two seats are held by different players
    /// - Every card id appears in exactly one zone across both players
    /// - Tapped cards are on their controller's battlefield
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let first = &self.players[Seat::FIRST];
        if first.id == self.players[Seat::SECOND].id {
            return Err(InvariantViolation::DuplicatePlayer {
                player: first.id.clone(),
            });
        }

        let mut seen: FxHashSet<&CardId> = FxHashSet::default();
        for (_, player) in self.players.iter() {
            for (_, card) in player.zones.iter() {
                if !seen.insert(&card.id) {
                    return Err(InvariantViolation::CardInMultipleZones {
                        card: card.id.clone(),
                    });
                }
            }

            if let Some(card) = player
                .tapped
                .iter()
                .find(|card| !player.zones.contains(Zone::Battlefield, card))
            {
                return Err(InvariantViolation::TappedOffBattlefield { card: card.clone() });
            }
        }

        Ok(())
    }

    /// Encode the full state.
    pub fn to_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by `to_snapshot`.
    pub fn from_snapshot(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
