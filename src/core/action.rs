//! Commands and the audit record of the last applied command.
//!
//! A `Command` is what a collaborator asks the engine to do on a player's
//! behalf. `GameAction` wraps an accepted command with who sent it and
//! when, and is what a collaborator stamps into `GameState::last_action`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::CardId;

/// What an attacking creature targets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackTarget {
    /// The opposing player.
    Player,
    /// A creature on the opposing battlefield.
    Creature(CardId),
}

/// A player command.
///
/// ## Example
///
/// ```
/// use school_ccg::core::{ActionType, Command};
///
/// let play = Command::play("card-7");
/// assert_eq!(play.kind(), ActionType::PlayCard);
/// assert_eq!(Command::PassPhase.kind(), ActionType::PassPhase);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    DrawCard,
    PlayCard { card: CardId },
    TapForMana { card: CardId },
    Attack { attacker: CardId, target: AttackTarget },
    PassPhase,
    Surrender,
}

impl Command {
    #[must_use]
    pub fn play(card: impl Into<CardId>) -> Self {
        Command::PlayCard { card: card.into() }
    }

    #[must_use]
    pub fn tap(card: impl Into<CardId>) -> Self {
        Command::TapForMana { card: card.into() }
    }

    #[must_use]
    pub fn attack_player(attacker: impl Into<CardId>) -> Self {
        Command::Attack {
            attacker: attacker.into(),
            target: AttackTarget::Player,
        }
    }

    #[must_use]
    pub fn attack_creature(attacker: impl Into<CardId>, blocker: impl Into<CardId>) -> Self {
        Command::Attack {
            attacker: attacker.into(),
            target: AttackTarget::Creature(blocker.into()),
        }
    }

    /// The audit classification of this command.
    #[must_use]
    pub fn kind(&self) -> ActionType {
        match self {
            Command::DrawCard => ActionType::DrawCard,
            Command::PlayCard { .. } => ActionType::PlayCard,
            Command::TapForMana { .. } => ActionType::ActivateAbility,
            Command::Attack { .. } => ActionType::Attack,
            Command::PassPhase => ActionType::PassPhase,
            Command::Surrender => ActionType::Surrender,
        }
    }
}

/// Audit classification of an applied command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    DrawCard,
    PlayCard,
    Attack,
    PassPhase,
    ActivateAbility,
    Surrender,
}

/// A recorded command with metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAction {
    pub kind: ActionType,

    /// The player who sent the command.
    pub player: PlayerId,

    /// Milliseconds since the Unix epoch, supplied by the collaborator.
    pub timestamp: u64,

    pub command: Command,
}

impl GameAction {
    #[must_use]
    pub fn new(player: PlayerId, command: Command, timestamp: u64) -> Self {
        Self {
            kind: command.kind(),
            player,
            timestamp,
            command,
        }
    }
}
