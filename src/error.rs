//! Error types for the match engine.
//!
//! Rule violations are ordinary values: every public operation returns
//! `Result<_, Rejection>` and leaves its input state untouched on failure.
//! Contract breaches by the caller (corrupt zones, underflowing mana) are
//! `InvariantViolation`s and abort the operation with a panic.
//!
//! ## Classification
//!
//! `Rejection::kind()` groups rejections the way a transport layer handles
//! them:
//! - `IllegalAction`: wrong actor, wrong phase, missing card, full zone
//! - `InsufficientResources`: the mana pool cannot cover a cost
//! - `InactiveMatch`: the match already ended (stale client state)

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{CardId, CardType};
use crate::core::{Phase, PlayerId};
use crate::mana::ManaColor;

/// Category of a rejected action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The action is not legal in the current state.
    IllegalAction,
    /// The acting player cannot pay for the action.
    InsufficientResources,
    /// The match has ended; no further operations are accepted.
    InactiveMatch,
}

impl RejectionKind {
    /// Short identifier for logs and metrics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalAction => "illegal_action",
            Self::InsufficientResources => "insufficient_resources",
            Self::InactiveMatch => "inactive_match",
        }
    }
}

/// A rejected action. Never mutates state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("The match is no longer active")]
    InactiveMatch,

    #[error("It's not your turn")]
    NotYourTurn,

    #[error("Can only {action} during {required} phase (current phase: {actual})")]
    WrongPhase {
        action: &'static str,
        required: Phase,
        actual: Phase,
    },

    #[error("Card {card} not found in hand")]
    CardNotInHand { card: CardId },

    #[error("Not enough mana to play this card (cost {required}, pool {available})")]
    InsufficientMana { required: u64, available: u64 },

    #[error("Battlefield is full (max {max} cards)")]
    BattlefieldFull { max: usize },

    #[error("Hand is full ({max} cards)")]
    HandFull { max: usize },

    #[error("Deck is empty")]
    DeckEmpty,

    #[error("Already drew a card this turn")]
    AlreadyDrew,

    #[error("Card {card} is not on your battlefield")]
    CardNotOnBattlefield { card: CardId },

    #[error("Card {card} is not a land")]
    NotALand { card: CardId },

    #[error("Card {card} is not a creature")]
    NotACreature { card: CardId },

    #[error("Card {card} is already tapped")]
    AlreadyTapped { card: CardId },

    #[error("Card {card} is not a valid attack target")]
    InvalidTarget { card: CardId },

    #[error("Player {player} is not part of this match")]
    UnknownPlayer { player: PlayerId },

    #[error("Player {player} cannot take both seats")]
    DuplicatePlayer { player: PlayerId },

    #[error("The match has already started")]
    MatchAlreadyStarted,

    #[error("Card id {card} appears more than once in this match")]
    DuplicateCard { card: CardId },

    #[error("Card {card} is invalid: {error}")]
    InvalidCard { card: CardId, error: CardError },
}

impl Rejection {
    /// Classify this rejection.
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::InactiveMatch => RejectionKind::InactiveMatch,
            Self::InsufficientMana { .. } => RejectionKind::InsufficientResources,
            _ => RejectionKind::IllegalAction,
        }
    }

    /// Serializable form for display by a collaborator.
    #[must_use]
    pub fn record(&self) -> RejectionRecord {
        RejectionRecord {
            kind: self.kind(),
            reason: self.to_string(),
        }
    }
}

/// Plain-data rejection report (kind + human-readable reason).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionRecord {
    pub kind: RejectionKind,
    pub reason: String,
}

/// A broken engine invariant. Unreachable through correct use of the
/// public operations; raised as a panic when detected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("mana pool underflow: {color} would drop below zero")]
    ManaUnderflow { color: ManaColor },

    #[error("card {card} occupies more than one zone")]
    CardInMultipleZones { card: CardId },

    #[error("tapped card {card} is not on its controller's battlefield")]
    TappedOffBattlefield { card: CardId },

    #[error("both seats are held by player {player}")]
    DuplicatePlayer { player: PlayerId },

    #[error("seat {seat} does not exist in a two-player match")]
    SeatOutOfRange { seat: u8 },
}

/// Authoring constraint violated by a card definition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name is {len} characters (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("description is {len} characters (max {max})")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("only creatures can have attack/defense values (card is a {card_type})")]
    StatsOnNonCreature { card_type: CardType },

    #[error("{stat} {value} is out of range (max {max})")]
    StatOutOfRange {
        stat: &'static str,
        value: u32,
        max: u32,
    },

    #[error("artwork URL must be a valid HTTP/HTTPS URL")]
    InvalidArtworkUrl,

    #[error("unknown effect id {0:?}")]
    UnknownEffect(String),
}

/// Invalid `RulesConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("phase order must not be empty")]
    EmptyPhaseOrder,

    #[error("phase {0} appears more than once in the phase order")]
    DuplicatePhase(Phase),

    #[error("phase order must include the main phase")]
    MissingMainPhase,

    #[error("payment order must list every mana color exactly once")]
    IncompletePaymentOrder,

    #[error("max battlefield size must be at least 1")]
    ZeroBattlefield,

    #[error("starting hand size {starting} exceeds max hand size {max}")]
    StartingHandTooLarge { starting: usize, max: usize },

    #[error("starting life must be positive (got {0})")]
    NonPositiveLife(i32),
}

/// Failure to encode or decode a state snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),
}
