//! # school-ccg
//!
//! Match engine for a collectible card game whose mana colors are school
//! subjects.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: Every operation takes a `&GameState` and returns
//!    a new state or a `Rejection`. Inputs are never modified, so a
//!    rejected action leaves nothing partially applied.
//!
//! 2. **Configuration Over Convention**: Life, hand and battlefield limits,
//!    the phase cycle, and the generic payment order come from an injected
//!    `RulesConfig`.
//!
//! 3. **Effects Are Data**: Card effects are a tagged `EffectKind`. The
//!    engine reads trigger classes and land mana; resolution of everything
//!    else belongs to an external resolver.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Zones are `im` vectors of shared
//!   `Arc<Card>` references, so cloning a state is cheap.
//!
//! - **Single Writer**: The engine is synchronous and holds no locks. A
//!   collaborator serializes the actions of each match.
//!
//! ## Modules
//!
//! - `mana`: Colors, pools, costs, and the cost engine
//! - `cards`: Card definitions, effects, and the effect catalog
//! - `core`: Players, state, commands, RNG, configuration
//! - `zones`: Per-player card locations
//! - `rules`: Match lifecycle, actions, win conditions, `Rules` facade
//! - `balance`: Advisory mana cost suggestion
//! - `error`: Rejections and invariant violations

pub mod balance;
pub mod cards;
pub mod core;
pub mod error;
pub mod mana;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionType, AttackTarget, Command, GameAction, GameRng, GameState, MatchId, Phase, Player,
    PlayerId, RulesConfig, Seat, Seats,
};

pub use crate::mana::{
    can_afford, pay_cost, pay_cost_in_order, total_mana_cost, ManaColor, ManaCost, ManaPool,
};

pub use crate::cards::{
    Card, CardEffect, CardId, CardRef, CardType, EffectCatalog, EffectKind, EffectTrigger,
};

pub use crate::zones::{Zone, Zones};

pub use crate::rules::{check_game_end, GameEnd, MatchResult, Rules, RulesEngine};

pub use crate::balance::{suggest_mana_cost, CardDraft};

pub use crate::error::{
    CardError, ConfigError, InvariantViolation, Rejection, RejectionKind, RejectionRecord,
    SnapshotError,
};
