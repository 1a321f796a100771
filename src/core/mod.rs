//! Core engine types: players, state, commands, RNG, configuration.
//!
//! These are the building blocks the rules operate on. Rule variants are
//! configured via `RulesConfig` rather than by modifying the core.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionType, AttackTarget, Command, GameAction};
pub use config::{Phase, RulesConfig};
pub use player::{Player, PlayerId, Seat, Seats};
pub use rng::GameRng;
pub use state::{GameState, MatchId};
