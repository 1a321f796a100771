//! Match rules: lifecycle, actions, and win conditions.
//!
//! - `phase`: match creation, setup, and phase sequencing
//! - `actions`: validation and application of player actions
//! - `outcome`: win-condition evaluation
//! - `engine`: the `Rules` facade and the `RulesEngine` command interface

pub mod actions;
pub mod engine;
pub mod outcome;
pub mod phase;

pub use actions::{attack, draw_card, play_card, surrender, tap_for_mana};
pub use engine::{Rules, RulesEngine};
pub use outcome::{check_game_end, conclude, GameEnd, MatchResult};
pub use phase::{advance_phase, create_match, create_match_at, start_match};
