//! Zone system for card locations.
//!
//! Every player owns four ordered zones: hand, deck, battlefield, and
//! graveyard. A card instance is in exactly one of them at a time.
//!
//! ## Key Types
//!
//! - `Zone`: Which of the four zones
//! - `Zones`: A player's zone contents and movement operations

pub mod manager;

pub use manager::{Zone, Zones};
