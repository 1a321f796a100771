//! Card system: definitions, effects, and the effect catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Opaque card identifier supplied by the authoring collaborator
//! - `Card`: Immutable card definition (type, cost, stats, effects)
//! - `CardEffect`: Effect attached to a card, a tagged `EffectKind` plus trigger
//! - `EffectCatalog`: Predefined effects authors pick from
//!
//! Matches hold cards as `CardRef` (`Arc<Card>`) so moving a card between
//! zones never copies or mutates its definition.

pub mod definition;
pub mod effect;
pub mod catalog;

pub use definition::{Card, CardId, CardRef, CardType, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_STAT};
pub use effect::{CardEffect, Duration, EffectKind, EffectTrigger, Keyword, TargetKind};
pub use catalog::EffectCatalog;
