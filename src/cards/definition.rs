//! Card definitions - static card data.
//!
//! A `Card` is authored outside the engine and never changes once a match
//! references it. The match only moves shared references between zones.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::{CardEffect, EffectTrigger};
use crate::error::CardError;
use crate::mana::ManaCost;

/// Maximum card name length.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum card description length.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum attack or defense value.
pub const MAX_STAT: u32 = 20;

/// Shared reference to an immutable card, as held by zones.
pub type CardRef = Arc<Card>;

/// Unique identifier for a card.
///
/// Opaque to the engine; supplied by the authoring collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card type. Decides where a played card lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Creature,
    Spell,
    Artifact,
    Land,
}

impl CardType {
    /// Does a card of this type stay on the battlefield when played?
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        !matches!(self, CardType::Spell)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardType::Creature => "creature",
            CardType::Spell => "spell",
            CardType::Artifact => "artifact",
            CardType::Land => "land",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use school_ccg::cards::{Card, CardType};
/// use school_ccg::mana::{ManaColor, ManaCost};
///
/// let tutor = Card::new("c1", "Algebra Tutor", CardType::Creature)
///     .with_cost(ManaCost::generic(1).with(ManaColor::Math, 1))
///     .with_stats(2, 3);
///
/// assert_eq!(tutor.attack, Some(2));
/// assert!(tutor.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub card_type: CardType,

    /// Free-text label (e.g. "Homework"). No rules meaning.
    #[serde(default)]
    pub custom_type: Option<String>,

    #[serde(default)]
    pub mana_cost: ManaCost,

    /// Creatures only.
    #[serde(default)]
    pub attack: Option<u32>,

    /// Creatures only.
    #[serde(default)]
    pub defense: Option<u32>,

    /// Ordered effects. SmallVec keeps the common 0-2 effects inline.
    #[serde(default)]
    pub effects: SmallVec<[CardEffect; 2]>,

    #[serde(default)]
    pub artwork_url: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,
}

impl Card {
    /// Create a card with a free cost and no effects.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            card_type,
            custom_type: None,
            mana_cost: ManaCost::free(),
            attack: None,
            defense: None,
            effects: SmallVec::new(),
            artwork_url: None,
            created_by: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_custom_type(mut self, label: impl Into<String>) -> Self {
        self.custom_type = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: ManaCost) -> Self {
        self.mana_cost = cost;
        self
    }

    /// Set attack and defense. `validate` rejects this on non-creatures.
    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32) -> Self {
        self.attack = Some(attack);
        self.defense = Some(defense);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_artwork(mut self, url: impl Into<String>) -> Self {
        self.artwork_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_creator(mut self, user: impl Into<String>) -> Self {
        self.created_by = Some(user.into());
        self
    }

    /// Wrap in a shared reference for placing into zones.
    #[must_use]
    pub fn into_ref(self) -> CardRef {
        Arc::new(self)
    }

    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type == CardType::Creature
    }

    #[must_use]
    pub fn is_land(&self) -> bool {
        self.card_type == CardType::Land
    }

    /// Attack value, zero when absent.
    #[must_use]
    pub fn power(&self) -> u32 {
        self.attack.unwrap_or(0)
    }

    /// Defense value, zero when absent.
    #[must_use]
    pub fn toughness(&self) -> u32 {
        self.defense.unwrap_or(0)
    }

    /// Effects with the given trigger, in card order.
    pub fn effects_with(&self, trigger: EffectTrigger) -> impl Iterator<Item = &CardEffect> {
        self.effects.iter().filter(move |e| e.trigger == trigger)
    }

    /// Check authoring constraints.
    pub fn validate(&self) -> Result<(), CardError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            return Err(CardError::EmptyName);
        }
        if name_len > MAX_NAME_LEN {
            return Err(CardError::NameTooLong {
                len: name_len,
                max: MAX_NAME_LEN,
            });
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LEN {
            return Err(CardError::DescriptionTooLong {
                len: description_len,
                max: MAX_DESCRIPTION_LEN,
            });
        }

        if !self.is_creature() && (self.attack.is_some() || self.defense.is_some()) {
            return Err(CardError::StatsOnNonCreature {
                card_type: self.card_type,
            });
        }
        for (stat, value) in [("attack", self.attack), ("defense", self.defense)] {
            if let Some(value) = value.filter(|&v| v > MAX_STAT) {
                return Err(CardError::StatOutOfRange {
                    stat,
                    value,
                    max: MAX_STAT,
                });
            }
        }

        if let Some(url) = &self.artwork_url {
            let has_scheme = ["http://", "https://"]
                .iter()
                .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme));
            if !has_scheme {
                return Err(CardError::InvalidArtworkUrl);
            }
        }

        Ok(())
    }
}
