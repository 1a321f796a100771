//! Advisory mana cost suggestion for newly authored cards.
//!
//! The suggestion is never enforced by the rules. It is a coarse,
//! deterministic estimate expressed entirely as generic `learning` mana:
//!
//! - Base by type: creature 1, spell 2, artifact 2, unknown 0
//! - Lands are free and short-circuit everything else
//! - `+ attack / 2` and `+ defense / 3` (rounded down)
//! - `+ 1` per effect
//! - At least 1 for any non-land

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType};
use crate::mana::ManaCost;

/// A card being authored. Any field may still be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDraft {
    #[serde(default)]
    pub card_type: Option<CardType>,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub defense: Option<u32>,
    #[serde(default)]
    pub effect_count: usize,
}

impl CardDraft {
    #[must_use]
    pub fn new(card_type: CardType) -> Self {
        Self {
            card_type: Some(card_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stats(mut self, attack: u32, defense: u32) -> Self {
        self.attack = Some(attack);
        self.defense = Some(defense);
        self
    }

    #[must_use]
    pub fn with_effects(mut self, count: usize) -> Self {
        self.effect_count = count;
        self
    }
}

impl From<&Card> for CardDraft {
    fn from(card: &Card) -> Self {
        Self {
            card_type: Some(card.card_type),
            attack: card.attack,
            defense: card.defense,
            effect_count: card.effects.len(),
        }
    }
}

/// Suggest a mana cost for a draft.
///
/// ```
/// use school_ccg::balance::{suggest_mana_cost, CardDraft};
/// use school_ccg::cards::CardType;
///
/// let draft = CardDraft::new(CardType::Creature).with_stats(4, 3).with_effects(1);
/// // 1 (creature) + 2 (attack) + 1 (defense) + 1 (effect)
/// assert_eq!(suggest_mana_cost(&draft).learning, 5);
/// ```
#[must_use]
pub fn suggest_mana_cost(draft: &CardDraft) -> ManaCost {
    let base: u32 = match draft.card_type {
        Some(CardType::Land) => return ManaCost::generic(0),
        Some(CardType::Creature) => 1,
        Some(CardType::Spell | CardType::Artifact) => 2,
        None => 0,
    };

    let stats = draft.attack.unwrap_or(0) / 2 + draft.defense.unwrap_or(0) / 3;
    let effects = u32::try_from(draft.effect_count).unwrap_or(u32::MAX);
    let total = base
        .saturating_add(stats)
        .saturating_add(effects)
        .max(1);

    ManaCost::generic(total)
}
