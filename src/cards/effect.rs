//! Card effect definitions.
//!
//! Each effect is a tagged variant per effect family. The engine reads only
//! the trigger class and, for lands, `AddMana`. Everything else is data
//! handed to an external resolver.

use serde::{Deserialize, Serialize};

use crate::mana::ManaColor;

/// When an effect fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectTrigger {
    OnPlay,
    OnAttack,
    OnDefend,
    OnDeath,
    Continuous,
    Activated,
}

/// Static keyword abilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyword {
    FirstStrike,
    Trample,
    Flying,
    Reach,
    Indestructible,
    Hexproof,
}

/// What an effect may target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Any player or creature.
    Any,
    Player,
    Creature,
    AllCreatures,
    FriendlyCreatures,
    /// The card carrying the effect.
    SelfCard,
}

/// How long a temporary effect lasts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    EndOfTurn,
    OneTurn,
    Permanent,
}

/// Effect body, one variant per family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Keyword(Keyword),
    Damage { amount: u32, target: TargetKind },
    Heal { amount: u32, target: TargetKind },
    Draw { count: u32 },
    Boost {
        power: i32,
        toughness: i32,
        duration: Duration,
        target: TargetKind,
    },
    Destroy { target: TargetKind },
    /// Return to owner's hand.
    Bounce { target: TargetKind },
    /// `color: None` means any color, chosen on resolution.
    AddMana { amount: u32, color: Option<ManaColor> },
    Discard { count: u32, random: bool, target: TargetKind },
    /// Look at a hand and pick the discarded card.
    TargetedDiscard { target: TargetKind },
    /// Target cannot attack or block.
    Tap { duration: Duration, target: TargetKind },
    SkipUntap { duration: Duration, target: TargetKind },
}

/// An effect attached to a card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub trigger: EffectTrigger,
    pub kind: EffectKind,
}

impl CardEffect {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        trigger: EffectTrigger,
        kind: EffectKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            trigger,
            kind,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mana produced when this effect resolves, if it is a mana effect.
    ///
    /// Unspecified colors produce generic `learning` mana.
    #[must_use]
    pub fn mana_produced(&self) -> Option<(ManaColor, u32)> {
        match self.kind {
            EffectKind::AddMana { amount, color } => {
                Some((color.unwrap_or(ManaColor::Learning), amount))
            }
            _ => None,
        }
    }
}
