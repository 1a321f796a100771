//! Effect catalog for card authoring.
//!
//! The `EffectCatalog` stores the predefined effects a card author can
//! attach to a card. It provides lookup by id, filtering by trigger, and
//! the subset of effects suited to each card type.

use rustc_hash::FxHashMap;

use super::definition::CardType;
use super::effect::{CardEffect, Duration, EffectKind, EffectTrigger, Keyword, TargetKind};
use crate::error::CardError;
use crate::mana::ManaColor;

/// Catalog of effect definitions, in registration order.
///
/// ## Example
///
/// ```
/// use school_ccg::cards::{CardType, EffectCatalog, EffectTrigger};
///
/// let catalog = EffectCatalog::standard();
///
/// let strike = catalog.get("direct-damage-2").unwrap();
/// assert_eq!(strike.name, "Lightning Strike");
///
/// assert!(catalog
///     .for_card_type(CardType::Spell)
///     .all(|e| e.trigger == EffectTrigger::OnPlay));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EffectCatalog {
    effects: Vec<CardEffect>,
    index: FxHashMap<String, usize>,
}

impl EffectCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an effect definition.
    ///
    /// Panics if an effect with the same id already exists.
    pub fn register(&mut self, effect: CardEffect) {
        if self.index.contains_key(&effect.id) {
            panic!("Effect with id {:?} already registered", effect.id);
        }
        self.index.insert(effect.id.clone(), self.effects.len());
        self.effects.push(effect);
    }

    /// Get an effect by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardEffect> {
        self.index.get(id).map(|&i| &self.effects[i])
    }

    /// Resolve a list of effect ids into effect definitions.
    pub fn resolve_ids<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<CardEffect>, CardError> {
        ids.iter()
            .map(|id| {
                self.get(id.as_ref())
                    .cloned()
                    .ok_or_else(|| CardError::UnknownEffect(id.as_ref().to_string()))
            })
            .collect()
    }

    /// Number of registered effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate over all effects.
    pub fn iter(&self) -> impl Iterator<Item = &CardEffect> {
        self.effects.iter()
    }

    /// Effects with the given trigger.
    pub fn by_trigger(&self, trigger: EffectTrigger) -> impl Iterator<Item = &CardEffect> {
        self.effects.iter().filter(move |e| e.trigger == trigger)
    }

    /// Effects suited to a card type.
    ///
    /// - Creatures: continuous, attack, death, and activated effects
    /// - Spells: on-play effects
    /// - Artifacts: continuous and activated effects
    /// - Lands: activated mana effects
    pub fn for_card_type(&self, card_type: CardType) -> impl Iterator<Item = &CardEffect> {
        self.effects.iter().filter(move |e| {
            use EffectTrigger::*;
            match card_type {
                CardType::Creature => {
                    matches!(e.trigger, Continuous | OnAttack | OnDeath | Activated)
                }
                CardType::Spell => e.trigger == OnPlay,
                CardType::Artifact => matches!(e.trigger, Continuous | Activated),
                CardType::Land => e.trigger == Activated && e.mana_produced().is_some(),
            }
        })
    }

    /// The predefined effect library.
    #[must_use]
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for effect in standard_effects() {
            catalog.register(effect);
        }
        catalog
    }
}

fn effect(
    id: &str,
    name: &str,
    description: &str,
    trigger: EffectTrigger,
    kind: EffectKind,
) -> CardEffect {
    CardEffect::new(id, name, trigger, kind).with_description(description)
}

fn standard_effects() -> Vec<CardEffect> {
    use EffectTrigger::*;

    vec![
        // Combat
        effect(
            "first-strike",
            "First Strike",
            "This creature deals combat damage before creatures without first strike.",
            OnAttack,
            EffectKind::Keyword(Keyword::FirstStrike),
        ),
        effect(
            "trample",
            "Trample",
            "Excess combat damage may be dealt to defending player.",
            OnAttack,
            EffectKind::Keyword(Keyword::Trample),
        ),
        effect(
            "flying",
            "Flying",
            "Can only be blocked by creatures with flying or reach.",
            Continuous,
            EffectKind::Keyword(Keyword::Flying),
        ),
        effect(
            "reach",
            "Reach",
            "Can block creatures with flying.",
            Continuous,
            EffectKind::Keyword(Keyword::Reach),
        ),
        // Damage
        effect(
            "direct-damage-2",
            "Lightning Strike",
            "Deal 2 damage to target player or creature.",
            OnPlay,
            EffectKind::Damage { amount: 2, target: TargetKind::Any },
        ),
        effect(
            "direct-damage-3",
            "Fireball",
            "Deal 3 damage to target player or creature.",
            OnPlay,
            EffectKind::Damage { amount: 3, target: TargetKind::Any },
        ),
        effect(
            "area-damage-1",
            "Shock Wave",
            "Deal 1 damage to all creatures.",
            OnPlay,
            EffectKind::Damage { amount: 1, target: TargetKind::AllCreatures },
        ),
        // Healing
        effect(
            "heal-3",
            "First Aid",
            "Target player gains 3 life.",
            OnPlay,
            EffectKind::Heal { amount: 3, target: TargetKind::Player },
        ),
        effect(
            "heal-5",
            "Major Healing",
            "Target player gains 5 life.",
            OnPlay,
            EffectKind::Heal { amount: 5, target: TargetKind::Player },
        ),
        // Draw
        effect("draw-1", "Study Session", "Draw a card.", OnPlay, EffectKind::Draw { count: 1 }),
        effect("draw-2", "Research", "Draw two cards.", OnPlay, EffectKind::Draw { count: 2 }),
        // Buffs
        effect(
            "power-boost-2",
            "Strength Training",
            "Target creature gets +2/+0 until end of turn.",
            OnPlay,
            boost(2, 0, TargetKind::Creature),
        ),
        effect(
            "defense-boost-2",
            "Shield Wall",
            "Target creature gets +0/+2 until end of turn.",
            OnPlay,
            boost(0, 2, TargetKind::Creature),
        ),
        effect(
            "balanced-boost-1",
            "Encourage",
            "Target creature gets +1/+1 until end of turn.",
            OnPlay,
            boost(1, 1, TargetKind::Creature),
        ),
        // Removal
        effect(
            "destroy-creature",
            "Eliminate",
            "Destroy target creature.",
            OnPlay,
            EffectKind::Destroy { target: TargetKind::Creature },
        ),
        effect(
            "return-to-hand",
            "Confusion",
            "Return target creature to its owner's hand.",
            OnPlay,
            EffectKind::Bounce { target: TargetKind::Creature },
        ),
        // Mana
        effect(
            "add-mana-any-1",
            "Quick Study",
            "Add one mana of any color.",
            OnPlay,
            EffectKind::AddMana { amount: 1, color: None },
        ),
        effect(
            "add-mana-blue-2",
            "Math Focus",
            "Add two blue mana.",
            OnPlay,
            EffectKind::AddMana { amount: 2, color: Some(ManaColor::Math) },
        ),
        effect(
            "add-mana-red-2",
            "German Passion",
            "Add two red mana.",
            OnPlay,
            EffectKind::AddMana { amount: 2, color: Some(ManaColor::German) },
        ),
        // Triggered
        effect(
            "death-trigger-damage",
            "Explosive End",
            "When this creature dies, deal 2 damage to any target.",
            OnDeath,
            EffectKind::Damage { amount: 2, target: TargetKind::Any },
        ),
        effect(
            "death-trigger-draw",
            "Final Lesson",
            "When this creature dies, draw a card.",
            OnDeath,
            EffectKind::Draw { count: 1 },
        ),
        effect(
            "attack-trigger-buff",
            "Battle Fury",
            "Whenever this creature attacks, it gets +1/+0 until end of turn.",
            OnAttack,
            boost(1, 0, TargetKind::SelfCard),
        ),
        // Protection
        effect(
            "indestructible",
            "Unbreakable",
            "This creature cannot be destroyed by damage or effects.",
            Continuous,
            EffectKind::Keyword(Keyword::Indestructible),
        ),
        effect(
            "hexproof",
            "Untouchable",
            "This creature cannot be targeted by opponent's spells or abilities.",
            Continuous,
            EffectKind::Keyword(Keyword::Hexproof),
        ),
        // School-themed
        effect(
            "test-anxiety",
            "Test Anxiety",
            "Target player discards a card at random.",
            OnPlay,
            EffectKind::Discard { count: 1, random: true, target: TargetKind::Player },
        ),
        effect(
            "group-project",
            "Group Project",
            "All creatures you control get +1/+1 until end of turn.",
            OnPlay,
            boost(1, 1, TargetKind::FriendlyCreatures),
        ),
        effect(
            "homework-help",
            "Homework Help",
            "Target creature cannot attack or block until end of turn.",
            OnPlay,
            EffectKind::Tap { duration: Duration::EndOfTurn, target: TargetKind::Creature },
        ),
        effect(
            "pop-quiz",
            "Pop Quiz",
            "Look at target player's hand and choose a card. That player discards that card.",
            OnPlay,
            EffectKind::TargetedDiscard { target: TargetKind::Player },
        ),
        effect(
            "detention",
            "Detention",
            "Target creature cannot untap during its controller's next untap step.",
            OnPlay,
            EffectKind::SkipUntap { duration: Duration::OneTurn, target: TargetKind::Creature },
        ),
    ]
}

fn boost(power: i32, toughness: i32, target: TargetKind) -> EffectKind {
    EffectKind::Boost {
        power,
        toughness,
        duration: Duration::EndOfTurn,
        target,
    }
}
