//! Rules configuration.
//!
//! Rule variants are injected, not hard-coded. A `RulesConfig` carries:
//! - Life, hand, and battlefield limits
//! - The ordered phase cycle of a turn
//! - The color order used to pay generic costs
//!
//! `RulesConfig::default()` is the standard rule set. Configs deserialize
//! from JSON with missing fields taking their standard values.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mana::{ManaColor, DEFAULT_PAYMENT_ORDER};

/// A sub-step of a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Draw,
    Main,
    Combat,
    End,
}

impl Phase {
    /// The standard phase cycle.
    pub const STANDARD_ORDER: [Phase; 4] = [Phase::Draw, Phase::Main, Phase::Combat, Phase::End];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Draw => "draw",
            Phase::Main => "main",
            Phase::Combat => "combat",
            Phase::End => "end",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Life each player starts with.
    pub starting_life: i32,

    /// Cards dealt to each hand when the match starts.
    pub starting_hand_size: usize,

    /// Hand size at which drawing is refused.
    pub max_hand_size: usize,

    /// Creatures a player may control at once.
    pub max_battlefield_size: usize,

    /// Phases of a turn, in order.
    pub phase_order: Vec<Phase>,

    /// Color order for covering generic costs.
    pub payment_order: Vec<ManaColor>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_life: 20,
            starting_hand_size: 7,
            max_hand_size: 7,
            max_battlefield_size: 12,
            phase_order: Phase::STANDARD_ORDER.to_vec(),
            payment_order: DEFAULT_PAYMENT_ORDER.to_vec(),
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i32) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_max_battlefield_size(mut self, size: usize) -> Self {
        self.max_battlefield_size = size;
        self
    }

    #[must_use]
    pub fn with_phase_order(mut self, phases: impl Into<Vec<Phase>>) -> Self {
        self.phase_order = phases.into();
        self
    }

    #[must_use]
    pub fn with_payment_order(mut self, colors: impl Into<Vec<ManaColor>>) -> Self {
        self.payment_order = colors.into();
        self
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_life <= 0 {
            return Err(ConfigError::NonPositiveLife(self.starting_life));
        }
        if self.max_battlefield_size == 0 {
            return Err(ConfigError::ZeroBattlefield);
        }
        if self.starting_hand_size > self.max_hand_size {
            return Err(ConfigError::StartingHandTooLarge {
                starting: self.starting_hand_size,
                max: self.max_hand_size,
            });
        }

        if self.phase_order.is_empty() {
            return Err(ConfigError::EmptyPhaseOrder);
        }
        for (i, phase) in self.phase_order.iter().enumerate() {
            if self.phase_order[..i].contains(phase) {
                return Err(ConfigError::DuplicatePhase(*phase));
            }
        }
        if !self.phase_order.contains(&Phase::Main) {
            return Err(ConfigError::MissingMainPhase);
        }

        let complete = self.payment_order.len() == ManaColor::ALL.len()
            && ManaColor::ALL.iter().all(|c| self.payment_order.contains(c));
        if !complete {
            return Err(ConfigError::IncompletePaymentOrder);
        }

        Ok(())
    }

    /// First phase of every turn.
    #[must_use]
    pub fn first_phase(&self) -> Phase {
        self.phase_order.first().copied().unwrap_or(Phase::Draw)
    }

    /// Phase following `phase` within the same turn.
    ///
    /// `None` when `phase` ends the turn. A phase outside the configured
    /// order also ends the turn.
    #[must_use]
    pub fn next_phase(&self, phase: Phase) -> Option<Phase> {
        let index = self.phase_order.iter().position(|&p| p == phase)?;
        self.phase_order.get(index + 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.starting_life, 20);
        assert_eq!(config.starting_hand_size, 7);
        assert_eq!(config.max_hand_size, 7);
        assert_eq!(config.max_battlefield_size, 12);
        assert_eq!(config.phase_order, Phase::STANDARD_ORDER.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = RulesConfig::new()
            .with_starting_life(30)
            .with_starting_hand_size(5)
            .with_max_hand_size(8)
            .with_max_battlefield_size(3);

        assert_eq!(config.starting_life, 30);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.max_hand_size, 8);
        assert_eq!(config.max_battlefield_size, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_next_phase() {
        let config = RulesConfig::default();
        assert_eq!(config.first_phase(), Phase::Draw);
        assert_eq!(config.next_phase(Phase::Draw), Some(Phase::Main));
        assert_eq!(config.next_phase(Phase::Main), Some(Phase::Combat));
        assert_eq!(config.next_phase(Phase::Combat), Some(Phase::End));
        assert_eq!(config.next_phase(Phase::End), None);
    }

    #[test]
    fn test_custom_phase_order() {
        let config = RulesConfig::new().with_phase_order([Phase::Main, Phase::End]);
        assert!(config.validate().is_ok());
        assert_eq!(config.first_phase(), Phase::Main);
        assert_eq!(config.next_phase(Phase::Main), Some(Phase::End));
        // Not part of this cycle: ends the turn.
        assert_eq!(config.next_phase(Phase::Combat), None);
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            RulesConfig::new().with_phase_order(Vec::new()).validate(),
            Err(ConfigError::EmptyPhaseOrder)
        );
        assert_eq!(
            RulesConfig::new()
                .with_phase_order([Phase::Main, Phase::Main])
                .validate(),
            Err(ConfigError::DuplicatePhase(Phase::Main))
        );
        assert_eq!(
            RulesConfig::new()
                .with_phase_order([Phase::Draw, Phase::End])
                .validate(),
            Err(ConfigError::MissingMainPhase)
        );
        assert_eq!(
            RulesConfig::new()
                .with_payment_order([ManaColor::Math])
                .validate(),
            Err(ConfigError::IncompletePaymentOrder)
        );
        assert_eq!(
            RulesConfig::new().with_max_battlefield_size(0).validate(),
            Err(ConfigError::ZeroBattlefield)
        );
        assert_eq!(
            RulesConfig::new().with_starting_life(0).validate(),
            Err(ConfigError::NonPositiveLife(0))
        );
        assert!(matches!(
            RulesConfig::new().with_starting_hand_size(9).validate(),
            Err(ConfigError::StartingHandTooLarge { starting: 9, max: 7 })
        ));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: RulesConfig =
            serde_json::from_str(r#"{"starting_life": 40, "max_battlefield_size": 5}"#).unwrap();
        assert_eq!(config.starting_life, 40);
        assert_eq!(config.max_battlefield_size, 5);
        assert_eq!(config.starting_hand_size, 7);
        assert_eq!(config.phase_order.len(), 4);
    }
}
