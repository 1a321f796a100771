//! Mana pools and mana costs.
//!
//! Both are one counter per color. A pool holds what a player can spend;
//! a cost says what a card requires. In a cost, missing fields mean zero.

use serde::{Deserialize, Serialize};

use super::color::ManaColor;

/// A player's spendable mana.
///
/// Counters are unsigned, so a pool can never hold negative mana. Payment
/// goes through `pay_cost`, which refuses before touching anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaPool {
    pub math: u32,
    pub german: u32,
    pub english: u32,
    pub french: u32,
    pub latin: u32,
    pub differentiation: u32,
    pub learning: u32,
}

impl ManaPool {
    /// Create an empty pool.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set one color (builder pattern).
    #[must_use]
    pub fn with(mut self, color: ManaColor, amount: u32) -> Self {
        *self.get_mut(color) = amount;
        self
    }

    /// Amount of one color.
    #[must_use]
    pub fn get(&self, color: ManaColor) -> u32 {
        match color {
            ManaColor::Math => self.math,
            ManaColor::German => self.german,
            ManaColor::English => self.english,
            ManaColor::French => self.french,
            ManaColor::Latin => self.latin,
            ManaColor::Differentiation => self.differentiation,
            ManaColor::Learning => self.learning,
        }
    }

    /// Mutable counter for one color.
    pub fn get_mut(&mut self, color: ManaColor) -> &mut u32 {
        match color {
            ManaColor::Math => &mut self.math,
            ManaColor::German => &mut self.german,
            ManaColor::English => &mut self.english,
            ManaColor::French => &mut self.french,
            ManaColor::Latin => &mut self.latin,
            ManaColor::Differentiation => &mut self.differentiation,
            ManaColor::Learning => &mut self.learning,
        }
    }

    /// Add mana of one color.
    pub fn add(&mut self, color: ManaColor, amount: u32) {
        let counter = self.get_mut(color);
        *counter = counter.saturating_add(amount);
    }

    /// Total mana across all colors. Widened so full counters cannot overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        ManaColor::ALL.iter().map(|&c| u64::from(self.get(c))).sum()
    }

    /// Does the pool hold no mana at all?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The price of a card.
///
/// Colored fields must be paid in their own color. `learning` is the
/// generic component and can be paid with whatever is left over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ManaCost {
    pub math: u32,
    pub german: u32,
    pub english: u32,
    pub french: u32,
    pub latin: u32,
    pub differentiation: u32,
    pub learning: u32,
}

impl ManaCost {
    /// A free cost.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// A purely generic cost.
    #[must_use]
    pub fn generic(amount: u32) -> Self {
        Self {
            learning: amount,
            ..Self::default()
        }
    }

    /// Set one color (builder pattern).
    #[must_use]
    pub fn with(mut self, color: ManaColor, amount: u32) -> Self {
        *self.get_mut(color) = amount;
        self
    }

    /// Requirement for one color.
    #[must_use]
    pub fn get(&self, color: ManaColor) -> u32 {
        match color {
            ManaColor::Math => self.math,
            ManaColor::German => self.german,
            ManaColor::English => self.english,
            ManaColor::French => self.french,
            ManaColor::Latin => self.latin,
            ManaColor::Differentiation => self.differentiation,
            ManaColor::Learning => self.learning,
        }
    }

    fn get_mut(&mut self, color: ManaColor) -> &mut u32 {
        match color {
            ManaColor::Math => &mut self.math,
            ManaColor::German => &mut self.german,
            ManaColor::English => &mut self.english,
            ManaColor::French => &mut self.french,
            ManaColor::Latin => &mut self.latin,
            ManaColor::Differentiation => &mut self.differentiation,
            ManaColor::Learning => &mut self.learning,
        }
    }

    /// Sum of the six colored requirements.
    #[must_use]
    pub fn colored_total(&self) -> u64 {
        ManaColor::COLORED.iter().map(|&c| u64::from(self.get(c))).sum()
    }

    /// Converted cost: all seven fields.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.colored_total() + u64::from(self.learning)
    }
}

impl std::fmt::Display for ManaCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = ManaColor::ALL
            .iter()
            .filter(|&&c| self.get(c) > 0)
            .map(|&c| format!("{} {}", self.get(c), c))
            .collect();

        if parts.is_empty() {
            f.write_str("free")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_builder_and_total() {
        let pool = ManaPool::empty()
            .with(ManaColor::Math, 2)
            .with(ManaColor::Latin, 1);

        assert_eq!(pool.get(ManaColor::Math), 2);
        assert_eq!(pool.get(ManaColor::Latin), 1);
        assert_eq!(pool.get(ManaColor::German), 0);
        assert_eq!(pool.total(), 3);
        assert!(!pool.is_empty());
        assert!(ManaPool::empty().is_empty());
    }

    #[test]
    fn test_pool_add() {
        let mut pool = ManaPool::empty();
        pool.add(ManaColor::French, 2);
        pool.add(ManaColor::French, 1);
        assert_eq!(pool.french, 3);
    }

    #[test]
    fn test_cost_totals() {
        let cost = ManaCost::generic(2)
            .with(ManaColor::Math, 1)
            .with(ManaColor::English, 3);

        assert_eq!(cost.colored_total(), 4);
        assert_eq!(cost.total(), 6);
        assert_eq!(ManaCost::free().total(), 0);
    }

    #[test]
    fn test_cost_missing_fields_default_to_zero() {
        let cost: ManaCost = serde_json::from_str(r#"{"math": 1, "learning": 1}"#).unwrap();
        assert_eq!(cost.math, 1);
        assert_eq!(cost.learning, 1);
        assert_eq!(cost.german, 0);
        assert_eq!(cost.total(), 2);
    }

    #[test]
    fn test_totals_do_not_overflow() {
        let pool = ManaPool::empty()
            .with(ManaColor::Math, u32::MAX)
            .with(ManaColor::German, u32::MAX)
            .with(ManaColor::Learning, u32::MAX);
        assert_eq!(pool.total(), 3 * u64::from(u32::MAX));

        let cost = ManaCost::generic(1).with(ManaColor::Math, u32::MAX);
        assert_eq!(cost.colored_total(), u64::from(u32::MAX));
        assert_eq!(cost.total(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_cost_display() {
        let cost = ManaCost::generic(2).with(ManaColor::Math, 1);
        assert_eq!(format!("{}", cost), "1 math, 2 learning");
        assert_eq!(format!("{}", ManaCost::free()), "free");
    }
}
