//! Per-player zone storage and card movement.
//!
//! `Zones` holds a player's four ordered card sequences. Movement is
//! remove-then-push, so a card is never observed in two zones. The top of
//! the deck is the back of its sequence.
//!
//! Sequences are `im::Vector`, so cloning a player (and therefore a whole
//! `GameState`) shares structure instead of copying cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardRef};

/// A card location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Hand,
    Deck,
    Battlefield,
    Graveyard,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Hand, Zone::Deck, Zone::Battlefield, Zone::Graveyard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Zone::Hand => "hand",
            Zone::Deck => "deck",
            Zone::Battlefield => "battlefield",
            Zone::Graveyard => "graveyard",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A player's hand, deck, battlefield, and graveyard.
///
/// ## Usage
///
/// ```
/// use school_ccg::cards::{Card, CardId, CardType};
/// use school_ccg::zones::{Zone, Zones};
///
/// let mut zones = Zones::default();
/// zones.push(Zone::Hand, Card::new("c1", "Eraser", CardType::Artifact).into_ref());
///
/// let card = zones.take(Zone::Hand, &CardId::new("c1")).unwrap();
/// zones.push(Zone::Battlefield, card);
///
/// assert_eq!(zones.locate(&CardId::new("c1")), Some(Zone::Battlefield));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    pub hand: Vector<CardRef>,
    pub deck: Vector<CardRef>,
    pub battlefield: Vector<CardRef>,
    pub graveyard: Vector<CardRef>,
}

impl Zones {
    /// Cards in a zone, in order.
    #[must_use]
    pub fn get(&self, zone: Zone) -> &Vector<CardRef> {
        match zone {
            Zone::Hand => &self.hand,
            Zone::Deck => &self.deck,
            Zone::Battlefield => &self.battlefield,
            Zone::Graveyard => &self.graveyard,
        }
    }

    fn get_mut(&mut self, zone: Zone) -> &mut Vector<CardRef> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::Deck => &mut self.deck,
            Zone::Battlefield => &mut self.battlefield,
            Zone::Graveyard => &mut self.graveyard,
        }
    }

    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.get(zone).len()
    }

    /// Index of a card within a zone.
    #[must_use]
    pub fn position(&self, zone: Zone, card: &CardId) -> Option<usize> {
        self.get(zone).iter().position(|c| &c.id == card)
    }

    #[must_use]
    pub fn contains(&self, zone: Zone, card: &CardId) -> bool {
        self.position(zone, card).is_some()
    }

    /// Look up a card in a zone without moving it.
    #[must_use]
    pub fn find(&self, zone: Zone, card: &CardId) -> Option<&CardRef> {
        self.get(zone).iter().find(|c| &c.id == card)
    }

    /// Remove a card from a zone.
    pub fn take(&mut self, zone: Zone, card: &CardId) -> Option<CardRef> {
        let index = self.position(zone, card)?;
        Some(self.get_mut(zone).remove(index))
    }

    /// Append a card to a zone (the top, for the deck).
    pub fn push(&mut self, zone: Zone, card: CardRef) {
        self.get_mut(zone).push_back(card);
    }

    /// Remove the top card of a zone.
    pub fn pop_top(&mut self, zone: Zone) -> Option<CardRef> {
        self.get_mut(zone).pop_back()
    }

    /// The zone holding a card, searched in `Zone::ALL` order.
    #[must_use]
    pub fn locate(&self, card: &CardId) -> Option<Zone> {
        Zone::ALL.into_iter().find(|&zone| self.contains(zone, card))
    }

    /// Every card with its zone.
    pub fn iter(&self) -> impl Iterator<Item = (Zone, &CardRef)> {
        Zone::ALL
            .into_iter()
            .flat_map(move |zone| self.get(zone).iter().map(move |card| (zone, card)))
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn card_count(&self) -> usize {
        Zone::ALL.iter().map(|&zone| self.len(zone)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardType};

    fn card(id: &str) -> CardRef {
        Card::new(id, id, CardType::Creature).with_stats(1, 1).into_ref()
    }

    #[test]
    fn test_push_and_take() {
        let mut zones = Zones::default();
        zones.push(Zone::Hand, card("a"));
        zones.push(Zone::Hand, card("b"));
        zones.push(Zone::Hand, card("c"));

        let taken = zones.take(Zone::Hand, &CardId::new("b")).unwrap();
        assert_eq!(taken.id, CardId::new("b"));

        let remaining: Vec<_> = zones.hand.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(remaining, vec!["a", "c"]);
        assert!(zones.take(Zone::Hand, &CardId::new("b")).is_none());
    }

    #[test]
    fn test_pop_top_takes_last_pushed() {
        let mut zones = Zones::default();
        zones.push(Zone::Deck, card("bottom"));
        zones.push(Zone::Deck, card("top"));

        assert_eq!(zones.pop_top(Zone::Deck).unwrap().id, CardId::new("top"));
        assert_eq!(zones.pop_top(Zone::Deck).unwrap().id, CardId::new("bottom"));
        assert!(zones.pop_top(Zone::Deck).is_none());
    }

    #[test]
    fn test_locate_and_iter() {
        let mut zones = Zones::default();
        zones.push(Zone::Deck, card("d1"));
        zones.push(Zone::Graveyard, card("g1"));

        assert_eq!(zones.locate(&CardId::new("d1")), Some(Zone::Deck));
        assert_eq!(zones.locate(&CardId::new("g1")), Some(Zone::Graveyard));
        assert_eq!(zones.locate(&CardId::new("x")), None);

        let all: Vec<_> = zones.iter().map(|(z, c)| (z, c.id.as_str())).collect();
        assert_eq!(all, vec![(Zone::Deck, "d1"), (Zone::Graveyard, "g1")]);
        assert_eq!(zones.card_count(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut zones = Zones::default();
        zones.push(Zone::Hand, card("a"));

        let snapshot = zones.clone();
        zones.take(Zone::Hand, &CardId::new("a"));

        assert_eq!(snapshot.len(Zone::Hand), 1);
        assert_eq!(zones.len(Zone::Hand), 0);
    }
}
