//! Player identification and per-seat data storage.
//!
//! ## Seat
//!
//! A player's fixed, order-significant position in a match: 0 or 1.
//!
//! ## Seats
//!
//! Exactly two values indexed by `Seat`, backed by an array for O(1)
//! access.
//!
//! ## PlayerId
//!
//! Opaque identity supplied by the collaborator (a user id).

use std::ops::{Index, IndexMut};

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::error::InvariantViolation;
use crate::mana::ManaPool;
use crate::zones::Zones;

/// Seat index in a two-player match.
///
/// Decoding goes through `TryFrom<u8>`, so a snapshot can never carry a
/// seat other than 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Seat(u8);

impl Seat {
    pub const FIRST: Seat = Seat(0);
    pub const SECOND: Seat = Seat(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Seat {
        Seat(1 - self.0)
    }

    /// Both seats, in index order.
    pub fn all() -> impl Iterator<Item = Seat> {
        [Seat::FIRST, Seat::SECOND].into_iter()
    }
}

impl TryFrom<u8> for Seat {
    type Error = InvariantViolation;

    fn try_from(seat: u8) -> Result<Self, Self::Error> {
        match seat {
            0 => Ok(Seat::FIRST),
            1 => Ok(Seat::SECOND),
            _ => Err(InvariantViolation::SeatOutOfRange { seat }),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// One value per seat.
///
/// ## Example
///
/// ```
/// use school_ccg::core::{Seat, Seats};
///
/// let mut life = Seats::new(|_| 20);
/// life[Seat::SECOND] -= 3;
///
/// assert_eq!(life[Seat::FIRST], 20);
/// assert_eq!(life[Seat::SECOND], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seats<T> {
    data: [T; 2],
}

impl<T> Seats<T> {
    /// Create with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::FIRST), factory(Seat::SECOND)],
        }
    }

    /// Create from the first and second seat's values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::all().zip(self.data.iter())
    }
}

impl<T> Index<Seat> for Seats<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for Seats<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}

/// Opaque player identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A participant in a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,

    /// Display name. Empty until the collaborator supplies one.
    pub username: String,

    /// Terminal at zero or below.
    pub life: i32,

    pub mana: ManaPool,

    pub zones: Zones,

    /// Battlefield cards used this turn.
    pub tapped: OrdSet<CardId>,

    /// Whether the turn's draw has been taken.
    pub has_drawn: bool,
}

impl Player {
    /// Create a player with empty zones and an empty pool.
    #[must_use]
    pub fn new(id: impl Into<PlayerId>, life: i32) -> Self {
        Self {
            id: id.into(),
            username: String::new(),
            life,
            mana: ManaPool::empty(),
            zones: Zones::default(),
            tapped: OrdSet::new(),
            has_drawn: false,
        }
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Username when set, otherwise the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            self.id.as_str()
        } else {
            &self.username
        }
    }

    #[must_use]
    pub fn is_tapped(&self, card: &CardId) -> bool {
        self.tapped.contains(card)
    }

    /// Reset turn-scoped resources. Runs once per turn boundary for the
    /// player whose turn begins.
    pub fn begin_turn(&mut self) {
        self.tapped = OrdSet::new();
        self.mana = ManaPool::empty();
        self.has_drawn = false;
    }
}
