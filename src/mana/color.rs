//! Mana colors.
//!
//! Each school subject is a color. `Learning` is the generic color: costs
//! in learning can be paid with any color, and lands without an explicit
//! color produce it.

use serde::{Deserialize, Serialize};

/// One of the seven mana colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManaColor {
    Math,
    German,
    English,
    French,
    Latin,
    Differentiation,
    /// Generic.
    Learning,
}

impl ManaColor {
    /// All seven colors in canonical order.
    pub const ALL: [ManaColor; 7] = [
        ManaColor::Math,
        ManaColor::German,
        ManaColor::English,
        ManaColor::French,
        ManaColor::Latin,
        ManaColor::Differentiation,
        ManaColor::Learning,
    ];

    /// The six color-locked subjects.
    pub const COLORED: [ManaColor; 6] = [
        ManaColor::Math,
        ManaColor::German,
        ManaColor::English,
        ManaColor::French,
        ManaColor::Latin,
        ManaColor::Differentiation,
    ];

    /// Is this the generic color?
    #[must_use]
    pub const fn is_generic(self) -> bool {
        matches!(self, ManaColor::Learning)
    }

    /// Field key used in serialized pools and costs.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            ManaColor::Math => "math",
            ManaColor::German => "german",
            ManaColor::English => "english",
            ManaColor::French => "french",
            ManaColor::Latin => "latin",
            ManaColor::Differentiation => "differentiation",
            ManaColor::Learning => "learning",
        }
    }

    /// Display name of the subject.
    #[must_use]
    pub const fn subject(self) -> &'static str {
        match self {
            ManaColor::Math => "Mathematics",
            ManaColor::German => "German",
            ManaColor::English => "English",
            ManaColor::French => "French",
            ManaColor::Latin => "Latin",
            ManaColor::Differentiation => "Differentiation",
            ManaColor::Learning => "Learning",
        }
    }
}

impl std::fmt::Display for ManaColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
