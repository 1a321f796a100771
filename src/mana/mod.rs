//! Mana economy: colors, pools, costs, and payment.
//!
//! ## Key Types
//!
//! - `ManaColor`: The closed set of seven colors (six subjects + learning)
//! - `ManaPool`: A player's spendable mana, one counter per color
//! - `ManaCost`: The price of a card; `learning` is payable by any color
//!
//! ## Cost Engine
//!
//! - `total_mana_cost`: Converted cost of a `ManaCost`
//! - `can_afford`: Colored requirements are color-locked, generic is not
//! - `pay_cost`: All-or-nothing deduction returning the new pool

pub mod color;
pub mod pool;
pub mod payment;

pub use color::ManaColor;
pub use pool::{ManaCost, ManaPool};
pub use payment::{can_afford, pay_cost, pay_cost_in_order, total_mana_cost, DEFAULT_PAYMENT_ORDER};
