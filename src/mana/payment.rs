//! Cost engine: affordability and payment.
//!
//! Colored requirements are color-locked. The generic (`learning`) part of
//! a cost is covered from whatever is left after the colored requirements,
//! consumed greedily in a fixed color order so the leftover pool is
//! predictable.

use super::color::ManaColor;
use super::pool::{ManaCost, ManaPool};
use crate::error::{InvariantViolation, Rejection};

/// Order in which leftover mana covers a generic cost.
///
/// Subjects first, in canonical order, then banked `learning` mana.
pub const DEFAULT_PAYMENT_ORDER: [ManaColor; 7] = [
    ManaColor::Math,
    ManaColor::German,
    ManaColor::English,
    ManaColor::French,
    ManaColor::Latin,
    ManaColor::Differentiation,
    ManaColor::Learning,
];

/// Converted cost: sum of all seven fields.
#[must_use]
pub fn total_mana_cost(cost: &ManaCost) -> u64 {
    cost.total()
}

/// Can `pool` pay `cost`?
///
/// True iff every colored requirement is covered by its own color and the
/// mana remaining after those requirements covers `cost.learning`.
#[must_use]
pub fn can_afford(pool: &ManaPool, cost: &ManaCost) -> bool {
    if ManaColor::COLORED
        .iter()
        .any(|&color| pool.get(color) < cost.get(color))
    {
        return false;
    }

    pool.total() - cost.colored_total() >= u64::from(cost.learning)
}

/// Pay `cost` from `pool` using the default payment order.
///
/// Returns the new pool. On failure the input is untouched and
/// `Rejection::InsufficientMana` is returned.
pub fn pay_cost(pool: &ManaPool, cost: &ManaCost) -> Result<ManaPool, Rejection> {
    pay_cost_in_order(pool, cost, &DEFAULT_PAYMENT_ORDER)
}

/// Pay `cost` from `pool`, covering the generic part in `order`.
///
/// Colors missing from `order` are never spent on the generic part; if that
/// leaves the generic part uncovered the payment is rejected as a whole.
pub fn pay_cost_in_order(
    pool: &ManaPool,
    cost: &ManaCost,
    order: &[ManaColor],
) -> Result<ManaPool, Rejection> {
    let insufficient = || Rejection::InsufficientMana {
        required: cost.total(),
        available: pool.total(),
    };

    if !can_afford(pool, cost) {
        return Err(insufficient());
    }

    let mut paid = *pool;
    for color in ManaColor::COLORED {
        debit(&mut paid, color, cost.get(color));
    }

    let mut remaining = cost.learning;
    for &color in order {
        if remaining == 0 {
            break;
        }
        let spend = paid.get(color).min(remaining);
        debit(&mut paid, color, spend);
        remaining -= spend;
    }

    if remaining > 0 {
        return Err(insufficient());
    }

    Ok(paid)
}

fn debit(pool: &mut ManaPool, color: ManaColor, amount: u32) {
    let counter = pool.get_mut(color);
    match counter.checked_sub(amount) {
        Some(left) => *counter = left,
        None => panic!("{}", InvariantViolation::ManaUnderflow { color }),
    }
}
