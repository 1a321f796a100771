//! Cost engine tests.
//!
//! Properties of affordability and payment over arbitrary pools and costs:
//! - A refused payment leaves the pool untouched
//! - An accepted payment removes exactly the converted cost
//! - Generic mana is consumed in a fixed color order

use proptest::prelude::*;

use school_ccg::mana::{
    can_afford, pay_cost, pay_cost_in_order, total_mana_cost, ManaColor, ManaCost, ManaPool,
};
use school_ccg::Rejection;

fn pool_strategy() -> impl Strategy<Value = ManaPool> {
    prop::array::uniform7(0u32..6).prop_map(|n| {
        ManaColor::ALL
            .iter()
            .zip(n)
            .fold(ManaPool::empty(), |pool, (&color, amount)| pool.with(color, amount))
    })
}

fn cost_strategy() -> impl Strategy<Value = ManaCost> {
    prop::array::uniform7(0u32..4).prop_map(|n| {
        ManaColor::ALL
            .iter()
            .zip(n)
            .fold(ManaCost::free(), |cost, (&color, amount)| cost.with(color, amount))
    })
}

proptest! {
    /// A refused payment leaves the pool as it was; an accepted one drops
    /// the pool total by exactly the converted cost.
    #[test]
    fn payment_matches_affordability(pool in pool_strategy(), cost in cost_strategy()) {
        let before = pool;
        let result = pay_cost(&pool, &cost);

        if can_afford(&pool, &cost) {
            let paid = result.unwrap();
            prop_assert_eq!(paid.total(), pool.total() - total_mana_cost(&cost));
            for color in ManaColor::ALL {
                prop_assert!(paid.get(color) <= pool.get(color));
            }
        } else {
            let refused = matches!(result, Err(Rejection::InsufficientMana { .. }));
            prop_assert!(refused);
        }
        prop_assert_eq!(pool, before);
    }

    /// Colored requirements are always paid in their own color.
    #[test]
    fn colored_requirements_come_from_their_color(
        pool in pool_strategy(),
        cost in cost_strategy(),
    ) {
        if let Ok(paid) = pay_cost(&pool, &cost) {
            for color in ManaColor::COLORED {
                prop_assert!(pool.get(color) - paid.get(color) >= cost.get(color));
            }
        }
    }

    /// Paying is deterministic.
    #[test]
    fn payment_is_deterministic(pool in pool_strategy(), cost in cost_strategy()) {
        prop_assert_eq!(pay_cost(&pool, &cost), pay_cost(&pool, &cost));
    }
}

#[test]
fn test_generic_paid_from_first_color_in_order() {
    let pool = ManaPool::empty().with(ManaColor::Math, 2);
    let cost = ManaCost::generic(1).with(ManaColor::Math, 1);

    assert!(can_afford(&pool, &cost));
    let paid = pay_cost(&pool, &cost).unwrap();
    assert_eq!(paid, ManaPool::empty());
}

#[test]
fn test_generic_consumption_order_is_fixed() {
    let pool = ManaPool::empty()
        .with(ManaColor::Differentiation, 1)
        .with(ManaColor::German, 1)
        .with(ManaColor::Latin, 1)
        .with(ManaColor::Learning, 1);

    // German comes before latin and differentiation; banked learning last.
    let paid = pay_cost(&pool, &ManaCost::generic(2)).unwrap();
    assert_eq!(paid.german, 0);
    assert_eq!(paid.latin, 0);
    assert_eq!(paid.differentiation, 1);
    assert_eq!(paid.learning, 1);
}

#[test]
fn test_banked_learning_pays_generic_last() {
    let pool = ManaPool::empty().with(ManaColor::Learning, 3);
    let paid = pay_cost(&pool, &ManaCost::generic(2)).unwrap();
    assert_eq!(paid.learning, 1);
}

#[test]
fn test_colored_requirement_is_color_locked() {
    let pool = ManaPool::empty().with(ManaColor::Math, 5);
    let cost = ManaCost::free().with(ManaColor::French, 1);

    assert!(!can_afford(&pool, &cost));
    assert_eq!(
        pay_cost(&pool, &cost),
        Err(Rejection::InsufficientMana {
            required: 1,
            available: 5
        })
    );
}

#[test]
fn test_custom_order_missing_colors_refuses_whole_payment() {
    let pool = ManaPool::empty().with(ManaColor::Latin, 2);
    let cost = ManaCost::generic(1);

    assert!(pay_cost_in_order(&pool, &cost, &[ManaColor::Math]).is_err());
    assert_eq!(
        pay_cost_in_order(&pool, &cost, &[ManaColor::Latin]).unwrap().latin,
        1
    );
}

#[test]
fn test_free_cost_always_affordable() {
    let pool = ManaPool::empty();
    assert!(can_afford(&pool, &ManaCost::free()));
    assert_eq!(pay_cost(&pool, &ManaCost::free()), Ok(pool));
}
