//! Benchmarks for the match hot path.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use school_ccg::cards::{Card, CardId, CardRef, CardType};
use school_ccg::core::{GameState, Phase, PlayerId, Seat};
use school_ccg::mana::{pay_cost, ManaColor, ManaCost, ManaPool};
use school_ccg::rules::{Rules, RulesEngine};
use school_ccg::zones::Zone;

fn deck(prefix: &str, size: usize) -> Vec<CardRef> {
    (0..size)
        .map(|i| {
            Card::new(format!("{prefix}-{i}"), "Tutor", CardType::Creature)
                .with_cost(ManaCost::generic(1))
                .with_stats(1, 1)
                .into_ref()
        })
        .collect()
}

fn started(rules: &Rules, deck_size: usize) -> GameState {
    let state = rules.create_match_at("alice", "bob", "bench", 0).unwrap();
    rules
        .start_match(&state, &deck("a", deck_size), &deck("b", deck_size), 42)
        .unwrap()
}

/// Advancing through full turns.
fn benchmark_advance_phase(c: &mut Criterion) {
    let rules = Rules::default();
    let state = started(&rules, 40);

    c.bench_function("advance_phase/full_turn", |b| {
        b.iter(|| {
            let mut s = state.clone();
            for _ in 0..4 {
                s = rules.advance_phase(black_box(&s)).unwrap();
            }
            black_box(s)
        });
    });
}

/// Playing a card, which clones the state, by deck size.
fn benchmark_play_card(c: &mut Criterion) {
    let rules = Rules::default();
    let mut group = c.benchmark_group("play_card");

    for size in [40, 200, 1000] {
        let mut state = started(&rules, size);
        state.phase = Phase::Main;
        state.player_mut(Seat::FIRST).mana = ManaPool::empty().with(ManaColor::Math, 5);
        let card: CardId = state.player(Seat::FIRST).zones.hand[0].id.clone();
        let alice = PlayerId::new("alice");

        group.bench_with_input(BenchmarkId::new("deck", size), &size, |b, _| {
            b.iter(|| black_box(rules.play_card(black_box(&state), &alice, &card).unwrap()));
        });
    }
    group.finish();
}

fn benchmark_legal_commands(c: &mut Criterion) {
    let rules = Rules::default();
    let mut state = started(&rules, 40);
    state.phase = Phase::Main;
    state.player_mut(Seat::FIRST).mana = ManaPool::empty().with(ManaColor::Latin, 3);
    for card in deck("field", 6) {
        state.player_mut(Seat::FIRST).zones.push(Zone::Battlefield, card);
    }
    let alice = PlayerId::new("alice");

    c.bench_function("legal_commands/main", |b| {
        b.iter(|| black_box(rules.legal_commands(black_box(&state), &alice)));
    });
}

fn benchmark_pay_cost(c: &mut Criterion) {
    let pool = ManaPool::empty()
        .with(ManaColor::Math, 3)
        .with(ManaColor::French, 2)
        .with(ManaColor::Learning, 2);
    let cost = ManaCost::generic(4).with(ManaColor::Math, 1);

    c.bench_function("pay_cost", |b| {
        b.iter(|| black_box(pay_cost(black_box(&pool), black_box(&cost))));
    });
}

criterion_group!(
    benches,
    benchmark_advance_phase,
    benchmark_play_card,
    benchmark_legal_commands,
    benchmark_pay_cost
);
criterion_main!(benches);
