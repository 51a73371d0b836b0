//! Behaviour-driven tests using rust-rspec.
//!
//! These suites describe how a loot table drawn through the weighted
//! samplers behaves when entries carry zero weight or the inputs are
//! malformed.

use game_utils::{choose_by_weight, choose_by_weights, WeightInputError};
use game_utils::weighted::validate_parallel_weights;
use std::collections::HashSet;
use test_utils::sampling::{loot_table, seeded_rng, LootEntry, TEST_SEED};

#[derive(Clone, Debug, Default)]
struct LootWorld {
    table: Vec<LootEntry>,
    draws: Vec<Option<&'static str>>,
}

impl LootWorld {
    fn stock(&mut self, entries: &[(&'static str, f32)]) {
        self.table = loot_table(entries);
        self.draws.clear();
    }

    fn draw(&mut self, times: usize) {
        let mut rng = seeded_rng(TEST_SEED);
        self.draws = (0..times)
            .map(|_| choose_by_weight(&self.table, &mut rng).map(|entry| entry.name))
            .collect();
    }

    fn distinct(&self) -> HashSet<Option<&'static str>> {
        self.draws.iter().copied().collect()
    }
}

#[test]
fn zero_weight_loot_is_never_dropped() {
    rspec::run(&rspec::given(
        "a loot table with one empty slot",
        LootWorld::default(),
        |ctx| {
            ctx.before_each(|world| world.stock(&[("empty", 0.0), ("sword", 1.0)]));
            ctx.when("the table is drawn a thousand times", |ctx| {
                ctx.before_each(|world| world.draw(1_000));
                ctx.then("every draw yields an item", |world| {
                    assert!(world.draws.iter().all(Option::is_some));
                });
                ctx.then("the empty slot never drops", |world| {
                    assert!(!world.distinct().contains(&Some("empty")));
                });
            });
        },
    ));
}

#[test]
fn empty_table_yields_nothing() {
    rspec::run(&rspec::given(
        "a loot table with no entries",
        LootWorld::default(),
        |ctx| {
            ctx.before_each(|world| world.stock(&[]));
            ctx.when("the table is drawn", |ctx| {
                ctx.before_each(|world| world.draw(10));
                ctx.then("every draw is empty", |world| {
                    assert_eq!(world.distinct(), HashSet::from([None]));
                });
            });
        },
    ));
}

#[test]
fn malformed_parallel_weights_are_reported() {
    rspec::run(&rspec::given(
        "three items but only two weights",
        (vec!["a", "b", "c"], vec![1.0_f32, 1.0]),
        |ctx| {
            ctx.then("the sampler returns nothing", |(items, weights)| {
                let mut rng = seeded_rng(TEST_SEED);
                assert_eq!(choose_by_weights(items, weights, &mut rng), None);
            });
            ctx.then("validation names the mismatch", |(items, weights)| {
                assert_eq!(
                    validate_parallel_weights(items.len(), weights.len()),
                    Err(WeightInputError::LengthMismatch {
                        elements: 3,
                        weights: 2
                    })
                );
            });
        },
    ));
}
