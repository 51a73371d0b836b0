//! Fixtures for exercising the weighted and random helpers.

use std::hash::Hash;

use game_utils::Weighted;
use hashbrown::HashMap;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Default seed shared by statistical tests so failures reproduce.
pub const TEST_SEED: u64 = 0x6a6d_6573;

/// Build a deterministic generator.
///
/// # Examples
/// ```
/// use rand::Rng;
/// use test_utils::sampling::seeded_rng;
/// let a: u32 = seeded_rng(1).gen();
/// let b: u32 = seeded_rng(1).gen();
/// assert_eq!(a, b);
/// ```
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Element carrying its own weight.
#[derive(Clone, Debug, PartialEq)]
pub struct LootEntry {
    pub name: &'static str,
    pub weight: f32,
}

impl LootEntry {
    /// Create a new [`LootEntry`].
    ///
    /// # Examples
    /// ```
    /// use test_utils::sampling::LootEntry;
    /// let entry = LootEntry::new("gem", 2.0);
    /// assert_eq!(entry.name, "gem");
    /// ```
    pub fn new(name: &'static str, weight: f32) -> Self {
        Self { name, weight }
    }
}

impl Weighted for LootEntry {
    fn weight(&self) -> f32 {
        self.weight
    }
}

/// Convert `(name, weight)` pairs into loot entries.
pub fn loot_table(entries: &[(&'static str, f32)]) -> Vec<LootEntry> {
    entries
        .iter()
        .map(|&(name, weight)| LootEntry::new(name, weight))
        .collect()
}

/// Run `draw` `trials` times and return how often each outcome occurred,
/// as a fraction of `trials`. `None` draws are counted under no key.
pub fn observed_frequencies<T, F>(trials: u32, mut draw: F) -> HashMap<T, f64>
where
    T: Eq + Hash,
    F: FnMut() -> Option<T>,
{
    let mut counts: HashMap<T, u32> = HashMap::new();
    for _ in 0..trials {
        if let Some(outcome) = draw() {
            *counts.entry(outcome).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(outcome, count)| (outcome, f64::from(count) / f64::from(trials.max(1))))
        .collect()
}
