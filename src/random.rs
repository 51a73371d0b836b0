//! Random pickers over generic containers and the per-thread shuffle source.
//!
//! Pickers take an explicit [`Rng`] so callers can inject seeded generators;
//! [`shuffle`] and [`with_thread_rng`] draw from a lazily seeded generator
//! owned by the calling thread.

use std::cell::RefCell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::SEED_TICK_MULTIPLIER;

thread_local! {
    static THREAD_RNG: RefCell<Option<SmallRng>> = const { RefCell::new(None) };
}

/// Derives the seed for the current thread from the clock and the thread id.
fn thread_seed() -> u64 {
    let ticks = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_nanos() & u128::from(u64::MAX)).unwrap_or_default()
        });
    let mut hasher = DefaultHasher::new();
    std::thread::current().id().hash(&mut hasher);
    ticks
        .wrapping_mul(SEED_TICK_MULTIPLIER)
        .wrapping_add(hasher.finish())
}

/// Runs `f` with the generator owned by the current thread.
///
/// The generator is created on first use and reused for every later call on
/// the same thread. Threads never share generator state.
///
/// # Examples
///
/// ```
/// use game_utils::random::with_thread_rng;
/// use rand::Rng;
/// let roll: u8 = with_thread_rng(|rng| rng.gen_range(1..=6));
/// assert!((1..=6).contains(&roll));
/// ```
pub fn with_thread_rng<R>(f: impl FnOnce(&mut SmallRng) -> R) -> R {
    THREAD_RNG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let rng = slot.get_or_insert_with(|| {
            let seed = thread_seed();
            debug!("seeding thread-local generator with {seed:#x}");
            SmallRng::seed_from_u64(seed)
        });
        f(rng)
    })
}

/// Shuffles `items` in place using the current thread's generator.
pub fn shuffle<T>(items: &mut [T]) {
    with_thread_rng(|rng| shuffle_with(items, rng));
}

/// Shuffles `items` in place with Fisher–Yates using `rng`.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a uniformly chosen element, or `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use game_utils::random::random_element;
/// use rand::{rngs::SmallRng, SeedableRng};
/// let mut rng = SmallRng::seed_from_u64(7);
/// let empty: [u8; 0] = [];
/// assert_eq!(random_element(&empty, &mut rng), None);
/// assert_eq!(random_element(&[4], &mut rng), Some(&4));
/// ```
pub fn random_element<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Option<&'a T> {
    items.choose(rng)
}

/// Returns a uniformly chosen item from an exact-size iterator.
///
/// Works for map keys, map values, and set entries alike. Returns `None` when
/// the iterator is empty.
pub fn random_item<I, R>(items: I, rng: &mut R) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
    R: Rng + ?Sized,
{
    let mut iter = items.into_iter();
    let len = iter.len();
    if len == 0 {
        return None;
    }
    iter.nth(rng.gen_range(0..len))
}

/// Returns `mean` offset by a value drawn from `[-range, range)`.
///
/// A non-positive range returns `mean` unchanged.
pub fn random_mean_i32<R: Rng + ?Sized>(mean: i32, range: i32, rng: &mut R) -> i32 {
    if range <= 0 {
        return mean;
    }
    mean.saturating_add(rng.gen_range(-range..range))
}

/// Returns `mean` offset by a value drawn from `[-range, range]`.
///
/// A non-positive or non-finite range returns `mean` unchanged.
pub fn random_mean_f32<R: Rng + ?Sized>(mean: f32, range: f32, rng: &mut R) -> f32 {
    if !range.is_finite() || range <= 0.0 {
        return mean;
    }
    // Scale a unit draw so wide finite ranges never overflow the sampler.
    range.mul_add(rng.gen_range(-1.0_f32..=1.0), mean)
}

/// Inclusive-min, exclusive-max integer range loaded from data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeI32 {
    /// Lower bound, included in samples.
    pub min: i32,
    /// Upper bound, excluded from samples.
    pub max: i32,
}

impl RangeI32 {
    /// Create a new [`RangeI32`].
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Draws a value in `min..max`; empty or inverted ranges yield `min`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> i32 {
        if self.min >= self.max {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

/// Inclusive floating-point range loaded from data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeF32 {
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl RangeF32 {
    /// Create a new [`RangeF32`].
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draws a value in `min..=max`; inverted or non-finite ranges yield `min`.
    ///
    /// Any pair of finite bounds works, including `-f32::MAX..=f32::MAX`.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> f32 {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min >= self.max {
            return self.min;
        }
        let t: f32 = rng.gen();
        // Weighted sum rather than `min + (max - min) * t`: the span can overflow.
        self.min
            .mul_add(1.0 - t, self.max * t)
            .clamp(self.min, self.max)
    }
}
