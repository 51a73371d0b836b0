//! Weighted random choice.
//!
//! Three entry points cover the ways callers keep weights: a map from element
//! to weight, elements that report their own weight through [`Weighted`], and
//! parallel slices of elements and weights. Every form returns `None` instead
//! of panicking when no element can be chosen.
//!
//! Weights are not validated. Zero weights are effectively never selected and
//! negative weights skew the walk; callers should supply non-negative weights
//! with a positive total.

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Capability of elements that expose their own selection weight.
pub trait Weighted {
    /// Non-negative selection weight.
    fn weight(&self) -> f32;
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> f32 {
        (**self).weight()
    }
}

/// Reasons parallel element and weight slices cannot be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeightInputError {
    /// No elements were supplied.
    #[error("no elements supplied for weighted selection")]
    NoElements,
    /// No weights were supplied.
    #[error("no weights supplied for weighted selection")]
    NoWeights,
    /// The slices disagree in length.
    #[error("{elements} elements but {weights} weights supplied for weighted selection")]
    LengthMismatch {
        /// Number of elements.
        elements: usize,
        /// Number of weights.
        weights: usize,
    },
}

/// Checks that `elements` and `weights` can be sampled together.
///
/// # Examples
///
/// ```
/// use game_utils::weighted::{validate_parallel_weights, WeightInputError};
/// assert_eq!(
///     validate_parallel_weights(3, 2),
///     Err(WeightInputError::LengthMismatch { elements: 3, weights: 2 })
/// );
/// assert!(validate_parallel_weights(2, 2).is_ok());
/// ```
pub const fn validate_parallel_weights(
    elements: usize,
    weights: usize,
) -> Result<(), WeightInputError> {
    if elements == 0 {
        Err(WeightInputError::NoElements)
    } else if weights == 0 {
        Err(WeightInputError::NoWeights)
    } else if elements != weights {
        Err(WeightInputError::LengthMismatch { elements, weights })
    } else {
        Ok(())
    }
}

/// Draws the selection point in `[0, total]`.
///
/// `total` itself is reachable when the product rounds up. Degenerate totals
/// (zero, negative, or non-finite) yield `0.0`.
fn draw<R: Rng + ?Sized>(total: f32, rng: &mut R) -> f32 {
    if total.is_finite() && total > 0.0 {
        rng.gen::<f32>() * total
    } else {
        0.0
    }
}

/// Chooses a key from a key-to-weight mapping.
///
/// The entries are shuffled before the walk so keys sharing a weight are not
/// biased by the map's iteration order. Returns `None` for an empty map, and
/// also when rounding stops the walk from reaching the draw.
///
/// Accepts anything iterating `(&K, &f32)`, such as `&HashMap<K, f32>` or
/// `&BTreeMap<K, f32>`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use game_utils::weighted::choose_weighted_map;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let weights = BTreeMap::from([("sword", 1.0), ("stick", 0.0)]);
/// assert_eq!(choose_weighted_map(&weights, &mut rng), Some(&"sword"));
///
/// let empty: BTreeMap<&str, f32> = BTreeMap::new();
/// assert_eq!(choose_weighted_map(&empty, &mut rng), None);
/// ```
pub fn choose_weighted_map<'a, K, M, R>(map: M, rng: &mut R) -> Option<&'a K>
where
    K: 'a,
    M: IntoIterator<Item = (&'a K, &'a f32)>,
    R: Rng + ?Sized,
{
    let mut scratch = Vec::new();
    choose_weighted_map_with(map, &mut scratch, rng)
}

/// As [`choose_weighted_map`], reusing `scratch` for the working list.
///
/// The buffer is cleared on entry; its contents afterwards are unspecified.
pub fn choose_weighted_map_with<'a, K, M, R>(
    map: M,
    scratch: &mut Vec<(f32, &'a K)>,
    rng: &mut R,
) -> Option<&'a K>
where
    K: 'a,
    M: IntoIterator<Item = (&'a K, &'a f32)>,
    R: Rng + ?Sized,
{
    scratch.clear();
    scratch.extend(map.into_iter().map(|(key, weight)| (*weight, key)));
    if scratch.is_empty() {
        return None;
    }

    let total: f32 = scratch.iter().map(|(weight, _)| weight).sum();
    scratch.shuffle(rng);

    let mut selected = draw(total, rng);
    for (weight, key) in scratch.iter() {
        selected -= weight;
        if selected <= 0.0 {
            return Some(*key);
        }
    }
    None
}

/// Walks `weights` and returns the index where the running sum reaches the
/// draw. Ties resolve to the first index reaching it.
fn walk_cumulative<I, R>(weights: I, total: f32, rng: &mut R) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
    R: Rng + ?Sized,
{
    let target = draw(total, rng);
    let mut current = 0.0;
    for (index, weight) in weights.into_iter().enumerate() {
        current += weight;
        if current >= target {
            return Some(index);
        }
    }
    None
}

/// Chooses an element that reports its own weight.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use game_utils::weighted::{choose_by_weight, Weighted};
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// struct Loot(&'static str, f32);
/// impl Weighted for Loot {
///     fn weight(&self) -> f32 {
///         self.1
///     }
/// }
///
/// let mut rng = SmallRng::seed_from_u64(3);
/// let table = [Loot("coin", 5.0)];
/// assert_eq!(choose_by_weight(&table, &mut rng).map(|l| l.0), Some("coin"));
/// ```
pub fn choose_by_weight<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    T: Weighted,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    let total: f32 = items.iter().map(Weighted::weight).sum();
    let index = walk_cumulative(items.iter().map(Weighted::weight), total, rng)?;
    items.get(index)
}

/// Chooses an element using a parallel slice of weights.
///
/// `weights[i]` applies to `items[i]`. Empty inputs or mismatched lengths log
/// a warning and return `None`; neither slice is modified.
pub fn choose_by_weights<'a, T, R>(items: &'a [T], weights: &[f32], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    if let Err(err) = validate_parallel_weights(items.len(), weights.len()) {
        warn!("failed to select random element by weight: {err}");
        return None;
    }
    let total: f32 = weights.iter().sum();
    let index = walk_cumulative(weights.iter().copied(), total, rng)?;
    items.get(index)
}
