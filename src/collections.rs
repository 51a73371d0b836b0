//! Small container helpers.

use std::collections::HashSet;
use std::hash::BuildHasher;

/// Whether every flag in `bits` is set. An empty slice counts as all set.
#[must_use]
pub fn all_set(bits: &[bool]) -> bool {
    bits.iter().all(|bit| *bit)
}

/// Whether `items` contains `entry`, treating an empty entry as absent.
///
/// # Examples
///
/// ```
/// use game_utils::collections::contains_non_empty;
/// let tags = ["", "fire", "ice"];
/// assert!(contains_non_empty(&tags, "ice"));
/// assert!(!contains_non_empty(&tags, ""));
/// ```
#[must_use]
pub fn contains_non_empty<S: AsRef<str>>(items: &[S], entry: &str) -> bool {
    !entry.is_empty() && items.iter().any(|item| item.as_ref() == entry)
}

/// Compares two optional slices element-wise.
///
/// Two `None`s are equal; a `None` never equals a present slice.
#[must_use]
pub fn slices_equal<T: PartialEq>(first: Option<&[T]>, second: Option<&[T]>) -> bool {
    match (first, second) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b) || a == b,
        _ => false,
    }
}

/// Returns the entries of `set` in ascending order.
#[must_use]
pub fn sorted_entries<T, S>(set: &HashSet<T, S>) -> Vec<T>
where
    T: Ord + Clone,
    S: BuildHasher,
{
    let mut entries: Vec<T> = set.iter().cloned().collect();
    entries.sort_unstable();
    entries
}
