//! In-place slice rotation.
//!
//! Rotates by repeated single-step passes so no secondary buffer is needed.
//! Each pass shifts the whole slice by one position and wraps the displaced
//! element to the opposite end; the direction needing fewer passes wins.

use log::trace;

/// Rotates `items` towards index zero by `count` positions.
///
/// Negative counts rotate to the right. The count is reduced modulo the slice
/// length, and slices with fewer than two elements are left untouched.
///
/// # Examples
///
/// ```
/// use game_utils::rotate::rotate_left;
/// let mut values = [1, 2, 3, 4, 5];
/// rotate_left(&mut values, 2);
/// assert_eq!(values, [3, 4, 5, 1, 2]);
///
/// rotate_left(&mut values, -2);
/// assert_eq!(values, [1, 2, 3, 4, 5]);
/// ```
pub fn rotate_left<T>(items: &mut [T], count: isize) {
    if let Some(distance) = left_distance(items.len(), count) {
        rotate_by(items, distance);
    }
}

/// Rotates `items` away from index zero by `count` positions.
///
/// Equivalent to [`rotate_left`] with the count negated.
pub fn rotate_right<T>(items: &mut [T], count: isize) {
    if let Some(distance) = left_distance(items.len(), count) {
        rotate_by(items, items.len() - distance);
    }
}

/// Performs a left rotation of `distance` in `1..len`, taking whichever
/// direction needs fewer single-step passes. Ties go left.
fn rotate_by<T>(items: &mut [T], distance: usize) {
    let right = items.len() - distance;
    if distance <= right {
        trace!("rotating {} items left in {distance} passes", items.len());
        for _ in 0..distance {
            items.rotate_left(1);
        }
    } else {
        trace!("rotating {} items right in {right} passes", items.len());
        for _ in 0..right {
            items.rotate_right(1);
        }
    }
}

/// Normalises `count` into a left rotation distance in `1..len`.
///
/// Returns `None` when the rotation would be a no-op.
fn left_distance(len: usize, count: isize) -> Option<usize> {
    if len < 2 {
        return None;
    }
    let modulus = isize::try_from(len).ok()?;
    let distance = usize::try_from(count.rem_euclid(modulus)).ok()?;
    (distance != 0).then_some(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(2, [3, 4, 5, 1, 2])]
    #[case(-2, [4, 5, 1, 2, 3])]
    #[case(4, [5, 1, 2, 3, 4])]
    #[case(-4, [2, 3, 4, 5, 1])]
    #[case(7, [3, 4, 5, 1, 2])]
    #[case(-7, [4, 5, 1, 2, 3])]
    fn rotates_five_elements(#[case] count: isize, #[case] expected: [i32; 5]) {
        let mut values = [1, 2, 3, 4, 5];
        rotate_left(&mut values, count);
        assert_eq!(values, expected);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(-5)]
    #[case(10)]
    fn full_turns_are_identity(#[case] count: isize) {
        let mut values = [1, 2, 3, 4, 5];
        rotate_left(&mut values, count);
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn short_slices_are_untouched() {
        let mut empty: [u8; 0] = [];
        rotate_left(&mut empty, 3);
        assert!(empty.is_empty());

        let mut single = ["only"];
        rotate_left(&mut single, -9);
        assert_eq!(single, ["only"]);
    }

    #[rstest]
    fn rotate_right_mirrors_left() {
        let mut values = vec!['a', 'b', 'c', 'd'];
        rotate_right(&mut values, 1);
        assert_eq!(values, ['d', 'a', 'b', 'c']);
    }

    #[rstest]
    fn extreme_counts_do_not_overflow() {
        // isize::MIN is congruent to 1 modulo 3.
        let mut values = [1, 2, 3];
        rotate_left(&mut values, isize::MIN);
        assert_eq!(values, [2, 3, 1]);

        let mut values = [1, 2, 3];
        rotate_right(&mut values, isize::MIN);
        assert_eq!(values, [3, 1, 2]);
    }

    #[rstest]
    #[case(1, 1)]
    #[case(3, 3)]
    #[case(-1, 4)]
    #[case(-6, 4)]
    fn left_distance_uses_euclidean_remainder(#[case] count: isize, #[case] expected: usize) {
        assert_eq!(left_distance(5, count), Some(expected));
    }
}
