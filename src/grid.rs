//! Integer 3D vectors for grid and footprint arithmetic.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::numeric::round_to_i32;

/// Integer vector addressing a cell or a footprint size on the grid.
///
/// Ordering is lexicographic over `x`, `y`, then `z`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridVec3 {
    /// X component.
    pub x: i32,
    /// Y component.
    pub y: i32,
    /// Z component.
    pub z: i32,
}

impl GridVec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::splat(0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::splat(1);
    /// `(-1, -1, -1)`.
    pub const NEG_ONE: Self = Self::splat(-1);
    /// `(2, 2, 2)`.
    pub const TWO: Self = Self::splat(2);
    /// `(-2, -2, -2)`.
    pub const NEG_TWO: Self = Self::splat(-2);
    /// `(3, 3, 3)`.
    pub const THREE: Self = Self::splat(3);
    /// `(3, 1, 3)`: a three-by-three footprint one cell tall.
    pub const FLAT_THREE: Self = Self::new(3, 1, 3);

    /// Create a new [`GridVec3`].
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Vector with every component set to `value`.
    #[must_use]
    pub const fn splat(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Rounds each component of `v` to the nearest integer, halves to even.
    ///
    /// # Examples
    ///
    /// ```
    /// use game_utils::grid::GridVec3;
    /// use glam::Vec3;
    /// let cell = GridVec3::from_vec3(Vec3::new(0.5, 1.5, -2.6));
    /// assert_eq!(cell, GridVec3::new(0, 2, -3));
    /// ```
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(round_to_i32(v.x), round_to_i32(v.y), round_to_i32(v.z))
    }

    /// Converts to a floating-point vector.
    #[expect(
        clippy::cast_precision_loss,
        reason = "Grid coordinates stay well inside the exact f32 integer range."
    )]
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Negates every component, wrapping `i32::MIN` onto itself.
    #[must_use]
    pub const fn invert(self) -> Self {
        Self::new(self.x.wrapping_neg(), self.y.wrapping_neg(), self.z.wrapping_neg())
    }

    /// Divides every component by `divisor`, or `None` when it is zero or the
    /// division overflows.
    #[must_use]
    pub const fn checked_div(self, divisor: i32) -> Option<Self> {
        match (
            self.x.checked_div(divisor),
            self.y.checked_div(divisor),
            self.z.checked_div(divisor),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self::new(x, y, z)),
            _ => None,
        }
    }
}

impl fmt::Display for GridVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<IVec3> for GridVec3 {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<GridVec3> for IVec3 {
    fn from(v: GridVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<(i32, i32, i32)> for GridVec3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

// Arithmetic wraps on overflow in every build profile.
impl Add for GridVec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
            self.z.wrapping_add(other.z),
        )
    }
}

impl Sub for GridVec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}

impl Neg for GridVec3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}

/// Component-wise product.
impl Mul for GridVec3 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_mul(other.x),
            self.y.wrapping_mul(other.y),
            self.z.wrapping_mul(other.z),
        )
    }
}

impl Mul<i32> for GridVec3 {
    type Output = Self;

    fn mul(self, scale: i32) -> Self {
        Self::new(
            self.x.wrapping_mul(scale),
            self.y.wrapping_mul(scale),
            self.z.wrapping_mul(scale),
        )
    }
}

/// Truncating division. Panics on a zero divisor like integer division; use
/// [`GridVec3::checked_div`] when the divisor is untrusted.
impl Div<i32> for GridVec3 {
    type Output = Self;

    fn div(self, divisor: i32) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn display_matches_tuple_notation() {
        assert_eq!(GridVec3::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }

    #[rstest]
    fn arithmetic_is_component_wise() {
        let a = GridVec3::new(1, 2, 3);
        let b = GridVec3::new(4, 5, 6);
        assert_eq!(a + b, GridVec3::new(5, 7, 9));
        assert_eq!(b - a, GridVec3::splat(3));
        assert_eq!(a * b, GridVec3::new(4, 10, 18));
        assert_eq!(a * 2, GridVec3::new(2, 4, 6));
        assert_eq!(b / 2, GridVec3::new(2, 2, 3));
        assert_eq!(-a, a.invert());
        assert_eq!(a.invert(), GridVec3::new(-1, -2, -3));
    }

    #[rstest]
    fn division_truncates_towards_zero() {
        assert_eq!(GridVec3::new(-7, 7, -1) / 2, GridVec3::new(-3, 3, 0));
    }

    #[rstest]
    fn overflow_wraps_instead_of_panicking() {
        let min = GridVec3::new(i32::MIN, 0, 0);
        let max = GridVec3::new(i32::MAX, 0, 0);
        assert_eq!(min.invert(), min);
        assert_eq!(-min, min);
        assert_eq!(max + GridVec3::new(1, 0, 0), min);
        assert_eq!(min - GridVec3::new(1, 0, 0), max);
        assert_eq!(max * 2, GridVec3::new(-2, 0, 0));
        assert_eq!(max * GridVec3::new(2, 1, 1), GridVec3::new(-2, 0, 0));
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    fn checked_div_rejects_bad_divisors(#[case] divisor: i32) {
        let v = GridVec3::new(i32::MIN, 1, 1);
        assert_eq!(v.checked_div(divisor), None);
    }

    #[rstest]
    fn named_sizes() {
        assert_eq!(GridVec3::FLAT_THREE, GridVec3::new(3, 1, 3));
        assert_eq!(GridVec3::NEG_TWO, GridVec3::TWO.invert());
        assert_eq!(GridVec3::ONE + GridVec3::NEG_ONE, GridVec3::ZERO);
        assert_eq!(GridVec3::THREE, GridVec3::ONE * 3);
    }

    #[rstest]
    fn round_trips_through_glam() {
        let v = GridVec3::new(-4, 0, 9);
        assert_eq!(GridVec3::from(IVec3::from(v)), v);
        assert_eq!(GridVec3::from_vec3(v.to_vec3()), v);
    }

    #[rstest]
    fn equal_vectors_hash_together() {
        let set: HashSet<_> = [GridVec3::new(1, 2, 3), GridVec3::from((1, 2, 3))].into();
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn ordering_is_lexicographic() {
        let mut cells = vec![
            GridVec3::new(1, 0, 0),
            GridVec3::new(0, 5, 5),
            GridVec3::new(0, 5, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                GridVec3::new(0, 5, 1),
                GridVec3::new(0, 5, 5),
                GridVec3::new(1, 0, 0),
            ]
        );
    }
}
