//! Interpolation and range remapping helpers.
//!
//! Clamped variants keep the interpolation parameter within `[0, 1]`; the
//! `_unclamped` variants extrapolate.

use crate::DEFAULT_ROUGH_THRESHOLD;

/// Linearly interpolates between `a` and `b` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    lerp_unclamped(a, b, t.clamp(0.0, 1.0))
}

/// Linearly interpolates between `a` and `b` without clamping `t`.
#[must_use]
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    (b - a).mul_add(t, a)
}

/// Returns where `value` lies between `a` and `b`, clamped to `[0, 1]`.
///
/// Returns `0.0` when `a == b`.
///
/// # Examples
///
/// ```
/// use game_utils::remap::inverse_lerp;
/// assert!((inverse_lerp(10.0, 20.0, 15.0) - 0.5).abs() < f32::EPSILON);
/// assert!((inverse_lerp(10.0, 20.0, 40.0) - 1.0).abs() < f32::EPSILON);
/// assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
/// ```
#[expect(
    clippy::float_cmp,
    reason = "Only an exactly empty interval is degenerate."
)]
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b {
        return 0.0;
    }
    inverse_lerp_unclamped(a, b, value).clamp(0.0, 1.0)
}

/// Returns where `value` lies between `a` and `b` without clamping.
///
/// An empty interval yields a non-finite result.
#[must_use]
pub fn inverse_lerp_unclamped(a: f32, b: f32, value: f32) -> f32 {
    (value - a) / (b - a)
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`, clamping
/// to the output range.
///
/// # Examples
///
/// ```
/// use game_utils::remap::remap_range;
/// let mapped = remap_range(0.0, 10.0, 100.0, 200.0, 2.5);
/// assert!((mapped - 125.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn remap_range(in_min: f32, in_max: f32, out_min: f32, out_max: f32, value: f32) -> f32 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Maps `value` from `[in_min, in_max]` onto `[out_min, out_max]`,
/// extrapolating beyond either end.
#[must_use]
pub fn remap_range_unclamped(
    in_min: f32,
    in_max: f32,
    out_min: f32,
    out_max: f32,
    value: f32,
) -> f32 {
    lerp_unclamped(out_min, out_max, inverse_lerp_unclamped(in_min, in_max, value))
}

/// Whether `a` and `b` differ by at most `threshold`.
#[must_use]
pub fn roughly_equal(a: f32, b: f32, threshold: f32) -> bool {
    (a - b).abs() <= threshold
}

/// [`roughly_equal`] with [`DEFAULT_ROUGH_THRESHOLD`].
#[must_use]
pub fn roughly_equal_default(a: f32, b: f32) -> bool {
    roughly_equal(a, b, DEFAULT_ROUGH_THRESHOLD)
}

/// Whether `value` is even.
#[must_use]
pub const fn is_even(value: i32) -> bool {
    value % 2 == 0
}

/// Fractional part of `x`, always in `[0, 1)` for finite input.
#[must_use]
pub fn frac(x: f32) -> f32 {
    x - x.floor()
}

/// Smoothstep over `[0, 1]`: `x² (3 − 2x)`.
#[must_use]
pub fn smooth01(x: f32) -> f32 {
    x * x * 2.0_f32.mul_add(-x, 3.0)
}
