//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains. They rely on debug assertions to flag unexpected overflows while
//! keeping the call-sites ergonomic.

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers assert that the value fits within f32 bounds."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Round to the nearest integer, sending halves to the even neighbour, and
/// clamp into the `i32` domain. `NaN` maps to zero.
///
/// # Examples
///
/// ```
/// use game_utils::numeric::round_to_i32;
/// assert_eq!(round_to_i32(2.5), 2);
/// assert_eq!(round_to_i32(3.5), 4);
/// assert_eq!(round_to_i32(-1.6), -2);
/// assert_eq!(round_to_i32(f32::NAN), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn round_to_i32(value: f32) -> i32 {
    if value.is_nan() {
        return 0;
    }
    let rounded = f64::from(value).round_ties_even();
    rounded.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Truncate `value` to `digits` decimal places, rounding towards zero.
///
/// Negative `digits` truncate to tens, hundreds, and so on. When the scale
/// factor is not representable the value is returned unchanged.
///
/// # Examples
///
/// ```
/// use game_utils::numeric::truncate_digits;
/// assert!((truncate_digits(3.14159, 2) - 3.14).abs() < 1e-6);
/// assert!((truncate_digits(-2.789, 1) + 2.7).abs() < 1e-6);
/// assert!((truncate_digits(1234.0, -2) - 1200.0).abs() < 1e-3);
/// ```
#[must_use]
pub fn truncate_digits(value: f32, digits: i32) -> f32 {
    let scale = 10.0_f64.powi(digits);
    if scale == 0.0 || !scale.is_finite() || !value.is_finite() {
        return value;
    }
    let scaled = (scale * f64::from(value)).trunc() / scale;
    if !scaled.is_finite() {
        return value;
    }
    expect_f32(scaled)
}
