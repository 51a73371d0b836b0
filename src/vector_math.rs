//! 2D direction and rotation helpers over `glam` types.
//! Component-wise `abs`, `round`, `floor`, and `ceil` come straight from glam.
use glam::Vec2;

/// Unit direction for an angle in radians, measured counter-clockwise from +X.
#[must_use]
pub fn angle_to_direction(radians: f32) -> Vec2 {
    let (sin, cos) = radians.sin_cos();
    Vec2::new(cos, sin)
}

/// Angle in radians of `direction`, in `(-π, π]`.
#[must_use]
pub fn direction_to_angle(direction: Vec2) -> f32 {
    direction.y.atan2(direction.x)
}

/// The 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn determinant(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// Rotates a quarter turn clockwise.
#[must_use]
pub fn rotate_90_cw(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

/// Rotates a quarter turn counter-clockwise.
#[must_use]
pub fn rotate_90_ccw(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Rotates `v` counter-clockwise by `radians` about the origin.
///
/// # Examples
///
/// ```
/// use game_utils::vector_math::rotate;
/// use glam::Vec2;
/// let turned = rotate(Vec2::X, std::f32::consts::FRAC_PI_2);
/// assert!(turned.abs_diff_eq(Vec2::Y, 1e-6));
/// ```
#[must_use]
pub fn rotate(v: Vec2, radians: f32) -> Vec2 {
    Vec2::from_angle(radians).rotate(v)
}

/// Rotates `v` counter-clockwise by `radians` about `pivot`.
#[must_use]
pub fn rotate_around(v: Vec2, pivot: Vec2, radians: f32) -> Vec2 {
    rotate(v - pivot, radians) + pivot
}
