//! Shared numeric constants used across the helpers.

/// Full turn in radians.
pub const TAU: f32 = std::f32::consts::TAU;
/// Tolerance used by [`crate::remap::roughly_equal_default`].
pub const DEFAULT_ROUGH_THRESHOLD: f32 = 0.01;
/// Multiplier applied to the tick count when seeding per-thread generators.
pub const SEED_TICK_MULTIPLIER: u64 = 31;
/// Height of the default ground plane the cursor is projected onto.
pub const GROUND_PLANE_HEIGHT: f32 = 0.0;
