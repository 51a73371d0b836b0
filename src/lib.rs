#![cfg_attr(docsrs, feature(doc_cfg))]
//! Generic helpers for a realtime game.
//!
//! Weighted random choice, in-place slice rotation, random pickers with a
//! per-thread shuffle source, integer grid vectors, interpolation and remap
//! helpers, and a couple of Bevy scene conveniences. Every helper returns a
//! well-defined empty result (`None` or a no-op) rather than panicking on
//! empty input.
pub mod collections;
pub mod constants;
pub mod grid;
pub mod logging;
pub mod numeric;
pub mod random;
pub mod remap;
pub mod rotate;
pub mod scene;
pub mod vector_math;
pub mod weighted;
pub use constants::*;

// Re-export commonly used items
pub use grid::GridVec3;
pub use logging::init as init_logging;
pub use random::{random_element, random_item, shuffle, shuffle_with, with_thread_rng};
pub use random::{RangeF32, RangeI32};
pub use remap::{inverse_lerp, lerp, remap_range, remap_range_unclamped};
pub use rotate::{rotate_left, rotate_right};
pub use scene::{clear_children, ground_point, CursorWorldPosition, GroundPlane, MainCamera};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use scene::{cursor_world_position_system, CursorPlugin};
pub use vector_math::{angle_to_direction, direction_to_angle, rotate_around};
pub use weighted::{
    choose_by_weight, choose_by_weights, choose_weighted_map, choose_weighted_map_with,
    WeightInputError, Weighted,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use game_utils::prelude::*;
    //! ```

    pub use crate::random::{random_element, shuffle};
    pub use crate::rotate::{rotate_left, rotate_right};
    pub use crate::weighted::{choose_by_weight, choose_by_weights, choose_weighted_map, Weighted};
    pub use crate::GridVec3;
}
