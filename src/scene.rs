//! Scene conveniences: clearing a node's children and grounding the cursor.
//!
//! `CursorPlugin` keeps [`CursorWorldPosition`] up to date by casting a ray
//! from the main camera through the primary window's cursor and intersecting
//! it with the configured [`GroundPlane`]. The plugin and its system need the
//! `render` feature; the intersection itself is a plain function so it can be
//! exercised headless.

use bevy::math::primitives::InfinitePlane3d;
use bevy::math::Ray3d;
use bevy::prelude::*;

use crate::GROUND_PLANE_HEIGHT;

/// Despawns every descendant of `parent`, leaving `parent` itself alive.
///
/// Queued on `commands`; the children disappear when the commands apply.
pub fn clear_children(commands: &mut Commands, parent: Entity) {
    commands.entity(parent).despawn_related::<Children>();
}

/// Infinite plane the cursor is projected onto.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// Any point on the plane.
    pub origin: Vec3,
    /// Plane orientation.
    pub plane: InfinitePlane3d,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            origin: Vec3::Y * GROUND_PLANE_HEIGHT,
            plane: InfinitePlane3d { normal: Dir3::Y },
        }
    }
}

/// Last grounded cursor position, or `None` when the cursor is outside the
/// window or its ray misses the ground.
#[derive(Resource, Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(Resource, Default)]
pub struct CursorWorldPosition(pub Option<Vec3>);

/// Marker for the camera the cursor is projected through.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct MainCamera;

/// Intersects `ray` with `ground`.
///
/// Returns `None` when the ray runs parallel to the plane or points away
/// from it.
///
/// # Examples
///
/// ```
/// use bevy::math::{Dir3, Ray3d, Vec3};
/// use game_utils::scene::{ground_point, GroundPlane};
///
/// let ray = Ray3d::new(Vec3::new(2.0, 10.0, -1.0), Dir3::NEG_Y);
/// let hit = ground_point(ray, &GroundPlane::default());
/// assert_eq!(hit, Some(Vec3::new(2.0, 0.0, -1.0)));
///
/// let skyward = Ray3d::new(Vec3::new(0.0, 10.0, 0.0), Dir3::Y);
/// assert_eq!(ground_point(skyward, &GroundPlane::default()), None);
/// ```
#[must_use]
pub fn ground_point(ray: Ray3d, ground: &GroundPlane) -> Option<Vec3> {
    ray.intersect_plane(ground.origin, ground.plane)
        .map(|distance| ray.get_point(distance))
}

#[cfg(feature = "render")]
pub use cursor::{cursor_world_position_system, CursorPlugin};

#[cfg(feature = "render")]
mod cursor {
    use bevy::prelude::*;
    use bevy::window::PrimaryWindow;
    use log::trace;

    use super::{ground_point, CursorWorldPosition, GroundPlane, MainCamera};

    /// Projects the primary window's cursor onto the ground plane.
    ///
    /// Leaves `None` in [`CursorWorldPosition`] when there is no window, no
    /// main camera, no cursor, or no intersection.
    #[expect(
        clippy::needless_pass_by_value,
        reason = "Bevy systems require parameters by value, not by reference."
    )]
    pub fn cursor_world_position_system(
        windows: Query<&Window, With<PrimaryWindow>>,
        cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
        ground: Res<GroundPlane>,
        mut cursor: ResMut<CursorWorldPosition>,
    ) {
        let grounded = windows.single().ok().and_then(|window| {
            let (camera, transform) = cameras.single().ok()?;
            let screen = window.cursor_position()?;
            let ray = camera.viewport_to_world(transform, screen).ok()?;
            ground_point(ray, &ground)
        });
        if grounded.is_none() {
            trace!("cursor not over ground");
        }
        cursor.0 = grounded;
    }

    /// Plugin tracking the cursor's grounded world position.
    ///
    /// Inserts default [`GroundPlane`] and [`CursorWorldPosition`] resources
    /// unless the host already provided them.
    #[derive(Debug, Default)]
    pub struct CursorPlugin;

    impl Plugin for CursorPlugin {
        fn build(&self, app: &mut App) {
            app.register_type::<CursorWorldPosition>();
            app.register_type::<MainCamera>();
            app.init_resource::<GroundPlane>();
            app.init_resource::<CursorWorldPosition>();
            app.add_systems(PreUpdate, cursor_world_position_system);
        }
    }
}
