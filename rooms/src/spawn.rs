//! Firing projectiles from the viewer towards the cursor.
//!
//! # Unprojection
//! The cursor (pixels, origin top-left, +Y down) is mapped to normalized device
//! coordinates in `[-1, 1]^2` with +Y up. The clip-space vector `(x, y, 1, 1)` is taken
//! back through `inverse(projection * view)` and the `xyz` of the result, normalized,
//! is the fire direction. No perspective divide is applied: with a far plane thousands
//! of meters away the far-plane point seen from the world origin and from the viewer
//! differ by a negligible angle.
//!
//! A singular matrix or a zero-length result falls back to the viewer's forward vector,
//! so a malformed camera never produces a NaN impulse.

use nalgebra::Vector4;

use crate::{
    backend::PhysicsBackend,
    config::ProjectileConfig,
    constants::DIRECTION_EPS_SQ,
    region::RoomRegistry,
    types::{BodyDesc, Mat4, Point3, Vec3},
    viewer::Viewer,
};

/// Everything the spawner needs from the input and view layer for one shot.
#[derive(Clone, Copy, Debug)]
pub struct FireRequest {
    pub viewer_position: Vec3,
    /// Used when the cursor cannot be unprojected.
    pub viewer_forward: Vec3,
    /// Cursor position in pixels, origin at the top-left corner.
    pub cursor: [f32; 2],
    /// Viewport size in pixels.
    pub viewport: [f32; 2],
    pub view: Mat4,
    pub projection: Mat4,
}

impl FireRequest {
    /// Build a request for a shot aimed at `cursor` through `viewer`'s camera.
    pub fn from_viewer(viewer: &Viewer, cursor: [f32; 2], viewport: [f32; 2]) -> Self {
        let aspect = viewport[0] / viewport[1];
        Self {
            viewer_position: viewer.position,
            viewer_forward: viewer.front(),
            cursor,
            viewport,
            view: viewer.view_matrix(),
            projection: Viewer::projection_matrix(aspect),
        }
    }
}

/// Pixels to normalized device coordinates. An empty viewport maps to the center.
pub fn screen_to_ndc(cursor: [f32; 2], viewport: [f32; 2]) -> [f32; 2] {
    let [w, h] = viewport;
    if !(w > 0.0 && h > 0.0) {
        return [0.0, 0.0];
    }
    [(cursor[0] / w) * 2.0 - 1.0, -(cursor[1] / h) * 2.0 + 1.0]
}

/// Unit world-space direction through `ndc`, or `None` if it cannot be computed.
pub fn unproject_direction(ndc: [f32; 2], view: &Mat4, projection: &Mat4) -> Option<Vec3> {
    let unproject = (projection * view).try_inverse()?;
    let clip = Vector4::new(ndc[0], ndc[1], 1.0, 1.0);
    let dir = (unproject * clip).xyz();

    if !dir.iter().all(|c| c.is_finite()) || dir.norm_squared() <= DIRECTION_EPS_SQ {
        return None;
    }
    Some(dir.normalize())
}

/// Unit direction for a shot; see the module docs for the fallback order.
pub fn fire_direction(request: &FireRequest) -> Vec3 {
    let ndc = screen_to_ndc(request.cursor, request.viewport);
    if let Some(dir) = unproject_direction(ndc, &request.view, &request.projection) {
        return dir;
    }

    log::warn!("cursor unprojection degenerate; firing along viewer forward");
    let forward = request.viewer_forward;
    if forward.iter().all(|c| c.is_finite()) && forward.norm_squared() > DIRECTION_EPS_SQ {
        forward.normalize()
    } else {
        -Vec3::z()
    }
}

/// Create a projectile at the viewer and launch it towards the cursor.
///
/// The room containing the viewer decides the projectile's friction and initial
/// gravity. Fired from outside every room it gets the default friction and keeps the
/// engine's default gravity.
pub fn spawn_projectile<P: PhysicsBackend>(
    physics: &mut P,
    rooms: &RoomRegistry,
    config: &ProjectileConfig,
    request: &FireRequest,
) -> P::Handle {
    let firing_room = rooms.locate(&Point3::from(request.viewer_position));
    let friction = firing_room.map_or(config.default_friction, |(_, room)| room.friction);

    let body = physics.create_body(&BodyDesc::projectile(
        request.viewer_position,
        config.radius,
        config.mass,
        friction,
        config.restitution,
    ));

    if let Some((room_id, room)) = firing_room {
        if let Err(err) = physics.set_gravity(body, room.gravity) {
            log::warn!("new projectile {body:?} rejected room gravity: {err}");
        }
        log::info!("fired {body:?} from room {}", room_id.0);
    } else {
        log::info!("fired {body:?} from outside all rooms");
    }

    let impulse = fire_direction(request) * config.initial_speed;
    if let Err(err) = physics.apply_central_impulse(body, impulse) {
        log::warn!("failed to launch projectile {body:?}: {err}");
    }

    body
}
