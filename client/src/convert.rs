//! Conversions from the simulation's math types to Bevy's.

use bevy::prelude::*;

#[inline]
pub fn vec3_to_bevy(v: &rooms::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[inline]
pub fn iso_to_transform(iso: &rooms::Iso) -> Transform {
    let q = iso.rotation;
    Transform {
        translation: vec3_to_bevy(&iso.translation.vector),
        rotation: Quat::from_xyzw(q.i, q.j, q.k, q.w),
        ..default()
    }
}

/// Transform of a camera sitting at the viewer and looking along its front vector.
#[inline]
pub fn viewer_to_transform(viewer: &rooms::Viewer) -> Transform {
    Transform::from_translation(vec3_to_bevy(&viewer.position))
        .looking_to(vec3_to_bevy(&viewer.front()), Vec3::Y)
}
