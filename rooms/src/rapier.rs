use rapier3d::prelude::*;

use crate::types::{BodyDesc, BodyShape};

/// Build the Rapier rigid body for a `BodyDesc`.
///
/// Zero mass maps to a fixed body, anything else to a dynamic one. Dynamic bodies
/// use CCD so fast projectiles do not tunnel through the thin ground slab.
pub fn rigid_body_from_desc(desc: &BodyDesc) -> RigidBody {
    let builder = if desc.is_dynamic() {
        RigidBodyBuilder::dynamic().ccd_enabled(true)
    } else {
        RigidBodyBuilder::fixed()
    };

    builder
        .translation(desc.position)
        .rotation(desc.rotation.scaled_axis())
        .build()
}

/// Build a Rapier collider from a `BodyDesc`.
///
/// The collider is attached with an identity local transform; the pose lives on the
/// parent rigid body. Friction combines multiplicatively, so a high-friction room
/// projectile still slides on a low-friction ground.
pub fn collider_from_desc(desc: &BodyDesc) -> Collider {
    let builder = match desc.shape {
        BodyShape::Box { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }
        BodyShape::Sphere { radius } => ColliderBuilder::ball(radius),
    };

    let builder = builder
        .friction(desc.friction)
        .friction_combine_rule(CoefficientCombineRule::Multiply)
        .restitution(desc.restitution);

    if desc.is_dynamic() {
        builder.mass(desc.mass).build()
    } else {
        builder.build()
    }
}
