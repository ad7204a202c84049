/*!
Math aliases and the body descriptors exchanged with a physics backend.

This module contains no algorithms. It defines:
- the nalgebra aliases used across the crate,
- `BodyShape`: the collider shapes a backend must be able to create,
- `BodyRole`: the role tag recorded for every body at creation time,
- `BodyDesc`: everything `PhysicsBackend::create_body` needs.

Roles are carried next to the engine handle instead of being inferred from the
body's mass, so the gravity synchronizer never has to compare floats to decide
whether a body is a projectile.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;
pub type Mat4 = na::Matrix4<f32>;

#[inline]
pub fn vec3(v: [f32; 3]) -> Vec3 {
    Vec3::new(v[0], v[1], v[2])
}

/// Collider shapes understood by the backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    /// Axis-aligned (in body space) box with the given half-extents (meters).
    Box { half_extents: Vec3 },
    /// Sphere/ball (meters).
    Sphere { radius: f32 },
}

/// What a body is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyRole {
    /// Immovable geometry (ground, walls). Never touched by room gravity.
    Static,
    /// A fired projectile. Gravity follows the room it is in.
    Projectile,
}

impl BodyRole {
    #[inline]
    pub fn receives_room_gravity(self) -> bool {
        matches!(self, BodyRole::Projectile)
    }
}

/// Creation parameters for a rigid body plus its single collider.
#[derive(Clone, Copy, Debug)]
pub struct BodyDesc {
    pub shape: BodyShape,
    /// World-space translation.
    pub position: Vec3,
    /// World-space rotation.
    pub rotation: Quat,
    /// Zero creates a fixed body; anything else a dynamic one.
    pub mass: f32,
    pub friction: f32,
    pub restitution: f32,
    pub role: BodyRole,
}

impl BodyDesc {
    /// Fixed box centered at `center` with the given full `size`.
    pub fn static_box(center: Vec3, size: Vec3, friction: f32, restitution: f32) -> Self {
        Self {
            shape: BodyShape::Box {
                half_extents: size * 0.5,
            },
            position: center,
            rotation: Quat::identity(),
            mass: 0.0,
            friction,
            restitution,
            role: BodyRole::Static,
        }
    }

    /// Dynamic projectile sphere.
    pub fn projectile(
        position: Vec3,
        radius: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
    ) -> Self {
        Self {
            shape: BodyShape::Sphere { radius },
            position,
            rotation: Quat::identity(),
            mass,
            friction,
            restitution,
            role: BodyRole::Projectile,
        }
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.mass > 0.0
    }
}
