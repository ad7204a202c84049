//! Seam between the room logic and the rigid-body engine.
//!
//! The synchronizer and spawner only talk to the engine through [`PhysicsBackend`], so
//! they never see engine-internal object arrays. [`crate::RapierPhysics`] is the
//! production implementation.

use std::fmt::Debug;
use std::hash::Hash;

use crate::{
    error::PhysicsError,
    types::{BodyDesc, BodyRole, Iso, Point3, Vec3},
};

pub trait PhysicsBackend {
    /// Opaque, copyable body identity.
    type Handle: Copy + Eq + Hash + Debug;

    /// Every body currently registered, in creation order.
    fn bodies(&self) -> impl Iterator<Item = Self::Handle> + '_;

    /// Role recorded at creation, or `None` for an unknown handle.
    fn role(&self, body: Self::Handle) -> Option<BodyRole>;

    /// Whether the engine integrates this body (it has a nonzero mass).
    fn is_dynamic(&self, body: Self::Handle) -> bool;

    /// Current world transform, or `None` if the body has no valid motion state yet.
    fn transform(&self, body: Self::Handle) -> Option<Iso>;

    /// World position taken from [`Self::transform`].
    fn position(&self, body: Self::Handle) -> Option<Point3> {
        self.transform(body)
            .map(|iso| Point3::from(iso.translation.vector))
    }

    /// Gravity currently acting on the body: its override, or the world default.
    fn gravity(&self, body: Self::Handle) -> Option<Vec3>;

    /// Replace the gravity acting on one body.
    fn set_gravity(&mut self, body: Self::Handle, gravity: Vec3) -> Result<(), PhysicsError>;

    /// Create a rigid body with a single collider described by `desc`.
    fn create_body(&mut self, desc: &BodyDesc) -> Self::Handle;

    /// Apply an instantaneous impulse through the center of mass.
    fn apply_central_impulse(
        &mut self,
        body: Self::Handle,
        impulse: Vec3,
    ) -> Result<(), PhysicsError>;

    /// Advance the simulation by `dt` seconds using at most `max_substeps` fixed steps.
    ///
    /// Returns the number of fixed steps actually taken.
    fn step(&mut self, dt: f32, max_substeps: u32) -> u32;
}
