//! In-memory `PhysicsBackend` for unit tests: no integration, every call recorded.

use crate::{
    backend::PhysicsBackend,
    error::PhysicsError,
    types::{BodyDesc, BodyRole, Iso, Vec3},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MockHandle(pub usize);

#[derive(Clone, Debug)]
pub struct MockBody {
    pub desc: BodyDesc,
    /// `None` models a body whose motion state is not available yet.
    pub transform: Option<Iso>,
    pub gravity: Option<Vec3>,
    pub gravity_writes: usize,
    pub impulse: Vec3,
}

#[derive(Debug)]
pub struct MockPhysics {
    pub world_gravity: Vec3,
    pub bodies: Vec<MockBody>,
    /// `(dt, max_substeps)` of every `step` call.
    pub steps: Vec<(f32, u32)>,
}

impl Default for MockPhysics {
    fn default() -> Self {
        Self {
            world_gravity: Vec3::new(0.0, -9.82, 0.0),
            bodies: Vec::new(),
            steps: Vec::new(),
        }
    }
}

impl MockPhysics {
    pub fn body(&self, h: MockHandle) -> &MockBody {
        &self.bodies[h.0]
    }

    pub fn teleport(&mut self, h: MockHandle, to: Vec3) {
        self.bodies[h.0].transform = Some(Iso::translation(to.x, to.y, to.z));
    }

    pub fn drop_transform(&mut self, h: MockHandle) {
        self.bodies[h.0].transform = None;
    }
}

impl PhysicsBackend for MockPhysics {
    type Handle = MockHandle;

    fn bodies(&self) -> impl Iterator<Item = MockHandle> + '_ {
        (0..self.bodies.len()).map(MockHandle)
    }

    fn role(&self, body: MockHandle) -> Option<BodyRole> {
        self.bodies.get(body.0).map(|b| b.desc.role)
    }

    fn is_dynamic(&self, body: MockHandle) -> bool {
        self.bodies.get(body.0).is_some_and(|b| b.desc.is_dynamic())
    }

    fn transform(&self, body: MockHandle) -> Option<Iso> {
        self.bodies.get(body.0).and_then(|b| b.transform)
    }

    fn gravity(&self, body: MockHandle) -> Option<Vec3> {
        self.bodies
            .get(body.0)
            .map(|b| b.gravity.unwrap_or(self.world_gravity))
    }

    fn set_gravity(&mut self, body: MockHandle, gravity: Vec3) -> Result<(), PhysicsError> {
        let b = self
            .bodies
            .get_mut(body.0)
            .ok_or_else(|| PhysicsError::UnknownBody(format!("{body:?}")))?;
        b.gravity = Some(gravity);
        b.gravity_writes += 1;
        Ok(())
    }

    fn create_body(&mut self, desc: &BodyDesc) -> MockHandle {
        self.bodies.push(MockBody {
            desc: *desc,
            transform: Some(Iso::from_parts(desc.position.into(), desc.rotation)),
            gravity: None,
            gravity_writes: 0,
            impulse: Vec3::zeros(),
        });
        MockHandle(self.bodies.len() - 1)
    }

    fn apply_central_impulse(
        &mut self,
        body: MockHandle,
        impulse: Vec3,
    ) -> Result<(), PhysicsError> {
        let b = self
            .bodies
            .get_mut(body.0)
            .ok_or_else(|| PhysicsError::UnknownBody(format!("{body:?}")))?;
        b.impulse += impulse;
        Ok(())
    }

    fn step(&mut self, dt: f32, max_substeps: u32) -> u32 {
        self.steps.push((dt, max_substeps));
        1
    }
}
