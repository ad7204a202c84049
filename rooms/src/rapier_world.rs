//! Rapier-backed implementation of [`PhysicsBackend`].
//!
//! This owns the full Rapier simulation state (sets, pipeline, solvers) plus a small
//! side table recording, per body, the role and mass it was created with and the
//! gravity override last assigned to it.
//!
//! Per-body gravity
//! - Rapier only has a world gravity and a per-body `gravity_scale`.
//! - An override is applied as `gravity_scale = 0` plus a persistent user force
//!   `mass * gravity`. User forces survive across steps until reset, so the override
//!   stays in effect until the next `set_gravity`.
//!
//! Stepping
//! - Time is accumulated and consumed in fixed `integration_parameters.dt` steps, at most
//!   `max_substeps` per call. Leftover time below one step carries to the next call;
//!   anything beyond the substep budget is dropped.
//! - `max_substeps == 0` runs one variable step of exactly `dt`.

use std::collections::HashMap;

use rapier3d::prelude::*;

use crate::{
    backend::PhysicsBackend,
    constants::{DEFAULT_GRAVITY, FIXED_TIMESTEP},
    error::PhysicsError,
    rapier::{collider_from_desc, rigid_body_from_desc},
    types::{BodyDesc, BodyRole, Iso, Vec3, vec3},
};

/// What we remember about a body beyond Rapier's own state.
#[derive(Clone, Copy, Debug)]
struct BodyEntry {
    role: BodyRole,
    mass: f32,
    gravity: Option<Vec3>,
}

pub struct RapierPhysics {
    gravity: Vec3,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    /// Creation order of every body handle.
    order: Vec<RigidBodyHandle>,
    entries: HashMap<RigidBodyHandle, BodyEntry>,
    accumulator: f32,
}

impl Default for RapierPhysics {
    fn default() -> Self {
        Self::new(vec3(DEFAULT_GRAVITY))
    }
}

impl RapierPhysics {
    /// Empty world with the given default gravity and the standard fixed step.
    pub fn new(gravity: Vec3) -> Self {
        Self::with_timestep(gravity, FIXED_TIMESTEP)
    }

    pub fn with_timestep(gravity: Vec3, fixed_dt: f32) -> Self {
        Self {
            gravity,
            integration_parameters: IntegrationParameters {
                dt: fixed_dt,
                ..IntegrationParameters::default()
            },
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            order: Vec::new(),
            entries: HashMap::new(),
            accumulator: 0.0,
        }
    }

    /// World gravity used by bodies without an override.
    pub fn world_gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current linear velocity of a body.
    pub fn linvel(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body).map(|rb| *rb.linvel())
    }

    /// Friction of the body's collider.
    pub fn friction(&self, body: RigidBodyHandle) -> Option<f32> {
        let rb = self.bodies.get(body)?;
        let co = rb.colliders().first()?;
        self.colliders.get(*co).map(|c| c.friction())
    }

    /// Teleport a body, waking it up.
    pub fn set_translation(
        &mut self,
        body: RigidBodyHandle,
        translation: Vec3,
    ) -> Result<(), PhysicsError> {
        let rb = self
            .bodies
            .get_mut(body)
            .ok_or_else(|| PhysicsError::UnknownBody(format!("{body:?}")))?;
        rb.set_translation(translation, true);
        Ok(())
    }

    fn step_once(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }
}

impl PhysicsBackend for RapierPhysics {
    type Handle = RigidBodyHandle;

    fn bodies(&self) -> impl Iterator<Item = RigidBodyHandle> + '_ {
        self.order.iter().copied()
    }

    fn role(&self, body: RigidBodyHandle) -> Option<BodyRole> {
        self.entries.get(&body).map(|e| e.role)
    }

    fn is_dynamic(&self, body: RigidBodyHandle) -> bool {
        self.bodies.get(body).is_some_and(|rb| rb.is_dynamic())
    }

    fn transform(&self, body: RigidBodyHandle) -> Option<Iso> {
        let pose = *self.bodies.get(body)?.position();
        let t = pose.translation.vector;
        if t.iter().all(|c| c.is_finite()) {
            Some(pose)
        } else {
            None
        }
    }

    fn gravity(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body)?;
        let entry = self.entries.get(&body)?;
        Some(entry.gravity.unwrap_or(self.gravity))
    }

    fn set_gravity(&mut self, body: RigidBodyHandle, gravity: Vec3) -> Result<(), PhysicsError> {
        let (Some(rb), Some(entry)) = (self.bodies.get_mut(body), self.entries.get_mut(&body))
        else {
            return Err(PhysicsError::UnknownBody(format!("{body:?}")));
        };
        if entry.gravity == Some(gravity) {
            // Unchanged; leave the body asleep if it came to rest.
            return Ok(());
        }

        rb.set_gravity_scale(0.0, true);
        rb.reset_forces(true);
        rb.add_force(gravity * entry.mass, true);
        entry.gravity = Some(gravity);
        Ok(())
    }

    fn create_body(&mut self, desc: &BodyDesc) -> RigidBodyHandle {
        let handle = self.bodies.insert(rigid_body_from_desc(desc));
        self.colliders
            .insert_with_parent(collider_from_desc(desc), handle, &mut self.bodies);

        self.order.push(handle);
        self.entries.insert(
            handle,
            BodyEntry {
                role: desc.role,
                mass: desc.mass,
                gravity: None,
            },
        );
        handle
    }

    fn apply_central_impulse(
        &mut self,
        body: RigidBodyHandle,
        impulse: Vec3,
    ) -> Result<(), PhysicsError> {
        let (Some(rb), Some(entry)) = (self.bodies.get_mut(body), self.entries.get(&body)) else {
            return Err(PhysicsError::UnknownBody(format!("{body:?}")));
        };
        if !rb.is_dynamic() || entry.mass <= 0.0 {
            return Ok(());
        }

        // dv = J / m with the creation mass. Rapier only refreshes a new body's mass
        // properties during the next step, so `apply_impulse` could see zero mass here.
        let linvel = *rb.linvel() + impulse / entry.mass;
        rb.set_linvel(linvel, true);
        Ok(())
    }

    fn step(&mut self, dt: f32, max_substeps: u32) -> u32 {
        if dt.is_nan() || dt <= 0.0 {
            return 0;
        }

        if max_substeps == 0 {
            let fixed = self.integration_parameters.dt;
            self.integration_parameters.dt = dt;
            self.step_once();
            self.integration_parameters.dt = fixed;
            return 1;
        }

        let fixed = self.integration_parameters.dt;
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= fixed && steps < max_substeps {
            self.step_once();
            self.accumulator -= fixed;
            steps += 1;
        }

        if self.accumulator >= fixed {
            // Out of substep budget; drop whole steps we could not afford.
            self.accumulator = self.accumulator.rem_euclid(fixed);
        }

        steps
    }
}
