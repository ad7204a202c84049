//! Tunables for a [`crate::Simulation`], defaulting to the constants of the demo level.

use crate::{
    constants::{
        DEFAULT_FRICTION, DEFAULT_RESTITUTION, GROUND_FRICTION, GROUND_POSITION, GROUND_SIZE,
        MAX_SEC_PER_FRAME, MAX_SUBSTEPS, PROJECTILE_MASS, PROJECTILE_RADIUS, SHOOT_INITIAL_SPEED,
    },
    types::{BodyDesc, Vec3, vec3},
};

/// How fired projectiles are built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileConfig {
    pub radius: f32,
    pub mass: f32,
    /// Friction when fired from outside every room.
    pub default_friction: f32,
    pub restitution: f32,
    /// Magnitude of the fire impulse.
    pub initial_speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            radius: PROJECTILE_RADIUS,
            mass: PROJECTILE_MASS,
            default_friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            initial_speed: SHOOT_INITIAL_SPEED,
        }
    }
}

/// The static slab everything lands on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundConfig {
    pub center: Vec3,
    /// Full size along each axis.
    pub size: Vec3,
    pub friction: f32,
    pub restitution: f32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            center: vec3(GROUND_POSITION),
            size: vec3(GROUND_SIZE),
            friction: GROUND_FRICTION,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

impl GroundConfig {
    pub fn body_desc(&self) -> BodyDesc {
        BodyDesc::static_box(self.center, self.size, self.friction, self.restitution)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub projectile: ProjectileConfig,
    /// `None` skips creating a ground body.
    pub ground: Option<GroundConfig>,
    /// Frame time handed to the engine is clamped to this (seconds).
    pub max_frame_time: f32,
    pub max_substeps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            projectile: ProjectileConfig::default(),
            ground: Some(GroundConfig::default()),
            max_frame_time: MAX_SEC_PER_FRAME,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}
