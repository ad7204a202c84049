//! The simulation context owned by the main loop.
//!
//! One tick is: gravity sync, then engine step. Fire requests are handled between
//! ticks. Nothing here is global; the host owns a `Simulation` and passes it around.

use crate::{
    backend::PhysicsBackend,
    config::SimulationConfig,
    error::RoomError,
    region::{Room, RoomRegistry},
    spawn::{FireRequest, spawn_projectile},
    sync::{SyncReport, sync_gravity},
    types::BodyRole,
};

/// What happened during one [`Simulation::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub sync: SyncReport,
    /// Fixed engine steps actually run.
    pub substeps: u32,
}

pub struct Simulation<P: PhysicsBackend> {
    config: SimulationConfig,
    rooms: RoomRegistry,
    physics: P,
    ground: Option<P::Handle>,
}

impl<P: PhysicsBackend> Simulation<P> {
    /// Validate the rooms and populate `physics` with the ground slab.
    pub fn new(
        config: SimulationConfig,
        rooms: Vec<Room>,
        mut physics: P,
    ) -> Result<Self, RoomError> {
        let rooms = RoomRegistry::new(rooms)?;
        let ground = config
            .ground
            .map(|ground| physics.create_body(&ground.body_desc()));

        log::info!(
            "simulation ready: {} rooms, ground {}",
            rooms.len(),
            if ground.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            config,
            rooms,
            physics,
            ground,
        })
    }

    /// Advance by one frame of `dt` seconds.
    ///
    /// `dt` is clamped to `max_frame_time`. Gravity is synced before the step so the
    /// step already integrates with each projectile's current room gravity.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let dt = dt.clamp(0.0, self.config.max_frame_time);
        let sync = sync_gravity(&self.rooms, &mut self.physics);
        let substeps = self.physics.step(dt, self.config.max_substeps);
        TickReport { sync, substeps }
    }

    /// Fire a projectile; see [`spawn_projectile`].
    pub fn fire(&mut self, request: &FireRequest) -> P::Handle {
        spawn_projectile(
            &mut self.physics,
            &self.rooms,
            &self.config.projectile,
            request,
        )
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut P {
        &mut self.physics
    }

    pub fn ground(&self) -> Option<P::Handle> {
        self.ground
    }

    /// Handles of every projectile fired so far, oldest first.
    pub fn projectiles(&self) -> impl Iterator<Item = P::Handle> + '_ {
        self.physics
            .bodies()
            .filter(|h| self.physics.role(*h) == Some(BodyRole::Projectile))
    }
}
