pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod rapier;
pub mod rapier_world;
pub mod region;
pub mod simulation;
pub mod spawn;
pub mod sync;
pub mod types;
pub mod viewer;

#[cfg(test)]
mod testing;

// Re-export Rapier so the client can name engine handles without its own dependency.
pub use rapier3d;

pub use backend::PhysicsBackend;
pub use config::{GroundConfig, ProjectileConfig, SimulationConfig};
pub use error::{PhysicsError, RoomError};
pub use rapier_world::RapierPhysics;
pub use region::{Room, RoomId, RoomRegistry, default_rooms};
pub use simulation::{Simulation, TickReport};
pub use spawn::{FireRequest, fire_direction, screen_to_ndc, spawn_projectile, unproject_direction};
pub use sync::{SyncReport, sync_gravity};
pub use types::{BodyDesc, BodyRole, BodyShape, Iso, Mat4, Point3, Quat, Vec3};
pub use viewer::{MoveInput, Viewer};
