use std::f32::consts::FRAC_PI_2;

/// Gravity applied by the engine to bodies that never received a room override (m/s^2).
pub const DEFAULT_GRAVITY: [f32; 3] = [0.0, -9.82, 0.0];

/// Friction given to projectiles fired from outside every room.
pub const DEFAULT_FRICTION: f32 = 0.3;

/// Restitution shared by the ground and every projectile.
pub const DEFAULT_RESTITUTION: f32 = 0.3;

/// Mass of a fired projectile (kg).
///
/// Also the mass used to convert a room's gravity into the force applied to a body.
pub const PROJECTILE_MASS: f32 = 1.0;

/// Radius of a fired projectile (meters).
pub const PROJECTILE_RADIUS: f32 = 0.2;

/// Speed the fire impulse gives a projectile of [`PROJECTILE_MASS`] (m/s).
pub const SHOOT_INITIAL_SPEED: f32 = 15.0;

/// Longest frame time fed to the physics step (seconds).
///
/// Long stalls (window drag, breakpoints) are clamped to this so a single frame
/// cannot launch projectiles through the ground.
pub const MAX_SEC_PER_FRAME: f32 = 1.0 / 60.0;

/// Fixed physics step used by the Rapier backend (seconds).
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Upper bound of fixed substeps run per `step` call.
pub const MAX_SUBSTEPS: u32 = 10;

/// World-space center of the ground slab.
pub const GROUND_POSITION: [f32; 3] = [0.0, -1.0, 0.0];

/// Full size of the ground slab along each axis (meters).
pub const GROUND_SIZE: [f32; 3] = [200.0, 0.1, 200.0];

/// Friction of the ground slab.
pub const GROUND_FRICTION: f32 = 0.3;

/// Where the viewer starts.
pub const VIEWER_START: [f32; 3] = [0.0, 0.0, 9.0];

/// Initial viewer yaw (radians). -90° looks down -Z.
pub const VIEWER_START_YAW: f32 = -FRAC_PI_2;

/// Initial viewer pitch (radians).
pub const VIEWER_START_PITCH: f32 = 0.0;

/// Planar viewer speed (m/s).
pub const VIEWER_SPEED: f32 = 3.0;

/// Radians of rotation per pixel of mouse motion.
pub const MOUSE_SENSITIVITY: f32 = 0.0025;

/// Pitch clamp so the view never flips over the pole (radians, ~89°).
pub const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Initial window size in pixels.
pub const SCREEN_WIDTH: f32 = 1200.0;
pub const SCREEN_HEIGHT: f32 = 900.0;

/// Vertical field of view (radians, 45°).
pub const FOV_Y: f32 = std::f32::consts::FRAC_PI_4;

/// Clip planes (meters).
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 10000.0;

/// Squared length below which an unprojected direction is treated as degenerate.
pub const DIRECTION_EPS_SQ: f32 = 1.0e-12;
