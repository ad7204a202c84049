//! Error types for room configuration and physics backend calls.

use std::fmt;

/// Reasons a room definition is rejected by [`crate::RoomRegistry::new`].
#[derive(Clone, Debug, PartialEq)]
pub enum RoomError {
    /// An extent component is negative.
    InvalidExtent { index: usize, extent: [f32; 3] },
    /// A center, extent, gravity or friction component is NaN or infinite.
    NonFinite { index: usize, field: &'static str },
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomError::InvalidExtent { index, extent } => write!(
                f,
                "room {index} has a negative extent {:?}; extents must be >= 0",
                extent
            ),
            RoomError::NonFinite { index, field } => {
                write!(f, "room {index} has a non-finite {field}")
            }
        }
    }
}

impl std::error::Error for RoomError {}

/// Errors reported by a [`crate::PhysicsBackend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhysicsError {
    /// The handle does not refer to a body the engine still tracks.
    UnknownBody(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::UnknownBody(handle) => write!(f, "unknown body {handle}"),
        }
    }
}

impl std::error::Error for PhysicsError {}
