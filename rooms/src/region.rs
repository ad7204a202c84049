//! Rooms: axis-aligned boxes that each impose their own gravity and friction.
//!
//! # Model
//! - A [`Room`] spans `[center - extent/2, center + extent/2]` on every axis, closed on
//!   both ends, so a point lying exactly on a face is inside.
//! - The [`RoomRegistry`] is built once from a fixed list and never changes afterwards.
//! - Rooms may overlap. [`RoomRegistry::locate`] scans in registration order and the
//!   first room containing the point wins, so earlier rooms are authoritative.

use crate::{
    error::RoomError,
    types::{Point3, Vec3},
};

/// Index of a room in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub usize);

/// A box-shaped region with its own physical profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Room {
    /// World-space center.
    pub center: Vec3,
    /// Full size along each axis.
    pub extent: Vec3,
    /// Acceleration applied to projectiles inside the room (m/s^2).
    pub gravity: Vec3,
    /// Friction given to projectiles fired from inside the room.
    pub friction: f32,
}

impl Room {
    pub fn new(center: Vec3, extent: Vec3, gravity: Vec3, friction: f32) -> Self {
        Self {
            center,
            extent,
            gravity,
            friction,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.extent * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.extent * 0.5
    }

    /// Closed-interval containment test on all three axes.
    #[inline]
    pub fn contains(&self, point: &Point3) -> bool {
        let min = self.min();
        let max = self.max();
        (0..3).all(|i| point[i] >= min[i] && point[i] <= max[i])
    }

    fn validate(&self, index: usize) -> Result<(), RoomError> {
        let finite = |v: &Vec3| v.iter().all(|c| c.is_finite());
        if !finite(&self.center) {
            return Err(RoomError::NonFinite {
                index,
                field: "center",
            });
        }
        if !finite(&self.extent) {
            return Err(RoomError::NonFinite {
                index,
                field: "extent",
            });
        }
        if !finite(&self.gravity) {
            return Err(RoomError::NonFinite {
                index,
                field: "gravity",
            });
        }
        if !self.friction.is_finite() {
            return Err(RoomError::NonFinite {
                index,
                field: "friction",
            });
        }
        if self.extent.iter().any(|c| *c < 0.0) {
            return Err(RoomError::InvalidExtent {
                index,
                extent: [self.extent.x, self.extent.y, self.extent.z],
            });
        }
        Ok(())
    }
}

/// Ordered, immutable set of rooms.
#[derive(Clone, Debug, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Build a registry, keeping the given order for overlap tie-breaks.
    pub fn new(rooms: Vec<Room>) -> Result<Self, RoomError> {
        for (index, room) in rooms.iter().enumerate() {
            room.validate(index)?;
        }
        Ok(Self { rooms })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    #[inline]
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().enumerate().map(|(i, r)| (RoomId(i), r))
    }

    /// Find the room containing `point`. First registered room wins on overlap.
    pub fn locate(&self, point: &Point3) -> Option<(RoomId, &Room)> {
        self.iter().find(|(_, room)| room.contains(point))
    }
}

/// The four rooms of the demo level, one on each side of the origin.
pub fn default_rooms() -> Vec<Room> {
    let cube = Vec3::new(5.0, 5.0, 5.0);
    vec![
        Room::new(
            Vec3::new(-10.0, 0.0, 0.0),
            cube,
            Vec3::new(0.0, -30.8, 0.0),
            0.5,
        ),
        Room::new(Vec3::new(10.0, 0.0, 0.0), cube, Vec3::new(0.0, -5.0, 0.0), 3.5),
        Room::new(Vec3::new(0.0, 0.0, 10.0), cube, Vec3::new(0.0, -15.0, 0.0), 1.5),
        Room::new(
            Vec3::new(0.0, 0.0, -10.0),
            cube,
            Vec3::new(0.0, -100.0, 0.0),
            5.5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> RoomRegistry {
        RoomRegistry::new(default_rooms()).unwrap()
    }

    #[test]
    fn point_inside_single_room_resolves_to_that_room() {
        let reg = registry();
        let (id, room) = reg.locate(&Point3::new(10.5, 1.0, -0.5)).unwrap();
        assert_eq!(id, RoomId(1));
        assert_eq!(room.friction, 3.5);

        let (id, _) = reg.locate(&Point3::new(0.0, 0.0, -10.0)).unwrap();
        assert_eq!(id, RoomId(3));
    }

    #[test]
    fn point_outside_every_room_is_none() {
        let reg = registry();
        assert!(reg.locate(&Point3::new(0.0, 0.0, 0.0)).is_none());
        assert!(reg.locate(&Point3::new(-10.0, 2.6, 0.0)).is_none());
        assert!(reg.locate(&Point3::new(100.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn faces_are_inside() {
        let reg = registry();
        // Room 0 spans x in [-12.5, -7.5].
        assert_eq!(
            reg.locate(&Point3::new(-12.5, 0.0, 0.0)).map(|(id, _)| id),
            Some(RoomId(0))
        );
        assert_eq!(
            reg.locate(&Point3::new(-7.5, 2.5, -2.5)).map(|(id, _)| id),
            Some(RoomId(0))
        );
        assert!(reg.locate(&Point3::new(-12.5 - 1.0e-3, 0.0, 0.0)).is_none());
    }

    #[test]
    fn overlap_resolves_to_first_registered_room() {
        let a = Room::new(
            Vec3::zeros(),
            Vec3::new(4.0, 4.0, 4.0),
            Vec3::new(0.0, -1.0, 0.0),
            0.1,
        );
        let b = Room::new(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(4.0, 4.0, 4.0),
            Vec3::new(0.0, -2.0, 0.0),
            0.2,
        );
        let reg = RoomRegistry::new(vec![a, b]).unwrap();
        let p = Point3::new(1.5, 0.0, 0.0);
        for _ in 0..3 {
            assert_eq!(reg.locate(&p).map(|(id, _)| id), Some(RoomId(0)));
        }
        // Only `b` covers x = 2.5.
        assert_eq!(
            reg.locate(&Point3::new(2.5, 0.0, 0.0)).map(|(id, _)| id),
            Some(RoomId(1))
        );

        let reversed = RoomRegistry::new(vec![b, a]).unwrap();
        assert_eq!(reversed.locate(&p).map(|(id, _)| id), Some(RoomId(0)));
        assert_eq!(reversed.locate(&p).unwrap().1.gravity.y, -2.0);
    }

    #[test]
    fn zero_extent_room_contains_only_its_center() {
        let r = Room::new(Vec3::new(1.0, 2.0, 3.0), Vec3::zeros(), Vec3::zeros(), 1.0);
        assert!(r.contains(&Point3::new(1.0, 2.0, 3.0)));
        assert!(!r.contains(&Point3::new(1.0, 2.0, 3.001)));
    }

    #[test]
    fn negative_extent_is_rejected() {
        let mut rooms = default_rooms();
        rooms[2].extent.y = -1.0;
        assert!(matches!(
            RoomRegistry::new(rooms),
            Err(RoomError::InvalidExtent { index: 2, .. })
        ));
    }

    #[test]
    fn non_finite_gravity_is_rejected() {
        let mut rooms = default_rooms();
        rooms[0].gravity.x = f32::NAN;
        assert_eq!(
            RoomRegistry::new(rooms).unwrap_err(),
            RoomError::NonFinite {
                index: 0,
                field: "gravity"
            }
        );
    }
}
