use crate::{backend::PhysicsBackend, region::RoomRegistry, types::Point3};

/// Outcome of one [`sync_gravity`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Projectiles found inside a room and given its gravity.
    pub updated: usize,
    /// Projectiles outside every room; their gravity was left as is.
    pub outside: usize,
    /// Projectiles skipped because the engine had no usable state for them.
    pub skipped: usize,
}

/// Give every projectile the gravity of the room it currently occupies.
///
/// Run once per tick, right before the engine step, so the step already uses the new
/// gravity. Static bodies are never touched. A projectile outside every room keeps the
/// gravity it was last given. Bodies without a transform, or that the engine rejects,
/// are skipped and the pass carries on.
pub fn sync_gravity<P: PhysicsBackend>(rooms: &RoomRegistry, physics: &mut P) -> SyncReport {
    let mut report = SyncReport::default();
    let handles: Vec<P::Handle> = physics.bodies().collect();

    for body in handles {
        let takes_room_gravity = physics
            .role(body)
            .is_some_and(|role| role.receives_room_gravity());
        if !takes_room_gravity || !physics.is_dynamic(body) {
            continue;
        }

        let Some(position) = physics.position(body) else {
            log::trace!("body {body:?} has no transform yet; skipping");
            report.skipped += 1;
            continue;
        };

        let Some((room_id, room)) = rooms.locate(&Point3::from(position)) else {
            report.outside += 1;
            continue;
        };

        if physics.gravity(body) != Some(room.gravity) {
            log::debug!(
                "body {body:?} entered room {} -> gravity {:?}",
                room_id.0,
                room.gravity
            );
        }

        match physics.set_gravity(body, room.gravity) {
            Ok(()) => report.updated += 1,
            Err(err) => {
                log::warn!("failed to set gravity on {body:?}: {err}");
                report.skipped += 1;
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        region::default_rooms,
        testing::MockPhysics,
        types::{BodyDesc, Vec3},
    };

    fn rooms() -> RoomRegistry {
        RoomRegistry::new(default_rooms()).unwrap()
    }

    fn projectile(at: Vec3) -> BodyDesc {
        BodyDesc::projectile(at, 0.2, 1.0, 0.3, 0.3)
    }

    #[test]
    fn body_at_room_center_gets_room_gravity() {
        let mut physics = MockPhysics::default();
        let h = physics.create_body(&projectile(Vec3::new(-10.0, 0.0, 0.0)));

        let report = sync_gravity(&rooms(), &mut physics);

        assert_eq!(physics.gravity(h), Some(Vec3::new(0.0, -30.8, 0.0)));
        assert_eq!(
            report,
            SyncReport {
                updated: 1,
                outside: 0,
                skipped: 0
            }
        );
    }

    #[test]
    fn repeated_sync_without_motion_is_idempotent() {
        let mut physics = MockPhysics::default();
        let a = physics.create_body(&projectile(Vec3::new(10.0, 1.0, 0.0)));
        let b = physics.create_body(&projectile(Vec3::new(0.0, 0.0, -10.0)));
        let reg = rooms();

        let first = sync_gravity(&reg, &mut physics);
        let after_first = (physics.gravity(a), physics.gravity(b));
        let second = sync_gravity(&reg, &mut physics);

        assert_eq!(first, second);
        assert_eq!((physics.gravity(a), physics.gravity(b)), after_first);
        assert_eq!(physics.gravity(b), Some(Vec3::new(0.0, -100.0, 0.0)));
    }

    #[test]
    fn gravity_sticks_after_leaving_every_room() {
        let mut physics = MockPhysics::default();
        let h = physics.create_body(&projectile(Vec3::new(0.0, 0.0, 10.0)));
        let reg = rooms();

        sync_gravity(&reg, &mut physics);
        assert_eq!(physics.gravity(h), Some(Vec3::new(0.0, -15.0, 0.0)));

        physics.teleport(h, Vec3::new(0.0, 0.0, 40.0));
        let report = sync_gravity(&reg, &mut physics);

        assert_eq!(report.outside, 1);
        assert_eq!(physics.gravity(h), Some(Vec3::new(0.0, -15.0, 0.0)));
        assert_eq!(physics.body(h).gravity_writes, 1);
    }

    #[test]
    fn moving_between_rooms_switches_gravity() {
        let mut physics = MockPhysics::default();
        let h = physics.create_body(&projectile(Vec3::new(-10.0, 0.0, 0.0)));
        let reg = rooms();

        sync_gravity(&reg, &mut physics);
        physics.teleport(h, Vec3::new(10.0, 0.0, 0.0));
        sync_gravity(&reg, &mut physics);

        assert_eq!(physics.gravity(h), Some(Vec3::new(0.0, -5.0, 0.0)));
    }

    #[test]
    fn static_bodies_are_never_touched() {
        let mut physics = MockPhysics::default();
        let ground = physics.create_body(&BodyDesc::static_box(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            0.3,
            0.3,
        ));

        let report = sync_gravity(&rooms(), &mut physics);

        assert_eq!(report, SyncReport::default());
        assert_eq!(physics.body(ground).gravity, None);
        assert_eq!(physics.body(ground).gravity_writes, 0);
    }

    #[test]
    fn body_without_transform_is_skipped_and_others_still_sync() {
        let mut physics = MockPhysics::default();
        let broken = physics.create_body(&projectile(Vec3::new(-10.0, 0.0, 0.0)));
        let fine = physics.create_body(&projectile(Vec3::new(10.0, 0.0, 0.0)));
        physics.drop_transform(broken);

        let report = sync_gravity(&rooms(), &mut physics);

        assert_eq!(report.skipped, 1);
        assert_eq!(report.updated, 1);
        assert_eq!(physics.body(broken).gravity, None);
        assert_eq!(physics.gravity(fine), Some(Vec3::new(0.0, -5.0, 0.0)));
    }

    #[test]
    fn syncs_through_the_rapier_backend() {
        use crate::rapier_world::RapierPhysics;

        let mut physics = RapierPhysics::default();
        let ground = physics.create_body(&BodyDesc::static_box(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(200.0, 0.1, 200.0),
            0.3,
            0.3,
        ));
        let h = physics.create_body(&projectile(Vec3::new(-10.0, 0.0, 0.0)));
        let reg = rooms();

        sync_gravity(&reg, &mut physics);
        assert_eq!(physics.gravity(h), Some(Vec3::new(0.0, -30.8, 0.0)));
        assert_eq!(physics.gravity(ground), Some(physics.world_gravity()));

        physics
            .set_translation(h, Vec3::new(50.0, 0.0, 0.0))
            .unwrap();
        sync_gravity(&reg, &mut physics);
        assert_eq!(physics.gravity(h), Some(Vec3::new(0.0, -30.8, 0.0)));
    }
}
