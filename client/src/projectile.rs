//! Renders projectiles: one yellow sphere entity per simulated body.

use bevy::{platform::collections::HashMap, prelude::*};
use rooms::{PhysicsBackend, rapier3d::prelude::RigidBodyHandle};

use crate::{
    convert::iso_to_transform,
    physics::{SimulationState, SimulationStep},
};

const PROJECTILE_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

#[derive(Component, Debug, Clone, Copy)]
pub struct Projectile(pub RigidBodyHandle);

/// Body handle -> render entity, filled as projectiles show up in the simulation.
#[derive(Resource, Default)]
pub struct ProjectileEntityMapping(pub HashMap<RigidBodyHandle, Entity>);

#[derive(Resource)]
struct ProjectileAssets {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ProjectileEntityMapping>();
    app.add_systems(
        Startup,
        load_assets.run_if(resource_exists::<SimulationState>),
    );
    app.add_systems(
        Update,
        (spawn_new_projectiles, sync_projectile_transforms)
            .chain()
            .after(SimulationStep)
            .run_if(resource_exists::<ProjectileAssets>),
    );
}

fn load_assets(
    mut commands: Commands,
    sim: Res<SimulationState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = sim.0.config().projectile.radius;
    commands.insert_resource(ProjectileAssets {
        mesh: meshes.add(Sphere::new(radius).mesh().uv(32, 18)),
        material: materials.add(StandardMaterial {
            base_color: PROJECTILE_COLOR,
            ..default()
        }),
    });
}

fn spawn_new_projectiles(
    mut commands: Commands,
    sim: Res<SimulationState>,
    assets: Res<ProjectileAssets>,
    mut mapping: ResMut<ProjectileEntityMapping>,
) {
    for handle in sim.0.projectiles() {
        if mapping.0.contains_key(&handle) {
            continue;
        }
        let Some(iso) = sim.0.physics().transform(handle) else {
            continue;
        };

        let entity = commands
            .spawn((
                Name::new("Projectile"),
                Projectile(handle),
                iso_to_transform(&iso),
                Mesh3d(assets.mesh.clone()),
                MeshMaterial3d(assets.material.clone()),
            ))
            .id();
        mapping.0.insert(handle, entity);
        debug!("Spawned projectile entity {entity:?} for {handle:?}");
    }
}

fn sync_projectile_transforms(
    sim: Res<SimulationState>,
    mut query: Query<(&Projectile, &mut Transform)>,
) {
    for (projectile, mut transform) in &mut query {
        if let Some(iso) = sim.0.physics().transform(projectile.0) {
            *transform = iso_to_transform(&iso);
        }
    }
}
