use bevy::prelude::*;
use rooms::constants::{GROUND_POSITION, GROUND_SIZE};

use crate::{convert::vec3_to_bevy, physics::SimulationState};

const SKY_COLOR: Color = Color::srgb(0.26, 0.46, 0.98);
const GROUND_COLOR: Color = Color::srgb(0.0, 0.5, 0.0);
const ROOM_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.25);
const LIGHT_POSITION: Vec3 = Vec3::new(0.0, 5.0, 0.0);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(SKY_COLOR));
    app.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
    app.add_systems(
        Startup,
        (
            setup,
            spawn_rooms.run_if(resource_exists::<SimulationState>),
        ),
    );
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    info!("World setup");

    let [x, y, z] = GROUND_POSITION;
    let [w, h, d] = GROUND_SIZE;
    commands.spawn((
        Name::new("Ground"),
        Transform::from_xyz(x, y, z),
        Mesh3d(meshes.add(Cuboid::new(w, h, d))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOR,
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    commands.spawn((
        Name::new("Light"),
        PointLight {
            shadows_enabled: true,
            range: 100.0,
            ..default()
        },
        Transform::from_translation(LIGHT_POSITION),
    ));
}

/// Translucent boxes marking each gravity room.
fn spawn_rooms(
    mut commands: Commands,
    sim: Res<SimulationState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: ROOM_COLOR,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        cull_mode: None,
        ..default()
    });

    for (id, room) in sim.0.rooms().iter() {
        let size = vec3_to_bevy(&room.extent);
        commands.spawn((
            Name::new(format!("Room {}", id.0)),
            Transform::from_translation(vec3_to_bevy(&room.center)),
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(material.clone()),
        ));
    }
}
