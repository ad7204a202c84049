//! First-person viewer: WASD walks on the horizontal plane, the mouse looks around.

use bevy::{input::mouse::AccumulatedMouseMotion, prelude::*};
use leafwing_input_manager::prelude::*;
use rooms::{
    MoveInput, Viewer,
    constants::{FOV_Y, Z_FAR, Z_NEAR},
};

use crate::{convert::viewer_to_transform, input::InputAction};

/// The simulation-side viewer; the Bevy camera mirrors it every frame.
#[derive(Resource, Default)]
pub struct ViewerState(pub Viewer);

/// Viewer motion for this frame is applied in this set, before anything reads the viewer.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewerMotion;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<ViewerState>();
    app.add_systems(Startup, add_camera);
    app.add_systems(Update, (look, walk).chain().in_set(ViewerMotion));
    app.add_systems(Update, follow_viewer.after(ViewerMotion));
}

fn add_camera(mut commands: Commands, viewer: Res<ViewerState>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_Y,
            near: Z_NEAR,
            far: Z_FAR,
            ..default()
        }),
        viewer_to_transform(&viewer.0),
    ));
}

fn look(motion: Res<AccumulatedMouseMotion>, mut viewer: ResMut<ViewerState>) {
    if motion.delta == Vec2::ZERO {
        return;
    }
    // Screen +Y points down, pitch grows upwards.
    viewer.0.rotate(motion.delta.x, -motion.delta.y);
}

fn walk(actions: Res<ActionState<InputAction>>, time: Res<Time>, mut viewer: ResMut<ViewerState>) {
    let input = MoveInput::from_keys(
        actions.pressed(&InputAction::Forward),
        actions.pressed(&InputAction::Backward),
        actions.pressed(&InputAction::Left),
        actions.pressed(&InputAction::Right),
    );
    viewer.0.translate(input, time.delta_secs());
}

fn follow_viewer(
    viewer: Res<ViewerState>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
) {
    let Ok(mut cam_tf) = camera_query.single_mut() else {
        return;
    };
    *cam_tf = viewer_to_transform(&viewer.0);
}
