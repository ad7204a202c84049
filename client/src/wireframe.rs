//! `L` toggles wireframe rendering for every mesh in the scene.

use bevy::{
    pbr::wireframe::{WireframeConfig, WireframePlugin},
    prelude::*,
};
use leafwing_input_manager::prelude::*;

use crate::input::InputAction;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(WireframePlugin::default());
    app.add_systems(Update, toggle_wireframe);
}

fn toggle_wireframe(
    actions: Res<ActionState<InputAction>>,
    mut config: ResMut<WireframeConfig>,
) {
    if actions.just_pressed(&InputAction::Wireframe) {
        config.global = !config.global;
        info!("Wireframe {}", if config.global { "on" } else { "off" });
    }
}
