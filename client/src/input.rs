use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    Fire,
    Forward,
    Backward,
    Left,
    Right,
    Wireframe,
    Quit,
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::Fire, KeyCode::Space);
    input_map.insert(InputAction::Forward, KeyCode::KeyW);
    input_map.insert(InputAction::Backward, KeyCode::KeyS);
    input_map.insert(InputAction::Left, KeyCode::KeyA);
    input_map.insert(InputAction::Right, KeyCode::KeyD);
    input_map.insert(InputAction::Wireframe, KeyCode::KeyL);
    input_map.insert(InputAction::Quit, KeyCode::Escape);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<InputAction>::default());

    app.add_systems(Update, quit_on_escape);
}

fn quit_on_escape(actions: Res<ActionState<InputAction>>, mut exit: MessageWriter<AppExit>) {
    if actions.just_pressed(&InputAction::Quit) {
        info!("Escape pressed, exiting");
        exit.write(AppExit::Success);
    }
}
