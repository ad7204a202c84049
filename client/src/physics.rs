//! Owns the [`Simulation`] and drives it from the frame loop.
//!
//! Per frame: the viewer moves, a pending shot is fired, then the simulation ticks
//! (gravity sync followed by the engine step).

use bevy::{prelude::*, window::PrimaryWindow};
use leafwing_input_manager::prelude::*;
use rooms::{FireRequest, RapierPhysics, Simulation, SimulationConfig, default_rooms};

use crate::{
    camera::{ViewerMotion, ViewerState},
    input::InputAction,
};

#[derive(Resource)]
pub struct SimulationState(pub Simulation<RapierPhysics>);

/// The simulation has been advanced for this frame after this set.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationStep;

pub(super) fn plugin(app: &mut App) {
    match Simulation::new(
        SimulationConfig::default(),
        default_rooms(),
        RapierPhysics::default(),
    ) {
        Ok(sim) => {
            app.insert_resource(SimulationState(sim));
        }
        Err(err) => {
            error!("Failed to build the simulation, running without physics: {err}");
        }
    }

    app.add_systems(
        Update,
        (fire, tick)
            .chain()
            .in_set(SimulationStep)
            .after(ViewerMotion)
            .run_if(resource_exists::<SimulationState>),
    );
}

fn fire(
    actions: Res<ActionState<InputAction>>,
    window: Single<&Window, With<PrimaryWindow>>,
    viewer: Res<ViewerState>,
    mut sim: ResMut<SimulationState>,
) {
    if !actions.just_pressed(&InputAction::Fire) {
        return;
    }

    let viewport = [window.width(), window.height()];
    // No cursor over the window: aim at the center of the screen.
    let cursor = window
        .cursor_position()
        .map_or([viewport[0] * 0.5, viewport[1] * 0.5], |c| [c.x, c.y]);

    let handle = sim
        .0
        .fire(&FireRequest::from_viewer(&viewer.0, cursor, viewport));
    debug!("Fire at {cursor:?} -> {handle:?}");
}

fn tick(time: Res<Time>, mut sim: ResMut<SimulationState>) {
    let report = sim.0.tick(time.delta_secs());
    if report.sync.skipped > 0 {
        warn!("Gravity sync skipped {} bodies", report.sync.skipped);
    }
}
