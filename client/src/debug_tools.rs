//! Frame time and entity count overlay for native dev builds.

use bevy::diagnostic::{
    DiagnosticsStore, EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin,
};
use bevy::{prelude::*, window::PrimaryWindow};
use iyes_perf_ui::prelude::*;

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(Update, fps_in_title);
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn((
        PerfUiRoot::default(),
        PerfUiEntryFPS::default(),
        PerfUiEntryFrameTime::default(),
        PerfUiEntryEntityCount::default(),
    ));
}

/// Mirror the smoothed FPS into the window title.
fn fps_in_title(
    diagnostics: Res<DiagnosticsStore>,
    mut window: Single<&mut Window, With<PrimaryWindow>>,
) {
    let Some(fps) = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
    else {
        return;
    };
    window.title = format!("Gravity Rooms - FPS: {fps:.0}");
}
