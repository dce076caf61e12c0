//! Movement domain: tuning installed from the scene configuration.

use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::movement::{GroundSignal, MovementTuning, ProbeGizmos, ProbeSettings};

pub(crate) fn apply_scene_tuning(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    let tuning = MovementTuning::from(&scene.movement);
    let settings = ProbeSettings::from_scene(&scene);

    let (config, _) = config_store.config_mut::<ProbeGizmos>();
    config.line.width = settings.width;

    info!(
        "Movement tuning: jump_velocity={}, walk_speed={}",
        tuning.jump_velocity, tuning.walk_speed
    );

    commands.insert_resource(tuning);
    commands.insert_resource(settings);
    commands.insert_resource(GroundSignal::default());
}
