//! Physics domain: world configuration and fixture metadata.

mod registry;

pub use registry::{FixtureError, FixtureLabel, FixtureRegistry};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::core::GameState;

pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FixtureRegistry>()
            .register_type::<FixtureLabel>()
            .add_systems(OnEnter(GameState::Playing), configure_physics_world);
    }
}

/// Apply gravity and solver settings from the scene configuration.
pub(crate) fn configure_physics_world(mut commands: Commands, scene: Res<SceneConfig>) {
    commands.insert_resource(Gravity(Vec2::NEG_Y * scene.gravity));
    commands.insert_resource(SubstepCount(scene.velocity_iterations));

    debug!(
        "Physics world: gravity={}, substeps={}",
        scene.gravity, scene.velocity_iterations
    );
}
