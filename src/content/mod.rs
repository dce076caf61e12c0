//! Content domain: scene configuration loading and validation.

mod data;
mod loader;
mod validation;

pub use data::{
    BodyDef, BodyKind, MovementDef, PixelScale, ProbeDef, SceneConfig, ShapeDef,
};
pub use loader::{ContentLoadError, SCENE_SOURCE, load_scene_config, parse_scene_config};
pub use validation::{ValidationError, validate_scene};

use bevy::prelude::*;

use crate::core::{BootFailure, GameState};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .add_systems(Startup, load_scene_content);
    }
}

/// Parse and validate the scene, then leave the boot state.
/// Any failure is fatal to the scene: the run moves to `GameState::Failed`.
fn load_scene_content(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let scene = match load_scene_config() {
        Ok(scene) => scene,
        Err(e) => {
            error!("{}", e);
            commands.insert_resource(BootFailure {
                messages: vec![e.to_string()],
            });
            next_state.set(GameState::Failed);
            return;
        }
    };

    let errors = validate_scene(&scene);
    if !errors.is_empty() {
        for e in &errors {
            error!("Scene validation: {}", e);
        }
        commands.insert_resource(BootFailure {
            messages: errors.iter().map(|e| e.to_string()).collect(),
        });
        next_state.set(GameState::Failed);
        return;
    }

    info!("Loaded {}: {}", SCENE_SOURCE, scene.summary());
    commands.insert_resource(scene);
    next_state.set(GameState::Playing);
}
