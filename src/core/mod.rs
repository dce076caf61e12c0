//! Core domain: app state, boot failure handling and camera.

mod resources;
mod state;
mod systems;


pub use resources::BootFailure;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{setup_camera, spawn_boot_failure_notice};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::Playing), setup_camera)
            .add_systems(OnEnter(GameState::Failed), spawn_boot_failure_notice);
    }
}
