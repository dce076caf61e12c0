//! Debug domain: toggles for the physics and probe debug draw, plus a
//! player info overlay. Only built with the `dev-tools` feature.

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (
                handle_debug_hotkeys,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| {
                    state.show_info || state.is_changed()
                }),
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
