//! Movement domain: player input, velocity control and ground probing.

mod components;
mod controller;
mod probe;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Player, ProbeGizmos};
pub use controller::apply_controls;
pub use probe::{ProbeGeometry, ProbeRay, RayKind, RayQuery, run_ground_probe};
pub use resources::{GroundSignal, MovementInput, MovementTuning, ProbeSettings};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::systems::{
    apply_player_controller, apply_scene_tuning, probe_ground, read_input,
};
use crate::scene::FrameSystems;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<GroundSignal>()
            .init_gizmo_group::<ProbeGizmos>()
            .add_systems(OnEnter(GameState::Playing), apply_scene_tuning)
            .add_systems(Update, read_input.in_set(FrameSystems::Input))
            .add_systems(Update, apply_player_controller.in_set(FrameSystems::Control))
            .add_systems(PostUpdate, probe_ground.in_set(FrameSystems::Probe));
    }
}
