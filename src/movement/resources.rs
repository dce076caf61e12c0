//! Movement domain: tuning, input and ground signal resources.

use bevy::prelude::*;

use crate::content::{MovementDef, SceneConfig};
use crate::movement::probe::ProbeGeometry;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Upward speed set on jump, world units per second.
    pub jump_velocity: f32,
    pub walk_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            jump_velocity: 7.0,
            walk_speed: 3.0,
        }
    }
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            jump_velocity: def.jump_velocity,
            walk_speed: def.walk_speed,
        }
    }
}

/// Held state of the movement keys, sampled once per frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pub jump: bool,
    pub left: bool,
    pub right: bool,
}

/// Ground contact state.
///
/// `left_hit` and `right_hit` only live for the duration of one probe pass;
/// `is_grounded` survives until the next pass and is what the controller
/// reads, one frame after it was computed.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundSignal {
    pub left_hit: bool,
    pub right_hit: bool,
    pub is_grounded: bool,
}

impl GroundSignal {
    pub fn reset_hits(&mut self) {
        self.left_hit = false;
        self.right_hit = false;
    }

    /// Recompute `is_grounded` from the hit flags.
    pub fn resolve(&mut self) -> bool {
        self.is_grounded = self.left_hit || self.right_hit;
        self.is_grounded
    }
}

/// Ray geometry and diagnostic styling for the ground probe.
#[derive(Resource, Debug, Clone)]
pub struct ProbeSettings {
    pub geometry: ProbeGeometry,
    pub color: Color,
    pub width: f32,
}

impl ProbeSettings {
    pub fn from_scene(scene: &SceneConfig) -> Self {
        let (r, g, b) = scene.probe.ray_color;

        Self {
            geometry: ProbeGeometry::from_def(&scene.probe, &scene.scale()),
            color: Color::srgb(r, g, b),
            width: scene.probe.ray_width,
        }
    }
}
