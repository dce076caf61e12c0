//! Movement domain: player controller state machine.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning};

/// Apply one frame of input to `velocity`.
///
/// Jumping requires `grounded`, which is the previous frame's probe result.
/// Left and right are evaluated in that order and each overwrites the
/// horizontal speed, so holding both moves right. With neither held the
/// horizontal speed is left to the physics engine.
pub fn apply_controls(
    input: &MovementInput,
    grounded: bool,
    tuning: &MovementTuning,
    mut velocity: Vec2,
) -> Vec2 {
    if input.jump && grounded {
        velocity.y = tuning.jump_velocity;
    }

    if input.left {
        velocity.x = -tuning.walk_speed;
    }

    if input.right {
        velocity.x = tuning.walk_speed;
    }

    velocity
}
