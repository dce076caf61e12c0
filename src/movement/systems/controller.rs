//! Movement domain: velocity control for the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::controller::apply_controls;
use crate::movement::{GroundSignal, MovementInput, MovementTuning, Player};

/// Runs before the physics step, so `ground` still holds the previous
/// frame's probe result.
pub(crate) fn apply_player_controller(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    ground: Res<GroundSignal>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        let before = velocity.0;
        let after = apply_controls(&input, ground.is_grounded, &tuning, before);

        if after.y != before.y {
            debug!("Jump: vy {} -> {}", before.y, after.y);
        }

        velocity.0 = after;
    }
}
