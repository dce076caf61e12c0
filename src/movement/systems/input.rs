//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.jump = keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]);
    input.left = keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]);
    input.right = keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]);
}
