//! Debug domain: hotkeys and the player info overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{GroundSignal, Player, ProbeGizmos};

/// Marker for debug info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// F1 toggles collider outlines, F2 probe rays, F3 the info overlay
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut config_store: ResMut<GizmoConfigStore>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_physics = !debug_state.show_physics;
        info!("[DEBUG] Physics debug draw: {}", debug_state.show_physics);
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.show_rays = !debug_state.show_rays;
        info!("[DEBUG] Probe rays: {}", debug_state.show_rays);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_info = !debug_state.show_info;
    }

    if debug_state.is_changed() {
        config_store.config_mut::<PhysicsGizmos>().0.enabled = debug_state.show_physics;
        config_store.config_mut::<ProbeGizmos>().0.enabled = debug_state.show_rays;
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    ground: Res<GroundSignal>,
    player_query: Query<(&Position, &LinearVelocity), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Ok((position, velocity)), Ok(mut text)) =
        (player_query.single(), overlay_query.single_mut())
    {
        **text = format!(
            "Pos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nGrounded: {}",
            position.x, position.y, velocity.x, velocity.y, ground.is_grounded
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 11.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(6.0),
            top: Val::Px(6.0),
            ..default()
        },
    ));
}
