//! Movement domain: components and gizmo groups for locomotion.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Gizmo group for the ground probe rays, so they can be styled and toggled
/// apart from the physics debug draw.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct ProbeGizmos;
