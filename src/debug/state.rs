//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking which debug layers are visible
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Collider outlines from the physics debug plugin
    pub show_physics: bool,
    /// Ground probe rays
    pub show_rays: bool,
    /// Text overlay with player state
    pub show_info: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            show_physics: true,
            show_rays: true,
            show_info: false,
        }
    }
}
