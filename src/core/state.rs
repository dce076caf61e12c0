//! Core domain: app state definitions for the boot flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Playing,
    /// Boot failed; the frame loop never starts.
    Failed,
}
