//! Scene domain: body bootstrap and the per-frame system order.
//!
//! One frame runs, in order:
//! 1. `Update`: sample input, then drive the player's velocity using the
//!    grounding computed on the previous frame.
//! 2. `PostUpdate`: avian steps the world by the frame delta.
//! 3. The renderer clears to `ClearColor` and avian's debug plugin draws the
//!    colliders.
//! 4. `PostUpdate`, after physics: the ground probe casts and draws its rays
//!    and stores the grounding result for the next frame.

mod spawn;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::GameState;
use crate::scene::spawn::spawn_scene;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSystems {
    Input,
    Control,
    Probe,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSystems::Input, FrameSystems::Control)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .configure_sets(
            PostUpdate,
            FrameSystems::Probe
                .after(PhysicsSystems::Last)
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnEnter(GameState::Playing), spawn_scene);
    }
}
