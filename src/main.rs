mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod physics;
mod scene;
#[cfg(test)]
mod test_support;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Raycast Platformer".to_string(),
            resolution: WindowResolution::new(300, 300),
            // Web builds render into <canvas id="screen"> and scale to fit
            canvas: Some("#screen".to_string()),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    // Step once per frame with the frame delta, before the probe runs
    .add_plugins((
        PhysicsPlugins::new(PostUpdate),
        PhysicsDebugPlugin::default(),
    ))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        physics::PhysicsSetupPlugin,
        movement::MovementPlugin,
        scene::ScenePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
