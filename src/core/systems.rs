//! Core domain: camera setup and the boot failure notice.

use bevy::prelude::*;

use crate::content::SceneConfig;
use crate::core::BootFailure;

/// Marker for the boot failure overlay
#[derive(Component)]
pub(super) struct BootFailureUI;

/// Spawn a camera framing the viewport, one world unit per `pixels_per_meter`
/// screen pixels.
pub(crate) fn setup_camera(mut commands: Commands, scene: Res<SceneConfig>) {
    let center = scene.world_center();

    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / scene.pixels_per_meter,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(center.x, center.y, 0.0),
    ));

    let (r, g, b) = scene.clear_color;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));
}

/// Show why the scene could not start. Runs on entering `GameState::Failed`.
pub(crate) fn spawn_boot_failure_notice(mut commands: Commands, failure: Option<Res<BootFailure>>) {
    // UI needs a camera of its own; the scene camera is only spawned on success
    commands.spawn(Camera2d);

    let details = failure
        .map(|f| f.messages.join("\n"))
        .unwrap_or_default();

    commands
        .spawn((
            BootFailureUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("The scene could not be started."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.3, 0.3)),
                Node {
                    margin: UiRect::bottom(Val::Px(12.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(details),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.7, 0.7)),
            ));
        });
}
