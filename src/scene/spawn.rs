//! Scene domain: physics body construction from the scene configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{BodyDef, BodyKind, PixelScale, SceneConfig, ShapeDef};
use crate::movement::Player;
use crate::physics::{FixtureLabel, FixtureRegistry};

/// Spawn every configured body and label its collider.
///
/// Each body carries exactly one collider on the same entity, so the entity
/// reported by ray hits is the key registered here.
pub(crate) fn spawn_scene(
    mut commands: Commands,
    scene: Res<SceneConfig>,
    mut registry: ResMut<FixtureRegistry>,
) -> Result {
    let scale = scene.scale();

    for body in &scene.bodies {
        let fixture = spawn_body(&mut commands, body, &scale);
        registry.register(fixture, body.label)?;
        debug!("Spawned '{}' as {}", body.label, fixture);
    }

    info!("Scene ready: {} fixtures registered", registry.len());
    Ok(())
}

fn spawn_body(commands: &mut Commands, body: &BodyDef, scale: &PixelScale) -> Entity {
    let (x, y) = body.position;
    let position = scale.to_world_point(Vec2::new(x, y));

    let rigid_body = match body.kind {
        BodyKind::Static => RigidBody::Static,
        BodyKind::Dynamic => RigidBody::Dynamic,
    };

    let collider = match body.shape {
        ShapeDef::Circle { radius } => Collider::circle(scale.to_world_len(radius)),
        ShapeDef::Box { width, height } => {
            Collider::rectangle(scale.to_world_len(width), scale.to_world_len(height))
        }
    };

    // Canvas angles turn clockwise, world angles counter-clockwise
    let rotation = Quat::from_rotation_z(-body.angle_degrees.to_radians());

    let mut entity = commands.spawn((
        Name::new(body.label.to_string()),
        Transform::from_xyz(position.x, position.y, 0.0).with_rotation(rotation),
        rigid_body,
        collider,
        Friction::new(body.friction),
        ColliderDensity(body.density),
    ));

    if body.fixed_rotation {
        entity.insert(LockedAxes::ROTATION_LOCKED);
    }

    if body.label == FixtureLabel::Player {
        entity.insert((Player, LinearVelocity::default()));
    }

    entity.id()
}
