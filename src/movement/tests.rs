//! Movement domain: tests for the ground probe and player controller.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::apply_player_controller;
use super::{
    GroundSignal, MovementInput, MovementTuning, Player, ProbeGeometry, RayKind, apply_controls,
    run_ground_probe,
};
use crate::physics::{FixtureError, FixtureLabel};
use crate::test_support::{BoxWorld, reference_scene};

const EPS: f32 = 1e-4;

fn reference_geometry() -> ProbeGeometry {
    let scene = reference_scene();
    ProbeGeometry::from_def(&scene.probe, &scene.scale())
}

// -----------------------------------------------------------------------------
// Ray geometry tests
// -----------------------------------------------------------------------------

#[test]
fn test_rays_follow_reference_layout() {
    let rays = reference_geometry().rays(Vec2::new(3.0, 2.0));
    let px = 1.0 / 30.0;

    assert_eq!(rays[0].kind, RayKind::Up);
    assert!(rays[0].start.abs_diff_eq(Vec2::new(3.0, 2.0 + 10.0 * px), EPS));
    assert!(rays[0].end.abs_diff_eq(Vec2::new(3.0, 2.0 + 30.0 * px), EPS));

    assert_eq!(rays[1].kind, RayKind::LeftDown);
    assert!(rays[1].start.abs_diff_eq(Vec2::new(3.0 - 10.0 * px, 2.0 - 10.0 * px), EPS));
    assert!(rays[1].end.abs_diff_eq(Vec2::new(3.0 - 10.0 * px, 2.0 - 25.0 * px), EPS));

    assert_eq!(rays[2].kind, RayKind::RightDown);
    assert!(rays[2].start.abs_diff_eq(Vec2::new(3.0 + 10.0 * px, 2.0 - 10.0 * px), EPS));
    assert!(rays[2].end.abs_diff_eq(Vec2::new(3.0 + 10.0 * px, 2.0 - 25.0 * px), EPS));
}

// -----------------------------------------------------------------------------
// Ground probe tests
// -----------------------------------------------------------------------------

#[test]
fn test_probe_without_ground_in_range_is_airborne() {
    let mut world = BoxWorld::default();
    // Far below the rays
    world.add(
        FixtureLabel::Ground,
        Vec2::new(1.0, -5.0),
        Vec2::new(10.0, 0.5),
    );

    let mut signal = GroundSignal {
        is_grounded: true,
        ..default()
    };
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let report = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

    assert!(!report.grounded);
    assert!(!signal.is_grounded);
}

#[test]
fn test_probe_left_ray_only_grounds_player() {
    let mut world = BoxWorld::default();
    // Left ray runs at x = 1 - 1/3; right ray at x = 1 + 1/3
    world.add(
        FixtureLabel::Ground,
        Vec2::new(0.65, 0.2),
        Vec2::new(0.3, 0.4),
    );

    let mut signal = GroundSignal::default();
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let report = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

    assert!(report.left_hit);
    assert!(!report.right_hit);
    assert!(report.grounded);
    assert!(signal.is_grounded);
}

#[test]
fn test_probe_counts_platforms_as_ground() {
    for label in [FixtureLabel::FirstPlatform, FixtureLabel::SecondPlatform] {
        let mut world = BoxWorld::default();
        world.add(label, Vec2::new(1.0, 0.3), Vec2::new(2.0, 0.5));

        let mut signal = GroundSignal::default();
        let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
        let report = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

        assert!(report.left_hit && report.right_hit, "{} should be walkable", label);
        assert!(signal.is_grounded);
    }
}

#[test]
fn test_probe_ignores_non_walkable_hits() {
    let mut world = BoxWorld::default();
    world.add(
        FixtureLabel::Player,
        Vec2::new(1.0, 0.3),
        Vec2::new(2.0, 0.5),
    );

    let mut signal = GroundSignal::default();
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let report = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

    assert!(!report.grounded);
}

#[test]
fn test_probe_overlapping_hits_are_idempotent() {
    let mut world = BoxWorld::default();
    world.add(
        FixtureLabel::Ground,
        Vec2::new(1.0, 0.3),
        Vec2::new(2.0, 0.5),
    );
    world.add(
        FixtureLabel::SecondPlatform,
        Vec2::new(1.0, 0.35),
        Vec2::new(2.0, 0.5),
    );

    let mut signal = GroundSignal::default();
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let report = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

    assert!(report.left_hit);
    assert!(report.right_hit);
    assert!(report.grounded);
}

#[test]
fn test_up_ray_reports_but_never_grounds() {
    let mut world = BoxWorld::default();
    world.add(
        FixtureLabel::FirstPlatform,
        Vec2::new(1.0, 1.7),
        Vec2::new(2.0, 0.5),
    );

    let mut signal = GroundSignal::default();
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let report = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

    assert_eq!(report.overhead, vec![FixtureLabel::FirstPlatform]);
    assert!(!report.grounded);
}

#[test]
fn test_probe_resets_hit_flags_after_pass() {
    let mut world = BoxWorld::default();
    world.add(
        FixtureLabel::Ground,
        Vec2::new(1.0, 0.3),
        Vec2::new(2.0, 0.5),
    );

    let mut signal = GroundSignal::default();
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap();

    assert!(signal.is_grounded);
    assert!(!signal.left_hit);
    assert!(!signal.right_hit);
}

#[test]
fn test_probe_recomputes_every_pass() {
    let mut world = BoxWorld::default();
    world.add(
        FixtureLabel::Ground,
        Vec2::new(1.0, 0.3),
        Vec2::new(2.0, 0.5),
    );
    let geometry = reference_geometry();
    let mut signal = GroundSignal::default();

    run_ground_probe(&mut signal, &geometry.rays(Vec2::new(1.0, 1.0)), &world, &world.registry)
        .unwrap();
    assert!(signal.is_grounded);

    // Player moved well above the ground
    run_ground_probe(&mut signal, &geometry.rays(Vec2::new(1.0, 4.0)), &world, &world.registry)
        .unwrap();
    assert!(!signal.is_grounded);
}

#[test]
fn test_probe_unknown_fixture_is_an_error() {
    let mut world = BoxWorld::default();
    let stray = world.add_unregistered(Vec2::new(1.0, 0.3), Vec2::new(2.0, 0.5));

    let mut signal = GroundSignal::default();
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let err = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap_err();

    assert_eq!(err, FixtureError::UnknownFixture(stray));
}

#[test]
fn test_unknown_fixture_leaves_flags_cleared() {
    let mut world = BoxWorld::default();
    // Registered ground under the left ray, a stray box under the right ray
    world.add(FixtureLabel::Ground, Vec2::new(0.5, 0.3), Vec2::new(0.6, 0.5));
    let stray = world.add_unregistered(Vec2::new(1.5, 0.3), Vec2::new(0.6, 0.5));

    let mut signal = GroundSignal {
        is_grounded: true,
        ..default()
    };
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));
    let err = run_ground_probe(&mut signal, &rays, &world, &world.registry).unwrap_err();

    assert_eq!(err, FixtureError::UnknownFixture(stray));
    assert!(!signal.left_hit);
    assert!(!signal.right_hit);
    // Grounding is only rewritten by a completed pass
    assert!(signal.is_grounded);
}

// -----------------------------------------------------------------------------
// Controller tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_requires_ground() {
    let tuning = MovementTuning::default();
    let input = MovementInput {
        jump: true,
        ..default()
    };
    let velocity = Vec2::new(1.5, -2.0);

    assert_eq!(apply_controls(&input, false, &tuning, velocity), velocity);
    assert_eq!(
        apply_controls(&input, true, &tuning, velocity),
        Vec2::new(1.5, tuning.jump_velocity)
    );
}

#[test]
fn test_walk_left_and_right() {
    let tuning = MovementTuning::default();
    let left = MovementInput {
        left: true,
        ..default()
    };
    let right = MovementInput {
        right: true,
        ..default()
    };

    assert_eq!(
        apply_controls(&left, false, &tuning, Vec2::new(0.0, -1.0)),
        Vec2::new(-tuning.walk_speed, -1.0)
    );
    assert_eq!(
        apply_controls(&right, false, &tuning, Vec2::new(0.0, -1.0)),
        Vec2::new(tuning.walk_speed, -1.0)
    );
}

#[test]
fn test_right_overrides_left() {
    let tuning = MovementTuning::default();
    let both = MovementInput {
        left: true,
        right: true,
        ..default()
    };

    let velocity = apply_controls(&both, true, &tuning, Vec2::new(-3.0, 0.0));
    assert_eq!(velocity.x, tuning.walk_speed);
}

#[test]
fn test_no_keys_leaves_velocity_untouched() {
    let tuning = MovementTuning::default();
    let velocity = Vec2::new(2.25, 0.5);

    assert_eq!(
        apply_controls(&MovementInput::default(), true, &tuning, velocity),
        velocity
    );
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

fn controller_world(input: MovementInput) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(input);
    world.insert_resource(MovementTuning::default());
    world.insert_resource(GroundSignal::default());
    let player = world.spawn((Player, LinearVelocity::default())).id();
    (world, player)
}

#[test]
fn test_controller_system_writes_player_velocity() {
    let (mut world, player) = controller_world(MovementInput {
        right: true,
        ..default()
    });

    world.run_system_once(apply_player_controller).unwrap();

    let velocity = world.get::<LinearVelocity>(player).unwrap();
    assert_eq!(velocity.0, Vec2::new(MovementTuning::default().walk_speed, 0.0));
}

#[test]
fn test_grounding_reaches_controller_one_frame_later() {
    let (mut world, player) = controller_world(MovementInput {
        jump: true,
        ..default()
    });
    let mut boxes = BoxWorld::default();
    boxes.add(
        FixtureLabel::Ground,
        Vec2::new(1.0, 0.3),
        Vec2::new(2.0, 0.5),
    );
    let rays = reference_geometry().rays(Vec2::new(1.0, 1.0));

    // Frame N: the controller runs before the probe and sees no ground yet
    world.run_system_once(apply_player_controller).unwrap();
    {
        let mut signal = world.resource_mut::<GroundSignal>();
        run_ground_probe(&mut signal, &rays, &boxes, &boxes.registry).unwrap();
    }
    assert_eq!(world.get::<LinearVelocity>(player).unwrap().y, 0.0);

    // Frame N+1: the probe result from frame N gates the jump
    world.run_system_once(apply_player_controller).unwrap();
    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().y,
        MovementTuning::default().jump_velocity
    );
}
