//! Movement domain: per-frame ground probe and ray diagnostics.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::probe::{PhysicsRays, run_ground_probe};
use crate::movement::{GroundSignal, Player, ProbeGizmos, ProbeSettings};
use crate::physics::FixtureRegistry;

/// Cast the probe rays from the player's post-step position, draw them, and
/// store the grounding result for the next frame's controller.
pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    registry: Res<FixtureRegistry>,
    settings: Res<ProbeSettings>,
    mut signal: ResMut<GroundSignal>,
    mut gizmos: Gizmos<ProbeGizmos>,
    query: Query<(Entity, &Position), With<Player>>,
) -> Result {
    let Ok((player, position)) = query.single() else {
        return Ok(());
    };

    let was_grounded = signal.is_grounded;
    let rays = settings.geometry.rays(position.0);

    // Ray origins sit inside the player's own circle
    let physics_rays = PhysicsRays {
        spatial_query: &spatial_query,
        filter: SpatialQueryFilter::default().with_excluded_entities([player]),
    };

    let report = run_ground_probe(&mut signal, &rays, &physics_rays, &registry)?;

    for ray in &rays {
        gizmos.line_2d(ray.start, ray.end, settings.color);
    }

    for label in report.overhead.iter().filter(|label| label.is_platform()) {
        debug!("Overhead: {}", label);
    }

    if report.grounded && !was_grounded {
        debug!(
            "Landed: left_hit={}, right_hit={}",
            report.left_hit, report.right_hit
        );
    } else if !report.grounded && was_grounded {
        debug!("Left ground");
    }
    trace!("is_grounded = {}", report.grounded);

    Ok(())
}
