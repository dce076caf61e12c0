//! Movement domain: ground probe built from three short raycasts.
//!
//! Every frame, after the physics step, three rays are cast from the player's
//! current position:
//! - an up ray above the head, reported for diagnostics only;
//! - a left and a right down ray below the feet, which decide grounding.
//!
//! A down ray counts as ground contact when any fixture it crosses carries a
//! walkable label. Hits are OR-reduced, so repeated hits are harmless.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{PixelScale, ProbeDef};
use crate::movement::GroundSignal;
use crate::physics::{FixtureError, FixtureLabel, FixtureRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayKind {
    Up,
    LeftDown,
    RightDown,
}

/// A ray segment in world units, rebuilt every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub kind: RayKind,
    pub start: Vec2,
    pub end: Vec2,
}

/// Probe ray layout relative to the player center, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeGeometry {
    /// (start, end) distance above the center.
    pub up_span: (f32, f32),
    /// (start, end) distance below the center.
    pub down_span: (f32, f32),
    pub side_offset: f32,
}

impl ProbeGeometry {
    pub fn from_def(def: &ProbeDef, scale: &PixelScale) -> Self {
        Self {
            up_span: (
                scale.to_world_len(def.up_span.0),
                scale.to_world_len(def.up_span.1),
            ),
            down_span: (
                scale.to_world_len(def.down_span.0),
                scale.to_world_len(def.down_span.1),
            ),
            side_offset: scale.to_world_len(def.side_offset),
        }
    }

    /// Rays anchored at `center`, in cast order: up, left-down, right-down.
    pub fn rays(&self, center: Vec2) -> [ProbeRay; 3] {
        let (up_start, up_end) = self.up_span;
        let (down_start, down_end) = self.down_span;
        let side = self.side_offset;

        [
            ProbeRay {
                kind: RayKind::Up,
                start: center + Vec2::new(0.0, up_start),
                end: center + Vec2::new(0.0, up_end),
            },
            ProbeRay {
                kind: RayKind::LeftDown,
                start: center + Vec2::new(-side, -down_start),
                end: center + Vec2::new(-side, -down_end),
            },
            ProbeRay {
                kind: RayKind::RightDown,
                start: center + Vec2::new(side, -down_start),
                end: center + Vec2::new(side, -down_end),
            },
        ]
    }
}

/// Source of ray intersections.
///
/// `for_each_hit` calls `on_hit` once per fixture the segment crosses,
/// synchronously and in no particular order. Implementations must not mutate
/// the physics world while reporting.
pub trait RayQuery {
    fn for_each_hit(&self, ray: &ProbeRay, on_hit: &mut dyn FnMut(Entity));
}

/// Ray casts against the avian world.
pub struct PhysicsRays<'a, 'w, 's> {
    pub spatial_query: &'a SpatialQuery<'w, 's>,
    pub filter: SpatialQueryFilter,
}

impl RayQuery for PhysicsRays<'_, '_, '_> {
    fn for_each_hit(&self, ray: &ProbeRay, on_hit: &mut dyn FnMut(Entity)) {
        let offset = ray.end - ray.start;
        let Ok(direction) = Dir2::new(offset) else {
            return;
        };

        self.spatial_query.ray_hits_callback(
            ray.start,
            direction,
            offset.length(),
            true,
            &self.filter,
            |hit| {
                on_hit(hit.entity);
                true
            },
        );
    }
}

/// Outcome of one probe pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeReport {
    pub left_hit: bool,
    pub right_hit: bool,
    pub grounded: bool,
    /// Labels crossed by the up ray. Never affects grounding.
    pub overhead: Vec<FixtureLabel>,
}

/// Cast all probe rays and update `signal`.
///
/// Hit flags are cleared before casting and again after `is_grounded` has
/// been recomputed; the report keeps the flags of this pass. A hit on a
/// fixture missing from `registry` clears the flags and aborts the pass with
/// [`FixtureError::UnknownFixture`].
pub fn run_ground_probe(
    signal: &mut GroundSignal,
    rays: &[ProbeRay; 3],
    query: &impl RayQuery,
    registry: &FixtureRegistry,
) -> Result<ProbeReport, FixtureError> {
    signal.reset_hits();
    let mut overhead = Vec::new();

    for ray in rays {
        let mut hits = Vec::new();
        query.for_each_hit(ray, &mut |fixture| hits.push(fixture));

        for fixture in hits {
            let label = match registry.lookup(fixture) {
                Ok(label) => label,
                Err(err) => {
                    signal.reset_hits();
                    return Err(err);
                }
            };
            match ray.kind {
                RayKind::Up => overhead.push(label),
                RayKind::LeftDown => signal.left_hit |= label.is_walkable(),
                RayKind::RightDown => signal.right_hit |= label.is_walkable(),
            }
        }
    }

    let report = ProbeReport {
        left_hit: signal.left_hit,
        right_hit: signal.right_hit,
        grounded: signal.resolve(),
        overhead,
    };
    signal.reset_hits();

    Ok(report)
}
