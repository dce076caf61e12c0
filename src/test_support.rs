//! Shared test doubles: an axis-aligned box world answering probe rays.

use bevy::prelude::*;

use crate::content::{SceneConfig, parse_scene_config};
use crate::movement::{ProbeRay, RayQuery};
use crate::physics::{FixtureLabel, FixtureRegistry};

pub const REFERENCE_SCENE: &str = include_str!("../assets/data/scene.ron");

pub fn reference_scene() -> SceneConfig {
    parse_scene_config("reference", REFERENCE_SCENE).unwrap()
}

/// Static boxes, each standing in for one collider.
#[derive(Default)]
pub struct BoxWorld {
    entities: World,
    pub boxes: Vec<(Entity, Rect)>,
    pub registry: FixtureRegistry,
}

impl BoxWorld {
    /// Add a labelled box given its center and full size.
    pub fn add(&mut self, label: FixtureLabel, center: Vec2, size: Vec2) -> Entity {
        let entity = self.add_unregistered(center, size);
        self.registry.register(entity, label).unwrap();
        entity
    }

    pub fn add_unregistered(&mut self, center: Vec2, size: Vec2) -> Entity {
        let entity = self.entities.spawn_empty().id();
        self.boxes.push((entity, Rect::from_center_size(center, size)));
        entity
    }

    /// Top edge of the box registered for `entity`.
    pub fn top(&self, entity: Entity) -> f32 {
        self.boxes
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, rect)| rect.max.y)
            .unwrap()
    }
}

impl RayQuery for BoxWorld {
    fn for_each_hit(&self, ray: &ProbeRay, on_hit: &mut dyn FnMut(Entity)) {
        for (entity, rect) in &self.boxes {
            if segment_hits_rect(ray.start, ray.end, rect) {
                on_hit(*entity);
            }
        }
    }
}

/// Slab test between a segment and an axis-aligned rectangle.
fn segment_hits_rect(start: Vec2, end: Vec2, rect: &Rect) -> bool {
    let delta = end - start;
    let mut t_min = 0.0_f32;
    let mut t_max = 1.0_f32;

    for axis in 0..2 {
        let (origin, dir) = (start[axis], delta[axis]);
        let (lo, hi) = (rect.min[axis], rect.max[axis]);

        if dir.abs() < f32::EPSILON {
            if origin < lo || origin > hi {
                return false;
            }
            continue;
        }

        let (mut t0, mut t1) = ((lo - origin) / dir, (hi - origin) / dir);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return false;
        }
    }

    true
}
