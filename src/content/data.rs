//! Data definitions for the scene configuration file.
//!
//! These structs mirror assets/data/scene.ron. Lengths and positions are
//! authored in canvas pixels (y down) and converted to world units through
//! [`PixelScale`] when the scene is spawned.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::physics::FixtureLabel;

// ============================================================================
// Scene root (scene.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct SceneConfig {
    pub pixels_per_meter: f32,
    /// Canvas size in pixels (width, height).
    pub viewport: (f32, f32),
    /// Downward acceleration in world units per second squared.
    pub gravity: f32,
    /// Solver substeps per physics step.
    pub velocity_iterations: u32,
    pub clear_color: (f32, f32, f32),
    pub movement: MovementDef,
    pub probe: ProbeDef,
    pub bodies: Vec<BodyDef>,
}

impl SceneConfig {
    pub fn scale(&self) -> PixelScale {
        PixelScale {
            pixels_per_meter: self.pixels_per_meter,
            viewport_height: self.viewport.1,
        }
    }

    /// The viewport center in world units.
    pub fn world_center(&self) -> Vec2 {
        self.scale()
            .to_world_point(Vec2::new(self.viewport.0 / 2.0, self.viewport.1 / 2.0))
    }

    /// Returns a one-line summary of the scene for logging.
    pub fn summary(&self) -> String {
        let labels: Vec<String> = self.bodies.iter().map(|b| b.label.to_string()).collect();
        format!(
            "{} bodies [{}], {} px/m, gravity {}, {} velocity iterations",
            self.bodies.len(),
            labels.join(", "),
            self.pixels_per_meter,
            self.gravity,
            self.velocity_iterations
        )
    }
}

// ============================================================================
// Movement and probe tuning
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovementDef {
    /// Upward speed applied on jump, world units per second.
    pub jump_velocity: f32,
    pub walk_speed: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ProbeDef {
    /// Up ray (start, end) distance above the player center, pixels.
    pub up_span: (f32, f32),
    /// Down rays (start, end) distance below the player center, pixels.
    pub down_span: (f32, f32),
    /// Horizontal offset of each down ray from the player center, pixels.
    pub side_offset: f32,
    pub ray_color: (f32, f32, f32),
    pub ray_width: f32,
}

// ============================================================================
// Bodies
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum BodyKind {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub enum ShapeDef {
    Circle { radius: f32 },
    /// Full width and height, not half extents.
    Box { width: f32, height: f32 },
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct BodyDef {
    pub label: FixtureLabel,
    pub kind: BodyKind,
    /// Center position in canvas pixels.
    pub position: (f32, f32),
    #[serde(default)]
    pub angle_degrees: f32,
    #[serde(default)]
    pub fixed_rotation: bool,
    pub shape: ShapeDef,
    pub friction: f32,
    pub density: f32,
}

// ============================================================================
// Pixel <-> world conversion
// ============================================================================

/// Converts canvas pixels (y down) into world units (y up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    pub pixels_per_meter: f32,
    pub viewport_height: f32,
}

impl PixelScale {
    pub fn to_world_len(&self, pixels: f32) -> f32 {
        pixels / self.pixels_per_meter
    }

    pub fn to_world_point(&self, pixels: Vec2) -> Vec2 {
        Vec2::new(
            pixels.x / self.pixels_per_meter,
            (self.viewport_height - pixels.y) / self.pixels_per_meter,
        )
    }
}
