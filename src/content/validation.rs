//! Validation for scene configuration values.

use std::collections::HashSet;

use super::data::*;
use crate::physics::FixtureLabel;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub context: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field '{}' {}", self.context, self.field, self.message)
    }
}

/// Helper macro for checking that a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $context:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                context: $context.to_string(),
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Helper macro for checking that a value is zero or positive
macro_rules! check_non_negative {
    ($errors:expr, $context:expr, $field:expr, $value:expr) => {
        if !($value >= 0.0) {
            $errors.push(ValidationError {
                context: $context.to_string(),
                field: $field,
                message: format!("must not be negative, got {}", $value),
            });
        }
    };
}

/// Validate the whole scene.
/// Returns a list of validation errors, empty if the scene is usable.
pub fn validate_scene(scene: &SceneConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, "Scene", "pixels_per_meter", scene.pixels_per_meter);
    check_positive!(errors, "Scene", "viewport.width", scene.viewport.0);
    check_positive!(errors, "Scene", "viewport.height", scene.viewport.1);
    check_positive!(errors, "Scene", "gravity", scene.gravity);
    if scene.velocity_iterations == 0 {
        errors.push(ValidationError {
            context: "Scene".to_string(),
            field: "velocity_iterations",
            message: "must be at least 1".to_string(),
        });
    }

    check_positive!(errors, "Movement", "jump_velocity", scene.movement.jump_velocity);
    check_positive!(errors, "Movement", "walk_speed", scene.movement.walk_speed);

    validate_probe(&scene.probe, &mut errors);
    validate_bodies(&scene.bodies, &mut errors);

    errors
}

fn validate_probe(probe: &ProbeDef, errors: &mut Vec<ValidationError>) {
    for (field, (start, end)) in [("up_span", probe.up_span), ("down_span", probe.down_span)] {
        check_non_negative!(errors, "Probe", field, start);
        if end <= start {
            errors.push(ValidationError {
                context: "Probe".to_string(),
                field,
                message: format!("end ({}) must lie beyond start ({})", end, start),
            });
        }
    }
    check_non_negative!(errors, "Probe", "side_offset", probe.side_offset);
    check_positive!(errors, "Probe", "ray_width", probe.ray_width);
}

fn validate_bodies(bodies: &[BodyDef], errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut players = 0;

    for body in bodies {
        let context = format!("Body '{}'", body.label);

        if !seen.insert(body.label) {
            errors.push(ValidationError {
                context: context.clone(),
                field: "label",
                message: "is used by more than one body".to_string(),
            });
        }

        if body.label == FixtureLabel::Player {
            players += 1;
            if body.kind != BodyKind::Dynamic {
                errors.push(ValidationError {
                    context: context.clone(),
                    field: "kind",
                    message: "player body must be Dynamic".to_string(),
                });
            }
        }

        match body.shape {
            ShapeDef::Circle { radius } => {
                check_positive!(errors, context, "shape.radius", radius);
            }
            ShapeDef::Box { width, height } => {
                check_positive!(errors, context, "shape.width", width);
                check_positive!(errors, context, "shape.height", height);
            }
        }

        check_non_negative!(errors, context, "friction", body.friction);
        check_non_negative!(errors, context, "density", body.density);
    }

    if players != 1 {
        errors.push(ValidationError {
            context: "Scene".to_string(),
            field: "bodies",
            message: format!("must contain exactly one Player body, found {}", players),
        });
    }
}
