//! Physics domain: fixture metadata registry.
//!
//! Colliders are identified by their `Entity`, which avian reports on every
//! ray hit. The registry is a write-once side table from that handle to a
//! semantic label, filled while the scene is spawned and read during probing.

use std::collections::HashMap;
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Semantic label of a scene fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum FixtureLabel {
    Ground,
    Player,
    FirstPlatform,
    SecondPlatform,
}

impl FixtureLabel {
    /// Surfaces the player can stand on.
    pub fn is_walkable(self) -> bool {
        matches!(
            self,
            FixtureLabel::Ground | FixtureLabel::FirstPlatform | FixtureLabel::SecondPlatform
        )
    }

    pub fn is_platform(self) -> bool {
        matches!(
            self,
            FixtureLabel::FirstPlatform | FixtureLabel::SecondPlatform
        )
    }
}

impl fmt::Display for FixtureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FixtureLabel::Ground => "ground",
            FixtureLabel::Player => "player",
            FixtureLabel::FirstPlatform => "first platform",
            FixtureLabel::SecondPlatform => "second platform",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureError {
    /// A ray hit a collider that was never registered.
    UnknownFixture(Entity),
    AlreadyRegistered {
        fixture: Entity,
        existing: FixtureLabel,
    },
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::UnknownFixture(fixture) => {
                write!(f, "fixture {} has no registered label", fixture)
            }
            FixtureError::AlreadyRegistered { fixture, existing } => {
                write!(f, "fixture {} is already registered as '{}'", fixture, existing)
            }
        }
    }
}

impl std::error::Error for FixtureError {}

#[derive(Resource, Debug, Default)]
pub struct FixtureRegistry {
    labels: HashMap<Entity, FixtureLabel>,
}

impl FixtureRegistry {
    pub fn register(&mut self, fixture: Entity, label: FixtureLabel) -> Result<(), FixtureError> {
        if let Some(existing) = self.labels.get(&fixture) {
            return Err(FixtureError::AlreadyRegistered {
                fixture,
                existing: *existing,
            });
        }
        self.labels.insert(fixture, label);
        Ok(())
    }

    pub fn lookup(&self, fixture: Entity) -> Result<FixtureLabel, FixtureError> {
        self.labels
            .get(&fixture)
            .copied()
            .ok_or(FixtureError::UnknownFixture(fixture))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}
