//! Core domain: shared resources for the boot flow.

use bevy::prelude::*;

/// Reasons the scene could not be started, shown on the failure notice.
#[derive(Resource, Debug, Default)]
pub struct BootFailure {
    pub messages: Vec<String>,
}
