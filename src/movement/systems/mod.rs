//! Movement domain: system modules for locomotion updates.

pub(crate) mod controller;
pub(crate) mod input;
pub(crate) mod probe;
pub(crate) mod setup;

pub(crate) use controller::apply_player_controller;
pub(crate) use input::read_input;
pub(crate) use probe::probe_ground;
pub(crate) use setup::apply_scene_tuning;
