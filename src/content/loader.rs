//! Loader for the RON scene configuration at startup.

use ron::Options;

use super::data::SceneConfig;

/// The reference scene, embedded so the web build needs no file system.
pub const SCENE_SOURCE: &str = "assets/data/scene.ron";
const SCENE_RON: &str = include_str!("../../assets/data/scene.ron");

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a scene configuration from RON text. `source` names the origin in
/// error messages.
pub fn parse_scene_config(source: &str, contents: &str) -> Result<SceneConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: source.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the embedded reference scene.
pub fn load_scene_config() -> Result<SceneConfig, ContentLoadError> {
    parse_scene_config(SCENE_SOURCE, SCENE_RON)
}
