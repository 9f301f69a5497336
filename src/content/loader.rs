//! Loader for the RON scene configuration at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::SceneConfig;
use super::validation::validate_scene;

/// Default location of the scene file, relative to the working directory.
pub const SCENE_CONFIG_PATH: &str = "assets/data/scene.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Severity of a note gathered while loading, logged once logging is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLevel {
    Info,
    Warn,
    Error,
}

/// Outcome of loading the scene file: the config to run with, plus notes
/// to log once the app's logger exists.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    pub config: SceneConfig,
    pub notes: Vec<(NoteLevel, String)>,
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a scene config from RON text.
pub fn parse_scene_config(contents: &str, file: &str) -> Result<SceneConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a scene config from a RON file.
pub fn load_scene_config(path: &Path) -> Result<SceneConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_scene_config(&contents, &file_name)
}

/// Load and validate the scene file, falling back to the stock scene when
/// it is missing, unreadable, or invalid.
pub fn load_scene(path: &Path) -> LoadedScene {
    let mut notes = Vec::new();

    if !path.exists() {
        notes.push((
            NoteLevel::Warn,
            format!(
                "Scene config not found at {:?}, using built-in scene",
                path
            ),
        ));
        return LoadedScene {
            config: SceneConfig::default(),
            notes,
        };
    }

    let config = match load_scene_config(path) {
        Ok(config) => config,
        Err(e) => {
            notes.push((NoteLevel::Error, e.to_string()));
            notes.push((NoteLevel::Warn, "Using built-in scene".to_string()));
            return LoadedScene {
                config: SceneConfig::default(),
                notes,
            };
        }
    };

    let errors = validate_scene(&config);
    if !errors.is_empty() {
        for error in &errors {
            notes.push((NoteLevel::Error, format!("{}: {}", path.display(), error)));
        }
        notes.push((
            NoteLevel::Warn,
            format!(
                "Scene config has {} problem(s), using built-in scene",
                errors.len()
            ),
        ));
        return LoadedScene {
            config: SceneConfig::default(),
            notes,
        };
    }

    notes.push((
        NoteLevel::Info,
        format!(
            "Loaded scene config v{} from {}",
            config.schema_version,
            path.display()
        ),
    ));
    LoadedScene { config, notes }
}
