//! Content domain: scene configuration loaded from RON.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::*;
pub use loader::{
    ConfigLoadError, LoadedScene, NoteLevel, SCENE_CONFIG_PATH, load_scene, load_scene_config,
    parse_scene_config,
};
pub use validation::{ValidationError, validate_scene};

use bevy::prelude::*;

/// Notes gathered while loading the scene file, before logging was up.
#[derive(Resource, Debug, Default)]
struct SceneLoadNotes(Vec<(NoteLevel, String)>);

pub struct ContentPlugin {
    scene: LoadedScene,
}

impl ContentPlugin {
    pub fn new(scene: LoadedScene) -> Self {
        Self { scene }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SceneConfig>()
            .insert_resource(self.scene.config.clone())
            .insert_resource(SceneLoadNotes(self.scene.notes.clone()))
            .add_systems(Startup, report_scene_notes);
    }
}

fn report_scene_notes(mut notes: ResMut<SceneLoadNotes>) {
    for (level, message) in notes.0.drain(..) {
        match level {
            NoteLevel::Info => info!("{}", message),
            NoteLevel::Warn => warn!("{}", message),
            NoteLevel::Error => error!("{}", message),
        }
    }
}
