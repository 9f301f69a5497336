//! Sprites module for the coin atlas and frame playback.
//!
//! This module handles:
//! - Loading the spritesheet and overlay images before the scene starts
//! - Synthesizing the coin atlas frame table
//! - Frame playback on animated sprites
//! - Render layer ordering

pub mod animation;
pub mod atlas;
pub mod layers;
pub mod preload;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use atlas::*;
pub use layers::*;
pub use preload::*;

use crate::core::{AppState, SceneSetup, SceneSystems};
use crate::sprites::systems::{build_coin_atlas, poll_scene_assets, request_scene_assets};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, request_scene_assets)
            .add_systems(
                Update,
                poll_scene_assets.run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                OnEnter(AppState::Running),
                build_coin_atlas.in_set(SceneSetup::Atlas),
            )
            .add_systems(
                Update,
                update_frame_animations.in_set(SceneSystems::Playback),
            );
    }
}
