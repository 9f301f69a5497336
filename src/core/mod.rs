//! Core domain: app state, screen geometry, shared RNG and pose sync.

mod components;
mod resources;
mod state;
mod systems;


pub use components::ScreenPose;
pub use resources::{MotionRng, Screen};
pub use state::{AppState, SceneSetup, SceneSystems};
pub use systems::pose_transform;

use bevy::prelude::*;

use crate::core::systems::{log_motion_seed, setup_camera, sync_screen_poses, update_screen};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<Screen>()
            .init_resource::<MotionRng>()
            .configure_sets(
                OnEnter(AppState::Running),
                (SceneSetup::Atlas, SceneSetup::Spawn, SceneSetup::Motion).chain(),
            )
            .configure_sets(
                Update,
                (
                    SceneSystems::Motion,
                    SceneSystems::Playback,
                    SceneSystems::Sync,
                )
                    .chain(),
            )
            .add_systems(Startup, (setup_camera, update_screen, log_motion_seed))
            .add_systems(PreUpdate, update_screen)
            .add_systems(Update, sync_screen_poses.in_set(SceneSystems::Sync));
    }
}
