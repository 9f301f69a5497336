//! Core domain: application state for the asset-gated scene flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum AppState {
    /// Waiting on the spritesheet and overlay images.
    #[default]
    Loading,
    /// Scene built, timelines running.
    Running,
}

/// Ordering of the per-frame scene work inside `Update`.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum SceneSystems {
    /// Timelines advance and write tweened poses.
    Motion,
    /// Frame playback on animated sprites.
    Playback,
    /// Screen-space poses are copied into transforms and sprite colors.
    Sync,
}

/// Ordering of scene construction when entering `AppState::Running`.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum SceneSetup {
    Atlas,
    Spawn,
    Motion,
}
