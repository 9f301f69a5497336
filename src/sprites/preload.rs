//! Scene image handles and load-state bookkeeping.

use bevy::asset::LoadState;
use bevy::prelude::*;

pub const SPRITESHEET_ALIAS: &str = "spritesheet";
pub const BRIGHTNESS_ALIAS: &str = "brightness";

/// Handles for the two images the scene needs before it can start.
#[derive(Resource, Debug, Clone)]
pub struct SceneAssets {
    pub spritesheet: Handle<Image>,
    pub brightness: Handle<Image>,
}

impl SceneAssets {
    pub fn named(&self) -> [(&'static str, &Handle<Image>); 2] {
        [
            (SPRITESHEET_ALIAS, &self.spritesheet),
            (BRIGHTNESS_ALIAS, &self.brightness),
        ]
    }
}

/// Load state of one asset, reduced to what the preload gate cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed(String),
}

impl From<&LoadState> for AssetStatus {
    fn from(state: &LoadState) -> Self {
        match state {
            LoadState::Loaded => AssetStatus::Loaded,
            LoadState::Failed(error) => AssetStatus::Failed(error.to_string()),
            _ => AssetStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadStatus {
    Ready,
    Pending { waiting: Vec<&'static str> },
    Failed { alias: &'static str, message: String },
}

/// Combine per-asset statuses. Any failure wins over pending assets.
pub fn summarize_preload(statuses: &[(&'static str, AssetStatus)]) -> PreloadStatus {
    if let Some((alias, AssetStatus::Failed(message))) = statuses
        .iter()
        .find(|(_, status)| matches!(status, AssetStatus::Failed(_)))
    {
        return PreloadStatus::Failed {
            alias: *alias,
            message: message.clone(),
        };
    }

    let waiting: Vec<&'static str> = statuses
        .iter()
        .filter(|(_, status)| *status == AssetStatus::Pending)
        .map(|(alias, _)| *alias)
        .collect();

    if waiting.is_empty() {
        PreloadStatus::Ready
    } else {
        PreloadStatus::Pending { waiting }
    }
}
