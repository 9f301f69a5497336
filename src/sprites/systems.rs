//! Sprites domain: asset preload gate and coin atlas construction.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::atlas::{AtlasDescriptor, CoinAtlas};
use super::preload::{AssetStatus, PreloadStatus, SceneAssets, summarize_preload};
use crate::content::SceneConfig;
use crate::core::AppState;

/// Request both scene images from the asset server.
pub(crate) fn request_scene_assets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let assets = SceneAssets {
        spritesheet: asset_server.load(config.assets.spritesheet.clone()),
        brightness: asset_server.load(config.assets.brightness.clone()),
    };
    info!(
        "Loading scene assets: {}, {}",
        config.assets.spritesheet, config.assets.brightness
    );
    commands.insert_resource(assets);
}

/// Hold the app in `Loading` until both images are ready. A failed load
/// ends the app.
pub(crate) fn poll_scene_assets(
    asset_server: Res<AssetServer>,
    assets: Res<SceneAssets>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: MessageWriter<AppExit>,
    mut reported: Local<bool>,
) {
    let statuses: Vec<(&'static str, AssetStatus)> = assets
        .named()
        .into_iter()
        .map(|(alias, handle)| (alias, AssetStatus::from(&asset_server.load_state(handle.id()))))
        .collect();

    match summarize_preload(&statuses) {
        PreloadStatus::Ready => {
            info!("Scene assets loaded");
            next_state.set(AppState::Running);
        }
        PreloadStatus::Pending { .. } => {}
        PreloadStatus::Failed { alias, message } => {
            if !*reported {
                error!("Failed to load asset '{}': {}", alias, message);
                exit.write(AppExit::error());
                *reported = true;
            }
        }
    }
}

/// Synthesize the coin strip atlas and register its layout.
pub(crate) fn build_coin_atlas(
    mut commands: Commands,
    config: Res<SceneConfig>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    mut exit: MessageWriter<AppExit>,
) {
    let descriptor = AtlasDescriptor::horizontal_strip(&config.atlas, &config.assets.spritesheet);
    match serde_json::to_string(&descriptor) {
        Ok(json) => debug!("Coin atlas descriptor: {}", json),
        Err(e) => warn!("Could not serialize coin atlas descriptor: {}", e),
    }

    let parsed = match descriptor.parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Failed to build coin atlas: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let Some(frames) = parsed.animation(&config.atlas.animation).map(<[usize]>::to_vec) else {
        error!(
            "Coin atlas has no animation named '{}'",
            config.atlas.animation
        );
        exit.write(AppExit::error());
        return;
    };

    info!(
        "Coin atlas ready: {} frames, animation '{}'",
        parsed.layout.len(),
        config.atlas.animation
    );

    let layout = layouts.add(parsed.layout);
    commands.insert_resource(CoinAtlas { layout, frames });
}
