//! Coins domain: spawning the coin population and the overlay.

use bevy::color::Alpha;
use bevy::prelude::*;

use super::components::{BrightnessOverlay, Coin};
use crate::content::SceneConfig;
use crate::core::{Screen, ScreenPose};
use crate::sprites::{CoinAtlas, FrameAnimation, SceneAssets, SceneLayer, frame_duration_for_speed};

/// Pose every coin starts from and returns to: centered and hidden.
pub fn resting_coin_pose(screen: &Screen, config: &SceneConfig) -> ScreenPose {
    ScreenPose::hidden_at(screen.center(), config.coins.initial_scale)
}

pub(crate) fn spawn_coins(
    mut commands: Commands,
    config: Res<SceneConfig>,
    screen: Res<Screen>,
    assets: Option<Res<SceneAssets>>,
    atlas: Option<Res<CoinAtlas>>,
) {
    let (Some(assets), Some(atlas)) = (assets, atlas) else {
        warn!("Coin atlas or spritesheet missing, no coins spawned");
        return;
    };

    let frame_duration = frame_duration_for_speed(config.coins.animation_speed);
    let first_frame = atlas.frames.first().copied().unwrap_or(0);

    for index in 0..config.coins.count {
        let mut sprite = Sprite::from_atlas_image(
            assets.spritesheet.clone(),
            TextureAtlas {
                layout: atlas.layout.clone(),
                index: first_frame,
            },
        );
        sprite.color.set_alpha(0.0);

        commands.spawn((
            Coin { index },
            resting_coin_pose(&screen, &config),
            FrameAnimation::new(atlas.frames.clone(), frame_duration),
            sprite,
            Transform::from_xyz(0.0, 0.0, SceneLayer::Coins.z_index()),
        ));
    }

    info!(
        "Spawned {} coins ({:.3}s per frame)",
        config.coins.count, frame_duration
    );
}

pub(crate) fn spawn_overlay(
    mut commands: Commands,
    screen: Res<Screen>,
    assets: Option<Res<SceneAssets>>,
) {
    let Some(assets) = assets else {
        warn!("Brightness image missing, no overlay spawned");
        return;
    };

    commands.spawn((
        BrightnessOverlay,
        ScreenPose::visible_at(screen.center(), 1.0),
        Sprite::from_image(assets.brightness.clone()),
        Transform::from_xyz(0.0, 0.0, SceneLayer::Overlay.z_index()),
    ));
}
