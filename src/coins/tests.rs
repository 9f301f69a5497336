//! Coins domain: tests for coin population and overlay placement.

use bevy::color::Alpha;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::spawn::{spawn_coins, spawn_overlay};
use super::{BrightnessOverlay, Coin, resting_coin_pose};
use crate::content::SceneConfig;
use crate::core::{Screen, ScreenPose};
use crate::sprites::{CoinAtlas, FrameAnimation, SceneAssets};

fn scene_world() -> World {
    let mut world = World::new();
    world.insert_resource(SceneConfig::default());
    world.insert_resource(Screen::new(800.0, 600.0));
    world.insert_resource(SceneAssets {
        spritesheet: Handle::default(),
        brightness: Handle::default(),
    });
    world.insert_resource(CoinAtlas {
        layout: Handle::default(),
        frames: (0..7).collect(),
    });
    world
}

#[test]
fn test_spawn_coins_creates_hidden_half_scale_coins() {
    let mut world = scene_world();
    world.run_system_once(spawn_coins).expect("spawn_coins runs");

    let mut query = world.query::<(&Coin, &ScreenPose, &FrameAnimation, &Sprite, &Transform)>();
    let coins: Vec<_> = query.iter(&world).collect();
    assert_eq!(coins.len(), 21);

    for (_, pose, animation, sprite, transform) in &coins {
        assert_eq!(pose.alpha, 0.0);
        assert_eq!(pose.scale, 0.5);
        assert_eq!(pose.rotation, 0.0);
        assert_eq!(pose.position, Vec2::new(400.0, 300.0));
        assert_eq!(sprite.color.alpha(), 0.0);
        assert_eq!(animation.frames.len(), 7);
        assert!(!animation.playing);
        assert!(sprite.texture_atlas.is_some());
        assert_eq!(transform.translation.z, 0.0);
    }

    let mut indices: Vec<usize> = coins.iter().map(|(coin, ..)| coin.index).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..21).collect::<Vec<_>>());
}

#[test]
fn test_spawn_coins_without_atlas_spawns_nothing() {
    let mut world = scene_world();
    world.remove_resource::<CoinAtlas>();
    world.run_system_once(spawn_coins).expect("spawn_coins runs");

    let mut query = world.query::<&Coin>();
    assert_eq!(query.iter(&world).count(), 0);
}

#[test]
fn test_overlay_is_centered_and_on_top() {
    let mut world = scene_world();
    world.run_system_once(spawn_coins).expect("spawn_coins runs");
    world.run_system_once(spawn_overlay).expect("spawn_overlay runs");

    let mut query = world.query_filtered::<(&ScreenPose, &Transform), With<BrightnessOverlay>>();
    let overlays: Vec<_> = query.iter(&world).collect();
    assert_eq!(overlays.len(), 1);

    let (pose, transform) = overlays[0];
    assert_eq!(pose.position, Vec2::new(400.0, 300.0));
    assert!(pose.is_visible());
    assert!(transform.translation.z > 0.0);
}

#[test]
fn test_resting_pose_follows_screen_center() {
    let config = SceneConfig::default();
    let pose = resting_coin_pose(&Screen::new(1920.0, 1080.0), &config);
    assert_eq!(pose.position, Vec2::new(960.0, 540.0));
    assert_eq!(pose.scale, config.coins.initial_scale);
    assert!(!pose.is_visible());
}
