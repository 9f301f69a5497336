//! Coins domain: the animated coin population and the brightness overlay.

mod components;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{BrightnessOverlay, Coin};
pub use spawn::resting_coin_pose;

use bevy::prelude::*;

use crate::coins::spawn::{spawn_coins, spawn_overlay};
use crate::core::{AppState, SceneSetup};

pub struct CoinsPlugin;

impl Plugin for CoinsPlugin {
    fn build(&self, app: &mut App) {
        // Overlay after coins, matching its place on top of them.
        app.add_systems(
            OnEnter(AppState::Running),
            (spawn_coins, spawn_overlay)
                .chain()
                .in_set(SceneSetup::Spawn),
        );
    }
}
