//! Coins domain: marker components for scene sprites.

use bevy::prelude::*;

/// An animated coin. `index` is its spawn order, which decides its motion
/// group.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub index: usize,
}

/// The static brightness overlay.
#[derive(Component, Debug, Default)]
pub struct BrightnessOverlay;
