//! Core domain: screen-space pose shared by every scene sprite.

use bevy::prelude::*;

use crate::tween::PoseValues;

/// Position, scale, rotation and opacity of a sprite in screen space.
///
/// Rotation is in degrees, clockwise on screen. Tweens write into this
/// component; `sync_screen_poses` copies it to `Transform` and `Sprite`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ScreenPose {
    pub position: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub alpha: f32,
}

impl Default for ScreenPose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            alpha: 1.0,
        }
    }
}

impl ScreenPose {
    pub fn visible_at(position: Vec2, scale: f32) -> Self {
        Self {
            position,
            scale,
            ..default()
        }
    }

    pub fn hidden_at(position: Vec2, scale: f32) -> Self {
        Self {
            position,
            scale,
            alpha: 0.0,
            ..default()
        }
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }

    /// The tweenable part of the pose.
    pub fn values(&self) -> PoseValues {
        PoseValues {
            position: self.position,
            scale: self.scale,
            rotation: self.rotation,
        }
    }

    pub fn set_values(&mut self, values: PoseValues) {
        self.position = values.position;
        self.scale = values.scale;
        self.rotation = values.rotation;
    }
}
