//! Core domain: camera, screen tracking, and pose sync systems.

use bevy::color::Alpha;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::components::ScreenPose;
use crate::core::resources::{MotionRng, Screen};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_motion_seed(rng: Res<MotionRng>) {
    info!("Scene seed: {}", rng.seed());
}

/// Keep `Screen` in step with the primary window so resizes re-center
/// newly computed flight paths.
pub(crate) fn update_screen(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut screen: ResMut<Screen>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let current = Screen::new(window.width(), window.height());
    if screen.set_if_neq(current) {
        debug!("Screen resized to {}x{}", current.width, current.height);
    }
}

/// Build the world transform for a screen-space pose, keeping the given z.
pub fn pose_transform(screen: &Screen, pose: &ScreenPose, z: f32) -> Transform {
    let world = screen.to_world(pose.position);
    Transform {
        translation: world.extend(z),
        rotation: Quat::from_rotation_z(-pose.rotation.to_radians()),
        scale: Vec3::new(pose.scale, pose.scale, 1.0),
    }
}

pub(crate) fn sync_screen_poses(
    screen: Res<Screen>,
    mut query: Query<(&ScreenPose, &mut Transform, &mut Sprite)>,
) {
    for (pose, mut transform, mut sprite) in &mut query {
        *transform = pose_transform(&screen, pose, transform.translation.z);
        sprite.color.set_alpha(pose.alpha);
    }
}
