//! Core domain: shared resources for screen geometry and randomness.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::SceneConfig;

/// Logical size of the primary window, refreshed every frame.
///
/// Scene code works in screen space (origin top-left, y down) so that
/// positions read the same way a 2D canvas would. `to_world` maps them into
/// bevy's centered, y-up world space for the default 2D camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Screen {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from the center to any corner.
    pub fn radius(&self) -> f32 {
        let center = self.center();
        (center.x.powi(2) + center.y.powi(2)).sqrt()
    }

    /// Convert a screen-space point to world space.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

/// Seeded RNG shared by every random draw in the scene.
#[derive(Resource, Debug)]
pub struct MotionRng {
    seed: u64,
    rng: ChaCha8Rng,
}

impl MotionRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }
}

impl FromWorld for MotionRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<SceneConfig>()
            .and_then(|config| config.seed)
            .unwrap_or_else(|| rand::rng().random());
        Self::from_seed(seed)
    }
}
