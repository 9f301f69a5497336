//! Frame playback for atlas-backed sprites.

use bevy::prelude::*;

/// Ticks per second the animation speed is expressed against.
pub const TICKS_PER_SECOND: f32 = 60.0;

/// Convert a speed in frames per tick into seconds per frame.
pub fn frame_duration_for_speed(speed: f32) -> f32 {
    if speed <= 0.0 {
        f32::INFINITY
    } else {
        1.0 / (speed * TICKS_PER_SECOND)
    }
}

/// Component for frame playback on an atlas sprite.
#[derive(Component, Debug, Clone)]
pub struct FrameAnimation {
    /// Atlas indices in playback order.
    pub frames: Vec<usize>,
    /// Position in `frames`.
    pub current: usize,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub playing: bool,
    pub looping: bool,
}

impl FrameAnimation {
    /// A stopped, looping animation on its first frame.
    pub fn new(frames: Vec<usize>, frame_duration: f32) -> Self {
        Self {
            frames,
            current: 0,
            frame_timer: 0.0,
            frame_duration,
            playing: false,
            looping: true,
        }
    }

    /// Resume from the current frame.
    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn atlas_index(&self) -> usize {
        self.frames.get(self.current).copied().unwrap_or(0)
    }

    /// Advance by `dt`; returns true when the displayed frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.playing || self.frames.len() < 2 || !self.frame_duration.is_finite() {
            return false;
        }

        let start = self.current;
        self.frame_timer += dt;

        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;

            if self.current + 1 < self.frames.len() {
                self.current += 1;
            } else if self.looping {
                self.current = 0;
            } else {
                self.frame_timer = 0.0;
                self.playing = false;
                break;
            }
        }

        self.current != start
    }
}

/// System that updates animation frames based on time.
pub fn update_frame_animations(
    time: Res<Time>,
    mut query: Query<(&mut FrameAnimation, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    for (mut animation, mut sprite) in &mut query {
        if !animation.tick(dt) {
            continue;
        }
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = animation.atlas_index();
        }
    }
}
