//! Debug hotkeys for iterating on the scene (feature `dev-tools`).
//!
//! - Space: pause or resume every timeline
//! - R: restart the motion with fresh angle shuffles
//! - Ctrl+S: log the seed and flight counts

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::coins::Coin;
use crate::core::{AppState, MotionRng, ScreenPose};
use crate::motion::{MotionStats, RestartMotion};
use crate::sprites::FrameAnimation;
use crate::tween::Timeline;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub paused: bool,
}

impl DebugState {
    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            handle_debug_hotkeys.run_if(in_state(AppState::Running)),
        );
    }
}

/// Handle keyboard shortcuts for debug actions
fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut timelines: Query<&mut Timeline>,
    mut coins: Query<(&ScreenPose, &mut FrameAnimation), With<Coin>>,
    mut restart: MessageWriter<RestartMotion>,
    rng: Res<MotionRng>,
    stats: Res<MotionStats>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);

    // Space: pause/resume
    if keyboard.just_pressed(KeyCode::Space) {
        let paused = debug_state.toggle_pause();
        for mut timeline in &mut timelines {
            timeline.paused = paused;
        }
        // Hidden coins get playback back when their next flight starts.
        for (pose, mut animation) in &mut coins {
            if paused {
                animation.stop();
            } else if pose.is_visible() {
                animation.play();
            }
        }
        info!("[DEBUG] Timelines {}", if paused { "paused" } else { "resumed" });
    }

    // R: restart with new shuffles
    if !ctrl && keyboard.just_pressed(KeyCode::KeyR) {
        debug_state.paused = false;
        restart.write(RestartMotion);
        info!("[DEBUG] Restarting motion");
    }

    // Ctrl+S: report seed
    if ctrl && keyboard.just_pressed(KeyCode::KeyS) {
        info!(
            "[DEBUG] Seed: {}, launches: {}, landings: {}",
            rng.seed(),
            stats.launches,
            stats.landings
        );
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::prelude::*;

    use super::{DebugState, handle_debug_hotkeys};
    use crate::coins::Coin;
    use crate::core::{MotionRng, ScreenPose};
    use crate::motion::{MotionStats, RestartMotion};
    use crate::sprites::FrameAnimation;
    use crate::tween::{Repeat, Timeline};

    fn press_space(world: &mut World) {
        let mut keyboard = ButtonInput::<KeyCode>::default();
        keyboard.press(KeyCode::Space);
        world.insert_resource(keyboard);
        world
            .run_system_once(handle_debug_hotkeys)
            .expect("handle_debug_hotkeys runs");
    }

    fn coin(world: &mut World, index: usize, pose: ScreenPose) -> Entity {
        let mut animation = FrameAnimation::new((0..7).collect(), 0.1);
        animation.play();
        world.spawn((Coin { index }, pose, animation)).id()
    }

    #[test]
    fn test_toggle_pause() {
        let mut state = DebugState::default();
        assert!(state.toggle_pause());
        assert!(!state.toggle_pause());
    }

    #[test]
    fn test_space_pauses_timelines_and_coin_playback() {
        let mut world = World::new();
        world.init_resource::<DebugState>();
        world.init_resource::<MotionStats>();
        world.init_resource::<Messages<RestartMotion>>();
        world.insert_resource(MotionRng::from_seed(1));

        let timeline = world.spawn(Timeline::new(Repeat::Infinite)).id();
        let flying = coin(&mut world, 0, ScreenPose::visible_at(Vec2::ZERO, 1.0));
        let resting = coin(&mut world, 1, ScreenPose::hidden_at(Vec2::ZERO, 0.5));

        press_space(&mut world);
        assert!(world.resource::<DebugState>().paused);
        assert!(world.get::<Timeline>(timeline).unwrap().paused);
        assert!(!world.get::<FrameAnimation>(flying).unwrap().playing);
        assert!(!world.get::<FrameAnimation>(resting).unwrap().playing);

        press_space(&mut world);
        assert!(!world.resource::<DebugState>().paused);
        assert!(!world.get::<Timeline>(timeline).unwrap().paused);
        assert!(world.get::<FrameAnimation>(flying).unwrap().playing);
        assert!(!world.get::<FrameAnimation>(resting).unwrap().playing);
    }
}
