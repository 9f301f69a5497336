//! Motion domain: coins flying out from the center along shuffled angles.
//!
//! Coins are split into consecutive groups. Each group gets its own
//! infinitely repeating timeline with a start delay, and each coin in a
//! group flies from a jittered point near the center to one screen radius
//! out, scaling and spinning on the way.

mod director;
mod events;
mod geometry;
mod systems;


pub use director::{GroupPlan, move_coin_config, plan_motion, random_between, shuffle_array};
pub use events::RestartMotion;
pub use geometry::{JitterDraw, edge_point, jitter_start};
pub use systems::{MotionGroup, MotionStats};

use bevy::prelude::*;

use crate::core::{AppState, SceneSetup, SceneSystems};
use crate::motion::systems::{handle_restart_requests, start_motion, track_coin_flights};

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MotionStats>()
            .add_message::<RestartMotion>()
            .add_systems(
                OnEnter(AppState::Running),
                start_motion.in_set(SceneSetup::Motion),
            )
            .add_systems(
                Update,
                (
                    handle_restart_requests
                        .before(SceneSystems::Motion)
                        .run_if(in_state(AppState::Running)),
                    track_coin_flights.after(SceneSystems::Motion),
                ),
            );
    }
}
