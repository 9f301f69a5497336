//! Tween domain: eased tweens grouped into repeating timelines.
//!
//! This module handles:
//! - Easing curves
//! - Timeline construction with relative insertion positions
//! - Per-frame timeline playback onto `ScreenPose` targets
//! - Start/complete actions (show, hide, frame playback)

mod ease;
mod events;
mod systems;
mod timeline;


pub use ease::Ease;
pub use events::{TweenCompleted, TweenStarted};
pub use systems::{apply_actions, drive_timelines};
pub use timeline::{
    Offset, PoseValues, Position, PositionParseError, Repeat, Timeline, TimelineEntry,
    TimelineEvent, TimelineEventKind, TweenAction, TweenConfig,
};

use bevy::prelude::*;

use crate::core::SceneSystems;

pub struct TweenPlugin;

impl Plugin for TweenPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TweenStarted>()
            .add_message::<TweenCompleted>()
            .add_systems(Update, drive_timelines.in_set(SceneSystems::Motion));
    }
}
