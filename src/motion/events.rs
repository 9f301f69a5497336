//! Motion domain: events for motion control.

use bevy::ecs::message::Message;

/// Request to rebuild all group timelines with fresh angle shuffles.
#[derive(Debug, Default)]
pub struct RestartMotion;

impl Message for RestartMotion {}
