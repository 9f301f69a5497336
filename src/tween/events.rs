//! Tween domain: messages for tween lifecycle.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when a tween begins a pass.
#[derive(Debug)]
pub struct TweenStarted {
    pub timeline: Entity,
    pub target: Entity,
}

impl Message for TweenStarted {}

/// Fired when a tween reaches its destination.
#[derive(Debug)]
pub struct TweenCompleted {
    pub timeline: Entity,
    pub target: Entity,
}

impl Message for TweenCompleted {}
