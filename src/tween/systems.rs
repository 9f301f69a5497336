//! Tween domain: applying timeline events to scene entities.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::events::{TweenCompleted, TweenStarted};
use super::timeline::{Timeline, TimelineEventKind, TweenAction};
use crate::core::ScreenPose;
use crate::sprites::FrameAnimation;

/// Apply start/complete actions to a tween target.
pub fn apply_actions(
    actions: &[TweenAction],
    pose: &mut ScreenPose,
    mut animation: Option<&mut FrameAnimation>,
) {
    for action in actions {
        match action {
            TweenAction::Show => pose.alpha = 1.0,
            TweenAction::Hide => pose.alpha = 0.0,
            TweenAction::Play => {
                if let Some(animation) = animation.as_deref_mut() {
                    animation.play();
                }
            }
            TweenAction::Stop => {
                if let Some(animation) = animation.as_deref_mut() {
                    animation.stop();
                }
            }
        }
    }
}

/// Advance every timeline and write the results into target poses.
pub fn drive_timelines(
    time: Res<Time>,
    mut timelines: Query<(Entity, &mut Timeline)>,
    mut targets: Query<(&mut ScreenPose, Option<&mut FrameAnimation>)>,
    mut started: MessageWriter<TweenStarted>,
    mut completed: MessageWriter<TweenCompleted>,
) {
    let dt = time.delta_secs();

    for (timeline_entity, mut timeline) in &mut timelines {
        let events = timeline.advance(dt);

        for event in events {
            let Some(entry) = timeline.entry_mut(event.entry) else {
                continue;
            };
            let Ok((mut pose, mut animation)) = targets.get_mut(entry.target) else {
                continue;
            };

            match event.kind {
                TimelineEventKind::Started => {
                    let from = *entry.from.get_or_insert_with(|| pose.values());
                    pose.set_values(from);
                    apply_actions(&entry.config.on_start, &mut pose, animation.as_deref_mut());
                    started.write(TweenStarted {
                        timeline: timeline_entity,
                        target: entry.target,
                    });
                }
                TimelineEventKind::Progress(progress) => {
                    let from = entry.from.unwrap_or_else(|| pose.values());
                    pose.set_values(from.lerp(&entry.config.to, progress));
                }
                TimelineEventKind::Completed => {
                    pose.set_values(entry.config.to);
                    apply_actions(
                        &entry.config.on_complete,
                        &mut pose,
                        animation.as_deref_mut(),
                    );
                    completed.write(TweenCompleted {
                        timeline: timeline_entity,
                        target: entry.target,
                    });
                }
            }
        }
    }
}
