//! Motion domain: angle shuffling, per-coin tween configs, group timelines.

use bevy::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

use super::geometry::{JitterDraw, edge_point, jitter_start};
use crate::content::{MotionDef, TweenTuningDef};
use crate::core::{Screen, ScreenPose};
use crate::tween::{PoseValues, Position, Repeat, Timeline, TweenAction, TweenConfig};

/// Uniform draw in `[min, max)`; returns `min` when the range is empty.
pub fn random_between<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.random::<f32>() * (max - min) + min
}

/// Shuffled copy of `values`.
pub fn shuffle_array<T: Clone, R: Rng>(values: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = values.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Place the coin at its jittered start and describe its flight to the
/// screen edge along `angle` (degrees).
pub fn move_coin_config<R: Rng>(
    pose: &mut ScreenPose,
    screen: &Screen,
    angle: f32,
    delay: f32,
    tuning: &TweenTuningDef,
    rng: &mut R,
) -> TweenConfig {
    let edge = edge_point(screen, angle);
    let scale = random_between(rng, tuning.scale_range.0, tuning.scale_range.1);

    let draw = JitterDraw {
        x: random_between(rng, 0.0, tuning.jitter_max),
        y: random_between(rng, 0.0, tuning.jitter_max),
    };
    pose.position = jitter_start(screen.center(), angle, draw, tuning.jitter);

    let rotation = random_between(rng, tuning.rotation_range.0, tuning.rotation_range.1);

    TweenConfig {
        to: PoseValues {
            position: edge,
            scale,
            rotation,
        },
        ease: tuning.ease,
        duration: tuning.duration,
        delay,
        on_start: vec![TweenAction::Show, TweenAction::Play],
        on_complete: vec![TweenAction::Hide],
    }
}

/// One motion group: its shuffled angles and timeline.
#[derive(Debug, Clone)]
pub struct GroupPlan {
    pub index: usize,
    pub angles: Vec<f32>,
    pub timeline: Timeline,
}

/// Build one infinitely repeating timeline per angle group.
///
/// `coins` must be in spawn order; groups take consecutive runs of coins,
/// one coin per angle. Coin poses are moved to their jittered start points.
/// Angles without a coin are left unused.
pub fn plan_motion<R: Rng>(
    motion: &MotionDef,
    stagger: Position,
    screen: &Screen,
    coins: &mut [(Entity, ScreenPose)],
    rng: &mut R,
) -> Vec<GroupPlan> {
    let shuffled: Vec<Vec<f32>> = motion
        .groups
        .iter()
        .map(|group| shuffle_array(&group.angles, rng))
        .collect();

    let mut plans = Vec::with_capacity(motion.groups.len());
    let mut cursor = 0;

    for (index, (group, angles)) in motion.groups.iter().zip(shuffled).enumerate() {
        let end = (cursor + angles.len()).min(coins.len());
        let mut timeline = Timeline::new(Repeat::Infinite).with_delay(group.delay);

        for ((entity, pose), angle) in coins[cursor..end].iter_mut().zip(&angles) {
            let config = move_coin_config(pose, screen, *angle, motion.tween.delay, &motion.tween, rng);
            timeline.add(*entity, config, stagger);
        }

        cursor = end;
        plans.push(GroupPlan {
            index,
            angles,
            timeline,
        });
    }

    plans
}
