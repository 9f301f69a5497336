//! Motion domain: starting, restarting, and tracking the coin flights.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::director::plan_motion;
use super::events::RestartMotion;
use crate::coins::{Coin, resting_coin_pose};
use crate::content::SceneConfig;
use crate::core::{MotionRng, Screen, ScreenPose};
use crate::sprites::FrameAnimation;
use crate::tween::{Offset, Position, TweenCompleted, TweenStarted};

/// Timeline entity for one group of coins.
#[derive(Component, Debug, Clone)]
pub struct MotionGroup {
    pub index: usize,
    /// Shuffled launch angles, in coin order.
    pub angles: Vec<f32>,
}

/// Running totals of coin flights.
#[derive(Resource, Debug, Default)]
pub struct MotionStats {
    pub launches: u64,
    pub landings: u64,
}

/// Plan and spawn group timelines. Returns the coins' new start poses.
fn launch_groups(
    commands: &mut Commands,
    config: &SceneConfig,
    screen: &Screen,
    rng: &mut MotionRng,
    mut coins: Vec<(usize, Entity, ScreenPose)>,
) -> Vec<(Entity, ScreenPose)> {
    coins.sort_by_key(|(index, ..)| *index);
    let mut flights: Vec<(Entity, ScreenPose)> = coins
        .into_iter()
        .map(|(_, entity, pose)| (entity, pose))
        .collect();

    let stagger = config.motion.stagger.parse::<Position>().unwrap_or_else(|e| {
        error!("{}, falling back to '<5%'", e);
        Position::PreviousStart(Offset::Percent(5.0))
    });

    let plans = plan_motion(&config.motion, stagger, screen, &mut flights, rng.rng());

    let covered = config.motion.total_coins();
    if flights.len() != covered {
        warn!(
            "{} coins spawned but angle groups cover {}",
            flights.len(),
            covered
        );
    }

    for plan in plans {
        info!(
            "Motion group {}: angles {:?}, delay {:.1}s, pass {:.2}s",
            plan.index,
            plan.angles,
            plan.timeline.delay,
            plan.timeline.duration()
        );
        commands.spawn((
            MotionGroup {
                index: plan.index,
                angles: plan.angles,
            },
            plan.timeline,
        ));
    }

    flights
}

pub(crate) fn start_motion(
    mut commands: Commands,
    config: Res<SceneConfig>,
    screen: Res<Screen>,
    mut rng: ResMut<MotionRng>,
    mut coins: Query<(Entity, &Coin, &mut ScreenPose)>,
) {
    let snapshot = coins
        .iter()
        .map(|(entity, coin, pose)| (coin.index, entity, *pose))
        .collect();

    let flights = launch_groups(&mut commands, &config, &screen, &mut rng, snapshot);

    for (entity, pose) in flights {
        if let Ok((_, _, mut current)) = coins.get_mut(entity) {
            *current = pose;
        }
    }
}

/// Tear down the running timelines and launch fresh ones with new shuffles.
pub(crate) fn handle_restart_requests(
    mut requests: MessageReader<RestartMotion>,
    mut commands: Commands,
    config: Res<SceneConfig>,
    screen: Res<Screen>,
    mut rng: ResMut<MotionRng>,
    groups: Query<Entity, With<MotionGroup>>,
    mut coins: Query<(Entity, &Coin, &mut ScreenPose, &mut FrameAnimation)>,
) {
    if requests.read().count() == 0 {
        return;
    }

    for entity in &groups {
        commands.entity(entity).despawn();
    }

    let resting = resting_coin_pose(&screen, &config);
    for (_, _, mut pose, mut animation) in &mut coins {
        *pose = resting;
        animation.stop();
        animation.current = 0;
        animation.frame_timer = 0.0;
    }

    let snapshot = coins
        .iter()
        .map(|(entity, coin, pose, _)| (coin.index, entity, *pose))
        .collect();

    let flights = launch_groups(&mut commands, &config, &screen, &mut rng, snapshot);

    for (entity, pose) in flights {
        if let Ok((_, _, mut current, _)) = coins.get_mut(entity) {
            *current = pose;
        }
    }

    info!("Motion restarted");
}

pub(crate) fn track_coin_flights(
    mut started: MessageReader<TweenStarted>,
    mut completed: MessageReader<TweenCompleted>,
    mut stats: ResMut<MotionStats>,
) {
    let launches = started.read().count() as u64;
    let landings = completed.read().count() as u64;
    if launches > 0 || landings > 0 {
        stats.launches += launches;
        stats.landings += landings;
    }
}
