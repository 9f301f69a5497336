//! Tween configs and repeating timelines.
//!
//! A `Timeline` owns an ordered list of tweens, each placed at a resolved
//! start time. Advancing a timeline is pure: it returns the start, progress,
//! and completion events for this tick and leaves applying them to entities
//! to `drive_timelines`.

#![allow(dead_code)]

use bevy::prelude::*;
use std::str::FromStr;

use super::ease::Ease;

/// The tweenable values of a sprite pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseValues {
    pub position: Vec2,
    pub scale: f32,
    /// Degrees.
    pub rotation: f32,
}

impl PoseValues {
    pub fn lerp(&self, to: &PoseValues, t: f32) -> PoseValues {
        PoseValues {
            position: self.position.lerp(to.position, t),
            scale: self.scale + (to.scale - self.scale) * t,
            rotation: self.rotation + (to.rotation - self.rotation) * t,
        }
    }
}

/// Side effects fired when a tween starts or completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenAction {
    /// Set opacity to 1.
    Show,
    /// Set opacity to 0.
    Hide,
    /// Resume frame playback.
    Play,
    /// Pause frame playback.
    Stop,
}

/// Destination pose and timing of one tween.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenConfig {
    pub to: PoseValues,
    pub ease: Ease,
    /// Seconds.
    pub duration: f32,
    /// Seconds added to the tween's position in its timeline.
    pub delay: f32,
    pub on_start: Vec<TweenAction>,
    pub on_complete: Vec<TweenAction>,
}

/// How many times a timeline plays after the first pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Infinite,
    Count(u32),
}

impl From<i32> for Repeat {
    /// Negative counts repeat forever.
    fn from(count: i32) -> Self {
        if count < 0 {
            Repeat::Infinite
        } else {
            Repeat::Count(count as u32)
        }
    }
}

/// Offset relative to a previous entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    Seconds(f32),
    /// Percent of the previous entry's duration.
    Percent(f32),
}

impl Offset {
    fn resolve(self, duration: f32) -> f32 {
        match self {
            Offset::Seconds(seconds) => seconds,
            Offset::Percent(percent) => duration * percent / 100.0,
        }
    }
}

/// Where a tween is inserted into a timeline.
///
/// Parses the usual position strings: `""` or `">"` (end of timeline),
/// `"<"` / `"<5%"` / `"<0.2"` (start of the previous entry plus an offset),
/// `">5%"` / `">0.2"` (end of the previous entry plus an offset),
/// `"+=0.5"` / `"-=0.5"` (relative to the end of the timeline) and a bare
/// number of seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    End,
    PreviousStart(Offset),
    PreviousEnd(Offset),
    Relative(f32),
    Absolute(f32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionParseError {
    pub input: String,
    pub reason: &'static str,
}

impl std::fmt::Display for PositionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid timeline position '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for PositionParseError {}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let error = |reason: &'static str| PositionParseError {
            input: input.to_string(),
            reason,
        };

        if trimmed.is_empty() || trimmed == ">" {
            return Ok(Position::End);
        }
        if let Some(rest) = trimmed.strip_prefix('<') {
            return parse_offset(rest).map(Position::PreviousStart).map_err(error);
        }
        if let Some(rest) = trimmed.strip_prefix('>') {
            return parse_offset(rest).map(Position::PreviousEnd).map_err(error);
        }
        if let Some(rest) = trimmed.strip_prefix("+=") {
            return parse_seconds(rest).map(Position::Relative).map_err(error);
        }
        if let Some(rest) = trimmed.strip_prefix("-=") {
            return parse_seconds(rest)
                .map(|seconds| Position::Relative(-seconds))
                .map_err(error);
        }

        let seconds = parse_seconds(trimmed).map_err(error)?;
        if seconds < 0.0 {
            return Err(error("absolute position must not be negative"));
        }
        Ok(Position::Absolute(seconds))
    }
}

fn parse_seconds(text: &str) -> Result<f32, &'static str> {
    match text.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err("expected a number of seconds"),
    }
}

fn parse_offset(text: &str) -> Result<Offset, &'static str> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Offset::Seconds(0.0));
    }
    match text.strip_suffix('%') {
        Some(percent) => match percent.trim().parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(Offset::Percent(value)),
            _ => Err("expected a percentage"),
        },
        None => parse_seconds(text).map(Offset::Seconds),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryState {
    Pending,
    Active,
    Done,
}

/// A tween placed in a timeline.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub target: Entity,
    pub config: TweenConfig,
    /// Insertion time in seconds, before the tween's own delay.
    pub position: f32,
    /// Start pose, captured the first time the tween starts.
    pub from: Option<PoseValues>,
    state: EntryState,
}

impl TimelineEntry {
    pub fn start(&self) -> f32 {
        self.position + self.config.delay
    }

    pub fn end(&self) -> f32 {
        self.start() + self.config.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEventKind {
    Started,
    /// Eased progress in `[0, 1]`.
    Progress(f32),
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEvent {
    /// Index into the timeline's entries.
    pub entry: usize,
    pub kind: TimelineEventKind,
}

/// A repeating sequence of tweens.
#[derive(Component, Debug, Clone)]
pub struct Timeline {
    /// Seconds before the first pass. Repeats start immediately.
    pub delay: f32,
    pub repeat: Repeat,
    pub paused: bool,
    entries: Vec<TimelineEntry>,
    /// Time spent waiting out `delay`.
    waited: f32,
    /// Time into the current pass. Wraps on every repeat.
    elapsed: f32,
    iteration: u32,
    finished: bool,
}

impl Timeline {
    pub fn new(repeat: Repeat) -> Self {
        Self {
            delay: 0.0,
            repeat,
            paused: false,
            entries: Vec::new(),
            waited: 0.0,
            elapsed: 0.0,
            iteration: 0,
            finished: false,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Insert a tween and return its resolved position.
    pub fn add(&mut self, target: Entity, config: TweenConfig, position: Position) -> f32 {
        let position = self.resolve(position);
        self.entries.push(TimelineEntry {
            target,
            config,
            position,
            from: None,
            state: EntryState::Pending,
        });
        position
    }

    fn resolve(&self, position: Position) -> f32 {
        let end = self.duration();
        let previous = self.entries.last();
        let resolved = match position {
            Position::End => end,
            Position::PreviousStart(offset) => previous.map_or(0.0, |entry| {
                entry.start() + offset.resolve(entry.config.duration)
            }),
            Position::PreviousEnd(offset) => previous.map_or(end, |entry| {
                entry.end() + offset.resolve(entry.config.duration)
            }),
            Position::Relative(seconds) => end + seconds,
            Position::Absolute(seconds) => seconds,
        };
        resolved.max(0.0)
    }

    /// Length of one pass, excluding the timeline delay.
    pub fn duration(&self) -> f32 {
        self.entries
            .iter()
            .map(TimelineEntry::end)
            .fold(0.0, f32::max)
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut TimelineEntry> {
        self.entries.get_mut(index)
    }

    /// Seconds into the current pass.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Zero-based index of the current pass.
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance by `dt` seconds and report what happened, in entry order.
    pub fn advance(&mut self, dt: f32) -> Vec<TimelineEvent> {
        let mut events = Vec::new();
        if self.paused || self.finished || self.entries.is_empty() {
            return events;
        }

        let mut dt = dt;
        if self.waited < self.delay {
            let remaining = self.delay - self.waited;
            if dt < remaining {
                self.waited += dt;
                return events;
            }
            self.waited = self.delay;
            dt -= remaining;
        }

        let duration = self.duration();
        let last_iteration = match self.repeat {
            Repeat::Infinite => u32::MAX,
            Repeat::Count(count) => count,
        };

        if duration <= 0.0 {
            // Instant timelines play one pass per tick.
            self.render(0.0, &mut events);
            self.iteration = self.iteration.saturating_add(1);
            if self.iteration > last_iteration {
                self.finished = true;
            } else {
                self.reset_entries();
            }
            return events;
        }

        self.elapsed += dt;
        let crossed = (self.elapsed / duration).floor();
        if crossed < 1.0 {
            self.render(self.elapsed, &mut events);
            return events;
        }

        // Close out the pass we are leaving before restarting entries.
        self.render(duration, &mut events);

        let crossed = crossed.min(u32::MAX as f32) as u32;
        let target = self.iteration.saturating_add(crossed);
        let finite = matches!(self.repeat, Repeat::Count(_));
        if finite && (target > last_iteration || self.iteration == last_iteration) {
            if self.iteration < last_iteration {
                // Skipped straight past the final pass; play it out whole.
                self.reset_entries();
                self.iteration = last_iteration;
                self.render(duration, &mut events);
            }
            self.elapsed = duration;
            self.finished = true;
            return events;
        }

        self.reset_entries();
        self.iteration = target;
        self.elapsed = (self.elapsed - crossed as f32 * duration).clamp(0.0, duration);
        self.render(self.elapsed, &mut events);
        events
    }

    fn render(&mut self, time: f32, events: &mut Vec<TimelineEvent>) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.state == EntryState::Done || time < entry.start() {
                continue;
            }

            if entry.state == EntryState::Pending {
                entry.state = EntryState::Active;
                events.push(TimelineEvent {
                    entry: index,
                    kind: TimelineEventKind::Started,
                });
            }

            let progress = if entry.config.duration > 0.0 {
                ((time - entry.start()) / entry.config.duration).clamp(0.0, 1.0)
            } else {
                1.0
            };
            events.push(TimelineEvent {
                entry: index,
                kind: TimelineEventKind::Progress(entry.config.ease.apply(progress)),
            });

            if progress >= 1.0 {
                entry.state = EntryState::Done;
                events.push(TimelineEvent {
                    entry: index,
                    kind: TimelineEventKind::Completed,
                });
            }
        }
    }

    fn reset_entries(&mut self) {
        for entry in &mut self.entries {
            entry.state = EntryState::Pending;
        }
    }
}
