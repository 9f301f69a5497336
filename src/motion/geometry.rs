//! Motion domain: flight path geometry in screen space.

use bevy::prelude::*;

use crate::content::JitterMode;
use crate::core::Screen;

/// Unit direction for an angle in degrees (screen space, y down).
fn direction(angle: f32) -> Vec2 {
    let radians = angle.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Point on the ray from the screen center at `angle`, one screen radius
/// out. Always at or past the visible edge.
pub fn edge_point(screen: &Screen, angle: f32) -> Vec2 {
    screen.center() + screen.radius() * direction(angle)
}

/// Distances drawn for a coin's starting offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterDraw {
    pub x: f32,
    pub y: f32,
}

/// Starting point near the center for a coin flying at `angle`.
///
/// `Legacy` scales both axes by the cosine of the angle, so the offset runs
/// along the diagonal rather than the flight direction. `Radial` uses the
/// `x` distance along the flight direction and ignores `y`.
pub fn jitter_start(center: Vec2, angle: f32, draw: JitterDraw, mode: JitterMode) -> Vec2 {
    let cos = angle.to_radians().cos();
    match mode {
        JitterMode::Legacy => center + Vec2::new(draw.x * cos, draw.y * cos),
        JitterMode::Radial => center + draw.x * direction(angle),
    }
}
