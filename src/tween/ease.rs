//! Easing curves for tween progress.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Maps linear progress in `[0, 1]` to eased progress in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum Ease {
    /// Linear.
    #[default]
    None,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicOut,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}
