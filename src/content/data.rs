//! Data definitions for the scene configuration file.
//!
//! These structs mirror the structure of assets/data/scene.ron. Every field
//! has a default, and the defaults describe the stock coin burst scene.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tween::Ease;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SceneConfig {
    pub schema_version: u32,
    pub window: WindowDef,
    pub assets: AssetPathsDef,
    pub atlas: AtlasDef,
    pub coins: CoinDef,
    pub motion: MotionDef,
    /// Fixed seed for reproducible runs. A random seed is used when absent.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            window: WindowDef::default(),
            assets: AssetPathsDef::default(),
            atlas: AtlasDef::default(),
            coins: CoinDef::default(),
            motion: MotionDef::default(),
            seed: None,
        }
    }
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct WindowDef {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowDef {
    fn default() -> Self {
        Self {
            title: "Coin Burst".to_string(),
            width: 1280,
            height: 720,
            resizable: true,
        }
    }
}

// ============================================================================
// Assets and atlas geometry
// ============================================================================

/// Paths relative to the assets/ directory.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct AssetPathsDef {
    pub spritesheet: String,
    pub brightness: String,
}

impl Default for AssetPathsDef {
    fn default() -> Self {
        Self {
            spritesheet: "spritesheet.png".to_string(),
            brightness: "brightness.png".to_string(),
        }
    }
}

/// A single-row strip of equally sized frames.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct AtlasDef {
    pub frames: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub frame_prefix: String,
    pub animation: String,
}

impl Default for AtlasDef {
    fn default() -> Self {
        Self {
            frames: 7,
            frame_width: 137,
            frame_height: 137,
            image_width: 966,
            image_height: 137,
            frame_prefix: "step".to_string(),
            animation: "coin".to_string(),
        }
    }
}

// ============================================================================
// Coins
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CoinDef {
    pub count: usize,
    pub initial_scale: f32,
    /// Frames advanced per 60 Hz tick.
    pub animation_speed: f32,
}

impl Default for CoinDef {
    fn default() -> Self {
        Self {
            count: 21,
            initial_scale: 0.5,
            animation_speed: 0.1666,
        }
    }
}

// ============================================================================
// Motion
// ============================================================================

/// How a coin's starting point is nudged off center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum JitterMode {
    /// Independent x and y distances, both scaled by the cosine of the angle.
    #[default]
    Legacy,
    /// One distance along the flight direction.
    Radial,
}

/// One group of coins sharing a timeline.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct AngleGroupDef {
    /// Launch angles in degrees, one per coin.
    pub angles: Vec<f32>,
    /// Seconds before the group's timeline first plays.
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct TweenTuningDef {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    pub scale_range: (f32, f32),
    pub rotation_range: (f32, f32),
    pub jitter_max: f32,
    pub jitter: JitterMode,
}

impl Default for TweenTuningDef {
    fn default() -> Self {
        Self {
            duration: 3.0,
            delay: 0.0,
            ease: Ease::None,
            scale_range: (0.8, 1.4),
            rotation_range: (0.0, 180.0),
            jitter_max: 50.0,
            jitter: JitterMode::Legacy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct MotionDef {
    pub groups: Vec<AngleGroupDef>,
    /// Timeline position of each tween relative to the previous one.
    pub stagger: String,
    pub tween: TweenTuningDef,
}

impl Default for MotionDef {
    fn default() -> Self {
        Self {
            groups: vec![
                AngleGroupDef {
                    angles: vec![12.0, 40.0, 90.0, 130.0, 200.0, 280.0, 360.0],
                    delay: 0.0,
                },
                AngleGroupDef {
                    angles: vec![35.0, 66.0, 110.0, 180.0, 240.0, 290.0, 355.0],
                    delay: 0.7,
                },
                AngleGroupDef {
                    angles: vec![10.0, 55.0, 90.0, 130.0, 220.0, 260.0, 310.0],
                    delay: 1.8,
                },
            ],
            stagger: "<5%".to_string(),
            tween: TweenTuningDef::default(),
        }
    }
}

impl MotionDef {
    /// Coins consumed by all groups together.
    pub fn total_coins(&self) -> usize {
        self.groups.iter().map(|group| group.angles.len()).sum()
    }
}
