//! Validation for scene configuration values.

use super::data::SceneConfig;
use crate::tween::Position;

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// Helper macro for pushing an error when a condition fails
macro_rules! check {
    ($errors:expr, $condition:expr, $field:expr, $($message:tt)+) => {
        if !$condition {
            $errors.push(ValidationError {
                field: $field,
                message: format!($($message)+),
            });
        }
    };
}

/// Validate a scene config.
/// Returns a list of validation errors, empty if the scene is usable.
pub fn validate_scene(config: &SceneConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Atlas geometry
    let atlas = &config.atlas;
    check!(
        errors,
        atlas.frames > 0,
        "atlas.frames",
        "a strip needs at least one frame"
    );
    check!(
        errors,
        atlas.frame_width > 0 && atlas.frame_height > 0,
        "atlas.frame_width",
        "frame size must be non-zero, got {}x{}",
        atlas.frame_width,
        atlas.frame_height
    );
    let strip_width = u64::from(atlas.frames) * u64::from(atlas.frame_width);
    check!(
        errors,
        strip_width <= u64::from(atlas.image_width),
        "atlas.image_width",
        "{} frames of width {} need {}px but the image is {}px wide",
        atlas.frames,
        atlas.frame_width,
        strip_width,
        atlas.image_width
    );
    check!(
        errors,
        atlas.frame_height <= atlas.image_height,
        "atlas.image_height",
        "frame height {} exceeds image height {}",
        atlas.frame_height,
        atlas.image_height
    );
    check!(
        errors,
        !atlas.animation.is_empty(),
        "atlas.animation",
        "animation name must not be empty"
    );

    // Coins
    check!(
        errors,
        config.coins.initial_scale > 0.0,
        "coins.initial_scale",
        "scale must be positive, got {}",
        config.coins.initial_scale
    );
    check!(
        errors,
        config.coins.animation_speed >= 0.0,
        "coins.animation_speed",
        "speed must not be negative, got {}",
        config.coins.animation_speed
    );

    // Motion groups
    let motion = &config.motion;
    check!(
        errors,
        !motion.groups.is_empty(),
        "motion.groups",
        "at least one angle group is required"
    );
    for (index, group) in motion.groups.iter().enumerate() {
        check!(
            errors,
            !group.angles.is_empty(),
            "motion.groups.angles",
            "group {} has no angles",
            index
        );
        check!(
            errors,
            group.angles.iter().all(|angle| angle.is_finite()),
            "motion.groups.angles",
            "group {} has a non-finite angle",
            index
        );
        check!(
            errors,
            group.delay >= 0.0,
            "motion.groups.delay",
            "group {} delay must not be negative, got {}",
            index,
            group.delay
        );
    }
    check!(
        errors,
        motion.total_coins() == config.coins.count,
        "coins.count",
        "{} coins configured but angle groups cover {}",
        config.coins.count,
        motion.total_coins()
    );

    if let Err(e) = motion.stagger.parse::<Position>() {
        errors.push(ValidationError {
            field: "motion.stagger",
            message: e.to_string(),
        });
    }

    // Tween tuning
    let tween = &motion.tween;
    check!(
        errors,
        tween.duration > 0.0,
        "motion.tween.duration",
        "duration must be positive, got {}",
        tween.duration
    );
    check!(
        errors,
        tween.delay >= 0.0,
        "motion.tween.delay",
        "delay must not be negative, got {}",
        tween.delay
    );
    check!(
        errors,
        tween.scale_range.0 <= tween.scale_range.1,
        "motion.tween.scale_range",
        "range is inverted: {:?}",
        tween.scale_range
    );
    check!(
        errors,
        tween.rotation_range.0 <= tween.rotation_range.1,
        "motion.tween.rotation_range",
        "range is inverted: {:?}",
        tween.rotation_range
    );
    check!(
        errors,
        tween.jitter_max >= 0.0,
        "motion.tween.jitter_max",
        "jitter must not be negative, got {}",
        tween.jitter_max
    );

    errors
}
