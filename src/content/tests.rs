//! Content domain: tests for scene config defaults, parsing, and validation.

use std::path::Path;

use super::{
    JitterMode, NoteLevel, SceneConfig, load_scene, parse_scene_config, validate_scene,
};
use crate::tween::Ease;

const SHIPPED_SCENE: &str = include_str!("../../assets/data/scene.ron");

// -----------------------------------------------------------------------------
// Default scene tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_scene_is_valid() {
    let errors = validate_scene(&SceneConfig::default());
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_default_scene_matches_stock_constants() {
    let config = SceneConfig::default();

    assert_eq!(config.coins.count, 21);
    assert_eq!(config.coins.initial_scale, 0.5);
    assert_eq!(config.coins.animation_speed, 0.1666);
    assert_eq!(config.atlas.frames * config.atlas.frame_width, 959);
    assert_eq!(config.atlas.image_width, 966);
    assert_eq!(config.assets.spritesheet, "spritesheet.png");
    assert_eq!(config.assets.brightness, "brightness.png");

    let delays: Vec<f32> = config.motion.groups.iter().map(|g| g.delay).collect();
    assert_eq!(delays, vec![0.0, 0.7, 1.8]);
    assert!(config.motion.groups.iter().all(|g| g.angles.len() == 7));
    assert_eq!(config.motion.stagger, "<5%");

    let tween = &config.motion.tween;
    assert_eq!(tween.duration, 3.0);
    assert_eq!(tween.ease, Ease::None);
    assert_eq!(tween.scale_range, (0.8, 1.4));
    assert_eq!(tween.rotation_range, (0.0, 180.0));
    assert_eq!(tween.jitter_max, 50.0);
    assert_eq!(tween.jitter, JitterMode::Legacy);
    assert!(config.seed.is_none());
}

#[test]
fn test_shipped_scene_file_matches_defaults() {
    let config = parse_scene_config(SHIPPED_SCENE, "scene.ron").expect("shipped scene parses");
    assert_eq!(config, SceneConfig::default());
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_partial_scene_fills_defaults() {
    let config = parse_scene_config("(seed: 7, coins: (animation_speed: 0.25))", "inline")
        .expect("partial scene parses");

    assert_eq!(config.seed, Some(7));
    assert_eq!(config.coins.animation_speed, 0.25);
    assert_eq!(config.coins.count, 21);
    assert_eq!(config.motion, SceneConfig::default().motion);
}

#[test]
fn test_radial_jitter_and_ease_parse() {
    let config = parse_scene_config(
        "(motion: (tween: (jitter: Radial, ease: QuadOut)))",
        "inline",
    )
    .expect("tween overrides parse");

    assert_eq!(config.motion.tween.jitter, JitterMode::Radial);
    assert_eq!(config.motion.tween.ease, Ease::QuadOut);
    assert_eq!(config.motion.tween.duration, 3.0);
}

#[test]
fn test_parse_error_names_file() {
    let error = parse_scene_config("(coins: (count: \"many\"))", "broken.ron").unwrap_err();
    assert_eq!(error.file, "broken.ron");
    assert!(error.to_string().starts_with("Failed to load broken.ron"));
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_validation_flags_coin_count_mismatch() {
    let mut config = SceneConfig::default();
    config.coins.count = 20;

    let errors = validate_scene(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "coins.count");
    assert!(errors[0].message.contains("21"));
}

#[test]
fn test_validation_flags_strip_wider_than_image() {
    let mut config = SceneConfig::default();
    config.atlas.frames = 8;

    let errors = validate_scene(&config);
    assert!(errors.iter().any(|e| e.field == "atlas.image_width"));
}

#[test]
fn test_validation_flags_bad_tween_tuning() {
    let mut config = SceneConfig::default();
    config.motion.tween.duration = 0.0;
    config.motion.tween.scale_range = (1.4, 0.8);
    config.motion.stagger = "<later".to_string();

    let fields: Vec<&str> = validate_scene(&config).iter().map(|e| e.field).collect();
    assert!(fields.contains(&"motion.tween.duration"));
    assert!(fields.contains(&"motion.tween.scale_range"));
    assert!(fields.contains(&"motion.stagger"));
}

#[test]
fn test_validation_flags_empty_group() {
    let mut config = SceneConfig::default();
    config.motion.groups[1].angles.clear();
    config.coins.count = 14;

    let errors = validate_scene(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "motion.groups.angles");
    assert!(errors[0].to_string().contains("group 1"));
}

// -----------------------------------------------------------------------------
// Loader tests
// -----------------------------------------------------------------------------

#[test]
fn test_missing_scene_file_uses_defaults() {
    let loaded = load_scene(Path::new("does/not/exist/scene.ron"));

    assert_eq!(loaded.config, SceneConfig::default());
    assert_eq!(loaded.notes.len(), 1);
    assert_eq!(loaded.notes[0].0, NoteLevel::Warn);
}

#[test]
fn test_shipped_scene_file_loads_from_disk() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/scene.ron");
    let loaded = load_scene(&path);

    assert_eq!(loaded.config, SceneConfig::default());
    assert!(
        loaded
            .notes
            .iter()
            .all(|(level, _)| *level == NoteLevel::Info)
    );
}
