//! Sprites domain: tests for atlas synthesis, playback, and preload gating.

use super::{
    AssetStatus, AtlasDescriptor, AtlasError, FrameAnimation, PreloadStatus, SceneLayer,
    frame_duration_for_speed, frame_name, summarize_preload,
};
use crate::content::AtlasDef;

fn coin_strip() -> AtlasDescriptor {
    AtlasDescriptor::horizontal_strip(&AtlasDef::default(), "spritesheet.png")
}

// -----------------------------------------------------------------------------
// Atlas descriptor tests
// -----------------------------------------------------------------------------

#[test]
fn test_strip_has_seven_named_frames() {
    let atlas = coin_strip();
    let names: Vec<&String> = atlas.frames.keys().collect();
    let expected: Vec<String> = (0..7).map(|i| format!("step{}", i)).collect();
    assert_eq!(names.len(), 7);
    for name in &expected {
        assert!(atlas.frames.contains_key(name), "missing {}", name);
    }
}

#[test]
fn test_strip_frames_are_contiguous_left_to_right() {
    let atlas = coin_strip();
    for index in 0..7 {
        let frame = &atlas.frames[&frame_name("step", index)];
        assert_eq!(frame.frame.x, index * 137);
        assert_eq!(frame.frame.y, 0);
        assert_eq!(frame.frame.w, 137);
        assert_eq!(frame.frame.h, 137);
        assert_eq!(frame.sprite_source_size.x, 0);
        assert_eq!(frame.source_size.w, 137);

        if index > 0 {
            let previous = &atlas.frames[&frame_name("step", index - 1)];
            assert_eq!(previous.frame.x + previous.frame.w, frame.frame.x);
        }
    }

    let last = &atlas.frames["step6"];
    assert!(last.frame.x + last.frame.w <= atlas.meta.size.w);
    assert_eq!(atlas.meta.size.w, 966);
    assert_eq!(atlas.meta.format, "RGBA8888");
}

#[test]
fn test_strip_animation_lists_frames_in_order() {
    let atlas = coin_strip();
    let expected: Vec<String> = (0..7).map(|i| format!("step{}", i)).collect();
    assert_eq!(atlas.animations["coin"], expected);
}

#[test]
fn test_descriptor_serializes_to_json_hash_layout() {
    let json = serde_json::to_value(coin_strip()).expect("serialize");
    assert_eq!(json["frames"]["step2"]["frame"]["x"], 274);
    assert_eq!(json["frames"]["step2"]["sourceSize"]["w"], 137);
    assert_eq!(json["frames"]["step2"]["spriteSourceSize"]["y"], 0);
    assert_eq!(json["meta"]["size"]["h"], 137);
    assert_eq!(json["animations"]["coin"][0], "step0");
}

// -----------------------------------------------------------------------------
// Atlas parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_builds_layout_in_animation_order() {
    let parsed = coin_strip().parse().expect("coin strip parses");
    assert_eq!(parsed.layout.len(), 7);

    let coin = parsed.animation("coin").expect("coin animation");
    assert_eq!(coin.len(), 7);
    for (position, index) in coin.iter().enumerate() {
        let rect = parsed.layout.textures[*index];
        assert_eq!(rect.min.x, position as u32 * 137);
        assert_eq!(rect.max.x, position as u32 * 137 + 137);
        assert_eq!(rect.min.y, 0);
        assert_eq!(rect.max.y, 137);
    }
}

#[test]
fn test_parse_keeps_index_order_past_ten_frames() {
    let def = AtlasDef {
        frames: 12,
        image_width: 12 * 137,
        ..AtlasDef::default()
    };
    let parsed = AtlasDescriptor::horizontal_strip(&def, "spritesheet.png")
        .parse()
        .expect("wide strip parses");

    assert_eq!(parsed.layout.len(), 12);
    for (index, rect) in parsed.layout.textures.iter().enumerate() {
        assert_eq!(rect.min.x, index as u32 * 137, "layout slot {}", index);
    }
    assert_eq!(parsed.animation("coin"), Some(&(0..12).collect::<Vec<_>>()[..]));
}

#[test]
fn test_parse_rejects_strip_wider_than_image() {
    let def = AtlasDef {
        frames: 8,
        ..AtlasDef::default()
    };
    let atlas = AtlasDescriptor::horizontal_strip(&def, "spritesheet.png");

    match atlas.parse() {
        Err(AtlasError::FrameOutOfBounds { frame, .. }) => assert_eq!(frame, "step7"),
        other => panic!("expected out of bounds, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_unknown_and_empty_animations() {
    let mut atlas = coin_strip();
    atlas
        .animations
        .insert("spin".to_string(), vec!["step9".to_string()]);
    let error = atlas.parse().unwrap_err();
    assert_eq!(
        error,
        AtlasError::UnknownFrame {
            animation: "spin".to_string(),
            frame: "step9".to_string(),
        }
    );
    assert!(error.to_string().contains("step9"));

    let mut atlas = coin_strip();
    atlas.animations.insert("idle".to_string(), Vec::new());
    assert!(matches!(
        atlas.parse(),
        Err(AtlasError::EmptyAnimation { .. })
    ));
}

// -----------------------------------------------------------------------------
// Frame playback tests
// -----------------------------------------------------------------------------

#[test]
fn test_frame_duration_for_speed() {
    assert!((frame_duration_for_speed(0.1666) - 0.1).abs() < 1e-3);
    assert!(frame_duration_for_speed(0.0).is_infinite());
}

#[test]
fn test_stopped_animation_does_not_advance() {
    let mut animation = FrameAnimation::new(vec![3, 4, 5], 0.1);
    assert!(!animation.tick(1.0));
    assert_eq!(animation.atlas_index(), 3);
}

#[test]
fn test_animation_loops_through_frames() {
    let mut animation = FrameAnimation::new(vec![3, 4, 5], 0.1);
    animation.play();

    assert!(animation.tick(0.15));
    assert_eq!(animation.atlas_index(), 4);
    assert!(animation.tick(0.1));
    assert_eq!(animation.atlas_index(), 5);
    assert!(animation.tick(0.1));
    assert_eq!(animation.atlas_index(), 3);
}

#[test]
fn test_play_resumes_without_resetting_frame() {
    let mut animation = FrameAnimation::new(vec![0, 1, 2, 3], 0.1);
    animation.play();
    animation.tick(0.25);
    assert_eq!(animation.current, 2);

    animation.stop();
    animation.play();
    assert_eq!(animation.current, 2);
}

#[test]
fn test_non_looping_animation_stops_on_last_frame() {
    let mut animation = FrameAnimation::new(vec![0, 1, 2], 0.1);
    animation.looping = false;
    animation.play();

    animation.tick(1.0);

    assert_eq!(animation.atlas_index(), 2);
    assert!(!animation.playing);
}

// -----------------------------------------------------------------------------
// Preload and layer tests
// -----------------------------------------------------------------------------

#[test]
fn test_preload_ready_when_all_loaded() {
    let statuses = [
        ("spritesheet", AssetStatus::Loaded),
        ("brightness", AssetStatus::Loaded),
    ];
    assert_eq!(summarize_preload(&statuses), PreloadStatus::Ready);
}

#[test]
fn test_preload_pending_lists_waiting_assets() {
    let statuses = [
        ("spritesheet", AssetStatus::Loaded),
        ("brightness", AssetStatus::Pending),
    ];
    assert_eq!(
        summarize_preload(&statuses),
        PreloadStatus::Pending {
            waiting: vec!["brightness"]
        }
    );
}

#[test]
fn test_preload_failure_wins_over_pending() {
    let statuses = [
        ("spritesheet", AssetStatus::Pending),
        ("brightness", AssetStatus::Failed("not found".to_string())),
    ];
    assert_eq!(
        summarize_preload(&statuses),
        PreloadStatus::Failed {
            alias: "brightness",
            message: "not found".to_string(),
        }
    );
}

#[test]
fn test_overlay_renders_above_coins() {
    assert!(SceneLayer::Overlay.z_index() > SceneLayer::Coins.z_index());
}
