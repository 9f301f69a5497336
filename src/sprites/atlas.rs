//! Atlas descriptor synthesis and parsing.
//!
//! The coin spritesheet ships without metadata, so its frame table is built
//! in code. `AtlasDescriptor` mirrors the common JSON-hash atlas layout
//! (`frames` / `meta` / `animations`) so it can be dumped for inspection,
//! and `parse` turns it into a bevy `TextureAtlasLayout`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::content::AtlasDef;

/// Pixel rectangle inside the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrameSize {
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtlasFrame {
    pub frame: FrameRect,
    pub source_size: FrameSize,
    pub sprite_source_size: FrameRect,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AtlasMeta {
    pub image: String,
    pub format: String,
    pub size: FrameSize,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AtlasDescriptor {
    pub frames: BTreeMap<String, AtlasFrame>,
    pub meta: AtlasMeta,
    /// Animation name to frame names, in playback order.
    pub animations: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlasError {
    FrameOutOfBounds {
        frame: String,
        rect: FrameRect,
        image: FrameSize,
    },
    UnknownFrame {
        animation: String,
        frame: String,
    },
    EmptyAnimation {
        animation: String,
    },
}

impl std::fmt::Display for AtlasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AtlasError::FrameOutOfBounds { frame, rect, image } => write!(
                f,
                "frame '{}' at ({}, {}) size {}x{} exceeds {}x{} image",
                frame, rect.x, rect.y, rect.w, rect.h, image.w, image.h
            ),
            AtlasError::UnknownFrame { animation, frame } => write!(
                f,
                "animation '{}' references unknown frame '{}'",
                animation, frame
            ),
            AtlasError::EmptyAnimation { animation } => {
                write!(f, "animation '{}' has no frames", animation)
            }
        }
    }
}

impl std::error::Error for AtlasError {}

/// Frame name for index `i` of a strip, e.g. `step3`.
pub fn frame_name(prefix: &str, index: u32) -> String {
    format!("{}{}", prefix, index)
}

impl AtlasDescriptor {
    /// Describe a single-row strip of equally sized frames, left to right.
    pub fn horizontal_strip(def: &AtlasDef, image_path: &str) -> Self {
        let mut frames = BTreeMap::new();
        let mut sequence = Vec::with_capacity(def.frames as usize);

        for index in 0..def.frames {
            let name = frame_name(&def.frame_prefix, index);
            frames.insert(
                name.clone(),
                AtlasFrame {
                    frame: FrameRect {
                        x: index * def.frame_width,
                        y: 0,
                        w: def.frame_width,
                        h: def.frame_height,
                    },
                    source_size: FrameSize {
                        w: def.frame_width,
                        h: def.frame_height,
                    },
                    sprite_source_size: FrameRect {
                        x: 0,
                        y: 0,
                        w: def.frame_width,
                        h: def.frame_height,
                    },
                },
            );
            sequence.push(name);
        }

        let mut animations = BTreeMap::new();
        animations.insert(def.animation.clone(), sequence);

        Self {
            frames,
            meta: AtlasMeta {
                image: image_path.to_string(),
                format: "RGBA8888".to_string(),
                size: FrameSize {
                    w: def.image_width,
                    h: def.image_height,
                },
                scale: 1.0,
            },
            animations,
        }
    }

    /// Frame names in layout order: animated frames in playback order,
    /// then any frame no animation uses.
    fn layout_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = Vec::with_capacity(self.frames.len());
        let animated = self.animations.values().flatten();
        for name in animated.chain(self.frames.keys()) {
            if self.frames.contains_key(name) && !order.contains(&name.as_str()) {
                order.push(name.as_str());
            }
        }
        order
    }

    /// Build the texture layout and resolve animations to layout indices.
    pub fn parse(&self) -> Result<ParsedAtlas, AtlasError> {
        let image = self.meta.size;
        let mut layout = TextureAtlasLayout::new_empty(UVec2::new(image.w, image.h));
        let mut indices = HashMap::with_capacity(self.frames.len());

        for name in self.layout_order() {
            let Some(frame) = self.frames.get(name) else {
                continue;
            };
            let rect = frame.frame;
            let fits = rect.x.checked_add(rect.w).is_some_and(|right| right <= image.w)
                && rect.y.checked_add(rect.h).is_some_and(|bottom| bottom <= image.h);
            if !fits {
                return Err(AtlasError::FrameOutOfBounds {
                    frame: name.to_string(),
                    rect,
                    image,
                });
            }

            let index = layout.add_texture(URect::new(
                rect.x,
                rect.y,
                rect.x + rect.w,
                rect.y + rect.h,
            ));
            indices.insert(name, index);
        }

        let mut animations = HashMap::with_capacity(self.animations.len());
        for (animation, names) in &self.animations {
            if names.is_empty() {
                return Err(AtlasError::EmptyAnimation {
                    animation: animation.clone(),
                });
            }
            let sequence = names
                .iter()
                .map(|name| {
                    indices
                        .get(name.as_str())
                        .copied()
                        .ok_or_else(|| AtlasError::UnknownFrame {
                            animation: animation.clone(),
                            frame: name.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            animations.insert(animation.clone(), sequence);
        }

        Ok(ParsedAtlas { layout, animations })
    }
}

/// A parsed atlas ready to hand to sprites.
#[derive(Debug)]
pub struct ParsedAtlas {
    pub layout: TextureAtlasLayout,
    pub animations: HashMap<String, Vec<usize>>,
}

impl ParsedAtlas {
    pub fn animation(&self, name: &str) -> Option<&[usize]> {
        self.animations.get(name).map(Vec::as_slice)
    }
}

/// Layout handle and frame sequence for the coin animation.
#[derive(Resource, Debug, Clone)]
pub struct CoinAtlas {
    pub layout: Handle<TextureAtlasLayout>,
    pub frames: Vec<usize>,
}
