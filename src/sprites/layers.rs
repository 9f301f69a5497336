//! Render order for scene sprites.

/// Lower values render behind higher values. Layers follow the order in
/// which the scene adds them: coins first, overlay on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SceneLayer {
    Coins = 0,
    Overlay = 10,
}

impl SceneLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }
}
