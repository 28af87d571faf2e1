//! UI image element

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Handle to a sprite in the host's texture atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(pub u32);

/// A screen-space image: sprite, size in pixels and a fill amount for bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiImage {
    pub sprite: Option<SpriteId>,
    pub size: Vec2,
    /// Horizontal fill in [0, 1]
    fill_amount: f32,
}

impl Default for UiImage {
    fn default() -> Self {
        Self {
            sprite: None,
            size: Vec2::ZERO,
            fill_amount: 1.0,
        }
    }
}

impl UiImage {
    pub fn new(sprite: Option<SpriteId>, size: Vec2) -> Self {
        Self {
            sprite,
            size,
            fill_amount: 1.0,
        }
    }

    pub fn fill_amount(&self) -> f32 {
        self.fill_amount
    }

    pub fn set_fill_amount(&mut self, amount: f32) {
        self.fill_amount = if amount.is_nan() { 0.0 } else { amount.clamp(0.0, 1.0) };
    }

    pub fn set_sprite(&mut self, sprite: Option<SpriteId>, size: Vec2) {
        self.sprite = sprite;
        self.size = size;
    }
}
