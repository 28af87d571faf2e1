//! UI Module
//!
//! Screen-space image elements the gameplay components write into: the
//! interaction crosshair icon and the stamina bar. Drawing them is up to the
//! host renderer.

pub mod image;

pub use image::{SpriteId, UiImage};
