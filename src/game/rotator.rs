//! Constant-rate rotation for props.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::world::Transform;

/// Spins a transform by a fixed Euler rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantRotator {
    /// Euler degrees per second before `speed` scaling
    pub rotation: Vec3,
    pub speed: f32,
}

impl ConstantRotator {
    pub fn new(rotation: Vec3, speed: f32) -> Self {
        Self { rotation, speed }
    }

    /// Rotate `transform` locally by `rotation * speed * dt`.
    pub fn update(&self, dt: f32, transform: &mut Transform) {
        transform.rotate_local_euler_degrees(self.rotation * self.speed * dt.max(0.0));
    }
}
