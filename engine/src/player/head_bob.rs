//! Head-bob
//!
//! Sinusoidal vertical camera offset while moving on the ground.

use glam::Vec3;

/// Planar speed below which the bob phase freezes.
pub const BOB_MIN_PLANAR_SPEED: f32 = 0.1;

/// Head-bob phase accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadBob {
    timer: f32,
}

impl HeadBob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulated phase in radians.
    pub fn phase(&self) -> f32 {
        self.timer
    }

    /// Advance the phase for this tick's motion.
    ///
    /// Returns the vertical offset from the camera's resting height, or `None`
    /// when the planar motion is too slow to bob (the camera keeps whatever
    /// offset it had).
    pub fn update(&mut self, dt: f32, motion: Vec3, bob_speed: f32, bob_amount: f32) -> Option<f32> {
        if motion.x.abs() <= BOB_MIN_PLANAR_SPEED && motion.z.abs() <= BOB_MIN_PLANAR_SPEED {
            return None;
        }

        self.timer += dt.max(0.0) * bob_speed;
        Some(self.timer.sin() * bob_amount)
    }
}
