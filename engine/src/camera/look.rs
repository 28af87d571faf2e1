//! Mouse Look Module
//!
//! First-person look: horizontal look turns the whole body, vertical look
//! only tilts the camera. No smoothing, response is instant.
//!
//! Angles are authored in degrees. Pitch follows the "positive looks down"
//! convention, clamped to `[-upper_limit, lower_limit]`.

use glam::{Quat, Vec2};

use crate::physics::CharacterBody;

/// Pitch/yaw state driven by the look axes.
#[derive(Clone, Debug)]
pub struct MouseLook {
    /// Camera pitch in degrees, positive looks down
    pitch: f32,
    /// Degrees per look-axis unit, horizontal
    pub speed_x: f32,
    /// Degrees per look-axis unit, vertical
    pub speed_y: f32,
    /// Maximum degrees above the horizon
    upper_limit: f32,
    /// Maximum degrees below the horizon
    lower_limit: f32,
}

impl Default for MouseLook {
    fn default() -> Self {
        Self::new(2.0, 2.0, 80.0, 80.0)
    }
}

impl MouseLook {
    pub fn new(speed_x: f32, speed_y: f32, upper_limit: f32, lower_limit: f32) -> Self {
        Self {
            pitch: 0.0,
            speed_x,
            speed_y,
            upper_limit: upper_limit.abs(),
            lower_limit: lower_limit.abs(),
        }
    }

    /// Current pitch in degrees (positive looks down).
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the pitch directly (degrees, clamped to limits).
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.upper_limit, self.lower_limit);
    }

    /// (upper, lower) limits in degrees.
    #[inline]
    pub fn limits(&self) -> (f32, f32) {
        (self.upper_limit, self.lower_limit)
    }

    /// Camera local rotation for the current pitch.
    pub fn camera_rotation(&self) -> Quat {
        // Rotation about +X tilts -Z upward, so looking down is a negative angle
        Quat::from_rotation_x(-self.pitch.to_radians())
    }

    /// Apply one frame of look input.
    ///
    /// * `look.y` - positive looks up (decreases pitch)
    /// * `look.x` - positive turns right; accumulated onto the body rotation
    ///
    /// Returns the camera local rotation to apply.
    pub fn apply(&mut self, look: Vec2, body: &mut dyn CharacterBody) -> Quat {
        self.set_pitch(self.pitch - look.y * self.speed_y);

        let yaw_degrees = look.x * self.speed_x;
        if yaw_degrees != 0.0 {
            // Turning right is clockwise seen from above: negative about +Y
            let turned = body.rotation() * Quat::from_rotation_y(-yaw_degrees.to_radians());
            body.set_rotation(turned);
        }

        self.camera_rotation()
    }
}
