//! Camera Rig
//!
//! The first-person camera hangs off the body like a child transform: a local
//! offset (eye height, head-bob) and a local rotation (pitch).

use glam::{Quat, Vec3};

use crate::physics::CharacterBody;
use crate::world::Transform;

/// Eye offset above the body origin for a 2m standing capsule.
pub const DEFAULT_EYE_HEIGHT: f32 = 0.6;

/// Camera attached to a character body.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    /// Offset from the body origin in body space
    pub local_position: Vec3,
    /// Rotation relative to the body (pitch only for first person)
    pub local_rotation: Quat,
    /// Local Y captured at attachment; head-bob oscillates around it
    default_y: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0))
    }
}

impl CameraRig {
    pub fn new(local_position: Vec3) -> Self {
        Self {
            local_position,
            local_rotation: Quat::IDENTITY,
            default_y: local_position.y,
        }
    }

    /// Resting local Y of the camera.
    pub fn default_y(&self) -> f32 {
        self.default_y
    }

    /// World transform given the parent body.
    pub fn world_transform(&self, body: &dyn CharacterBody) -> Transform {
        Transform::new(
            body.position() + body.rotation() * self.local_position,
            (body.rotation() * self.local_rotation).normalize(),
        )
    }

    pub fn world_position(&self, body: &dyn CharacterBody) -> Vec3 {
        body.position() + body.rotation() * self.local_position
    }
}
