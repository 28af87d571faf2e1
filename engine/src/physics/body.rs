//! Character body
//!
//! The capsule the first-person controller drives. The controller only needs
//! a grounded query, a move primitive and height/center resizing, so that is
//! all the [`CharacterBody`] trait asks of the host physics.

use glam::{Quat, Vec3};

/// Capsule-shaped physical body owned by a character.
pub trait CharacterBody {
    /// World position of the body origin.
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rotation: Quat);
    /// Whether the last move left the capsule resting on the ground.
    fn is_grounded(&self) -> bool;
    /// Capsule height in meters.
    fn height(&self) -> f32;
    fn set_height(&mut self, height: f32);
    /// Capsule center relative to the body origin.
    fn center(&self) -> Vec3;
    fn set_center(&mut self, center: Vec3);
    /// Translate the body, resolving collisions.
    fn move_by(&mut self, motion: Vec3);

    /// World-space forward (-Z) of the body.
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// World-space right (+X) of the body.
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }
}

/// Distance within which the capsule bottom counts as touching the ground.
const GROUND_SKIN: f32 = 0.001;

/// Kinematic capsule over an infinite flat ground plane.
///
/// Enough for hosts without a physics engine and for tests: moving below the
/// ground plane is clamped back onto it and marks the capsule grounded.
#[derive(Debug, Clone)]
pub struct KinematicCapsule {
    position: Vec3,
    rotation: Quat,
    height: f32,
    center: Vec3,
    radius: f32,
    ground_height: f32,
    grounded: bool,
}

impl KinematicCapsule {
    /// Create a capsule whose bottom rests on `ground_height`.
    pub fn new(position: Vec3, height: f32, radius: f32, ground_height: f32) -> Self {
        let mut capsule = Self {
            position,
            rotation: Quat::IDENTITY,
            height,
            center: Vec3::ZERO,
            radius,
            ground_height,
            grounded: false,
        };
        capsule.resolve_ground();
        capsule
    }

    /// Standing capsule (2m tall, centered on the origin) with feet on `ground_height`.
    pub fn standing_on(ground_height: f32, x: f32, z: f32) -> Self {
        Self::new(Vec3::new(x, ground_height + 1.0, z), 2.0, 0.5, ground_height)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Teleport without collision resolution against anything but the ground.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.resolve_ground();
    }

    /// World-space Y of the capsule bottom.
    pub fn bottom(&self) -> f32 {
        self.position.y + self.center.y - self.height * 0.5
    }

    fn resolve_ground(&mut self) {
        let penetration = self.ground_height - self.bottom();
        if penetration > 0.0 {
            self.position.y += penetration;
        }
        self.grounded = self.bottom() - self.ground_height <= GROUND_SKIN;
    }
}

impl CharacterBody for KinematicCapsule {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height.max(0.0);
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    fn move_by(&mut self, motion: Vec3) {
        self.position += motion;
        self.resolve_ground();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_capsule_is_grounded() {
        let body = KinematicCapsule::standing_on(0.0, 0.0, 0.0);
        assert!(body.is_grounded());
        assert_eq!(body.position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(body.bottom(), 0.0);
    }

    #[test]
    fn test_move_below_ground_is_clamped() {
        let mut body = KinematicCapsule::standing_on(0.0, 0.0, 0.0);
        body.move_by(Vec3::new(1.0, -3.0, 0.0));
        assert_eq!(body.position(), Vec3::new(1.0, 1.0, 0.0));
        assert!(body.is_grounded());
    }

    #[test]
    fn test_move_up_leaves_ground() {
        let mut body = KinematicCapsule::standing_on(0.0, 0.0, 0.0);
        body.move_by(Vec3::new(0.0, 0.5, 0.0));
        assert!(!body.is_grounded());
    }

    #[test]
    fn test_forward_and_right_follow_rotation() {
        let mut body = KinematicCapsule::standing_on(0.0, 0.0, 0.0);
        assert!((body.forward() - Vec3::NEG_Z).length() < 1e-5);
        assert!((body.right() - Vec3::X).length() < 1e-5);

        // Quarter turn to the right (clockwise seen from above)
        body.set_rotation(Quat::from_rotation_y(-std::f32::consts::FRAC_PI_2));
        assert!((body.forward() - Vec3::X).length() < 1e-5);
        assert!((body.right() - Vec3::Z).length() < 1e-5);
    }

    #[test]
    fn test_shrinking_lifts_bottom_until_next_move() {
        let mut body = KinematicCapsule::standing_on(0.0, 0.0, 0.0);
        body.set_height(0.5);
        body.set_center(Vec3::new(0.0, 0.5, 0.0));
        assert!(body.bottom() > 0.0);

        body.move_by(Vec3::new(0.0, -5.0, 0.0));
        assert_eq!(body.bottom(), 0.0);
        assert!(body.is_grounded());
    }
}
