//! Portal Camera Mirror
//!
//! Keeps a portal camera in step with the player's camera: the player's
//! offset from one portal is replayed relative to the other, and the view
//! direction is turned by the angle between the two portals.

use glam::{Quat, Vec3};

use crate::physics::look_rotation;
use crate::world::Transform;

/// Mirrors a tracked camera through a pair of portal anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalMirror {
    /// Portal this camera renders for
    pub portal: Transform,
    /// Portal the player looks into
    pub other_portal: Transform,
    transform: Transform,
}

impl PortalMirror {
    pub fn new(portal: Transform, other_portal: Transform) -> Self {
        Self {
            portal,
            other_portal,
            transform: portal,
        }
    }

    /// Last mirrored transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Recompute the mirrored transform from the camera. Runs after all
    /// regular updates so the camera has already moved this frame.
    pub fn late_update(&mut self, camera: &Transform) -> Transform {
        self.transform = mirror(&self.portal, &self.other_portal, camera);
        self.transform
    }
}

/// Mirror `camera` from `other_portal` into `portal`.
pub fn mirror(portal: &Transform, other_portal: &Transform, camera: &Transform) -> Transform {
    let offset = camera.position - other_portal.position;
    let position = portal.position + offset;

    let angle = portal.rotation.angle_between(other_portal.rotation);
    let delta = Quat::from_axis_angle(Vec3::Y, angle);
    let rotation = look_rotation(delta * camera.forward(), Vec3::Y);

    Transform::new(position, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_vec(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_equal_orientation_translates() {
        let portal = Transform::from_position(Vec3::new(10.0, 0.0, 0.0));
        let other = Transform::from_position(Vec3::new(-4.0, 0.0, 2.0));
        let camera = Transform::from_position(Vec3::new(-3.0, 1.6, 5.0)).with_yaw_degrees(30.0);

        let mut mirror = PortalMirror::new(portal, other);
        let result = mirror.late_update(&camera);

        assert!(approx_vec(result.position, Vec3::new(11.0, 1.6, 3.0)));
        assert!(approx_vec(result.forward(), camera.forward()));
        assert_eq!(mirror.transform(), result);
    }

    #[test]
    fn test_opposed_portals_turn_view() {
        let portal = Transform::IDENTITY.with_yaw_degrees(180.0);
        let other = Transform::IDENTITY;
        let camera = Transform::from_position(Vec3::new(0.0, 1.6, 3.0));

        let result = mirror(&portal, &other, &camera);
        assert!(approx_vec(result.position, Vec3::new(0.0, 1.6, 3.0)));
        assert!(approx_vec(result.forward(), Vec3::Z));
    }

    #[test]
    fn test_no_history() {
        let portal = Transform::from_position(Vec3::X);
        let other = Transform::IDENTITY;
        let mut mirror = PortalMirror::new(portal, other);

        mirror.late_update(&Transform::from_position(Vec3::new(5.0, 0.0, 0.0)));
        let result = mirror.late_update(&Transform::from_position(Vec3::ZERO));
        assert!(approx_vec(result.position, Vec3::X));
    }
}
