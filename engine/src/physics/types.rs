//! Math type re-exports from glam
//!
//! Core vector/rotation types shared by the body, collision and camera code.

pub use glam::{EulerRot, Mat3, Quat, Vec2, Vec3};

/// Build a rotation whose forward (-Z) axis points along `direction`.
///
/// Returns identity when `direction` is zero. When `direction` is parallel to
/// `up`, world Z is used as the fallback reference axis.
pub fn look_rotation(direction: Vec3, up: Vec3) -> Quat {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return Quat::IDENTITY;
    }

    let mut right = forward.cross(up);
    if right.length_squared() < 1e-8 {
        right = forward.cross(Vec3::Z);
    }
    let right = right.normalize();
    let true_up = right.cross(forward);

    Quat::from_mat3(&Mat3::from_cols(right, true_up, -forward)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_look_rotation_forward_is_identity() {
        let q = look_rotation(Vec3::NEG_Z, Vec3::Y);
        assert!(vec_approx(q * Vec3::NEG_Z, Vec3::NEG_Z));
        assert!(vec_approx(q * Vec3::Y, Vec3::Y));
    }

    #[test]
    fn test_look_rotation_points_forward_along_direction() {
        let dir = Vec3::new(1.0, 0.5, 0.25).normalize();
        let q = look_rotation(dir, Vec3::Y);
        assert!(vec_approx(q * Vec3::NEG_Z, dir));
    }

    #[test]
    fn test_look_rotation_zero_direction() {
        assert_eq!(look_rotation(Vec3::ZERO, Vec3::Y), Quat::IDENTITY);
    }

    #[test]
    fn test_look_rotation_straight_up() {
        let q = look_rotation(Vec3::Y, Vec3::Y);
        assert!(vec_approx(q * Vec3::NEG_Z, Vec3::Y));
    }
}
