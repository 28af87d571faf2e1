//! Physics module
//!
//! The engine-side collaborators the gameplay components lean on. There is
//! no simulation here: just a capsule body to move and ray queries to probe
//! the scene with.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, seconds for time, degrees for authored angles.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types re-exported from glam
//! - [`body`] - [`CharacterBody`] trait and a flat-ground [`KinematicCapsule`]
//! - [`collision`] - Ray-AABB queries behind the [`PhysicsQuery`] trait

pub mod body;
pub mod collision;
pub mod types;

pub use body::{CharacterBody, KinematicCapsule};
pub use collision::{
    Aabb, Collider, ColliderId, CollisionWorld, LayerMask, PhysicsQuery, RaycastHit,
    aabb_surface_normal, ray_aabb_intersect,
};
pub use types::{Quat, Vec2, Vec3, look_rotation};
