//! Collision detection module
//!
//! Ray queries against axis-aligned box colliders. This is what the gameplay
//! probes use: the interaction ray, the overhead clearance check before
//! standing up, and the downward footstep ray.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use waypost_engine::physics::{Aabb, Collider, CollisionWorld, LayerMask, PhysicsQuery};
//! use glam::Vec3;
//!
//! let mut world = CollisionWorld::new();
//! let floor = world.add(Collider::new(Aabb::new(Vec3::new(-10.0, -1.0, -10.0), Vec3::new(10.0, 0.0, 10.0)))
//!     .with_tag("Footstep/METAL"));
//!
//! if let Some(hit) = world.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 3.0, LayerMask::ALL) {
//!     assert_eq!(hit.collider, floor);
//! }
//! ```

use glam::Vec3;

/// Stable handle for a collider in a [`CollisionWorld`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColliderId(pub u32);

/// Bit set of collision layers (32 layers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask containing only `layer` (0..32).
    pub const fn layer(layer: u8) -> Self {
        LayerMask(1 << (layer as u32 & 31))
    }

    /// Whether a collider on `layer` passes this mask.
    pub fn contains(self, layer: u8) -> bool {
        self.0 & LayerMask::layer(layer).0 != 0
    }

    pub fn with(self, layer: u8) -> Self {
        LayerMask(self.0 | LayerMask::layer(layer).0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box centered on `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents.abs(), center + half_extents.abs())
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Distance along the ray to the first intersection, see [`ray_aabb_intersect`].
    pub fn ray_intersect(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        ray_aabb_intersect(origin, dir, self.min, self.max)
    }
}

/// Performs ray-AABB intersection using the slab method.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   A ray starting inside the box reports the exit distance.
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < 1e-10 {
            // Parallel to this slab: must already be between the planes
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Computes the outward face normal for a point on an AABB surface.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(1e-6));
    let normalized = (point - center) / half_extents;
    let abs = normalized.abs();

    if abs.x >= abs.y && abs.x >= abs.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs.y >= abs.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

/// A static box collider with a tag and a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Collider {
    pub bounds: Aabb,
    /// Free-form tag, e.g. `"Footstep/METAL"` for ground classification.
    pub tag: String,
    pub layer: u8,
    pub enabled: bool,
}

impl Collider {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            bounds,
            tag: String::new(),
            layer: 0,
            enabled: true,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }
}

/// Information about the first collider a ray hit.
#[derive(Debug, Clone, PartialEq)]
pub struct RaycastHit {
    pub collider: ColliderId,
    pub tag: String,
    /// World-space position where the ray entered the collider
    pub point: Vec3,
    /// Surface normal at the hit point
    pub normal: Vec3,
    /// Distance from ray origin to hit point
    pub distance: f32,
}

/// Ray query capability of the host physics scene.
pub trait PhysicsQuery {
    /// First enabled collider on a layer in `mask` hit within `max_distance`.
    ///
    /// Colliders that contain `origin` are not reported.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RaycastHit>;

    /// Whether anything in `mask` blocks the ray within `max_distance`.
    fn raycast_any(&self, origin: Vec3, direction: Vec3, max_distance: f32, mask: LayerMask) -> bool {
        self.raycast(origin, direction, max_distance, mask).is_some()
    }
}

/// Flat list of box colliders. Linear scan, meant for small scenes and tests.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    colliders: Vec<(ColliderId, Collider)>,
    next_id: u32,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, collider: Collider) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push((id, collider));
        id
    }

    pub fn remove(&mut self, id: ColliderId) -> Option<Collider> {
        let index = self.colliders.iter().position(|(cid, _)| *cid == id)?;
        Some(self.colliders.remove(index).1)
    }

    pub fn get(&self, id: ColliderId) -> Option<&Collider> {
        self.colliders.iter().find(|(cid, _)| *cid == id).map(|(_, c)| c)
    }

    pub fn get_mut(&mut self, id: ColliderId) -> Option<&mut Collider> {
        self.colliders
            .iter_mut()
            .find(|(cid, _)| *cid == id)
            .map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }
}

impl PhysicsQuery for CollisionWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RaycastHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec3::ZERO || max_distance <= 0.0 {
            return None;
        }

        let mut best: Option<(f32, ColliderId, &Collider)> = None;
        for (id, collider) in &self.colliders {
            if !collider.enabled
                || !mask.contains(collider.layer)
                || collider.bounds.contains_point(origin)
            {
                continue;
            }
            if let Some(t) = collider.bounds.ray_intersect(origin, dir) {
                if t <= max_distance && best.is_none_or(|(best_t, _, _)| t < best_t) {
                    best = Some((t, *id, collider));
                }
            }
        }

        best.map(|(t, id, collider)| {
            let point = origin + dir * t;
            RaycastHit {
                collider: id,
                tag: collider.tag.clone(),
                point,
                normal: aabb_surface_normal(point, collider.bounds.min, collider.bounds.max),
                distance: t,
            }
        })
    }
}
