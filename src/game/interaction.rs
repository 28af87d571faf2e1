//! World Interaction
//!
//! A short forward ray from the player's viewpoint picks the interactable in
//! front of them. While one is targeted the crosshair icon shows its icon (or
//! the default "can interact" icon); pressing the interact key triggers it.
//! With nothing in front the icon falls back to the idle crosshair.
//!
//! Interactables are looked up by collider in an [`InteractableRegistry`], so
//! any collider without an entry is just scenery.
//!
//! # Usage
//!
//! ```rust,ignore
//! use waypost_engine::game::interaction::{ActionInteractable, InteractableId, InteractionProbe};
//!
//! let door = world.add(Collider::new(bounds));
//! registry.insert(door, Box::new(ActionInteractable::new(InteractableId(1), || open_door())));
//!
//! // Each frame, after the player moved:
//! let outcome = probe.update(&player.camera_transform(), frame.interact_pressed, &world, &mut registry);
//! ```

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, require_positive};
use crate::physics::{ColliderId, LayerMask, PhysicsQuery};
use crate::ui::{SpriteId, UiImage};
use crate::world::Transform;

/// Identity token of an interactable. Two colliders may share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractableId(pub u32);

/// Crosshair icon an interactable asks for while targeted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractIcon {
    pub sprite: SpriteId,
    /// Zero means "use the default interact size"
    pub size: Vec2,
}

/// Something the player can interact with.
pub trait Interactable {
    fn id(&self) -> InteractableId;

    /// Custom crosshair icon, if any.
    fn icon(&self) -> Option<InteractIcon> {
        None
    }

    fn interact(&mut self);
}

/// Interactable that runs a stored closure.
pub struct ActionInteractable {
    id: InteractableId,
    icon: Option<InteractIcon>,
    action: Box<dyn FnMut()>,
}

impl ActionInteractable {
    pub fn new(id: InteractableId, action: impl FnMut() + 'static) -> Self {
        Self {
            id,
            icon: None,
            action: Box::new(action),
        }
    }

    pub fn with_icon(mut self, sprite: SpriteId, size: Vec2) -> Self {
        self.icon = Some(InteractIcon { sprite, size });
        self
    }
}

impl Interactable for ActionInteractable {
    fn id(&self) -> InteractableId {
        self.id
    }

    fn icon(&self) -> Option<InteractIcon> {
        self.icon
    }

    fn interact(&mut self) {
        (self.action)();
    }
}

impl std::fmt::Debug for ActionInteractable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionInteractable")
            .field("id", &self.id)
            .field("icon", &self.icon)
            .finish_non_exhaustive()
    }
}

/// Interactables keyed by the collider that represents them.
#[derive(Default)]
pub struct InteractableRegistry {
    entries: HashMap<ColliderId, Box<dyn Interactable>>,
}

impl InteractableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an interactable to a collider, returning the one it replaces.
    pub fn insert(
        &mut self,
        collider: ColliderId,
        interactable: Box<dyn Interactable>,
    ) -> Option<Box<dyn Interactable>> {
        self.entries.insert(collider, interactable)
    }

    pub fn remove(&mut self, collider: ColliderId) -> Option<Box<dyn Interactable>> {
        self.entries.remove(&collider)
    }

    pub fn contains(&self, collider: ColliderId) -> bool {
        self.entries.contains_key(&collider)
    }

    pub fn get(&self, collider: ColliderId) -> Option<&dyn Interactable> {
        self.entries.get(&collider).map(|entry| entry.as_ref())
    }

    pub fn get_mut(&mut self, collider: ColliderId) -> Option<&mut (dyn Interactable + 'static)> {
        self.entries.get_mut(&collider).map(|entry| entry.as_mut())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Probe tuning and crosshair icons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Ray length in meters
    pub probe_distance: f32,
    pub layer_mask: LayerMask,
    /// Idle crosshair
    pub default_icon: Option<SpriteId>,
    pub default_icon_size: Vec2,
    /// Crosshair over an interactable without a custom icon
    pub default_interact_icon: Option<SpriteId>,
    pub default_interact_icon_size: Vec2,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            probe_distance: 3.0,
            layer_mask: LayerMask::ALL,
            default_icon: Some(SpriteId(0)),
            default_icon_size: Vec2::splat(8.0),
            default_interact_icon: Some(SpriteId(1)),
            default_interact_icon_size: Vec2::splat(32.0),
        }
    }
}

impl InteractionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("probe_distance", self.probe_distance)
    }
}

/// What the probe did this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    NoTarget,
    Targeting(InteractableId),
    Interacted(InteractableId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrackedTarget {
    collider: ColliderId,
    id: InteractableId,
}

/// Per-frame interaction ray and the crosshair icon it drives.
#[derive(Debug, Clone)]
pub struct InteractionProbe {
    config: InteractionConfig,
    icon: UiImage,
    tracked: Option<TrackedTarget>,
}

impl InteractionProbe {
    pub fn new(config: InteractionConfig) -> Self {
        let icon = UiImage::new(config.default_icon, config.default_icon_size);
        Self {
            config,
            icon,
            tracked: None,
        }
    }

    pub fn try_new(config: InteractionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    /// The crosshair image.
    pub fn icon(&self) -> &UiImage {
        &self.icon
    }

    pub fn tracked_id(&self) -> Option<InteractableId> {
        self.tracked.map(|t| t.id)
    }

    pub fn tracked_collider(&self) -> Option<ColliderId> {
        self.tracked.map(|t| t.collider)
    }

    /// Probe from `viewpoint` along its forward axis.
    pub fn update(
        &mut self,
        viewpoint: &Transform,
        interact_pressed: bool,
        physics: &dyn PhysicsQuery,
        registry: &mut InteractableRegistry,
    ) -> ProbeOutcome {
        let hit = physics.raycast(
            viewpoint.position,
            viewpoint.forward(),
            self.config.probe_distance,
            self.config.layer_mask,
        );

        let Some((collider, hit_id)) = hit.and_then(|hit| {
            registry
                .get(hit.collider)
                .map(|target| (hit.collider, target.id()))
        }) else {
            self.clear_target();
            return ProbeOutcome::NoTarget;
        };

        let retrack = match self.tracked {
            None => true,
            Some(tracked) => tracked.id != hit_id || !registry.contains(tracked.collider),
        };
        if retrack {
            log::debug!("interaction target -> {hit_id:?} (collider {collider:?})");
            self.tracked = Some(TrackedTarget {
                collider,
                id: hit_id,
            });
        }

        let Some(tracked) = self.tracked else {
            return ProbeOutcome::NoTarget;
        };
        let Some(target) = registry.get_mut(tracked.collider) else {
            self.clear_target();
            return ProbeOutcome::NoTarget;
        };

        match target.icon() {
            Some(custom) => {
                let size = if custom.size == Vec2::ZERO {
                    self.config.default_interact_icon_size
                } else {
                    custom.size
                };
                self.icon.set_sprite(Some(custom.sprite), size);
            }
            None => self.icon.set_sprite(
                self.config.default_interact_icon,
                self.config.default_interact_icon_size,
            ),
        }

        if interact_pressed {
            log::debug!("interact with {:?}", tracked.id);
            target.interact();
            ProbeOutcome::Interacted(tracked.id)
        } else {
            ProbeOutcome::Targeting(tracked.id)
        }
    }

    fn clear_target(&mut self) {
        if self.icon.sprite != self.config.default_icon {
            self.icon
                .set_sprite(self.config.default_icon, self.config.default_icon_size);
        }
        if let Some(lost) = self.tracked.take() {
            log::debug!("interaction target lost ({:?})", lost.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::physics::{Aabb, Collider, CollisionWorld};

    /// Box 2m in front of a viewpoint at the origin looking down -Z.
    fn box_ahead() -> Collider {
        Collider::new(Aabb::new(Vec3::new(-0.5, -0.5, -2.5), Vec3::new(0.5, 0.5, -1.5)))
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let inner = Rc::clone(&count);
        (count, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_idle_icon_on_creation() {
        let probe = InteractionProbe::new(InteractionConfig::default());
        assert_eq!(probe.icon().sprite, Some(SpriteId(0)));
        assert_eq!(probe.icon().size, Vec2::splat(8.0));
        assert_eq!(probe.tracked_id(), None);
    }

    #[test]
    fn test_targets_and_interacts() {
        let mut world = CollisionWorld::new();
        let mut registry = InteractableRegistry::new();
        let collider = world.add(box_ahead());
        let (count, action) = counter();
        registry.insert(collider, Box::new(ActionInteractable::new(InteractableId(7), action)));

        let mut probe = InteractionProbe::new(InteractionConfig::default());
        let view = Transform::IDENTITY;

        let outcome = probe.update(&view, false, &world, &mut registry);
        assert_eq!(outcome, ProbeOutcome::Targeting(InteractableId(7)));
        assert_eq!(probe.icon().sprite, Some(SpriteId(1)));
        assert_eq!(probe.icon().size, Vec2::splat(32.0));
        assert_eq!(count.get(), 0);

        let outcome = probe.update(&view, true, &world, &mut registry);
        assert_eq!(outcome, ProbeOutcome::Interacted(InteractableId(7)));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut world = CollisionWorld::new();
        let mut registry = InteractableRegistry::new();
        let collider = world.add(Collider::new(Aabb::new(
            Vec3::new(-0.5, -0.5, -5.0),
            Vec3::new(0.5, 0.5, -4.0),
        )));
        let (_count, action) = counter();
        registry.insert(collider, Box::new(ActionInteractable::new(InteractableId(1), action)));

        let mut probe = InteractionProbe::new(InteractionConfig::default());
        let outcome = probe.update(&Transform::IDENTITY, true, &world, &mut registry);
        assert_eq!(outcome, ProbeOutcome::NoTarget);
    }

    #[test]
    fn test_custom_icon_zero_size_uses_default_interact_size() {
        let mut world = CollisionWorld::new();
        let mut registry = InteractableRegistry::new();
        let collider = world.add(box_ahead());
        let (_count, action) = counter();
        registry.insert(
            collider,
            Box::new(ActionInteractable::new(InteractableId(2), action).with_icon(SpriteId(9), Vec2::ZERO)),
        );

        let mut probe = InteractionProbe::new(InteractionConfig::default());
        probe.update(&Transform::IDENTITY, false, &world, &mut registry);
        assert_eq!(probe.icon().sprite, Some(SpriteId(9)));
        assert_eq!(probe.icon().size, Vec2::splat(32.0));
    }

    #[test]
    fn test_plain_collider_counts_as_miss() {
        let mut world = CollisionWorld::new();
        let mut registry = InteractableRegistry::new();
        let collider = world.add(box_ahead());
        let (_count, action) = counter();
        registry.insert(collider, Box::new(ActionInteractable::new(InteractableId(3), action)));

        let mut probe = InteractionProbe::new(InteractionConfig::default());
        probe.update(&Transform::IDENTITY, false, &world, &mut registry);
        assert_eq!(probe.tracked_id(), Some(InteractableId(3)));

        // Scenery in front of the interactable
        world.add(Collider::new(Aabb::new(
            Vec3::new(-1.0, -1.0, -1.2),
            Vec3::new(1.0, 1.0, -1.0),
        )));
        let outcome = probe.update(&Transform::IDENTITY, true, &world, &mut registry);
        assert_eq!(outcome, ProbeOutcome::NoTarget);
        assert_eq!(probe.icon().sprite, Some(SpriteId(0)));
        assert_eq!(probe.tracked_id(), None);
    }

    #[test]
    fn test_same_identity_keeps_tracked_collider() {
        let mut world = CollisionWorld::new();
        let mut registry = InteractableRegistry::new();
        let first = world.add(box_ahead());
        let (first_count, first_action) = counter();
        registry.insert(first, Box::new(ActionInteractable::new(InteractableId(5), first_action)));

        let mut probe = InteractionProbe::new(InteractionConfig::default());
        probe.update(&Transform::IDENTITY, false, &world, &mut registry);

        // A closer collider sharing the identity
        let second = world.add(Collider::new(Aabb::new(
            Vec3::new(-0.5, -0.5, -1.2),
            Vec3::new(0.5, 0.5, -1.0),
        )));
        let (second_count, second_action) = counter();
        registry.insert(second, Box::new(ActionInteractable::new(InteractableId(5), second_action)));

        probe.update(&Transform::IDENTITY, true, &world, &mut registry);
        assert_eq!(probe.tracked_collider(), Some(first));
        assert_eq!(first_count.get(), 1);
        assert_eq!(second_count.get(), 0);
    }

    #[test]
    fn test_retracks_removed_target() {
        let mut world = CollisionWorld::new();
        let mut registry = InteractableRegistry::new();
        let first = world.add(box_ahead());
        let (_a, action_a) = counter();
        registry.insert(first, Box::new(ActionInteractable::new(InteractableId(5), action_a)));

        let mut probe = InteractionProbe::new(InteractionConfig::default());
        probe.update(&Transform::IDENTITY, false, &world, &mut registry);

        let second = world.add(Collider::new(Aabb::new(
            Vec3::new(-0.5, -0.5, -1.2),
            Vec3::new(0.5, 0.5, -1.0),
        )));
        let (b, action_b) = counter();
        registry.insert(second, Box::new(ActionInteractable::new(InteractableId(5), action_b)));
        registry.remove(first);

        probe.update(&Transform::IDENTITY, true, &world, &mut registry);
        assert_eq!(probe.tracked_collider(), Some(second));
        assert_eq!(b.get(), 1);
    }

    #[test]
    fn test_validate_rejects_zero_distance() {
        let config = InteractionConfig {
            probe_distance: 0.0,
            ..Default::default()
        };
        assert!(InteractionProbe::try_new(config).is_err());
    }
}
