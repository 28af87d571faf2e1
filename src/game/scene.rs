//! Scene — composition of the gameplay components.
//!
//! Owns the collision world, the player, the interaction probe with its
//! registry, portal mirrors and spinning props. [`Scene::tick`] is the single
//! per-frame entry point: every update hook runs, then every late-update
//! hook. The components never talk to each other; the scene only hands each
//! one the collaborators it needs.

use std::cell::Cell;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::game::config::GameConfig;
use crate::game::interaction::{
    ActionInteractable, InteractIcon, Interactable, InteractableId, InteractableRegistry,
    InteractionProbe, ProbeOutcome,
};
use crate::game::portal::PortalMirror;
use crate::game::rotator::ConstantRotator;
use crate::input::{CursorManager, FrameInput};
use crate::physics::{Aabb, Collider, ColliderId, CollisionWorld, KinematicCapsule};
use crate::player::{FirstPersonController, FootstepEvent, METAL_TAG, NON_METAL_TAG};
use crate::ui::SpriteId;
use crate::world::Transform;

/// Sprite the demo switch shows while targeted.
pub const SWITCH_ICON: SpriteId = SpriteId(10);

/// Two-state lever. Its state is shared so the scene can observe it.
#[derive(Debug, Clone)]
pub struct Switch {
    id: InteractableId,
    on: Rc<Cell<bool>>,
}

impl Switch {
    pub fn new(id: InteractableId) -> Self {
        Self {
            id,
            on: Rc::new(Cell::new(false)),
        }
    }

    /// Shared handle to the switch state.
    pub fn state(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.on)
    }
}

impl Interactable for Switch {
    fn id(&self) -> InteractableId {
        self.id
    }

    fn icon(&self) -> Option<InteractIcon> {
        Some(InteractIcon {
            sprite: SWITCH_ICON,
            size: Vec2::splat(48.0),
        })
    }

    fn interact(&mut self) {
        self.on.set(!self.on.get());
        log::info!("switch {:?} -> {}", self.id, if self.on.get() { "on" } else { "off" });
    }
}

/// A prop spun by a [`ConstantRotator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinningProp {
    pub rotator: ConstantRotator,
    pub transform: Transform,
}

/// What happened during one [`Scene::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub interaction: ProbeOutcome,
    pub footsteps: Vec<FootstepEvent>,
}

/// Handles to the demo layout's notable pieces.
#[derive(Debug, Clone)]
pub struct DemoHandles {
    pub floor: ColliderId,
    pub switch: ColliderId,
    pub switch_state: Rc<Cell<bool>>,
    pub bell: ColliderId,
    pub bell_rings: Rc<Cell<u32>>,
    pub beam: ColliderId,
}

pub struct Scene {
    pub world: CollisionWorld,
    pub cursor: CursorManager,
    pub player: FirstPersonController<KinematicCapsule>,
    pub probe: InteractionProbe,
    pub interactables: InteractableRegistry,
    pub portals: Vec<PortalMirror>,
    pub props: Vec<SpinningProp>,
    frame: u64,
}

impl Scene {
    /// Empty scene with the player standing at `spawn` (feet position).
    pub fn new(config: &GameConfig, spawn: Vec3) -> Self {
        let mut cursor = CursorManager::new_released();
        let body = KinematicCapsule::standing_on(spawn.y, spawn.x, spawn.z);
        let player = FirstPersonController::new(config.controller.clone(), body, &mut cursor);

        Self {
            world: CollisionWorld::new(),
            cursor,
            player,
            probe: InteractionProbe::new(config.interaction.clone()),
            interactables: InteractableRegistry::new(),
            portals: Vec::new(),
            props: Vec::new(),
            frame: 0,
        }
    }

    /// The walkthrough layout, player at the origin facing -Z:
    ///
    /// - metal floor under the spawn, non-metal floor from z = -6 on
    /// - a switch at z = -4 and a bell at x = +3
    /// - a low beam over z = -9 (crouch under it)
    /// - one portal pair and a spinning prop
    pub fn demo(config: &GameConfig) -> (Self, DemoHandles) {
        let mut scene = Self::new(config, Vec3::ZERO);

        let floor = scene.world.add(
            Collider::new(Aabb::new(Vec3::new(-10.0, -1.0, -6.0), Vec3::new(10.0, 0.0, 10.0)))
                .with_tag(METAL_TAG),
        );
        scene.world.add(
            Collider::new(Aabb::new(Vec3::new(-10.0, -1.0, -20.0), Vec3::new(10.0, 0.0, -6.0)))
                .with_tag(NON_METAL_TAG),
        );

        let switch_collider = scene.world.add(Collider::new(Aabb::from_center(
            Vec3::new(0.0, 1.5, -4.0),
            Vec3::new(0.25, 0.25, 0.1),
        )));
        let switch = Switch::new(InteractableId(1));
        let switch_state = switch.state();
        scene.interactables.insert(switch_collider, Box::new(switch));

        let bell = scene.world.add(Collider::new(Aabb::from_center(
            Vec3::new(3.0, 1.6, 0.0),
            Vec3::splat(0.3),
        )));
        let bell_rings = Rc::new(Cell::new(0));
        let rings = Rc::clone(&bell_rings);
        scene.interactables.insert(
            bell,
            Box::new(ActionInteractable::new(InteractableId(2), move || {
                rings.set(rings.get() + 1);
                log::info!("bell rang ({} total)", rings.get());
            })),
        );

        // Bottom at 1.0: clears a crouched head, blocks standing up
        let beam = scene.world.add(Collider::new(Aabb::new(
            Vec3::new(-10.0, 1.0, -10.0),
            Vec3::new(10.0, 1.5, -8.0),
        )));

        scene.portals.push(PortalMirror::new(
            Transform::from_position(Vec3::new(20.0, 0.0, 0.0)),
            Transform::from_position(Vec3::new(-5.0, 0.0, 5.0)).with_yaw_degrees(180.0),
        ));
        scene.props.push(SpinningProp {
            rotator: ConstantRotator::new(Vec3::new(0.0, 45.0, 0.0), 1.0),
            transform: Transform::from_position(Vec3::new(-3.0, 1.0, -3.0)),
        });

        let handles = DemoHandles {
            floor,
            switch: switch_collider,
            switch_state,
            bell,
            bell_rings,
            beam,
        };
        (scene, handles)
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one frame.
    pub fn tick(&mut self, dt: f32, input: &FrameInput) -> FrameReport {
        self.player.update(dt, input, &self.world);

        let view = self.player.camera_transform();
        let interaction =
            self.probe
                .update(&view, input.interact_pressed, &self.world, &mut self.interactables);

        for prop in &mut self.props {
            prop.rotator.update(dt, &mut prop.transform);
        }

        // Late update
        for portal in &mut self.portals {
            portal.late_update(&view);
        }

        self.frame += 1;
        FrameReport {
            interaction,
            footsteps: self.player.drain_footsteps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::CharacterBody;

    #[test]
    fn test_demo_layout() {
        let (scene, handles) = Scene::demo(&GameConfig::default());
        assert!(scene.cursor.is_locked());
        assert_eq!(scene.interactables.len(), 2);
        assert!(scene.interactables.contains(handles.switch));
        assert!(!scene.interactables.contains(handles.floor));
        assert!(scene.world.get(handles.beam).is_some());
        assert!(scene.player.body().is_grounded());
    }

    #[test]
    fn test_tick_counts_frames_and_mirrors() {
        let (mut scene, _) = Scene::demo(&GameConfig::default());
        scene.tick(0.125, &FrameInput::default());
        scene.tick(0.125, &FrameInput::default());
        assert_eq!(scene.frame(), 2);

        // Camera at (0, 1.6, 0); other portal at (-5, 0, 5)
        let mirrored = scene.portals[0].transform().position;
        assert!((mirrored - Vec3::new(25.0, 1.6, -5.0)).length() < 1e-4);
    }

    #[test]
    fn test_switch_toggles() {
        let (mut scene, handles) = Scene::demo(&GameConfig::default());
        let press = FrameInput {
            interact_pressed: true,
            ..Default::default()
        };

        // Switch is 4m ahead, out of reach
        let report = scene.tick(0.125, &press);
        assert_eq!(report.interaction, ProbeOutcome::NoTarget);
        assert!(!handles.switch_state.get());

        scene.player.body_mut().set_position(Vec3::new(0.0, 1.0, -2.0));
        let report = scene.tick(0.125, &press);
        assert_eq!(report.interaction, ProbeOutcome::Interacted(InteractableId(1)));
        assert!(handles.switch_state.get());
        assert_eq!(scene.probe.icon().sprite, Some(SWITCH_ICON));
    }
}
