//! First-Person Controller
//!
//! Ties the player features together around a [`CharacterBody`]: movement,
//! mouse look, jumping, crouch, head-bob, footsteps and stamina. One call to
//! [`FirstPersonController::update`] per frame runs them in a fixed order:
//!
//! 1. movement input (speed from the current gait)
//! 2. mouse look
//! 3. jump
//! 4. footsteps
//! 5. crouch press
//! 6. head-bob
//! 7. stamina
//! 8. gravity and the body move
//! 9. the in-flight crouch transition
//!
//! # Usage
//!
//! ```rust,ignore
//! use waypost_engine::player::{ControllerConfig, FirstPersonController};
//! use waypost_engine::physics::KinematicCapsule;
//!
//! let body = KinematicCapsule::standing_on(0.0, 0.0, 0.0);
//! let mut player = FirstPersonController::new(ControllerConfig::default(), body, &mut cursor);
//!
//! // Each frame:
//! let frame = input.frame(&bindings, &cursor);
//! player.update(delta_time, &frame, &world);
//! for step in player.drain_footsteps() {
//!     audio.play_footstep(step.surface, step.position);
//! }
//! ```

use glam::{Vec2, Vec3};

use super::crouch::CrouchController;
use super::footsteps::{FootstepEvent, FootstepTimer};
use super::head_bob::HeadBob;
use super::stamina::StaminaRegulator;
use super::{ControllerConfig, Gait};
use crate::camera::{CameraRig, MouseLook};
use crate::config::ConfigError;
use crate::input::{CursorManager, FrameInput};
use crate::physics::{CharacterBody, PhysicsQuery};
use crate::ui::UiImage;
use crate::world::Transform;

/// First-person character controller.
pub struct FirstPersonController<B: CharacterBody> {
    config: ControllerConfig,
    body: B,
    camera: CameraRig,
    look: MouseLook,
    crouch: CrouchController,
    stamina: StaminaRegulator,
    head_bob: HeadBob,
    footstep_timer: FootstepTimer,
    stamina_bar: UiImage,

    /// Planar components come from input each tick; y carries jump/gravity
    move_direction: Vec3,
    /// Speed-scaled input (x strafe, y forward)
    current_input: Vec2,
    can_move: bool,
    footsteps: Vec<FootstepEvent>,
}

impl<B: CharacterBody> FirstPersonController<B> {
    /// Build a controller around `body` and lock the cursor for look.
    ///
    /// The body is resized to the standing profile.
    pub fn new(config: ControllerConfig, mut body: B, cursor: &mut CursorManager) -> Self {
        cursor.lock();

        let crouch = CrouchController::from_config(&config);
        let standing = crouch.standing();
        body.set_height(standing.height);
        body.set_center(standing.center);

        let look = MouseLook::new(
            config.look_speed_x,
            config.look_speed_y,
            config.upper_look_limit,
            config.lower_look_limit,
        );
        let stamina = StaminaRegulator::from_config(&config);
        let mut stamina_bar = UiImage::default();
        stamina_bar.set_fill_amount(stamina.fraction());

        Self {
            camera: CameraRig::new(config.camera_offset),
            look,
            crouch,
            stamina,
            head_bob: HeadBob::new(),
            footstep_timer: FootstepTimer::new(),
            stamina_bar,
            move_direction: Vec3::ZERO,
            current_input: Vec2::ZERO,
            can_move: true,
            footsteps: Vec::new(),
            config,
            body,
        }
    }

    /// Like [`new`](Self::new), but rejects an unusable config first.
    pub fn try_new(
        config: ControllerConfig,
        body: B,
        cursor: &mut CursorManager,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, body, cursor))
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// World transform of the camera.
    pub fn camera_transform(&self) -> Transform {
        self.camera.world_transform(&self.body)
    }

    pub fn look(&self) -> &MouseLook {
        &self.look
    }

    pub fn stamina(&self) -> &StaminaRegulator {
        &self.stamina
    }

    pub fn stamina_mut(&mut self) -> &mut StaminaRegulator {
        &mut self.stamina
    }

    pub fn stamina_bar(&self) -> &UiImage {
        &self.stamina_bar
    }

    pub fn crouch(&self) -> &CrouchController {
        &self.crouch
    }

    pub fn is_crouching(&self) -> bool {
        self.crouch.is_crouching()
    }

    pub fn head_bob(&self) -> &HeadBob {
        &self.head_bob
    }

    pub fn move_direction(&self) -> Vec3 {
        self.move_direction
    }

    /// Speed-scaled planar input from the last tick.
    pub fn current_input(&self) -> Vec2 {
        self.current_input
    }

    pub fn can_move(&self) -> bool {
        self.can_move
    }

    /// Freeze or unfreeze the whole controller.
    pub fn set_can_move(&mut self, can_move: bool) {
        if self.can_move != can_move {
            log::debug!("player movement {}", if can_move { "enabled" } else { "frozen" });
        }
        self.can_move = can_move;
    }

    /// Whether this frame's input counts as sprinting.
    pub fn is_sprinting(&self, input: &FrameInput) -> bool {
        self.config.features.sprint && self.stamina.is_sprinting(input.sprint_held)
    }

    /// Take the footstep events produced since the last drain.
    pub fn drain_footsteps(&mut self) -> Vec<FootstepEvent> {
        std::mem::take(&mut self.footsteps)
    }

    // ------------------------------------------------------------------------
    // Update
    // ------------------------------------------------------------------------

    /// Run one frame.
    pub fn update(&mut self, dt: f32, input: &FrameInput, physics: &dyn PhysicsQuery) {
        if !self.can_move {
            return;
        }
        let dt = dt.max(0.0);
        let features = self.config.features;
        let gait = Gait::resolve(self.is_sprinting(input), self.crouch.is_crouching());

        self.handle_movement_input(input, gait);
        self.handle_mouse_look(input);

        if features.jump {
            self.handle_jump(input);
        }
        if features.footsteps {
            self.handle_footsteps(dt, gait, physics);
        }
        if features.crouch {
            self.handle_crouch(input, physics);
        }
        if features.head_bob {
            self.handle_head_bob(dt, gait);
        }
        if features.stamina {
            self.handle_stamina(dt, input);
        }

        self.apply_final_movement(dt);
        self.crouch.advance(dt, &mut self.body);
    }

    fn handle_movement_input(&mut self, input: &FrameInput, gait: Gait) {
        let speed = self.config.speed_for(gait);
        self.current_input = input.move_axes * speed;

        let vertical = self.move_direction.y;
        let mut direction =
            self.body.forward() * self.current_input.y + self.body.right() * self.current_input.x;
        direction.y = vertical;
        self.move_direction = direction;
    }

    fn handle_mouse_look(&mut self, input: &FrameInput) {
        self.camera.local_rotation = self.look.apply(input.look, &mut self.body);
    }

    fn handle_jump(&mut self, input: &FrameInput) {
        if input.jump_pressed && self.body.is_grounded() {
            self.move_direction.y = self.config.jump_force;
            log::trace!("jump");
        }
    }

    fn handle_footsteps(&mut self, dt: f32, gait: Gait, physics: &dyn PhysicsQuery) {
        let origin = self.camera.world_position(&self.body);
        let distance = self.config.footstep_probe_distance;
        let mask = self.config.probe_mask;
        let interval = self.config.step_interval_for(gait);

        let step = self.footstep_timer.update(
            dt,
            self.body.is_grounded(),
            self.current_input != Vec2::ZERO,
            interval,
            || physics.raycast(origin, Vec3::NEG_Y, distance, mask),
        );
        if let Some(step) = step {
            self.footsteps.push(step);
        }
    }

    fn handle_crouch(&mut self, input: &FrameInput, physics: &dyn PhysicsQuery) {
        if !input.crouch_pressed {
            return;
        }

        let origin = self.camera.world_position(&self.body);
        let distance = self.config.overhead_probe_distance;
        let mask = self.config.probe_mask;
        let grounded = self.body.is_grounded();
        self.crouch.try_toggle(
            grounded,
            || physics.raycast_any(origin, Vec3::Y, distance, mask),
            &mut self.body,
        );
    }

    fn handle_head_bob(&mut self, dt: f32, gait: Gait) {
        if !self.body.is_grounded() {
            return;
        }

        let (speed, amount) = self.config.bob_for(gait);
        if let Some(offset) = self.head_bob.update(dt, self.move_direction, speed, amount) {
            self.camera.local_position.y = self.camera.default_y() + offset;
        }
    }

    fn handle_stamina(&mut self, dt: f32, input: &FrameInput) {
        let sprint_held = self.config.features.sprint && input.sprint_held;
        self.stamina
            .tick(dt, sprint_held, self.current_input != Vec2::ZERO);
        self.stamina_bar.set_fill_amount(self.stamina.fraction());
    }

    fn apply_final_movement(&mut self, dt: f32) {
        if !self.body.is_grounded() {
            self.move_direction.y -= self.config.gravity * dt;
        }
        self.body.move_by(self.move_direction * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{CollisionWorld, KinematicCapsule};

    const EPSILON: f32 = 0.001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn player() -> FirstPersonController<KinematicCapsule> {
        let mut cursor = CursorManager::new_released();
        FirstPersonController::new(
            ControllerConfig::default(),
            KinematicCapsule::standing_on(0.0, 0.0, 0.0),
            &mut cursor,
        )
    }

    fn forward_input() -> FrameInput {
        FrameInput {
            move_axes: Vec2::new(0.0, 1.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_locks_cursor() {
        let mut cursor = CursorManager::new_released();
        let _player = FirstPersonController::new(
            ControllerConfig::default(),
            KinematicCapsule::standing_on(0.0, 0.0, 0.0),
            &mut cursor,
        );
        assert!(cursor.is_locked());
        assert!(!cursor.is_visible());
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let mut cursor = CursorManager::new_released();
        let config = ControllerConfig {
            time_to_crouch: 0.0,
            ..Default::default()
        };
        let result = FirstPersonController::try_new(
            config,
            KinematicCapsule::standing_on(0.0, 0.0, 0.0),
            &mut cursor,
        );
        assert!(result.is_err());
        assert!(!cursor.is_locked());
    }

    #[test]
    fn test_walks_forward() {
        let mut player = player();
        let world = CollisionWorld::new();
        player.update(0.5, &forward_input(), &world);

        assert!(approx_eq(player.body().position().z, -1.5));
        assert_eq!(player.current_input(), Vec2::new(0.0, 3.0));
        assert!(player.body().is_grounded());
    }

    #[test]
    fn test_frozen_controller_ignores_input() {
        let mut player = player();
        let world = CollisionWorld::new();
        player.set_can_move(false);
        player.update(0.5, &forward_input(), &world);

        assert_eq!(player.body().position(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(player.current_input(), Vec2::ZERO);
    }

    #[test]
    fn test_jump_feature_toggle() {
        let mut cursor = CursorManager::new();
        let mut config = ControllerConfig::default();
        config.features.jump = false;
        let mut player = FirstPersonController::new(
            config,
            KinematicCapsule::standing_on(0.0, 0.0, 0.0),
            &mut cursor,
        );
        let world = CollisionWorld::new();
        let jump = FrameInput {
            jump_pressed: true,
            ..Default::default()
        };
        player.update(0.125, &jump, &world);
        assert!(player.body().is_grounded());
        assert_eq!(player.move_direction().y, 0.0);
    }

    #[test]
    fn test_stamina_bar_tracks_fraction() {
        let mut player = player();
        let world = CollisionWorld::new();
        let sprint = FrameInput {
            move_axes: Vec2::new(0.0, 1.0),
            sprint_held: true,
            ..Default::default()
        };
        player.update(1.0, &sprint, &world);

        assert!(approx_eq(player.stamina().current(), 95.0));
        assert!(approx_eq(player.stamina_bar().fill_amount(), 0.95));
    }
}
