//! Player Crouch System
//!
//! Toggle crouch with a timed height/center transition on the character body.
//!
//! # Transition
//!
//! A press while grounded starts a transition from the body's current
//! height/center to the other stance's values over `time_to_crouch` seconds.
//! Presses during a transition are ignored. Standing up is refused while
//! something sits directly above the camera.
//!
//! # Usage
//!
//! ```rust,ignore
//! use waypost_engine::player::CrouchController;
//!
//! let mut crouch = CrouchController::from_config(&config);
//!
//! // On a crouch press:
//! crouch.try_toggle(body.is_grounded(), || overhead_blocked, &mut body);
//!
//! // Each tick:
//! crouch.advance(dt, &mut body);
//! ```

use glam::Vec3;

use super::{ControllerConfig, TimedTask};
use crate::physics::CharacterBody;

/// Height and center of the body for one stance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StanceProfile {
    pub height: f32,
    pub center: Vec3,
}

impl StanceProfile {
    pub fn new(height: f32, center: Vec3) -> Self {
        Self { height, center }
    }

    fn lerp(self, to: StanceProfile, t: f32) -> StanceProfile {
        StanceProfile {
            height: lerp(self.height, to.height, t),
            center: self.center.lerp(to.center, t),
        }
    }

    fn apply(self, body: &mut dyn CharacterBody) {
        body.set_height(self.height);
        body.set_center(self.center);
    }
}

/// Outcome of a crouch press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrouchToggle {
    /// Transition began; `crouching` is the stance it heads for
    Started { crouching: bool },
    /// Crouched with something overhead
    Blocked,
    /// Airborne or already transitioning
    Ignored,
}

/// Manages crouch state and the timed transition between stances.
#[derive(Debug, Clone)]
pub struct CrouchController {
    standing: StanceProfile,
    crouching: StanceProfile,
    duration: f32,

    /// Flips only when a transition completes
    is_crouching: bool,
    task: TimedTask,
    from: StanceProfile,
    to: StanceProfile,
}

impl CrouchController {
    pub fn new(standing: StanceProfile, crouching: StanceProfile, duration: f32) -> Self {
        Self {
            standing,
            crouching,
            duration,
            is_crouching: false,
            task: TimedTask::new(),
            from: standing,
            to: standing,
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(
            StanceProfile::new(config.stand_height, config.standing_center),
            StanceProfile::new(config.crouch_height, config.crouching_center),
            config.time_to_crouch,
        )
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    pub fn is_transitioning(&self) -> bool {
        self.task.is_running()
    }

    pub fn standing(&self) -> StanceProfile {
        self.standing
    }

    pub fn crouching(&self) -> StanceProfile {
        self.crouching
    }

    /// Handle a crouch press.
    ///
    /// `overhead_blocked` is only consulted when standing up.
    pub fn try_toggle<F>(
        &mut self,
        grounded: bool,
        overhead_blocked: F,
        body: &mut dyn CharacterBody,
    ) -> CrouchToggle
    where
        F: FnOnce() -> bool,
    {
        if !grounded || self.task.is_running() {
            return CrouchToggle::Ignored;
        }

        if self.is_crouching && overhead_blocked() {
            log::debug!("stand up blocked by overhead obstacle");
            return CrouchToggle::Blocked;
        }

        self.from = StanceProfile::new(body.height(), body.center());
        self.to = if self.is_crouching {
            self.standing
        } else {
            self.crouching
        };
        self.task.start();
        self.from.apply(body);

        let crouching = !self.is_crouching;
        log::debug!(
            "crouch transition started (to {}, {:.2}m -> {:.2}m)",
            if crouching { "crouch" } else { "stand" },
            self.from.height,
            self.to.height
        );
        CrouchToggle::Started { crouching }
    }

    /// Step the in-flight transition. Returns `true` on the tick it completes.
    pub fn advance(&mut self, dt: f32, body: &mut dyn CharacterBody) -> bool {
        if !self.task.is_running() {
            return false;
        }

        let elapsed = self.task.advance(dt);
        if elapsed <= self.duration {
            self.from.lerp(self.to, elapsed / self.duration).apply(body);
            return false;
        }

        self.to.apply(body);
        self.is_crouching = !self.is_crouching;
        self.task.finish();
        log::debug!("crouch transition finished (crouching: {})", self.is_crouching);
        true
    }
}

/// Linear interpolation between two values.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
