//! Footsteps
//!
//! A countdown per gait; each time it runs out while the player moves on the
//! ground, the surface below is probed and a [`FootstepEvent`] is produced.
//! Playing the sound is up to whoever drains the events.

use glam::Vec3;

use crate::physics::RaycastHit;

/// Collider tag for metal floors.
pub const METAL_TAG: &str = "Footstep/METAL";
/// Collider tag for non-metal floors.
pub const NON_METAL_TAG: &str = "Footstep/NONMETAL";

/// Footstep sound category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Metal,
    NonMetal,
    /// Any other tag
    Default,
}

impl SurfaceKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            METAL_TAG => SurfaceKind::Metal,
            NON_METAL_TAG => SurfaceKind::NonMetal,
            _ => SurfaceKind::Default,
        }
    }
}

/// One footstep, ready to be played.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootstepEvent {
    pub surface: SurfaceKind,
    /// Where the ground probe hit
    pub position: Vec3,
}

/// Footstep countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FootstepTimer {
    remaining: f32,
}

impl FootstepTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Count down while moving on the ground.
    ///
    /// When the countdown runs out the timer resets to `interval` and
    /// `probe` is asked for the ground below. A probe miss still consumes the
    /// step but yields no event.
    pub fn update<F>(
        &mut self,
        dt: f32,
        grounded: bool,
        moving: bool,
        interval: f32,
        probe: F,
    ) -> Option<FootstepEvent>
    where
        F: FnOnce() -> Option<RaycastHit>,
    {
        if !grounded || !moving {
            return None;
        }

        self.remaining -= dt.max(0.0);
        if self.remaining > 0.0 {
            return None;
        }
        self.remaining = interval;

        let Some(hit) = probe() else {
            log::trace!("footstep probe found no ground");
            return None;
        };

        let event = FootstepEvent {
            surface: SurfaceKind::from_tag(&hit.tag),
            position: hit.point,
        };
        log::trace!("footstep on {:?} at {:?}", event.surface, event.position);
        Some(event)
    }
}
