//! First-person controller configuration.
//!
//! Every tuning value lives here so it can be loaded from the game config
//! file. Defaults are the shipped values.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Gait;
use crate::config::{ConfigError, require_non_negative, require_positive};
use crate::physics::LayerMask;

/// Which controller behaviours are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub sprint: bool,
    pub jump: bool,
    pub crouch: bool,
    pub head_bob: bool,
    pub footsteps: bool,
    pub stamina: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            sprint: true,
            jump: true,
            crouch: true,
            head_bob: true,
            footsteps: true,
            stamina: true,
        }
    }
}

/// Configuration for the first-person controller.
///
/// Distances in meters, times in seconds, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub features: FeatureToggles,

    // ========================================================================
    // Movement
    // ========================================================================
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub crouch_speed: f32,

    // ========================================================================
    // Look
    // ========================================================================
    /// Degrees per look-axis unit
    pub look_speed_x: f32,
    pub look_speed_y: f32,
    /// Maximum degrees above the horizon
    pub upper_look_limit: f32,
    /// Maximum degrees below the horizon
    pub lower_look_limit: f32,
    /// Camera offset from the body origin
    pub camera_offset: Vec3,

    // ========================================================================
    // Jumping
    // ========================================================================
    /// Vertical speed set on jump (m/s)
    pub jump_force: f32,
    /// Downward acceleration while airborne (m/s²)
    pub gravity: f32,

    // ========================================================================
    // Crouch
    // ========================================================================
    pub crouch_height: f32,
    pub stand_height: f32,
    pub time_to_crouch: f32,
    pub crouching_center: Vec3,
    pub standing_center: Vec3,
    /// Length of the upward probe that blocks standing up
    pub overhead_probe_distance: f32,

    // ========================================================================
    // Head-bob
    // ========================================================================
    pub walk_bob_speed: f32,
    pub walk_bob_amount: f32,
    pub sprint_bob_speed: f32,
    pub sprint_bob_amount: f32,
    pub crouch_bob_speed: f32,
    pub crouch_bob_amount: f32,

    // ========================================================================
    // Footsteps
    // ========================================================================
    /// Seconds between steps when walking
    pub base_step_interval: f32,
    pub crouch_step_multiplier: f32,
    pub sprint_step_multiplier: f32,
    /// Length of the downward ground-classification probe
    pub footstep_probe_distance: f32,

    // ========================================================================
    // Stamina
    // ========================================================================
    pub max_stamina: f32,
    /// Stamina drained per second of sprinting
    pub stamina_use_rate: f32,
    /// Seconds of not sprinting before regeneration starts
    pub regen_delay: f32,
    /// Stamina restored per regeneration step
    pub regen_increment: f32,
    /// Seconds between regeneration steps
    pub regen_interval: f32,

    /// Layers hit by the overhead and footstep probes
    pub probe_mask: LayerMask,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            features: FeatureToggles::default(),

            walk_speed: 3.0,
            sprint_speed: 6.0,
            crouch_speed: 1.5,

            look_speed_x: 2.0,
            look_speed_y: 2.0,
            upper_look_limit: 80.0,
            lower_look_limit: 80.0,
            camera_offset: Vec3::new(0.0, 0.6, 0.0),

            jump_force: 8.0,
            gravity: 30.0,

            crouch_height: 0.5,
            stand_height: 2.0,
            time_to_crouch: 0.25,
            crouching_center: Vec3::new(0.0, 0.5, 0.0),
            standing_center: Vec3::ZERO,
            overhead_probe_distance: 1.0,

            walk_bob_speed: 14.0,
            walk_bob_amount: 0.05,
            sprint_bob_speed: 18.0,
            sprint_bob_amount: 0.11,
            crouch_bob_speed: 8.0,
            crouch_bob_amount: 0.025,

            base_step_interval: 0.5,
            crouch_step_multiplier: 1.5,
            sprint_step_multiplier: 0.6,
            footstep_probe_distance: 3.0,

            max_stamina: 100.0,
            stamina_use_rate: 5.0,
            regen_delay: 5.0,
            regen_increment: 2.0,
            regen_interval: 0.1,

            probe_mask: LayerMask::ALL,
        }
    }
}

impl ControllerConfig {
    /// Movement speed for a gait tier.
    pub fn speed_for(&self, gait: Gait) -> f32 {
        match gait {
            Gait::Walk => self.walk_speed,
            Gait::Sprint => self.sprint_speed,
            Gait::Crouch => self.crouch_speed,
        }
    }

    /// (phase speed, amplitude) of the head-bob for a gait tier.
    pub fn bob_for(&self, gait: Gait) -> (f32, f32) {
        match gait {
            Gait::Walk => (self.walk_bob_speed, self.walk_bob_amount),
            Gait::Sprint => (self.sprint_bob_speed, self.sprint_bob_amount),
            Gait::Crouch => (self.crouch_bob_speed, self.crouch_bob_amount),
        }
    }

    /// Seconds between footsteps for a gait tier.
    pub fn step_interval_for(&self, gait: Gait) -> f32 {
        match gait {
            Gait::Walk => self.base_step_interval,
            Gait::Sprint => self.base_step_interval * self.sprint_step_multiplier,
            Gait::Crouch => self.base_step_interval * self.crouch_step_multiplier,
        }
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_negative("walk_speed", self.walk_speed)?;
        require_non_negative("sprint_speed", self.sprint_speed)?;
        require_non_negative("crouch_speed", self.crouch_speed)?;
        require_non_negative("look_speed_x", self.look_speed_x)?;
        require_non_negative("look_speed_y", self.look_speed_y)?;
        require_non_negative("upper_look_limit", self.upper_look_limit)?;
        require_non_negative("lower_look_limit", self.lower_look_limit)?;
        require_non_negative("jump_force", self.jump_force)?;
        require_non_negative("gravity", self.gravity)?;
        require_positive("crouch_height", self.crouch_height)?;
        require_positive("stand_height", self.stand_height)?;
        require_positive("time_to_crouch", self.time_to_crouch)?;
        require_non_negative("overhead_probe_distance", self.overhead_probe_distance)?;
        require_positive("base_step_interval", self.base_step_interval)?;
        require_positive("crouch_step_multiplier", self.crouch_step_multiplier)?;
        require_positive("sprint_step_multiplier", self.sprint_step_multiplier)?;
        require_non_negative("footstep_probe_distance", self.footstep_probe_distance)?;
        require_positive("max_stamina", self.max_stamina)?;
        require_non_negative("stamina_use_rate", self.stamina_use_rate)?;
        require_non_negative("regen_delay", self.regen_delay)?;
        require_positive("regen_increment", self.regen_increment)?;
        require_positive("regen_interval", self.regen_interval)?;

        if self.crouch_height > self.stand_height {
            return Err(ConfigError::Invalid {
                field: "crouch_height",
                reason: "must not exceed stand_height",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ControllerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_gait_lookups() {
        let config = ControllerConfig::default();
        assert_eq!(config.speed_for(Gait::Walk), 3.0);
        assert_eq!(config.speed_for(Gait::Sprint), 6.0);
        assert_eq!(config.speed_for(Gait::Crouch), 1.5);
        assert_eq!(config.bob_for(Gait::Sprint), (18.0, 0.11));
        assert_eq!(config.step_interval_for(Gait::Walk), 0.5);
        assert_eq!(config.step_interval_for(Gait::Crouch), 0.75);
        assert!((config.step_interval_for(Gait::Sprint) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let config = ControllerConfig {
            regen_interval: 0.0,
            ..Default::default()
        };
        match config.validate() {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "regen_interval"),
            other => panic!("expected invalid regen_interval, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_crouch_taller_than_stand() {
        let config = ControllerConfig {
            crouch_height: 3.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_partial_override() {
        let config: ControllerConfig = serde_json::from_str(
            r#"{ "walk_speed": 4.0, "features": { "head_bob": false }, "crouching_center": [0.0, 0.4, 0.0] }"#,
        )
        .unwrap();
        assert_eq!(config.walk_speed, 4.0);
        assert!(!config.features.head_bob);
        assert!(config.features.sprint);
        assert_eq!(config.crouching_center, Vec3::new(0.0, 0.4, 0.0));
        assert_eq!(config.max_stamina, 100.0);
    }
}
