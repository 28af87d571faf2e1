//! Stamina
//!
//! Sprinting drains stamina continuously. Once the player stops sprinting a
//! regeneration task waits out a delay, then restores a fixed increment every
//! interval until full. Sprinting again cancels regeneration; running dry
//! disables sprinting until the first increment lands.

use super::{ControllerConfig, TimedTask};

/// Which half of the regeneration task is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenStage {
    /// Waiting out the delay after sprinting stopped
    Delay,
    /// Restoring one increment per interval
    Refill,
}

/// Owns the stamina value and the sprint gate.
#[derive(Debug, Clone)]
pub struct StaminaRegulator {
    current: f32,
    max: f32,
    use_rate: f32,
    regen_delay: f32,
    regen_increment: f32,
    regen_interval: f32,

    sprint_allowed: bool,
    regen: TimedTask,
    stage: RegenStage,
}

impl StaminaRegulator {
    /// Full regulator. All durations in seconds.
    pub fn new(
        max: f32,
        use_rate: f32,
        regen_delay: f32,
        regen_increment: f32,
        regen_interval: f32,
    ) -> Self {
        Self {
            current: max,
            max,
            use_rate,
            regen_delay,
            regen_increment,
            regen_interval,
            sprint_allowed: true,
            regen: TimedTask::new(),
            stage: RegenStage::Delay,
        }
    }

    pub fn from_config(config: &ControllerConfig) -> Self {
        Self::new(
            config.max_stamina,
            config.stamina_use_rate,
            config.regen_delay,
            config.regen_increment,
            config.regen_interval,
        )
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// current / max, for the stamina bar.
    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            (self.current / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn sprint_allowed(&self) -> bool {
        self.sprint_allowed
    }

    /// Sprinting means the gate is open and the sprint key is held.
    pub fn is_sprinting(&self, sprint_held: bool) -> bool {
        self.sprint_allowed && sprint_held
    }

    pub fn is_regenerating(&self) -> bool {
        self.regen.is_running()
    }

    /// Stage of the running regeneration task, if any.
    pub fn regen_stage(&self) -> Option<RegenStage> {
        self.regen.is_running().then_some(self.stage)
    }

    /// Overwrite the stamina value (clamped to `[0, max]`).
    pub fn set_current(&mut self, value: f32) {
        self.current = value.clamp(0.0, self.max);
    }

    /// One controller tick.
    ///
    /// A regeneration task started during this call first advances on the
    /// next tick.
    pub fn tick(&mut self, dt: f32, sprint_held: bool, has_move_input: bool) {
        let dt = dt.max(0.0);

        if self.is_sprinting(sprint_held) && has_move_input {
            if self.regen.is_running() {
                self.regen.cancel();
                log::debug!("stamina regen cancelled at {:.1}", self.current);
            }

            self.current = (self.current - self.use_rate * dt).max(0.0);
            if self.current <= 0.0 {
                self.sprint_allowed = false;
                log::debug!("stamina depleted, sprint disabled");
            }
        }

        if !self.is_sprinting(sprint_held) && self.current < self.max && !self.regen.is_running() {
            self.regen.start();
            self.stage = RegenStage::Delay;
            log::trace!("stamina regen scheduled");
            return;
        }

        self.advance_regen(dt);
    }

    fn advance_regen(&mut self, dt: f32) {
        if !self.regen.is_running() {
            return;
        }

        let mut elapsed = self.regen.advance(dt);
        if self.stage == RegenStage::Delay {
            if elapsed < self.regen_delay {
                return;
            }
            elapsed = self.regen.rewind(self.regen_delay);
            self.stage = RegenStage::Refill;
            self.refill_step();
        }

        while self.regen.is_running() && elapsed >= self.regen_interval {
            elapsed = self.regen.rewind(self.regen_interval);
            self.refill_step();
        }
    }

    fn refill_step(&mut self) {
        if self.current >= self.max {
            self.regen.finish();
            return;
        }

        self.current = (self.current + self.regen_increment).min(self.max);
        if self.current > 0.0 && !self.sprint_allowed {
            self.sprint_allowed = true;
            log::debug!("stamina recovering, sprint re-enabled");
        }

        if self.current >= self.max {
            self.regen.finish();
            log::debug!("stamina full");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// max 100, drain 10/s, delay 1s, +10 every 0.25s
    fn regulator() -> StaminaRegulator {
        StaminaRegulator::new(100.0, 10.0, 1.0, 10.0, 0.25)
    }

    #[test]
    fn test_starts_full() {
        let stamina = regulator();
        assert_eq!(stamina.current(), 100.0);
        assert!(stamina.sprint_allowed());
        assert!(!stamina.is_regenerating());
        assert_eq!(stamina.fraction(), 1.0);
    }

    #[test]
    fn test_drains_only_with_movement() {
        let mut stamina = regulator();
        stamina.tick(0.5, true, false);
        assert_eq!(stamina.current(), 100.0);

        stamina.tick(0.5, true, true);
        assert!(approx_eq(stamina.current(), 95.0));
    }

    #[test]
    fn test_depletion_disables_sprint() {
        let mut stamina = regulator();
        for _ in 0..20 {
            stamina.tick(0.5, true, true);
        }
        assert_eq!(stamina.current(), 0.0);
        assert!(!stamina.sprint_allowed());
        assert!(!stamina.is_sprinting(true));
        // No longer sprinting, so regen was scheduled on the same tick
        assert_eq!(stamina.regen_stage(), Some(RegenStage::Delay));

        stamina.tick(0.5, true, true);
        assert_eq!(stamina.current(), 0.0);
    }

    #[test]
    fn test_never_negative() {
        let mut stamina = regulator();
        stamina.set_current(1.0);
        stamina.tick(0.5, true, true);
        assert_eq!(stamina.current(), 0.0);
    }

    #[test]
    fn test_regen_after_delay() {
        let mut stamina = regulator();
        stamina.set_current(50.0);

        // Scheduling tick
        stamina.tick(0.25, false, false);
        assert!(stamina.is_regenerating());

        // Three ticks of delay: 0.25, 0.5, 0.75
        for _ in 0..3 {
            stamina.tick(0.25, false, false);
            assert_eq!(stamina.current(), 50.0);
        }

        // Delay elapses, first increment immediately
        stamina.tick(0.25, false, false);
        assert!(approx_eq(stamina.current(), 60.0));
        assert_eq!(stamina.regen_stage(), Some(RegenStage::Refill));

        stamina.tick(0.25, false, false);
        assert!(approx_eq(stamina.current(), 70.0));
    }

    #[test]
    fn test_regen_stops_at_max() {
        let mut stamina = regulator();
        stamina.set_current(95.0);
        stamina.tick(0.25, false, false);
        stamina.tick(1.0, false, false);

        assert_eq!(stamina.current(), 100.0);
        assert!(!stamina.is_regenerating());
    }

    #[test]
    fn test_large_tick_catches_up() {
        let mut stamina = regulator();
        stamina.set_current(0.0);
        stamina.tick(0.25, false, false);

        // 1.0 delay + 0.5 = first increment plus two more
        stamina.tick(1.5, false, false);
        assert!(approx_eq(stamina.current(), 30.0));
    }

    #[test]
    fn test_sprint_cancels_regen() {
        let mut stamina = regulator();
        stamina.set_current(50.0);
        stamina.tick(0.25, false, false);
        stamina.tick(0.5, false, false);
        assert!(stamina.is_regenerating());

        stamina.tick(0.5, true, true);
        assert!(!stamina.is_regenerating());
        assert!(approx_eq(stamina.current(), 45.0));

        // Delay restarts from zero after sprinting stops
        stamina.tick(0.25, false, false);
        assert_eq!(stamina.regen_stage(), Some(RegenStage::Delay));
        stamina.tick(0.75, false, false);
        assert!(approx_eq(stamina.current(), 45.0));
        stamina.tick(0.25, false, false);
        assert!(approx_eq(stamina.current(), 55.0));
    }

    #[test]
    fn test_sprint_restored_on_first_increment() {
        let mut stamina = regulator();
        for _ in 0..20 {
            stamina.tick(0.5, true, true);
        }
        assert!(!stamina.sprint_allowed());

        stamina.tick(1.0, true, true);
        assert!(approx_eq(stamina.current(), 10.0));
        assert!(stamina.sprint_allowed());
    }

    #[test]
    fn test_held_sprint_without_input_keeps_regen() {
        let mut stamina = regulator();
        stamina.set_current(50.0);
        stamina.tick(0.25, false, false);

        stamina.tick(1.0, true, false);
        assert!(stamina.is_regenerating());
        assert!(approx_eq(stamina.current(), 60.0));
    }
}
