//! Timed tasks
//!
//! Tick-driven stand-in for a suspendable routine: an elapsed-time
//! accumulator plus a phase. The owner decides what "done" means and calls
//! [`TimedTask::finish`]; cancelling drops the accumulator.

/// Lifecycle of a [`TimedTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskPhase {
    /// Never started, or cancelled
    #[default]
    Idle,
    Running,
    /// Ran to completion
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimedTask {
    phase: TaskPhase,
    elapsed: f32,
}

impl TimedTask {
    pub const fn new() -> Self {
        Self {
            phase: TaskPhase::Idle,
            elapsed: 0.0,
        }
    }

    pub fn phase(&self) -> TaskPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == TaskPhase::Running
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// (Re)start from zero.
    pub fn start(&mut self) {
        self.phase = TaskPhase::Running;
        self.elapsed = 0.0;
    }

    /// Back to idle, discarding elapsed time.
    pub fn cancel(&mut self) {
        self.phase = TaskPhase::Idle;
        self.elapsed = 0.0;
    }

    pub fn finish(&mut self) {
        self.phase = TaskPhase::Done;
    }

    /// Accumulate `dt` while running. Returns the elapsed time.
    pub fn advance(&mut self, dt: f32) -> f32 {
        if self.is_running() {
            self.elapsed += dt.max(0.0);
        }
        self.elapsed
    }

    /// Consume `amount` of elapsed time (one loop period). Returns what is left.
    pub fn rewind(&mut self, amount: f32) -> f32 {
        self.elapsed = (self.elapsed - amount).max(0.0);
        self.elapsed
    }
}
