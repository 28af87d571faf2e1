//! Input Module
//!
//! Platform-agnostic input handling for keyboard and mouse look.
//! Window events are fed in as they arrive; once per frame the state is
//! snapshotted into a [`FrameInput`] that the gameplay components poll.
//!
//! # Example
//!
//! ```rust,ignore
//! use waypost_engine::input::{InputState, KeyBindings, KeyCode};
//!
//! let bindings = KeyBindings::default();
//! let mut input = InputState::new();
//!
//! // In the event loop
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.accumulate_look(12.0, -3.0);
//!
//! // Once per frame
//! let frame = input.frame(&bindings, &cursor);
//! controller.update(dt, &frame, &world);
//! input.end_frame();
//! ```

pub mod bindings;
pub mod cursor_manager;
pub mod keyboard;

use glam::Vec2;

pub use bindings::{InputAction, KeyBindings};
pub use cursor_manager::{CursorAction, CursorManager};
pub use keyboard::{KeyCode, KeyState, KeyboardState};

/// Raw mouse motion to look-axis units (0.1 axis per pixel).
pub const DEFAULT_LOOK_AXIS_SCALE: f32 = 0.1;

/// One frame of polled input, in the shape the gameplay components read it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// x = strafe axis (right positive), y = forward axis (forward positive), each in [-1, 1]
    pub move_axes: Vec2,
    /// Look axes this frame; x = right positive, y = up positive
    pub look: Vec2,
    pub sprint_held: bool,
    /// Edge-triggered
    pub jump_pressed: bool,
    /// Edge-triggered
    pub crouch_pressed: bool,
    /// Edge-triggered
    pub interact_pressed: bool,
}

impl FrameInput {
    /// Whether any planar movement is requested.
    pub fn has_move_input(&self) -> bool {
        self.move_axes != Vec2::ZERO
    }
}

/// Combined keyboard state and accumulated mouse look.
#[derive(Debug, Clone)]
pub struct InputState {
    pub keyboard: KeyboardState,
    /// Accumulated mouse delta in pixels; +y is mouse moving down (window coordinates).
    look_delta: Vec2,
    /// Pixels to look-axis units
    pub look_axis_scale: f32,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keyboard: KeyboardState::default(),
            look_delta: Vec2::ZERO,
            look_axis_scale: DEFAULT_LOOK_AXIS_SCALE,
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion (pixels) until the next frame snapshot.
    pub fn accumulate_look(&mut self, dx: f32, dy: f32) {
        self.look_delta += Vec2::new(dx, dy);
    }

    /// Snapshot this frame's input. Consumes the accumulated look delta;
    /// look is zero while the cursor is not capturing.
    pub fn frame(&mut self, bindings: &KeyBindings, cursor: &CursorManager) -> FrameInput {
        let delta = std::mem::take(&mut self.look_delta);
        let look = if cursor.captures_look() {
            // Window y grows downward, look axis y grows upward
            Vec2::new(delta.x, -delta.y) * self.look_axis_scale
        } else {
            Vec2::ZERO
        };

        let kb = &self.keyboard;
        FrameInput {
            move_axes: Vec2::new(
                bindings.axis(kb, InputAction::MoveLeft, InputAction::MoveRight),
                bindings.axis(kb, InputAction::MoveBack, InputAction::MoveForward),
            ),
            look,
            sprint_held: bindings.is_held(kb, InputAction::Sprint),
            jump_pressed: bindings.just_pressed(kb, InputAction::Jump),
            crouch_pressed: bindings.just_pressed(kb, InputAction::Crouch),
            interact_pressed: bindings.just_pressed(kb, InputAction::Interact),
        }
    }

    /// Apply the cursor bindings (release key) for this frame.
    pub fn apply_cursor_bindings(&self, bindings: &KeyBindings, cursor: &mut CursorManager) -> CursorAction {
        if bindings.just_pressed(&self.keyboard, InputAction::ReleaseCursor) {
            cursor.handle_escape()
        } else {
            CursorAction::None
        }
    }

    /// Clear per-frame edges.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_idle() {
        let mut input = InputState::new();
        let frame = input.frame(&KeyBindings::default(), &CursorManager::new());
        assert_eq!(frame, FrameInput::default());
        assert!(!frame.has_move_input());
    }

    #[test]
    fn test_frame_maps_bindings() {
        let bindings = KeyBindings::default();
        let cursor = CursorManager::new();
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::W, true);
        input.keyboard.handle_key(KeyCode::A, true);
        input.keyboard.handle_key(KeyCode::ShiftLeft, true);
        input.keyboard.handle_key(KeyCode::Space, true);

        let frame = input.frame(&bindings, &cursor);
        assert_eq!(frame.move_axes, Vec2::new(-1.0, 1.0));
        assert!(frame.sprint_held);
        assert!(frame.jump_pressed);
        assert!(!frame.crouch_pressed);

        input.end_frame();
        let frame = input.frame(&bindings, &cursor);
        assert!(frame.sprint_held);
        assert!(!frame.jump_pressed);
    }

    #[test]
    fn test_look_consumed_and_scaled() {
        let bindings = KeyBindings::default();
        let cursor = CursorManager::new();
        let mut input = InputState::new();
        input.accumulate_look(10.0, 20.0);
        input.accumulate_look(10.0, 0.0);

        let frame = input.frame(&bindings, &cursor);
        assert!((frame.look.x - 2.0).abs() < 1e-5);
        assert!((frame.look.y + 2.0).abs() < 1e-5);

        let frame = input.frame(&bindings, &cursor);
        assert_eq!(frame.look, Vec2::ZERO);
    }

    #[test]
    fn test_look_ignored_while_released() {
        let bindings = KeyBindings::default();
        let cursor = CursorManager::new_released();
        let mut input = InputState::new();
        input.accumulate_look(50.0, 50.0);
        assert_eq!(input.frame(&bindings, &cursor).look, Vec2::ZERO);
    }

    #[test]
    fn test_escape_releases_cursor() {
        let bindings = KeyBindings::default();
        let mut cursor = CursorManager::new();
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::Escape, true);
        assert_eq!(input.apply_cursor_bindings(&bindings, &mut cursor), CursorAction::ApplyState);
        assert!(!cursor.is_locked());
    }
}
