//! Input Bindings Module
//!
//! Maps physical keys to the logical actions the gameplay components read.
//! Stored as one field per action so the bindings serialize cleanly into the
//! game config file.

use serde::{Deserialize, Serialize};

use super::{KeyCode, KeyboardState};

/// Logical input actions that can be bound to physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Sprint modifier (default: Left Shift)
    Sprint,
    /// Jump (default: Space)
    Jump,
    /// Crouch toggle (default: Left Ctrl)
    Crouch,
    /// Interact with the targeted object (default: E)
    Interact,
    /// Release the cursor (default: Escape)
    ReleaseCursor,
}

/// Key assignment for every [`InputAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub back: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub sprint: KeyCode,
    pub jump: KeyCode,
    pub crouch: KeyCode,
    pub interact: KeyCode,
    pub release_cursor: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            back: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
            sprint: KeyCode::ShiftLeft,
            jump: KeyCode::Space,
            crouch: KeyCode::ControlLeft,
            interact: KeyCode::E,
            release_cursor: KeyCode::Escape,
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key currently bound to `action`.
    pub fn key_for(&self, action: InputAction) -> KeyCode {
        match action {
            InputAction::MoveForward => self.forward,
            InputAction::MoveBack => self.back,
            InputAction::MoveLeft => self.left,
            InputAction::MoveRight => self.right,
            InputAction::Sprint => self.sprint,
            InputAction::Jump => self.jump,
            InputAction::Crouch => self.crouch,
            InputAction::Interact => self.interact,
            InputAction::ReleaseCursor => self.release_cursor,
        }
    }

    pub fn is_held(&self, keyboard: &KeyboardState, action: InputAction) -> bool {
        keyboard.is_held(self.key_for(action))
    }

    pub fn just_pressed(&self, keyboard: &KeyboardState, action: InputAction) -> bool {
        keyboard.just_pressed(self.key_for(action))
    }

    /// Digital axis in [-1, 1] from a negative/positive action pair.
    pub fn axis(&self, keyboard: &KeyboardState, negative: InputAction, positive: InputAction) -> f32 {
        (self.is_held(keyboard, positive) as i32 - self.is_held(keyboard, negative) as i32) as f32
    }
}
