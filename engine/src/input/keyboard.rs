//! Keyboard Input Module
//!
//! Held/pressed/released tracking with per-frame edge detection.
//! Uses generic key codes; [`KeyCode::from_winit`] translates window events.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Generic key codes, independent of the windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Action keys
    E,
    F,
    Q,
    R,
    C,
    Tab,
    Enter,
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Translate a winit physical key code.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as Winit;

        match key {
            Winit::KeyW => KeyCode::W,
            Winit::KeyA => KeyCode::A,
            Winit::KeyS => KeyCode::S,
            Winit::KeyD => KeyCode::D,
            Winit::Space => KeyCode::Space,
            Winit::ShiftLeft => KeyCode::ShiftLeft,
            Winit::ShiftRight => KeyCode::ShiftRight,
            Winit::ControlLeft => KeyCode::ControlLeft,
            Winit::ControlRight => KeyCode::ControlRight,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::KeyE => KeyCode::E,
            Winit::KeyF => KeyCode::F,
            Winit::KeyQ => KeyCode::Q,
            Winit::KeyR => KeyCode::R,
            Winit::KeyC => KeyCode::C,
            Winit::Tab => KeyCode::Tab,
            Winit::Enter => KeyCode::Enter,
            Winit::Escape => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

/// State of a single key for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub held: bool,
    /// Went from released to pressed since the last `end_frame`
    pub just_pressed: bool,
    /// Went from pressed to released since the last `end_frame`
    pub just_released: bool,
}

/// Complete keyboard state tracking.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    keys: HashMap<KeyCode, KeyState>,
}

impl KeyboardState {
    /// Create a new keyboard state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press or release event.
    ///
    /// OS key repeat (press while already held) does not produce a new edge.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if key == KeyCode::Unknown {
            return;
        }
        let state = self.keys.entry(key).or_default();
        if pressed && !state.held {
            state.just_pressed = true;
        } else if !pressed && state.held {
            state.just_released = true;
        }
        state.held = pressed;
    }

    pub fn key(&self, key: KeyCode) -> KeyState {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.key(key).held
    }

    /// Edge-triggered: true only on the frame the key went down.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.key(key).just_pressed
    }

    pub fn just_released(&self, key: KeyCode) -> bool {
        self.key(key).just_released
    }

    /// Clear edge flags. Call once after all systems consumed the frame's input.
    pub fn end_frame(&mut self) {
        for state in self.keys.values_mut() {
            state.just_pressed = false;
            state.just_released = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_edge_once() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::Space, true);
        assert!(keys.is_held(KeyCode::Space));
        assert!(keys.just_pressed(KeyCode::Space));

        keys.end_frame();
        assert!(keys.is_held(KeyCode::Space));
        assert!(!keys.just_pressed(KeyCode::Space));
    }

    #[test]
    fn test_key_repeat_is_not_an_edge() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::E, true);
        keys.end_frame();
        keys.handle_key(KeyCode::E, true);
        assert!(!keys.just_pressed(KeyCode::E));
    }

    #[test]
    fn test_release_edge() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::ShiftLeft, true);
        keys.end_frame();
        keys.handle_key(KeyCode::ShiftLeft, false);
        assert!(!keys.is_held(KeyCode::ShiftLeft));
        assert!(keys.just_released(KeyCode::ShiftLeft));
    }

    #[test]
    fn test_tap_within_one_frame_still_reports_press() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::ControlLeft, true);
        keys.handle_key(KeyCode::ControlLeft, false);
        assert!(keys.just_pressed(KeyCode::ControlLeft));
        assert!(!keys.is_held(KeyCode::ControlLeft));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut keys = KeyboardState::new();
        keys.handle_key(KeyCode::Unknown, true);
        assert!(!keys.is_held(KeyCode::Unknown));
    }

    #[test]
    fn test_from_winit() {
        use winit::keyboard::KeyCode as Winit;
        assert_eq!(KeyCode::from_winit(Winit::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from_winit(Winit::ControlLeft), KeyCode::ControlLeft);
        assert_eq!(KeyCode::from_winit(Winit::F12), KeyCode::Unknown);
    }
}
