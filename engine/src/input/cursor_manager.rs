//! Cursor Manager Module
//!
//! Tracks whether the cursor is locked and hidden for first-person look.
//! The first-person controller locks it when attached; Escape releases it and
//! a left click re-captures it.
//!
//! # Usage
//!
//! ```rust,ignore
//! use waypost_engine::input::CursorManager;
//!
//! let mut cursor = CursorManager::new_released();
//! let controller = FirstPersonController::new(config, body, &mut cursor);
//! assert!(cursor.is_locked());
//!
//! if cursor.handle_escape() == CursorAction::ApplyState {
//!     // window.set_cursor_grab(..) / set_cursor_visible(..)
//!     cursor.clear_dirty();
//! }
//! ```

/// Actions that the CursorManager recommends after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Push the lock/visibility state to the window
    ApplyState,
}

/// Cursor lock and visibility state.
#[derive(Debug, Clone)]
pub struct CursorManager {
    locked: bool,
    has_focus: bool,
    /// State changed and has not been pushed to the window yet
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Cursor locked and hidden.
    pub fn new() -> Self {
        Self {
            locked: true,
            has_focus: true,
            state_dirty: true,
        }
    }

    /// Cursor free and visible, e.g. before the player is spawned.
    pub fn new_released() -> Self {
        Self {
            locked: false,
            has_focus: true,
            state_dirty: true,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The cursor is hidden exactly while it is locked.
    pub fn is_visible(&self) -> bool {
        !self.locked
    }

    /// Look input should only be applied while the cursor is captured and the window focused.
    pub fn captures_look(&self) -> bool {
        self.locked && self.has_focus
    }

    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    pub fn lock(&mut self) {
        if !self.locked {
            self.locked = true;
            self.state_dirty = true;
        }
    }

    pub fn release(&mut self) {
        if self.locked {
            self.locked = false;
            self.state_dirty = true;
        }
    }

    /// Escape: release the cursor.
    pub fn handle_escape(&mut self) -> CursorAction {
        if self.locked {
            self.release();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Left click while released: re-capture.
    pub fn handle_left_click(&mut self) -> CursorAction {
        if !self.locked {
            self.lock();
            CursorAction::ApplyState
        } else {
            CursorAction::None
        }
    }

    /// Focus regained: the window needs the lock state re-applied.
    pub fn handle_focus_gained(&mut self) -> CursorAction {
        self.has_focus = true;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Focus lost: keep the lock preference, stop capturing look.
    pub fn handle_focus_lost(&mut self) {
        self.has_focus = false;
    }
}
