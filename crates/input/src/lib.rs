//! Per-frame input snapshot for keyboard, mouse, and the quit signal.
//!
//! The window layer feeds raw events in; views only ever read the snapshot.

use glam::Vec2;
use std::collections::HashSet;

/// Input state for the current frame.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed this frame.
    keys_pressed: HashSet<KeyCode>,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,
    /// Mouse button press/release events this frame, in arrival order.
    mouse_events: Vec<MouseEvent>,

    /// Mouse position in play-field coordinates.
    mouse_position: Vec2,

    /// Set once the window was closed or Escape was hit.
    quit_requested: bool,
}

/// A discrete mouse button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub state: ElementState,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop per-frame events. Call once the frame that consumed them has finished.
    pub fn clear_frame_events(&mut self) {
        self.keys_pressed.clear();
        self.mouse_events.clear();
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                self.mouse_held.remove(&button);
            }
        }
        self.mouse_events.push(MouseEvent { button, state });
    }

    /// Process cursor position update (already mapped into play-field coordinates).
    pub fn process_cursor_position(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    /// Raise the quit signal.
    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            log::info!("Quit requested");
        }
        self.quit_requested = true;
    }

    // Query methods

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Check if a key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if a mouse button is held.
    pub fn is_mouse_held(&self, button: MouseButton) -> bool {
        self.mouse_held.contains(&button)
    }

    /// Check if a mouse button went down this frame.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_events
            .iter()
            .any(|e| e.button == button && e.state == ElementState::Pressed)
    }

    /// Mouse button events of this frame.
    pub fn mouse_events(&self) -> &[MouseEvent] {
        &self.mouse_events
    }

    /// Get the mouse position in play-field coordinates.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Whether the player asked to leave the game.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Check if interact was pressed (E).
    pub fn is_interact_pressed(&self) -> bool {
        self.is_key_pressed(KeyCode::KeyE)
    }

    /// Check if the left mouse button went down this frame.
    pub fn is_click(&self) -> bool {
        self.is_mouse_pressed(MouseButton::Left)
    }

    /// Thrust forward (W).
    pub fn is_thrust_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyW)
    }

    /// Reverse thrust (S).
    pub fn is_reverse_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyS)
    }

    /// Move left: strafe for the ship, walk for the character (A).
    pub fn is_left_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyA)
    }

    /// Move right: strafe for the ship, walk for the character (D).
    pub fn is_right_held(&self) -> bool {
        self.is_key_held(KeyCode::KeyD)
    }

    /// Jump (Space).
    pub fn is_jump_held(&self) -> bool {
        self.is_key_held(KeyCode::Space)
    }

    /// Shift locks the ship's heading instead of following the mouse.
    pub fn is_orientation_lock_held(&self) -> bool {
        self.is_key_held(KeyCode::ShiftLeft) || self.is_key_held(KeyCode::ShiftRight)
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_press_is_one_frame_hold_persists() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        assert!(input.is_interact_pressed());
        assert!(input.is_key_held(KeyCode::KeyE));

        input.clear_frame_events();
        assert!(!input.is_interact_pressed());
        assert!(input.is_key_held(KeyCode::KeyE));

        // Key repeat while held does not count as a new press.
        input.process_keyboard(KeyCode::KeyE, ElementState::Pressed);
        assert!(!input.is_interact_pressed());

        input.process_keyboard(KeyCode::KeyE, ElementState::Released);
        assert!(!input.is_key_held(KeyCode::KeyE));
    }

    #[test]
    fn mouse_events_are_recorded_in_order() {
        let mut input = InputState::new();
        input.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        input.process_mouse_button(MouseButton::Left, ElementState::Released);
        assert!(input.is_click());
        assert!(!input.is_mouse_held(MouseButton::Left));
        assert_eq!(input.mouse_events().len(), 2);
        assert_eq!(input.mouse_events()[1].state, ElementState::Released);

        input.clear_frame_events();
        assert!(!input.is_click());
    }

    #[test]
    fn quit_signal_is_sticky() {
        let mut input = InputState::new();
        assert!(!input.quit_requested());
        input.request_quit();
        input.clear_frame_events();
        assert!(input.quit_requested());
    }

    #[test]
    fn shift_locks_orientation() {
        let mut input = InputState::new();
        input.process_keyboard(KeyCode::ShiftRight, ElementState::Pressed);
        assert!(input.is_orientation_lock_held());
    }
}
