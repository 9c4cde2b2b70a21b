//! Input handling

use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, ModifiersState};

use super::InputEvent;

/// Raw input tracker.
///
/// Turns the window's key, button and cursor notifications into
/// [`InputEvent`]s. A held key produces a single press until it is released.
#[derive(Debug)]
pub struct Input {
    /// Currently pressed keys
    pressed_keys: FxHashSet<KeyCode>,
    /// Modifier keys currently held
    modifiers: ModifiersState,
    /// Current mouse position
    mouse_position: Vec2,
}

impl Input {
    /// Create a new input tracker
    pub fn new() -> Self {
        Self {
            pressed_keys: FxHashSet::default(),
            modifiers: ModifiersState::empty(),
            mouse_position: Vec2::ZERO,
        }
    }

    /// Process a keyboard event
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => {
                if self.pressed_keys.insert(key) {
                    Some(InputEvent::KeyPressed {
                        key,
                        modifiers: self.modifiers,
                    })
                } else {
                    None
                }
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key);
                None
            }
        }
    }

    /// Process a mouse button event
    pub fn process_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => Some(InputEvent::MouseButtonPressed {
                button,
                position: self.mouse_position,
            }),
            ElementState::Released => None,
        }
    }

    /// Process mouse movement
    pub fn process_mouse_motion(&mut self, position: Vec2) -> InputEvent {
        self.mouse_position = position;
        InputEvent::MouseMoved { position }
    }

    /// Record the modifier keys reported by the window
    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Forget held keys, e.g. after the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.modifiers = ModifiersState::empty();
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}
