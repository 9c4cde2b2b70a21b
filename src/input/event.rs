//! Input events delivered to scenes

use glam::Vec2;
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, ModifiersState};

/// One discrete input event, as seen by the runner and the active scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window was asked to close
    Quit,
    /// A key went down (auto-repeat is not reported)
    KeyPressed {
        /// Physical key
        key: KeyCode,
        /// Modifier keys held at the time of the press
        modifiers: ModifiersState,
    },
    /// The cursor moved inside the window
    MouseMoved {
        /// Cursor position in window pixels
        position: Vec2,
    },
    /// A mouse button went down
    MouseButtonPressed {
        /// Which button
        button: MouseButton,
        /// Cursor position in window pixels
        position: Vec2,
    },
}

impl InputEvent {
    /// Key press with no modifiers held
    #[must_use]
    pub fn key(key: KeyCode) -> Self {
        Self::KeyPressed {
            key,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Whether this event ends the game: a close request or Ctrl+Q.
    #[must_use]
    pub fn is_quit(&self) -> bool {
        match self {
            Self::Quit => true,
            Self::KeyPressed { key, modifiers } => {
                *key == KeyCode::KeyQ && modifiers.control_key()
            }
            _ => false,
        }
    }
}
