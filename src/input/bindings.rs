//! Key bindings for menu navigation
//!
//! Physical keys map to logical menu actions, so scenes react to
//! `MenuAction::Next` rather than to a particular key.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

/// Logical actions a menu understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Move the selection down
    Next,
    /// Move the selection up
    Previous,
    /// Activate the selected entry
    Activate,
    /// Leave the menu
    Back,
}

/// Maps physical keys to menu actions.
#[derive(Debug, Clone)]
pub struct MenuBindings {
    /// Key to action bindings
    key_bindings: FxHashMap<KeyCode, MenuAction>,
}

impl MenuBindings {
    /// Create an empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_bindings: FxHashMap::default(),
        }
    }

    /// Arrow keys or W/S to move, Enter or Space to activate, Escape to leave.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();

        bindings.bind(KeyCode::ArrowDown, MenuAction::Next);
        bindings.bind(KeyCode::KeyS, MenuAction::Next);
        bindings.bind(KeyCode::ArrowUp, MenuAction::Previous);
        bindings.bind(KeyCode::KeyW, MenuAction::Previous);

        bindings.bind(KeyCode::Enter, MenuAction::Activate);
        bindings.bind(KeyCode::NumpadEnter, MenuAction::Activate);
        bindings.bind(KeyCode::Space, MenuAction::Activate);

        bindings.bind(KeyCode::Escape, MenuAction::Back);

        bindings
    }

    /// Bind a key to an action, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyCode, action: MenuAction) {
        self.key_bindings.insert(key, action);
    }

    /// Unbind a key.
    pub fn unbind(&mut self, key: KeyCode) {
        self.key_bindings.remove(&key);
    }

    /// Get the action for a key.
    #[must_use]
    pub fn action(&self, key: KeyCode) -> Option<MenuAction> {
        self.key_bindings.get(&key).copied()
    }
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
