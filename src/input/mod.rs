//! Input handling module
//!
//! Translates raw window input into discrete events and maps keys to menu actions.

mod bindings;
mod event;
mod state;

pub use bindings::{MenuAction, MenuBindings};
pub use event::InputEvent;
pub use state::Input;
