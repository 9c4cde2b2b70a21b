//! A minimal 2D game shell built in Rust
//!
//! This crate provides:
//! - A paced game loop on top of winit
//! - A scene contract with a registry for scene transitions
//! - Title and main menu scenes
//! - Software text and shape drawing presented through wgpu

pub mod cli;
pub mod core;
pub mod input;
pub mod renderer;
pub mod scenes;
pub mod ui;

// Re-exports for convenience
pub use glam;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::core::{
        Engine, EngineConfig, EngineError, Runner, Scene, SceneContext, SceneError, SceneId,
        SceneRegistry, SceneResult, TransitionError,
    };
    pub use crate::input::{InputEvent, MenuAction, MenuBindings};
    pub use crate::renderer::{Color, Surface, draw_text_centered};
    pub use crate::scenes::{MainMenuScene, TitleScene, register_defaults};
    pub use crate::ui::Rect;
    pub use glam::Vec2;
    pub use winit::keyboard::KeyCode;
}
