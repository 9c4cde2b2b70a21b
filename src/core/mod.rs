//! Core engine module
//!
//! Contains the scene contract, the runner that drives it, and the
//! window-backed engine loop.

mod debug;
mod engine;
mod events;
mod runner;
mod scene;
mod time;

pub use debug::FrameStats;
pub use engine::{Engine, EngineConfig, EngineError};
pub use events::EventQueue;
pub use runner::Runner;
pub use scene::{
    Scene, SceneContext, SceneError, SceneFactory, SceneId, SceneRegistry, SceneResult,
    TransitionError,
};
pub use time::{Clock, frame_budget, pacing_delay};
