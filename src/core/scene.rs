//! Scene contract and scene registry
//!
//! A scene is one phase of the application (title card, main menu, ...).
//! Scenes never construct each other directly: they ask for a [`SceneId`]
//! through their [`SceneContext`], and the runner builds the successor from
//! the [`SceneRegistry`] once the current callback returns.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::input::InputEvent;
use crate::renderer::Surface;

/// Identifies a kind of scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    /// Title card shown at startup
    Title,
    /// Main menu
    MainMenu,
    /// Gameplay
    Play,
    /// Options screen
    Options,
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "Title",
            Self::MainMenu => "MainMenu",
            Self::Play => "Play",
            Self::Options => "Options",
        };
        f.write_str(name)
    }
}

/// Result of a scene callback
pub type SceneResult = Result<(), SceneError>;

/// A unit of input handling, update and rendering.
///
/// Every operation has a no-op default, so a scene only implements what it needs.
pub trait Scene {
    /// Scene name for debugging and logging.
    fn name(&self) -> &'static str;

    /// React to one input event.
    fn handle_event(&mut self, _event: &InputEvent, _ctx: &mut SceneContext) -> SceneResult {
        Ok(())
    }

    /// Advance time-based state by `dt` seconds.
    fn update(&mut self, _dt: f32, _ctx: &mut SceneContext) -> SceneResult {
        Ok(())
    }

    /// Draw the current state. Rendering cannot request transitions or quit.
    fn render(&mut self, _surface: &mut dyn Surface) -> SceneResult {
        Ok(())
    }
}

impl fmt::Debug for dyn Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scene({})", self.name())
    }
}

/// Handle given to a scene during `handle_event` and `update`.
///
/// Collects the scene's requests; the runner applies them after the callback.
pub struct SceneContext<'a> {
    registry: &'a SceneRegistry,
    running: bool,
    next_scene: Option<SceneId>,
}

impl<'a> SceneContext<'a> {
    /// Create a context for one callback
    #[must_use]
    pub fn new(registry: &'a SceneRegistry, running: bool) -> Self {
        Self {
            registry,
            running,
            next_scene: None,
        }
    }

    /// Ask the runner to stop after the current tick.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Whether the game is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a scene of this kind can be entered.
    #[must_use]
    pub fn can_enter(&self, id: SceneId) -> bool {
        self.registry.contains(id)
    }

    /// Ask the runner to replace the active scene.
    ///
    /// The last successful request in a callback wins.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Unavailable`] if no scene is registered
    /// for `id`. The context is left unchanged in that case.
    pub fn request_scene(&mut self, id: SceneId) -> Result<(), TransitionError> {
        if !self.registry.contains(id) {
            return Err(TransitionError::Unavailable(id));
        }
        self.next_scene = Some(id);
        Ok(())
    }

    /// The scene requested so far, if any.
    #[must_use]
    pub fn requested_scene(&self) -> Option<SceneId> {
        self.next_scene
    }
}

/// Constructs a fresh scene
pub type SceneFactory = Box<dyn Fn() -> Box<dyn Scene>>;

/// Factory table keyed by scene id
#[derive(Default)]
pub struct SceneRegistry {
    factories: FxHashMap<SceneId, SceneFactory>,
}

impl SceneRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory, replacing any previous one for `id`.
    pub fn register<F>(&mut self, id: SceneId, factory: F)
    where
        F: Fn() -> Box<dyn Scene> + 'static,
    {
        self.factories.insert(id, Box::new(factory));
    }

    /// Whether a factory exists for `id`.
    #[must_use]
    pub fn contains(&self, id: SceneId) -> bool {
        self.factories.contains_key(&id)
    }

    /// Build a new scene.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Unavailable`] if no factory is registered.
    pub fn create(&self, id: SceneId) -> Result<Box<dyn Scene>, TransitionError> {
        self.factories
            .get(&id)
            .map(|factory| factory())
            .ok_or(TransitionError::Unavailable(id))
    }

    /// Number of registered scenes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

/// A scene change that could not happen
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// No scene is registered for this id
    #[error("scene {0} is not available")]
    Unavailable(SceneId),
}

/// Failure inside a scene callback
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A transition the scene depends on failed
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// Any other scene failure
    #[error("{scene}: {message}")]
    Failed {
        /// Name of the failing scene
        scene: &'static str,
        /// What went wrong
        message: String,
    },
}

impl SceneError {
    /// Build a failure for the named scene
    pub fn failed(scene: &'static str, message: impl Into<String>) -> Self {
        Self::Failed {
            scene,
            message: message.into(),
        }
    }
}
