//! Scene runner
//!
//! Owns the active scene and drives it through one tick at a time. The
//! runner knows nothing about windows: the engine feeds it events, a time
//! step and a surface, which keeps the whole scene flow testable headless.

use std::time::Duration;

use crate::core::debug::FrameStats;
use crate::core::scene::{Scene, SceneContext, SceneId, SceneRegistry, SceneResult, TransitionError};
use crate::input::InputEvent;
use crate::renderer::Surface;

/// Drives the active scene
#[derive(Debug)]
pub struct Runner {
    registry: SceneRegistry,
    active: Option<Box<dyn Scene>>,
    running: bool,
    stats: FrameStats,
}

impl Runner {
    /// Create a runner with no active scene
    #[must_use]
    pub fn new(registry: SceneRegistry) -> Self {
        Self {
            registry,
            active: None,
            running: true,
            stats: FrameStats::new(),
        }
    }

    /// Replace the active scene. The previous scene is dropped.
    pub fn change_scene(&mut self, scene: Box<dyn Scene>) {
        match &self.active {
            Some(previous) => log::info!("Scene: {} -> {}", previous.name(), scene.name()),
            None => log::info!("Scene: {}", scene.name()),
        }
        self.active = Some(scene);
    }

    /// Build a scene from the registry and make it active.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Unavailable`] if `id` is not registered;
    /// the active scene is kept.
    pub fn switch_to(&mut self, id: SceneId) -> Result<(), TransitionError> {
        let scene = self.registry.create(id)?;
        self.change_scene(scene);
        Ok(())
    }

    /// Whether the loop should keep going
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Name of the active scene
    #[must_use]
    pub fn active_scene_name(&self) -> Option<&'static str> {
        self.active.as_ref().map(|scene| scene.name())
    }

    /// Frame statistics
    #[must_use]
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Run one tick: dispatch `events`, update by `dt` seconds, render to `surface`.
    ///
    /// A quit event stops the runner and ends the tick on the spot. A quit
    /// requested by a scene lets the rest of the tick finish.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a scene callback. The rest of the
    /// tick is skipped and the failing callback's scene request is discarded.
    pub fn tick<I>(&mut self, events: I, dt: f32, surface: &mut dyn Surface) -> SceneResult
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if self.stats.record_frame(Duration::from_secs_f32(dt.max(0.0))) {
            log::debug!("{}", self.stats.format_stats());
        }

        for event in events {
            if event.is_quit() {
                log::info!("Quit requested");
                self.running = false;
                return Ok(());
            }
            self.dispatch(|scene, ctx| scene.handle_event(&event, ctx))?;
        }

        self.dispatch(|scene, ctx| scene.update(dt, ctx))?;

        if let Some(scene) = self.active.as_mut() {
            scene.render(surface)?;
        }

        Ok(())
    }

    /// Call into the active scene and apply whatever it requested.
    fn dispatch<F>(&mut self, callback: F) -> SceneResult
    where
        F: FnOnce(&mut dyn Scene, &mut SceneContext<'_>) -> SceneResult,
    {
        let Some(scene) = self.active.as_mut() else {
            return Ok(());
        };

        let mut ctx = SceneContext::new(&self.registry, self.running);
        callback(scene.as_mut(), &mut ctx)?;

        let next = ctx.requested_scene();
        self.running = ctx.is_running();

        if let Some(id) = next {
            self.switch_to(id)?;
        }
        Ok(())
    }
}
