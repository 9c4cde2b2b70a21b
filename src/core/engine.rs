//! Core Engine struct and main game loop

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Fullscreen, Window, WindowId},
};

use crate::core::events::EventQueue;
use crate::core::runner::Runner;
use crate::core::scene::{SceneError, SceneId, SceneRegistry, TransitionError};
use crate::core::time::Clock;
use crate::input::Input;
use crate::renderer::{Canvas, Font, FontError, Presenter, RendererError};

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Window title
    pub title: String,
    /// Initial window width
    pub width: u32,
    /// Initial window height
    pub height: u32,
    /// Target frames per second (0 for unlimited)
    pub target_fps: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Start in borderless fullscreen
    pub fullscreen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("Scene Shell"),
            width: 800,
            height: 600,
            target_fps: 60,
            vsync: true,
            fullscreen: false,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set window dimensions
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set target FPS
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps;
        self
    }

    /// Enable or disable VSync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Enable or disable fullscreen
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }
}

/// Errors that end the engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The event loop could not be created or run
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The window could not be created
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// GPU setup or presentation failed
    #[error(transparent)]
    Renderer(#[from] RendererError),
    /// No font to draw text with
    #[error(transparent)]
    Font(#[from] FontError),
    /// The first scene could not be built
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// A scene callback failed while running
    #[error("scene failure: {0}")]
    Scene(#[from] SceneError),
}

/// Window resources, created once the event loop is live
struct Display {
    /// Declared before the window so the GPU surface is dropped first
    presenter: Presenter,
    window: Arc<Window>,
}

/// Main engine struct
pub struct Engine {
    config: EngineConfig,
    runner: Runner,
    font: Option<Font>,
    canvas: Option<Canvas>,
    display: Option<Display>,
    clock: Clock,
    input: Input,
    events: EventQueue,
    failure: Option<EngineError>,
}

impl Engine {
    /// Create a new engine that starts in the `first` scene
    ///
    /// # Errors
    ///
    /// Returns an error if `first` is not registered
    pub fn new(
        config: EngineConfig,
        registry: SceneRegistry,
        first: SceneId,
    ) -> Result<Self, EngineError> {
        let mut runner = Runner::new(registry);
        runner.switch_to(first)?;

        Ok(Self {
            clock: Clock::new(config.target_fps),
            config,
            runner,
            font: None,
            canvas: None,
            display: None,
            input: Input::new(),
            events: EventQueue::new(),
            failure: None,
        })
    }

    /// Run the engine until the game quits.
    ///
    /// Returns after the window has been torn down.
    ///
    /// # Errors
    ///
    /// Returns an error if startup fails or a scene callback fails
    pub fn run(mut self) -> Result<(), EngineError> {
        log::info!("Starting engine: {}", self.config.title);

        self.font = Some(Font::load_default()?);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)?;

        self.teardown();

        match self.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Record a fatal error and leave the event loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn create_display(&mut self, event_loop: &ActiveEventLoop) -> Result<(), EngineError> {
        let mut window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        if self.config.fullscreen {
            window_attrs = window_attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let presenter = pollster::block_on(Presenter::new(Arc::clone(&window), self.config.vsync))?;

        let size = window.inner_size();
        if let Some(font) = self.font.take() {
            self.canvas = Some(Canvas::new(size.width, size.height, font));
        }

        window.request_redraw();
        self.display = Some(Display { presenter, window });

        // Startup time is not part of the first frame
        self.clock.reset();

        log::info!("Window created: {}x{}", size.width, size.height);
        Ok(())
    }

    /// One loop iteration
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(display), Some(canvas)) = (self.display.as_mut(), self.canvas.as_mut()) else {
            return;
        };

        let dt = self.clock.tick();

        self.events.swap();
        if let Err(err) = self.runner.tick(self.events.drain(), dt, canvas) {
            self.fail(event_loop, err.into());
            return;
        }

        if !self.runner.is_running() {
            event_loop.exit();
            return;
        }

        if let Err(err) = display.presenter.present(canvas) {
            self.fail(event_loop, err.into());
            return;
        }

        display.window.request_redraw();
    }

    /// Release the GPU surface and the window
    fn teardown(&mut self) {
        if self.display.take().is_some() {
            log::info!("Window closed");
        }
        self.canvas = None;
    }
}

impl ApplicationHandler for Engine {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        if let Err(err) = self.create_display(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.events.push(crate::input::InputEvent::Quit);
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    if let Some(display) = &mut self.display {
                        display.presenter.resize(new_size.width, new_size.height);
                    }
                    if let Some(canvas) = &mut self.canvas {
                        canvas.resize(new_size.width, new_size.height);
                    }
                }
            }

            WindowEvent::Focused(false) => self.input.release_all(),

            WindowEvent::ModifiersChanged(modifiers) => {
                self.input.set_modifiers(modifiers.state());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(key_code) = event.physical_key
                    && let Some(input_event) = self.input.process_keyboard(key_code, event.state)
                {
                    self.events.push(input_event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(input_event) = self.input.process_mouse_button(button, state) {
                    self.events.push(input_event);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let input_event = self
                    .input
                    .process_mouse_motion(glam::Vec2::new(position.x as f32, position.y as f32));
                self.events.push(input_event);
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(display) = &self.display {
            display.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();

        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::default()
            .with_title("Demo")
            .with_size(1024, 768)
            .with_target_fps(30)
            .with_vsync(false)
            .with_fullscreen(true);

        assert_eq!(config.title, "Demo");
        assert_eq!((config.width, config.height), (1024, 768));
        assert_eq!(config.target_fps, 30);
        assert!(!config.vsync);
        assert!(config.fullscreen);
    }

    #[test]
    fn test_engine_rejects_unregistered_first_scene() {
        let result = Engine::new(EngineConfig::default(), SceneRegistry::new(), SceneId::Title);

        assert!(matches!(
            result,
            Err(EngineError::Transition(TransitionError::Unavailable(SceneId::Title)))
        ));
    }

    #[test]
    fn test_scene_failure_message() {
        let err = EngineError::from(SceneError::failed("Menu", "broken"));
        assert_eq!(err.to_string(), "scene failure: Menu: broken");
    }
}
