//! Title card shown at startup

use std::f32::consts::TAU;

use glam::Vec2;

use super::GAME_TITLE;
use crate::core::{Scene, SceneContext, SceneId, SceneResult};
use crate::input::InputEvent;
use crate::renderer::{Color, Surface, draw_text_centered};
use crate::ui::Rect;

const BACKGROUND: Color = Color::rgb(12, 18, 30);
const TITLE_COLOR: Color = Color::rgb(240, 235, 220);
const HINT_COLOR: Color = Color::rgb(180, 180, 180);
const BAR_TRACK: Color = Color::rgb(60, 60, 80);
const BAR_FILL: Color = Color::rgb(100, 200, 140);

const TITLE_PX: f32 = 72.0;
const HINT_PX: f32 = 28.0;
const HINT: &str = "Press any key to continue";

/// Pulsing title that moves on to the main menu after a few seconds or on any key
#[derive(Debug)]
pub struct TitleScene {
    /// Seconds since the scene started
    elapsed: f32,
    /// Seconds before moving on by itself
    display_time: f32,
    /// Pulse cycles per second
    pulse_speed: f32,
    /// Title scale for the current frame, pulsing around 1
    logo_scale: f32,
    /// Set once the menu has been asked for
    finished: bool,
}

impl TitleScene {
    /// Title card that stays up for 2.5 seconds
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            display_time: 2.5,
            pulse_speed: 1.5,
            logo_scale: 1.0,
            finished: false,
        }
    }

    /// Override how long the title stays up
    #[must_use]
    pub fn with_display_time(mut self, seconds: f32) -> Self {
        self.display_time = seconds;
        self
    }

    /// Seconds since the scene started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Current title scale factor
    pub fn logo_scale(&self) -> f32 {
        self.logo_scale
    }

    /// Fraction of the display time that has passed, clamped to 1
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.display_time.max(1e-4)).min(1.0)
    }

    /// Ask for the main menu, at most once
    fn advance(&mut self, ctx: &mut SceneContext) {
        if self.finished {
            return;
        }
        self.finished = true;

        if let Err(err) = ctx.request_scene(SceneId::MainMenu) {
            log::debug!("Title: {err}");
        }
    }
}

impl Default for TitleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &'static str {
        "Title"
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneContext) -> SceneResult {
        if let InputEvent::KeyPressed { .. } = event {
            self.advance(ctx);
        }
        Ok(())
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneContext) -> SceneResult {
        self.elapsed += dt;
        self.logo_scale = 1.0 + 0.04 * (self.elapsed * self.pulse_speed * TAU).sin();

        if self.elapsed >= self.display_time {
            self.advance(ctx);
        }
        Ok(())
    }

    fn render(&mut self, surface: &mut dyn Surface) -> SceneResult {
        let size = surface.size();
        let center_x = (size.x / 2.0).floor();
        let center_y = (size.y / 2.0).floor();
        surface.clear(BACKGROUND);

        draw_text_centered(
            surface,
            GAME_TITLE,
            TITLE_PX * self.logo_scale,
            Vec2::new(center_x, center_y - 20.0),
            TITLE_COLOR,
        );

        let hint = draw_text_centered(
            surface,
            HINT,
            HINT_PX,
            Vec2::new(center_x, center_y + 60.0),
            HINT_COLOR,
        );

        let bar_width = (size.x * 0.4).floor();
        let bar_x = ((size.x - bar_width) / 2.0).floor();
        let bar_y = hint.bottom() + 18.0;
        surface.fill_rect(Rect::new(bar_x, bar_y, bar_width, 6.0), BAR_TRACK);

        let filled = (bar_width * self.progress()).floor();
        if filled > 0.0 {
            surface.fill_rect(Rect::new(bar_x, bar_y, filled, 6.0), BAR_FILL);
        }

        Ok(())
    }
}
