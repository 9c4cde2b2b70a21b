//! Main menu
//!
//! Keyboard and mouse navigation over a fixed list of entries. Hit
//! rectangles come from the latest render, so the mouse only reaches an
//! entry after it has been drawn once.

use glam::Vec2;
use winit::event::MouseButton;

use super::GAME_TITLE;
use crate::core::{Scene, SceneContext, SceneId, SceneResult};
use crate::input::{InputEvent, MenuAction, MenuBindings};
use crate::renderer::{Color, Surface, draw_text_centered};
use crate::ui::{Anchor, Rect};

const BACKGROUND: Color = Color::rgb(18, 24, 32);
const TITLE_COLOR: Color = Color::rgb(240, 235, 220);
const SELECTED_COLOR: Color = Color::rgb(255, 210, 0);
const OPTION_COLOR: Color = Color::rgb(200, 200, 200);
const HINT_COLOR: Color = Color::rgb(150, 150, 150);

const TITLE_PX: f32 = 72.0;
const OPTION_PX: f32 = 36.0;
const HINT_PX: f32 = 20.0;
const OPTION_SPACING: f32 = 56.0;
const HINT: &str = "Use \u{2191}/\u{2193} or W/S. Enter to select. Mouse supported.";

/// An entry in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    /// Enter gameplay
    StartGame,
    /// Open the options screen
    Options,
    /// Quit the game
    Exit,
}

impl MenuOption {
    /// Every entry, in display order
    pub const ALL: [Self; 3] = [Self::StartGame, Self::Options, Self::Exit];

    /// Text shown for the entry
    pub fn label(self) -> &'static str {
        match self {
            Self::StartGame => "Start Game",
            Self::Options => "Options",
            Self::Exit => "Exit",
        }
    }
}

/// Main menu scene
#[derive(Debug)]
pub struct MainMenuScene {
    options: Vec<MenuOption>,
    selected: usize,
    /// Whether the cursor is over an entry
    hovering: bool,
    /// Screen rectangles of the entries as last rendered
    option_rects: Vec<Rect>,
    bindings: MenuBindings,
}

impl MainMenuScene {
    /// Menu with the default key bindings, first entry selected
    pub fn new() -> Self {
        Self::with_bindings(MenuBindings::with_defaults())
    }

    /// Menu driven by custom key bindings
    pub fn with_bindings(bindings: MenuBindings) -> Self {
        Self {
            options: MenuOption::ALL.to_vec(),
            selected: 0,
            hovering: false,
            option_rects: Vec::new(),
            bindings,
        }
    }

    /// Entries in display order
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Index of the highlighted entry
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The highlighted entry
    pub fn selected_option(&self) -> MenuOption {
        self.options[self.selected]
    }

    /// Whether the cursor was over an entry at the last mouse move
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Hit rectangles from the latest render
    pub fn option_rects(&self) -> &[Rect] {
        &self.option_rects
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    fn select_previous(&mut self) {
        let count = self.options.len();
        self.selected = (self.selected + count - 1) % count;
    }

    fn option_at(&self, point: Vec2) -> Option<usize> {
        self.option_rects.iter().position(|rect| rect.contains(point))
    }

    fn activate(&mut self, ctx: &mut SceneContext) {
        match self.selected_option() {
            MenuOption::StartGame => enter_first(ctx, &[SceneId::Play]),
            MenuOption::Options => enter_first(ctx, &[SceneId::Options, SceneId::Title]),
            MenuOption::Exit => ctx.request_quit(),
        }
    }
}

impl Default for MainMenuScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Request the first available scene of `targets`. Misses only get a debug line.
fn enter_first(ctx: &mut SceneContext, targets: &[SceneId]) {
    for &id in targets {
        match ctx.request_scene(id) {
            Ok(()) => return,
            Err(err) => log::debug!("Menu: {err}"),
        }
    }
}

impl Scene for MainMenuScene {
    fn name(&self) -> &'static str {
        "MainMenu"
    }

    fn handle_event(&mut self, event: &InputEvent, ctx: &mut SceneContext) -> SceneResult {
        match *event {
            InputEvent::KeyPressed { key, .. } => match self.bindings.action(key) {
                Some(MenuAction::Next) => self.select_next(),
                Some(MenuAction::Previous) => self.select_previous(),
                Some(MenuAction::Activate) => self.activate(ctx),
                Some(MenuAction::Back) => enter_first(ctx, &[SceneId::Title]),
                None => {}
            },

            InputEvent::MouseMoved { position } => match self.option_at(position) {
                Some(index) => {
                    self.selected = index;
                    self.hovering = true;
                }
                None => self.hovering = false,
            },

            InputEvent::MouseButtonPressed {
                button: MouseButton::Left,
                position,
            } => {
                if let Some(index) = self.option_at(position) {
                    self.selected = index;
                    self.activate(ctx);
                }
            }

            _ => {}
        }
        Ok(())
    }

    fn render(&mut self, surface: &mut dyn Surface) -> SceneResult {
        let size = surface.size();
        let center_x = (size.x / 2.0).floor();
        surface.clear(BACKGROUND);

        draw_text_centered(
            surface,
            GAME_TITLE,
            TITLE_PX,
            Vec2::new(center_x, (size.y * 0.2).floor()),
            TITLE_COLOR,
        );

        let start_y = (size.y * 0.35).floor();
        self.option_rects.clear();
        for (i, option) in self.options.iter().enumerate() {
            let color = if i == self.selected {
                SELECTED_COLOR
            } else {
                OPTION_COLOR
            };
            let center = Vec2::new(center_x, start_y + i as f32 * OPTION_SPACING);
            let rect = draw_text_centered(surface, option.label(), OPTION_PX, center, color);
            self.option_rects.push(rect);
        }

        let footer = Rect::anchored(Anchor::BottomLeft, Vec2::new(20.0, -30.0), Vec2::ZERO, size);
        surface.draw_text(HINT, HINT_PX, footer.position, HINT_COLOR);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::*;
    use crate::core::SceneRegistry;
    use crate::renderer::{DrawCall, RecordingSurface};

    /// Stands in for whatever scene a registry entry would build
    struct Placeholder;

    impl Scene for Placeholder {
        fn name(&self) -> &'static str {
            "Placeholder"
        }
    }

    /// Outcome of one callback: requested scene and running flag
    type Outcome = (Option<SceneId>, bool);

    fn registry_with(ids: &[SceneId]) -> SceneRegistry {
        let mut registry = SceneRegistry::new();
        for &id in ids {
            registry.register(id, || Box::new(Placeholder));
        }
        registry
    }

    fn send(scene: &mut MainMenuScene, registry: &SceneRegistry, event: InputEvent) -> Outcome {
        let mut ctx = SceneContext::new(registry, true);
        scene.handle_event(&event, &mut ctx).unwrap();
        (ctx.requested_scene(), ctx.is_running())
    }

    fn rendered_menu() -> MainMenuScene {
        let mut scene = MainMenuScene::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        scene.render(&mut surface).unwrap();
        scene
    }

    #[test]
    fn test_selection_wraps_both_ways() {
        let registry = SceneRegistry::new();
        let mut scene = MainMenuScene::new();

        send(&mut scene, &registry, InputEvent::key(KeyCode::ArrowUp));
        assert_eq!(scene.selected(), 2);
        send(&mut scene, &registry, InputEvent::key(KeyCode::ArrowDown));
        assert_eq!(scene.selected(), 0);
        send(&mut scene, &registry, InputEvent::key(KeyCode::KeyS));
        send(&mut scene, &registry, InputEvent::key(KeyCode::KeyS));
        assert_eq!(scene.selected(), 2);
        send(&mut scene, &registry, InputEvent::key(KeyCode::KeyS));
        assert_eq!(scene.selected(), 0);
        send(&mut scene, &registry, InputEvent::key(KeyCode::KeyW));
        assert_eq!(scene.selected(), 2);
    }

    #[test]
    fn test_selection_stays_in_range_for_any_sequence() {
        let registry = SceneRegistry::new();
        let mut scene = MainMenuScene::new();
        let keys = [KeyCode::ArrowDown, KeyCode::ArrowUp, KeyCode::KeyS, KeyCode::KeyW];
        let mut expected: i32 = 0;

        // Deterministic pseudo-random walk over the navigation keys
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..200 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let key = keys[(seed % 4) as usize];
            expected += match key {
                KeyCode::ArrowDown | KeyCode::KeyS => 1,
                _ => -1,
            };

            send(&mut scene, &registry, InputEvent::key(key));
            assert!(scene.selected() < 3);
            assert_eq!(scene.selected(), expected.rem_euclid(3) as usize);
        }
    }

    #[test]
    fn test_hover_selects_entry_under_cursor() {
        let registry = SceneRegistry::new();
        let mut scene = rendered_menu();

        for target in [2, 0, 1, 1] {
            let center = scene.option_rects()[target].center();
            send(&mut scene, &registry, InputEvent::MouseMoved { position: center });
            assert_eq!(scene.selected(), target);
            assert!(scene.is_hovering());
        }

        send(&mut scene, &registry, InputEvent::MouseMoved { position: Vec2::ZERO });
        assert_eq!(scene.selected(), 1);
        assert!(!scene.is_hovering());
    }

    #[test]
    fn test_mouse_before_first_render_does_nothing() {
        let registry = registry_with(&[SceneId::Play]);
        let mut scene = MainMenuScene::new();
        let click = InputEvent::MouseButtonPressed {
            button: MouseButton::Left,
            position: Vec2::new(400.0, 210.0),
        };

        assert_eq!(send(&mut scene, &registry, click), (None, true));
        assert_eq!(scene.selected(), 0);
    }

    #[test]
    fn test_exit_quits_without_transition() {
        let registry = registry_with(&[SceneId::Title, SceneId::Play, SceneId::Options]);
        let mut scene = MainMenuScene::new();
        send(&mut scene, &registry, InputEvent::key(KeyCode::ArrowUp));
        assert_eq!(scene.selected_option(), MenuOption::Exit);

        assert_eq!(
            send(&mut scene, &registry, InputEvent::key(KeyCode::Enter)),
            (None, false)
        );
    }

    #[test]
    fn test_click_selects_then_activates() {
        let registry = SceneRegistry::new();
        let mut scene = rendered_menu();
        let exit = scene.option_rects()[2].center();
        let click = InputEvent::MouseButtonPressed {
            button: MouseButton::Left,
            position: exit,
        };

        assert_eq!(send(&mut scene, &registry, click), (None, false));
        assert_eq!(scene.selected(), 2);
    }

    #[test]
    fn test_other_buttons_and_misses_are_ignored() {
        let registry = SceneRegistry::new();
        let mut scene = rendered_menu();
        let exit = scene.option_rects()[2].center();

        let right_click = InputEvent::MouseButtonPressed {
            button: MouseButton::Right,
            position: exit,
        };
        assert_eq!(send(&mut scene, &registry, right_click), (None, true));

        let miss = InputEvent::MouseButtonPressed {
            button: MouseButton::Left,
            position: Vec2::new(5.0, 5.0),
        };
        assert_eq!(send(&mut scene, &registry, miss), (None, true));
        assert_eq!(scene.selected(), 0);
    }

    #[test]
    fn test_start_game_needs_play_scene() {
        let mut scene = MainMenuScene::new();

        let missing = registry_with(&[SceneId::Title]);
        assert_eq!(
            send(&mut scene, &missing, InputEvent::key(KeyCode::Space)),
            (None, true)
        );

        let present = registry_with(&[SceneId::Play]);
        assert_eq!(
            send(&mut scene, &present, InputEvent::key(KeyCode::Space)),
            (Some(SceneId::Play), true)
        );
    }

    #[test]
    fn test_options_falls_back_to_title() {
        let mut scene = MainMenuScene::new();
        send(&mut scene, &SceneRegistry::new(), InputEvent::key(KeyCode::ArrowDown));
        assert_eq!(scene.selected_option(), MenuOption::Options);
        let enter = InputEvent::key(KeyCode::Enter);

        let both = registry_with(&[SceneId::Options, SceneId::Title]);
        assert_eq!(send(&mut scene, &both, enter), (Some(SceneId::Options), true));

        let title_only = registry_with(&[SceneId::Title]);
        assert_eq!(send(&mut scene, &title_only, enter), (Some(SceneId::Title), true));

        let neither = SceneRegistry::new();
        assert_eq!(send(&mut scene, &neither, enter), (None, true));
    }

    #[test]
    fn test_escape_returns_to_title() {
        let registry = registry_with(&[SceneId::Title]);
        let mut scene = MainMenuScene::new();

        assert_eq!(
            send(&mut scene, &registry, InputEvent::key(KeyCode::Escape)),
            (Some(SceneId::Title), true)
        );
    }

    #[test]
    fn test_escape_without_title_changes_nothing() {
        let registry = SceneRegistry::new();
        let mut scene = MainMenuScene::new();
        send(&mut scene, &registry, InputEvent::key(KeyCode::ArrowDown));

        assert_eq!(
            send(&mut scene, &registry, InputEvent::key(KeyCode::Escape)),
            (None, true)
        );
        assert_eq!(scene.selected(), 1);
        assert_eq!(scene.options(), MenuOption::ALL);
    }

    #[test]
    fn test_custom_bindings() {
        let registry = SceneRegistry::new();
        let mut bindings = MenuBindings::new();
        bindings.bind(KeyCode::KeyJ, MenuAction::Next);
        let mut scene = MainMenuScene::with_bindings(bindings);

        send(&mut scene, &registry, InputEvent::key(KeyCode::ArrowDown));
        assert_eq!(scene.selected(), 0);
        send(&mut scene, &registry, InputEvent::key(KeyCode::KeyJ));
        assert_eq!(scene.selected(), 1);
    }

    #[test]
    fn test_render_layout() {
        let mut scene = MainMenuScene::new();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        scene.render(&mut surface).unwrap();

        assert_eq!(surface.calls[0], DrawCall::Clear(BACKGROUND));
        assert_eq!(
            surface.texts(),
            vec![GAME_TITLE, "Start Game", "Options", "Exit", HINT]
        );
        assert_eq!(
            scene.option_rects(),
            [
                Rect::new(310.0, 192.0, 180.0, 36.0),
                Rect::new(337.0, 248.0, 126.0, 36.0),
                Rect::new(364.0, 304.0, 72.0, 36.0),
            ]
        );
        assert!(matches!(
            surface.text_call("Start Game"),
            Some(DrawCall::Text { color, .. }) if *color == SELECTED_COLOR
        ));
        assert!(matches!(
            surface.text_call("Exit"),
            Some(DrawCall::Text { color, .. }) if *color == OPTION_COLOR
        ));
        assert!(matches!(
            surface.text_call(HINT),
            Some(DrawCall::Text { position, .. }) if *position == Vec2::new(20.0, 570.0)
        ));
    }

    #[test]
    fn test_rects_follow_surface_size() {
        let mut scene = MainMenuScene::new();
        scene.render(&mut RecordingSurface::new(800.0, 600.0)).unwrap();
        scene.render(&mut RecordingSurface::new(400.0, 300.0)).unwrap();

        assert_eq!(scene.option_rects().len(), 3);
        assert_eq!(scene.option_rects()[0].center(), Vec2::new(200.0, 105.0));
    }
}
