//! Built-in scenes
//!
//! The shell ships a title card and a main menu. Gameplay and options
//! scenes are left to the game: register them under [`SceneId::Play`] and
//! [`SceneId::Options`] and the menu picks them up.

mod menu;
mod title;

pub use menu::{MainMenuScene, MenuOption};
pub use title::TitleScene;

use crate::core::{SceneId, SceneRegistry};

/// Name drawn by the title card and the menu
pub const GAME_TITLE: &str = "Scene Shell";

/// Register the title card and the main menu.
pub fn register_defaults(registry: &mut SceneRegistry) {
    registry.register(SceneId::Title, || Box::new(TitleScene::new()));
    registry.register(SceneId::MainMenu, || Box::new(MainMenuScene::new()));
}

impl SceneRegistry {
    /// Registry holding the built-in scenes
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_defaults(&mut registry);
        registry
    }
}

#[cfg(test)]
mod tests {
    use winit::keyboard::KeyCode;

    use super::*;
    use crate::core::Runner;
    use crate::input::InputEvent;
    use crate::renderer::RecordingSurface;

    fn runner() -> Runner {
        let mut runner = Runner::new(SceneRegistry::with_defaults());
        runner.switch_to(SceneId::Title).unwrap();
        runner
    }

    #[test]
    fn test_defaults_cover_title_and_menu_only() {
        let registry = SceneRegistry::with_defaults();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(SceneId::Title));
        assert!(registry.contains(SceneId::MainMenu));
        assert!(!registry.contains(SceneId::Play));
        assert!(!registry.contains(SceneId::Options));
    }

    #[test]
    fn test_title_times_out_into_menu() {
        let mut runner = runner();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        for _ in 0..10 {
            runner.tick(Vec::<InputEvent>::new(), 0.2, &mut surface).unwrap();
        }
        assert_eq!(runner.active_scene_name(), Some("Title"));

        for _ in 0..5 {
            runner.tick(Vec::<InputEvent>::new(), 0.2, &mut surface).unwrap();
        }
        assert_eq!(runner.active_scene_name(), Some("MainMenu"));
    }

    #[test]
    fn test_menu_round_trip_and_exit() {
        let mut runner = runner();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        runner.tick([InputEvent::key(KeyCode::Space)], 0.016, &mut surface).unwrap();
        assert_eq!(runner.active_scene_name(), Some("MainMenu"));

        // Start Game has nowhere to go by default
        runner.tick([InputEvent::key(KeyCode::Enter)], 0.016, &mut surface).unwrap();
        assert_eq!(runner.active_scene_name(), Some("MainMenu"));

        runner.tick([InputEvent::key(KeyCode::Escape)], 0.016, &mut surface).unwrap();
        assert_eq!(runner.active_scene_name(), Some("Title"));

        runner.tick([InputEvent::key(KeyCode::KeyA)], 0.016, &mut surface).unwrap();
        runner
            .tick(
                [InputEvent::key(KeyCode::ArrowUp), InputEvent::key(KeyCode::Enter)],
                0.016,
                &mut surface,
            )
            .unwrap();
        assert!(!runner.is_running());
        assert_eq!(runner.active_scene_name(), Some("MainMenu"));
    }

    #[test]
    fn test_options_falls_back_to_title_by_default() {
        let mut runner = runner();
        let mut surface = RecordingSurface::new(800.0, 600.0);

        runner.tick([InputEvent::key(KeyCode::KeyA)], 0.016, &mut surface).unwrap();
        runner
            .tick(
                [InputEvent::key(KeyCode::KeyS), InputEvent::key(KeyCode::Enter)],
                0.016,
                &mut surface,
            )
            .unwrap();

        assert_eq!(runner.active_scene_name(), Some("Title"));
    }
}
