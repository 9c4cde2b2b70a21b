//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::core::EngineConfig;

#[derive(Debug, Parser)]
#[command(name = "scene-shell")]
#[command(about = "Run the scene shell: a title card and a main menu")]
pub struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Launch in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Engine settings for these arguments
    pub fn to_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_size(self.width, self.height)
            .with_fullscreen(self.fullscreen)
    }

    /// Log level selected by `--debug`
    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

/// Directory the crate was built from
pub fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Where game assets live
pub fn assets_dir() -> PathBuf {
    project_root().join("assets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["scene-shell"]).unwrap();

        assert_eq!((args.width, args.height), (800, 600));
        assert!(!args.fullscreen);
        assert!(!args.debug);
        assert_eq!(args.log_level(), log::LevelFilter::Info);
        assert_eq!(args.to_config(), EngineConfig::default());
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "scene-shell",
            "--width",
            "1024",
            "--height",
            "768",
            "--fullscreen",
            "--debug",
        ])
        .unwrap();

        let config = args.to_config();
        assert_eq!((config.width, config.height), (1024, 768));
        assert!(config.fullscreen);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Args::try_parse_from(["scene-shell", "--width", "wide"]).is_err());
        assert!(Args::try_parse_from(["scene-shell", "level1"]).is_err());
    }

    #[test]
    fn test_assets_under_project_root() {
        assert!(assets_dir().starts_with(project_root()));
        assert!(assets_dir().ends_with("assets"));
    }
}
