//! Scene shell entry point

use std::io::Write;

use clap::Parser;
use env_logger::{Builder, Env};
use scene_shell::cli::{self, Args};
use scene_shell::prelude::*;

fn setup_logging(args: &Args) {
    Builder::from_env(Env::default().default_filter_or(args.log_level().as_str()))
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}

fn run(args: &Args) -> Result<(), EngineError> {
    let engine = Engine::new(args.to_config(), SceneRegistry::with_defaults(), SceneId::Title)?;
    engine.run()
}

fn main() {
    let args = Args::parse();
    setup_logging(&args);

    log::info!("Project root: {}", cli::project_root().display());
    log::info!("Assets dir: {}", cli::assets_dir().display());

    if let Err(e) = run(&args) {
        log::error!("Unhandled error running game: {e}");
    }
}
