//! Gomoku GUI
//!
//! Play on a 15x15 board against another person or the computer.

use std::path::PathBuf;

use gomoku::config::{CONFIG_ENV, DEFAULT_CONFIG_PATH};
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, GameController};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = GameConfig::load_or_default(&path)?;
    tracing::info!(mode = %config.default_mode, path = %path.display(), "starting");
    let game = GameController::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku 15x15"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, game)))),
    )?;
    Ok(())
}
