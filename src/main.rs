//! # Wall Map Editor Entry Point
//!
//! Paints walls, trees and rocks onto a square grid and saves it as JSON.
//! This file sets up logging, loads the configuration and starts the
//! eframe/egui window.
//!
//! Usage: `wall_map_editor [CONFIG.json]`. Without an argument the editor
//! reads `map_editor.json` from the working directory if it exists.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::path::PathBuf;

use log::info;

use wall_map_editor::config::EditorConfig;
use wall_map_editor::ui::run_main_window;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging; RUST_LOG overrides the default level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Wall map editor starting...");

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = EditorConfig::load(config_path.as_deref())?;

    run_main_window(config)?;

    info!("Wall map editor exiting.");
    Ok(())
}
