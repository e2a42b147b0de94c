//! Four-in-a-row GUI
//!
//! A graphical interface for playing against another person or the computer.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn};

use four_in_row::config::MIN_WINDOW;
use four_in_row::ui::FourInRowApp;
use four_in_row::AppConfig;

/// Four-in-a-row on a 5x5 board.
#[derive(Parser)]
#[command(name = "four-in-row", about = "Four-in-a-row on a 5x5 board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_row.toml")]
    config: PathBuf,

    /// Override the configured log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    simple_logger::SimpleLogger::new()
        .with_level(config.level_filter()?)
        .init()
        .map_err(|e| anyhow!("could not set up logging: {e}"))?;

    if !cli.config.exists() {
        warn!("config file '{}' not found, using defaults", cli.config.display());
    }
    info!("starting with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([MIN_WINDOW.0, MIN_WINDOW.1])
            .with_title("Four in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Four in a Row",
        options,
        Box::new(move |cc| Ok(Box::new(FourInRowApp::new(cc, &config, cli.seed)))),
    )
    .map_err(|e| anyhow!("GUI error: {e}"))
}
