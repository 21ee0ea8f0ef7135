#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storycard_core::CardConfig;

/// Global card configuration, set once from the command line
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the card configuration (set at startup or default)
pub fn get_card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Default location of the JSON config file
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storycard")
        .join("config.json")
}

/// Story Card - interactive holiday greeting
#[derive(Parser, Debug)]
#[command(name = "storycard-desktop")]
#[command(about = "Story Card - customize and open an animated greeting card")]
struct Args {
    /// JSON config file (defaults to the user config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial message on the inner page
    #[arg(short, long)]
    message: Option<String>,

    /// Log filter directives, e.g. "storycard_core=debug,info"
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    storycard_core::logging::init_logging(args.log.as_deref())
        .context("failed to set up logging")?;

    let config_path = args.config.unwrap_or_else(default_config_path);
    let mut config = CardConfig::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    if let Some(message) = args.message {
        config.default_message = message;
    }

    tracing::info!(?config_path, "Starting story card");

    // Window: portrait, room for the card plus the editor panel
    let window_width = 760.0;
    let window_height = 1000.0;
    let title = config.headline.clone();

    let _ = CARD_CONFIG.set(config);

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
