#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Click to move a marker; undo and redo its positions from the keyboard.
#[derive(Parser, Debug)]
#[command(name = "click-marker", version, about)]
struct Cli {
    /// Config file to load (created with defaults if missing).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum number of positions to remember (0 = unlimited).
    #[arg(long = "max-history")]
    max_history: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting click-marker");

    let startup_args = marker_ui::StartupArgs {
        config_path: cli.config,
        max_history: cli.max_history,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("click-marker")
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "click-marker",
        native_options,
        Box::new(move |cc| Ok(Box::new(marker_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
