#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// A chip (token) input demo built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "chip-input", version, about)]
struct Cli {
    /// Initial chips: comma-separated labels or a copied chip payload.
    #[arg(long)]
    chips: Option<String>,

    /// Config file to use instead of the default location.
    #[arg(long)]
    config: Option<PathBuf>,
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

    tracing::info!("Starting chip-input");

    let startup_args = chip_input_ui::StartupArgs {
        chips: cli.chips,
        config_path: cli.config,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 320.0])
            .with_min_inner_size([320.0, 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        "chip-input",
        native_options,
        Box::new(move |cc| Ok(Box::new(chip_input_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
