// Hide console window in release builds (Windows GUI app)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod api;
mod app;
mod config;
mod movie;
mod notify;
mod state;
mod task;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A fast, native movie catalog browser with favourites
#[derive(Debug, Parser)]
#[command(name = "marquee", version)]
struct Args {
    /// Override the catalog API base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Override the poster images base URL
    #[arg(long)]
    images_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "marquee=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Marquee");

    // Load configuration; CLI flags override for this run without being saved
    let mut config = config::Config::load().unwrap_or_default();
    if let Some(url) = args.api_url {
        config.api.base_url = url;
    }
    if let Some(url) = args.images_url {
        config.api.images_base_url = url;
    }

    let client = api::ApiClient::new(&config.api.base_url)?;

    // Configure native options
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([1000.0, 720.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title("Marquee - Movie Catalog");

    let native_options = eframe::NativeOptions {
        viewport,
        persist_window: true, // Save/restore window size and position
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Marquee",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::MarqueeApp::new(cc, config, client)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
