use std::{panic, path::PathBuf};

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use shared::error::SummitError;
use summit_core::{event, Catalog, SiteController};
use tracing_subscriber::EnvFilter;

use crate::controller::orchestration::catalog_or_empty;
use crate::ui::{
    theme::{UiPreferences, SETTINGS_STORAGE_KEY},
    StartupConfig, SummitApp,
};

#[derive(Debug, Parser)]
#[command(name = "summit", about = "UNC Quality Matters Summit 2025 registration desk")]
struct Args {
    /// Settings file; defaults to ./summit.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn install_panic_logger() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        default_hook(info);
    }));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    install_panic_logger();

    let (settings, settings_error) = match config::load_settings(args.config.as_deref()) {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::warn!("using default settings: {err:#}");
            (
                config::Settings::default(),
                Some(SummitError::Config(format!("{err:#}"))),
            )
        }
    };

    let (catalog, catalog_error) = catalog_or_empty(Catalog::load());
    // The catalog banner matters more than a bad settings file; both are logged.
    let startup_error = catalog_error.or(settings_error);
    let site = SiteController::new(catalog, settings.timings());
    tracing::info!(?settings, "starting registration desk");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(event::EVENT_NAME)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        event::EVENT_NAME,
        options,
        Box::new(move |cc| {
            let preferences = UiPreferences::from_storage(
                cc.storage
                    .and_then(|storage| storage.get_string(SETTINGS_STORAGE_KEY)),
            );
            Ok(Box::new(SummitApp::new(StartupConfig {
                site,
                settings,
                preferences,
                startup_error,
            })))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
