//! Autoquote: Vehicle price prediction
//!
//! Main entry point for the terminal application.

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use autoquote::adapters::XgboostModel;
use autoquote::application::PricingService;
use autoquote::config::Settings;
use autoquote::tui::App;

fn main() -> Result<()> {
    let settings = Settings::from_env()?;

    // Writing logs to the terminal corrupts the TUI (alternate screen), so
    // interactive runs log to a file.
    let interactive = std::io::stdout().is_terminal();
    let (writer, _guard) = if settings.log_mode.use_file(interactive) {
        if let Some(parent) = settings.log_file.parent() {
            // Best-effort: a missing directory surfaces as the open error below.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&settings.log_file)
            .with_context(|| format!("Failed to open log file {:?}", settings.log_file))?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting Autoquote...");

    let model = XgboostModel::load(&settings.model_path, settings.require_manifest)
        .with_context(|| format!("Failed to load model from {:?}", settings.model_path))?;
    let service = PricingService::new(Arc::new(model), settings.unknown_category)?;

    let mut app = App::new(service);
    app.run()?;

    tracing::info!("Autoquote shutdown complete.");
    Ok(())
}
