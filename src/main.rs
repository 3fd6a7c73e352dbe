mod app;
mod canvas;
mod config;
mod coordinate;
mod export;
mod initializer;
mod marker;
mod palette;
mod store;
mod ui;
mod widget;

use app::DotCanvasApp;
use config::WidgetConfig;

/// Logs to stdout; `RUST_LOG` overrides the default filter.
fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,dot_canvas=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_level(true))
        .init();
}

fn main() -> eframe::Result<()> {
    setup_logging();

    let config = WidgetConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid configuration, using defaults");
        WidgetConfig::default()
    });
    tracing::info!(?config, "starting dot canvas");

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(640.0, 720.0)),
        min_window_size: Some(egui::vec2(360.0, 420.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Dot Canvas",
        native_options,
        Box::new(move |cc| Box::new(DotCanvasApp::new(cc, config))),
    )
}
