//! Delta Chart - Pulse insertion difference viewer
//!
//! Loads the `Delta% C2(t)` difference series and shows it as a bar chart
//! against a 0-15 s time axis.

mod charts;
mod data;
mod gui;
mod settings;

use anyhow::{Context, Result};
use charts::ChartFigure;
use eframe::egui;
use gui::DeltaChartApp;
use settings::{ChartSettings, SETTINGS_FILE};
use std::path::Path;

/// Load the series, pair it with the time axis and build the figure.
fn build_figure(settings: &ChartSettings) -> Result<ChartFigure> {
    let series = data::load(&settings.data_path)
        .with_context(|| format!("loading {}", settings.data_path.display()))?;
    let axis = data::generate_axis(settings.axis_start, settings.axis_stop, settings.axis_step)
        .context("generating time axis")?;

    let mut figure = ChartFigure::new();
    figure
        .bar(&axis, &series, settings.bar_width)
        .context("pairing time axis with difference series")?;
    figure
        .set_x_label(settings.x_label.as_str())
        .set_y_label(settings.y_label.as_str())
        .set_title(settings.title.as_str());

    Ok(figure)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = ChartSettings::load_or_default(Path::new(SETTINGS_FILE))
        .context("reading chart settings")?;
    let figure = build_figure(&settings)?;
    log::info!("Showing {} bars", figure.bar_count());

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([600.0, 400.0])
            .with_title(settings.title.as_str()),
        ..Default::default()
    };

    // Blocks until the window is closed
    let title = settings.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(DeltaChartApp::new(cc, figure, &settings)))),
    )
    .map_err(|e| anyhow::anyhow!("chart window failed: {}", e))
}
