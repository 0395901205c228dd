//! GUI module - User interface components

mod app;
mod chart_viewer;

pub use app::DeltaChartApp;
pub use chart_viewer::ChartViewer;
