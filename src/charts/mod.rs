//! Charts module - Figure model and chart rendering

mod figure;
mod plotter;
mod renderer;

/// Bar fill, matplotlib's default "C0" blue.
pub const BAR_RGB: [u8; 3] = [31, 119, 180];

pub use figure::{ChartError, ChartFigure};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
