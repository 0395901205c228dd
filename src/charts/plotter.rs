//! Chart Plotter Module
//! Draws a `ChartFigure` interactively using egui_plot.

use crate::charts::{ChartFigure, BAR_RGB};
use egui::Color32;
use egui_plot::{Bar, BarChart, Plot, PlotPoint};

pub const BAR_COLOR: Color32 = Color32::from_rgb(BAR_RGB[0], BAR_RGB[1], BAR_RGB[2]);

/// Draws chart figures with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Hover readout, e.g. `t = 1.20 s` / `-0.034 %`.
    pub fn format_hover(x: f64, y: f64) -> String {
        format!("t = {:.2} s\n{:.4} %", x, y)
    }

    /// Draw the bar chart. `reset_view` snaps the bounds back to the figure extent.
    pub fn draw_bar_chart(ui: &mut egui::Ui, figure: &ChartFigure, reset_view: bool) {
        let (x_min, x_max) = figure.x_bounds();
        let (y_min, y_max) = figure.y_bounds();

        let mut plot = Plot::new("difference_bar_chart")
            .x_axis_label(figure.x_label())
            .y_axis_label(figure.y_label())
            .allow_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_boxed_zoom(true)
            .include_x(x_min)
            .include_x(x_max)
            .include_y(y_min)
            .include_y(y_max)
            .label_formatter(|_name, value: &PlotPoint| Self::format_hover(value.x, value.y));

        if reset_view {
            plot = plot.reset();
        }

        plot.show(ui, |plot_ui| {
            for layer in figure.layers() {
                let bars: Vec<Bar> = layer
                    .bars()
                    .map(|(x, y)| Bar::new(x, y).width(layer.width).fill(BAR_COLOR))
                    .collect();

                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR).name(figure.y_label()));
            }
        });
    }
}
