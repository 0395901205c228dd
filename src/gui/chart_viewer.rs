//! Chart Viewer Widget
//! Central panel showing the figure title and the interactive bar chart.

use crate::charts::{ChartFigure, ChartPlotter};
use egui::RichText;

/// Displays a single figure.
pub struct ChartViewer {
    figure: ChartFigure,
    reset_requested: bool,
}

impl ChartViewer {
    pub fn new(figure: ChartFigure) -> Self {
        Self {
            figure,
            reset_requested: false,
        }
    }

    pub fn figure(&self) -> &ChartFigure {
        &self.figure
    }

    /// Snap the plot back to the full figure extent on the next frame.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(self.figure.title()).size(18.0).strong());
        });
        ui.add_space(6.0);

        if self.figure.layers().is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        let reset = std::mem::take(&mut self.reset_requested);
        ChartPlotter::draw_bar_chart(ui, &self.figure, reset);
    }
}
