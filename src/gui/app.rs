//! Delta Chart Main Application
//! Window with a toolbar (reset, export) and the chart viewer.

use crate::charts::{ChartFigure, StaticChartRenderer};
use crate::gui::ChartViewer;
use crate::settings::ChartSettings;
use egui::{RichText, TopBottomPanel};

/// Main application window.
pub struct DeltaChartApp {
    chart_viewer: ChartViewer,
    export_size: [u32; 2],
    status: String,
}

impl DeltaChartApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        figure: ChartFigure,
        settings: &ChartSettings,
    ) -> Self {
        let status = format!("{} bars", figure.bar_count());
        Self {
            chart_viewer: ChartViewer::new(figure),
            export_size: settings.export_size,
            status,
        }
    }

    /// Ask for a location and write the chart as PNG.
    fn handle_export_png(&mut self) {
        let output_path = match rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("difference.png")
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        let [width, height] = self.export_size;
        match StaticChartRenderer::save_png(self.chart_viewer.figure(), &output_path, width, height)
        {
            Ok(()) => {
                self.status = format!("Saved {}", output_path.display());
            }
            Err(e) => {
                log::error!("PNG export failed: {}", e);
                self.status = format!("Error: {}", e);
            }
        }
    }
}

impl eframe::App for DeltaChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reset view").clicked() {
                    self.chart_viewer.request_reset();
                }
                if ui.button("Save PNG…").clicked() {
                    self.handle_export_png();
                }
                ui.separator();
                ui.label(RichText::new(&self.status).size(12.0));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
