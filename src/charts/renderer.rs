//! Static Chart Renderer
//! Renders a `ChartFigure` to an RGB image with plotters and saves it as PNG.
//!
//! Layout:
//! 1. Caption: figure title, centred
//! 2. Mesh with x/y axis descriptions
//! 3. One filled rectangle per bar, centred on its x-coordinate

use crate::charts::{ChartError, ChartFigure, BAR_RGB};
use plotters::prelude::*;
use std::path::Path;

const FONT_FAMILY: &str = "sans-serif";

const BAR_COLOR: RGBColor = RGBColor(BAR_RGB[0], BAR_RGB[1], BAR_RGB[2]);

fn render_err<E: std::error::Error + Send + Sync>(e: DrawingAreaErrorKind<E>) -> ChartError {
    ChartError::Render(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Size of an RGB buffer for a `width` x `height` image.
    pub fn buffer_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 3
    }

    /// Font sizes scaled to the image height (caption, labels).
    pub fn font_sizes(height: u32) -> (u32, u32) {
        let scale = height as f32 / 600.0;
        let caption = (24.0 * scale).round().max(12.0) as u32;
        let label = (16.0 * scale).round().max(10.0) as u32;
        (caption, label)
    }

    /// Draw the figure into a fresh RGB buffer.
    pub fn render_rgb(
        figure: &ChartFigure,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>, ChartError> {
        if width == 0 || height == 0 {
            return Err(ChartError::Render(format!(
                "invalid image size {}x{}",
                width, height
            )));
        }

        let mut buffer = vec![0u8; Self::buffer_len(width, height)];
        {
            let root =
                BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            Self::draw(&root, figure, height)?;
            root.present().map_err(render_err)?;
        }
        Ok(buffer)
    }

    /// Render and write a PNG to `path`.
    pub fn save_png(
        figure: &ChartFigure,
        path: &Path,
        width: u32,
        height: u32,
    ) -> Result<(), ChartError> {
        let buffer = Self::render_rgb(figure, width, height)?;
        let image = image::RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Export("image buffer size mismatch".to_string()))?;
        image
            .save(path)
            .map_err(|e| ChartError::Export(format!("{}: {}", path.display(), e)))?;

        log::info!(
            "Exported {} bars to {} ({}x{})",
            figure.bar_count(),
            path.display(),
            width,
            height
        );
        Ok(())
    }

    fn draw(
        root: &DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>,
        figure: &ChartFigure,
        height: u32,
    ) -> Result<(), ChartError> {
        let (caption_size, label_size) = Self::font_sizes(height);
        let (x_min, x_max) = figure.x_bounds();
        let (y_min, y_max) = figure.y_bounds();

        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(root)
            .caption(figure.title(), (FONT_FAMILY, caption_size as f64))
            .margin(15)
            .x_label_area_size((label_size * 3) as i32)
            .y_label_area_size((label_size * 5) as i32)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(figure.x_label())
            .y_desc(figure.y_label())
            .label_style((FONT_FAMILY, label_size as f64))
            .axis_desc_style((FONT_FAMILY, label_size as f64))
            .draw()
            .map_err(render_err)?;

        for layer in figure.layers() {
            let half = layer.width / 2.0;
            chart
                .draw_series(
                    layer
                        .bars()
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .map(|(x, y)| {
                            Rectangle::new(
                                [(x - half, 0.0), (x + half, y)],
                                BAR_COLOR.filled(),
                            )
                        }),
                )
                .map_err(render_err)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_axis, DifferenceSeries};

    fn pulse_figure() -> ChartFigure {
        let axis = generate_axis(0.0, 15.1, 0.1).unwrap();
        let series = DifferenceSeries::new((0..151).map(|i| (i as f64 * 0.1).cos()).collect());

        let mut figure = ChartFigure::new();
        figure.bar(&axis, &series, 0.1).unwrap();
        figure
            .set_x_label("Time [s]")
            .set_y_label("% Difference")
            .set_title("Delta% C2(t) - U233 Pulse insertion");
        figure
    }

    #[test]
    fn test_save_png_writes_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("difference.png");

        StaticChartRenderer::save_png(&pulse_figure(), &path, 800, 500).unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!(saved.width(), 800);
        assert_eq!(saved.height(), 500);
    }

    #[test]
    fn test_render_rgb_draws_bars() {
        let buffer = StaticChartRenderer::render_rgb(&pulse_figure(), 800, 500).unwrap();
        assert_eq!(buffer.len(), StaticChartRenderer::buffer_len(800, 500));

        let bar_pixels = buffer
            .chunks_exact(3)
            .filter(|px| px == &BAR_RGB.as_slice())
            .count();
        assert!(bar_pixels > 0);
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(StaticChartRenderer::buffer_len(1600, 1000), 4_800_000);
    }

    #[test]
    fn test_font_sizes_scale_with_height() {
        assert_eq!(StaticChartRenderer::font_sizes(600), (24, 16));
        assert_eq!(StaticChartRenderer::font_sizes(1200), (48, 32));
        assert_eq!(StaticChartRenderer::font_sizes(100), (12, 10));
    }

    #[test]
    fn test_zero_size_is_rejected() {
        let figure = ChartFigure::new();
        assert!(matches!(
            StaticChartRenderer::render_rgb(&figure, 0, 400),
            Err(ChartError::Render(_))
        ));
    }
}
