//! Chart Figure Module
//! Explicit chart context: bar layers, axis labels and title.

use crate::data::{DifferenceSeries, TimeAxis};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Axis has {axis} points but series has {series} values")]
    LengthMismatch { axis: usize, series: usize },
    #[error("Bar width must be a positive finite number, got {0}")]
    InvalidBarWidth(f64),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to export chart: {0}")]
    Export(String),
}

/// Bars from a single `bar` call, centred on their positions.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayer {
    pub positions: Vec<f64>,
    pub heights: Vec<f64>,
    pub width: f64,
}

impl BarLayer {
    /// Iterate `(position, height)` pairs.
    pub fn bars(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.positions
            .iter()
            .copied()
            .zip(self.heights.iter().copied())
    }
}

/// Locally owned chart, passed explicitly to whatever draws it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartFigure {
    layers: Vec<BarLayer>,
    x_label: String,
    y_label: String,
    title: String,
}

impl ChartFigure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bar layer. Axis and series must pair up one-to-one.
    pub fn bar(
        &mut self,
        axis: &TimeAxis,
        series: &DifferenceSeries,
        width: f64,
    ) -> Result<&mut Self, ChartError> {
        if axis.len() != series.len() {
            return Err(ChartError::LengthMismatch {
                axis: axis.len(),
                series: series.len(),
            });
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidBarWidth(width));
        }

        self.layers.push(BarLayer {
            positions: axis.values().to_vec(),
            heights: series.values().to_vec(),
            width,
        });
        log::debug!("Added bar layer with {} bars, width {}", series.len(), width);
        Ok(self)
    }

    pub fn set_x_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = label.into();
        self
    }

    pub fn set_y_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = label.into();
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    pub fn layers(&self) -> &[BarLayer] {
        &self.layers
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn bar_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.positions.len()).sum()
    }

    /// Horizontal extent covering every bar edge. `(0, 1)` when empty.
    pub fn x_bounds(&self) -> (f64, f64) {
        let (min, max) = self
            .layers
            .iter()
            .flat_map(|layer| {
                let half = layer.width / 2.0;
                layer.positions.iter().map(move |&x| (x - half, x + half))
            })
            .filter(|(lo, hi)| lo.is_finite() && hi.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (lo, hi)| {
                (min.min(lo), max.max(hi))
            });

        if min.is_finite() {
            (min, max)
        } else {
            (0.0, 1.0)
        }
    }

    /// Vertical extent covering every bar and the zero baseline, padded by 5%.
    pub fn y_bounds(&self) -> (f64, f64) {
        let (min, max) = self
            .layers
            .iter()
            .flat_map(|layer| layer.heights.iter().copied())
            .filter(|h| h.is_finite())
            .fold((0.0_f64, 0.0_f64), |(min, max), h| (min.min(h), max.max(h)));

        let span = max - min;
        if span <= f64::EPSILON {
            return (min - 1.0, max + 1.0);
        }
        let pad = span * 0.05;
        (
            if min < 0.0 { min - pad } else { min },
            if max > 0.0 { max + pad } else { max },
        )
    }
}
