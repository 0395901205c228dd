//! Data module - series loading and time axis generation

mod axis;
mod loader;

pub use axis::{generate_axis, AxisError, TimeAxis};
pub use loader::{load, DifferenceSeries, LoaderError};
