//! Chart Settings Module
//! Fixed run parameters, optionally overridden by a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "delta_chart.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the pipeline needs to produce the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub data_path: PathBuf,
    pub axis_start: f64,
    pub axis_stop: f64,
    pub axis_step: f64,
    pub bar_width: f64,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    pub window_size: [f32; 2],
    pub export_size: [u32; 2],
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("difference.txt"),
            axis_start: 0.0,
            axis_stop: 15.1,
            axis_step: 0.1,
            bar_width: 0.1,
            x_label: "Time [s]".to_string(),
            y_label: "% Difference".to_string(),
            title: "Delta% C2(t) - U233 Pulse insertion".to_string(),
            window_size: [1100.0, 700.0],
            export_size: [1600, 1000],
        }
    }
}

impl ChartSettings {
    /// Parse settings from a JSON string. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from `path`, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_pulse_chart() {
        let settings = ChartSettings::default();
        assert_eq!(settings.data_path, PathBuf::from("difference.txt"));
        assert_eq!(settings.axis_step, 0.1);
        assert_eq!(settings.bar_width, settings.axis_step);
        assert_eq!(settings.x_label, "Time [s]");
        assert_eq!(settings.y_label, "% Difference");
        assert_eq!(settings.title, "Delta% C2(t) - U233 Pulse insertion");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            ChartSettings::from_json_str(r#"{ "data_path": "other.txt", "bar_width": 0.05 }"#)
                .unwrap();
        assert_eq!(settings.data_path, PathBuf::from("other.txt"));
        assert_eq!(settings.bar_width, 0.05);
        assert_eq!(settings.axis_stop, 15.1);
        assert_eq!(settings.title, ChartSettings::default().title);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = ChartSettings::from_json_str("{ not json");
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ChartSettings::load_or_default(&dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, ChartSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "title": "Custom", "axis_stop": 5.05 }}"#).unwrap();

        let settings = ChartSettings::load_or_default(file.path()).unwrap();
        assert_eq!(settings.title, "Custom");
        assert_eq!(settings.axis_stop, 5.05);
    }
}
