//! Series Loader Module
//! Reads a whitespace-separated numeric series from a text file.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Start of a comment; the rest of the line is ignored.
const COMMENT_MARKER: char = '#';

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Line {line}: could not parse '{token}' as a number")]
    Parse { line: usize, token: String },
}

/// Percentage difference values, one per time sample, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DifferenceSeries {
    values: Vec<f64>,
}

impl DifferenceSeries {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parse series text. Blank lines and `#` comments are skipped.
    ///
    /// Undecodable bytes arrive as U+FFFD and fail as an unparsable token.
    pub fn parse(text: &str) -> Result<Self, LoaderError> {
        let mut values = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line = match raw_line.split_once(COMMENT_MARKER) {
                Some((data, _comment)) => data,
                None => raw_line,
            };

            for token in line.split_whitespace() {
                let value = token.parse::<f64>().map_err(|_| LoaderError::Parse {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
                values.push(value);
            }
        }

        Ok(Self::new(values))
    }
}

/// Load a difference series from `path`.
pub fn load(path: &Path) -> Result<DifferenceSeries, LoaderError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoaderError::NotFound(path.to_path_buf()),
        _ => LoaderError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let series = DifferenceSeries::parse(&text)?;
    if series.is_empty() {
        log::warn!("{} contains no data", path.display());
    } else {
        log::info!("Loaded {} values from {}", series.len(), path.display());
    }
    Ok(series)
}
