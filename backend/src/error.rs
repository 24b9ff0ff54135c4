//! Error types for the reporting pipeline.

use thiserror::Error;

/// Result type for pipeline operations
pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Errors that can abort loading or configuring the dashboard.
///
/// Row-level problems (unparsable dates, empty groups) are not errors; they
/// surface as missing values in the computed tables.
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O error (file operations)
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    /// A column the pipeline depends on is absent from the export
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration value is present but unusable
    #[error("Invalid setting {key}: {message}")]
    InvalidSetting { key: String, message: String },
}

impl ReportError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_setting(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key: key.into(),
            message: message.into(),
        }
    }
}
