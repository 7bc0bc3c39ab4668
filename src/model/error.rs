//! Error types for repolens.
//!
//! The query engine and locale table are total: they degrade instead of
//! failing. Errors only arise at the shell's edges (loading the dataset,
//! reading config, setting up logging, driving the terminal), and they all
//! fold into [`AppError`] through `From` so `main` can use `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - top-level union returned from `main`
//!   - [`DatasetError`] - dataset file unreadable, invalid JSON, invalid record
//!   - [`ConfigError`](crate::config::ConfigError) - config file or env override rejected
//!   - [`LoggingError`](crate::logging::LoggingError) - log file setup failed
//!   - [`TuiError`](crate::view::TuiError) - terminal I/O failed
//! - [`ParseValueError`] - a CLI/env/config string did not name a known value

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The dataset could not be loaded.
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// Configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The terminal UI failed.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Writing `--list` output failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised while loading the repository dataset.
///
/// The embedded dataset is validated by tests, so in practice these only
/// surface for files passed through `--data` or `data_path`.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The payload is not a JSON array of repository records.
    #[error("Invalid dataset JSON from {origin}: {source}")]
    Json {
        /// Where the payload came from (file path or "embedded").
        origin: String,
        /// Underlying parse error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// A record has an empty `name`.
    #[error("Record {index} in {origin} has an empty name")]
    EmptyName {
        /// Where the payload came from.
        origin: String,
        /// Zero-based position of the offending record.
        index: usize,
    },
}

/// A string did not name a known enumerated value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseValueError {
    /// Unknown sort key.
    #[error("unknown sort key '{0}' (expected stars, forks, created_at or updated_at)")]
    SortKey(String),

    /// Unknown sort direction.
    #[error("unknown sort order '{0}' (expected asc or desc)")]
    SortOrder(String),

    /// Unknown locale tag.
    #[error("unknown locale '{0}' (expected en or zh)")]
    Locale(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_error_converts_into_app_error() {
        let err = DatasetError::EmptyName {
            origin: "embedded".to_string(),
            index: 3,
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Dataset(_)));
        assert_eq!(
            app.to_string(),
            "Failed to load dataset: Record 3 in embedded has an empty name"
        );
    }

    #[test]
    fn read_error_mentions_path() {
        let err = DatasetError::Read {
            path: PathBuf::from("/tmp/missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn parse_value_error_lists_expected_values() {
        let msg = ParseValueError::SortOrder("up".to_string()).to_string();
        assert!(msg.contains("'up'"));
        assert!(msg.contains("asc or desc"));
    }

    #[test]
    fn io_error_converts_into_output_variant() {
        let app: AppError = std::io::Error::other("broken pipe").into();
        assert!(matches!(app, AppError::Output(_)));
    }
}
