//! Static repository dataset.
//!
//! The default dataset is a JSON array compiled into the binary from
//! `data/repos.json`. An alternative file with the same shape can be loaded
//! from disk. Either way the records are validated once and never mutated.

use crate::model::{DatasetError, Repository};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// The dataset embedded at build time.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/repos.json");

/// Origin label used in errors and logs for the embedded payload.
pub const EMBEDDED_ORIGIN: &str = "embedded dataset";

/// Load the embedded dataset.
///
/// # Errors
///
/// Only if the compiled-in JSON is malformed, which the test suite rules out.
pub fn load_embedded() -> Result<Vec<Repository>, DatasetError> {
    parse_dataset(EMBEDDED_DATASET, EMBEDDED_ORIGIN)
}

/// Load a dataset file from disk.
///
/// # Errors
///
/// Returns `DatasetError::Read` if the file cannot be read, or any error
/// from [`parse_dataset`].
pub fn load_file(path: &Path) -> Result<Vec<Repository>, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&contents, &path.display().to_string())
}

/// Load from `path` when given, otherwise the embedded dataset.
pub fn load(path: Option<&Path>) -> Result<Vec<Repository>, DatasetError> {
    match path {
        Some(path) => load_file(path),
        None => load_embedded(),
    }
}

/// Parse and validate a JSON array of repository records.
///
/// Validation:
/// - empty `name` is an error (whitespace-only names are kept)
/// - duplicate names are logged and kept
/// - unparseable timestamps are logged and kept (they sort as the epoch)
///
/// # Errors
///
/// `DatasetError::Json` for malformed JSON or records missing required
/// fields; `DatasetError::EmptyName` for an empty name.
pub fn parse_dataset(json: &str, origin: &str) -> Result<Vec<Repository>, DatasetError> {
    let records: Vec<Repository> =
        serde_json::from_str(json).map_err(|source| DatasetError::Json {
            origin: origin.to_string(),
            source,
        })?;

    validate(&records, origin)?;

    info!(origin, count = records.len(), "Loaded dataset");
    Ok(records)
}

fn validate(records: &[Repository], origin: &str) -> Result<(), DatasetError> {
    let mut names = HashSet::new();

    for (index, repo) in records.iter().enumerate() {
        if repo.name.is_empty() {
            return Err(DatasetError::EmptyName {
                origin: origin.to_string(),
                index,
            });
        }

        if !names.insert(repo.name.as_str()) {
            warn!(origin, index, name = %repo.name, "Duplicate repository name");
        }

        for (field, ts) in [("created_at", &repo.created_at), ("updated_at", &repo.updated_at)] {
            if !ts.is_valid() {
                warn!(
                    origin,
                    index,
                    name = %repo.name,
                    field,
                    value = ts.as_str(),
                    "Unparseable timestamp, sorting as epoch"
                );
            }
        }
    }

    Ok(())
}
