//! Dataset loading error types.

use thiserror::Error;

/// Errors that can occur while loading the dataset.
///
/// The load happens exactly once at startup; any of these leaves the
/// system permanently un-rendered. There is no retry.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate alias '{alias}' in dataset")]
    DuplicateAlias { alias: String },
}
