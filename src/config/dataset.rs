//! Dataset configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where to load the participant dataset from.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the participant records JSON file.
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "data/participants.json".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatasetConfig {
    /// Validate the dataset configuration
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyDatasetPath` if the path is empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.trim().is_empty() {
            return Err(ValidationError::EmptyDatasetPath);
        }
        Ok(())
    }
}
