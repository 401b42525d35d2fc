//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SKILLGRID_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use skillgrid::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Loading dataset from {}", config.dataset.path);
//! ```

mod dataset;
mod error;
mod hover;

pub use dataset::DatasetConfig;
pub use error::{ConfigError, ValidationError};
pub use hover::HoverConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has working defaults, so an empty environment is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dataset configuration (participant records file)
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Hover debounce configuration
    #[serde(default)]
    pub hover: HoverConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SKILLGRID` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SKILLGRID__DATASET__PATH=data/team.json` -> `dataset.path = data/team.json`
    /// - `SKILLGRID__HOVER__DEBOUNCE_MS=100` -> `hover.debounce_ms = 100`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SKILLGRID")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dataset.validate()?;
        self.hover.validate()?;
        Ok(())
    }
}
