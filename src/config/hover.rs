//! Hover debounce configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Maximum accepted debounce window, in milliseconds.
const MAX_DEBOUNCE_MS: u64 = 5000;

/// Tuning for the hover debouncer.
#[derive(Debug, Clone, Deserialize)]
pub struct HoverConfig {
    /// Quiet window before a hover signal settles, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    50
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl HoverConfig {
    /// Returns the debounce window as a [`Duration`].
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Validate the hover configuration
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the debounce window is zero or
    /// larger than 5000 ms.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.debounce_ms == 0 {
            return Err(ValidationError::ZeroDebounce);
        }
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ValidationError::DebounceTooLarge);
        }
        Ok(())
    }
}
