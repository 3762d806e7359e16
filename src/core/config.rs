//! Engine configuration.
//!
//! Hosts configure the engine at construction by providing an
//! `EngineConfig`. The only tunable today is how long a mismatched pair stays
//! face up before it is hidden again.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default time a mismatched pair stays visible (milliseconds).
pub const DEFAULT_HIDE_DELAY_MS: u64 = 1000;

/// Match engine configuration.
///
/// ```
/// use memory_match::core::EngineConfig;
///
/// let config = EngineConfig::new().with_hide_delay_ms(600);
/// assert_eq!(config.hide_delay().as_millis(), 600);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Delay between a mismatch and the pair flipping back (milliseconds).
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,
}

fn default_hide_delay_ms() -> u64 {
    DEFAULT_HIDE_DELAY_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mismatch hide delay.
    #[must_use]
    pub fn with_hide_delay_ms(mut self, delay_ms: u64) -> Self {
        self.hide_delay_ms = delay_ms;
        self
    }

    /// Mismatch hide delay as a `Duration`.
    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        let config = EngineConfig::default();
        assert_eq!(config.hide_delay_ms, 1000);
        assert_eq!(config.hide_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new().with_hide_delay_ms(250);
        assert_eq!(config.hide_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());

        let config: EngineConfig = serde_json::from_str(r#"{"hide_delay_ms":40}"#).unwrap();
        assert_eq!(config.hide_delay_ms, 40);
    }
}
