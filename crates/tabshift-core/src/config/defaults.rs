//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{RelocateConfig, RestoreConfig, TriggerConfig};

/// Returns the default settle delay in milliseconds (80ms).
///
/// Window geometry queried immediately after a window event can be stale;
/// 80ms is enough for the host to settle metrics without a perceptible lag.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_settle_delay_ms() -> u64 {
    80
}

/// Returns the default deferred-maximize delay in milliseconds (80ms).
///
/// Maximizing in the same breath as a bounds update races the host's layout;
/// the short deferral lets the bounds land first.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_deferred_maximize_ms() -> u64 {
    80
}

/// Returns the default restoration attempt offsets (180ms, 420ms, 820ms).
///
/// Three widening offsets cover pages that restore fullscreen capability at
/// different points of their reload cycle; private windows are the slowest
/// observed case.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_attempt_delays_ms() -> Vec<u64> {
    vec![180, 420, 820]
}

/// Returns the default workaround toggle pause in milliseconds (120ms).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_workaround_pause_ms() -> u64 {
    120
}

/// Returns the default trigger debounce window in milliseconds (120ms).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_debounce_ms() -> u64 {
    120
}

impl Default for RelocateConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            deferred_maximize_ms: default_deferred_maximize_ms(),
        }
    }
}

impl Default for RestoreConfig {
    fn default() -> Self {
        Self {
            attempt_delays_ms: default_attempt_delays_ms(),
            workaround_pause_ms: default_workaround_pause_ms(),
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TabshiftConfig;

    #[test]
    fn test_defaults_match_tuned_values() {
        let config = TabshiftConfig::default();
        assert_eq!(config.relocate.settle_delay_ms, 80);
        assert_eq!(config.relocate.deferred_maximize_ms, 80);
        assert_eq!(config.restore.attempt_delays_ms, vec![180, 420, 820]);
        assert_eq!(config.restore.workaround_pause_ms, 120);
        assert_eq!(config.trigger.debounce_ms, 120);
    }

    #[test]
    fn test_explicit_values_preserved_over_defaults() {
        let toml_str = r#"
[relocate]
settle_delay_ms = 0

[trigger]
debounce_ms = 500
"#;
        let config: TabshiftConfig = toml::from_str(toml_str).unwrap();

        // Explicit 0 should be preserved - serde default only applies to missing fields
        assert_eq!(config.relocate.settle_delay_ms, 0);
        assert_eq!(config.trigger.debounce_ms, 500);
        assert_eq!(
            config.relocate.deferred_maximize_ms, 80,
            "omitted field in a present section still gets its default"
        );
    }
}
