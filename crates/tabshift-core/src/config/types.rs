//! Configuration type definitions.
//!
//! All timing knobs of the relocation pipeline live here. The defaults are
//! the values the engine was tuned with; they are exposed in TOML for hosts
//! with slower window managers.
//!
//! # Example Configuration
//!
//! ```toml
//! [relocate]
//! settle_delay_ms = 80
//! deferred_maximize_ms = 80
//!
//! [restore]
//! attempt_delays_ms = [180, 420, 820]
//! workaround_pause_ms = 120
//!
//! [trigger]
//! debounce_ms = 120
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration loaded from `~/.tabshift/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TabshiftConfig {
    /// Relocation pipeline timing.
    #[serde(default)]
    pub relocate: RelocateConfig,

    /// Fullscreen restoration schedule.
    #[serde(default)]
    pub restore: RestoreConfig,

    /// Command trigger layer settings (used by the CLI, not the core).
    #[serde(default)]
    pub trigger: TriggerConfig,
}

/// Relocation pipeline timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelocateConfig {
    /// Delay in milliseconds between capturing the fullscreen snapshot and
    /// selecting a destination. Geometry queries issued immediately after
    /// window events can return stale bounds; this bridges that gap.
    /// Default: 80ms.
    #[serde(default = "super::defaults::default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Delay in milliseconds before the detached maximize of the destination
    /// window fires. Default: 80ms.
    #[serde(default = "super::defaults::default_deferred_maximize_ms")]
    pub deferred_maximize_ms: u64,
}

/// Fullscreen restoration schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Offsets in milliseconds, from trigger time, of the independent
    /// restoration attempts. Default: `[180, 420, 820]`.
    #[serde(default = "super::defaults::default_attempt_delays_ms")]
    pub attempt_delays_ms: Vec<u64>,

    /// Pause in milliseconds between exit and re-request in the
    /// site-workaround fullscreen toggle. Default: 120ms.
    #[serde(default = "super::defaults::default_workaround_pause_ms")]
    pub workaround_pause_ms: u64,
}

/// Command trigger layer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Window in milliseconds during which repeated trigger commands are
    /// rejected. Default: 120ms.
    #[serde(default = "super::defaults::default_debounce_ms")]
    pub debounce_ms: u64,
}

impl RelocateConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn deferred_maximize_delay(&self) -> Duration {
        Duration::from_millis(self.deferred_maximize_ms)
    }
}

impl RestoreConfig {
    pub fn attempt_delays(&self) -> Vec<Duration> {
        self.attempt_delays_ms
            .iter()
            .map(|ms| Duration::from_millis(*ms))
            .collect()
    }

    pub fn workaround_pause(&self) -> Duration {
        Duration::from_millis(self.workaround_pause_ms)
    }
}

impl TriggerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
