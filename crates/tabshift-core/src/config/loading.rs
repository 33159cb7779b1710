//! Configuration loading and validation.
//!
//! Configuration is read from `~/.tabshift/config.toml`. A missing file is
//! not an error (defaults apply); a file that exists but fails to parse or
//! validate is surfaced, not silently replaced with defaults.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::config::types::TabshiftConfig;
use crate::errors::ConfigError;

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tabshift").join("config.toml"))
}

/// Load the user configuration, falling back to defaults when no config
/// file exists.
pub fn load() -> Result<TabshiftConfig, ConfigError> {
    let Some(path) = user_config_path() else {
        debug!(event = "core.config.no_home_dir");
        return Ok(TabshiftConfig::default());
    };

    load_from_path(&path)
}

/// Load configuration from an explicit path (missing file → defaults).
pub fn load_from_path(path: &std::path::Path) -> Result<TabshiftConfig, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.not_found", path = %path.display());
            return Ok(TabshiftConfig::default());
        }
        Err(e) => return Err(ConfigError::from(e)),
    };

    let config: TabshiftConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;

    validate(&config)?;

    debug!(event = "core.config.loaded", path = %path.display());
    Ok(config)
}

/// Validate a configuration after loading.
pub fn validate(config: &TabshiftConfig) -> Result<(), ConfigError> {
    if config.restore.attempt_delays_ms.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "restore.attempt_delays_ms cannot be empty".to_string(),
        });
    }

    Ok(())
}
