pub mod defaults;
pub mod loading;
pub mod types;

// Re-export commonly used types and functions
pub use loading::{load, load_from_path, user_config_path, validate};
pub use types::{RelocateConfig, RestoreConfig, TabshiftConfig, TriggerConfig};
