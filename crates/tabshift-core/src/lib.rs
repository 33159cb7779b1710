//! tabshift-core: Cross-display window and tab relocation.
//!
//! This library moves the active tab of the current window to the adjacent
//! display, merging into a suitable existing window there when one exists,
//! and replays fullscreen presentation state after the move. It is used by
//! the `tabshift` CLI and is host-agnostic: all window/tab/display access
//! goes through the [`host::HostEnvironment`] trait.
//!
//! # Main Entry Points
//!
//! - [`relocate`] - The relocation pipeline ([`move_to_next_display`])
//! - [`selection`] - Destination window selection
//! - [`displays`] - Display topology resolution
//! - [`fullscreen`] - Fullscreen snapshot and restoration
//! - [`host`] - Host environment abstraction and the simulated host
//! - [`config`] - Configuration management

pub mod config;
pub mod displays;
pub mod errors;
pub mod fullscreen;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod relocate;
pub mod selection;

// Re-export commonly used types at crate root for convenience
pub use config::{RelocateConfig, RestoreConfig, TabshiftConfig, TriggerConfig};
pub use displays::{Display, containing_display, next_display, resolve_topology};
pub use errors::{ConfigError, TabshiftError, TabshiftResult};
pub use fullscreen::{FullscreenSnapshot, RestorePhase, capture_snapshot, schedule_restore};
pub use geometry::{Point, Rect};
pub use host::{
    HostEnvironment, HostError, PageProbe, TabId, TabInfo, WindowId, WindowInfo, WindowKind,
    WindowState, WindowUpdate,
};
pub use relocate::{MoveOutcome, RelocateError, SkipReason, move_to_next_display};
pub use selection::select_destination;

// Re-export logging initialization
pub use logging::init_logging;
