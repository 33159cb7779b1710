pub mod restore;
pub mod snapshot;
pub mod workarounds;

// Re-export commonly used types and functions
pub use restore::{RestorePhase, phase_after, schedule_restore};
pub use snapshot::{FullscreenSnapshot, capture_snapshot};
pub use workarounds::{SITE_WORKAROUNDS, SiteWorkaround, WorkaroundAction, workaround_for};
