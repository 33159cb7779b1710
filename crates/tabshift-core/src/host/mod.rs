pub mod errors;
pub mod sim;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use errors::HostError;
pub use traits::HostEnvironment;
pub use types::{
    FullscreenTarget, PageProbe, TabId, TabInfo, WindowId, WindowInfo, WindowKind, WindowState,
    WindowUpdate,
};
