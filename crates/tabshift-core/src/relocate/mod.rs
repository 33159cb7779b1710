pub mod errors;
pub mod run;
pub mod types;

// Re-export commonly used types and functions
pub use errors::RelocateError;
pub use run::move_to_next_display;
pub use types::{MoveOutcome, SkipReason};
