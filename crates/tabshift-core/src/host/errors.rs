use crate::errors::TabshiftError;
use crate::host::types::{TabId, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Window '{id}' not found")]
    WindowNotFound { id: WindowId },

    #[error("Tab '{id}' not found")]
    TabNotFound { id: TabId },

    #[error("Failed to create window: {message}")]
    CreateWindowFailed { message: String },

    #[error("Failed to update window '{id}': {message}")]
    UpdateWindowFailed { id: WindowId, message: String },

    #[error("Failed to move tab '{tab}' to window '{window}': {message}")]
    MoveTabFailed {
        tab: TabId,
        window: WindowId,
        message: String,
    },

    #[error("Failed to query displays: {message}")]
    DisplayQueryFailed { message: String },

    #[error("Script execution failed in tab '{tab}': {message}")]
    PageScriptFailed { tab: TabId, message: String },

    #[error("Fullscreen request rejected: {reason}")]
    FullscreenRejected { reason: String },

    #[error("Playback resume rejected: {reason}")]
    PlaybackRejected { reason: String },
}

impl TabshiftError for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            HostError::WindowNotFound { .. } => "WINDOW_NOT_FOUND",
            HostError::TabNotFound { .. } => "TAB_NOT_FOUND",
            HostError::CreateWindowFailed { .. } => "CREATE_WINDOW_FAILED",
            HostError::UpdateWindowFailed { .. } => "UPDATE_WINDOW_FAILED",
            HostError::MoveTabFailed { .. } => "MOVE_TAB_FAILED",
            HostError::DisplayQueryFailed { .. } => "DISPLAY_QUERY_FAILED",
            HostError::PageScriptFailed { .. } => "PAGE_SCRIPT_FAILED",
            HostError::FullscreenRejected { .. } => "FULLSCREEN_REJECTED",
            HostError::PlaybackRejected { .. } => "PLAYBACK_REJECTED",
        }
    }
}
