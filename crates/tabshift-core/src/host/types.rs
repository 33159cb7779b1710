//! Types describing the host environment's windows, tabs, and pages.
//!
//! These are read-only snapshots: the host owns the real objects and may
//! change them between calls, so nothing here is assumed to outlive a single
//! relocation.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Host-assigned window identifier.
pub type WindowId = u32;

/// Host-assigned tab identifier.
pub type TabId = u32;

/// Window type as reported by the host.
///
/// Only `Normal` windows participate in relocation; popups, devtools and the
/// like are never merge destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Normal,
    Popup,
    Devtools,
    Other,
}

/// Window presentation state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    Normal,
    Maximized,
    Minimized,
    Fullscreen,
}

/// Snapshot of a single window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowInfo {
    pub id: WindowId,
    pub kind: WindowKind,
    /// Whether the window belongs to a private browsing context.
    pub private: bool,
    /// Window geometry. The host may report no geometry for windows it is
    /// still laying out; such windows are never merge candidates.
    pub bounds: Option<Rect>,
    pub state: WindowState,
    pub focused: bool,
}

/// Snapshot of a single tab (content unit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub window: WindowId,
    pub active: bool,
}

/// Partial update applied to an existing window.
///
/// `None` fields are left untouched by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowUpdate {
    pub bounds: Option<Rect>,
    pub state: Option<WindowState>,
    pub focused: Option<bool>,
}

impl WindowUpdate {
    /// Focus a window and fit it to `bounds` in the normal state.
    pub fn fit(bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds),
            state: Some(WindowState::Normal),
            focused: Some(true),
        }
    }

    /// Focus a window and maximize it.
    pub fn maximize() -> Self {
        Self {
            bounds: None,
            state: Some(WindowState::Maximized),
            focused: Some(true),
        }
    }
}

/// Result of probing a tab's page context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProbe {
    /// Whether an element currently holds native fullscreen.
    pub fullscreen_active: bool,
    /// The page's host/domain string, empty when unknown.
    pub host: String,
    /// Whether a known video-player container element is present.
    pub has_player_container: bool,
    /// Whether a bare video element is present.
    pub has_video: bool,
}

/// Element a fullscreen request is issued against, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FullscreenTarget {
    PlayerContainer,
    Video,
    DocumentRoot,
}

impl PageProbe {
    /// Pick the fullscreen target by priority: a known video-player
    /// container, else a bare video element, else the document root.
    pub fn fullscreen_target(&self) -> FullscreenTarget {
        if self.has_player_container {
            FullscreenTarget::PlayerContainer
        } else if self.has_video {
            FullscreenTarget::Video
        } else {
            FullscreenTarget::DocumentRoot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe(has_player_container: bool, has_video: bool) -> PageProbe {
        PageProbe {
            fullscreen_active: false,
            host: "example.com".to_string(),
            has_player_container,
            has_video,
        }
    }

    #[test]
    fn test_fullscreen_target_prefers_player_container() {
        assert_eq!(
            probe(true, true).fullscreen_target(),
            FullscreenTarget::PlayerContainer
        );
    }

    #[test]
    fn test_fullscreen_target_falls_back_to_video() {
        assert_eq!(probe(false, true).fullscreen_target(), FullscreenTarget::Video);
    }

    #[test]
    fn test_fullscreen_target_falls_back_to_document_root() {
        assert_eq!(
            probe(false, false).fullscreen_target(),
            FullscreenTarget::DocumentRoot
        );
    }

    #[test]
    fn test_window_update_fit_sets_normal_state() {
        let update = WindowUpdate::fit(Rect::new(0, 0, 100, 100));
        assert_eq!(update.state, Some(WindowState::Normal));
        assert_eq!(update.focused, Some(true));
        assert!(update.bounds.is_some());
    }

    #[test]
    fn test_window_update_maximize_leaves_bounds_alone() {
        let update = WindowUpdate::maximize();
        assert!(update.bounds.is_none());
        assert_eq!(update.state, Some(WindowState::Maximized));
    }
}
