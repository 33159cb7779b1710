//! Host environment trait definition.
//!
//! The relocation engine never talks to a real window system directly; it
//! goes through this trait. A production implementation bridges to the host
//! browser's window/tab/display APIs, the [`sim`](crate::host::sim) module
//! provides an in-memory implementation for tests and the CLI harness.

use async_trait::async_trait;

use crate::displays::Display;
use crate::geometry::Rect;
use crate::host::errors::HostError;
use crate::host::types::{
    FullscreenTarget, PageProbe, TabId, TabInfo, WindowId, WindowInfo, WindowUpdate,
};

/// Trait defining the interface to the host environment.
///
/// All methods take `&self`; implementations are cheap `Clone` handles over
/// shared state so the engine can hand a copy to detached restoration tasks.
///
/// The host's registries are the single source of truth and are re-read on
/// every call; nothing returned here is cached by the engine.
#[async_trait]
pub trait HostEnvironment: Send + Sync + 'static {
    // Window registry

    /// The window that currently has the user's attention, if any.
    async fn current_window(&self) -> Result<Option<WindowInfo>, HostError>;

    /// All windows known to the host, in discovery order.
    ///
    /// Discovery order is meaningful: destination ranking is stable, so ties
    /// keep this order.
    async fn list_windows(&self) -> Result<Vec<WindowInfo>, HostError>;

    /// Create a focused window at `bounds` with the given privacy mode.
    ///
    /// The host may populate the new window with a starter tab; callers that
    /// move a tab in are expected to clean that up.
    async fn create_window(&self, bounds: Rect, private: bool) -> Result<WindowInfo, HostError>;

    /// Apply a partial update to a window's bounds/state/focus.
    async fn update_window(&self, id: WindowId, update: WindowUpdate) -> Result<(), HostError>;

    // Tab registry

    /// The active tab in a window, if the window has one.
    async fn active_tab(&self, window: WindowId) -> Result<Option<TabInfo>, HostError>;

    /// All tabs in a window, in tab-strip order.
    async fn list_tabs(&self, window: WindowId) -> Result<Vec<TabInfo>, HostError>;

    /// Move a tab to the end of another window's tab strip.
    async fn move_tab(&self, tab: TabId, window: WindowId) -> Result<(), HostError>;

    /// Make a tab the active tab of its window.
    async fn activate_tab(&self, tab: TabId) -> Result<(), HostError>;

    /// Close a tab.
    async fn remove_tab(&self, tab: TabId) -> Result<(), HostError>;

    // Display registry

    /// Physical displays with bounds and work area, in host order
    /// (callers sort; see [`resolve_topology`](crate::displays::resolve_topology)).
    async fn displays(&self) -> Result<Vec<Display>, HostError>;

    // In-context execution

    /// Read fullscreen/media state from a tab's page context.
    async fn probe_tab(&self, tab: TabId) -> Result<PageProbe, HostError>;

    /// Request native fullscreen on the given element in a tab's page.
    async fn request_fullscreen(
        &self,
        tab: TabId,
        target: FullscreenTarget,
    ) -> Result<(), HostError>;

    /// Exit native fullscreen in a tab's page.
    async fn exit_fullscreen(&self, tab: TabId) -> Result<(), HostError>;

    /// Attempt to resume playback of the page's media element.
    ///
    /// Autoplay policy rejections are expected here; callers swallow them.
    async fn resume_playback(&self, tab: TabId) -> Result<(), HostError>;
}
