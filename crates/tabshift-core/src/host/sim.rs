//! In-memory host environment for tests and the CLI scenario harness.
//!
//! `SimHost` models the parts of a real host the engine touches: window,
//! tab, and display registries plus per-tab page behavior. Every mutation is
//! recorded with a timestamp relative to host creation, so tests can assert
//! both *what* the engine did and *when* the detached restoration attempts
//! fired (deterministically under tokio's paused clock).

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use tokio::time::Instant;

use crate::displays::Display;
use crate::geometry::Rect;
use crate::host::errors::HostError;
use crate::host::traits::HostEnvironment;
use crate::host::types::{
    FullscreenTarget, PageProbe, TabId, TabInfo, WindowId, WindowInfo, WindowKind, WindowState,
    WindowUpdate,
};

/// Scripted page behavior for one tab.
#[derive(Debug, Clone, Default)]
pub struct PageBehavior {
    pub host: String,
    pub fullscreen_active: bool,
    pub has_player_container: bool,
    pub has_video: bool,
    /// Reject fullscreen requests (e.g. no user gesture recognized).
    pub deny_fullscreen: bool,
    /// Reject playback resume (autoplay policy).
    pub deny_playback: bool,
    /// Fail probes entirely (page not reachable).
    pub probe_fails: bool,
}

/// A recorded host mutation or page call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimEvent {
    WindowCreated {
        window: WindowId,
        private: bool,
    },
    WindowUpdated {
        window: WindowId,
        state: Option<WindowState>,
        focused: Option<bool>,
        bounds_changed: bool,
    },
    TabMoved {
        tab: TabId,
        window: WindowId,
    },
    TabActivated {
        tab: TabId,
    },
    TabRemoved {
        tab: TabId,
    },
    TabProbed {
        tab: TabId,
    },
    FullscreenRequested {
        tab: TabId,
        target: FullscreenTarget,
        granted: bool,
    },
    FullscreenExited {
        tab: TabId,
    },
    PlaybackResumed {
        tab: TabId,
        granted: bool,
    },
}

impl SimEvent {
    /// Whether this event mutated host state (as opposed to reading it).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            SimEvent::WindowCreated { .. }
                | SimEvent::WindowUpdated { .. }
                | SimEvent::TabMoved { .. }
                | SimEvent::TabActivated { .. }
                | SimEvent::TabRemoved { .. }
        )
    }
}

/// A [`SimEvent`] with its offset from host creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimRecord {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: SimEvent,
}

#[derive(Default)]
struct SimState {
    displays: Vec<Display>,
    windows: Vec<WindowInfo>,
    tabs: Vec<TabInfo>,
    current_window: Option<WindowId>,
    pages: HashMap<TabId, PageBehavior>,
    next_window_id: WindowId,
    next_tab_id: TabId,
    starter_tab_in_new_windows: bool,
    deny_window_creation: bool,
    records: Vec<SimRecord>,
}

/// In-memory host environment. Cheap to clone; all clones share state.
#[derive(Clone)]
pub struct SimHost {
    state: Arc<Mutex<SimState>>,
    epoch: Instant,
}

impl Default for SimHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SimHost {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimState {
                next_window_id: 1,
                next_tab_id: 1,
                starter_tab_in_new_windows: true,
                ..SimState::default()
            })),
            epoch: Instant::now(),
        }
    }

    // Seeding

    pub fn add_display(&self, display: Display) {
        self.state.lock().unwrap().displays.push(display);
    }

    pub fn add_window(&self, window: WindowInfo) {
        let mut state = self.state.lock().unwrap();
        state.next_window_id = state.next_window_id.max(window.id + 1);
        state.windows.push(window);
    }

    pub fn add_tab(&self, tab: TabInfo) {
        let mut state = self.state.lock().unwrap();
        state.next_tab_id = state.next_tab_id.max(tab.id + 1);
        state.tabs.push(tab);
    }

    pub fn set_current_window(&self, window: Option<WindowId>) {
        self.state.lock().unwrap().current_window = window;
    }

    pub fn set_page(&self, tab: TabId, behavior: PageBehavior) {
        self.state.lock().unwrap().pages.insert(tab, behavior);
    }

    /// Whether newly created windows receive a starter tab (default: true,
    /// matching real hosts).
    pub fn set_starter_tab_in_new_windows(&self, enabled: bool) {
        self.state.lock().unwrap().starter_tab_in_new_windows = enabled;
    }

    /// Make `create_window` fail, for error-path tests.
    pub fn set_deny_window_creation(&self, deny: bool) {
        self.state.lock().unwrap().deny_window_creation = deny;
    }

    // Inspection

    pub fn records(&self) -> Vec<SimRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn events(&self) -> Vec<SimEvent> {
        self.state
            .lock()
            .unwrap()
            .records
            .iter()
            .map(|r| r.event.clone())
            .collect()
    }

    /// Number of recorded state mutations (reads and page probes excluded).
    pub fn mutation_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .records
            .iter()
            .filter(|r| r.event.is_mutation())
            .count()
    }

    pub fn window(&self, id: WindowId) -> Option<WindowInfo> {
        self.state
            .lock()
            .unwrap()
            .windows
            .iter()
            .find(|w| w.id == id)
            .cloned()
    }

    pub fn tabs_in(&self, window: WindowId) -> Vec<TabInfo> {
        self.state
            .lock()
            .unwrap()
            .tabs
            .iter()
            .filter(|t| t.window == window)
            .cloned()
            .collect()
    }

    pub fn window_count(&self) -> usize {
        self.state.lock().unwrap().windows.len()
    }

    fn record(state: &mut SimState, epoch: Instant, event: SimEvent) {
        let at_ms = Instant::now().duration_since(epoch).as_millis() as u64;
        state.records.push(SimRecord { at_ms, event });
    }
}

#[async_trait]
impl HostEnvironment for SimHost {
    async fn current_window(&self) -> Result<Option<WindowInfo>, HostError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .current_window
            .and_then(|id| state.windows.iter().find(|w| w.id == id).cloned()))
    }

    async fn list_windows(&self) -> Result<Vec<WindowInfo>, HostError> {
        Ok(self.state.lock().unwrap().windows.clone())
    }

    async fn create_window(&self, bounds: Rect, private: bool) -> Result<WindowInfo, HostError> {
        let mut state = self.state.lock().unwrap();
        if state.deny_window_creation {
            return Err(HostError::CreateWindowFailed {
                message: "window creation denied by simulation".to_string(),
            });
        }

        let id = state.next_window_id;
        state.next_window_id += 1;

        for w in state.windows.iter_mut() {
            w.focused = false;
        }
        let window = WindowInfo {
            id,
            kind: WindowKind::Normal,
            private,
            bounds: Some(bounds),
            state: WindowState::Normal,
            focused: true,
        };
        state.windows.push(window.clone());

        if state.starter_tab_in_new_windows {
            let tab_id = state.next_tab_id;
            state.next_tab_id += 1;
            state.tabs.push(TabInfo {
                id: tab_id,
                window: id,
                active: true,
            });
        }

        Self::record(&mut state, self.epoch, SimEvent::WindowCreated {
            window: id,
            private,
        });
        Ok(window)
    }

    async fn update_window(&self, id: WindowId, update: WindowUpdate) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        if !state.windows.iter().any(|w| w.id == id) {
            return Err(HostError::WindowNotFound { id });
        }

        if update.focused == Some(true) {
            for w in state.windows.iter_mut() {
                w.focused = false;
            }
        }
        let window = state
            .windows
            .iter_mut()
            .find(|w| w.id == id)
            .expect("window presence checked above");
        if let Some(bounds) = update.bounds {
            window.bounds = Some(bounds);
        }
        if let Some(window_state) = update.state {
            window.state = window_state;
        }
        if let Some(focused) = update.focused {
            window.focused = focused;
        }

        Self::record(&mut state, self.epoch, SimEvent::WindowUpdated {
            window: id,
            state: update.state,
            focused: update.focused,
            bounds_changed: update.bounds.is_some(),
        });
        Ok(())
    }

    async fn active_tab(&self, window: WindowId) -> Result<Option<TabInfo>, HostError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tabs
            .iter()
            .find(|t| t.window == window && t.active)
            .cloned())
    }

    async fn list_tabs(&self, window: WindowId) -> Result<Vec<TabInfo>, HostError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tabs
            .iter()
            .filter(|t| t.window == window)
            .cloned()
            .collect())
    }

    async fn move_tab(&self, tab: TabId, window: WindowId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        if !state.windows.iter().any(|w| w.id == window) {
            return Err(HostError::MoveTabFailed {
                tab,
                window,
                message: "destination window not found".to_string(),
            });
        }
        let position = state
            .tabs
            .iter()
            .position(|t| t.id == tab)
            .ok_or(HostError::TabNotFound { id: tab })?;

        // Re-append at the end of the strip. The moved tab only becomes
        // active when the destination has no active tab (hosts keep exactly
        // one active tab per non-empty window).
        let mut moved = state.tabs.remove(position);
        moved.window = window;
        moved.active = !state.tabs.iter().any(|t| t.window == window && t.active);
        state.tabs.push(moved);

        Self::record(&mut state, self.epoch, SimEvent::TabMoved { tab, window });
        Ok(())
    }

    async fn activate_tab(&self, tab: TabId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        let window = state
            .tabs
            .iter()
            .find(|t| t.id == tab)
            .map(|t| t.window)
            .ok_or(HostError::TabNotFound { id: tab })?;

        for t in state.tabs.iter_mut() {
            if t.window == window {
                t.active = t.id == tab;
            }
        }

        Self::record(&mut state, self.epoch, SimEvent::TabActivated { tab });
        Ok(())
    }

    async fn remove_tab(&self, tab: TabId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        let position = state
            .tabs
            .iter()
            .position(|t| t.id == tab)
            .ok_or(HostError::TabNotFound { id: tab })?;
        let removed = state.tabs.remove(position);
        state.pages.remove(&tab);

        // Closing the active tab activates a neighbor, like real hosts do.
        if removed.active {
            if let Some(next) = state
                .tabs
                .iter_mut()
                .filter(|t| t.window == removed.window)
                .last()
            {
                next.active = true;
            }
        }

        Self::record(&mut state, self.epoch, SimEvent::TabRemoved { tab });
        Ok(())
    }

    async fn displays(&self) -> Result<Vec<Display>, HostError> {
        Ok(self.state.lock().unwrap().displays.clone())
    }

    async fn probe_tab(&self, tab: TabId) -> Result<PageProbe, HostError> {
        let mut state = self.state.lock().unwrap();
        if !state.tabs.iter().any(|t| t.id == tab) {
            return Err(HostError::TabNotFound { id: tab });
        }

        let behavior = state.pages.get(&tab).cloned().unwrap_or_default();
        if behavior.probe_fails {
            return Err(HostError::PageScriptFailed {
                tab,
                message: "page context unreachable".to_string(),
            });
        }

        Self::record(&mut state, self.epoch, SimEvent::TabProbed { tab });
        Ok(PageProbe {
            fullscreen_active: behavior.fullscreen_active,
            host: behavior.host,
            has_player_container: behavior.has_player_container,
            has_video: behavior.has_video,
        })
    }

    async fn request_fullscreen(
        &self,
        tab: TabId,
        target: FullscreenTarget,
    ) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        let behavior = state.pages.entry(tab).or_default();
        let granted = !behavior.deny_fullscreen;
        if granted {
            behavior.fullscreen_active = true;
        }

        Self::record(&mut state, self.epoch, SimEvent::FullscreenRequested {
            tab,
            target,
            granted,
        });

        if granted {
            Ok(())
        } else {
            Err(HostError::FullscreenRejected {
                reason: "NotAllowedError".to_string(),
            })
        }
    }

    async fn exit_fullscreen(&self, tab: TabId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        if let Some(behavior) = state.pages.get_mut(&tab) {
            behavior.fullscreen_active = false;
        }
        Self::record(&mut state, self.epoch, SimEvent::FullscreenExited { tab });
        Ok(())
    }

    async fn resume_playback(&self, tab: TabId) -> Result<(), HostError> {
        let mut state = self.state.lock().unwrap();
        let granted = state
            .pages
            .get(&tab)
            .map(|b| !b.deny_playback)
            .unwrap_or(true);

        Self::record(&mut state, self.epoch, SimEvent::PlaybackResumed { tab, granted });

        if granted {
            Ok(())
        } else {
            Err(HostError::PlaybackRejected {
                reason: "autoplay policy".to_string(),
            })
        }
    }
}
