//! Scenario files: a TOML description of a simulated host.
//!
//! A scenario seeds the simulated host with displays, windows, tabs, and
//! per-tab page behavior, and may carry a script of trigger commands with
//! inter-command delays. This is how the engine is exercised without a real
//! host attached.
//!
//! # Example
//!
//! ```toml
//! [[displays]]
//! id = "0"
//! bounds = { left = 0, top = 0, width = 1920, height = 1080 }
//! work_area = { left = 0, top = 0, width = 1920, height = 1040 }
//!
//! [[displays]]
//! id = "1"
//! bounds = { left = 1920, top = 0, width = 1920, height = 1080 }
//!
//! [[windows]]
//! id = 1
//! bounds = { left = 100, top = 200, width = 800, height = 600 }
//! focused = true
//! current = true
//!
//! [[tabs]]
//! id = 10
//! window = 1
//! active = true
//!
//! [tabs.page]
//! host = "www.youtube.com"
//! fullscreen = true
//! has_video = true
//!
//! [script]
//! commands = [
//!     { command = "move-normal" },
//!     { command = "move-normal", after_ms = 300 },
//! ]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use tabshift_core::host::sim::{PageBehavior, SimHost};
use tabshift_core::{Display, Rect, TabInfo, WindowId, WindowInfo, WindowKind, WindowState};

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub displays: Vec<DisplayEntry>,

    #[serde(default)]
    pub windows: Vec<WindowEntry>,

    #[serde(default)]
    pub tabs: Vec<TabEntry>,

    /// Optional command script; when absent, `run` issues a single move.
    #[serde(default)]
    pub script: Option<Script>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayEntry {
    pub id: String,
    pub bounds: Rect,
    /// Defaults to `bounds` when the scenario does not carve out OS chrome.
    #[serde(default)]
    pub work_area: Option<Rect>,
}

#[derive(Debug, Deserialize)]
pub struct WindowEntry {
    pub id: WindowId,
    #[serde(default = "default_window_kind")]
    pub kind: WindowKind,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub bounds: Option<Rect>,
    #[serde(default = "default_window_state")]
    pub state: WindowState,
    #[serde(default)]
    pub focused: bool,
    /// Marks the window the host reports as current.
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Deserialize)]
pub struct TabEntry {
    pub id: u32,
    pub window: WindowId,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub page: Option<PageEntry>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageEntry {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default)]
    pub has_player_container: bool,
    #[serde(default)]
    pub has_video: bool,
    #[serde(default)]
    pub deny_fullscreen: bool,
    #[serde(default)]
    pub deny_playback: bool,
}

#[derive(Debug, Deserialize)]
pub struct Script {
    pub commands: Vec<ScriptCommand>,
}

#[derive(Debug, Deserialize)]
pub struct ScriptCommand {
    /// Trigger command name (`move-normal` or `move-incognito`).
    pub command: String,
    /// Delay before this command is dispatched.
    #[serde(default)]
    pub after_ms: u64,
}

fn default_window_kind() -> WindowKind {
    WindowKind::Normal
}

fn default_window_state() -> WindowState {
    WindowState::Normal
}

/// Load a scenario from a TOML file.
pub fn load(path: &Path) -> Result<Scenario, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("cannot read scenario '{}': {e}", path.display()))?;
    let scenario: Scenario = toml::from_str(&contents)
        .map_err(|e| format!("cannot parse scenario '{}': {e}", path.display()))?;
    Ok(scenario)
}

/// Seed a simulated host from a scenario.
pub fn build_host(scenario: &Scenario) -> SimHost {
    let host = SimHost::new();

    for entry in &scenario.displays {
        host.add_display(Display::new(
            entry.id.clone(),
            entry.bounds,
            entry.work_area.unwrap_or(entry.bounds),
        ));
    }

    for entry in &scenario.windows {
        host.add_window(WindowInfo {
            id: entry.id,
            kind: entry.kind,
            private: entry.private,
            bounds: entry.bounds,
            state: entry.state,
            focused: entry.focused,
        });
        if entry.current {
            host.set_current_window(Some(entry.id));
        }
    }

    for entry in &scenario.tabs {
        host.add_tab(TabInfo {
            id: entry.id,
            window: entry.window,
            active: entry.active,
        });
        if let Some(page) = &entry.page {
            host.set_page(entry.id, PageBehavior {
                host: page.host.clone(),
                fullscreen_active: page.fullscreen,
                has_player_container: page.has_player_container,
                has_video: page.has_video,
                deny_fullscreen: page.deny_fullscreen,
                deny_playback: page.deny_playback,
                probe_fails: false,
            });
        }
    }

    host
}
