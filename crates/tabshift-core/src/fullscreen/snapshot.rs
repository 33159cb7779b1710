//! Pre-move fullscreen snapshot.

use tracing::{debug, warn};

use crate::host::traits::HostEnvironment;
use crate::host::types::TabId;

/// Fullscreen state captured immediately before a move.
///
/// Produced before any window mutation so it reflects pre-move reality;
/// consumed by the restoration attempts and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenSnapshot {
    /// Whether an element held native fullscreen at capture time.
    pub active: bool,
    /// The page's host/domain string, used for site-specific workarounds.
    pub host: String,
}

impl FullscreenSnapshot {
    /// Snapshot representing "nothing to restore".
    pub fn inactive() -> Self {
        Self {
            active: false,
            host: String::new(),
        }
    }
}

/// Capture the fullscreen snapshot for a tab.
///
/// A probe failure degrades to an inactive snapshot: if we cannot see the
/// page we also will not be able to restore it, and a failed capture must
/// never abort the relocation itself.
pub async fn capture_snapshot<H: HostEnvironment>(host: &H, tab: TabId) -> FullscreenSnapshot {
    match host.probe_tab(tab).await {
        Ok(probe) => {
            debug!(
                event = "core.fullscreen.snapshot_captured",
                tab = tab,
                active = probe.fullscreen_active,
                page_host = %probe.host
            );
            FullscreenSnapshot {
                active: probe.fullscreen_active,
                host: probe.host,
            }
        }
        Err(e) => {
            warn!(
                event = "core.fullscreen.snapshot_probe_failed",
                tab = tab,
                error = %e
            );
            FullscreenSnapshot::inactive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::sim::{PageBehavior, SimHost};
    use crate::host::types::{TabInfo, WindowInfo, WindowKind, WindowState};

    fn host_with_tab(behavior: PageBehavior) -> SimHost {
        let host = SimHost::new();
        host.add_window(WindowInfo {
            id: 1,
            kind: WindowKind::Normal,
            private: false,
            bounds: None,
            state: WindowState::Normal,
            focused: true,
        });
        host.add_tab(TabInfo {
            id: 10,
            window: 1,
            active: true,
        });
        host.set_page(10, behavior);
        host
    }

    #[tokio::test]
    async fn test_capture_reflects_page_state() {
        let host = host_with_tab(PageBehavior {
            fullscreen_active: true,
            host: "www.youtube.com".to_string(),
            ..PageBehavior::default()
        });

        let snapshot = capture_snapshot(&host, 10).await;
        assert!(snapshot.active);
        assert_eq!(snapshot.host, "www.youtube.com");
    }

    #[tokio::test]
    async fn test_capture_degrades_to_inactive_on_probe_failure() {
        let host = host_with_tab(PageBehavior {
            fullscreen_active: true,
            probe_fails: true,
            ..PageBehavior::default()
        });

        let snapshot = capture_snapshot(&host, 10).await;
        assert_eq!(snapshot, FullscreenSnapshot::inactive());
    }

    #[tokio::test]
    async fn test_capture_of_unknown_tab_is_inactive() {
        let host = SimHost::new();
        let snapshot = capture_snapshot(&host, 999).await;
        assert!(!snapshot.active);
    }
}
