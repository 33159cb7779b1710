//! Site-specific restoration workarounds.
//!
//! Some players do not register a programmatic fullscreen request on the
//! first try; their internal state lags the document's. Each known case is
//! one table entry keyed by host fragment and attempt index, so adding a
//! workaround never means adding a branch to the attempt loop.

/// Corrective action applied during a restoration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkaroundAction {
    /// Exit fullscreen, pause briefly, re-request on the same target. Kicks
    /// players whose internal state missed the first grant.
    RefreshFullscreen,
}

/// One site-specific workaround entry.
#[derive(Debug, Clone, Copy)]
pub struct SiteWorkaround {
    /// Substring matched against the captured page host.
    pub host_fragment: &'static str,
    /// Zero-based attempt index this workaround fires on (exactly once).
    pub attempt: usize,
    pub action: WorkaroundAction,
}

/// Known flaky providers. Twitch ignores the first programmatic fullscreen
/// grant after a window move; a toggle on the second attempt fixes it.
pub const SITE_WORKAROUNDS: &[SiteWorkaround] = &[SiteWorkaround {
    host_fragment: "twitch.tv",
    attempt: 1,
    action: WorkaroundAction::RefreshFullscreen,
}];

/// Look up the workaround for a page host at a given attempt index.
pub fn workaround_for(page_host: &str, attempt: usize) -> Option<&'static SiteWorkaround> {
    SITE_WORKAROUNDS
        .iter()
        .find(|w| w.attempt == attempt && page_host.contains(w.host_fragment))
}
