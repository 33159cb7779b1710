use serde::Serialize;

use crate::host::types::WindowId;

/// Why a relocation ended as a silent no-op.
///
/// None of these are errors: a single-display setup or a hotkey pressed in
/// the wrong window mode is normal use, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The host reported no current window.
    NoSourceWindow,
    /// The current window's privacy mode differs from the requested mode.
    PrivacyModeMismatch,
    /// The current window has no active tab.
    NoActiveTab,
    /// Fewer than two displays are connected.
    SingleDisplay,
}

/// Result of one relocation invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// Preconditions not met; nothing was mutated.
    Skipped { reason: SkipReason },
    /// The tab was merged into an existing window on the target display.
    Merged { window: WindowId },
    /// A new window was created on the target display for the tab.
    Created { window: WindowId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_with_tag() {
        let json = serde_json::to_string(&MoveOutcome::Merged { window: 7 }).unwrap();
        assert_eq!(json, r#"{"outcome":"merged","window":7}"#);

        let json = serde_json::to_string(&MoveOutcome::Skipped {
            reason: SkipReason::SingleDisplay,
        })
        .unwrap();
        assert_eq!(json, r#"{"outcome":"skipped","reason":"single_display"}"#);
    }
}
