//! The relocation pipeline.
//!
//! One invocation moves the active tab of the current window to the next
//! display in left-to-right cyclic order, either merging it into the best
//! existing window there or creating a fresh one. Precondition misses are
//! silent no-ops; environment failures abort the remaining steps without
//! rolling back what was already applied (worst case is an empty extra
//! window or a window left unfocused — cheap compared to compensating
//! mutations racing the user).

use std::time::Duration;

use tracing::{info, warn};

use crate::config::TabshiftConfig;
use crate::displays::{containing_display, next_display, resolve_topology};
use crate::fullscreen::{capture_snapshot, schedule_restore};
use crate::geometry::{Point, Rect};
use crate::host::traits::HostEnvironment;
use crate::host::types::{TabId, WindowId, WindowUpdate};
use crate::relocate::errors::RelocateError;
use crate::relocate::types::{MoveOutcome, SkipReason};
use crate::selection::select_destination;

/// Move the current window's active tab to the next display.
///
/// Returns once window/tab mutation is issued; the deferred maximize and the
/// fullscreen restoration attempts run as detached tasks and are not awaited.
pub async fn move_to_next_display<H: HostEnvironment + Clone>(
    host: &H,
    want_private: bool,
    config: &TabshiftConfig,
) -> Result<MoveOutcome, RelocateError> {
    info!(event = "core.relocate.move_started", private = want_private);

    // 1. Resolve the source window; no window or a privacy-mode mismatch is
    //    a no-op, and nothing may be mutated past this point on a mismatch.
    let Some(source) = host.current_window().await? else {
        return Ok(skip(SkipReason::NoSourceWindow));
    };
    if source.private != want_private {
        return Ok(skip(SkipReason::PrivacyModeMismatch));
    }

    // 2. Resolve the active tab.
    let Some(tab) = host.active_tab(source.id).await? else {
        return Ok(skip(SkipReason::NoActiveTab));
    };

    // 3. Resolve displays; single-display environments are a no-op.
    let displays = resolve_topology(host).await?;
    if displays.len() < 2 {
        return Ok(skip(SkipReason::SingleDisplay));
    }

    // 4. Source display from the window center, target is the cyclic
    //    successor. A window without geometry maps to display 0 via the
    //    containment fallback.
    let center = source
        .bounds
        .map(|b| b.center())
        .unwrap_or(Point::new(0, 0));
    let source_index = containing_display(&displays, center);
    let target_index = next_display(source_index, displays.len());
    let work_area = displays[target_index].work_area;

    info!(
        event = "core.relocate.target_resolved",
        source_display = source_index,
        target_display = target_index,
        tab = tab.id
    );

    // 5. Capture fullscreen state before any mutation.
    let snapshot = capture_snapshot(host, tab.id).await;

    // 6. Let the host settle metrics; geometry read back immediately after
    //    window events can be stale.
    tokio::time::sleep(config.relocate.settle_delay()).await;

    // 7. Pick a destination among existing windows, or create one.
    let windows = host.list_windows().await?;
    let destination = select_destination(&windows, work_area, want_private, source.id)
        .map(|w| w.id);

    let outcome = match destination {
        Some(dest) => {
            focus_and_fit(host, dest, work_area, config.relocate.deferred_maximize_delay())
                .await?;
            host.move_tab(tab.id, dest).await?;
            host.activate_tab(tab.id).await?;
            MoveOutcome::Merged { window: dest }
        }
        None => {
            let created = host.create_window(work_area, want_private).await?;
            host.move_tab(tab.id, created.id).await?;
            cleanup_starter_tab(host, created.id, tab.id).await;
            focus_and_fit(
                host,
                created.id,
                work_area,
                config.relocate.deferred_maximize_delay(),
            )
            .await?;
            MoveOutcome::Created { window: created.id }
        }
    };

    // 8. Replay fullscreen on the destination, fire-and-forget.
    drop(schedule_restore(host, tab.id, &snapshot, &config.restore));

    info!(event = "core.relocate.move_completed", outcome = ?outcome);
    Ok(outcome)
}

fn skip(reason: SkipReason) -> MoveOutcome {
    info!(event = "core.relocate.move_skipped", reason = ?reason);
    MoveOutcome::Skipped { reason }
}

/// Focus a window and fit it to the work area now; maximize on a short
/// detached delay so the bounds land before the state change.
async fn focus_and_fit<H: HostEnvironment + Clone>(
    host: &H,
    window: WindowId,
    work_area: Rect,
    maximize_delay: Duration,
) -> Result<(), RelocateError> {
    host.update_window(window, WindowUpdate::fit(work_area))
        .await?;

    let host = host.clone();
    tokio::spawn(async move {
        tokio::time::sleep(maximize_delay).await;
        if let Err(e) = host.update_window(window, WindowUpdate::maximize()).await {
            warn!(
                event = "core.relocate.deferred_maximize_failed",
                window = window,
                error = %e
            );
        }
    });

    Ok(())
}

/// Remove the placeholder tab the host opened in a new window, keeping
/// exactly the moved tab. Best-effort: a leftover starter tab is cosmetic
/// and never worth aborting the relocation over.
async fn cleanup_starter_tab<H: HostEnvironment>(host: &H, window: WindowId, keep: TabId) {
    let tabs = match host.list_tabs(window).await {
        Ok(tabs) => tabs,
        Err(e) => {
            warn!(
                event = "core.relocate.starter_cleanup_query_failed",
                window = window,
                error = %e
            );
            return;
        }
    };

    for tab in tabs {
        if tab.id != keep {
            if let Err(e) = host.remove_tab(tab.id).await {
                warn!(
                    event = "core.relocate.starter_cleanup_failed",
                    tab = tab.id,
                    error = %e
                );
            }
            break;
        }
    }
}
