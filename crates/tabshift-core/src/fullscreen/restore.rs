//! Fullscreen restoration: a bounded, delayed retry sequence.
//!
//! The machine runs `Idle -> Scheduled -> Attempting(n) -> Succeeded |
//! Exhausted`. Attempts are scheduled up front at fixed offsets and are
//! fully independent: each detached task owns its own snapshot clone and
//! host handle, nothing is chained, and an attempt that finds fullscreen
//! already active simply re-verifies. There is no cancellation; attempts
//! are idempotent and cheap, so a later relocation just lets stale attempts
//! run out.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::RestoreConfig;
use crate::fullscreen::snapshot::FullscreenSnapshot;
use crate::fullscreen::workarounds::{WorkaroundAction, workaround_for};
use crate::host::traits::HostEnvironment;
use crate::host::types::TabId;

/// Phase of the restoration machine, reported per attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePhase {
    /// Snapshot was not fullscreen; nothing scheduled.
    Idle,
    /// Attempts scheduled, none run yet.
    Scheduled,
    /// Attempt `n` ran without confirming fullscreen; more remain.
    Attempting(usize),
    /// An attempt observed or obtained native fullscreen.
    Succeeded,
    /// The final attempt ran without confirming fullscreen.
    Exhausted,
}

/// Phase after attempt `attempt` of `total` finished with the given
/// fullscreen observation.
pub fn phase_after(attempt: usize, total: usize, fullscreen_now: bool) -> RestorePhase {
    if fullscreen_now {
        RestorePhase::Succeeded
    } else if attempt + 1 >= total {
        RestorePhase::Exhausted
    } else {
        RestorePhase::Attempting(attempt)
    }
}

/// Schedule the restoration attempts for a moved tab.
///
/// Returns immediately with the handles of the scheduled tasks (empty when
/// the snapshot was not fullscreen). Callers are free to drop the handles;
/// the orchestrator does, making restoration fire-and-forget relative to
/// the move itself.
pub fn schedule_restore<H: HostEnvironment + Clone>(
    host: &H,
    tab: TabId,
    snapshot: &FullscreenSnapshot,
    config: &RestoreConfig,
) -> Vec<JoinHandle<()>> {
    if !snapshot.active {
        debug!(event = "core.fullscreen.restore_skipped", tab = tab, phase = ?RestorePhase::Idle);
        return Vec::new();
    }

    let delays = config.attempt_delays();
    let total = delays.len();
    let pause = config.workaround_pause();

    info!(
        event = "core.fullscreen.restore_scheduled",
        tab = tab,
        attempts = total,
        page_host = %snapshot.host,
        phase = ?RestorePhase::Scheduled
    );

    delays
        .into_iter()
        .enumerate()
        .map(|(attempt, delay)| {
            let host = host.clone();
            let snapshot = snapshot.clone();
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                run_attempt(&host, tab, &snapshot, attempt, total, pause).await;
            })
        })
        .collect()
}

/// One restoration attempt, executed in the destination tab's context.
async fn run_attempt<H: HostEnvironment>(
    host: &H,
    tab: TabId,
    snapshot: &FullscreenSnapshot,
    attempt: usize,
    total: usize,
    pause: Duration,
) {
    debug!(event = "core.fullscreen.attempt_started", tab = tab, attempt = attempt);

    // Page unreachable: nothing to do, the next attempt re-probes.
    let probe = match host.probe_tab(tab).await {
        Ok(probe) => probe,
        Err(e) => {
            warn!(
                event = "core.fullscreen.attempt_probe_failed",
                tab = tab,
                attempt = attempt,
                error = %e
            );
            return;
        }
    };

    let target = probe.fullscreen_target();
    let mut fullscreen_now = probe.fullscreen_active;

    // Skip the request when fullscreen is already active (idempotent).
    if !fullscreen_now {
        match host.request_fullscreen(tab, target).await {
            Ok(()) => fullscreen_now = true,
            Err(e) => {
                // Non-fatal: the page may still be loading; a later
                // scheduled attempt may succeed.
                warn!(
                    event = "core.fullscreen.request_failed",
                    tab = tab,
                    attempt = attempt,
                    target = ?target,
                    error = %e
                );
            }
        }
    }

    if probe.has_video {
        if let Err(e) = host.resume_playback(tab).await {
            // Autoplay policy rejections are expected and non-actionable.
            debug!(
                event = "core.fullscreen.playback_rejected",
                tab = tab,
                attempt = attempt,
                error = %e
            );
        }
    }

    if let Some(workaround) = workaround_for(&snapshot.host, attempt) {
        info!(
            event = "core.fullscreen.workaround_applied",
            tab = tab,
            attempt = attempt,
            host_fragment = workaround.host_fragment
        );
        match workaround.action {
            WorkaroundAction::RefreshFullscreen => {
                fullscreen_now =
                    refresh_fullscreen(host, tab, target, pause).await.unwrap_or(fullscreen_now);
            }
        }
    }

    info!(
        event = "core.fullscreen.attempt_completed",
        tab = tab,
        attempt = attempt,
        phase = ?phase_after(attempt, total, fullscreen_now)
    );
}

/// Exit fullscreen, pause, and re-request on the same target.
///
/// Returns the resulting fullscreen state, or `None` when the toggle failed
/// partway (errors are swallowed, matching the rest of the attempt).
async fn refresh_fullscreen<H: HostEnvironment>(
    host: &H,
    tab: TabId,
    target: crate::host::types::FullscreenTarget,
    pause: Duration,
) -> Option<bool> {
    if let Err(e) = host.exit_fullscreen(tab).await {
        warn!(event = "core.fullscreen.workaround_exit_failed", tab = tab, error = %e);
        return None;
    }

    tokio::time::sleep(pause).await;

    match host.request_fullscreen(tab, target).await {
        Ok(()) => Some(true),
        Err(e) => {
            warn!(event = "core.fullscreen.workaround_request_failed", tab = tab, error = %e);
            Some(false)
        }
    }
}
