//! Command trigger layer: dispatch and debounce.
//!
//! The core engine is stateless between invocations; serializing rapid
//! repeat triggers is this layer's job. `DebounceGuard` owns the
//! `last_run` timestamp the engine must not carry, and the dispatcher maps
//! named trigger commands onto core calls, catching errors so a failed
//! relocation never takes the process down.

use std::str::FromStr;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, error, info};

use tabshift_core::{HostEnvironment, MoveOutcome, TabshiftConfig, move_to_next_display};

/// A named trigger command, as bound to hotkeys by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerCommand {
    /// Relocate the current normal-mode window's tab.
    MoveNormal,
    /// Relocate the current private-mode window's tab.
    MoveIncognito,
}

impl TriggerCommand {
    pub fn want_private(&self) -> bool {
        matches!(self, TriggerCommand::MoveIncognito)
    }
}

impl FromStr for TriggerCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "move-normal" => Ok(TriggerCommand::MoveNormal),
            "move-incognito" => Ok(TriggerCommand::MoveIncognito),
            other => Err(format!("unknown trigger command '{other}'")),
        }
    }
}

/// Caller-owned re-entry guard.
///
/// Admits a trigger only when at least the debounce window has passed since
/// the last admitted one.
#[derive(Debug)]
pub struct DebounceGuard {
    window: Duration,
    last_run: Option<Instant>,
}

impl DebounceGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_run: None,
        }
    }

    /// Try to admit a trigger now. Rejected triggers do not reset the
    /// window.
    pub fn try_acquire(&mut self) -> bool {
        let now = Instant::now();
        match self.last_run {
            Some(last) if now.duration_since(last) < self.window => false,
            _ => {
                self.last_run = Some(now);
                true
            }
        }
    }
}

/// Maps trigger commands onto core relocation calls.
pub struct CommandDispatcher<H> {
    host: H,
    config: TabshiftConfig,
    guard: DebounceGuard,
}

impl<H: HostEnvironment + Clone> CommandDispatcher<H> {
    pub fn new(host: H, config: TabshiftConfig) -> Self {
        let guard = DebounceGuard::new(config.trigger.debounce());
        Self {
            host,
            config,
            guard,
        }
    }

    /// Dispatch one trigger command.
    ///
    /// Returns `None` when the command was debounced or the relocation
    /// failed; failures are logged, never propagated (a broken hotkey press
    /// must not crash the dispatcher).
    pub async fn dispatch(&mut self, command: TriggerCommand) -> Option<MoveOutcome> {
        if !self.guard.try_acquire() {
            debug!(event = "cli.trigger.debounced", command = ?command);
            return None;
        }

        info!(event = "cli.trigger.dispatch", command = ?command);
        match move_to_next_display(&self.host, command.want_private(), &self.config).await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(event = "cli.trigger.command_failed", command = ?command, error = %e);
                None
            }
        }
    }
}
