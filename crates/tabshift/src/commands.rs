use std::path::Path;
use std::time::Duration;

use clap::ArgMatches;
use tracing::{error, info, warn};

use tabshift_core::config::{self, TabshiftConfig};
use tabshift_core::host::sim::SimRecord;
use tabshift_core::{
    HostEnvironment, MoveOutcome, containing_display, move_to_next_display, resolve_topology,
};

use crate::scenario;
use crate::trigger::{CommandDispatcher, TriggerCommand};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> TabshiftConfig {
    match config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.tabshift/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            TabshiftConfig::default()
        }
    }
}

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("run", sub_matches)) => handle_run_command(sub_matches).await,
        Some(("inspect", sub_matches)) => handle_inspect_command(sub_matches).await,
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

#[derive(serde::Serialize)]
struct RunReport {
    outcomes: Vec<OutcomeEntry>,
    host_events: Vec<SimRecord>,
}

#[derive(serde::Serialize)]
struct OutcomeEntry {
    command: String,
    #[serde(flatten)]
    outcome: Option<MoveOutcome>,
}

async fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let scenario_path = matches
        .get_one::<String>("scenario")
        .ok_or("Scenario argument is required")?;
    let private = matches.get_flag("private");

    info!(
        event = "cli.run_started",
        scenario = scenario_path,
        private = private
    );

    let scenario = scenario::load(Path::new(scenario_path)).map_err(|e| {
        eprintln!("Failed to load scenario: {}", e);
        error!(event = "cli.run_scenario_failed", scenario = scenario_path, error = %e);
        e
    })?;
    let host = scenario::build_host(&scenario);
    let config = load_config_with_warning();

    let mut outcomes: Vec<OutcomeEntry> = Vec::new();

    match &scenario.script {
        Some(script) => {
            if private {
                eprintln!("Note: --private is ignored; the scenario script names its commands.");
            }
            let mut dispatcher = CommandDispatcher::new(host.clone(), config.clone());
            for entry in &script.commands {
                let command: TriggerCommand = entry.command.parse().map_err(|e: String| {
                    eprintln!("Invalid script command: {}", e);
                    error!(event = "cli.run_bad_script_command", error = %e);
                    e
                })?;
                if entry.after_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(entry.after_ms)).await;
                }
                let outcome = dispatcher.dispatch(command).await;
                outcomes.push(OutcomeEntry {
                    command: entry.command.clone(),
                    outcome,
                });
            }
        }
        None => {
            let command = if private {
                TriggerCommand::MoveIncognito
            } else {
                TriggerCommand::MoveNormal
            };
            let outcome = move_to_next_display(&host, command.want_private(), &config)
                .await
                .map_err(|e| {
                    eprintln!("Relocation failed: {}", e);
                    error!(event = "cli.run_failed", error = %e);
                    e
                })?;
            outcomes.push(OutcomeEntry {
                command: if private { "move-incognito" } else { "move-normal" }.to_string(),
                outcome: Some(outcome),
            });
        }
    }

    // Restoration attempts run detached; give the schedule time to drain so
    // the report includes their host events.
    let last_attempt = config
        .restore
        .attempt_delays_ms
        .iter()
        .copied()
        .max()
        .unwrap_or(0);
    tokio::time::sleep(Duration::from_millis(
        last_attempt + config.restore.workaround_pause_ms + 100,
    ))
    .await;

    let report = RunReport {
        outcomes,
        host_events: host.records(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!(
        event = "cli.run_completed",
        commands = report.outcomes.len(),
        host_events = report.host_events.len()
    );

    Ok(())
}

#[derive(serde::Serialize)]
struct InspectReport {
    displays: Vec<tabshift_core::Display>,
    windows: Vec<WindowPlacement>,
}

#[derive(serde::Serialize)]
struct WindowPlacement {
    window: tabshift_core::WindowInfo,
    display_index: Option<usize>,
    tab_count: usize,
}

async fn handle_inspect_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let scenario_path = matches
        .get_one::<String>("scenario")
        .ok_or("Scenario argument is required")?;

    info!(event = "cli.inspect_started", scenario = scenario_path);

    let scenario = scenario::load(Path::new(scenario_path)).map_err(|e| {
        eprintln!("Failed to load scenario: {}", e);
        error!(event = "cli.inspect_scenario_failed", scenario = scenario_path, error = %e);
        e
    })?;
    let host = scenario::build_host(&scenario);

    let displays = resolve_topology(&host).await?;
    let windows = host.list_windows().await?;

    let placements: Vec<WindowPlacement> = windows
        .into_iter()
        .map(|window| {
            let display_index = window
                .bounds
                .map(|b| containing_display(&displays, b.center()));
            let tab_count = host.tabs_in(window.id).len();
            WindowPlacement {
                window,
                display_index,
                tab_count,
            }
        })
        .collect();

    let report = InspectReport {
        displays,
        windows: placements,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!(
        event = "cli.inspect_completed",
        displays = report.displays.len(),
        windows = report.windows.len()
    );

    Ok(())
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<clap_complete::Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = crate::app::build_cli();
    clap_complete::generate(*shell, &mut cmd, "tabshift", &mut std::io::stdout());

    Ok(())
}
