// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `reel replay <script>` - Feed a recorded event script through a host
//!
//! Each script line is a JSON object `{"name": "...", "data": {...}}`.
//! Blank lines and lines starting with `#` are skipped.

use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use reel_core::{
    names, EventData, FixedAutoplay, Host, HostDeps, Listener, PlayerConfig, StateExtension,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Args)]
pub struct ReplayArgs {
    /// Event script, one JSON event per line
    pub script: PathBuf,

    /// Treat autoplay as blocked, as if no user gesture happened yet
    #[arg(long)]
    pub no_autoplay: bool,

    /// Print the final snapshot as JSON instead of the transition log
    #[arg(long)]
    pub json: bool,
}

/// One scripted emission
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptEvent {
    pub name: String,
    #[serde(default)]
    pub data: EventData,
}

/// A committed transition as printed by the replay log
#[derive(Debug, Clone, Serialize)]
pub struct Transition {
    pub event: String,
    pub changes: Vec<String>,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<28} {}", self.event, self.changes.join(", "))
    }
}

/// Parse a script, reporting the offending line number on failure
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(index, line)| {
            serde_json::from_str::<ScriptEvent>(line)
                .with_context(|| format!("invalid event on line {}", index + 1))
        })
        .collect()
}

/// Run `events` through a fresh host and collect every committed transition
pub fn run(
    config: PlayerConfig,
    can_autoplay: bool,
    events: &[ScriptEvent],
) -> Result<(Vec<Transition>, Host)> {
    let host = Host::new(
        config,
        HostDeps {
            autoplay: Arc::new(FixedAutoplay(can_autoplay)),
            ..HostDeps::default()
        },
    );

    let log = Arc::new(Mutex::new(Vec::new()));
    for &event in names::OUTBOUND {
        let sink = Arc::clone(&log);
        host.on(
            event,
            Listener::infallible(move |data| {
                let Some(change) = data.state_change() else {
                    return;
                };
                let changes = match change.prev_state.as_deref() {
                    Some(prev) => change
                        .state
                        .diff(prev)
                        .iter()
                        .map(ToString::to_string)
                        .collect(),
                    None => Vec::new(),
                };
                sink.lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .push(Transition {
                        event: event.to_string(),
                        changes,
                    });
            }),
        );
    }

    host.register_state()?;

    for (index, scripted) in events.iter().enumerate() {
        tracing::debug!(index, event = %scripted.name, "replaying");
        host.emit(&scripted.name, &scripted.data)
            .with_context(|| format!("event #{} ({}) failed", index + 1, scripted.name))?;
    }

    let transitions = std::mem::take(&mut *log.lock().unwrap_or_else(|e| e.into_inner()));
    Ok((transitions, host))
}

pub fn replay(args: ReplayArgs, config: PlayerConfig) -> Result<()> {
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read {}", args.script.display()))?;
    let events = parse_script(&source)?;

    let (transitions, host) = run(config, !args.no_autoplay, &events)?;

    match OutputFormat::from_json_flag(args.json) {
        OutputFormat::Text => output::print_list(&transitions, OutputFormat::Text),
        OutputFormat::Json => {
            let ext = host
                .get_module_as::<StateExtension>(reel_core::state::MODULE_NAME)
                .context("state module missing")?;
            output::print_json(ext.state().as_ref())?;
        }
    }

    let stats = host.get_stats();
    tracing::info!(
        events = events.len(),
        transitions = transitions.len(),
        emitted = stats.events_emitted,
        "replay finished"
    );
    host.destroy()?;
    Ok(())
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;
