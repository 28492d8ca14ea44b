// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! reel - Drive a player host from the command line

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{events, replay};
use reel_core::PlayerConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reel",
    version,
    about = "reel - Replay player events through the state aggregator"
)]
struct Cli {
    /// Player configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script and print the resulting transitions
    Replay(replay::ReplayArgs),
    /// List the event catalogue
    Events(events::EventsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PlayerConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PlayerConfig::default(),
    };
    setup_logging(&config.log_filter);

    match cli.command {
        Commands::Replay(args) => replay::replay(args, config)?,
        Commands::Events(args) => events::events(args),
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured filter; output goes to stderr
fn setup_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
