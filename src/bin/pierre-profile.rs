// ABOUTME: pierre-profile - inspect how intake records render on the profile dashboard
// ABOUTME: Reads user/profile JSON files and prints the composed dashboard view or weight table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Print the dashboard view for a user and profile snapshot
//! pierre-profile inspect --user user.json --profile profile.json
//!
//! # Single-line JSON output
//! pierre-profile inspect --profile profile.json --compact
//!
//! # Show the active completeness weight table
//! pierre-profile weights
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use pierre_profile_dashboard::config::DashboardConfig;
use pierre_profile_dashboard::errors::ProfileError;
use pierre_profile_dashboard::{CompletenessWeights, ProfileDashboard, RawSnapshot};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "pierre-profile",
    about = "Pierre profile dashboard inspector",
    long_about = "Normalizes user and fitness profile JSON and prints the dashboard view: processed records, completeness score, ordered sections and activity metrics."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Build and print the dashboard view for a snapshot
    Inspect {
        /// User record JSON file (omit for an empty record)
        #[arg(long)]
        user: Option<PathBuf>,

        /// Fitness profile JSON file (omit for an empty record)
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the active completeness weight table
    Weights {
        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DashboardConfig::from_env().map_err(ProfileError::from)?;
    if cli.verbose {
        config.logging.level = "debug".to_owned();
    }
    config.logging.init()?;
    config.log_summary();

    match cli.command {
        Command::Inspect {
            user,
            profile,
            compact,
        } => inspect(&config, user.as_deref(), profile.as_deref(), compact),
        Command::Weights { compact } => print_json(
            &weights_table(config.engine.completeness_weights),
            compact,
        ),
    }
}

fn inspect(
    config: &DashboardConfig,
    user: Option<&Path>,
    profile: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let user_text = read_optional(user)?;
    let profile_text = read_optional(profile)?;
    let snapshot = RawSnapshot::from_json_strs(&user_text, &profile_text)?;

    let view = ProfileDashboard::new(&config.engine).build_snapshot(&snapshot);
    info!(
        score = view.completeness.score,
        visible_sections = view.visible_sections().count(),
        "Built dashboard view"
    );
    println!("{}", view.to_json(compact)?);
    Ok(())
}

fn read_optional(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return Ok(String::new());
    };
    debug!(path = %path.display(), "Reading snapshot file");
    fs::read_to_string(path).map_err(|e| anyhow!("failed to read {}: {e}", path.display()))
}

fn weights_table(weights: CompletenessWeights) -> serde_json::Value {
    let entries: Vec<_> = weights
        .entries
        .iter()
        .map(|row| {
            json!({
                "item": row.item,
                "label": row.item.label(),
                "weight": row.weight,
            })
        })
        .collect();
    json!({
        "version": weights.version,
        "total": weights.total(),
        "entries": entries,
    })
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}
