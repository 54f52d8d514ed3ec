// ABOUTME: FitPlan CLI - chat intake, direct plan generation, and catalog inspection
// ABOUTME: Logs to stderr via LoggingConfig; plan and catalog output go to stdout as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Interactive intake (weight, height, gender, goal)
//! fitplan-cli chat
//!
//! # Generate both plans for a complete profile
//! fitplan-cli generate --weight 70 --height 175 --gender male --goal maintain
//!
//! # Validate and summarize a catalog document
//! fitplan-cli catalog --catalog ./catalog.yaml
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fitplan_engine::config::PlanningConfig;
use fitplan_engine::logging::LoggingConfig;
use fitplan_engine::reference::ReferenceCatalog;
use fitplan_engine::PlanEngine;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitplan-cli",
    about = "FitPlan nutrition and training plan generator",
    long_about = "Collects a user profile through a short chat or command-line flags and prints a daily nutrition plan and a weekly training template."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Reference catalog YAML file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Interactive intake on stdin/stdout
    Chat {
        /// Session id (a random one is used if omitted)
        #[arg(long)]
        session: Option<String>,
    },

    /// Generate plans for a complete profile and print them as JSON
    Generate(commands::generate::GenerateArgs),

    /// Validate a catalog and print its summary
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Command::Chat { session } => {
            let engine = PlanEngine::with_catalog(catalog, PlanningConfig::global().clone());
            commands::chat::run(&engine, session)?;
        }
        Command::Generate(args) => {
            let engine = PlanEngine::with_catalog(catalog, PlanningConfig::global().clone());
            commands::generate::run(&engine, args)?;
        }
        Command::Catalog => commands::catalog::run(&catalog)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<ReferenceCatalog> {
    let catalog = match path {
        Some(path) => ReferenceCatalog::from_path(path)?,
        None => {
            info!("Using built-in reference catalog");
            ReferenceCatalog::builtin()?
        }
    };
    Ok(catalog)
}
