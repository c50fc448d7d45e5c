// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rb - Rentboard CLI

mod commands;
mod completions;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{assign, board, entity, lead, phases, property, seed};
use rb_adapters::{JsonEntityStore, TracedEntityStore};
use rb_core::{Lead, PhaseRegistry, PipelineConfig, Property, SystemClock, UuidIdGen};
use rb_engine::Board;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::RbError;
use crate::output::OutputFormat;

/// Board wired to the on-disk store
pub type CliBoard = Board<TracedEntityStore<JsonEntityStore>, SystemClock, UuidIdGen>;

#[derive(Parser)]
#[command(
    name = "rb",
    version,
    about = "Rentboard - lead and property pipelines"
)]
struct Cli {
    /// Data directory of the board
    #[arg(long, global = true, env = "RB_STORE_PATH", default_value = ".rentboard")]
    store: PathBuf,

    /// TOML file with phase label overrides
    #[arg(long, global = true, env = "RB_PHASES")]
    phases: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the phases of a pipeline
    Phases(phases::PhasesArgs),
    /// Lead management
    Lead {
        #[command(subcommand)]
        command: lead::LeadCommand,
    },
    /// Property management
    Property {
        #[command(subcommand)]
        command: property::PropertyCommand,
    },
    /// Show a pipeline as Kanban columns
    Board(board::BoardArgs),
    /// Assign leads to published properties
    Assign(assign::AssignArgs),
    /// Remove an assignment
    Unassign(assign::UnassignArgs),
    /// List assignments
    Assignments,
    /// Replace all data with mock leads and properties
    Seed(seed::SeedArgs),
    /// Rewrite stored phase labels to phase keys
    Normalize,
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", RbError::from(e));
            ExitCode::FAILURE
        }
    }
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let format = cli.format;

    // Commands that need no store
    let command = match cli.command {
        Commands::Completions(args) => {
            completions::generate_completions::<Cli>(args.shell);
            return Ok(());
        }
        Commands::Phases(args) => {
            let registry = load_registry(cli.phases.as_deref())?;
            return phases::handle(&registry, args, format);
        }
        command => command,
    };

    let registry = Arc::new(load_registry(cli.phases.as_deref())?);
    debug!(store = %cli.store.display(), "opening store");
    let store = TracedEntityStore::new(JsonEntityStore::open(&cli.store).await?);
    let board: CliBoard = Board::new(store, registry, SystemClock, UuidIdGen);

    match command {
        Commands::Lead { command } => match command {
            lead::LeadCommand::Create(args) => lead::create(&board, args, format).await,
            lead::LeadCommand::Common(command) => {
                entity::handle::<Lead>(&board, command, format).await
            }
        },
        Commands::Property { command } => match command {
            property::PropertyCommand::Create(args) => {
                property::create(&board, args, format).await
            }
            property::PropertyCommand::Common(command) => {
                entity::handle::<Property>(&board, command, format).await
            }
        },
        Commands::Board(args) => board::handle(&board, args, format).await,
        Commands::Assign(args) => assign::assign(&board, args, format).await,
        Commands::Unassign(args) => assign::unassign(&board, args).await,
        Commands::Assignments => assign::list(&board, format).await,
        Commands::Seed(args) => seed::seed(&board, args, format).await,
        Commands::Normalize => seed::normalize(&board, format).await,
        Commands::Completions(_) | Commands::Phases(_) => Ok(()),
    }
}

fn load_registry(path: Option<&Path>) -> Result<PhaseRegistry> {
    match path {
        Some(path) => Ok(PhaseRegistry::from_config(&PipelineConfig::load(path)?)?),
        None => Ok(PhaseRegistry::builtin()),
    }
}
