// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lead commands

use super::entity::{view, EntityCommand};
use crate::output::{print, OutputFormat};
use crate::CliBoard;
use clap::{Args, Subcommand};
use rb_core::NewLead;

#[derive(Subcommand)]
pub enum LeadCommand {
    /// Create a lead
    Create(CreateLeadArgs),
    #[command(flatten)]
    Common(EntityCommand),
}

#[derive(Args)]
pub struct CreateLeadArgs {
    pub name: String,
    pub email: String,
    #[arg(long)]
    pub phone: Option<String>,
    /// Monthly budget in euros
    #[arg(long)]
    pub budget: Option<u32>,
    /// Starting phase (key or label); defaults to the first lead phase
    #[arg(long)]
    pub phase: Option<String>,
}

pub async fn create(
    board: &CliBoard,
    args: CreateLeadArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let new = NewLead {
        name: args.name,
        email: args.email,
        phone: args.phone,
        budget: args.budget,
        phase: args.phase,
    };
    let lead = board.create_lead(new).await?;
    print(&view(board, lead), format);
    Ok(())
}
