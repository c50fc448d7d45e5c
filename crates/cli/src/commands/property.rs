// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property commands

use super::entity::{view, EntityCommand};
use crate::output::{print, OutputFormat};
use crate::CliBoard;
use clap::{Args, Subcommand};
use rb_core::NewProperty;

#[derive(Subcommand)]
pub enum PropertyCommand {
    /// Create a property
    Create(CreatePropertyArgs),
    #[command(flatten)]
    Common(EntityCommand),
}

#[derive(Args)]
pub struct CreatePropertyArgs {
    pub title: String,
    pub address: String,
    /// Monthly rent in euros
    pub rent: u32,
    #[arg(long)]
    pub bedrooms: Option<u8>,
    /// Starting phase (key or label); defaults to the first property phase
    #[arg(long)]
    pub phase: Option<String>,
}

pub async fn create(
    board: &CliBoard,
    args: CreatePropertyArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let new = NewProperty {
        title: args.title,
        address: args.address,
        monthly_rent: args.rent,
        bedrooms: args.bedrooms,
        phase: args.phase,
    };
    let property = board.create_property(new).await?;
    print(&view(board, property), format);
    Ok(())
}
