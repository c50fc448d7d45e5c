// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kanban board display

use crate::output::{print, BoardView, OutputFormat};
use crate::CliBoard;
use clap::Args;
use rb_core::{Lead, PipelineKind, Property};

#[derive(Args)]
pub struct BoardArgs {
    /// Pipeline (lead or property)
    pub kind: PipelineKind,
}

pub async fn handle(
    board: &CliBoard,
    args: BoardArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let kanban = match args.kind {
        PipelineKind::Lead => board.kanban::<Lead>().await?,
        PipelineKind::Property => board.kanban::<Property>().await?,
    };
    print(&BoardView(&kanban), format);
    Ok(())
}
