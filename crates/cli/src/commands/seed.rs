// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Seeding and maintenance

use crate::output::{print, BatchView, OutputFormat};
use crate::CliBoard;
use clap::Args;
use rb_engine::SeedPlan;

#[derive(Args)]
pub struct SeedArgs {
    /// Number of leads
    #[arg(long, default_value_t = SeedPlan::default().leads)]
    pub leads: usize,
    /// Number of published properties
    #[arg(long, default_value_t = SeedPlan::default().properties)]
    pub properties: usize,
    /// Number of extra properties in other phases
    #[arg(long, default_value_t = SeedPlan::default().drafts)]
    pub drafts: usize,
}

pub async fn seed(board: &CliBoard, args: SeedArgs, format: OutputFormat) -> anyhow::Result<()> {
    let plan = SeedPlan {
        leads: args.leads,
        properties: args.properties,
        drafts: args.drafts,
    };
    let run = board.seed(plan).await?;
    print(
        &BatchView::new(&run.report).with_assigned(run.assignments.len()),
        format,
    );
    Ok(())
}

pub async fn normalize(board: &CliBoard, format: OutputFormat) -> anyhow::Result<()> {
    let report = board.normalize_phases().await?;
    print(&BatchView::new(&report), format);
    Ok(())
}
