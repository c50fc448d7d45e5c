// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Assignment commands

use crate::output::{
    print, print_list, AssignmentRow, BatchView, OutputFormat, ASSIGNMENT_HEADER,
};
use crate::CliBoard;
use clap::Args;

#[derive(Args)]
pub struct AssignArgs {
    /// Lead to assign; without it every unassigned lead is assigned round robin
    #[arg(long, requires = "property")]
    pub lead: Option<String>,
    #[arg(long, requires = "lead")]
    pub property: Option<String>,
}

#[derive(Args)]
pub struct UnassignArgs {
    pub lead: String,
    pub property: String,
}

pub async fn assign(
    board: &CliBoard,
    args: AssignArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match (args.lead, args.property) {
        (Some(lead), Some(property)) => {
            let assignment = board.assign(&lead, &property).await?;
            print(&AssignmentRow(assignment), format);
        }
        _ => {
            let run = board.assign_round_robin().await?;
            let view = BatchView::new(&run.report).with_assigned(run.assignments.len());
            print(&view, format);
        }
    }
    Ok(())
}

pub async fn unassign(board: &CliBoard, args: UnassignArgs) -> anyhow::Result<()> {
    if !board.unassign(&args.lead, &args.property).await? {
        anyhow::bail!("{} is not assigned to {}", args.lead, args.property);
    }
    println!("Unassigned {} from {}", args.lead, args.property);
    Ok(())
}

pub async fn list(board: &CliBoard, format: OutputFormat) -> anyhow::Result<()> {
    let rows: Vec<_> = board
        .assignments()
        .await?
        .into_iter()
        .map(AssignmentRow)
        .collect();
    print_list(&rows, ASSIGNMENT_HEADER, format);
    Ok(())
}
