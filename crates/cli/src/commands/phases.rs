// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase listing

use crate::output::{print, print_list, OutputFormat, PhaseRow, PHASE_HEADER};
use clap::Args;
use rb_core::{PhaseRegistry, PipelineKind};

#[derive(Args)]
pub struct PhasesArgs {
    /// Pipeline (lead or property)
    pub kind: PipelineKind,
    /// Show one phase, by key or label
    #[arg(long)]
    pub show: Option<String>,
}

pub fn handle(
    registry: &PhaseRegistry,
    args: PhasesArgs,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match args.show {
        Some(reference) => {
            let phase = registry.resolve(args.kind, &reference)?;
            print(&PhaseRow(phase), format);
        }
        None => {
            let rows: Vec<_> = registry
                .list_phases(args.kind)
                .iter()
                .map(PhaseRow)
                .collect();
            print_list(&rows, PHASE_HEADER, format);
        }
    }
    Ok(())
}
