// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands shared by leads and properties

use crate::output::{print, print_list, EntityView, OutputFormat, ENTITY_HEADER};
use crate::CliBoard;
use clap::Subcommand;
use rb_core::Tracked;

#[derive(Subcommand)]
pub enum EntityCommand {
    /// Show one entity
    Show {
        id: String,
    },
    /// List entities
    List {
        /// Only entities in this phase (key or label)
        #[arg(long)]
        phase: Option<String>,
    },
    /// Move to a phase (key or label)
    Move {
        id: String,
        phase: String,
    },
    /// Move to the next phase
    Advance {
        id: String,
    },
    /// Move to the previous phase
    Retreat {
        id: String,
    },
    /// Delete, together with its assignments
    Delete {
        id: String,
    },
}

pub async fn handle<T: Tracked>(
    board: &CliBoard,
    command: EntityCommand,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        EntityCommand::Show { id } => {
            let entity: T = board.get(&id).await?;
            print(&view(board, entity), format);
        }
        EntityCommand::List { phase } => {
            let entities: Vec<T> = board.list(phase.as_deref()).await?;
            let views: Vec<_> = entities.into_iter().map(|e| view(board, e)).collect();
            print_list(&views, ENTITY_HEADER, format);
        }
        EntityCommand::Move { id, phase } => {
            let entity: T = board.move_to(&id, &phase).await?;
            print(&view(board, entity), format);
        }
        EntityCommand::Advance { id } => {
            let entity: T = board.advance(&id).await?;
            print(&view(board, entity), format);
        }
        EntityCommand::Retreat { id } => {
            let entity: T = board.retreat(&id).await?;
            print(&view(board, entity), format);
        }
        EntityCommand::Delete { id } => {
            if !board.delete::<T>(&id).await? {
                anyhow::bail!("{} not found: {}", T::KIND, id);
            }
            println!("Deleted {} {}", T::KIND, id);
        }
    }
    Ok(())
}

pub fn view<T: Tracked>(board: &CliBoard, entity: T) -> EntityView<T> {
    EntityView {
        phase_label: board.phase_of(&entity).ok().map(|p| p.label.clone()),
        days_in_phase: board.days_in_phase(&entity).ok(),
        entity,
    }
}
