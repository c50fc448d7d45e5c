// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Kanban board views

use crate::board::Board;
use crate::error::EngineError;
use rb_adapters::{EntityStore, Filter};
use rb_core::{Clock, IdGen, Phase, PhaseRegistry, PipelineKind, Tracked};
use serde::Serialize;
use tracing::warn;

/// One entity on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    /// `None` when the entry time lies in the future
    pub days_in_phase: Option<i64>,
}

/// One phase column, cards in creation order
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub phase: Phase,
    pub cards: Vec<Card>,
}

/// A card whose stored phase no longer exists in the pipeline
#[derive(Debug, Clone, Serialize)]
pub struct UnplacedCard {
    pub phase: String,
    pub card: Card,
}

/// All columns of one pipeline
#[derive(Debug, Clone, Serialize)]
pub struct Kanban {
    pub kind: PipelineKind,
    pub columns: Vec<Column>,
    pub unplaced: Vec<UnplacedCard>,
}

impl Kanban {
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum::<usize>() + self.unplaced.len()
    }
}

impl<S, C, I> Board<S, C, I>
where
    S: EntityStore,
    C: Clock,
    I: IdGen,
{
    /// Build the board for one pipeline: a column per phase, in order
    pub async fn kanban<T: Tracked>(&self) -> Result<Kanban, EngineError> {
        let mut records: Vec<T> = self.store.query(&Filter::all()).await?;
        records.sort_by(|a, b| {
            (a.created_at(), a.id()).cmp(&(b.created_at(), b.id()))
        });

        let now = self.clock.now();
        let mut columns: Vec<Column> = self
            .registry
            .list_phases(T::KIND)
            .iter()
            .map(|phase| Column {
                phase: phase.clone(),
                cards: Vec::new(),
            })
            .collect();
        let mut unplaced = Vec::new();

        for record in &records {
            let stamp = record.stamp();
            let days_in_phase = match PhaseRegistry::days_in_phase(stamp.phase_entered_at, now) {
                Ok(days) => Some(days),
                Err(e) => {
                    warn!(id = record.id(), error = %e, "cannot compute days in phase");
                    None
                }
            };
            let card = Card {
                id: record.id().to_string(),
                title: record.title().to_string(),
                days_in_phase,
            };

            let column = self
                .registry
                .resolve(T::KIND, &stamp.phase)
                .ok()
                .and_then(|phase| columns.get_mut(phase.order as usize));
            match column {
                Some(column) => column.cards.push(card),
                None => {
                    warn!(id = record.id(), phase = %stamp.phase, "stored phase not in pipeline");
                    unplaced.push(UnplacedCard {
                        phase: stamp.phase.clone(),
                        card,
                    });
                }
            }
        }

        Ok(Kanban {
            kind: T::KIND,
            columns,
            unplaced,
        })
    }
}

#[cfg(test)]
#[path = "kanban_tests.rs"]
mod tests;
