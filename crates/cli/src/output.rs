// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use clap::ValueEnum;
use rb_core::{Assignment, BatchReport, Phase, Tracked};
use rb_engine::{EngineError, Kanban};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(value) {
                println!("{}", json);
            }
        }
    }
}

/// Print a list of items, with a header line in text mode
pub fn print_list<T: Serialize + fmt::Display>(items: &[T], header: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if items.is_empty() {
                println!("Nothing found.");
                return;
            }
            println!("{}", header);
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(items) {
                println!("{}", json);
            }
        }
    }
}

pub const PHASE_HEADER: &str = "ORDER  KEY                          LABEL";

/// One row of a phase table
#[derive(Serialize)]
#[serde(transparent)]
pub struct PhaseRow<'a>(pub &'a Phase);

impl fmt::Display for PhaseRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<6} {:<28} {}", self.0.order, self.0.key, self.0.label)
    }
}

pub const ENTITY_HEADER: &str =
    "ID                   TITLE                          PHASE                      DAYS";

/// A lead or property together with its resolved phase
#[derive(Serialize)]
pub struct EntityView<T> {
    #[serde(flatten)]
    pub entity: T,
    /// `None` when the stored phase is not in the pipeline
    pub phase_label: Option<String>,
    pub days_in_phase: Option<i64>,
}

impl<T: Tracked> fmt::Display for EntityView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = self
            .phase_label
            .as_deref()
            .unwrap_or(&self.entity.stamp().phase);
        let days = self
            .days_in_phase
            .map_or_else(|| "-".to_string(), |d| d.to_string());
        write!(
            f,
            "{:<20} {:<30} {:<26} {}",
            self.entity.id(),
            self.entity.title(),
            phase,
            days
        )
    }
}

/// Kanban columns
#[derive(Serialize)]
#[serde(transparent)]
pub struct BoardView<'a>(pub &'a Kanban);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, column) in self.0.columns.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} ({})", column.phase.label, column.cards.len())?;
            for card in &column.cards {
                match card.days_in_phase {
                    Some(days) => writeln!(f, "  {:<20} {:<30} {}d", card.id, card.title, days)?,
                    None => writeln!(f, "  {:<20} {:<30} -", card.id, card.title)?,
                }
            }
        }
        if !self.0.unplaced.is_empty() {
            writeln!(f)?;
            writeln!(f, "Unknown phase ({})", self.0.unplaced.len())?;
            for unplaced in &self.0.unplaced {
                writeln!(
                    f,
                    "  {:<20} {:<30} {}",
                    unplaced.card.id, unplaced.card.title, unplaced.phase
                )?;
            }
        }
        Ok(())
    }
}

pub const ASSIGNMENT_HEADER: &str = "LEAD                 PROPERTY";

#[derive(Serialize)]
#[serde(transparent)]
pub struct AssignmentRow(pub Assignment);

impl fmt::Display for AssignmentRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} {}", self.0.lead_id, self.0.property_id)
    }
}

#[derive(Serialize)]
pub struct FailureView {
    pub id: String,
    pub error: String,
}

/// Summary of a batch run
#[derive(Serialize)]
pub struct BatchView {
    pub name: String,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<FailureView>,
    /// Assignments written, when the batch assigns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned: Option<usize>,
}

impl BatchView {
    pub fn new(report: &BatchReport<EngineError>) -> Self {
        Self {
            name: report.name().to_string(),
            succeeded: report.succeeded(),
            failed: report.failed(),
            failures: report
                .failures()
                .map(|(id, error)| FailureView {
                    id: id.to_string(),
                    error: error.to_string(),
                })
                .collect(),
            assigned: None,
        }
    }

    pub fn with_assigned(self, assigned: usize) -> Self {
        Self {
            assigned: Some(assigned),
            ..self
        }
    }
}

impl fmt::Display for BatchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} succeeded, {} failed",
            self.name, self.succeeded, self.failed
        )?;
        if let Some(assigned) = self.assigned {
            write!(f, " ({} assigned)", assigned)?;
        }
        for failure in &self.failures {
            write!(f, "\n  failed {}: {}", failure.id, failure.error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
