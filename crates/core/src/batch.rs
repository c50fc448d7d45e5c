// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-record outcomes of batch operations
//!
//! Batch jobs (seeding, assignment, maintenance) record one outcome per
//! record and carry on after failures. The report is the only place a
//! failure ends up; nothing is thrown past the batch.

use std::fmt;

/// Result of processing one record
#[derive(Debug)]
pub enum RecordOutcome<E> {
    Succeeded { id: String },
    Failed { id: String, error: E },
}

impl<E> RecordOutcome<E> {
    pub fn id(&self) -> &str {
        match self {
            RecordOutcome::Succeeded { id } | RecordOutcome::Failed { id, .. } => id,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RecordOutcome::Succeeded { .. })
    }
}

/// Outcomes of a named batch, in processing order
#[derive(Debug)]
pub struct BatchReport<E> {
    name: String,
    outcomes: Vec<RecordOutcome<E>>,
}

impl<E> BatchReport<E> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record the outcome of one record
    pub fn record<T>(&mut self, id: impl Into<String>, result: Result<T, E>) {
        let id = id.into();
        self.outcomes.push(match result {
            Ok(_) => RecordOutcome::Succeeded { id },
            Err(error) => RecordOutcome::Failed { id, error },
        });
    }

    /// Append another report's outcomes
    pub fn absorb(&mut self, other: BatchReport<E>) {
        self.outcomes.extend(other.outcomes);
    }

    pub fn outcomes(&self) -> &[RecordOutcome<E>] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &E)> {
        self.outcomes.iter().filter_map(|o| match o {
            RecordOutcome::Failed { id, error } => Some((id.as_str(), error)),
            RecordOutcome::Succeeded { .. } => None,
        })
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

impl<E> fmt::Display for BatchReport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} succeeded, {} failed",
            self.name,
            self.succeeded(),
            self.failed()
        )
    }
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
