// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! This module provides enhanced error types that include:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use rb_adapters::StoreError;
use rb_core::{
    AssignmentError, ConfigError, PhaseError, PhaseVariant, PipelineKind, ELIGIBLE_PHASE,
};
use rb_engine::EngineError;
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct RbError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl RbError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    fn list_phases(self, kind: PipelineKind) -> Self {
        self.with_suggestion(format!("List valid phases: rb phases {}", kind))
    }

    fn from_engine(err: &EngineError) -> Self {
        let base = RbError::new(err.to_string());
        match err {
            EngineError::NotFound { kind, .. } => base
                .with_context(format!("The {} may have been deleted or reseeded", kind))
                .with_suggestion(format!("List {}s: rb {} list", kind, kind)),
            EngineError::EndOfPipeline { kind, id, end, .. } => {
                let (verb, direction) = match *end {
                    "first" => ("advance", "forward"),
                    _ => ("retreat", "back"),
                };
                base.with_suggestion(format!(
                    "Move it {} instead: rb {} {} {}",
                    direction, kind, verb, id
                ))
            }
            EngineError::Phase(e) => RbError::from_phase(e, base),
            EngineError::Assignment(AssignmentError::NoEligibleProperties) => base
                .with_context(format!(
                    "Only properties in phase '{}' receive leads",
                    ELIGIBLE_PHASE.key()
                ))
                .with_suggestion(format!(
                    "Publish a property: rb property move <id> {}",
                    ELIGIBLE_PHASE.key()
                )),
            EngineError::Store(StoreError::StaleEntity { .. }) => base
                .with_context("Someone else moved this entity since it was loaded")
                .with_suggestion("Run the command again to move it from its current phase"),
            EngineError::Store(StoreError::InvalidId(_)) => base
                .with_suggestion(
                    "Ids contain only letters, digits, '-' and '_', with no leading, trailing or doubled '-'",
                ),
            EngineError::Store(_) => base,
        }
    }

    fn from_phase(err: &PhaseError, base: RbError) -> Self {
        match err {
            PhaseError::UnknownPhase { kind, .. } | PhaseError::InvalidTransition { kind, .. } => {
                base.list_phases(*kind)
            }
            PhaseError::ClockSkew { .. } => {
                base.with_context("The stored entry time is later than the system clock")
            }
            PhaseError::UnknownPipeline(_) => base.with_suggestion("Use 'lead' or 'property'"),
        }
    }

    fn from_config(err: &ConfigError) -> Self {
        let base = RbError::new(format!("invalid phase configuration: {}", err));
        match err {
            ConfigError::UnknownPhaseKey { kind, .. } => base
                .with_context("Label overrides must name an existing phase key")
                .list_phases(*kind),
            _ => base.with_suggestion("Check the file given by --phases or RB_PHASES"),
        }
    }
}

impl From<anyhow::Error> for RbError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(e) = err.downcast_ref::<EngineError>() {
            RbError::from_engine(e)
        } else if let Some(e) = err.downcast_ref::<PhaseError>() {
            RbError::from_phase(e, RbError::new(e.to_string()))
        } else if let Some(e) = err.downcast_ref::<ConfigError>() {
            RbError::from_config(e)
        } else {
            RbError::new(format!("{:#}", err))
        }
    }
}

impl fmt::Display for RbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RbError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
