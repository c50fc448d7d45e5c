// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the board service

use rb_adapters::StoreError;
use rb_core::{AssignmentError, PhaseError, PipelineKind};
use thiserror::Error;

/// Errors that can occur in board operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Phase(#[from] PhaseError),
    #[error(transparent)]
    Assignment(#[from] AssignmentError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("{kind} not found: {id}")]
    NotFound { kind: PipelineKind, id: String },
    #[error("{kind} {id} is already in the {end} phase '{phase}'")]
    EndOfPipeline {
        kind: PipelineKind,
        id: String,
        phase: String,
        end: &'static str,
    },
}

impl EngineError {
    pub(crate) fn not_found(kind: PipelineKind, id: &str) -> Self {
        EngineError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Whether the stored entity changed under the caller
    pub fn is_stale(&self) -> bool {
        matches!(self, EngineError::Store(StoreError::StaleEntity { .. }))
    }
}
