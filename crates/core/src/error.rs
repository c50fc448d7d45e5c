// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the phase model

use crate::phase::PipelineKind;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from phase lookups and transitions.
///
/// All of these are recoverable by the caller: reject the input, or skip
/// the record and carry on with the batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    #[error("unknown pipeline: {0}")]
    UnknownPipeline(String),
    #[error("unknown {kind} phase: {reference}")]
    UnknownPhase {
        kind: PipelineKind,
        reference: String,
    },
    #[error("invalid {kind} transition '{from}' -> '{to}': unknown phase '{unknown}'")]
    InvalidTransition {
        kind: PipelineKind,
        from: String,
        to: String,
        unknown: String,
    },
    #[error("clock skew: phase entered at {entered_at} is after {now}")]
    ClockSkew {
        entered_at: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

/// Errors building a registry from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{kind} pipeline has no phase '{key}'")]
    UnknownPhaseKey { kind: PipelineKind, key: String },
    #[error("invalid {kind} pipeline: {reason}")]
    InvalidPipeline { kind: PipelineKind, reason: String },
}
