// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase registry
//!
//! The single source of truth for which phases exist per pipeline, how
//! they are ordered, and which moves between them are legal. The registry
//! is a pure lookup surface: it never persists anything.
//!
//! Transition policy is permissive. Any phase may move to any other phase
//! of the same pipeline, backward moves included, as long as both ends
//! exist. Moving to the current phase is a no-op.

use crate::config::PipelineConfig;
use crate::error::{ConfigError, PhaseError};
use crate::phase::{LeadPhase, Phase, PipelineKind, PropertyPhase};
use crate::pipeline::Pipeline;
use chrono::{DateTime, Utc};
use std::sync::LazyLock;

static BUILTIN: LazyLock<PhaseRegistry> = LazyLock::new(PhaseRegistry::builtin);

/// Immutable phase configuration for every pipeline kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRegistry {
    leads: Pipeline,
    properties: Pipeline,
}

impl PhaseRegistry {
    /// Registry built from the phase enums with their default labels
    pub fn builtin() -> Self {
        Self {
            leads: Pipeline::builtin::<LeadPhase>(),
            properties: Pipeline::builtin::<PropertyPhase>(),
        }
    }

    /// Process-wide builtin registry
    pub fn global() -> &'static PhaseRegistry {
        &BUILTIN
    }

    /// Builtin phases with the configured label overrides applied
    pub fn from_config(config: &PipelineConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::builtin();
        for kind in PipelineKind::ALL {
            let pipeline = registry.pipeline_mut(kind);
            for (key, label) in &config.overrides(kind).labels {
                pipeline.relabel(key, label)?;
            }
            // Relabelling can introduce duplicate labels
            *pipeline = Pipeline::new(kind, pipeline.phases().to_vec())?;
        }
        Ok(registry)
    }

    pub fn pipeline(&self, kind: PipelineKind) -> &Pipeline {
        match kind {
            PipelineKind::Lead => &self.leads,
            PipelineKind::Property => &self.properties,
        }
    }

    fn pipeline_mut(&mut self, kind: PipelineKind) -> &mut Pipeline {
        match kind {
            PipelineKind::Lead => &mut self.leads,
            PipelineKind::Property => &mut self.properties,
        }
    }

    /// Phases of a pipeline, sorted by order
    pub fn list_phases(&self, kind: PipelineKind) -> &[Phase] {
        self.pipeline(kind).phases()
    }

    /// Look up a phase by its key
    pub fn get_phase(&self, kind: PipelineKind, key: &str) -> Result<&Phase, PhaseError> {
        self.pipeline(kind)
            .get(key)
            .ok_or_else(|| unknown(kind, key))
    }

    /// Look up a phase by key or display label.
    ///
    /// Rows written by the dashboard carry display labels rather than keys.
    pub fn resolve(&self, kind: PipelineKind, reference: &str) -> Result<&Phase, PhaseError> {
        self.pipeline(kind)
            .resolve(reference)
            .ok_or_else(|| unknown(kind, reference))
    }

    /// Check that `from` may move to `to` within the pipeline
    pub fn validate_transition(
        &self,
        kind: PipelineKind,
        from: &str,
        to: &str,
    ) -> Result<(), PhaseError> {
        let pipeline = self.pipeline(kind);
        let invalid = |unknown: &str| PhaseError::InvalidTransition {
            kind,
            from: from.to_string(),
            to: to.to_string(),
            unknown: unknown.to_string(),
        };

        pipeline.resolve(from).ok_or_else(|| invalid(from))?;
        pipeline.resolve(to).ok_or_else(|| invalid(to))?;
        Ok(())
    }

    /// The order-0 phase, used for entities created without a phase
    pub fn initial_phase(&self, kind: PipelineKind) -> &Phase {
        self.pipeline(kind).initial()
    }

    /// The phase after `reference`, or `None` at the end of the pipeline
    pub fn next_phase(
        &self,
        kind: PipelineKind,
        reference: &str,
    ) -> Result<Option<&Phase>, PhaseError> {
        let phase = self.resolve(kind, reference)?;
        Ok(self.pipeline(kind).next(phase))
    }

    /// The phase before `reference`, or `None` at the start of the pipeline
    pub fn previous_phase(
        &self,
        kind: PipelineKind,
        reference: &str,
    ) -> Result<Option<&Phase>, PhaseError> {
        let phase = self.resolve(kind, reference)?;
        Ok(self.pipeline(kind).previous(phase))
    }

    /// Whole days elapsed since a phase was entered
    pub fn days_in_phase(
        entered_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<i64, PhaseError> {
        if entered_at > now {
            return Err(PhaseError::ClockSkew { entered_at, now });
        }
        Ok((now - entered_at).num_days())
    }
}

impl Default for PhaseRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn unknown(kind: PipelineKind, reference: &str) -> PhaseError {
    PhaseError::UnknownPhase {
        kind,
        reference: reference.to_string(),
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
