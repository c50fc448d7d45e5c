// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered phase sequences

use crate::error::ConfigError;
use crate::phase::{Phase, PhaseVariant, PipelineKind};
use std::collections::HashSet;

/// An ordered sequence of phases for one pipeline kind.
///
/// Orders are contiguous from zero, keys and labels are unique, and no
/// label names another phase's key. A `Pipeline` can only be obtained
/// through a constructor that checks this, so lookups never have to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    kind: PipelineKind,
    phases: Vec<Phase>,
}

impl Pipeline {
    /// Build a pipeline, sorting by order and checking invariants
    pub fn new(kind: PipelineKind, mut phases: Vec<Phase>) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidPipeline { kind, reason };

        if phases.is_empty() {
            return Err(invalid("no phases".to_string()));
        }
        phases.sort_by_key(|p| p.order);

        let mut keys = HashSet::new();
        let mut labels = HashSet::new();
        for (i, phase) in phases.iter().enumerate() {
            if phase.kind != kind {
                return Err(invalid(format!(
                    "phase '{}' belongs to the {} pipeline",
                    phase.key, phase.kind
                )));
            }
            if phase.order as usize != i {
                return Err(invalid(format!(
                    "phase '{}' has order {}, expected {}",
                    phase.key, phase.order, i
                )));
            }
            if phase.key.is_empty() {
                return Err(invalid(format!("phase {} has an empty key", i)));
            }
            if !keys.insert(phase.key.as_str()) {
                return Err(invalid(format!("duplicate key '{}'", phase.key)));
            }
            if !labels.insert(phase.label.as_str()) {
                return Err(invalid(format!("duplicate label '{}'", phase.label)));
            }
        }
        // Labels must not shadow a key
        for phase in &phases {
            if phase.label != phase.key && keys.contains(phase.label.as_str()) {
                return Err(invalid(format!(
                    "label '{}' of phase '{}' is another phase's key",
                    phase.label, phase.key
                )));
            }
        }

        Ok(Self { kind, phases })
    }

    /// The builtin pipeline for a typed phase enum
    pub fn builtin<P: PhaseVariant>() -> Self {
        Self {
            kind: P::KIND,
            phases: P::ALL.iter().map(|p| p.to_phase()).collect(),
        }
    }

    pub fn kind(&self) -> PipelineKind {
        self.kind
    }

    /// Phases sorted by order
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Look up a phase by key
    pub fn get(&self, key: &str) -> Option<&Phase> {
        self.phases.iter().find(|p| p.key == key)
    }

    /// Look up a phase by key, falling back to its display label
    pub fn resolve(&self, reference: &str) -> Option<&Phase> {
        self.get(reference)
            .or_else(|| self.phases.iter().find(|p| p.label == reference))
    }

    /// The order-0 phase
    pub fn initial(&self) -> &Phase {
        // Non-empty by construction
        &self.phases[0]
    }

    pub fn next(&self, phase: &Phase) -> Option<&Phase> {
        self.phases.get(phase.order as usize + 1)
    }

    pub fn previous(&self, phase: &Phase) -> Option<&Phase> {
        (phase.order as usize)
            .checked_sub(1)
            .and_then(|i| self.phases.get(i))
    }

    /// Replace the label of the phase with the given key
    pub(crate) fn relabel(&mut self, key: &str, label: &str) -> Result<(), ConfigError> {
        let kind = self.kind;
        let phase = self
            .phases
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| ConfigError::UnknownPhaseKey {
                kind,
                key: key.to_string(),
            })?;
        phase.label = label.to_string();
        Ok(())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
