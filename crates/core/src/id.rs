// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity identifier generation

use crate::phase::PipelineKind;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Generates identifiers for new entities.
///
/// Identifiers are prefixed with the entity kind so that a lead id can
/// never be mistaken for a property id.
pub trait IdGen: Clone + Send + Sync {
    fn next(&self, kind: PipelineKind) -> String;
}

/// Random identifiers for production use
#[derive(Clone, Default)]
pub struct UuidIdGen;

impl IdGen for UuidIdGen {
    fn next(&self, kind: PipelineKind) -> String {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        format!("{}-{}", kind.name(), &uuid[..12])
    }
}

/// Sequential identifiers for testing and seeding.
///
/// Each kind has its own counter: `lead-1`, `lead-2`, `property-1`, ...
#[derive(Clone, Default)]
pub struct SequentialIdGen {
    leads: Arc<AtomicU64>,
    properties: Arc<AtomicU64>,
}

impl SequentialIdGen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGen for SequentialIdGen {
    fn next(&self, kind: PipelineKind) -> String {
        let counter = match kind {
            PipelineKind::Lead => &self.leads,
            PipelineKind::Property => &self.properties,
        };
        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", kind.name(), n)
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
