// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entity store adapters
//!
//! The store persists what the engine has already validated. It owns no
//! phase rules of its own beyond the expected-phase guard on
//! [`EntityStore::update_phase`], and it never retries.

mod json;

pub use json::JsonEntityStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeEntityStore, StoreCall};

use async_trait::async_trait;
use rb_core::{Assignment, PhaseStamp, Record, Tracked};
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not found: {collection}/{id}")]
    NotFound {
        collection: &'static str,
        id: String,
    },
    #[error("already exists: {collection}/{id}")]
    AlreadyExists {
        collection: &'static str,
        id: String,
    },
    #[error("stale {collection}/{id}: expected phase '{expected}', found '{actual}'")]
    StaleEntity {
        collection: &'static str,
        id: String,
        expected: String,
        actual: String,
    },
    #[error("invalid id: {0:?}")]
    InvalidId(String),
    #[error("backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn not_found<T: Record>(id: &str) -> Self {
        StoreError::NotFound {
            collection: T::COLLECTION,
            id: id.to_string(),
        }
    }
}

/// Query filter for tracked entities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    /// Only entities whose stored phase equals this value
    pub phase: Option<String>,
}

impl Filter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn phase(phase: impl Into<String>) -> Self {
        Self {
            phase: Some(phase.into()),
        }
    }

    pub fn matches<T: Tracked>(&self, record: &T) -> bool {
        self.phase
            .as_deref()
            .is_none_or(|phase| record.stamp().phase == phase)
    }
}

/// Adapter for entity persistence (leads, properties, assignments)
#[async_trait]
pub trait EntityStore: Clone + Send + Sync + 'static {
    /// Insert a new record; fails if the id is taken
    async fn create<T: Record>(&self, record: &T) -> Result<(), StoreError>;

    /// Fetch a record by id
    async fn get<T: Record>(&self, id: &str) -> Result<Option<T>, StoreError>;

    /// All tracked entities matching the filter, sorted by id
    async fn query<T: Tracked>(&self, filter: &Filter) -> Result<Vec<T>, StoreError>;

    /// Replace an existing record
    async fn update<T: Record>(&self, record: &T) -> Result<(), StoreError>;

    /// Set an entity's phase stamp, provided its stored phase still equals
    /// `expected`. Returns the updated entity.
    async fn update_phase<T: Tracked>(
        &self,
        id: &str,
        expected: &str,
        stamp: PhaseStamp,
    ) -> Result<T, StoreError>;

    /// Delete a record; returns whether it existed
    async fn delete<T: Record>(&self, id: &str) -> Result<bool, StoreError>;

    /// Delete every record of a collection; returns how many were removed
    async fn truncate<T: Record>(&self) -> Result<usize, StoreError>;

    /// Record an assignment. Re-assigning the same pair is a no-op.
    async fn assign(&self, assignment: &Assignment) -> Result<(), StoreError>;

    /// Remove an assignment; returns whether it existed
    async fn unassign(&self, lead_id: &str, property_id: &str) -> Result<bool, StoreError>;

    /// All assignments, sorted by lead then property
    async fn assignments(&self) -> Result<Vec<Assignment>, StoreError>;

    /// Remove every assignment; returns how many were removed
    async fn clear_assignments(&self) -> Result<usize, StoreError>;
}

/// Apply the expected-phase guard to a loaded record
pub(crate) fn guarded_stamp<T: Tracked>(
    mut record: T,
    id: &str,
    expected: &str,
    stamp: PhaseStamp,
) -> Result<T, StoreError> {
    let actual = &record.stamp().phase;
    if actual != expected {
        return Err(StoreError::StaleEntity {
            collection: T::COLLECTION,
            id: id.to_string(),
            expected: expected.to_string(),
            actual: actual.clone(),
        });
    }
    *record.stamp_mut() = stamp;
    Ok(record)
}
