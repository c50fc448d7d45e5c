// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::store::{EntityStore, Filter, StoreError};
use async_trait::async_trait;
use rb_core::{Assignment, PhaseStamp, Record, Tracked};
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds tracing to any EntityStore
#[derive(Clone)]
pub struct TracedEntityStore<S> {
    inner: S,
}

impl<S> TracedEntityStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

/// Run a store call, logging its outcome and duration
async fn timed<T, F>(op: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    let start = Instant::now();
    let result = op.await;
    let elapsed_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => tracing::debug!(elapsed_ms, "ok"),
        Err(e @ StoreError::StaleEntity { .. }) => tracing::warn!(elapsed_ms, error = %e, "rejected"),
        Err(e) => tracing::error!(elapsed_ms, error = %e, "failed"),
    }
    result
}

#[async_trait]
impl<S: EntityStore> EntityStore for TracedEntityStore<S> {
    async fn create<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.create", collection = T::COLLECTION, id = record.id());
        timed(self.inner.create(record)).instrument(span).await
    }

    async fn get<T: Record>(&self, id: &str) -> Result<Option<T>, StoreError> {
        let span = tracing::debug_span!("store.get", collection = T::COLLECTION, id);
        let result = self.inner.get::<T>(id).instrument(span).await;
        tracing::trace!(
            collection = T::COLLECTION,
            id,
            found = ?result.as_ref().ok().map(Option::is_some),
            "looked up"
        );
        result
    }

    async fn query<T: Tracked>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let span = tracing::debug_span!(
            "store.query",
            collection = T::COLLECTION,
            phase = filter.phase.as_deref()
        );
        let result = timed(self.inner.query::<T>(filter)).instrument(span).await;
        tracing::trace!(
            collection = T::COLLECTION,
            count = result.as_ref().map(Vec::len).ok(),
            "queried"
        );
        result
    }

    async fn update<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        let span = tracing::info_span!("store.update", collection = T::COLLECTION, id = record.id());
        timed(self.inner.update(record)).instrument(span).await
    }

    async fn update_phase<T: Tracked>(
        &self,
        id: &str,
        expected: &str,
        stamp: PhaseStamp,
    ) -> Result<T, StoreError> {
        let span = tracing::info_span!(
            "store.update_phase",
            collection = T::COLLECTION,
            id,
            expected,
            phase = %stamp.phase
        );
        timed(self.inner.update_phase::<T>(id, expected, stamp))
            .instrument(span)
            .await
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let span = tracing::info_span!("store.delete", collection = T::COLLECTION, id);
        timed(self.inner.delete::<T>(id)).instrument(span).await
    }

    async fn truncate<T: Record>(&self) -> Result<usize, StoreError> {
        let span = tracing::info_span!("store.truncate", collection = T::COLLECTION);
        let result = timed(self.inner.truncate::<T>()).instrument(span).await;
        if let Ok(removed) = &result {
            tracing::info!(collection = T::COLLECTION, removed, "truncated");
        }
        result
    }

    async fn assign(&self, assignment: &Assignment) -> Result<(), StoreError> {
        let span = tracing::info_span!(
            "store.assign",
            lead_id = %assignment.lead_id,
            property_id = %assignment.property_id
        );
        timed(self.inner.assign(assignment)).instrument(span).await
    }

    async fn unassign(&self, lead_id: &str, property_id: &str) -> Result<bool, StoreError> {
        let span = tracing::info_span!("store.unassign", lead_id, property_id);
        timed(self.inner.unassign(lead_id, property_id))
            .instrument(span)
            .await
    }

    async fn assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        let span = tracing::debug_span!("store.assignments");
        timed(self.inner.assignments()).instrument(span).await
    }

    async fn clear_assignments(&self) -> Result<usize, StoreError> {
        let span = tracing::info_span!("store.clear_assignments");
        timed(self.inner.clear_assignments()).instrument(span).await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
