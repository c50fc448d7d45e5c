// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake entity store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{guarded_stamp, EntityStore, Filter, StoreError};
use async_trait::async_trait;
use rb_core::{Assignment, PhaseStamp, Record, Tracked};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Recorded store call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create { collection: String, id: String },
    Update { collection: String, id: String },
    UpdatePhase { collection: String, id: String, phase: String },
    Delete { collection: String, id: String },
    Truncate { collection: String },
    Assign { lead_id: String, property_id: String },
    Unassign { lead_id: String, property_id: String },
    ClearAssignments,
}

#[derive(Default)]
struct FakeState {
    // (collection, id) -> record as JSON
    records: BTreeMap<(String, String), Value>,
    assignments: BTreeMap<(String, String), Assignment>,
    calls: Vec<StoreCall>,
    failing_ids: HashSet<String>,
    // id -> phase written behind the reader's back after its next get
    moves_after_read: HashMap<String, String>,
}

/// In-memory entity store for testing
#[derive(Clone, Default)]
pub struct FakeEntityStore {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeEntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded write calls
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state().calls.clone()
    }

    /// Make every write touching `id` fail with a backend error
    pub fn fail_writes_for(&self, id: impl Into<String>) {
        self.state().failing_ids.insert(id.into());
    }

    /// After the next `get` of `id`, change its stored phase to `phase`.
    ///
    /// The reader gets the record as it was, which simulates another writer
    /// moving the entity between a load and the write that follows it.
    pub fn move_after_read(&self, id: impl Into<String>, phase: impl Into<String>) {
        self.state()
            .moves_after_read
            .insert(id.into(), phase.into());
    }

    /// Insert a record without any checks or call recording.
    ///
    /// Lets tests plant rows the engine would never write itself, such as
    /// legacy phase labels.
    pub fn insert_raw<T: Record>(&self, record: &T) {
        if let Ok(value) = serde_json::to_value(record) {
            self.state()
                .records
                .insert((T::COLLECTION.to_string(), record.id().to_string()), value);
        }
    }

    /// Number of records in a collection
    pub fn count<T: Record>(&self) -> usize {
        self.state()
            .records
            .keys()
            .filter(|(collection, _)| collection == T::COLLECTION)
            .count()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FakeState {
    fn check(&self, ids: &[&str]) -> Result<(), StoreError> {
        match ids.iter().find(|id| self.failing_ids.contains(**id)) {
            Some(id) => Err(StoreError::Backend(format!("injected failure for {}", id))),
            None => Ok(()),
        }
    }

    fn key<T: Record>(id: &str) -> (String, String) {
        (T::COLLECTION.to_string(), id.to_string())
    }
}

#[async_trait]
impl EntityStore for FakeEntityStore {
    async fn create<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::Create {
            collection: T::COLLECTION.to_string(),
            id: record.id().to_string(),
        });
        state.check(&[record.id()])?;

        let key = FakeState::key::<T>(record.id());
        if state.records.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                collection: T::COLLECTION,
                id: record.id().to_string(),
            });
        }
        state.records.insert(key, serde_json::to_value(record)?);
        Ok(())
    }

    async fn get<T: Record>(&self, id: &str) -> Result<Option<T>, StoreError> {
        let mut state = self.state();
        let key = FakeState::key::<T>(id);
        let Some(value) = state.records.get(&key).cloned() else {
            return Ok(None);
        };
        let record = serde_json::from_value(value)?;
        if let Some(phase) = state.moves_after_read.remove(id) {
            if let Some(Value::Object(fields)) = state.records.get_mut(&key) {
                fields.insert("phase".to_string(), Value::String(phase));
            }
        }
        Ok(Some(record))
    }

    async fn query<T: Tracked>(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let state = self.state();
        let mut records = Vec::new();
        for ((collection, _), value) in &state.records {
            if collection != T::COLLECTION {
                continue;
            }
            let record: T = serde_json::from_value(value.clone())?;
            if filter.matches(&record) {
                records.push(record);
            }
        }
        Ok(records)
    }

    async fn update<T: Record>(&self, record: &T) -> Result<(), StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::Update {
            collection: T::COLLECTION.to_string(),
            id: record.id().to_string(),
        });
        state.check(&[record.id()])?;

        let key = FakeState::key::<T>(record.id());
        if !state.records.contains_key(&key) {
            return Err(StoreError::not_found::<T>(record.id()));
        }
        state.records.insert(key, serde_json::to_value(record)?);
        Ok(())
    }

    async fn update_phase<T: Tracked>(
        &self,
        id: &str,
        expected: &str,
        stamp: PhaseStamp,
    ) -> Result<T, StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::UpdatePhase {
            collection: T::COLLECTION.to_string(),
            id: id.to_string(),
            phase: stamp.phase.clone(),
        });
        state.check(&[id])?;

        let key = FakeState::key::<T>(id);
        let current: T = match state.records.get(&key) {
            Some(value) => serde_json::from_value(value.clone())?,
            None => return Err(StoreError::not_found::<T>(id)),
        };
        let updated = guarded_stamp(current, id, expected, stamp)?;
        state.records.insert(key, serde_json::to_value(&updated)?);
        Ok(updated)
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<bool, StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::Delete {
            collection: T::COLLECTION.to_string(),
            id: id.to_string(),
        });
        state.check(&[id])?;
        Ok(state.records.remove(&FakeState::key::<T>(id)).is_some())
    }

    async fn truncate<T: Record>(&self) -> Result<usize, StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::Truncate {
            collection: T::COLLECTION.to_string(),
        });
        let before = state.records.len();
        state
            .records
            .retain(|(collection, _), _| collection != T::COLLECTION);
        Ok(before - state.records.len())
    }

    async fn assign(&self, assignment: &Assignment) -> Result<(), StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::Assign {
            lead_id: assignment.lead_id.clone(),
            property_id: assignment.property_id.clone(),
        });
        state.check(&[&assignment.lead_id, &assignment.property_id])?;
        state
            .assignments
            .entry((assignment.lead_id.clone(), assignment.property_id.clone()))
            .or_insert_with(|| assignment.clone());
        Ok(())
    }

    async fn unassign(&self, lead_id: &str, property_id: &str) -> Result<bool, StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::Unassign {
            lead_id: lead_id.to_string(),
            property_id: property_id.to_string(),
        });
        state.check(&[lead_id, property_id])?;
        Ok(state
            .assignments
            .remove(&(lead_id.to_string(), property_id.to_string()))
            .is_some())
    }

    async fn assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        Ok(self.state().assignments.values().cloned().collect())
    }

    async fn clear_assignments(&self) -> Result<usize, StoreError> {
        let mut state = self.state();
        state.calls.push(StoreCall::ClearAssignments);
        let removed = state.assignments.len();
        state.assignments.clear();
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
