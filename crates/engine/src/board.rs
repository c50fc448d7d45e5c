// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board service
//!
//! Every write goes through the phase registry first; the store is only
//! called once validation has passed, so a rejected request leaves the
//! stored entity exactly as it was.

use crate::error::EngineError;
use rb_adapters::{EntityStore, Filter};
use rb_core::{
    Clock, IdGen, Lead, NewLead, NewProperty, Phase, PhaseRegistry, PipelineKind, Property,
    Tracked,
};
use std::sync::Arc;
use tracing::info;

/// Board service over an entity store
pub struct Board<S, C: Clock, I: IdGen> {
    pub(crate) store: S,
    pub(crate) registry: Arc<PhaseRegistry>,
    pub(crate) clock: C,
    pub(crate) id_gen: I,
}

impl<S, C, I> Board<S, C, I>
where
    S: EntityStore,
    C: Clock,
    I: IdGen,
{
    pub fn new(store: S, registry: Arc<PhaseRegistry>, clock: C, id_gen: I) -> Self {
        Self {
            store,
            registry,
            clock,
            id_gen,
        }
    }

    pub fn registry(&self) -> &PhaseRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a lead in its requested phase, or the initial lead phase
    pub async fn create_lead(&self, new: NewLead) -> Result<Lead, EngineError> {
        let id = self.id_gen.next(PipelineKind::Lead);
        let lead = Lead::create(id, new, &self.registry, &self.clock)?;
        self.store.create(&lead).await?;
        info!(id = %lead.id, phase = %lead.stamp.phase, "lead created");
        Ok(lead)
    }

    /// Create a property in its requested phase, or the initial property phase
    pub async fn create_property(&self, new: NewProperty) -> Result<Property, EngineError> {
        let id = self.id_gen.next(PipelineKind::Property);
        let property = Property::create(id, new, &self.registry, &self.clock)?;
        self.store.create(&property).await?;
        info!(id = %property.id, phase = %property.stamp.phase, "property created");
        Ok(property)
    }

    /// Load an entity by id
    pub async fn get<T: Tracked>(&self, id: &str) -> Result<T, EngineError> {
        self.store
            .get::<T>(id)
            .await?
            .ok_or_else(|| EngineError::not_found(T::KIND, id))
    }

    /// List entities, optionally only those in one phase (key or label).
    ///
    /// Stored phases are resolved too, so rows still holding a display
    /// label are listed under their phase.
    pub async fn list<T: Tracked>(&self, phase: Option<&str>) -> Result<Vec<T>, EngineError> {
        let all: Vec<T> = self.store.query(&Filter::all()).await?;
        let Some(reference) = phase else {
            return Ok(all);
        };
        let key = &self.registry.resolve(T::KIND, reference)?.key;
        Ok(all
            .into_iter()
            .filter(|entity| {
                self.registry
                    .resolve(T::KIND, &entity.stamp().phase)
                    .is_ok_and(|p| &p.key == key)
            })
            .collect())
    }

    /// Move an entity to another phase.
    ///
    /// The write carries the phase the entity was loaded in, so a move made
    /// concurrently by someone else fails as stale instead of being
    /// overwritten.
    pub async fn move_to<T: Tracked>(&self, id: &str, to: &str) -> Result<T, EngineError> {
        let current: T = self.get(id).await?;
        self.move_from(current, to).await
    }

    /// Move an entity one phase forward
    pub async fn advance<T: Tracked>(&self, id: &str) -> Result<T, EngineError> {
        let current: T = self.get(id).await?;
        let next = self
            .registry
            .next_phase(T::KIND, &current.stamp().phase)?
            .ok_or_else(|| end_of_pipeline(&current, "last"))?;
        let key = next.key.clone();
        self.move_from(current, &key).await
    }

    /// Move an entity one phase back
    pub async fn retreat<T: Tracked>(&self, id: &str) -> Result<T, EngineError> {
        let current: T = self.get(id).await?;
        let previous = self
            .registry
            .previous_phase(T::KIND, &current.stamp().phase)?
            .ok_or_else(|| end_of_pipeline(&current, "first"))?;
        let key = previous.key.clone();
        self.move_from(current, &key).await
    }

    /// Move an already loaded entity, guarded by the phase it was loaded in
    async fn move_from<T: Tracked>(&self, current: T, to: &str) -> Result<T, EngineError> {
        let moved = current.moved_to(&self.registry, to, &self.clock)?;
        if moved.stamp() == current.stamp() {
            return Ok(current);
        }

        let id = current.id();
        let from = &current.stamp().phase;
        let updated = self
            .store
            .update_phase::<T>(id, from, moved.stamp().clone())
            .await?;
        info!(
            kind = %T::KIND,
            id,
            from = %from,
            to = %updated.stamp().phase,
            "phase changed"
        );
        Ok(updated)
    }

    /// The phase an entity currently sits in
    pub fn phase_of<'a, T: Tracked>(&'a self, entity: &T) -> Result<&'a Phase, EngineError> {
        Ok(self.registry.resolve(T::KIND, &entity.stamp().phase)?)
    }

    /// Whole days the entity has spent in its current phase
    pub fn days_in_phase<T: Tracked>(&self, entity: &T) -> Result<i64, EngineError> {
        Ok(entity.days_in_phase(&self.clock)?)
    }

    /// Delete an entity together with its assignments.
    ///
    /// Returns whether the entity existed.
    pub async fn delete<T: Tracked>(&self, id: &str) -> Result<bool, EngineError> {
        for assignment in self.store.assignments().await? {
            let linked = match T::KIND {
                PipelineKind::Lead => assignment.lead_id == id,
                PipelineKind::Property => assignment.property_id == id,
            };
            if linked {
                self.store
                    .unassign(&assignment.lead_id, &assignment.property_id)
                    .await?;
            }
        }

        let existed = self.store.delete::<T>(id).await?;
        if existed {
            info!(collection = T::COLLECTION, id, "deleted");
        }
        Ok(existed)
    }
}

fn end_of_pipeline<T: Tracked>(entity: &T, end: &'static str) -> EngineError {
    EngineError::EndOfPipeline {
        kind: T::KIND,
        id: entity.id().to_string(),
        phase: entity.stamp().phase.clone(),
        end,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
