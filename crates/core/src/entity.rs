// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Leads, properties, and the links between them

use crate::clock::Clock;
use crate::error::PhaseError;
use crate::phase::PipelineKind;
use crate::registry::PhaseRegistry;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A value that can be persisted in an entity store
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (table) name
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
}

/// Where an entity sits in its pipeline and since when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStamp {
    /// Phase key. Rows imported from the dashboard may hold a display label
    /// until normalised.
    pub phase: String,
    pub phase_entered_at: DateTime<Utc>,
}

impl PhaseStamp {
    pub fn new(phase: impl Into<String>, entered_at: DateTime<Utc>) -> Self {
        Self {
            phase: phase.into(),
            phase_entered_at: entered_at,
        }
    }
}

/// An entity tracked through a pipeline
pub trait Tracked: Record {
    const KIND: PipelineKind;

    fn stamp(&self) -> &PhaseStamp;

    fn stamp_mut(&mut self) -> &mut PhaseStamp;

    /// Name shown on a board card
    fn title(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;

    /// Copy of this entity with the phase moved to `to`.
    ///
    /// `to` may be a key or a display label; the key is stored. Moving to
    /// the current phase returns an unchanged copy, keeping the original
    /// entry time.
    fn moved_to(
        &self,
        registry: &PhaseRegistry,
        to: &str,
        clock: &impl Clock,
    ) -> Result<Self, PhaseError> {
        let current = &self.stamp().phase;
        registry.validate_transition(Self::KIND, current, to)?;

        let source = registry.resolve(Self::KIND, current)?;
        let target = registry.resolve(Self::KIND, to)?;
        let mut moved = self.clone();
        if source.key != target.key {
            *moved.stamp_mut() = PhaseStamp::new(target.key.clone(), clock.now());
        }
        Ok(moved)
    }

    fn days_in_phase(&self, clock: &impl Clock) -> Result<i64, PhaseError> {
        PhaseRegistry::days_in_phase(self.stamp().phase_entered_at, clock.now())
    }
}

/// Resolve an optional phase reference to the key to store
fn initial_key(
    registry: &PhaseRegistry,
    kind: PipelineKind,
    phase: Option<&str>,
) -> Result<String, PhaseError> {
    let phase = match phase {
        Some(reference) => registry.resolve(kind, reference)?,
        None => registry.initial_phase(kind),
    };
    Ok(phase.key.clone())
}

/// A prospective tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Monthly budget in whole euros
    #[serde(default)]
    pub budget: Option<u32>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub stamp: PhaseStamp,
}

/// Input for creating a lead
#[derive(Debug, Clone, Default)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub budget: Option<u32>,
    /// Starting phase, key or label; the initial phase when absent
    pub phase: Option<String>,
}

impl NewLead {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn in_phase(self, phase: impl Into<String>) -> Self {
        Self {
            phase: Some(phase.into()),
            ..self
        }
    }
}

impl Lead {
    pub fn create(
        id: impl Into<String>,
        new: NewLead,
        registry: &PhaseRegistry,
        clock: &impl Clock,
    ) -> Result<Self, PhaseError> {
        let phase = initial_key(registry, PipelineKind::Lead, new.phase.as_deref())?;
        let now = clock.now();
        Ok(Self {
            id: id.into(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            budget: new.budget,
            created_at: now,
            stamp: PhaseStamp::new(phase, now),
        })
    }
}

impl Record for Lead {
    const COLLECTION: &'static str = "leads";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Tracked for Lead {
    const KIND: PipelineKind = PipelineKind::Lead;

    fn stamp(&self) -> &PhaseStamp {
        &self.stamp
    }

    fn stamp_mut(&mut self) -> &mut PhaseStamp {
        &mut self.stamp
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A rental unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub address: String,
    /// Monthly rent in whole euros
    pub monthly_rent: u32,
    #[serde(default)]
    pub bedrooms: Option<u8>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub stamp: PhaseStamp,
}

/// Input for creating a property
#[derive(Debug, Clone, Default)]
pub struct NewProperty {
    pub title: String,
    pub address: String,
    pub monthly_rent: u32,
    pub bedrooms: Option<u8>,
    pub phase: Option<String>,
}

impl NewProperty {
    pub fn new(title: impl Into<String>, address: impl Into<String>, monthly_rent: u32) -> Self {
        Self {
            title: title.into(),
            address: address.into(),
            monthly_rent,
            ..Self::default()
        }
    }

    pub fn in_phase(self, phase: impl Into<String>) -> Self {
        Self {
            phase: Some(phase.into()),
            ..self
        }
    }
}

impl Property {
    pub fn create(
        id: impl Into<String>,
        new: NewProperty,
        registry: &PhaseRegistry,
        clock: &impl Clock,
    ) -> Result<Self, PhaseError> {
        let phase = initial_key(registry, PipelineKind::Property, new.phase.as_deref())?;
        let now = clock.now();
        Ok(Self {
            id: id.into(),
            title: new.title,
            address: new.address,
            monthly_rent: new.monthly_rent,
            bedrooms: new.bedrooms,
            created_at: now,
            stamp: PhaseStamp::new(phase, now),
        })
    }
}

impl Record for Property {
    const COLLECTION: &'static str = "properties";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Tracked for Property {
    const KIND: PipelineKind = PipelineKind::Property;

    fn stamp(&self) -> &PhaseStamp {
        &self.stamp
    }

    fn stamp_mut(&mut self) -> &mut PhaseStamp {
        &mut self.stamp
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A lead matched to a property.
///
/// Identified by the (lead, property) pair. Never mutated; removed only by
/// an explicit unassignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub lead_id: String,
    pub property_id: String,
    pub created_at: DateTime<Utc>,
}

impl Assignment {
    pub fn new(
        lead_id: impl Into<String>,
        property_id: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            lead_id: lead_id.into(),
            property_id: property_id.into(),
            created_at,
        }
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
